/*!
# ST7032 Driver

Basic Usage:

1. Initialize a "sender" <br/>
    This crate include an I2C sender [`sender::I2cSender`], which talks to the ST7032 at address 0x3E.

    You can use any driver implemented [`sender::SendCommand`] instead.
<br/>
<br/>
2. Use [`lcd::Lcd::new()`] to create a [`lcd::Lcd`], then call [`lcd::Lcd::begin()`] once to initialize the hardware
<br/>
<br/>
3. use any methods provide by [`lcd::Lcd`] to control the display

Bus failures, over-long strings and out-of-range arguments never stop the driver.
They are counted, logged (with the `defmt` feature) and passed to an optional hook,
see [`lcd::Lcd::set_error_hook()`].
*/

#![no_std]
#![warn(missing_docs)]

pub mod builder;
pub mod command;
pub mod error;
pub mod lcd;
pub mod sender;
pub mod utils;
