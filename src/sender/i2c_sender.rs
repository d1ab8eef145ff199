use embedded_hal::i2c::I2c;

use crate::command::Command;

use super::SendCommand;

/// 7 bit I2C address of the ST7032
pub const DEFAULT_ADDRESS: u8 = 0x3E;

// I2C frame:
// S / ADDR+W / CONTROL (Co=0, RS) / DATA / P

/// Sends every [`Command`] as `[control byte, payload]` in its own write transaction
pub struct I2cSender<'a, I2cLcd: I2c> {
    i2c: &'a mut I2cLcd,
    addr: u8,
}

impl<'a, I2cLcd: I2c> I2cSender<'a, I2cLcd> {
    /// Use the fixed ST7032 address
    pub fn new(i2c: &'a mut I2cLcd) -> Self {
        Self::new_with_address(i2c, DEFAULT_ADDRESS)
    }

    /// For modules that remap the address
    pub fn new_with_address(i2c: &'a mut I2cLcd, addr: u8) -> Self {
        Self { i2c, addr }
    }

    /// Address commands are sent to
    pub fn get_address(&self) -> u8 {
        self.addr
    }
}

impl<'a, I2cLcd: I2c> SendCommand for I2cSender<'a, I2cLcd> {
    type Error = I2cLcd::Error;

    fn send(&mut self, command: Command) -> Result<(), Self::Error> {
        self.i2c.write(self.addr, &command.to_bytes())
    }
}
