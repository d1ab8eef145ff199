//! Built-in sender
//! If you want to drive the LCD over another bus, you will need to implement [`SendCommand`] trait

use embedded_hal::delay::DelayNs;

use crate::command::Command;

mod i2c_sender;

pub use i2c_sender::{I2cSender, DEFAULT_ADDRESS};

/// [`SendCommand`] is the trait a sender should implement to communicate with the hardware
pub trait SendCommand {
    /// Error of the underlying bus
    type Error;

    /// Put one [`Command`] on the bus as a single transaction
    fn send(&mut self, command: Command) -> Result<(), Self::Error>;

    /// Send command, then wait specific duration
    ///
    /// The wait happens even when the transaction failed, so the timing seen by
    /// the controller does not depend on the bus outcome.
    fn send_and_delay(
        &mut self,
        command: Command,
        delayer: &mut impl DelayNs,
        delay_us: u32,
    ) -> Result<(), Self::Error> {
        let result = self.send(command);
        delayer.delay_us(delay_us);
        result
    }
}
