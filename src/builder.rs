//! Construction and init config of a [`Lcd`]

use embedded_hal::delay::DelayNs;

use crate::{lcd::Lcd, sender::SendCommand, utils::MAX_CONTRAST};

/// Contrast written by [`Lcd::begin`] unless configured otherwise
pub const DEFAULT_CONTRAST: u8 = 0x1F;

/// [`Config`] is the init config of a [`Lcd`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    contrast: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contrast: DEFAULT_CONTRAST,
        }
    }
}

#[allow(missing_docs)]
impl Config {
    pub fn get_contrast(&self) -> u8 {
        self.contrast
    }

    /// Levels above 63 are accepted here and masked when sent, same as [`Lcd::set_contrast`]
    pub fn set_contrast(mut self, contrast: u8) -> Self {
        self.contrast = contrast;
        self
    }

    pub fn contrast_in_range(&self) -> bool {
        self.contrast <= MAX_CONTRAST
    }
}

impl<'a, 'b, Sender, Delayer> Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand,
    Delayer: DelayNs,
{
    /// Create a [`Lcd`] driver, nothing is sent to the hardware until [`Lcd::begin`]
    pub fn new(sender: &'a mut Sender, delayer: &'b mut Delayer, config: Config) -> Self {
        Lcd::from_parts(sender, delayer, config)
    }
}
