use core::fmt;

use embedded_hal::delay::DelayNs;

use crate::{
    builder::Config,
    command::{Command, CommandSet, Opcode},
    error::{Error, ErrorHook},
    sender::SendCommand,
    utils::{is_valid_ddram_address, visible_bytes, MAX_CONTRAST},
};

/// Wait after power up before the first command
pub const POWER_ON_DELAY_MS: u32 = 50;
/// Wait for the voltage follower to settle
pub const FOLLOWER_SETTLE_DELAY_MS: u32 = 200;
/// Wait after the final clear of the init sequence
pub const INIT_CLEAR_DELAY_MS: u32 = 10;
/// Wait after every command or data write
pub const EXECUTION_DELAY_US: u32 = 800;

/// Driver of one ST7032 display
///
/// Every operation blocks for its bus transaction plus [`EXECUTION_DELAY_US`].
/// Failures never stop the driver, they are counted and passed to the error hook.
pub struct Lcd<'a, 'b, Sender: SendCommand, Delayer: DelayNs> {
    sender: &'a mut Sender,
    delayer: &'b mut Delayer,
    config: Config,
    contrast: u8,
    initialized: bool,
    reported_count: u32,
    error_hook: Option<ErrorHook<Sender::Error>>,
}

impl<'a, 'b, Sender: SendCommand, Delayer: DelayNs> Lcd<'a, 'b, Sender, Delayer> {
    pub(crate) fn from_parts(
        sender: &'a mut Sender,
        delayer: &'b mut Delayer,
        config: Config,
    ) -> Self {
        Self {
            sender,
            delayer,
            contrast: config.get_contrast(),
            config,
            initialized: false,
            reported_count: 0,
            error_hook: None,
        }
    }

    /// Give back the sender and delayer, the bus is left as it is
    pub fn release(self) -> (&'a mut Sender, &'b mut Delayer) {
        (self.sender, self.delayer)
    }
}

impl<'a, 'b, Sender: SendCommand, Delayer: DelayNs> Lcd<'a, 'b, Sender, Delayer> {
    /// Power-on initialization, call once before anything else
    ///
    /// The command order and the three waits follow the ST7032 power-on timing.
    pub fn begin(&mut self) {
        let contrast = self.config.get_contrast();

        #[cfg(feature = "defmt")]
        defmt::debug!("st7032: begin, contrast {=u8}", contrast);

        if contrast > MAX_CONTRAST {
            self.report(Error::ContrastOutOfRange(contrast));
        }

        self.delayer.delay_ms(POWER_ON_DELAY_MS);

        self.write_command(Opcode::TwoLine);
        self.write_command(Opcode::TwoLineIs1);
        self.write_command(Opcode::InternalOscBias);
        self.write_command(CommandSet::ContrastLow(contrast));
        self.write_command(CommandSet::ContrastHigh(contrast));
        self.write_command(Opcode::FollowerControl);

        self.delayer.delay_ms(FOLLOWER_SETTLE_DELAY_MS);

        self.write_command(Opcode::TwoLine);
        self.write_command(Opcode::DisplayOn);
        self.write_command(Opcode::ReturnHome);
        self.write_command(Opcode::EntryModeIncrement);
        self.write_command(Opcode::ClearDisplay);

        self.delayer.delay_ms(INIT_CLEAR_DELAY_MS);

        self.contrast = contrast;
        self.initialized = true;
    }

    /// Clear DDRAM, cursor goes back to address 0
    pub fn clear(&mut self) {
        self.write_command(Opcode::ClearDisplay);
    }

    /// Cursor back to address 0, DDRAM untouched
    pub fn return_home(&mut self) {
        self.write_command(Opcode::ReturnHome);
    }

    #[allow(missing_docs)]
    pub fn display_on(&mut self) {
        self.write_command(Opcode::DisplayOn);
    }

    #[allow(missing_docs)]
    pub fn display_off(&mut self) {
        self.write_command(Opcode::DisplayOff);
    }

    /// Set contrast, `level` should be in 0..=63
    ///
    /// Bits above 5 are masked away. The extended instruction set is only
    /// selected for the two contrast writes.
    pub fn set_contrast(&mut self, level: u8) {
        if level > MAX_CONTRAST {
            self.report(Error::ContrastOutOfRange(level));
        }

        self.write_command(Opcode::TwoLineIs1);
        self.write_command(CommandSet::ContrastHigh(level));
        self.write_command(CommandSet::ContrastLow(level));
        self.write_command(Opcode::TwoLine);

        self.contrast = level;
    }

    /// Move cursor to a raw DDRAM address
    ///
    /// Line 1 starts at 0x00, line 2 at 0x40. Addresses outside DDRAM are
    /// still sent as is.
    pub fn set_cursor(&mut self, position: u8) {
        self.write_command(CommandSet::SetDDRAM(position));

        if !is_valid_ddram_address(position) {
            self.report(Error::CursorOutOfRange(position));
        }
    }

    /// Write one character code at the cursor
    pub fn put_char(&mut self, c: u8) {
        self.write_data(c);
    }

    /// Write at most 19 bytes of `text`, stopping early at a NUL byte
    pub fn put_string(&mut self, text: &str) {
        let (shown, dropped) = visible_bytes(text);

        shown.iter().for_each(|&byte| self.put_char(byte));

        if dropped > 0 {
            self.report(Error::Truncated { dropped });
        }
    }

    /// Wait for specified milliseconds
    pub fn delay_ms(&mut self, ms: u32) {
        self.delayer.delay_ms(ms);
    }

    /// Wait for specified microseconds
    pub fn delay_us(&mut self, us: u32) {
        self.delayer.delay_us(us)
    }
}

impl<'a, 'b, Sender: SendCommand, Delayer: DelayNs> Lcd<'a, 'b, Sender, Delayer> {
    /// Whether [`Lcd::begin`] has run, nothing checks it
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Contrast last written, or the configured one before [`Lcd::begin`]
    ///
    /// [`Lcd::begin`] always writes the configured contrast, not this one.
    pub fn get_contrast(&self) -> u8 {
        self.contrast
    }

    /// Number of conditions reported so far
    ///
    /// Counts every [`Error`] passed to the hook, not only bus failures.
    pub fn reported_count(&self) -> u32 {
        self.reported_count
    }

    /// Install a hook that sees every reported condition
    pub fn set_error_hook(&mut self, hook: ErrorHook<Sender::Error>) {
        self.error_hook = Some(hook);
    }

    #[allow(missing_docs)]
    pub fn clear_error_hook(&mut self) {
        self.error_hook = None;
    }

    fn write_command(&mut self, command: impl Into<CommandSet>) {
        self.write(Command::from(command.into()));
    }

    fn write_data(&mut self, data: u8) {
        self.write(CommandSet::WriteDataToRAM(data).into());
    }

    fn write(&mut self, command: Command) {
        if let Err(e) = self
            .sender
            .send_and_delay(command, &mut *self.delayer, EXECUTION_DELAY_US)
        {
            self.report(Error::Bus(e));
        }
    }

    fn report(&mut self, error: Error<Sender::Error>) {
        self.reported_count = self.reported_count.saturating_add(1);

        #[cfg(feature = "defmt")]
        defmt::warn!("st7032: {}", error);

        if let Some(hook) = self.error_hook {
            hook(&error);
        }
    }
}

/// Streams every byte as a data write, without the [`Lcd::put_string`] length cap
impl<'a, 'b, Sender: SendCommand, Delayer: DelayNs> fmt::Write for Lcd<'a, 'b, Sender, Delayer> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        s.bytes().for_each(|byte| self.put_char(byte));
        Ok(())
    }
}
