//! ST7032 instruction encoding
//!
//! [`CommandSet`] is what the driver wants to do, [`Command`] is what goes on the wire:
//! a mode marker followed by exactly one payload byte.

use crate::utils::{contrast_high_bits, contrast_low_bits};

/// Fixed opcodes of the ST7032
///
/// Values are the raw instruction bytes. The two contrast opcodes and
/// [`Opcode::SetDdramAddress`] carry an operand in their low bits,
/// see [`CommandSet`] for how the operand is merged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Opcode {
    /// Clear DDRAM and move cursor to address 0
    ClearDisplay = 0x01,
    /// Move cursor to address 0 without touching DDRAM
    ReturnHome = 0x02,
    /// Entry mode: cursor moves right after each write, no display shift
    EntryModeIncrement = 0x06,
    /// Display off, cursor off, blink off
    DisplayOff = 0x08,
    /// Display on, cursor off, blink off
    DisplayOn = 0x0C,
    /// (IS1) Internal oscillator frequency, 1/5 bias
    InternalOscBias = 0x14,
    /// Function set: 8 bit bus, 2 lines, normal instruction set (IS0)
    TwoLine = 0x38,
    /// Function set: 8 bit bus, 2 lines, extended instruction set (IS1)
    TwoLineIs1 = 0x39,
    /// (IS1) Power/icon/contrast set, bits 1:0 hold contrast bits 5:4
    SetContrastHigh = 0x54,
    /// (IS1) Voltage follower on, amplifier ratio 4
    FollowerControl = 0x6C,
    /// (IS1) Contrast set, bits 3:0 hold contrast bits 3:0
    SetContrastLow = 0x70,
    /// Set DDRAM address, bits 6:0 hold the address
    SetDdramAddress = 0x80,
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> Self {
        op as u8
    }
}

/// Which register a byte is written to, selected by the leading control byte
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterSelection {
    /// Instruction register
    Command,
    /// Data register (DDRAM/CGRAM)
    Data,
}

impl RegisterSelection {
    /// The control byte sent before the payload
    pub fn marker(self) -> u8 {
        match self {
            RegisterSelection::Command => 0x00,
            RegisterSelection::Data => 0x40,
        }
    }
}

/// Everything the driver can ask the controller to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandSet {
    /// A plain opcode without operand
    Raw(Opcode),
    /// Contrast bits 5:4 of the given level, other bits are masked away
    ContrastHigh(u8),
    /// Contrast bits 3:0 of the given level, other bits are masked away
    ContrastLow(u8),
    /// Move cursor to a DDRAM address, passed through uninterpreted
    SetDDRAM(u8),
    /// Write one character code at the cursor
    WriteDataToRAM(u8),
}

/// One wire level write
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Command {
    rs: RegisterSelection,
    data: u8,
}

impl Command {
    pub(crate) fn new(rs: RegisterSelection, data: u8) -> Self {
        Self { rs, data }
    }

    /// Register this command is written to
    pub fn get_register_selection(&self) -> RegisterSelection {
        self.rs
    }

    /// Payload byte
    pub fn get_data(&self) -> u8 {
        self.data
    }

    /// The two bytes following the device address in the I2C transaction
    pub fn to_bytes(&self) -> [u8; 2] {
        [self.rs.marker(), self.data]
    }
}

impl From<Opcode> for CommandSet {
    fn from(op: Opcode) -> Self {
        CommandSet::Raw(op)
    }
}

impl From<Opcode> for Command {
    fn from(op: Opcode) -> Self {
        CommandSet::Raw(op).into()
    }
}

impl From<CommandSet> for Command {
    fn from(command: CommandSet) -> Self {
        match command {
            CommandSet::Raw(op) => Self::new(RegisterSelection::Command, op.into()),

            CommandSet::ContrastHigh(level) => Self::new(
                RegisterSelection::Command,
                u8::from(Opcode::SetContrastHigh) | contrast_high_bits(level),
            ),

            CommandSet::ContrastLow(level) => Self::new(
                RegisterSelection::Command,
                u8::from(Opcode::SetContrastLow) | contrast_low_bits(level),
            ),

            CommandSet::SetDDRAM(addr) => Self::new(
                RegisterSelection::Command,
                u8::from(Opcode::SetDdramAddress) | addr,
            ),

            CommandSet::WriteDataToRAM(data) => Self::new(RegisterSelection::Data, data),
        }
    }
}
