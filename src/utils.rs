//! Common tools

/// Largest contrast level the controller accepts (6 bits)
pub const MAX_CONTRAST: u8 = 0b0011_1111;

/// Size of the string staging buffer, terminator included
pub const STRING_BUFFER_LEN: usize = 20;

/// How many characters [`put_string`](crate::lcd::Lcd::put_string) will write at most
pub const MAX_VISIBLE_CHARS: usize = STRING_BUFFER_LEN - 1;

/// Contrast bits 5:4, moved down to bits 1:0
pub fn contrast_high_bits(level: u8) -> u8 {
    (level & 0b0011_0000) >> 4
}

/// Contrast bits 3:0
pub fn contrast_low_bits(level: u8) -> u8 {
    level & 0b0000_1111
}

/// Whether `addr` points into DDRAM of a 2-line display
///
/// Line 1 is 0x00..=0x27, line 2 is 0x40..=0x67.
pub fn is_valid_ddram_address(addr: u8) -> bool {
    matches!(addr, 0x00..=0x27 | 0x40..=0x67)
}

/// The bytes of `text` that fit the staging buffer
///
/// Stops at the first NUL byte or after [`MAX_VISIBLE_CHARS`] bytes, whichever
/// comes first. The second value is how many bytes were cut off by the length
/// limit (bytes after a NUL are not counted, they were never meant to be shown).
pub fn visible_bytes(text: &str) -> (&[u8], usize) {
    let bytes = text.as_bytes();
    let shown_len = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());

    if shown_len > MAX_VISIBLE_CHARS {
        (&bytes[..MAX_VISIBLE_CHARS], shown_len - MAX_VISIBLE_CHARS)
    } else {
        (&bytes[..shown_len], 0)
    }
}
