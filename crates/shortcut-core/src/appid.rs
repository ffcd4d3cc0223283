//! App id calculation for non-Steam shortcuts.
//!
//! Steam identifies a shortcut's custom artwork by a 32-bit CRC of the
//! shortcut's exe path followed by its name, with the top bit forced on.

use flate2::Crc;

/// Bit forced on in every shortcut app id.
const SHORTCUT_ID_FLAG: u32 = 0x8000_0000;

/// Low half of a Big Picture id.
const BIG_PICTURE_ID_LOW: u64 = 0x0200_0000;

/// Calculate the app id for an exe and app name.
///
/// Total over all inputs: the same pair always yields the same id.
pub fn calculate_app_id(exe: &str, name: &str) -> u64 {
    let mut crc = Crc::new();
    crc.update(exe.as_bytes());
    crc.update(name.as_bytes());
    u64::from(crc.sum() | SHORTCUT_ID_FLAG)
}

/// Calculate the 64-bit id Big Picture mode uses for the shortcut.
pub fn calculate_big_picture_id(exe: &str, name: &str) -> u64 {
    (calculate_app_id(exe, name) << 32) | BIG_PICTURE_ID_LOW
}
