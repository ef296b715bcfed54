//! Unit conversion utilities.
//!
//! Drawing extents are kept in pixels on the object model and only converted
//! to English Metric Units (EMU) when the markup is written.

pub const EMUS_PER_INCH: i64 = 914_400;

/// Screen resolution assumed for pixel measurements.
pub const DEFAULT_DPI: u32 = 96;

/// Convert pixels at the given resolution to EMU.
///
/// Uses truncating integer division so that the result matches what
/// spreadsheet applications compute for the same pixel size.
#[inline]
pub const fn px_to_emu(px: u32, dpi: u32) -> i64 {
    px as i64 * EMUS_PER_INCH / dpi as i64
}

/// Convert pixels at 96 DPI to EMU (`px * 914400 / 96`).
///
/// # Examples
///
/// ```
/// use sheetdraw::common::unit::px_to_emu_96;
/// assert_eq!(px_to_emu_96(100), 952_500);
/// assert_eq!(px_to_emu_96(1), 9_525);
/// ```
#[inline]
pub const fn px_to_emu_96(px: u32) -> i64 {
    px_to_emu(px, DEFAULT_DPI)
}
