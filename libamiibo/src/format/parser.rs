// libamiibo/src/format/parser.rs

use crate::constants::DATE_RECORD_LEN;
use crate::date::CompactDate;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Copy a fixed-size array out of `data` at `idx`.
pub fn array_at<const N: usize>(data: &[u8], idx: usize) -> Result<[u8; N]> {
    let s = slice_at(data, idx, N)?;
    let mut arr = [0u8; N];
    arr.copy_from_slice(s);
    Ok(arr)
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Read a little-endian u16 at given index, with bounds checking.
pub fn le_u16_at(data: &[u8], idx: usize) -> Result<u16> {
    array_at(data, idx).map(u16::from_le_bytes)
}

pub fn le_u32_at(data: &[u8], idx: usize) -> Result<u32> {
    array_at(data, idx).map(u32::from_le_bytes)
}

pub fn le_u64_at(data: &[u8], idx: usize) -> Result<u64> {
    array_at(data, idx).map(u64::from_le_bytes)
}

/// Read `N` big-endian u16 code units starting at `idx`.
pub fn be_u16s_at<const N: usize>(data: &[u8], idx: usize) -> Result<[u16; N]> {
    let s = slice_at(data, idx, N * 2)?;
    let mut out = [0u16; N];
    for (unit, pair) in out.iter_mut().zip(s.chunks_exact(2)) {
        *unit = u16::from_be_bytes([pair[0], pair[1]]);
    }
    Ok(out)
}

/// Read an unpacked record date (year LE u16, month, day).
pub fn date_at(data: &[u8], idx: usize) -> Result<CompactDate> {
    array_at::<DATE_RECORD_LEN>(data, idx).map(CompactDate::from_record_bytes)
}
