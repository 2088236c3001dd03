// libamiibo/src/format/writer.rs
//! Append-only field writers, the mirror of `parser`.

use crate::date::CompactDate;

pub fn push_u8(out: &mut Vec<u8>, v: u8) {
    out.push(v);
}

pub fn push_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    out.extend_from_slice(bytes);
}

pub fn push_le_u16(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_le_bytes());
}

pub fn push_le_u32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_le_bytes());
}

pub fn push_le_u64(out: &mut Vec<u8>, v: u64) {
    out.extend_from_slice(&v.to_le_bytes());
}

/// Append UTF-16 code units in big-endian byte order.
pub fn push_be_u16s(out: &mut Vec<u8>, units: &[u16]) {
    for unit in units {
        out.extend_from_slice(&unit.to_be_bytes());
    }
}

/// Append an unpacked record date.
pub fn push_date(out: &mut Vec<u8>, date: CompactDate) {
    out.extend_from_slice(&date.to_record_bytes());
}
