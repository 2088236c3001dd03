// libamiibo/src/format/record.rs

use super::parser;
use crate::Result;

/// A fixed-size, fixed-offset binary record.
///
/// Implementors provide field-level `read_fields`/`write_fields`; the
/// provided methods add length checks and logging. Encoding writes exactly
/// `SIZE` bytes and decoding ignores anything past `SIZE`.
pub trait Record: Sized {
    /// Name used in log output.
    const NAME: &'static str;
    /// Encoded size in bytes.
    const SIZE: usize;

    /// Parse fields from `data`, which holds at least `SIZE` bytes.
    fn read_fields(data: &[u8]) -> Result<Self>;

    /// Append exactly `SIZE` bytes to `out`.
    fn write_fields(&self, out: &mut Vec<u8>);

    /// Decode a record from the start of `data`.
    fn decode(data: &[u8]) -> Result<Self> {
        parser::ensure_len(data, Self::SIZE)?;
        log::trace!("decoding {} ({} of {} bytes)", Self::NAME, Self::SIZE, data.len());
        Self::read_fields(&data[..Self::SIZE])
    }

    /// Encode into a freshly allocated buffer of `SIZE` bytes.
    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::SIZE);
        self.write_fields(&mut out);
        debug_assert_eq!(out.len(), Self::SIZE, "{} wrote wrong length", Self::NAME);
        out
    }

    /// Encode into the first `SIZE` bytes of `out`; the rest is untouched.
    fn encode_into(&self, out: &mut [u8]) -> Result<()> {
        parser::ensure_len(out, Self::SIZE)?;
        log::trace!("encoding {} into {} byte buffer", Self::NAME, out.len());
        out[..Self::SIZE].copy_from_slice(&self.to_bytes());
        Ok(())
    }
}
