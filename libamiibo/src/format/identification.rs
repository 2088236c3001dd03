// libamiibo/src/format/identification.rs

use super::parser;
use super::record::Record;
use super::writer;
use crate::Result;
use crate::constants::{TAG_IDENTIFICATION_LEN, TAG_IDENTIFICATION_RESERVED_LEN};

/// Amiibo identification block.
///
/// Layout: id(2) + char_variant(1) + series(1) + model_no(2) +
/// figure_type(1) + reserved(0x2F)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagIdentification {
    pub id: [u8; 2],
    pub char_variant: u8,
    pub series: u8,
    pub model_no: [u8; 2],
    pub figure_type: u8,
    pub reserved: [u8; TAG_IDENTIFICATION_RESERVED_LEN],
}

impl Default for TagIdentification {
    fn default() -> Self {
        Self {
            id: [0; 2],
            char_variant: 0,
            series: 0,
            model_no: [0; 2],
            figure_type: 0,
            reserved: [0; TAG_IDENTIFICATION_RESERVED_LEN],
        }
    }
}

impl Record for TagIdentification {
    const NAME: &'static str = "TagIdentification";
    const SIZE: usize = TAG_IDENTIFICATION_LEN;

    fn read_fields(data: &[u8]) -> Result<Self> {
        Ok(Self {
            id: parser::array_at(data, 0x00)?,
            char_variant: parser::byte_at(data, 0x02)?,
            series: parser::byte_at(data, 0x03)?,
            model_no: parser::array_at(data, 0x04)?,
            figure_type: parser::byte_at(data, 0x06)?,
            reserved: parser::array_at(data, 0x07)?,
        })
    }

    fn write_fields(&self, out: &mut Vec<u8>) {
        writer::push_bytes(out, &self.id);
        writer::push_u8(out, self.char_variant);
        writer::push_u8(out, self.series);
        writer::push_bytes(out, &self.model_no);
        writer::push_u8(out, self.figure_type);
        writer::push_bytes(out, &self.reserved);
    }
}
