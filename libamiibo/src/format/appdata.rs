// libamiibo/src/format/appdata.rs

use super::parser;
use super::record::Record;
use super::writer;
use crate::Result;
use crate::constants::{APPDATA_CONFIG_LEN, APPDATA_CONFIG_RESERVED_LEN};

/// Owner of the amiibo's application data area.
///
/// Layout: title_id(8) + app_id(4) + counter(2) + unk(1) + unk2(1) +
/// tid_related(1) + reserved(0x2F)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDataConfig {
    pub title_id: u64,
    pub app_id: u32,
    pub counter: u16,
    /// Upper nibble of the raw settings flags byte.
    pub unk: u8,
    /// Always 2 in practice.
    pub unk2: u8,
    pub tid_related: u8,
    pub reserved: [u8; APPDATA_CONFIG_RESERVED_LEN],
}

impl Default for AppDataConfig {
    fn default() -> Self {
        Self {
            title_id: 0,
            app_id: 0,
            counter: 0,
            unk: 0,
            unk2: 0,
            tid_related: 0,
            reserved: [0; APPDATA_CONFIG_RESERVED_LEN],
        }
    }
}

impl Record for AppDataConfig {
    const NAME: &'static str = "AppDataConfig";
    const SIZE: usize = APPDATA_CONFIG_LEN;

    fn read_fields(data: &[u8]) -> Result<Self> {
        Ok(Self {
            title_id: parser::le_u64_at(data, 0x00)?,
            app_id: parser::le_u32_at(data, 0x08)?,
            counter: parser::le_u16_at(data, 0x0C)?,
            unk: parser::byte_at(data, 0x0E)?,
            unk2: parser::byte_at(data, 0x0F)?,
            tid_related: parser::byte_at(data, 0x10)?,
            reserved: parser::array_at(data, 0x11)?,
        })
    }

    fn write_fields(&self, out: &mut Vec<u8>) {
        writer::push_le_u64(out, self.title_id);
        writer::push_le_u32(out, self.app_id);
        writer::push_le_u16(out, self.counter);
        writer::push_u8(out, self.unk);
        writer::push_u8(out, self.unk2);
        writer::push_u8(out, self.tid_related);
        writer::push_bytes(out, &self.reserved);
    }
}
