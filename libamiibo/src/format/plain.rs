// libamiibo/src/format/plain.rs

use super::parser;
use super::record::Record;
use super::writer;
use super::{AmiiboSettings, AppDataConfig};
use crate::Result;
use crate::constants::{APPDATA_LEN, PLAIN_DATA_LEN};
use crate::date::CompactDate;

const SETTINGS_OFFSET: usize = 0x08;
const APPDATA_CONFIG_OFFSET: usize = SETTINGS_OFFSET + AmiiboSettings::SIZE;
const APPDATA_OFFSET: usize = APPDATA_CONFIG_OFFSET + AppDataConfig::SIZE;

/// Decrypted amiibo data in one contiguous block.
///
/// Layout: pagex4_byte3(1) + flag(1) + last_write_date(4) + write_counter(2) +
/// settings(0xA8) + appdata_config(0x40) + appdata(0xD8)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlainData {
    pub pagex4_byte3: u8,
    pub flag: u8,
    pub last_write_date: CompactDate,
    pub write_counter: u16,
    pub settings: AmiiboSettings,
    pub appdata_config: AppDataConfig,
    /// Application data, opaque.
    pub appdata: [u8; APPDATA_LEN],
}

impl Default for PlainData {
    fn default() -> Self {
        Self {
            pagex4_byte3: 0,
            flag: 0,
            last_write_date: CompactDate::default(),
            write_counter: 0,
            settings: AmiiboSettings::default(),
            appdata_config: AppDataConfig::default(),
            appdata: [0; APPDATA_LEN],
        }
    }
}

impl Record for PlainData {
    const NAME: &'static str = "PlainData";
    const SIZE: usize = PLAIN_DATA_LEN;

    fn read_fields(data: &[u8]) -> Result<Self> {
        Ok(Self {
            pagex4_byte3: parser::byte_at(data, 0x00)?,
            flag: parser::byte_at(data, 0x01)?,
            last_write_date: parser::date_at(data, 0x02)?,
            write_counter: parser::le_u16_at(data, 0x06)?,
            settings: AmiiboSettings::decode(parser::slice_at(
                data,
                SETTINGS_OFFSET,
                AmiiboSettings::SIZE,
            )?)?,
            appdata_config: AppDataConfig::decode(parser::slice_at(
                data,
                APPDATA_CONFIG_OFFSET,
                AppDataConfig::SIZE,
            )?)?,
            appdata: parser::array_at(data, APPDATA_OFFSET)?,
        })
    }

    fn write_fields(&self, out: &mut Vec<u8>) {
        writer::push_u8(out, self.pagex4_byte3);
        writer::push_u8(out, self.flag);
        writer::push_date(out, self.last_write_date);
        writer::push_le_u16(out, self.write_counter);
        self.settings.write_fields(out);
        self.appdata_config.write_fields(out);
        writer::push_bytes(out, &self.appdata);
    }
}
