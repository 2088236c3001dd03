// libamiibo/src/format/config.rs

use super::parser;
use super::record::Record;
use super::writer;
use crate::Result;
use crate::constants::{AMIIBO_CONFIG_LEN, AMIIBO_CONFIG_RESERVED_LEN, APPDATA_LEN};
use crate::date::CompactDate;
use crate::types::{AmiiboType, CharacterId};

/// General amiibo configuration.
///
/// Layout: last_write_date(4) + write_counter(2) + character_id(3) +
/// series(1) + amiibo_id(2) + kind(1) + pagex4_byte3(1) + appdata_size(2) +
/// reserved(0x30)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmiiboConfig {
    pub last_write_date: CompactDate,
    pub write_counter: u16,
    pub character_id: CharacterId,
    pub series: u8,
    /// Shared by identical amiibo; sometimes the only thing telling two
    /// releases of the same character apart.
    pub amiibo_id: [u8; 2],
    /// Raw form factor byte, see [`AmiiboConfig::amiibo_type`].
    pub kind: u8,
    pub pagex4_byte3: u8,
    /// The NFC module always writes 0xD8 here; not validated on decode.
    pub appdata_size: u16,
    /// Cleared by the NFC module, never written afterwards.
    pub reserved: [u8; AMIIBO_CONFIG_RESERVED_LEN],
}

impl Default for AmiiboConfig {
    fn default() -> Self {
        Self {
            last_write_date: CompactDate::default(),
            write_counter: 0,
            character_id: CharacterId::default(),
            series: 0,
            amiibo_id: [0; 2],
            kind: 0,
            pagex4_byte3: 0,
            appdata_size: 0,
            reserved: [0; AMIIBO_CONFIG_RESERVED_LEN],
        }
    }
}

impl AmiiboConfig {
    /// Appdata size the NFC module writes.
    pub const APPDATA_SIZE: u16 = APPDATA_LEN as u16;

    pub fn amiibo_type(&self) -> AmiiboType {
        AmiiboType::from_u8(self.kind)
    }

    pub fn set_amiibo_type(&mut self, t: AmiiboType) {
        self.kind = t.as_u8();
    }

    /// Whether `appdata_size` holds the conventional value.
    pub fn has_standard_appdata_size(&self) -> bool {
        self.appdata_size == Self::APPDATA_SIZE
    }
}

impl Record for AmiiboConfig {
    const NAME: &'static str = "AmiiboConfig";
    const SIZE: usize = AMIIBO_CONFIG_LEN;

    fn read_fields(data: &[u8]) -> Result<Self> {
        Ok(Self {
            last_write_date: parser::date_at(data, 0x00)?,
            write_counter: parser::le_u16_at(data, 0x04)?,
            character_id: CharacterId::from_bytes(parser::array_at(data, 0x06)?),
            series: parser::byte_at(data, 0x09)?,
            amiibo_id: parser::array_at(data, 0x0A)?,
            kind: parser::byte_at(data, 0x0C)?,
            pagex4_byte3: parser::byte_at(data, 0x0D)?,
            appdata_size: parser::le_u16_at(data, 0x0E)?,
            reserved: parser::array_at(data, 0x10)?,
        })
    }

    fn write_fields(&self, out: &mut Vec<u8>) {
        writer::push_date(out, self.last_write_date);
        writer::push_le_u16(out, self.write_counter);
        writer::push_bytes(out, &self.character_id.to_bytes());
        writer::push_u8(out, self.series);
        writer::push_bytes(out, &self.amiibo_id);
        writer::push_u8(out, self.kind);
        writer::push_u8(out, self.pagex4_byte3);
        writer::push_le_u16(out, self.appdata_size);
        writer::push_bytes(out, &self.reserved);
    }
}
