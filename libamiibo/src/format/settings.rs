// libamiibo/src/format/settings.rs

use super::parser;
use super::record::Record;
use super::writer;
use crate::constants::{
    AMIIBO_FLAGS_MASK, AMIIBO_SETTINGS_LEN, AMIIBO_SETTINGS_RESERVED_LEN, MII_DATA_LEN,
    NICKNAME_UNITS,
};
use crate::date::CompactDate;
use crate::{Error, Result};

/// Owner settings of an amiibo.
///
/// Layout: mii(0x60) + nickname(11 x u16 BE) + flags(1) + country_code(1) +
/// setup_date(4) + reserved(0x2C)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmiiboSettings {
    /// Owner Mii, opaque.
    pub mii: [u8; MII_DATA_LEN],
    /// UTF-16 code units; stored big-endian.
    pub nickname: [u16; NICKNAME_UNITS],
    /// Only the low nibble carries meaning; the raw byte is kept as-is.
    pub flags: u8,
    /// Country code of the system that set up the amiibo.
    pub country_code: u8,
    pub setup_date: CompactDate,
    pub reserved: [u8; AMIIBO_SETTINGS_RESERVED_LEN],
}

impl Default for AmiiboSettings {
    fn default() -> Self {
        Self {
            mii: [0; MII_DATA_LEN],
            nickname: [0; NICKNAME_UNITS],
            flags: 0,
            country_code: 0,
            setup_date: CompactDate::default(),
            reserved: [0; AMIIBO_SETTINGS_RESERVED_LEN],
        }
    }
}

impl AmiiboSettings {
    /// `flags & 0x0F`
    pub fn flag_bits(&self) -> u8 {
        self.flags & AMIIBO_FLAGS_MASK
    }

    /// Nickname text up to the first NUL. Unpaired surrogates become U+FFFD.
    pub fn nickname(&self) -> String {
        let end = self
            .nickname
            .iter()
            .position(|&u| u == 0)
            .unwrap_or(NICKNAME_UNITS);
        char::decode_utf16(self.nickname[..end].iter().copied())
            .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }

    /// Replace the nickname, zero-padding the unused code units.
    pub fn set_nickname(&mut self, name: &str) -> Result<()> {
        let units: Vec<u16> = name.encode_utf16().collect();
        if units.len() > NICKNAME_UNITS {
            return Err(Error::NicknameTooLong {
                max: NICKNAME_UNITS,
                actual: units.len(),
            });
        }
        self.nickname = [0; NICKNAME_UNITS];
        self.nickname[..units.len()].copy_from_slice(&units);
        Ok(())
    }
}

impl Record for AmiiboSettings {
    const NAME: &'static str = "AmiiboSettings";
    const SIZE: usize = AMIIBO_SETTINGS_LEN;

    fn read_fields(data: &[u8]) -> Result<Self> {
        Ok(Self {
            mii: parser::array_at(data, 0x00)?,
            nickname: parser::be_u16s_at(data, 0x60)?,
            flags: parser::byte_at(data, 0x76)?,
            country_code: parser::byte_at(data, 0x77)?,
            setup_date: parser::date_at(data, 0x78)?,
            reserved: parser::array_at(data, 0x7C)?,
        })
    }

    fn write_fields(&self, out: &mut Vec<u8>) {
        writer::push_bytes(out, &self.mii);
        writer::push_be_u16s(out, &self.nickname);
        writer::push_u8(out, self.flags);
        writer::push_u8(out, self.country_code);
        writer::push_date(out, self.setup_date);
        writer::push_bytes(out, &self.reserved);
    }
}
