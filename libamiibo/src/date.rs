// libamiibo/src/date.rs

use crate::constants::{DATE_BASE_YEAR, DATE_RAW_BIAS, DATE_RECORD_LEN};
use crate::{Error, Result};

/// Year/month/day triple used by tag records.
///
/// On tag memory the date is packed into 16 bits: a 7-bit year offset from
/// 2000, a 4-bit month and a 5-bit day. Records returned by the NFC module
/// carry the unpacked form (`year: u16`, `month: u8`, `day: u8`).
///
/// Neither direction validates its input. Out-of-range months or days bleed
/// into the neighbouring bit fields when packed, and malformed raw words
/// decode to whatever year they describe. Use [`CompactDate::checked`] or
/// [`CompactDate::validate`] when calendar sanity matters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompactDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl CompactDate {
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Build a date, rejecting values the packed form cannot represent or
    /// that are not calendar months/days.
    pub fn checked(year: u16, month: u8, day: u8) -> Result<Self> {
        let date = Self::new(year, month, day);
        date.validate()?;
        Ok(date)
    }

    /// Check year in 2000..=2127, month in 1..=12, day in 1..=31.
    pub fn validate(&self) -> Result<()> {
        let year_ok = (DATE_BASE_YEAR..=DATE_BASE_YEAR + 127).contains(&self.year);
        let month_ok = (1..=12).contains(&self.month);
        let day_ok = (1..=31).contains(&self.day);
        if year_ok && month_ok && day_ok {
            Ok(())
        } else {
            Err(Error::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            })
        }
    }

    /// Unpack a 16-bit packed date.
    pub fn from_raw(raw: u16) -> Self {
        let wide = raw as u32;
        Self {
            year: (raw >> 9).wrapping_add(DATE_BASE_YEAR),
            month: ((wide << 23 >> 28) & 0xF) as u8,
            day: (raw & 0x1F) as u8,
        }
    }

    /// Pack into the 16-bit form. The arithmetic runs on 32-bit integers and
    /// the result is truncated, so `2000 << 9` plus the bias carries out of
    /// the low 16 bits and leaves only the year offset behind.
    pub fn to_raw(&self) -> u16 {
        let year = self.year as u32;
        let packed = (((year << 9) + DATE_RAW_BIAS) | (0x20 * self.month as u32)) | self.day as u32;
        packed as u16
    }

    /// Decode the unpacked record form.
    pub fn from_record_bytes(bytes: [u8; DATE_RECORD_LEN]) -> Self {
        Self {
            year: u16::from_le_bytes([bytes[0], bytes[1]]),
            month: bytes[2],
            day: bytes[3],
        }
    }

    /// Encode into the unpacked record form.
    pub fn to_record_bytes(&self) -> [u8; DATE_RECORD_LEN] {
        let [y0, y1] = self.year.to_le_bytes();
        [y0, y1, self.month, self.day]
    }
}

impl From<u16> for CompactDate {
    fn from(raw: u16) -> Self {
        Self::from_raw(raw)
    }
}

impl From<CompactDate> for u16 {
    fn from(date: CompactDate) -> Self {
        date.to_raw()
    }
}

impl std::fmt::Display for CompactDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
