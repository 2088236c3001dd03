// libamiibo/src/format/tag_info.rs

use super::parser;
use super::record::Record;
use super::writer;
use crate::constants::{TAG_INFO_DEFAULT_UNK_X3, TAG_INFO_ID_LEN, TAG_INFO_LEN, TAG_INFO_MAX_UID_LEN};
use crate::types::Uid;
use crate::{Error, Result};

/// NFC tag info as reported by the NFC module.
///
/// Layout: id_offset_size(2, LE) + unk_x2(1) + unk_x3(1) + id(0x28)
///
/// `id_offset_size` is normally 7. Values up to 10 give the length of the
/// UID at the start of `id`, zero-padded. Larger values are documented as
/// an offset to a separate 10-byte id block; when that form occurs is not
/// known, so [`TagInfo::uid`] refuses it instead of guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagInfo {
    pub id_offset_size: u16,
    /// Normally 0x00.
    pub unk_x2: u8,
    /// Normally 0x02.
    pub unk_x3: u8,
    pub id: [u8; TAG_INFO_ID_LEN],
}

impl Default for TagInfo {
    fn default() -> Self {
        Self {
            id_offset_size: 0,
            unk_x2: 0,
            unk_x3: 0,
            id: [0; TAG_INFO_ID_LEN],
        }
    }
}

impl TagInfo {
    /// Build a TagInfo carrying `uid` in the length-prefixed layout.
    pub fn from_uid(uid: &[u8]) -> Result<Self> {
        let uid = Uid::new(uid)?;
        let mut id = [0u8; TAG_INFO_ID_LEN];
        id[..uid.len()].copy_from_slice(uid.as_bytes());
        Ok(Self {
            id_offset_size: uid.len() as u16,
            unk_x2: 0,
            unk_x3: TAG_INFO_DEFAULT_UNK_X3,
            id,
        })
    }

    /// True when `id_offset_size` selects the offset layout.
    pub fn uses_offset_layout(&self) -> bool {
        self.id_offset_size as usize > TAG_INFO_MAX_UID_LEN
    }

    /// The tag UID held in the id buffer.
    pub fn uid(&self) -> Result<Uid> {
        if self.uses_offset_layout() {
            log::warn!(
                "tag info uses unverified offset layout (id_offset_size={:#x})",
                self.id_offset_size
            );
            return Err(Error::UnsupportedLayout {
                id_offset_size: self.id_offset_size,
            });
        }
        Uid::new(&self.id[..self.id_offset_size as usize])
    }
}

impl Record for TagInfo {
    const NAME: &'static str = "TagInfo";
    const SIZE: usize = TAG_INFO_LEN;

    fn read_fields(data: &[u8]) -> Result<Self> {
        Ok(Self {
            id_offset_size: parser::le_u16_at(data, 0x00)?,
            unk_x2: parser::byte_at(data, 0x02)?,
            unk_x3: parser::byte_at(data, 0x03)?,
            id: parser::array_at(data, 0x04)?,
        })
    }

    fn write_fields(&self, out: &mut Vec<u8>) {
        writer::push_le_u16(out, self.id_offset_size);
        writer::push_u8(out, self.unk_x2);
        writer::push_u8(out, self.unk_x3);
        writer::push_bytes(out, &self.id);
    }
}
