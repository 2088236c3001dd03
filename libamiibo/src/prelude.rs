// libamiibo/src/prelude.rs

pub use crate::format::{
    AmiiboConfig, AmiiboSettings, AppDataConfig, PlainData, Record, TagIdentification, TagInfo,
};
pub use crate::ipc::{CommandHeader, make_buffer_descriptor, make_command_header};
pub use crate::{AmiiboType, CharacterId, CompactDate, Error, Result, TagState, Uid};

pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, hex_dump, parse_hex};
