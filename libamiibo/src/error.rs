// libamiibo/src/error.rs

use thiserror::Error;

/// 共通エラー型
///
/// The codec and IPC helpers are total and never produce these; errors only
/// come from buffer bounds checks, the optional validation layer and the
/// unverified TagInfo layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid buffer length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("unsupported tag info layout: id_offset_size={id_offset_size:#06x}")]
    UnsupportedLayout { id_offset_size: u16 },

    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: u16, month: u8, day: u8 },

    #[error("nickname too long: at most {max} UTF-16 code units, got {actual}")]
    NicknameTooLong { max: usize, actual: usize },

    #[error("invalid tag state: {0:#04x}")]
    InvalidTagState(u8),

    #[error("hex format error: {0}")]
    HexFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
