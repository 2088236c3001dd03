// libamiibo/src/ipc.rs
//! Header words for service calls.
//!
//! Only the word packing lives here; nothing in this crate dispatches calls.

use crate::constants::{IPC_BUFFER_ID_MASK, IPC_PARAM_MASK, IPC_STATIC_BUFFER_TAG};
use derive_more::{From, Into};

/// Pack a command header word.
///
/// Bits: command_id [16, 32), normal_params [6, 12), translate_params [0, 6).
/// Parameter counts wider than 6 bits are truncated.
pub fn make_command_header(command_id: u16, normal_params: u32, translate_params: u32) -> u32 {
    ((command_id as u32) << 16)
        | ((normal_params & IPC_PARAM_MASK) << 6)
        | (translate_params & IPC_PARAM_MASK)
}

/// Pack a static buffer descriptor word.
///
/// Bits: size [14, 32), buffer_id [10, 14), tag 0x2. Size bits past the
/// 32-bit word and buffer ids wider than 4 bits are truncated.
pub fn make_buffer_descriptor(size: usize, buffer_id: u32) -> u32 {
    ((size << 14) as u32) | ((buffer_id & IPC_BUFFER_ID_MASK) << 10) | IPC_STATIC_BUFFER_TAG
}

/// Command header word - Newtype Pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into)]
pub struct CommandHeader(u32);

impl CommandHeader {
    pub fn new(command_id: u16, normal_params: u32, translate_params: u32) -> Self {
        Self(make_command_header(
            command_id,
            normal_params,
            translate_params,
        ))
    }

    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    pub fn command_id(&self) -> u16 {
        (self.0 >> 16) as u16
    }

    pub fn normal_params(&self) -> u32 {
        (self.0 >> 6) & IPC_PARAM_MASK
    }

    pub fn translate_params(&self) -> u32 {
        self.0 & IPC_PARAM_MASK
    }
}
