// libamiibo/src/types.rs

use crate::constants::TAG_INFO_MAX_UID_LEN;
use crate::{Error, Result};

/// NFC tag UID - Newtype Pattern (最大 10 バイト)
///
/// Amiibo tags report a 7-byte UID; the TagInfo length selector allows up
/// to 10.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uid {
    bytes: [u8; TAG_INFO_MAX_UID_LEN],
    len: u8,
}

impl Uid {
    pub fn new(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > TAG_INFO_MAX_UID_LEN {
            return Err(Error::InvalidLength {
                expected: TAG_INFO_MAX_UID_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; TAG_INFO_MAX_UID_LEN];
        arr[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            bytes: arr,
            len: bytes.len() as u8,
        })
    }

    /// Parse a UID from hex text such as `"04 a1 b2 c3 d4 e5 80"`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = crate::utils::parse_hex(s)?;
        Self::new(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::new(bytes)
    }
}

/// Character id: collection, character within the collection, variant.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharacterId {
    pub collection: u8,
    pub character: u8,
    pub variant: u8,
}

impl CharacterId {
    pub const fn new(collection: u8, character: u8, variant: u8) -> Self {
        Self {
            collection,
            character,
            variant,
        }
    }

    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    pub fn to_bytes(&self) -> [u8; 3] {
        [self.collection, self.character, self.variant]
    }
}

/// Amiibo form factor as stored in `AmiiboConfig::kind`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmiiboType {
    Figure,
    Card,
    Plush,
    /// Any value not assigned above; kept so the byte round-trips.
    Other(u8),
}

impl AmiiboType {
    pub fn from_u8(v: u8) -> Self {
        match v {
            0 => Self::Figure,
            1 => Self::Card,
            2 => Self::Plush,
            other => Self::Other(other),
        }
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            Self::Figure => 0,
            Self::Card => 1,
            Self::Plush => 2,
            Self::Other(v) => *v,
        }
    }
}

impl From<u8> for AmiiboType {
    fn from(v: u8) -> Self {
        Self::from_u8(v)
    }
}

impl From<AmiiboType> for u8 {
    fn from(t: AmiiboType) -> Self {
        t.as_u8()
    }
}

/// NFC service tag state.
///
/// Transitions are driven by the NFC service and tag proximity; nothing in
/// this crate produces or consumes them.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagState {
    /// The NFC service has not been initialised.
    #[default]
    Uninitialized = 0,
    /// Not scanning. Set after init and after scanning is stopped.
    ScanningStopped = 1,
    Scanning = 2,
    /// A tag entered range while scanning.
    InRange = 3,
    /// The tag left range. Scanning has to be restarted to detect it again.
    OutOfRange = 4,
    /// Tag data was loaded.
    DataReady = 5,
}

impl TagState {
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for TagState {
    type Error = Error;

    fn try_from(v: u8) -> Result<Self> {
        match v {
            0 => Ok(Self::Uninitialized),
            1 => Ok(Self::ScanningStopped),
            2 => Ok(Self::Scanning),
            3 => Ok(Self::InRange),
            4 => Ok(Self::OutOfRange),
            5 => Ok(Self::DataReady),
            other => Err(Error::InvalidTagState(other)),
        }
    }
}
