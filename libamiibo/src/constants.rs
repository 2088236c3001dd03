// libamiibo/src/constants.rs
//! Record sizes and layout constants shared across the crate

/// Base year of the compact date encoding.
pub const DATE_BASE_YEAR: u16 = 2000;

/// Fixed bias added by the compact date encoder.
pub const DATE_RAW_BIAS: u32 = 0x6000;

/// Encoded size of a date embedded in a record: year(2) month(1) day(1).
pub const DATE_RECORD_LEN: usize = 4;

/// TagIdentification record size
pub const TAG_IDENTIFICATION_LEN: usize = 0x36;
/// Reserved tail of TagIdentification
pub const TAG_IDENTIFICATION_RESERVED_LEN: usize = 0x2F;

/// TagInfo record size
pub const TAG_INFO_LEN: usize = 0x2C;
/// Size of the TagInfo id buffer
pub const TAG_INFO_ID_LEN: usize = 0x28;
/// Largest id_offset_size still interpreted as a UID length.
pub const TAG_INFO_MAX_UID_LEN: usize = 10;
/// Usual unk_x3 value written by the NFC module.
pub const TAG_INFO_DEFAULT_UNK_X3: u8 = 0x02;

/// AmiiboSettings record size
pub const AMIIBO_SETTINGS_LEN: usize = 0xA8;
/// Owner Mii blob size
pub const MII_DATA_LEN: usize = 0x60;
/// Nickname length in UTF-16 code units
pub const NICKNAME_UNITS: usize = 11;
/// Reserved tail of AmiiboSettings
pub const AMIIBO_SETTINGS_RESERVED_LEN: usize = 0x2C;
/// Meaningful bits of the settings flags byte
pub const AMIIBO_FLAGS_MASK: u8 = 0x0F;

/// AmiiboConfig record size
pub const AMIIBO_CONFIG_LEN: usize = 0x40;
/// Reserved tail of AmiiboConfig
pub const AMIIBO_CONFIG_RESERVED_LEN: usize = 0x30;

/// AppDataConfig record size
pub const APPDATA_CONFIG_LEN: usize = 0x40;
/// Reserved tail of AppDataConfig
pub const APPDATA_CONFIG_RESERVED_LEN: usize = 0x2F;

/// Size of the application data area. The NFC module also writes this
/// value into `AmiiboConfig::appdata_size`.
pub const APPDATA_LEN: usize = 0xD8;

/// PlainData record size
pub const PLAIN_DATA_LEN: usize = 0x1C8;

/// Tag bits of a static buffer descriptor word
pub const IPC_STATIC_BUFFER_TAG: u32 = 0x2;
/// Mask applied to normal/translate parameter counts in a command header
pub const IPC_PARAM_MASK: u32 = 0x3F;
/// Mask applied to the buffer id of a static buffer descriptor
pub const IPC_BUFFER_ID_MASK: u32 = 0xF;
