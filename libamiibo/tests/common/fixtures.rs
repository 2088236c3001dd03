// fixtures.rs — provides commonly used tag payloads

use libamiibo::format::{AmiiboSettings, PlainData, TagInfo};
use libamiibo::test_support;

pub const SAMPLE_NICKNAME: &str = "Mario";

/// TagInfo as the NFC module reports it for a 7-byte UID.
pub fn tag_info_bytes() -> Vec<u8> {
    hex::decode(concat!(
        "07000002",
        "04a1b2c3d4e580000000000000000000",
        "00000000000000000000000000000000",
        "0000000000000000",
    ))
    .unwrap()
}

pub fn sample_tag_info() -> TagInfo {
    TagInfo::from_uid(&test_support::SAMPLE_UID).unwrap()
}

pub fn sample_settings() -> AmiiboSettings {
    test_support::sample_settings(SAMPLE_NICKNAME).unwrap()
}

pub fn sample_plain_data() -> PlainData {
    test_support::sample_plain_data(SAMPLE_NICKNAME).unwrap()
}
