#[path = "../common/mod.rs"]
mod common;

use libamiibo::format::{Record, TagInfo};
use libamiibo::test_support::SAMPLE_UID;
use libamiibo::Error;

#[test]
fn module_report_decodes_uid() {
    let info = TagInfo::decode(&common::fixtures::tag_info_bytes()).unwrap();
    assert_eq!(info.id_offset_size, 7);
    assert_eq!(info.unk_x2, 0x00);
    assert_eq!(info.unk_x3, 0x02);
    assert_eq!(info.uid().unwrap().as_bytes(), &SAMPLE_UID);
    assert_eq!(info.uid().unwrap().to_hex(), "04a1b2c3d4e580");
}

#[test]
fn built_record_matches_module_report() {
    assert_eq!(
        common::fixtures::sample_tag_info().to_bytes(),
        common::fixtures::tag_info_bytes()
    );
}

#[test]
fn offset_selector_is_flagged() -> anyhow::Result<()> {
    common::init_logging();
    let mut bytes = common::fixtures::tag_info_bytes();
    bytes[0] = 0x20;
    let info = TagInfo::decode(&bytes)?;
    assert!(info.uses_offset_layout());
    match info.uid() {
        Err(Error::UnsupportedLayout {
            id_offset_size: 0x20,
        }) => {}
        other => panic!("expected UnsupportedLayout, got {:?}", other),
    }
    assert_eq!(info.to_bytes(), bytes);
    Ok(())
}

#[test]
fn truncated_report_is_rejected() {
    let bytes = common::fixtures::tag_info_bytes();
    match TagInfo::decode(&bytes[..10]) {
        Err(Error::InvalidLength {
            expected: 0x2C,
            actual: 10,
        }) => {}
        other => panic!("expected InvalidLength, got {:?}", other),
    }
}
