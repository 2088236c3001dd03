#[path = "../common/mod.rs"]
mod common;

use libamiibo::format::{
    AmiiboConfig, AmiiboSettings, AppDataConfig, PlainData, Record, TagIdentification, TagInfo,
};
use libamiibo::test_support::marker_bytes;

fn assert_zero_identity<R: Record + Default + PartialEq + std::fmt::Debug>() {
    let zeros = vec![0u8; R::SIZE];
    let rec = R::decode(&zeros).unwrap();
    assert_eq!(rec, R::default(), "{} zero decode", R::NAME);
    assert_eq!(rec.to_bytes(), zeros, "{} zero encode", R::NAME);
}

fn assert_markers_survive<R: Record>() {
    let markers = marker_bytes(R::SIZE);
    let rec = R::decode(&markers).unwrap();
    let out = rec.to_bytes();
    for (i, (want, got)) in markers.iter().zip(out.iter()).enumerate() {
        assert_eq!(want, got, "{} byte {:#05x} moved", R::NAME, i);
    }
    assert_eq!(out.len(), R::SIZE);
}

#[test]
fn zero_records_decode_to_defaults() {
    common::init_logging();
    assert_zero_identity::<TagIdentification>();
    assert_zero_identity::<TagInfo>();
    assert_zero_identity::<AmiiboSettings>();
    assert_zero_identity::<AmiiboConfig>();
    assert_zero_identity::<AppDataConfig>();
    assert_zero_identity::<PlainData>();
}

#[test]
fn marker_bytes_keep_their_positions() {
    common::init_logging();
    assert_markers_survive::<TagIdentification>();
    assert_markers_survive::<TagInfo>();
    assert_markers_survive::<AmiiboSettings>();
    assert_markers_survive::<AmiiboConfig>();
    assert_markers_survive::<AppDataConfig>();
    assert_markers_survive::<PlainData>();
}

#[test]
fn reserved_ranges_are_opaque() {
    let mut bytes = vec![0u8; TagIdentification::SIZE];
    bytes[0x07..].fill(0xC3);
    let rec = TagIdentification::decode(&bytes).unwrap();
    assert!(rec.reserved.iter().all(|&b| b == 0xC3));

    let mut bytes = vec![0u8; AmiiboConfig::SIZE];
    bytes[0x10..].fill(0x7E);
    let cfg = AmiiboConfig::decode(&bytes).unwrap();
    assert_eq!(cfg.to_bytes(), bytes);
}

#[test]
fn read_modify_write_touches_one_field() {
    let original = marker_bytes(AmiiboSettings::SIZE);
    let mut settings = AmiiboSettings::decode(&original).unwrap();
    settings.country_code = 0x00;
    let out = settings.to_bytes();

    for (i, (a, b)) in original.iter().zip(out.iter()).enumerate() {
        if i == 0x77 {
            assert_eq!(*b, 0x00);
        } else {
            assert_eq!(a, b, "byte {:#04x} changed", i);
        }
    }
}
