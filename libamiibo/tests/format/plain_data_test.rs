#[path = "../common/mod.rs"]
mod common;

use libamiibo::format::{AmiiboSettings, AppDataConfig, PlainData, Record};
use libamiibo::CompactDate;

#[test]
fn plain_data_roundtrip() -> anyhow::Result<()> {
    common::init_logging();
    let plain = common::fixtures::sample_plain_data();
    let bytes = plain.to_bytes();
    assert_eq!(bytes.len(), 0x1C8);

    let back = PlainData::decode(&bytes)?;
    assert_eq!(back, plain);
    assert_eq!(back.settings.nickname(), common::fixtures::SAMPLE_NICKNAME);
    assert_eq!(back.settings.setup_date, CompactDate::new(2021, 7, 15));
    assert_eq!(back.appdata_config.unk2, 2);
    Ok(())
}

#[test]
fn sections_decode_standalone() -> anyhow::Result<()> {
    let plain = common::fixtures::sample_plain_data();
    let bytes = plain.to_bytes();

    let settings = AmiiboSettings::decode(&bytes[0x08..0xB0])?;
    assert_eq!(settings, common::fixtures::sample_settings());

    let app = AppDataConfig::decode(&bytes[0xB0..0xF0])?;
    assert_eq!(app.title_id, 0x0004_0000_0012_3400);
    assert_eq!(&bytes[0xF0..], &plain.appdata[..]);
    Ok(())
}

#[test]
fn header_fields() {
    let plain = common::fixtures::sample_plain_data();
    let bytes = plain.to_bytes();
    assert_eq!(bytes[0x01], 0x31);
    // 2022 = 0x07E6
    assert_eq!(&bytes[0x02..0x06], &[0xE6, 0x07, 3, 9]);
    assert_eq!(&bytes[0x06..0x08], &[12, 0]);
}
