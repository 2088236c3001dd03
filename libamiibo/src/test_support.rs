//! Test support helpers intended for use by unit and integration tests.
//!
//! These build records with recognisable contents so tests and benches
//! across the crate and the tests/ directory share the same fixtures.
#![allow(dead_code)]

use crate::constants::{APPDATA_LEN, MII_DATA_LEN};
use crate::format::{AmiiboConfig, AmiiboSettings, AppDataConfig, PlainData};
use crate::{AmiiboType, CharacterId, CompactDate, Result};

/// Sample 7-byte NTAG215 UID.
pub const SAMPLE_UID: [u8; 7] = [0x04, 0xa1, 0xb2, 0xc3, 0xd4, 0xe5, 0x80];

/// `len` bytes of marker values: byte `i` holds `i * 7 + 1` (mod 256), so
/// neighbouring positions always differ and a shifted field shows up.
#[doc(hidden)]
pub fn marker_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i.wrapping_mul(7).wrapping_add(1)) as u8).collect()
}

/// Settings with a nickname, a setup date and marker bytes in the Mii blob.
#[doc(hidden)]
pub fn sample_settings(nickname: &str) -> Result<AmiiboSettings> {
    let mut settings = AmiiboSettings {
        flags: 0x01,
        country_code: 0x31,
        setup_date: CompactDate::new(2021, 7, 15),
        ..Default::default()
    };
    let markers = marker_bytes(MII_DATA_LEN);
    settings.mii.copy_from_slice(&markers);
    settings.set_nickname(nickname)?;
    Ok(settings)
}

/// Config for a card-type amiibo as the NFC module would report it.
#[doc(hidden)]
pub fn sample_config() -> AmiiboConfig {
    let mut cfg = AmiiboConfig {
        last_write_date: CompactDate::new(2022, 3, 9),
        write_counter: 12,
        character_id: CharacterId::new(0x01, 0x02, 0x03),
        series: 0x05,
        amiibo_id: [0x00, 0x3C],
        appdata_size: AmiiboConfig::APPDATA_SIZE,
        ..Default::default()
    };
    cfg.set_amiibo_type(AmiiboType::Card);
    cfg
}

/// Plain data with every section populated.
#[doc(hidden)]
pub fn sample_plain_data(nickname: &str) -> Result<PlainData> {
    let mut plain = PlainData {
        pagex4_byte3: 0x00,
        flag: 0x31,
        last_write_date: CompactDate::new(2022, 3, 9),
        write_counter: 12,
        settings: sample_settings(nickname)?,
        appdata_config: AppDataConfig {
            title_id: 0x0004_0000_0012_3400,
            app_id: 0x1019_C800,
            counter: 3,
            unk: 0x03,
            unk2: 0x02,
            ..Default::default()
        },
        ..Default::default()
    };
    let markers = marker_bytes(APPDATA_LEN);
    plain.appdata.copy_from_slice(&markers);
    Ok(plain)
}
