// libamiibo/src/format/mod.rs

pub mod appdata;
pub mod config;
pub mod identification;
pub mod parser;
pub mod plain;
pub mod record;
pub mod settings;
pub mod tag_info;
pub mod writer;

pub use appdata::AppDataConfig;
pub use config::AmiiboConfig;
pub use identification::TagIdentification;
pub use plain::PlainData;
pub use record::Record;
pub use settings::AmiiboSettings;
pub use tag_info::TagInfo;

/// Offset-prefixed hex dump of a record's encoded bytes.
#[cfg(feature = "diagnostics")]
pub fn dump<R: Record>(record: &R) -> String {
    format!(
        "{} ({} bytes)\n{}",
        R::NAME,
        R::SIZE,
        crate::utils::hex_dump(&record.to_bytes())
    )
}
