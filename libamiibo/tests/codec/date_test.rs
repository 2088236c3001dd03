use libamiibo::CompactDate;
use proptest::prelude::*;

#[test]
fn literal_bit_arithmetic() {
    assert_eq!(CompactDate::from_raw(0x0000), CompactDate::new(2000, 0, 0));
    assert_eq!(CompactDate::new(2000, 0, 0).to_raw(), 0x0000);
    assert_eq!(CompactDate::new(2000, 1, 1).to_raw(), 0x0021);
    assert_eq!(CompactDate::from_raw(0x6021), CompactDate::new(2048, 1, 1));
    assert_eq!(CompactDate::new(2048, 1, 1).to_raw(), 0x6021);
}

#[test]
fn conversions() {
    let d: CompactDate = 0x2AEFu16.into();
    assert_eq!(d, CompactDate::new(2021, 7, 15));
    assert_eq!(u16::from(d), 0x2AEF);
}

proptest! {
    #[test]
    fn roundtrip_within_range(year in 2000u16..=2127, month in 0u8..=15, day in 0u8..=31) {
        let d = CompactDate::new(year, month, day);
        prop_assert_eq!(CompactDate::from_raw(d.to_raw()), d);
    }

    #[test]
    fn checked_accepts_calendar_dates(year in 2000u16..=2127, month in 1u8..=12, day in 1u8..=31) {
        prop_assert!(CompactDate::checked(year, month, day).is_ok());
    }
}
