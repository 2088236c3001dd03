use libamiibo::ipc::{CommandHeader, make_buffer_descriptor, make_command_header};

#[test]
fn command_header_example() {
    assert_eq!(make_command_header(0x1234, 2, 3), (0x1234 << 16) | (2 << 6) | 3);
    assert_eq!(make_command_header(0x1234, 2, 3), 0x1234_0083);
}

#[test]
fn buffer_descriptor_example() {
    let size: usize = 16;
    let expected = ((size << 14) as u32) | (5 << 10) | 0x2;
    assert_eq!(make_buffer_descriptor(size, 5), expected);
    assert_eq!(expected, 0x0004_1402);
}

#[test]
fn header_view() {
    let h = CommandHeader::from_raw(make_command_header(0x0013, 1, 0x42));
    assert_eq!(h.command_id(), 0x0013);
    assert_eq!(h.normal_params(), 1);
    assert_eq!(h.translate_params(), 2);
}
