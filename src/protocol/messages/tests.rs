use super::*;

#[test]
fn relay_command_prepare_sets_identifier_and_dlc() {
    let mut frame = CanFrame::empty();
    RelayCommand::prepare(&mut frame, 0x81, 0xFF);
    assert_eq!(frame.dlc, RelayCommand::DLC);
    assert_eq!(frame.data, [0u8; 8]);
    assert_eq!(frame.can_id & EXTENDED_FRAME_FLAG, EXTENDED_FRAME_FLAG);
}

#[test]
fn relay_command_on_signal_roundtrips() {
    let mut frame = CanFrame::empty();
    assert!(RelayCommand::encode_on(&mut frame, true));
    assert!(RelayCommand::decode_on(&frame));

    assert!(RelayCommand::encode_on(&mut frame, false));
    assert!(!RelayCommand::decode_on(&frame));
}

#[test]
fn relay_command_handle_invokes_installed_handler() {
    let mut seen = None;
    let mut handler = |on: bool| seen = Some(on);
    let mut descriptor = RelayCommand::new();
    descriptor.set_handler(Some(&mut handler));

    let mut frame = CanFrame::empty();
    RelayCommand::encode_on(&mut frame, true);
    descriptor.handle(&frame);

    assert_eq!(seen, Some(true));
}

#[test]
fn relay_command_handle_is_a_no_op_without_a_handler() {
    let mut descriptor = RelayCommand::new();
    let mut frame = CanFrame::empty();
    RelayCommand::encode_on(&mut frame, true);
    descriptor.handle(&frame);
}

#[test]
fn node_info_signals_roundtrip_without_interference() {
    let mut frame = CanFrame::empty();
    assert!(NodeInfo::encode_node_type(&mut frame, 5));
    assert!(NodeInfo::encode_node_id(&mut frame, 100));
    assert!(NodeInfo::encode_version_major(&mut frame, 3));
    assert!(NodeInfo::encode_version_minor(&mut frame, 1));
    assert!(NodeInfo::encode_version_patch(&mut frame, 7));
    assert!(NodeInfo::encode_uptime_ms(&mut frame, 123_456));

    assert_eq!(
        NodeInfo::decode_all(&frame),
        NodeInfoFields {
            node_type: 5,
            node_id: 100,
            version_major: 3,
            version_minor: 1,
            version_patch: 7,
            uptime_ms: 123_456,
        }
    );
}

#[test]
fn node_info_encode_rejects_values_past_the_signal_width() {
    let mut frame = CanFrame::empty();
    // node_type is 7 bits wide: [0, 128) fits, 128 does not.
    assert!(NodeInfo::encode_node_type(&mut frame, 127));
    assert!(!NodeInfo::encode_node_type(&mut frame, 128));
}

#[test]
fn node_info_handle_invokes_installed_handler_with_full_aggregate() {
    let mut seen = None;
    let mut handler = |fields: NodeInfoFields| seen = Some(fields);
    let mut descriptor = NodeInfo::new();
    descriptor.set_handler(Some(&mut handler));

    let mut frame = CanFrame::empty();
    NodeInfo::encode_uptime_ms(&mut frame, 42);
    descriptor.handle(&frame);

    assert_eq!(seen.map(|f| f.uptime_ms), Some(42));
}
