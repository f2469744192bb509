use select_poller::EventCode;

#[test]
fn interest_maps_to_directions() {
    assert!(EventCode::RECEIVE.wants_read());
    assert!(EventCode::ACCEPT.wants_read());
    assert!(!EventCode::ACCEPT.wants_write());

    assert!(EventCode::SEND.wants_write());
    assert!(EventCode::CONNECT.wants_write());
    assert!(!EventCode::CONNECT.wants_read());

    assert!(!EventCode::empty().wants_read());
    assert!(!EventCode::empty().wants_write());
}

#[test]
fn accept_and_connect_alias_receive_and_send() {
    let interest = EventCode::ACCEPT | EventCode::CONNECT;

    assert_eq!(
        interest.ready(true, false),
        EventCode::RECEIVE | EventCode::ACCEPT
    );
    assert_eq!(
        interest.ready(false, true),
        EventCode::SEND | EventCode::CONNECT
    );
    assert_eq!(interest.ready(true, true), EventCode::all());
}

#[test]
fn plain_interest_is_not_widened_with_virtual_kinds() {
    let interest = EventCode::RECEIVE | EventCode::SEND;

    assert_eq!(interest.ready(true, true), interest);
    assert_eq!(interest.widened(), interest);
}

#[test]
fn unrequested_directions_are_dropped() {
    assert_eq!(EventCode::RECEIVE.ready(true, true), EventCode::RECEIVE);
    assert_eq!(EventCode::CONNECT.ready(true, true), EventCode::SEND | EventCode::CONNECT);
    assert!(EventCode::SEND.ready(true, false).is_empty());
}

#[test]
fn nothing_ready_is_empty() {
    assert!(EventCode::all().ready(false, false).is_empty());
}

#[test]
fn bit_values_are_stable() {
    assert_eq!(EventCode::CONNECT.bits(), 0x1);
    assert_eq!(EventCode::ACCEPT.bits(), 0x2);
    assert_eq!(EventCode::RECEIVE.bits(), 0x4);
    assert_eq!(EventCode::SEND.bits(), 0x8);
}
