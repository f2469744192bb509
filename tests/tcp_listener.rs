use select_poller::{EventCode, wait};
use std::net::{TcpListener, TcpStream};
use std::time::{Duration, Instant};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn pending_connection_reports_receive_and_accept() {
    init_logging();

    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    let _client = TcpStream::connect(addr).expect("connect");

    let ready = wait(&listener, EventCode::RECEIVE | EventCode::ACCEPT, 1000).expect("wait");

    assert_eq!(ready, EventCode::RECEIVE | EventCode::ACCEPT);
}

#[test]
fn accept_interest_alone_is_widened_with_receive() {
    init_logging();

    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    let _client = TcpStream::connect(addr).expect("connect");

    let ready = wait(&listener, EventCode::ACCEPT, 1000).expect("wait");

    assert_eq!(ready, EventCode::RECEIVE | EventCode::ACCEPT);
}

#[test]
fn receive_interest_does_not_report_accept() {
    init_logging();

    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    let _client = TcpStream::connect(addr).expect("connect");

    let ready = wait(&listener, EventCode::RECEIVE, 1000).expect("wait");

    assert_eq!(ready, EventCode::RECEIVE);
}

#[test]
fn idle_listener_times_out_with_empty_set() {
    init_logging();

    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");

    let start = Instant::now();
    let ready = wait(&listener, EventCode::RECEIVE | EventCode::ACCEPT, 1000).expect("wait");
    let elapsed = start.elapsed();

    assert!(ready.is_empty(), "timeout should report nothing ready");
    assert!(
        elapsed >= Duration::from_millis(900),
        "wait returned after {elapsed:?}, expected about one second"
    );
    assert!(
        elapsed < Duration::from_secs(5),
        "wait blocked for {elapsed:?}"
    );
}

#[test]
fn zero_timeout_polls_without_blocking() {
    init_logging();

    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");

    let start = Instant::now();
    let ready = wait(&listener, EventCode::ACCEPT, 0).expect("wait");

    assert!(ready.is_empty());
    assert!(
        start.elapsed() < Duration::from_millis(200),
        "zero timeout should not block"
    );
}
