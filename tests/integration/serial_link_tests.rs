//! End-to-end tests: raw bytes → SerialLink → ControllerService → bytes.
//!
//! Mirrors what the desktop host does: write `H:<h>:<m>\n` and `D\n`,
//! read back newline-terminated status lines.

use std::collections::VecDeque;

use super::mock_hw::{LogSink, MockHardware};

use growlight::app::service::ControllerService;
use growlight::app::status::StatusLine;
use growlight::config::ControllerConfig;
use growlight::link::codec::MAX_LINE_LEN;
use growlight::link::serial::SerialLink;
use growlight::link::transport::Transport;

/// Byte pipe standing in for UART0.
#[derive(Default)]
struct HostPipe {
    to_device: VecDeque<u8>,
    from_device: Vec<u8>,
}

impl HostPipe {
    fn replies(&self) -> Vec<String> {
        String::from_utf8(self.from_device.clone())
            .expect("device output is UTF-8")
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Transport for HostPipe {
    type Error = ();

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, ()> {
        let n = buf.len().min(self.to_device.len());
        for slot in buf.iter_mut().take(n) {
            *slot = self.to_device.pop_front().unwrap_or_default();
        }
        Ok(n)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, ()> {
        self.from_device.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<(), ()> {
        Ok(())
    }
}

fn run(input: &[u8], iterations: usize) -> (ControllerService, MockHardware, Vec<String>) {
    let mut svc = ControllerService::new(ControllerConfig::default());
    let mut hw = MockHardware::new();
    let mut sink = LogSink::new();
    let mut link = SerialLink::new(HostPipe {
        to_device: input.iter().copied().collect(),
        ..Default::default()
    });

    svc.start(0, &mut hw, &mut sink);
    for _ in 0..iterations {
        svc.poll(0, &mut hw, &mut link, &mut sink);
    }
    let replies = link.into_inner().replies();
    (svc, hw, replies)
}

#[test]
fn host_session_round_trip() {
    let (_, hw, replies) = run(b"AUTO\nH:18:0\nD\n", 3);
    assert!(hw.relay_on());
    assert_eq!(replies.len(), 1);

    let status: StatusLine = replies[0].parse().unwrap();
    assert!(status.light_on);
    assert_eq!(status.time.hour(), 18);
    assert_eq!(status.time.minute(), 0);
}

#[test]
fn crlf_terminated_lines_are_accepted() {
    let (svc, _, replies) = run(b"ON\r\nD\r\n", 2);
    assert!(svc.is_light_on());
    assert_eq!(replies, vec!["22.0,50,1,00:00,1".to_string()]);
}

#[test]
fn queued_lines_wait_for_later_iterations() {
    let (svc, _, replies) = run(b"ON\nOFF\nD\n", 1);
    assert!(svc.is_light_on());
    assert!(replies.is_empty());
}

#[test]
fn overlong_line_is_discarded_entirely() {
    let mut input = vec![b'H'; MAX_LINE_LEN + 5];
    input.extend_from_slice(b":9:9\nD\n");
    let (svc, _, replies) = run(&input, 3);
    assert_eq!(svc.time().hour(), 0);
    assert_eq!(replies.len(), 1);
    assert!(replies[0].ends_with(",00:00,0"));
}

#[test]
fn every_reply_is_one_terminated_line() {
    let (_, _, replies) = run(b"D\nD\nD\n", 3);
    assert_eq!(replies.len(), 3);
    for r in &replies {
        assert_eq!(r.split(',').count(), 5);
    }
}
