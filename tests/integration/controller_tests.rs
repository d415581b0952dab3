//! Integration tests for the ControllerService → ports pipeline.
//!
//! Drives the service the way the main loop does: one `poll` per
//! iteration, lines arriving on the link, real time supplied by the test.

use super::mock_hw::{LogSink, MockHardware, ScriptedLink};

use growlight::app::clock::TimeOfDay;
use growlight::app::events::AppEvent;
use growlight::app::mode::Mode;
use growlight::app::service::ControllerService;
use growlight::app::status::{ClimateReading, StatusLine};
use growlight::config::ControllerConfig;

const MINUTE_MS: u64 = 60_000;

struct Rig {
    svc: ControllerService,
    hw: MockHardware,
    link: ScriptedLink,
    sink: LogSink,
    now_ms: u64,
}

impl Rig {
    fn boot() -> Self {
        Self::boot_with(MockHardware::new())
    }

    fn boot_with(mut hw: MockHardware) -> Self {
        let mut svc = ControllerService::new(ControllerConfig::default());
        let mut sink = LogSink::new();
        svc.start(0, &mut hw, &mut sink);
        Self {
            svc,
            hw,
            link: ScriptedLink::new(),
            sink,
            now_ms: 0,
        }
    }

    /// Send one line and run one loop iteration at the current time.
    fn send(&mut self, line: &str) {
        self.link.send(line);
        self.poll();
    }

    fn poll(&mut self) {
        self.svc
            .poll(self.now_ms, &mut self.hw, &mut self.link, &mut self.sink);
    }

    /// Send `D` and parse the reply the way the host does.
    fn status(&mut self) -> StatusLine {
        self.send("D");
        self.link
            .last_reply()
            .expect("D produces a reply")
            .parse()
            .expect("reply parses")
    }

    fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
        self.poll();
    }
}

// ── Boot ──────────────────────────────────────────────────────

#[test]
fn boot_state_is_midnight_auto_off() {
    let mut rig = Rig::boot();
    assert_eq!(rig.hw.relay_writes, vec![false], "relay forced off at start");

    let s = rig.status();
    assert_eq!(s.time, TimeOfDay::MIDNIGHT);
    assert!(!s.light_on);
    assert!(!s.manual);
}

// ── Scenario: AUTO follows the window as the host moves the clock ─

#[test]
fn auto_scenario_tracks_window() {
    let mut rig = Rig::boot();
    rig.send("AUTO");
    rig.send("H:18:00");

    rig.status();
    let reply = rig.link.last_reply().unwrap().to_string();
    assert!(reply.ends_with(",1,18:00,0"), "got {reply}");

    rig.send("H:20:00");
    let s = rig.status();
    assert!(!s.light_on);
    assert_eq!(s.time, TimeOfDay::new(20, 0).unwrap());
    assert!(!rig.hw.relay_on());
}

// ── Scenario: MANUAL override persists outside the window ────

#[test]
fn manual_scenario_overrides_window() {
    let mut rig = Rig::boot();
    rig.send("ON");
    rig.send("H:02:00");

    let s = rig.status();
    assert!(s.light_on);
    assert!(s.manual);
    assert_eq!(s.time, TimeOfDay::new(2, 0).unwrap());

    // Ticks in MANUAL never touch the relay.
    let writes = rig.hw.relay_writes.len();
    for _ in 0..120 {
        rig.advance(MINUTE_MS);
    }
    assert_eq!(rig.hw.relay_writes.len(), writes);
    assert!(rig.hw.relay_on());
    assert_eq!(rig.svc.time(), TimeOfDay::new(4, 0).unwrap());
}

#[test]
fn auto_after_manual_clears_override() {
    let mut rig = Rig::boot();
    rig.send("H:03:00");
    rig.send("ON");
    rig.send("AUTO");

    assert_eq!(rig.svc.mode(), Mode::Auto);
    assert!(!rig.svc.is_light_on());
    assert!(!rig.hw.relay_on());
}

// ── Clock pacing ──────────────────────────────────────────────

#[test]
fn minute_ticks_drive_schedule_in_auto() {
    let mut rig = Rig::boot();
    rig.send("H:05:58");

    rig.advance(MINUTE_MS);
    assert_eq!(rig.svc.time(), TimeOfDay::new(5, 59).unwrap());
    assert!(!rig.hw.relay_on());

    rig.advance(MINUTE_MS);
    assert_eq!(rig.svc.time(), TimeOfDay::new(6, 0).unwrap());
    assert!(rig.hw.relay_on());

    rig.send("H:19:59");
    rig.advance(MINUTE_MS);
    assert_eq!(rig.svc.time(), TimeOfDay::new(20, 0).unwrap());
    assert!(!rig.hw.relay_on());
}

#[test]
fn time_set_restarts_minute_interval() {
    let mut rig = Rig::boot();
    rig.advance(MINUTE_MS - 1);
    rig.send("H:09:05");
    rig.advance(1);
    assert_eq!(rig.svc.time(), TimeOfDay::new(9, 5).unwrap());

    rig.advance(MINUTE_MS - 1);
    assert_eq!(rig.svc.time(), TimeOfDay::new(9, 6).unwrap());
}

#[test]
fn clock_wraps_at_midnight() {
    let mut rig = Rig::boot();
    rig.send("H:23:59");
    rig.advance(MINUTE_MS);
    assert_eq!(rig.svc.time(), TimeOfDay::MIDNIGHT);
}

#[test]
fn commands_run_before_tick_in_same_iteration() {
    let mut rig = Rig::boot();
    rig.now_ms = MINUTE_MS;
    // The time-set resets the interval, so no tick follows in this poll.
    rig.send("H:10:00");
    assert_eq!(rig.svc.time(), TimeOfDay::new(10, 0).unwrap());
    assert_eq!(rig.sink.count(|e| matches!(e, AppEvent::MinuteTick(_))), 0);
}

// ── Status reporting ──────────────────────────────────────────

#[test]
fn sensor_fault_reports_zeros() {
    let mut rig = Rig::boot_with(MockHardware::with_reading(ClimateReading::UNAVAILABLE));
    rig.send("D");
    assert_eq!(rig.link.last_reply(), Some("0.0,0,0,00:00,0"));
}

#[test]
fn each_status_request_reads_sensor_once() {
    let mut hw = MockHardware::new();
    hw.readings.push_back(ClimateReading::new(19.96, 63.5));
    hw.readings.push_back(ClimateReading::new(f32::NAN, 40.0));
    let mut rig = Rig::boot_with(hw);

    rig.send("D");
    rig.send("DATA");
    assert_eq!(rig.hw.sensor_reads, 2);
    assert_eq!(
        rig.link.replies,
        vec!["20.0,64,0,00:00,0".to_string(), "0.0,0,0,00:00,0".to_string()]
    );
}

#[test]
fn write_failure_keeps_loop_alive() {
    let mut rig = Rig::boot();
    rig.link.fail_writes = true;
    rig.send("D");
    assert_eq!(rig.sink.count(|e| matches!(e, AppEvent::LinkError(_))), 1);

    rig.link.fail_writes = false;
    rig.send("ON");
    assert!(rig.hw.relay_on());
}

// ── Ignored input ─────────────────────────────────────────────

#[test]
fn unknown_and_malformed_lines_are_silent() {
    let mut rig = Rig::boot();
    for line in ["on", "Auto", "hello", "H1430", "H:14", "  "] {
        rig.send(line);
    }
    assert!(rig.link.replies.is_empty());
    assert_eq!(rig.hw.relay_writes, vec![false]);
    assert_eq!(rig.svc.time(), TimeOfDay::MIDNIGHT);
    assert_eq!(rig.svc.mode(), Mode::Auto);
}

#[test]
fn out_of_range_time_set_is_rejected() {
    let mut rig = Rig::boot();
    rig.send("H:12:00");
    rig.send("H:99:75");
    assert_eq!(rig.svc.time(), TimeOfDay::new(12, 0).unwrap());
    assert_eq!(
        rig.sink
            .count(|e| matches!(e, AppEvent::CommandRejected(_))),
        1
    );
}

#[test]
fn one_command_per_iteration() {
    let mut rig = Rig::boot();
    rig.link.send("ON");
    rig.link.send("OFF");
    rig.poll();
    assert!(rig.svc.is_light_on());
    rig.poll();
    assert!(!rig.svc.is_light_on());
    assert_eq!(rig.svc.iterations(), 2);
}
