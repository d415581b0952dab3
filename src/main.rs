//! Growlight Firmware: Main Entry Point
//!
//! Hexagonal architecture with a single cooperative control loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter    SerialLink<UART0>   LogEventSink  Esp32Time │
//! │  (Climate+Relay)    (LinePort)          (EventSink)   (TimePort)│
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │           ControllerService (pure logic)               │    │
//! │  │  Clock · ModeController · Commands · Status            │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use esp_idf_hal::delay::{Ets, FreeRtos};
use esp_idf_hal::gpio::{Gpio0, PinDriver, Pull};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::uart::{UartDriver, config::Config as UartConfig};
use esp_idf_hal::units::Hertz;
use log::{LevelFilter, info};

use growlight::adapters::hardware::HardwareAdapter;
use growlight::adapters::log_sink::LogEventSink;
use growlight::adapters::time::Esp32TimeAdapter;
use growlight::app::ports::TimePort;
use growlight::app::service::ControllerService;
use growlight::config::ControllerConfig;
use growlight::drivers::dht11::Dht11;
use growlight::drivers::relay::RelayDriver;
use growlight::link::serial::SerialLink;
use growlight::pins;

// ── Console ───────────────────────────────────────────────────
//
// UART0 carries both the IDF console and the host link.  The host reads
// exactly one line per `D`, so while they share the UART every log source,
// Rust and C alike, is turned off before the first record is written.

fn apply_console_log_level(config: &ControllerConfig) {
    let level = config.console_log_level();
    log::set_max_level(level);
    if level == LevelFilter::Off {
        // SAFETY: static NUL-terminated tag; no other task is logging yet.
        unsafe {
            esp_idf_svc::sys::esp_log_level_set(
                c"*".as_ptr(),
                esp_idf_svc::sys::esp_log_level_t_ESP_LOG_NONE,
            );
        }
    }
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    let config = ControllerConfig::default();
    esp_idf_logger::init()?;
    apply_console_log_level(&config);

    info!("╔══════════════════════════════════════╗");
    info!("║  Growlight v{}                       ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    let peripherals = Peripherals::take()?;

    // ── 2. Relay first, so the light is off before anything else ─
    let relay = RelayDriver::new(PinDriver::output(peripherals.pins.gpio8)?);
    info!(
        "Relay on GPIO {} (active-{}) forced OFF",
        pins::RELAY_GPIO,
        if pins::RELAY_ACTIVE_LOW { "low" } else { "high" }
    );

    // ── 3. Configuration ──────────────────────────────────────
    config.validate()?;
    info!(
        "Config: window {:02}:00-{:02}:00, tick {} ms, {} baud",
        config.light_on_hour, config.light_off_hour, config.tick_interval_ms, config.baud_rate
    );

    // ── 4. Climate sensor ─────────────────────────────────────
    let mut dht_pin = PinDriver::input_output_od(peripherals.pins.gpio2)?;
    dht_pin.set_pull(Pull::Up)?;
    let dht = Dht11::new(dht_pin, Ets);
    info!("DHT11 on GPIO {}", pins::DHT11_GPIO);

    // ── 5. Host link ──────────────────────────────────────────
    let uart_config = UartConfig::default().baudrate(Hertz(config.baud_rate));
    let uart = UartDriver::new(
        peripherals.uart0,
        peripherals.pins.gpio21,
        peripherals.pins.gpio20,
        Option::<Gpio0>::None,
        Option::<Gpio0>::None,
        &uart_config,
    )?;
    info!(
        "UART0 TX={} RX={} at {} baud",
        pins::UART_TX_GPIO,
        pins::UART_RX_GPIO,
        config.baud_rate
    );

    // ── 6. Wire adapters into the service ─────────────────────
    let mut hw = HardwareAdapter::new(relay, dht);
    let mut link = SerialLink::new(uart);
    let mut log_sink = LogEventSink::new();
    let time_adapter = Esp32TimeAdapter::new();

    let mut service = ControllerService::new(config);
    service.start(time_adapter.now_ms(), &mut hw, &mut log_sink);

    info!("System ready. Entering control loop.");

    // ── 7. Control loop ───────────────────────────────────────
    loop {
        service.poll(time_adapter.now_ms(), &mut hw, &mut link, &mut log_sink);
        FreeRtos::delay_ms(1);
    }
}
