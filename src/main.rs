use std::process;

use tracing::{error, info};

use crate::poller::PollerConfig;

// Diagnostic probe for the TinyUSB sensor HID example firmware.
//
// The firmware exposes a HID sensor collection (usage page 0x20) whose state
// is read through a single feature report: report ID 1 followed by two
// little-endian 16-bit fields, a temperature and a distance. This probe
// enumerates the vendor IDs the example firmware ships under (TinyUSB,
// Adafruit, Raspberry Pi, Espressif), opens the first board it finds and
// prints the decoded reading once per second.
//
// Any open or read failure is fatal. There is no reconnect handling; unplug
// the board and the probe exits.

pub mod constants;
pub mod devices;
pub mod poller;
pub mod report;
pub mod tools;

#[tracing::instrument]
fn main() {
    tools::initialize_logging(false);
    info!("Starting sensor probe.");

    let config = PollerConfig::default();

    if let Err(e) = poller::run(&config) {
        error!("Fatal: {}", e);
        process::exit(1);
    }
}
