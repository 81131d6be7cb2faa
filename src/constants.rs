use std::time::Duration;

/// TinyUSB's default example Vendor ID.
pub static TINYUSB_VID: u16 = 0xcafe;

/// Adafruit's Vendor ID.
pub static ADAFRUIT_VID: u16 = 0x239a;

/// Raspberry Pi's Vendor ID.
pub static RASPBERRY_PI_VID: u16 = 0x2e8a;

/// Espressif's Vendor ID.
pub static ESPRESSIF_VID: u16 = 0x303a;

/// Vendor IDs the probe will look for, in the order they are checked.
pub static SUPPORTED_VIDS: [u16; 4] = [
    TINYUSB_VID,
    ADAFRUIT_VID,
    RASPBERRY_PI_VID,
    ESPRESSIF_VID,
];

/// Report ID of the sensor feature report.
pub const SENSOR_REPORT_ID: u8 = 1;

/// Size of the sensor feature report: the echoed report ID followed by two
/// little-endian 16-bit fields.
pub const SENSOR_REPORT_LEN: usize = 5;

/// Wall-clock interval between feature report polls.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);
