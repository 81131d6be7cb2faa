use std::fmt;

use crate::constants::SENSOR_REPORT_LEN;
use crate::poller::ProbeError;

/// One decoded sensor feature report.
///
/// The raw bytes are kept so every poll line can show them next to the
/// decoded values. Byte 0 is the report ID echoed by the firmware; it is
/// trusted, not checked.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct SensorReading {
    pub raw: [u8; SENSOR_REPORT_LEN],
    pub temperature: u16,
    pub distance: u16,
}

impl SensorReading {
    /// Decodes a feature report: bytes 1-2 are the little-endian temperature,
    /// bytes 3-4 the little-endian distance.
    pub fn decode(report: &[u8]) -> Result<SensorReading, ProbeError> {
        if report.len() < SENSOR_REPORT_LEN {
            return Err(ProbeError::ShortReport {
                expected: SENSOR_REPORT_LEN,
                actual: report.len(),
            });
        }

        let mut raw = [0u8; SENSOR_REPORT_LEN];
        raw.copy_from_slice(&report[..SENSOR_REPORT_LEN]);

        Ok(SensorReading {
            raw,
            temperature: u16::from_le_bytes([raw[1], raw[2]]),
            distance: u16::from_le_bytes([raw[3], raw[4]]),
        })
    }
}

impl fmt::Display for SensorReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bytes: {} {} {} {} {}  Temp: {}  Dist: {}",
            self.raw[0],
            self.raw[1],
            self.raw[2],
            self.raw[3],
            self.raw[4],
            self.temperature,
            self.distance
        )
    }
}
