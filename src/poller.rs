use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::sleep;
use std::time::{Duration, Instant};

use hidapi::{HidApi, HidDevice, HidError, HidResult};
use thiserror::Error;
use tracing::{debug, info};

use crate::constants::{POLL_INTERVAL, SENSOR_REPORT_ID, SENSOR_REPORT_LEN, SUPPORTED_VIDS};
use crate::devices::DeviceSummary;
use crate::report::SensorReading;
use crate::tools::get_full_device_name;

/// Everything that can stop the probe. Nothing is retried; every variant is
/// fatal at the top level.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to initialize the hidapi: {0}")]
    Init(#[source] HidError),

    #[error("failed to open device {vid:04x}:{pid:04x}: {source}")]
    DeviceOpen {
        vid: u16,
        pid: u16,
        source: HidError,
    },

    #[error("feature report read failed: {0}")]
    DeviceIo(#[source] HidError),

    #[error("short feature report: expected {expected} bytes, got {actual}")]
    ShortReport { expected: usize, actual: usize },
}

/// Immutable probe configuration, fixed at startup.
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Vendor IDs to enumerate, in the order they are checked.
    pub vendor_ids: Vec<u16>,
    /// Report ID of the sensor feature report.
    pub report_id: u8,
    /// Expected feature report length, report ID byte included.
    pub report_len: usize,
    /// Wall-clock interval between polls.
    pub poll_interval: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        PollerConfig {
            vendor_ids: SUPPORTED_VIDS.to_vec(),
            report_id: SENSOR_REPORT_ID,
            report_len: SENSOR_REPORT_LEN,
            poll_interval: POLL_INTERVAL,
        }
    }
}

/// Initializes the hidapi.
/// Will also initialize the currently available device list.
#[tracing::instrument]
pub fn initialize_hidapi() -> HidResult<HidApi> {
    debug!("Initializing the hidapi.");
    HidApi::new()
}

/// Anything that can answer a blocking feature report request. `HidDevice` is
/// the production implementation; tests substitute a scripted fake.
pub trait FeatureReportSource {
    /// `buf[0]` carries the requested report ID on input. On success
    /// `buf[..len]` holds the report, echoed report ID included.
    fn read_feature_report(&self, buf: &mut [u8]) -> Result<usize, ProbeError>;
}

impl FeatureReportSource for HidDevice {
    fn read_feature_report(&self, buf: &mut [u8]) -> Result<usize, ProbeError> {
        self.get_feature_report(buf).map_err(ProbeError::DeviceIo)
    }
}

/// Keeps only devices whose vendor ID is in `vendor_ids`, ordered VID-major
/// with the subsystem's enumeration order preserved within a VID.
pub fn filter_by_vendor(attached: &[DeviceSummary], vendor_ids: &[u16]) -> Vec<DeviceSummary> {
    let mut candidates = vec![];
    for vid in vendor_ids {
        for device in attached.iter().filter(|d| d.vid == *vid) {
            candidates.push(device.clone());
        }
    }
    candidates
}

/// Refreshes the device list and collects every attached device matching the
/// vendor-ID allow-list. A VID with no devices contributes nothing.
#[tracing::instrument(skip(hidapi))]
pub fn enumerate_candidates(hidapi: &mut HidApi, vendor_ids: &[u16]) -> Vec<DeviceSummary> {
    info!("Refreshing devices list and searching for matching devices...");
    let _r = hidapi.refresh_devices();

    let attached: Vec<DeviceSummary> = hidapi.devices().iter().map(DeviceSummary::from).collect();

    filter_by_vendor(&attached, vendor_ids)
}

/// Polls the sensor feature report until `stop` is set.
///
/// Each cycle requests report ID `config.report_id`, decodes the reading and
/// prints it, then sleeps to the next poll deadline. Deadlines advance by a
/// fixed `config.poll_interval`, so the cadence does not drift with the time
/// a read takes. Read errors and short reports are not caught here.
#[tracing::instrument(skip(source, stop))]
pub fn poll_loop<S: FeatureReportSource>(
    source: &S,
    config: &PollerConfig,
    stop: &AtomicBool,
) -> Result<(), ProbeError> {
    info!("Entering poll loop.");

    let mut next_poll = Instant::now() + config.poll_interval;

    while !stop.load(Ordering::Relaxed) {
        let mut buf = vec![0u8; config.report_len];
        buf[0] = config.report_id;

        let len = source.read_feature_report(&mut buf)?;
        let reading = SensorReading::decode(&buf[..len])?;

        info!("{}", reading);

        // Re-check before sleeping so a stop requested during the read is
        // honored immediately instead of one interval later.
        if stop.load(Ordering::Relaxed) {
            break;
        }

        let now = Instant::now();
        if next_poll > now {
            sleep(next_poll - now);
        }
        next_poll += config.poll_interval;
    }

    debug!("Poll loop stopped.");
    Ok(())
}

/// Opens the device the probe will poll: the first candidate, through the
/// given `open` callback. Returns `Ok(None)` when there are no candidates,
/// which is a clean (header-output-only) run, not an error.
///
/// Candidates after the first are never opened; on a healthy device the poll
/// loop that follows never returns.
pub fn open_first_candidate<D, F>(
    candidates: &[DeviceSummary],
    mut open: F,
) -> Result<Option<D>, ProbeError>
where
    F: FnMut(&DeviceSummary) -> Result<D, ProbeError>,
{
    match candidates.first() {
        Some(candidate) => open(candidate).map(Some),
        None => {
            info!("No matching devices attached.");
            Ok(None)
        }
    }
}

/// Runs the whole enumerate -> open -> poll cycle.
#[tracing::instrument]
pub fn run(config: &PollerConfig) -> Result<(), ProbeError> {
    let mut hidapi = initialize_hidapi().map_err(ProbeError::Init)?;

    info!(
        "VID allow-list: {}",
        config
            .vendor_ids
            .iter()
            .map(|v| format!("{:04x}", v))
            .collect::<Vec<_>>()
            .join(", ")
    );

    let candidates = enumerate_candidates(&mut hidapi, &config.vendor_ids);
    for candidate in &candidates {
        info!("{}", candidate);
    }

    let opened = open_first_candidate(&candidates, |candidate| {
        hidapi
            .open(candidate.vid, candidate.pid)
            .map_err(|source| ProbeError::DeviceOpen {
                vid: candidate.vid,
                pid: candidate.pid,
                source,
            })
    })?;

    if let Some(device) = opened {
        info!("Device name: {}.", get_full_device_name(&device));

        let stop = AtomicBool::new(false);
        poll_loop(&device, config, &stop)
    } else {
        Ok(())
    }
}
