use derive_more::Display;
use hidapi::HidDeviceInfo;

/// A fixed-shape summary of an enumerated HID device.
///
/// Only `vid` and `pid` are used to open the device; the remaining fields are
/// carried along so the discovery output can show what was found.
#[derive(Debug, Display, Eq, PartialEq, Clone)]
#[display(
    fmt = "DeviceSummary {{ vid: {:04x}, pid: {:04x}, manufacturer: {:?}, product: {:?}, sn: {:?}, path: {} }}",
    vid,
    pid,
    manufacturer,
    product,
    serial_number,
    path
)]
pub struct DeviceSummary {
    pub vid: u16,
    pub pid: u16,
    pub manufacturer: Option<String>,
    pub product: Option<String>,
    pub serial_number: Option<String>,
    pub path: String,
}

impl From<&HidDeviceInfo> for DeviceSummary {
    fn from(info: &HidDeviceInfo) -> Self {
        DeviceSummary {
            vid: info.vendor_id,
            pid: info.product_id,
            manufacturer: info.manufacturer_string.clone(),
            product: info.product_string.clone(),
            serial_number: info.serial_number.clone(),
            path: info.path.to_string_lossy().into_owned(),
        }
    }
}
