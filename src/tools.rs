use hidapi::HidDevice;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Initializes the global logging facility.
///
/// If `RUST_LOG` is not set, this function will set the global default logging level to `info`,
/// and for `sensor_probe` it will set the `trace` logging level.
///
/// Log messages are formatted and printed to standard output by `tracing_subscriber::FmtSubscriber`.
///
/// # Panics
///
/// Panics if the initialization was unsuccessful, likely because a global subscriber was already
/// installed by another call to try_init.
pub fn initialize_logging(json_output: bool) {
    // set default logging levels:
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info,sensor_probe=trace");
    }
    let subscriber = FmtSubscriber::builder().with_max_level(Level::TRACE);
    if json_output {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Get a formatted string composed of manufacturer string and product string.
pub fn get_full_device_name(device: &HidDevice) -> String {
    let manufacturer = device
        .get_manufacturer_string()
        .map_or_else(|e| format!("{:?}", e), |m| m.unwrap_or_else(|| "NA".to_string()));
    let product = device
        .get_product_string()
        .map_or_else(|e| format!("{:?}", e), |p| p.unwrap_or_else(|| "NA".to_string()));

    format!("{} {}", manufacturer, product)
}
