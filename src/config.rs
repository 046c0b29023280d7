use core::time::Duration;

/// Configuration for talking to the transceiver.
///
/// - `port`: The serial device the CAT interface is attached to
/// - `baud_rate`: The CAT rate set in the transceiver's menu
/// - `timeout`: How long to wait for each byte of a response
/// - `poll_interval`: The pause between two rounds of meter readings
/// - `model`: The identification the transceiver must answer `ID` with
///
/// # Examples
///
/// ```
/// use cat_meter::Config;
/// use core::time::Duration;
///
/// let config = Config {
///     port: "/dev/ttyUSB1",
///     poll_interval: Duration::from_millis(500),
///     ..Config::default()
/// };
///
/// assert_eq!(config.baud_rate, 9600);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: &'static str,
    pub baud_rate: u32,
    pub timeout: Duration,
    pub poll_interval: Duration,
    pub model: &'static str,
}

/// Identification of the FT-891.
pub const FT891: &str = "0650";

impl Default for Config {
    fn default() -> Self {
        Self {
            port: "/dev/ttyUSB0",
            baud_rate: 9600,
            timeout: Duration::from_secs(1),
            poll_interval: Duration::from_millis(250),
            model: FT891,
        }
    }
}
