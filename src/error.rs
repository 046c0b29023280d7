use crate::calibration::OutOfRange;
use core::fmt;

/// Longest model identification kept for error reports.
pub const MODEL_CAPACITY: usize = 16;

/// Errors returned while talking to the transceiver.
///
/// `E` is the error type of the underlying serial device.
#[derive(Debug, Clone, PartialEq)]
pub enum Error<E> {
    /// The serial device failed.
    Serial(E),
    /// No byte arrived before the timer ran out.
    Timeout,
    /// The response was shorter than the echoed request.
    ResponseTooShort,
    /// The response did not start with the request.
    EchoMismatch,
    /// The response did not fit into the receive buffer.
    Overflow,
    /// The payload is not valid UTF-8.
    NotText,
    /// A meter payload is not a number between 0 and 255.
    InvalidReading,
    /// A raw meter code lies outside its calibration table.
    OutOfCalibration(OutOfRange),
    /// The transceiver identified itself as another model.
    ModelMismatch(heapless::String<MODEL_CAPACITY>),
}

impl<E> From<OutOfRange> for Error<E> {
    fn from(error: OutOfRange) -> Self {
        Error::OutOfCalibration(error)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Serial(error) => write!(f, "serial port error: {:?}", error),
            Error::Timeout => f.write_str("timed out waiting for CAT response"),
            Error::ResponseTooShort => f.write_str("CAT response too short"),
            Error::EchoMismatch => f.write_str("CAT response does not echo the request"),
            Error::Overflow => f.write_str("CAT response too long"),
            Error::NotText => f.write_str("CAT response is not text"),
            Error::InvalidReading => f.write_str("meter reading is not a number from 0 to 255"),
            Error::OutOfCalibration(error) => write!(f, "{}", error),
            Error::ModelMismatch(model) => write!(f, "unexpected model ID: {}", model),
        }
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug> std::error::Error for Error<E> {}
