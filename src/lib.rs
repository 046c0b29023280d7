//! Live meter readout for the Yaesu FT-891 over its CAT interface.
//!
//! The transceiver reports its meters as raw codes from 0 to 255. This
//! crate reads them with the `RM` commands and converts them to physical
//! units by linear interpolation between calibration points.
//!
//! ```
//! use cat_meter::{host::Deadline, monitor, Cat, Meters};
//! use core::time::Duration;
//! use embedded_hal_mock::serial::{Mock, Transaction};
//!
//! let mut expectations = vec![];
//! for (request, response) in [
//!     ("RM1;", "RM1130;"),
//!     ("RM4;", "RM4000;"),
//!     ("RM5;", "RM5050;"),
//!     ("RM6;", "RM6000;"),
//!     ("RM7;", "RM7017;"),
//! ] {
//!     expectations.push(Transaction::write_many(request.as_bytes()));
//!     expectations.push(Transaction::flush());
//!     expectations.push(Transaction::read_many(response.as_bytes()));
//! }
//!
//! let mut cat = Cat::new(Mock::new(&expectations), Deadline::new(), Duration::from_secs(1));
//! let snapshot = monitor::poll(&mut cat, &Meters::new()).unwrap();
//!
//! assert_eq!(snapshot.lines[0].to_string(), "Sig:   130 [########        ] S9 (0 dB)");
//! assert_eq!(snapshot.lines[2].to_string(), "Power:  50 [###             ] 8.0 W");
//! ```
#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod calibration;
mod cat;
mod config;
mod error;
mod interpolate;
mod meter;

#[cfg(feature = "std")]
pub mod host;
pub mod monitor;

pub use calibration::{Calibration, OutOfRange, Point, Reading, RAW_FULL_SCALE};
pub use cat::{Cat, BUFFER_CAPACITY, TERMINATOR};
pub use config::{Config, FT891};
pub use error::{Error, MODEL_CAPACITY};
pub use meter::{Bar, Line, Meter, Meters, Value, BAR_SEGMENTS};

/// Calibration tables of the FT-891 meters.
pub mod tables {
    pub use crate::meter::{alc, current, power, signal, swr};
}
