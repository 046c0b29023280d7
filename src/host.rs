//! Serial port and timer implementations for running on a host computer.

use crate::config::Config;
use core::time::Duration;
use embedded_hal::{serial, timer::CountDown};
use serialport::{DataBits, Parity, SerialPort, StopBits};
use std::io::{self, Read, Write};
use std::time::Instant;
use void::Void;

/// How long a single read blocks before control returns to the caller's
/// timer.
const READ_SLICE: Duration = Duration::from_millis(10);

/// A serial port opened through `serialport`.
pub struct Port(Box<dyn SerialPort>);

impl Port {
    /// Opens the port named in `config` at 8N1.
    pub fn open(config: &Config) -> Result<Self, serialport::Error> {
        let port = serialport::new(config.port, config.baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .timeout(READ_SLICE)
            .open()?;

        log::info!("opened {} at {} baud", config.port, config.baud_rate);

        Ok(Self(port))
    }
}

impl serial::Read<u8> for Port {
    type Error = io::Error;

    fn read(&mut self) -> nb::Result<u8, Self::Error> {
        let mut byte = [0];

        match self.0.read(&mut byte) {
            Ok(1) => Ok(byte[0]),
            Ok(_) => Err(nb::Error::WouldBlock),
            Err(error)
                if matches!(
                    error.kind(),
                    io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
                ) =>
            {
                Err(nb::Error::WouldBlock)
            }
            Err(error) => Err(nb::Error::Other(error)),
        }
    }
}

impl serial::Write<u8> for Port {
    type Error = io::Error;

    fn write(&mut self, word: u8) -> nb::Result<(), Self::Error> {
        self.0.write_all(&[word]).map_err(nb::Error::Other)
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        self.0.flush().map_err(nb::Error::Other)
    }
}

/// A timer backed by the system clock.
///
/// A timer that was never started counts as expired.
#[derive(Debug, Default)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CountDown for Deadline {
    type Time = Duration;

    fn start<T>(&mut self, count: T)
    where
        T: Into<Self::Time>,
    {
        self.at = Some(Instant::now() + count.into());
    }

    fn wait(&mut self) -> nb::Result<(), Void> {
        match self.at {
            Some(at) if Instant::now() < at => Err(nb::Error::WouldBlock),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unstarted_deadline_is_expired() {
        assert!(Deadline::new().wait().is_ok());
    }

    #[test]
    fn deadline_blocks_until_expired() {
        let mut deadline = Deadline::new();

        deadline.start(Duration::from_secs(3600));
        assert!(matches!(deadline.wait(), Err(nb::Error::WouldBlock)));

        deadline.start(Duration::ZERO);
        assert!(deadline.wait().is_ok());
    }

    #[test]
    fn missing_port() {
        let config = Config {
            port: "/dev/does-not-exist",
            ..Config::default()
        };

        assert!(Port::open(&config).is_err());
    }
}
