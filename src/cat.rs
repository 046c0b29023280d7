use crate::error::Error;
use crate::meter::Meter;
use embedded_hal::{serial, timer::CountDown};

/// Ends every CAT request and response.
pub const TERMINATOR: u8 = b';';

/// Size of the receive buffer. Responses longer than this are rejected.
pub const BUFFER_CAPACITY: usize = 32;

/// A CAT connection to the transceiver.
///
/// Requests are written as `<code>;` and the transceiver answers with
/// `<code><payload>;`. The timer bounds the wait for every byte of the
/// response.
#[derive(Debug)]
pub struct Cat<Serial, Timer>
where
    Timer: CountDown,
{
    serial: Serial,
    timer: Timer,
    timeout: Timer::Time,
    buffer: heapless::Vec<u8, BUFFER_CAPACITY>,
}

impl<Serial, Timer, E> Cat<Serial, Timer>
where
    Serial: serial::Read<u8, Error = E> + serial::Write<u8, Error = E>,
    Timer: CountDown,
    Timer::Time: Clone,
{
    /// Returns a connection over `serial`, waiting at most `timeout` for
    /// each byte of a response.
    ///
    /// # Examples
    ///
    /// ```
    /// use cat_meter::{host::Deadline, Cat};
    /// use core::time::Duration;
    /// use embedded_hal_mock::serial::Mock;
    ///
    /// let serial: Mock<u8> = Mock::new(&[]);
    /// let cat = Cat::new(serial, Deadline::new(), Duration::from_secs(1));
    ///
    /// let (mut serial, _timer) = cat.free();
    /// serial.done();
    /// ```
    pub fn new(serial: Serial, timer: Timer, timeout: Timer::Time) -> Self {
        Self {
            serial,
            timer,
            timeout,
            buffer: heapless::Vec::new(),
        }
    }

    /// Destroys the connection and returns the serial port and timer.
    pub fn free(self) -> (Serial, Timer) {
        (self.serial, self.timer)
    }

    /// Sends `request` and returns the payload of the response, with
    /// the echoed request stripped.
    ///
    /// # Examples
    ///
    /// ```
    /// use cat_meter::{host::Deadline, Cat};
    /// use core::time::Duration;
    /// use embedded_hal_mock::serial::{Mock, Transaction};
    ///
    /// let serial = Mock::new(&[
    ///     Transaction::write_many(b"RM5;"),
    ///     Transaction::flush(),
    ///     Transaction::read_many(b"RM5075;"),
    /// ]);
    ///
    /// let mut cat = Cat::new(serial, Deadline::new(), Duration::from_secs(1));
    /// assert_eq!(cat.exchange("RM5"), Ok("075"));
    /// ```
    pub fn exchange(&mut self, request: &str) -> Result<&str, Error<E>> {
        log::trace!("> {};", request);

        for &byte in request.as_bytes().iter().chain(&[TERMINATOR]) {
            nb::block!(self.serial.write(byte)).map_err(Error::Serial)?;
        }
        nb::block!(self.serial.flush()).map_err(Error::Serial)?;

        self.buffer.clear();
        loop {
            let byte = self.read_byte()?;
            if byte == TERMINATOR {
                break;
            }
            self.buffer.push(byte).map_err(|_| Error::Overflow)?;
        }

        log::trace!("< {:?}", self.buffer.as_slice());

        let response = self.buffer.as_slice();
        if response.len() < request.len() {
            return Err(Error::ResponseTooShort);
        }

        let (echo, payload) = response.split_at(request.len());
        if echo != request.as_bytes() {
            return Err(Error::EchoMismatch);
        }

        core::str::from_utf8(payload).map_err(|_| Error::NotText)
    }

    /// Checks that the transceiver identifies itself as `model`.
    ///
    /// Returns `Err(Error::ModelMismatch)` holding the reported
    /// identification if it doesn't.
    pub fn identify(&mut self, model: &str) -> Result<(), Error<E>> {
        let reported = self.exchange("ID")?;

        if reported != model {
            log::warn!("expected model {}, got {}", model, reported);

            let mut kept = heapless::String::new();
            for c in reported.chars() {
                if kept.push(c).is_err() {
                    break;
                }
            }
            return Err(Error::ModelMismatch(kept));
        }

        log::info!("transceiver identified as {}", reported);
        Ok(())
    }

    /// Reads the raw code of `meter`.
    pub fn read_meter(&mut self, meter: Meter) -> Result<u8, Error<E>> {
        self.exchange(meter.command())?
            .parse()
            .map_err(|_| Error::InvalidReading)
    }

    fn read_byte(&mut self) -> Result<u8, Error<E>> {
        self.timer.start(self.timeout.clone());

        loop {
            match self.timer.wait() {
                Ok(()) => return Err(Error::Timeout),
                Err(nb::Error::WouldBlock) => (),
                Err(nb::Error::Other(never)) => void::unreachable(never),
            }

            match self.serial.read() {
                Ok(byte) => return Ok(byte),
                Err(nb::Error::WouldBlock) => (),
                Err(nb::Error::Other(error)) => return Err(Error::Serial(error)),
            }
        }
    }
}
