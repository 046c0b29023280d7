use crate::cat::Cat;
use crate::error::Error;
use crate::meter::{Line, Meter, Meters};
use core::fmt;
use embedded_hal::{serial, timer::CountDown};

/// One round of meter readings.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub lines: [Line; 5],
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Reads every meter once and renders the readings.
///
/// All meters are read before any of them is rendered, so a reading
/// outside its calibration fails the whole round.
pub fn poll<Serial, Timer, E>(
    cat: &mut Cat<Serial, Timer>,
    meters: &Meters,
) -> Result<Snapshot, Error<E>>
where
    Serial: serial::Read<u8, Error = E> + serial::Write<u8, Error = E>,
    Timer: CountDown,
    Timer::Time: Clone,
{
    let mut raw = [0; 5];
    for (raw, meter) in raw.iter_mut().zip(Meter::ALL) {
        *raw = cat.read_meter(meter)?;
    }

    let [signal, alc, power, swr, current] = raw;

    Ok(Snapshot {
        lines: [
            meters.render(Meter::Signal, signal)?,
            meters.render(Meter::Alc, alc)?,
            meters.render(Meter::Power, power)?,
            meters.render(Meter::Swr, swr)?,
            meters.render(Meter::Current, current)?,
        ],
    })
}
