use crate::interpolate::interpolate;
use core::fmt;

/// Full scale of a raw meter code as reported by the transceiver.
pub const RAW_FULL_SCALE: u32 = 255;

/// A single calibration point: the raw meter code at which the meter
/// reads `value`, and the label of the band starting there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub raw: f32,
    pub value: f32,
    pub label: &'static str,
}

impl Point {
    pub fn new(raw: u8, value: f32, label: &'static str) -> Self {
        Self {
            raw: raw as f32,
            value,
            label,
        }
    }

    pub fn unlabelled(raw: u8, value: f32) -> Self {
        Self::new(raw, value, "")
    }

    /// Converts a position on a meter face into a point on the raw scale.
    ///
    /// # Arguments
    ///
    /// - `position`: The distance of the mark from the start of the scale (eg. in pixels)
    /// - `full_scale`: The distance corresponding to a raw code of 255
    /// - `value`: The value printed at the mark
    ///
    /// # Examples
    ///
    /// ```
    /// use cat_meter::Point;
    ///
    /// // 52 of 97 pixels on the SWR scale is 3.0
    /// let point = Point::scaled(52, 97, 3.0);
    /// assert!(point.raw > 136.0 && point.raw < 137.0);
    /// ```
    pub fn scaled(position: u32, full_scale: u32, value: f32) -> Self {
        Self {
            raw: position as f32 * RAW_FULL_SCALE as f32 / full_scale as f32,
            value,
            label: "",
        }
    }

    fn reading(&self) -> Reading {
        Reading {
            value: self.value,
            label: self.label,
        }
    }
}

/// A calibrated meter value and the label of the band it falls in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub value: f32,
    pub label: &'static str,
}

/// Returned when a raw code lies outside a calibration table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    pub raw: u8,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid meter value: {}", self.raw)
    }
}

#[derive(Debug, Clone)]
pub struct Calibration<const LENGTH: usize> {
    points: [Point; LENGTH],
}

impl<const LENGTH: usize> Calibration<LENGTH> {
    const NON_EMPTY: () = assert!(LENGTH > 0, "A calibration table needs at least one point");

    /// Returns a calibration table using the provided points.
    ///
    /// The points must be in ascending order by raw code or this
    /// function will panic when running in debug mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use cat_meter::{Calibration, Point};
    ///
    /// let current = Calibration::new([
    ///     Point::unlabelled(0, 0.0),
    ///     Point::unlabelled(255, 30.0),
    /// ]);
    /// ```
    pub fn new(points: [Point; LENGTH]) -> Self {
        let () = Self::NON_EMPTY;

        debug_assert!(
            points.windows(2).all(|w| w[0].raw <= w[1].raw),
            "The points in a calibration table must be in ascending order by raw code"
        );

        Self { points }
    }

    /// Returns the calibrated value for `raw`, using linear
    /// interpolation between points in the table if necessary.
    ///
    /// A raw code matching a point exactly returns that point's value
    /// and label. Any other code is labelled with the point below it.
    /// If `raw` falls outside the range of the table, returns
    /// `Err(OutOfRange)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cat_meter::{Calibration, Point};
    ///
    /// let signal = Calibration::new([
    ///     Point::new(112, -6.0, "S8"),
    ///     Point::new(130, 0.0, "S9"),
    ///     Point::new(150, 10.0, "S9+10"),
    /// ]);
    ///
    /// let reading = signal.read(140).unwrap();
    /// assert_eq!(reading.value, 5.0);
    /// assert_eq!(reading.label, "S9");
    ///
    /// assert!(signal.read(151).is_err());
    /// ```
    pub fn read(&self, raw: u8) -> Result<Reading, OutOfRange> {
        let x = f32::from(raw);

        if x < self.min_raw() || x > self.max_raw() {
            return Err(OutOfRange { raw });
        }

        if let Some(point) = self.points.iter().find(|point| point.raw == x) {
            return Ok(point.reading());
        }

        let (prev, next) = self
            .points
            .windows(2)
            .find_map(|w| {
                if w[0].raw < x && x < w[1].raw {
                    Some((&w[0], &w[1]))
                } else {
                    None
                }
            })
            .ok_or(OutOfRange { raw })?;

        Ok(Reading {
            value: interpolate(prev.raw, next.raw, prev.value, next.value, x),
            label: prev.label,
        })
    }

    pub fn points(&self) -> &[Point; LENGTH] {
        &self.points
    }

    /// The smallest raw code covered by the table.
    pub fn min_raw(&self) -> f32 {
        self.first().raw
    }

    /// The largest raw code covered by the table.
    pub fn max_raw(&self) -> f32 {
        self.last().raw
    }

    /// Returns the smallest value that can be returned by
    /// [`read`](Calibration::read).
    pub fn min_value(&self) -> f32 {
        self.first().value.min(self.last().value)
    }

    /// Returns the largest value that can be returned by
    /// [`read`](Calibration::read).
    pub fn max_value(&self) -> f32 {
        self.first().value.max(self.last().value)
    }

    fn first(&self) -> &Point {
        &self.points[0]
    }

    fn last(&self) -> &Point {
        &self.points[LENGTH - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_positive() -> Calibration<3> {
        Calibration::new([
            Point::new(10, 1.0, "low"),
            Point::new(20, 3.0, "mid"),
            Point::new(30, 4.0, "high"),
        ])
    }

    fn table_negative() -> Calibration<3> {
        Calibration::new([
            Point::new(10, 40.0, "low"),
            Point::new(20, 30.0, "mid"),
            Point::new(30, 10.0, "high"),
        ])
    }

    fn table_invalid() -> Calibration<3> {
        Calibration::new([
            Point::new(30, 40.0, "low"),
            Point::new(20, 30.0, "mid"),
            Point::new(10, 10.0, "high"),
        ])
    }

    fn assert_read_ok<const LENGTH: usize>(
        table: &Calibration<LENGTH>,
        raw: u8,
        value: f32,
        label: &str,
    ) {
        let reading = table.read(raw).unwrap();

        assert!(
            (reading.value - value).abs() < 1e-4,
            "raw {} read {} instead of {}",
            raw,
            reading.value,
            value
        );
        assert_eq!(reading.label, label);
    }

    #[test]
    #[should_panic]
    fn panics_if_unsorted_table() {
        table_invalid();
    }

    #[test]
    fn matching_exact_values() {
        let table = table_negative();

        for point in table.points() {
            assert_eq!(
                table.read(point.raw as u8),
                Ok(Reading {
                    value: point.value,
                    label: point.label,
                })
            );
        }
    }

    #[test]
    fn interpolates() {
        assert_read_ok(&table_negative(), 12, 38.0, "low");
        assert_read_ok(&table_negative(), 15, 35.0, "low");
        assert_read_ok(&table_negative(), 25, 20.0, "mid");
        assert_read_ok(&table_positive(), 25, 3.5, "mid");
    }

    #[test]
    fn labels_with_band_below() {
        let table = table_positive();

        for raw in 11..20 {
            assert_eq!(table.read(raw).unwrap().label, "low");
        }
        for raw in 21..30 {
            assert_eq!(table.read(raw).unwrap().label, "mid");
        }
    }

    #[test]
    fn interpolated_values_stay_between_neighbours() {
        let table = table_positive();

        for raw in 10..=30 {
            let value = table.read(raw).unwrap().value;
            assert!(value >= table.min_value() && value <= table.max_value());
        }
        for raw in 11..20 {
            let value = table.read(raw).unwrap().value;
            assert!(value > 1.0 && value < 3.0);
        }
    }

    #[test]
    fn outside_range() {
        assert_eq!(table_negative().read(0), Err(OutOfRange { raw: 0 }));
        assert_eq!(table_negative().read(9), Err(OutOfRange { raw: 9 }));
        assert_eq!(table_negative().read(31), Err(OutOfRange { raw: 31 }));
        assert_eq!(table_negative().read(255), Err(OutOfRange { raw: 255 }));
    }

    #[test]
    fn boundaries() {
        assert_read_ok(&table_positive(), 10, 1.0, "low");
        assert_read_ok(&table_positive(), 30, 4.0, "high");
    }

    #[test]
    fn single_point() {
        let table = Calibration::new([Point::new(7, 2.5, "only")]);

        assert_read_ok(&table, 7, 2.5, "only");
        assert!(table.read(6).is_err());
        assert!(table.read(8).is_err());
    }

    #[test]
    fn fractional_thresholds() {
        let table = Calibration::new([
            Point::unlabelled(0, 1.0),
            Point::scaled(19, 97, 1.5),
            Point::scaled(37, 97, 2.0),
        ]);

        assert_read_ok(&table, 0, 1.0, "");
        assert!(table.read(98).is_err());

        let reading = table.read(50).unwrap();
        assert!(reading.value > 1.5 && reading.value < 1.51);
    }

    #[test]
    fn scaled_large_positions() {
        let point = Point::scaled(u32::MAX, u32::MAX, 1.0);
        assert_eq!(point.raw, 255.0);

        let point = Point::scaled(1 << 24, 1 << 25, 1.0);
        assert_eq!(point.raw, 127.5);
    }

    #[test]
    fn min_value() {
        assert_eq!(table_positive().min_value(), 1.0);
        assert_eq!(table_negative().min_value(), 10.0);
    }

    #[test]
    fn max_value() {
        assert_eq!(table_positive().max_value(), 4.0);
        assert_eq!(table_negative().max_value(), 40.0);
    }
}
