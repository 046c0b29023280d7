pub fn interpolate(x0: f32, x1: f32, y0: f32, y1: f32, x: f32) -> f32 {
    let fraction = (x - x0) / (x1 - x0);

    y0 + fraction * (y1 - y0)
}

#[cfg(test)]
mod tests {
    #[test]
    fn interpolate() {
        assert_eq!(super::interpolate(0.0, 10.0, 0.0, 100.0, 0.0), 0.0);
        assert_eq!(super::interpolate(0.0, 10.0, 0.0, 100.0, 2.0), 20.0);
        assert_eq!(super::interpolate(0.0, 10.0, 0.0, 100.0, 5.0), 50.0);
        assert_eq!(super::interpolate(0.0, 10.0, 0.0, 100.0, 8.0), 80.0);
        assert_eq!(super::interpolate(0.0, 10.0, 0.0, 100.0, 10.0), 100.0);
    }

    #[test]
    fn interpolate_flipped_y() {
        assert_eq!(super::interpolate(0.0, 10.0, 100.0, 0.0, 0.0), 100.0);
        assert_eq!(super::interpolate(0.0, 10.0, 100.0, 0.0, 2.0), 80.0);
        assert_eq!(super::interpolate(0.0, 10.0, 100.0, 0.0, 5.0), 50.0);
        assert_eq!(super::interpolate(0.0, 10.0, 100.0, 0.0, 8.0), 20.0);
        assert_eq!(super::interpolate(0.0, 10.0, 100.0, 0.0, 10.0), 0.0);
    }

    #[test]
    fn interpolate_negative_offset() {
        assert_eq!(super::interpolate(130.0, 150.0, 0.0, 10.0, 140.0), 5.0);
        assert_eq!(super::interpolate(0.0, 12.0, -54.0, -48.0, 6.0), -51.0);
    }
}
