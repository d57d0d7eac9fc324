/// Rounds `value` to `places` decimal digits (half away from zero).
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::round_to;

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(round_to(5123.456, 1), 5123.5);
        assert_eq!(round_to(349.94, 1), 349.9);
        assert_eq!(round_to(-2.25, 1), -2.3);
    }
}
