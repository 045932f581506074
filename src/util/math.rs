//! Numeric helpers shared by the transforms.

/// Rounds half away from zero and converts to a sample.
///
/// Out-of-range values saturate at 0 and 255; NaN maps to 0.
#[inline]
pub(crate) fn round_to_u8(value: f64) -> u8 {
    value.round() as u8
}

/// Rounded mean of two samples.
#[inline]
pub(crate) fn mean2(a: u8, b: u8) -> u8 {
    round_to_u8((f64::from(a) + f64::from(b)) / 2.0)
}

/// Rounded mean of four samples.
#[inline]
pub(crate) fn mean4(a: u8, b: u8, c: u8, d: u8) -> u8 {
    let sum = f64::from(a) + f64::from(b) + f64::from(c) + f64::from(d);
    round_to_u8(sum / 4.0)
}

/// Greatest common divisor.
pub(crate) fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::{gcd, mean2, mean4, round_to_u8};

    #[test]
    fn round_to_u8_rounds_half_away_from_zero() {
        assert_eq!(round_to_u8(2.5), 3);
        assert_eq!(round_to_u8(2.49), 2);
        assert_eq!(round_to_u8(254.5), 255);
    }

    #[test]
    fn round_to_u8_saturates() {
        assert_eq!(round_to_u8(300.0), 255);
        assert_eq!(round_to_u8(-4.0), 0);
        assert_eq!(round_to_u8(f64::NAN), 0);
    }

    #[test]
    fn means_round_to_nearest() {
        assert_eq!(mean2(0, 1), 1);
        assert_eq!(mean2(10, 20), 15);
        assert_eq!(mean2(255, 255), 255);
        assert_eq!(mean4(0, 0, 1, 1), 1);
        assert_eq!(mean4(0, 0, 0, 1), 0);
        assert_eq!(mean4(1, 2, 3, 4), 3);
    }

    #[test]
    fn gcd_matches_known_values() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(9973, 100), 1);
        assert_eq!(gcd(9973, 19946), 9973);
        assert_eq!(gcd(7, 0), 7);
    }
}
