//! Absolute humidity from temperature and relative humidity.

/// Estimated absolute humidity in g/m³, rounded to two decimal places.
///
/// Uses the Magnus-form approximation
/// `(6.112 * e^(17.67*T/(T+243.5)) * RH * 2.1674) / (273.15 + T)`.
/// The constants are part of the contract and are not tunable.
#[must_use]
pub fn absolute_humidity(temp_c: f64, rel_humidity_pct: f64) -> f64 {
    let saturation = 6.112 * ((17.67 * temp_c) / (temp_c + 243.5)).exp();
    let grams_per_m3 = (saturation * rel_humidity_pct * 2.1674) / (273.15 + temp_c);
    ((grams_per_m3 + f64::EPSILON) * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_value_at_20c_50pct() {
        assert!((absolute_humidity(20.0, 50.0) - 8.64).abs() < 1e-9);
    }

    #[test]
    fn is_deterministic() {
        let first = absolute_humidity(21.3, 55.2);
        for _ in 0..10 {
            assert_eq!(absolute_humidity(21.3, 55.2).to_bits(), first.to_bits());
        }
        assert!((first - 10.29).abs() < 1e-9);
    }

    #[test]
    fn zero_relative_humidity_is_zero() {
        assert_eq!(absolute_humidity(25.0, 0.0), 0.0);
    }

    #[test]
    fn non_negative_over_physical_range() {
        let mut t = -40.0;
        while t <= 60.0 {
            let mut rh = 0.0;
            while rh <= 100.0 {
                let ah = absolute_humidity(t, rh);
                assert!(ah >= 0.0, "negative absolute humidity at T={t} RH={rh}: {ah}");
                rh += 5.0;
            }
            t += 2.5;
        }
    }

    #[test]
    fn rounds_to_two_places() {
        let ah = absolute_humidity(18.0, 40.0);
        assert!((ah * 100.0 - (ah * 100.0).round()).abs() < 1e-6);
        assert!((ah - 6.14).abs() < 1e-9);
    }
}
