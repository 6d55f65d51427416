//! Numeric helpers shared by the scale and the coordinate systems.

/// Precision used when no explicit one is given, enough to hide float noise
/// such as `0.1 + 0.2`.
pub const DEFAULT_PRECISION: usize = 10;

const MAX_PRECISION: usize = 20;


/// Round to a fixed number of decimals, the way a printed value would read back.
pub fn round(x: f64, precision: usize) -> f64 {
    if !x.is_finite() {
        return x;
    }

    let precision = precision.min(MAX_PRECISION);
    format!("{x:.precision$}").parse().unwrap_or(x)
}


/// Number of decimal digits needed to represent `x` exactly.
pub fn precision(x: f64) -> usize {
    if !x.is_finite() {
        return 0;
    }

    let mut e = 1.0;
    let mut count = 0;
    while (x * e).round() / e != x && count < MAX_PRECISION {
        e *= 10.0;
        count += 1;
    }
    count
}


/// Exponent of the power of ten that `x` falls into.
pub fn quantity_exponent(x: f64) -> i32 {
    if x == 0.0 || !x.is_finite() {
        return 0;
    }

    let mut exp = x.abs().log10().floor() as i32;
    // log10 may land just below an exact power of ten
    if x.abs() / 10f64.powi(exp) >= 10.0 {
        exp += 1;
    }
    exp
}


/// Find a "nice" number close to `x`, with a leading digit of 1, 2 or 5.
///
/// With `round_to_closest` set the closest nice number is picked, otherwise the smallest
/// one not below `x`.
pub fn nice(x: f64, round_to_closest: bool) -> f64 {
    let exponent = quantity_exponent(x);
    let exp10 = 10f64.powi(exponent);
    let f = x / exp10;

    let nf = if round_to_closest {
        if f <= 1.5 {
            1.0
        } else if f <= 3.0 {
            2.0
        } else if f <= 7.0 {
            5.0
        } else {
            10.0
        }
    } else if f <= 1.0 {
        1.0
    } else if f <= 2.0 {
        2.0
    } else if f <= 5.0 {
        5.0
    } else {
        10.0
    };

    let value = nf * exp10;
    if exponent < 0 {
        round(value, (-exponent) as usize)
    } else {
        value
    }
}


/// Map `value` from `domain` onto `range` without clamping.
pub fn linear_map(value: f64, domain: [f64; 2], range: [f64; 2]) -> f64 {
    let sub_domain = domain[1] - domain[0];
    let sub_range = range[1] - range[0];

    if sub_domain == 0.0 {
        return if sub_range == 0.0 {
            range[0]
        } else {
            (range[0] + range[1]) / 2.0
        };
    }

    (value - domain[0]) / sub_domain * sub_range + range[0]
}


/// Normalize an angle in radians onto `(-PI, PI]`.
pub fn normalize_radian(angle: f64) -> f64 {
    angle.sin().atan2(angle.cos())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding() {
        assert_eq!(round(0.1 + 0.2, DEFAULT_PRECISION), 0.3);
        assert_eq!(round(1.26, 1), 1.3);
        assert_eq!(round(-37.6, 0), -38.0);
        assert!(round(f64::NAN, 2).is_nan());
        assert_eq!(round(f64::INFINITY, 2), f64::INFINITY);
    }

    #[test]
    fn precisions() {
        assert_eq!(precision(1.0), 0);
        assert_eq!(precision(0.5), 1);
        assert_eq!(precision(0.25), 2);
        assert_eq!(precision(120.0), 0);
    }

    #[test]
    fn exponents() {
        assert_eq!(quantity_exponent(1000.0), 3);
        assert_eq!(quantity_exponent(999.0), 2);
        assert_eq!(quantity_exponent(0.05), -2);
        assert_eq!(quantity_exponent(0.0), 0);
    }

    #[test]
    fn nice_numbers() {
        assert_eq!(nice(13.0, true), 10.0);
        assert_eq!(nice(19.0, true), 20.0);
        assert_eq!(nice(33.0, true), 50.0);
        assert_eq!(nice(80.0, true), 100.0);
        assert_eq!(nice(0.13, true), 0.1);
        assert_eq!(nice(0.2, true), 0.2);

        assert_eq!(nice(13.0, false), 20.0);
        assert_eq!(nice(2.5, false), 5.0);
    }

    #[test]
    fn mapping() {
        assert_eq!(linear_map(5.0, [0.0, 10.0], [0.0, 100.0]), 50.0);
        assert_eq!(linear_map(15.0, [0.0, 10.0], [0.0, 100.0]), 150.0);
        assert_eq!(linear_map(3.0, [2.0, 2.0], [10.0, 20.0]), 15.0);
        assert_eq!(linear_map(3.0, [2.0, 2.0], [10.0, 10.0]), 10.0);
    }

    #[test]
    fn radian_normalization() {
        let e = 1e-12;
        assert!((normalize_radian(0.0) - 0.0).abs() < e);
        assert!((normalize_radian(std::f64::consts::PI) - std::f64::consts::PI).abs() < e);
        assert!((normalize_radian(1.5 * std::f64::consts::PI) + 0.5 * std::f64::consts::PI).abs() < e);
        assert!((normalize_radian(5.0 * std::f64::consts::TAU + 0.25) - 0.25).abs() < e);
    }
}
