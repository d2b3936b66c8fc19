//! Math helpers

/// Clamp a value to [0,1]
pub fn clamp01(v: f64) -> f64 {
    if v < 0.0 {
        0.0
    } else if v > 1.0 {
        1.0
    } else {
        v
    }
}

/// Minimum of three values
pub fn min3(a: f64, b: f64, c: f64) -> f64 {
    a.min(b).min(c)
}

/// Maximum of three values
pub fn max3(a: f64, b: f64, c: f64) -> f64 {
    a.max(b).max(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn clamping() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(1.5), 1.0);
    }
    #[test]
    fn min_max_of_three() {
        assert_eq!(min3(3.0, 1.0, 2.0), 1.0);
        assert_eq!(max3(3.0, 1.0, 2.0), 3.0);
    }
}
