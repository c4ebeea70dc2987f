//! # Fun Formulas

/// Human-equivalent age of a dog.
///
/// The first year counts as 15 human years, the second as 9 more, and each
/// year after that as 5. Partial years are interpolated within their band.
///
/// # Example
/// ```rust
/// use calc_core::formulas::fun::dog_to_human_years;
///
/// assert_eq!(dog_to_human_years(1.0), 15.0);
/// assert_eq!(dog_to_human_years(2.0), 24.0);
/// assert_eq!(dog_to_human_years(5.0), 39.0);
/// ```
pub fn dog_to_human_years(dog_years: f64) -> f64 {
    if dog_years <= 0.0 {
        0.0
    } else if dog_years <= 1.0 {
        dog_years * 15.0
    } else if dog_years <= 2.0 {
        15.0 + (dog_years - 1.0) * 9.0
    } else {
        24.0 + (dog_years - 2.0) * 5.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands() {
        assert_eq!(dog_to_human_years(0.0), 0.0);
        assert_eq!(dog_to_human_years(0.5), 7.5);
        assert_eq!(dog_to_human_years(1.5), 19.5);
        assert_eq!(dog_to_human_years(10.0), 64.0);
    }

    #[test]
    fn test_monotonic() {
        let mut last = 0.0;
        for tenth in 1..=200 {
            let human = dog_to_human_years(tenth as f64 / 10.0);
            assert!(human > last);
            last = human;
        }
    }
}
