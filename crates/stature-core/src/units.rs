//! Unit conversion for display.

/// Centimetres per inch.
const CM_PER_INCH: f64 = 2.54;

/// Format a height in centimetres as feet and inches, e.g. `6'0"`.
///
/// Inches are rounded to the nearest whole inch; a value that rounds up
/// to 12 carries into the next foot (so `183.0` renders `6'0"`, never
/// `5'12"`).
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn cm_to_ft_in(cm: f64) -> String {
    let total_inches = cm / CM_PER_INCH;
    let mut feet = (total_inches / 12.0).floor() as i64;
    let mut inches = (total_inches % 12.0).round() as i64;
    if inches == 12 {
        feet += 1;
        inches = 0;
    }
    format!("{feet}'{inches}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_feet_exactly() {
        // 182.9 cm ≈ 72.0 inches.
        assert_eq!(cm_to_ft_in(182.9), "6'0\"");
    }

    #[test]
    fn five_feet_exactly() {
        // 152.4 cm = 60.0 inches.
        assert_eq!(cm_to_ft_in(152.4), "5'0\"");
    }

    #[test]
    fn five_ten() {
        // 178.2 cm ≈ 70.16 inches → 5 ft 10 in.
        assert_eq!(cm_to_ft_in(178.2), "5'10\"");
    }

    #[test]
    fn rounding_up_carries_into_the_next_foot() {
        // 182.5 cm ≈ 71.85 inches: 11.85 rounds to 12, which must carry.
        assert_eq!(cm_to_ft_in(182.5), "6'0\"");
    }

    #[test]
    fn short_heights() {
        // 100 cm ≈ 39.37 inches → 3 ft 3 in.
        assert_eq!(cm_to_ft_in(100.0), "3'3\"");
    }

    #[test]
    fn zero_is_zero() {
        assert_eq!(cm_to_ft_in(0.0), "0'0\"");
    }
}
