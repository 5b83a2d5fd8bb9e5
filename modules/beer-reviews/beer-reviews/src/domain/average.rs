use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Renders an average as a fixed-point string with two decimals.
///
/// Rounding is half-up on the shortest decimal form of the value, so `7.005`
/// renders as `"7.01"`. `None` and non-finite values render as `""`.
#[must_use]
pub fn render_average(value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return String::new();
    };

    let mut buf = ryu::Buffer::new();
    match Decimal::from_str(buf.format_finite(value)) {
        Ok(exact) => {
            let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.2}")
        }
        // Outside Decimal's range or scientific notation; stats never produce these.
        Err(_) => format!("{value:.2}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up_on_decimal_form() {
        assert_eq!(render_average(Some(7.005)), "7.01");
        assert_eq!(render_average(Some(8.125)), "8.13");
        assert_eq!(render_average(Some(6.994)), "6.99");
    }

    #[test]
    fn pads_to_two_decimals() {
        assert_eq!(render_average(Some(7.0)), "7.00");
        assert_eq!(render_average(Some(7.5)), "7.50");
        assert_eq!(render_average(Some(10.0)), "10.00");
    }

    #[test]
    fn repeating_fractions_are_cut() {
        assert_eq!(render_average(Some(20.0 / 3.0)), "6.67");
        assert_eq!(render_average(Some(22.0 / 3.0)), "7.33");
    }

    #[test]
    fn missing_average_is_empty() {
        assert_eq!(render_average(None), "");
        assert_eq!(render_average(Some(f64::NAN)), "");
        assert_eq!(render_average(Some(f64::INFINITY)), "");
    }
}
