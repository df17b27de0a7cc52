//! Percentage formatting shared by every output surface

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a fraction as a percentage with one decimal place.
///
/// ```
/// use auditrisk_core::format_percentage;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_percentage(Decimal::new(5, 2)), "5.0%");
/// assert_eq!(format_percentage(Decimal::new(2, 1)), "20.0%");
/// ```
pub fn format_percentage(value: Decimal) -> String {
    let percent = (value * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1}%", percent)
}
