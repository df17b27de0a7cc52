//! Proportional bars and ANSI coloring

use auditrisk_core::RiskFraction;
use auditrisk_model::BandColor;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

const FILLED: char = '█';
const EMPTY: char = '░';

/// Wrap `text` in the ANSI color for `color` when `enabled`
pub fn paint(text: &str, color: BandColor, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    let code = match color {
        BandColor::Green => "32",
        BandColor::Yellow => "33",
        BandColor::Red => "31",
    };
    format!("\x1b[{}m{}\x1b[0m", code, text)
}

/// Bar of `width` cells, filled in proportion to `value`
pub fn render_bar(value: RiskFraction, width: usize, color: BandColor, colored: bool) -> String {
    let filled = filled_cells(value, width);
    let full: String = std::iter::repeat(FILLED).take(filled).collect();
    let rest: String = std::iter::repeat(EMPTY).take(width - filled).collect();
    format!("{}{}", paint(&full, color, colored), rest)
}

fn filled_cells(value: RiskFraction, width: usize) -> usize {
    let cells = (value.value() * Decimal::from(width))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_usize()
        .unwrap_or(width);
    cells.min(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn fraction(value: Decimal) -> RiskFraction {
        RiskFraction::new(value).unwrap()
    }

    #[test]
    fn test_bar_proportional() {
        let bar = render_bar(fraction(dec!(0.5)), 10, BandColor::Yellow, false);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn test_bar_extremes() {
        assert_eq!(render_bar(RiskFraction::MAX, 4, BandColor::Red, false), "████");
        // 1% of 30 cells rounds to nothing
        assert_eq!(
            render_bar(RiskFraction::MIN, 30, BandColor::Green, false).chars().filter(|c| *c == '█').count(),
            0
        );
    }

    #[test]
    fn test_bar_rounds_half_up() {
        let bar = render_bar(fraction(dec!(0.25)), 10, BandColor::Green, false);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 3);
    }

    #[test]
    fn test_paint() {
        assert_eq!(paint("x", BandColor::Red, true), "\x1b[31mx\x1b[0m");
        assert_eq!(paint("x", BandColor::Red, false), "x");
    }

    #[test]
    fn test_colored_bar_keeps_cell_count() {
        let bar = render_bar(fraction(dec!(0.5)), 10, BandColor::Green, true);
        assert!(bar.starts_with("\x1b[32m"));
        assert_eq!(bar.chars().filter(|c| *c == '█' || *c == '░').count(), 10);
    }
}
