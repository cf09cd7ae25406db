use ratatui::style::Color;

use crate::theme::Theme;

/// Color for a usage percentage, higher meaning closer to the limit.
///
/// The 80 and 50 bands currently resolve to the same neutral color.
pub fn usage_color(percent: f64, theme: &Theme) -> Color {
    if percent >= 95.0 {
        theme.negative
    } else if percent >= 80.0 {
        theme.neutral
    } else if percent >= 50.0 {
        theme.neutral
    } else {
        theme.positive
    }
}

/// Color for a rate-limit readout based on the remaining fraction.
///
/// A non-positive total means there is no limit to read; that reports as
/// disabled rather than dividing by zero.
pub fn rate_limit_color(remaining: f64, total: f64, theme: &Theme) -> Color {
    if total <= 0.0 {
        return theme.disabled;
    }
    let ratio = remaining / total;
    if ratio > 0.5 {
        theme.positive
    } else if ratio > 0.2 {
        theme.neutral
    } else {
        theme.negative
    }
}

/// Color for a budget readout based on the spent fraction.
pub fn budget_color(spent: f64, budget: f64, theme: &Theme) -> Color {
    if budget <= 0.0 {
        return theme.disabled;
    }
    let ratio = spent / budget;
    if ratio < 0.5 {
        theme.positive
    } else if ratio < 0.8 {
        theme.neutral
    } else {
        theme.negative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> Theme {
        Theme::default()
    }

    #[test]
    fn test_usage_color_boundaries() {
        let t = theme();
        assert_eq!(usage_color(0.0, &t), t.positive);
        assert_eq!(usage_color(49.9, &t), t.positive);
        assert_eq!(usage_color(50.0, &t), t.neutral);
        assert_eq!(usage_color(79.9, &t), t.neutral);
        assert_eq!(usage_color(80.0, &t), t.neutral);
        assert_eq!(usage_color(94.9, &t), t.neutral);
        assert_eq!(usage_color(95.0, &t), t.negative);
        assert_eq!(usage_color(120.0, &t), t.negative);
    }

    #[test]
    fn test_rate_limit_color() {
        let t = theme();
        assert_eq!(rate_limit_color(60.0, 100.0, &t), t.positive);
        assert_eq!(rate_limit_color(30.0, 100.0, &t), t.neutral);
        assert_eq!(rate_limit_color(10.0, 100.0, &t), t.negative);
    }

    #[test]
    fn test_rate_limit_boundaries_are_exclusive() {
        let t = theme();
        // Exactly half remaining is already past "plenty left"
        assert_eq!(rate_limit_color(50.0, 100.0, &t), t.neutral);
        assert_eq!(rate_limit_color(20.0, 100.0, &t), t.negative);
    }

    #[test]
    fn test_rate_limit_guard() {
        let t = theme();
        assert_eq!(rate_limit_color(0.0, 0.0, &t), t.disabled);
        assert_eq!(rate_limit_color(10.0, -1.0, &t), t.disabled);
    }

    #[test]
    fn test_budget_color() {
        let t = theme();
        assert_eq!(budget_color(10.0, 100.0, &t), t.positive);
        assert_eq!(budget_color(60.0, 100.0, &t), t.neutral);
        assert_eq!(budget_color(90.0, 100.0, &t), t.negative);
    }

    #[test]
    fn test_budget_boundaries_are_inclusive() {
        let t = theme();
        // Spending exactly half tips into neutral, exactly 80% into negative
        assert_eq!(budget_color(50.0, 100.0, &t), t.neutral);
        assert_eq!(budget_color(80.0, 100.0, &t), t.negative);
    }

    #[test]
    fn test_budget_guard() {
        let t = theme();
        assert_eq!(budget_color(10.0, 0.0, &t), t.disabled);
        assert_eq!(budget_color(10.0, -5.0, &t), t.disabled);
    }
}
