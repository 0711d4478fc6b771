//! Shared formatting helpers for terminal output

/// Format a percentage with precision that shrinks as the value grows
///
/// Non-finite values (utilization with no income) print as `n/a`.
pub fn format_percentage(pct: f64) -> String {
    if !pct.is_finite() {
        "n/a".to_string()
    } else if pct.abs() < 0.1 && pct != 0.0 {
        format!("{:.2}%", pct)
    } else if pct.abs() < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Progress bar for a percentage, clamped to `0..=100`
pub fn format_bar(pct: f64, width: usize) -> String {
    let pct = if pct.is_nan() { 0.0 } else { pct.clamp(0.0, 100.0) };
    let filled = ((pct / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a title underlined with a double rule
pub fn format_title(title: &str) -> String {
    format!("{}\n{}\n", title, "═".repeat(title.chars().count()))
}

/// Truncate a string to a maximum number of characters with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Share of `part` in `whole` as a percentage, `0` when `whole` is zero
pub fn share_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
        assert_eq!(format_percentage(0.0), "0.0%");
        assert_eq!(format_percentage(f64::INFINITY), "n/a");
    }

    #[test]
    fn test_format_bar_is_capped() {
        let half = format_bar(50.0, 10);
        assert_eq!(half.chars().filter(|c| *c == '█').count(), 5);

        let over = format_bar(250.0, 10);
        assert_eq!(over.chars().filter(|c| *c == '█').count(), 10);
        assert_eq!(format_bar(f64::INFINITY, 4), "████");
        assert_eq!(format_bar(-20.0, 4), "░░░░");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Épargne logement", 7), "Épar...");
    }

    #[test]
    fn test_share_of() {
        assert_eq!(share_of(25.0, 100.0), 25.0);
        assert_eq!(share_of(25.0, 0.0), 0.0);
    }
}
