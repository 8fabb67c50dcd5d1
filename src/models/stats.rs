//! Dashboard stat cards and thousands-grouped number text.
//!
//! A stat's displayed text is the only stored value. Both the counter
//! animation and the periodic jitter read the number back out of it.

use crate::error::DashboardError;

/// A stat card on the dashboard page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub id: String,
    pub label: String,
    /// Displayed value, thousands-grouped (e.g. `1,247`)
    pub text: String,
}

impl StatCard {
    pub fn new(id: impl Into<String>, label: impl Into<String>, value: u64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            text: format_grouped(value),
        }
    }

    /// Current displayed value, treating unparseable text as 0.
    pub fn value(&self) -> u64 {
        parse_grouped_or_zero(&self.text)
    }

    pub fn set_value(&mut self, value: u64) {
        self.text = format_grouped(value);
    }
}

/// The stat cards shown at startup.
pub fn default_stats() -> Vec<StatCard> {
    vec![
        StatCard::new("emails-scanned", "Emails Scanned", 1247),
        StatCard::new("threats-blocked", "Threats Blocked", 89),
        StatCard::new("honeypot-sessions", "Honeypot Sessions", 12),
        StatCard::new("protection-score", "Protection Score", 98),
    ]
}

/// Format an integer with `,` thousands separators.
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parse thousands-grouped text back into an integer.
pub fn parse_grouped(text: &str) -> Result<u64, DashboardError> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    cleaned
        .parse::<u64>()
        .map_err(|_| DashboardError::MalformedNumber {
            text: text.to_string(),
        })
}

/// Parse thousands-grouped text, treating malformed text as 0.
pub fn parse_grouped_or_zero(text: &str) -> u64 {
    match parse_grouped(text) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("{}, treating as 0", e);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1000), "1,000");
        assert_eq!(format_grouped(1247), "1,247");
        assert_eq!(format_grouped(1234567), "1,234,567");
    }

    #[test]
    fn test_parse_grouped() {
        assert_eq!(parse_grouped("1,247").unwrap(), 1247);
        assert_eq!(parse_grouped(" 12 ").unwrap(), 12);
        assert_eq!(parse_grouped("1,234,567").unwrap(), 1234567);
    }

    #[test]
    fn test_parse_malformed_is_error() {
        assert!(matches!(
            parse_grouped("98%"),
            Err(DashboardError::MalformedNumber { .. })
        ));
        assert!(parse_grouped("").is_err());
        assert!(parse_grouped("-3").is_err());
    }

    #[test]
    fn test_parse_or_zero() {
        assert_eq!(parse_grouped_or_zero("n/a"), 0);
        assert_eq!(parse_grouped_or_zero("2,000"), 2000);
    }

    #[test]
    fn test_stat_card_value_roundtrip() {
        let mut card = StatCard::new("x", "X", 1500);
        assert_eq!(card.text, "1,500");
        card.set_value(1499);
        assert_eq!(card.value(), 1499);
    }
}
