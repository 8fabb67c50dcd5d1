//! Threat detail cards on the Threats page.

/// A detected threat with its analysis summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreatCard {
    pub id: String,
    pub title: String,
    pub sender: String,
    pub risk: String,
    pub indicators: Vec<String>,
    /// Dimmed after delete & block, until the card is removed
    pub faded: bool,
}

impl ThreatCard {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        sender: impl Into<String>,
        risk: impl Into<String>,
        indicators: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            sender: sender.into(),
            risk: risk.into(),
            indicators: indicators.iter().map(|s| s.to_string()).collect(),
            faded: false,
        }
    }
}

pub fn demo_threats() -> Vec<ThreatCard> {
    vec![
        ThreatCard::new(
            "threat-1",
            "Fake Bank Verification Request",
            "secure-banking@fakmail.com",
            "High",
            &["Spoofed domain", "Urgency language", "Credential harvesting link"],
        ),
        ThreatCard::new(
            "threat-2",
            "Malicious Invoice Attachment",
            "docs-share@dropb0x-files.io",
            "Critical",
            &["Executable inside archive", "Lookalike domain"],
        ),
        ThreatCard::new(
            "threat-3",
            "CEO Gift Card Scam",
            "ceo@yourcompany-mail.com",
            "Medium",
            &["Display name spoofing", "Unusual request"],
        ),
    ]
}
