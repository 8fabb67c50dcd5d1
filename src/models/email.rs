//! Monitored email items shown on the Email Monitor page.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A monitored email in the inbox list.
///
/// Content is supplied externally (here: the demo inbox). The `visible`
/// flag is owned by the list filter and is derived from the active filter
/// criteria; it is never the source of truth for anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailItem {
    pub id: String,
    pub sender: String,
    pub subject: String,
    pub preview: String,
    /// Classification tags, e.g. `phishing`, `malware`, `safe`
    pub categories: BTreeSet<String>,
    pub received_at: DateTime<Utc>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl EmailItem {
    pub fn new(
        id: impl Into<String>,
        sender: impl Into<String>,
        subject: impl Into<String>,
        preview: impl Into<String>,
        categories: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            sender: sender.into(),
            subject: subject.into(),
            preview: preview.into(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            received_at: Utc::now(),
            visible: true,
        }
    }

    pub fn with_received_at(mut self, received_at: DateTime<Utc>) -> Self {
        self.received_at = received_at;
        self
    }

    /// Searchable text fields, in match order.
    pub fn searchable_fields(&self) -> [&str; 3] {
        [&self.sender, &self.subject, &self.preview]
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains(category)
    }

    /// The most severe tag, used for the row badge.
    pub fn primary_category(&self) -> &str {
        for tag in ["phishing", "malware", "spoofing", "safe"] {
            if self.categories.contains(tag) {
                return tag;
            }
        }
        self.categories.iter().next().map(String::as_str).unwrap_or("")
    }
}

/// The demo inbox shown at startup.
pub fn demo_inbox() -> Vec<EmailItem> {
    let now = Utc::now();
    vec![
        EmailItem::new(
            "email-1",
            "secure-banking@fakmail.com",
            "Urgent: Verify your account",
            "Your account will be suspended unless you confirm your details...",
            &["phishing"],
        )
        .with_received_at(now - Duration::minutes(2)),
        EmailItem::new(
            "email-2",
            "billing@paypa1-support.net",
            "Outstanding invoice #88213",
            "Please review the attached invoice and remit payment today...",
            &["phishing"],
        )
        .with_received_at(now - Duration::minutes(15)),
        EmailItem::new(
            "email-3",
            "hr@yourcompany.com",
            "Updated holiday schedule",
            "Please find the updated office holiday schedule for next quarter.",
            &["safe"],
        )
        .with_received_at(now - Duration::minutes(42)),
        EmailItem::new(
            "email-4",
            "docs-share@dropb0x-files.io",
            "Shared document: Q3_Invoice.zip",
            "A file has been shared with you. Open the archive to view it.",
            &["malware"],
        )
        .with_received_at(now - Duration::hours(1)),
        EmailItem::new(
            "email-5",
            "ceo@yourcompany-mail.com",
            "Quick favor needed",
            "Are you at your desk? I need you to buy gift cards for a client.",
            &["spoofing"],
        )
        .with_received_at(now - Duration::hours(3)),
        EmailItem::new(
            "email-6",
            "newsletter@techweekly.com",
            "This week in security",
            "Top stories: new phishing kits, browser patches, and more.",
            &["safe"],
        )
        .with_received_at(now - Duration::hours(5)),
        EmailItem::new(
            "email-7",
            "accounts@vendor-portal.biz",
            "Payment reminder",
            "Your invoice is overdue. Log in to the vendor portal to avoid fees.",
            &["phishing", "spoofing"],
        )
        .with_received_at(now - Duration::hours(9)),
    ]
}
