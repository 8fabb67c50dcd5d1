//! List filter for the Email Monitor page.
//!
//! Visibility is a stateless derivation: every change to either the
//! category or the query re-evaluates both predicates over the whole list.
//! An item is visible iff it passes the category predicate AND the query
//! predicate. Hidden items stay in the list.

use crate::models::EmailItem;

/// Category filter chips, in display order.
pub const CATEGORY_CHIPS: [&str; 5] = ["all", "phishing", "malware", "spoofing", "safe"];

/// Single-select category filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    Named(String),
}

impl Category {
    /// `"all"` (any case) selects everything; anything else names a tag.
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        if name.eq_ignore_ascii_case("all") || name.is_empty() {
            Category::All
        } else {
            Category::Named(name.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::All => "all",
            Category::Named(name) => name,
        }
    }

    pub fn matches(&self, item: &EmailItem) -> bool {
        match self {
            Category::All => true,
            Category::Named(name) => item.has_category(name),
        }
    }
}

/// The two independent filter dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    category: Category,
    /// Trimmed and lowercased
    query: String,
}

impl FilterCriteria {
    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    fn matches_query(&self, item: &EmailItem) -> bool {
        self.query.is_empty()
            || item
                .searchable_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&self.query))
    }

    /// Category predicate AND query predicate.
    pub fn matches(&self, item: &EmailItem) -> bool {
        self.category.matches(item) && self.matches_query(item)
    }
}

/// Normalize raw query text: trimmed, lowercased.
pub fn normalize_query(text: &str) -> String {
    text.trim().to_lowercase()
}

#[derive(Debug, Clone, Default)]
pub struct ListFilterEngine {
    items: Vec<EmailItem>,
    criteria: FilterCriteria,
    /// Raw text as typed into the search box
    query_input: String,
}

impl ListFilterEngine {
    pub fn new(items: Vec<EmailItem>) -> Self {
        let mut engine = Self {
            items,
            criteria: FilterCriteria::default(),
            query_input: String::new(),
        };
        engine.recompute();
        engine
    }

    pub fn set_category(&mut self, category: Category) {
        tracing::debug!(category = category.as_str(), "Filter category set");
        self.criteria.category = category;
        self.recompute();
    }

    pub fn set_query(&mut self, text: &str) {
        self.query_input = text.to_string();
        self.criteria.query = normalize_query(text);
        self.recompute();
    }

    /// Append a character to the search box.
    pub fn push_query_char(&mut self, c: char) {
        let mut text = std::mem::take(&mut self.query_input);
        text.push(c);
        self.set_query(&text);
    }

    /// Remove the last character from the search box.
    pub fn pop_query_char(&mut self) {
        let mut text = std::mem::take(&mut self.query_input);
        text.pop();
        self.set_query(&text);
    }

    /// Select the next category chip, wrapping around.
    pub fn cycle_category(&mut self) {
        let current = self.criteria.category.as_str();
        let index = CATEGORY_CHIPS
            .iter()
            .position(|c| *c == current)
            .map(|i| (i + 1) % CATEGORY_CHIPS.len())
            .unwrap_or(0);
        self.set_category(Category::parse(CATEGORY_CHIPS[index]));
    }

    /// Re-evaluate both predicates for every item.
    fn recompute(&mut self) {
        for item in &mut self.items {
            item.visible = self.criteria.matches(item);
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn query_input(&self) -> &str {
        &self.query_input
    }

    pub fn items(&self) -> &[EmailItem] {
        &self.items
    }

    pub fn visible_items(&self) -> impl Iterator<Item = &EmailItem> {
        self.items.iter().filter(|item| item.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.visible_items().count()
    }

    /// Nth visible item.
    pub fn visible_at(&self, index: usize) -> Option<&EmailItem> {
        self.visible_items().nth(index)
    }

    pub fn get(&self, id: &str) -> Option<&EmailItem> {
        self.items.iter().find(|item| item.id == id)
    }
}
