use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::named::Named;

/// A pantry entry.
///
/// The name is fixed at construction and is the key within an ingredient
/// store. Count and expiry are replaced wholesale when an entry is edited.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ingredient {
    name: String,
    /// How many units are on hand.
    #[serde(default)]
    pub count: u32,
    /// Expiry date, if the ingredient has one.
    #[serde(default)]
    pub expires: Option<NaiveDate>,
}

impl Ingredient {
    /// Create an ingredient with a count of zero and no expiry.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count: 0,
            expires: None,
        }
    }

    /// Set the count.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Set the expiry date.
    pub fn with_expiry(mut self, expires: NaiveDate) -> Self {
        self.expires = Some(expires);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if the ingredient has an expiry date on or before `today`.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expires.is_some_and(|date| date <= today)
    }
}

impl Named for Ingredient {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ingredient {{ name: {}, count: {}, expires: ", self.name, self.count)?;
        match self.expires {
            Some(date) => write!(f, "{date} }}"),
            None => write!(f, "none }}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_uses_defaults() {
        let tomato = Ingredient::new("Tomato");
        assert_eq!(tomato.name(), "Tomato");
        assert_eq!(tomato.count, 0);
        assert!(tomato.expires.is_none());
    }

    #[test]
    fn builder_sets_fields() {
        let rice = Ingredient::new("Rice")
            .with_count(2)
            .with_expiry(date(2026, 12, 1));
        assert_eq!(rice.count, 2);
        assert_eq!(rice.expires, Some(date(2026, 12, 1)));
    }

    #[test]
    fn named_matches_inherent_name() {
        let potato = Ingredient::new("Potato");
        assert_eq!(Named::name(&potato), potato.name());
    }

    #[test]
    fn expiry_check() {
        let milk = Ingredient::new("Milk").with_expiry(date(2026, 3, 10));
        assert!(!milk.is_expired(date(2026, 3, 9)));
        assert!(milk.is_expired(date(2026, 3, 10)));
        assert!(!Ingredient::new("Salt").is_expired(date(2100, 1, 1)));
    }

    #[test]
    fn display_format() {
        let tomato = Ingredient::new("Tomato");
        assert_eq!(
            tomato.to_string(),
            "Ingredient { name: Tomato, count: 0, expires: none }"
        );
        let eggs = Ingredient::new("Eggs").with_count(6).with_expiry(date(2026, 1, 2));
        assert_eq!(
            eggs.to_string(),
            "Ingredient { name: Eggs, count: 6, expires: 2026-01-02 }"
        );
    }

    #[test]
    fn serde_defaults_missing_fields() {
        let parsed: Ingredient = serde_json::from_str(r#"{"name":"Chicken"}"#).unwrap();
        assert_eq!(parsed, Ingredient::new("Chicken"));
    }

    #[test]
    fn serde_roundtrip() {
        let flour = Ingredient::new("Flour").with_count(3).with_expiry(date(2027, 5, 4));
        let json = serde_json::to_string(&flour).unwrap();
        let parsed: Ingredient = serde_json::from_str(&json).unwrap();
        assert_eq!(flour, parsed);
    }
}
