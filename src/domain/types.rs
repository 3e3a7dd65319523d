// ==========================================
// Danuferd Vehicle Catalog - domain types
// ==========================================
// The two catalog enums keep the wire values the site has always
// persisted and exchanged over CSV: Mobil/Motor and Baru/Bekas.
// Variant names are the canonical English ones.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Category (vehicle class)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Mobil")]
    Car,
    #[serde(rename = "Motor")]
    Motorcycle,
}

impl Category {
    /// Parse the exact wire literal; anything else is rejected.
    pub fn parse_wire(value: &str) -> Option<Self> {
        match value {
            "Mobil" => Some(Category::Car),
            "Motor" => Some(Category::Motorcycle),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Category::Car => "Mobil",
            Category::Motorcycle => "Motor",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

// ==========================================
// Condition (New / Used)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "Baru")]
    New,
    #[serde(rename = "Bekas")]
    Used,
}

impl Condition {
    pub fn parse_wire(value: &str) -> Option<Self> {
        match value {
            "Baru" => Some(Condition::New),
            "Bekas" => Some(Condition::Used),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Condition::New => "Baru",
            Condition::Used => "Bekas",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

// ==========================================
// CatalogTab - the (Category, Condition) pair being browsed
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogTab {
    pub category: Category,
    pub condition: Condition,
}

impl CatalogTab {
    pub const fn new(category: Category, condition: Condition) -> Self {
        Self {
            category,
            condition,
        }
    }

    /// The landing tab of the listing page.
    pub const fn default_tab() -> Self {
        Self::new(Category::Car, Condition::New)
    }

    pub fn matches(&self, category: Category, condition: Condition) -> bool {
        self.category == category && self.condition == condition
    }
}

impl fmt::Display for CatalogTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.category, self.condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_round_trip() {
        for category in [Category::Car, Category::Motorcycle] {
            assert_eq!(Category::parse_wire(category.as_wire()), Some(category));
        }
        assert_eq!(Category::parse_wire("Car"), None);
        assert_eq!(Category::parse_wire("mobil"), None);
    }

    #[test]
    fn test_condition_wire_round_trip() {
        for condition in [Condition::New, Condition::Used] {
            assert_eq!(Condition::parse_wire(condition.as_wire()), Some(condition));
        }
        assert_eq!(Condition::parse_wire(""), None);
    }

    #[test]
    fn test_serde_uses_wire_literals() {
        let json = serde_json::to_string(&Category::Motorcycle).unwrap();
        assert_eq!(json, r#""Motor""#);
        let back: Condition = serde_json::from_str(r#""Bekas""#).unwrap();
        assert_eq!(back, Condition::Used);
    }

    #[test]
    fn test_tab_matches() {
        let tab = CatalogTab::new(Category::Car, Condition::Used);
        assert!(tab.matches(Category::Car, Condition::Used));
        assert!(!tab.matches(Category::Car, Condition::New));
        assert!(!tab.matches(Category::Motorcycle, Condition::Used));
    }
}
