//! Ribbon list filtering.

use std::collections::BTreeSet;
use std::str::FromStr;

use crate::catalog::Ribbon;
use crate::error::RibbonError;

/// Obtained state to filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RibbonStatus {
    Obtained,
    Missing,
}

impl FromStr for RibbonStatus {
    type Err = RibbonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "obtained" | "done" => Ok(RibbonStatus::Obtained),
            "missing" | "todo" => Ok(RibbonStatus::Missing),
            other => Err(RibbonError::InvalidInput(format!(
                "Unknown status '{}'. Expected 'obtained' or 'missing'",
                other
            ))),
        }
    }
}

/// Criteria for narrowing the ribbon catalog. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RibbonFilter {
    pub generation: Option<u32>,
    pub category: Option<String>,
    pub status: Option<RibbonStatus>,
    /// Case-insensitive substring over name, id and description
    pub search: String,
}

impl RibbonFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(mut self, generation: Option<u32>) -> Self {
        self.generation = generation;
        self
    }

    pub fn category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    pub fn status(mut self, status: Option<RibbonStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Whether a single ribbon passes. `obtained` is the progress set for the
    /// key being viewed; without one, every ribbon counts as missing.
    pub fn matches(&self, ribbon: &Ribbon, obtained: Option<&BTreeSet<String>>) -> bool {
        if self.generation.is_some_and(|g| ribbon.generation != g) {
            return false;
        }
        if self
            .category
            .as_deref()
            .is_some_and(|c| !ribbon.category.eq_ignore_ascii_case(c))
        {
            return false;
        }
        if let Some(status) = self.status {
            let has = obtained.is_some_and(|set| set.contains(&ribbon.id));
            match status {
                RibbonStatus::Obtained if !has => return false,
                RibbonStatus::Missing if has => return false,
                _ => {}
            }
        }
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        ribbon.name.to_lowercase().contains(&needle)
            || ribbon.id.to_lowercase().contains(&needle)
            || ribbon.description.to_lowercase().contains(&needle)
    }

    pub fn apply<'c>(
        &self,
        ribbons: &'c [Ribbon],
        obtained: Option<&BTreeSet<String>>,
    ) -> Vec<&'c Ribbon> {
        ribbons
            .iter()
            .filter(|ribbon| self.matches(ribbon, obtained))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::load_catalog;

    #[test]
    fn test_empty_filter_matches_all() {
        let ribbons = load_catalog().ribbons();
        assert_eq!(RibbonFilter::new().apply(ribbons, None).len(), ribbons.len());
    }

    #[test]
    fn test_generation_and_category() {
        let ribbons = load_catalog().ribbons();
        let found = RibbonFilter::new()
            .generation(Some(3))
            .category(Some("champion".to_string()))
            .apply(ribbons, None);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "champion-hoenn");
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let ribbons = load_catalog().ribbons();
        let found = RibbonFilter::new()
            .category(Some("nonexistent".to_string()))
            .apply(ribbons, None);
        assert!(found.is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let ribbons = load_catalog().ribbons();
        let found = RibbonFilter::new().search("EFFORT").apply(ribbons, None);
        assert_eq!(found.len(), 1);

        let by_description = RibbonFilter::new()
            .search("hall of fame")
            .apply(ribbons, None);
        assert!(by_description.len() >= 3);
        assert!(by_description.iter().all(|r| r.category == "champion"));
    }

    #[test]
    fn test_status() {
        let ribbons = load_catalog().ribbons();
        let obtained: BTreeSet<String> = ["champion-hoenn".to_string()].into();

        let done = RibbonFilter::new()
            .status(Some(RibbonStatus::Obtained))
            .apply(ribbons, Some(&obtained));
        assert_eq!(done.len(), 1);

        let missing = RibbonFilter::new()
            .status(Some(RibbonStatus::Missing))
            .apply(ribbons, Some(&obtained));
        assert_eq!(missing.len(), ribbons.len() - 1);

        let nothing_tracked = RibbonFilter::new()
            .status(Some(RibbonStatus::Obtained))
            .apply(ribbons, None);
        assert!(nothing_tracked.is_empty());
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("Obtained".parse::<RibbonStatus>().unwrap(), RibbonStatus::Obtained);
        assert!("maybe".parse::<RibbonStatus>().is_err());
    }
}
