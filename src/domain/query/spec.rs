use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::record::parse_instant;

/// Filter value meaning "no constraint on this field".
pub const ALL_SENTINEL: &str = "all";

pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeBound {
    Number(f64),
    Instant(NaiveDateTime),
}

impl RangeBound {
    /// Blank or unparsable input yields no bound.
    pub fn parse_number(input: &str) -> Option<Self> {
        input.trim().parse::<f64>().ok().map(RangeBound::Number)
    }

    pub fn parse_instant(input: &str) -> Option<Self> {
        parse_instant(input).map(RangeBound::Instant)
    }
}

/// Inclusive `[min, max]`; a missing bound is unconstrained.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeFilter {
    pub field: String,
    pub min: Option<RangeBound>,
    pub max: Option<RangeBound>,
}

impl RangeFilter {
    pub fn new(field: impl Into<String>, min: Option<RangeBound>, max: Option<RangeBound>) -> Self {
        Self {
            field: field.into(),
            min,
            max,
        }
    }

    pub fn is_active(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }
}

/// Search, filter, sort and page parameters for one list view.
///
/// Rebuilt from the view's controls on every interaction; the builder
/// methods consume and return the spec.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpec {
    pub search_term: String,
    pub filters: BTreeMap<String, String>,
    pub ranges: Vec<RangeFilter>,
    pub sort: Option<SortSpec>,
    pub page_size: usize,
    pub page_index: usize,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            filters: BTreeMap::new(),
            ranges: Vec::new(),
            sort: None,
            page_size: DEFAULT_PAGE_SIZE,
            page_index: 0,
        }
    }
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(field.into(), value.into());
        self
    }

    pub fn with_range(mut self, range: RangeFilter) -> Self {
        self.ranges.push(range);
        self
    }

    pub fn sorted_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(SortSpec {
            field: field.into(),
            direction,
        });
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_page(mut self, page_index: usize) -> Self {
        self.page_index = page_index;
        self
    }

    /// Filters that actually constrain results.
    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters
            .iter()
            .map(|(field, value)| (field.as_str(), value.as_str()))
            .filter(|(_, value)| !value.is_empty() && *value != ALL_SENTINEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_is_first_page_of_ten() {
        let spec = QuerySpec::new();
        assert_eq!(spec.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(spec.page_index, 0);
        assert!(spec.sort.is_none());
    }

    #[test]
    fn all_and_blank_filters_are_inactive() {
        let spec = QuerySpec::new()
            .with_filter("status", ALL_SENTINEL)
            .with_filter("category", "")
            .with_filter("department_id", "dep-qa");

        let active: Vec<_> = spec.active_filters().collect();
        assert_eq!(active, vec![("department_id", "dep-qa")]);
    }

    #[test]
    fn range_bounds_ignore_blank_input() {
        assert!(RangeBound::parse_number("  ").is_none());
        assert_eq!(RangeBound::parse_number("12.5"), Some(RangeBound::Number(12.5)));
        assert!(RangeBound::parse_instant("").is_none());
        assert!(RangeBound::parse_instant("2024-02-01").is_some());
        assert!(!RangeFilter::new("file_size_kb", None, None).is_active());
    }
}
