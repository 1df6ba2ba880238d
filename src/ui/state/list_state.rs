use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::domain::query::{QuerySpec, RangeBound, RangeFilter, SortDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
    Number,
    Date,
}

/// A min/max input pair bound to one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeDef {
    pub field: &'static str,
    pub label: &'static str,
    pub kind: RangeKind,
}

impl RangeDef {
    pub const fn number(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            kind: RangeKind::Number,
        }
    }

    pub const fn date(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            kind: RangeKind::Date,
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self.kind {
            RangeKind::Number => "number",
            RangeKind::Date => "date",
        }
    }

    fn lower(&self, input: &str) -> Option<RangeBound> {
        match self.kind {
            RangeKind::Number => RangeBound::parse_number(input),
            RangeKind::Date => RangeBound::parse_instant(input),
        }
    }

    /// A bare date as upper bound covers the whole day.
    fn upper(&self, input: &str) -> Option<RangeBound> {
        match self.kind {
            RangeKind::Number => RangeBound::parse_number(input),
            RangeKind::Date => NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(23, 59, 59))
                .map(RangeBound::Instant)
                .or_else(|| RangeBound::parse_instant(input)),
        }
    }
}

/// Raw control values of one list page, before they become a `QuerySpec`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListControls {
    pub search: String,
    pub filters: BTreeMap<String, String>,
    pub range_inputs: BTreeMap<String, (String, String)>,
    pub sort_field: Option<String>,
    pub sort_direction: SortDirection,
    pub page: usize,
    pub page_size: usize,
}

impl ListControls {
    /// Unparseable range inputs are dropped rather than reported.
    pub fn to_spec(&self, ranges: &[RangeDef]) -> QuerySpec {
        let mut spec = QuerySpec::new()
            .with_search(self.search.clone())
            .with_page_size(self.page_size)
            .with_page(self.page);

        for (field, value) in &self.filters {
            spec = spec.with_filter(field.clone(), value.clone());
        }

        for def in ranges {
            let Some((min, max)) = self.range_inputs.get(def.field) else {
                continue;
            };
            let range = RangeFilter::new(def.field, def.lower(min), def.upper(max));
            if range.is_active() {
                spec = spec.with_range(range);
            }
        }

        if let Some(field) = &self.sort_field {
            spec = spec.sorted_by(field.clone(), self.sort_direction);
        }

        spec
    }
}

#[derive(Clone, Copy)]
pub struct ListState {
    pub search: Signal<String>,
    pub filters: Signal<BTreeMap<String, String>>,
    pub range_inputs: Signal<BTreeMap<String, (String, String)>>,
    pub sort_field: Signal<Option<String>>,
    pub sort_direction: Signal<SortDirection>,
    pub page: Signal<usize>,
    pub page_size: Signal<usize>,
    pub selected: Signal<BTreeSet<String>>,
    pub status: Signal<String>,
    pub detail: Signal<Option<String>>,
}

impl ListState {
    pub fn new(default_page_size: usize) -> Self {
        Self {
            search: use_signal(String::new),
            filters: use_signal(BTreeMap::<String, String>::new),
            range_inputs: use_signal(BTreeMap::<String, (String, String)>::new),
            sort_field: use_signal(|| None::<String>),
            sort_direction: use_signal(SortDirection::default),
            page: use_signal(|| 0_usize),
            page_size: use_signal(move || default_page_size),
            selected: use_signal(BTreeSet::<String>::new),
            status: use_signal(|| "Ready".to_string()),
            detail: use_signal(|| None::<String>),
        }
    }

    pub fn controls(&self) -> ListControls {
        ListControls {
            search: (self.search)(),
            filters: (self.filters)(),
            range_inputs: (self.range_inputs)(),
            sort_field: (self.sort_field)(),
            sort_direction: (self.sort_direction)(),
            page: (self.page)(),
            page_size: (self.page_size)(),
        }
    }
}
