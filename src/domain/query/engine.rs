use std::cmp::Ordering;

use crate::domain::entities::record::{FieldValue, Record};
use crate::domain::query::result::QueryResult;
use crate::domain::query::spec::{QuerySpec, RangeBound, RangeFilter, SortDirection};

/// Runs search, filters, sort and paging over `records`.
///
/// Pure and infallible: a filter value that cannot be compared with a
/// record's field makes that record a non-match, and a page past the end
/// comes back empty. A zero page size is treated as one.
pub fn query<T>(records: &[T], spec: &QuerySpec) -> QueryResult<T>
where
    T: Record + Clone,
{
    let needle = spec.search_term.trim().to_lowercase();

    let mut matched: Vec<&T> = records
        .iter()
        .filter(|record| matches_search(*record, &needle))
        .filter(|record| matches_filters(*record, spec))
        .filter(|record| spec.ranges.iter().all(|range| within_range(*record, range)))
        .collect();

    if let Some(sort) = &spec.sort {
        // slice::sort_by is stable, and reversing Equal keeps it Equal.
        matched.sort_by(|a, b| {
            let ordering = compare_fields(a.field(&sort.field), b.field(&sort.field));
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    let page_size = spec.page_size.max(1);
    let total_count = matched.len();
    let total_pages = total_count.div_ceil(page_size);
    let start = spec.page_index.saturating_mul(page_size);

    let items = matched
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    QueryResult {
        items,
        total_count,
        total_pages,
        page_index: spec.page_index,
        page_size,
    }
}

/// `needle` must already be trimmed and lowercased.
fn matches_search<T: Record>(record: &T, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record
        .search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn matches_filters<T: Record>(record: &T, spec: &QuerySpec) -> bool {
    spec.active_filters().all(|(field, expected)| {
        record
            .field(field)
            .is_some_and(|value| value.matches(expected))
    })
}

fn within_range<T: Record>(record: &T, range: &RangeFilter) -> bool {
    if !range.is_active() {
        return true;
    }
    let Some(value) = record.field(&range.field) else {
        return false;
    };

    let above_min = range
        .min
        .is_none_or(|min| compare_to_bound(&value, min).is_some_and(Ordering::is_ge));
    let below_max = range
        .max
        .is_none_or(|max| compare_to_bound(&value, max).is_some_and(Ordering::is_le));

    above_min && below_max
}

fn compare_to_bound(value: &FieldValue<'_>, bound: RangeBound) -> Option<Ordering> {
    match (value, bound) {
        (FieldValue::Number(number), RangeBound::Number(bound)) => Some(number.total_cmp(&bound)),
        (FieldValue::Instant(instant), RangeBound::Instant(bound)) => Some(instant.cmp(&bound)),
        _ => None,
    }
}

/// Absent values sort first, then numbers, instants and text. Only values of
/// the same kind are compared by content.
fn compare_fields(a: Option<FieldValue<'_>>, b: Option<FieldValue<'_>>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => match (&a, &b) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Instant(a), FieldValue::Instant(b)) => a.cmp(b),
            _ => kind_rank(&a).cmp(&kind_rank(&b)),
        },
    }
}

fn kind_rank(value: &FieldValue<'_>) -> u8 {
    match value {
        FieldValue::Number(_) => 0,
        FieldValue::Instant(_) => 1,
        FieldValue::Text(_) => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::record::DomainKind;
    use crate::domain::query::spec::ALL_SENTINEL;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        title: String,
        status: String,
        size: Option<u32>,
        day: u32,
    }

    impl Record for Row {
        const KIND: DomainKind = DomainKind::Document;

        fn id(&self) -> &str {
            &self.id
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.title.as_str(), self.id.as_str()]
        }

        fn field(&self, name: &str) -> Option<FieldValue<'_>> {
            match name {
                "title" => Some(FieldValue::text(&self.title)),
                "status" => Some(FieldValue::text(&self.status)),
                "size" => self.size.map(|size| FieldValue::Number(f64::from(size))),
                "day" => NaiveDate::from_ymd_opt(2024, 1, self.day).map(FieldValue::date),
                _ => None,
            }
        }
    }

    fn row(id: &str, title: &str, status: &str, size: Option<u32>, day: u32) -> Row {
        Row {
            id: id.to_string(),
            title: title.to_string(),
            status: status.to_string(),
            size,
            day,
        }
    }

    fn sample() -> Vec<Row> {
        vec![
            row("r1", "Kalite Politikası", "approved", Some(120), 3),
            row("r2", "Calibration Procedure", "draft", Some(40), 9),
            row("r3", "Sample Handling", "draft", None, 1),
            row("r4", "Internal Audit Plan", "review", Some(300), 9),
            row("r5", "Method Validation", "approved", Some(40), 20),
        ]
    }

    fn ids<T: Record>(items: &[T]) -> Vec<&str> {
        items.iter().map(Record::id).collect()
    }

    #[test]
    fn empty_spec_returns_first_page_in_source_order() {
        let records = sample();
        let result = query(&records, &QuerySpec::new());

        assert_eq!(ids(&result.items), vec!["r1", "r2", "r3", "r4", "r5"]);
        assert_eq!(result.total_count, 5);
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let records = sample();
        let result = query(&records, &QuerySpec::new().with_search("  KALITE "));

        assert_eq!(ids(&result.items), vec!["r1"]);
    }

    #[test]
    fn filters_are_conjunctive_and_all_is_ignored() {
        let records = sample();
        let spec = QuerySpec::new()
            .with_filter("status", "draft")
            .with_filter("title", ALL_SENTINEL)
            .with_search("procedure");
        let result = query(&records, &spec);

        assert_eq!(ids(&result.items), vec!["r2"]);
    }

    #[test]
    fn unknown_filter_field_matches_nothing() {
        let records = sample();
        let result = query(&records, &QuerySpec::new().with_filter("owner", "me"));

        assert!(result.items.is_empty());
        assert_eq!(result.total_pages, 0);
    }

    #[test]
    fn numeric_range_is_inclusive_and_skips_missing_values() {
        let records = sample();
        let spec = QuerySpec::new().with_range(RangeFilter::new(
            "size",
            Some(RangeBound::Number(40.0)),
            Some(RangeBound::Number(120.0)),
        ));
        let result = query(&records, &spec);

        assert_eq!(ids(&result.items), vec!["r1", "r2", "r5"]);
    }

    #[test]
    fn open_ended_date_range() {
        let records = sample();
        let spec = QuerySpec::new().with_range(RangeFilter::new(
            "day",
            RangeBound::parse_instant("2024-01-09"),
            None,
        ));
        let result = query(&records, &spec);

        assert_eq!(ids(&result.items), vec!["r2", "r4", "r5"]);
    }

    #[test]
    fn mismatched_bound_type_matches_nothing() {
        let records = sample();
        let spec = QuerySpec::new().with_range(RangeFilter::new(
            "size",
            RangeBound::parse_instant("2024-01-01"),
            None,
        ));

        assert_eq!(query(&records, &spec).total_count, 0);
    }

    #[test]
    fn sort_keeps_ties_in_source_order_both_ways() {
        let records = sample();

        let asc = query(&records, &QuerySpec::new().sorted_by("day", SortDirection::Asc));
        assert_eq!(ids(&asc.items), vec!["r3", "r1", "r2", "r4", "r5"]);

        let desc = query(&records, &QuerySpec::new().sorted_by("day", SortDirection::Desc));
        assert_eq!(ids(&desc.items), vec!["r5", "r2", "r4", "r1", "r3"]);
    }

    #[test]
    fn missing_sort_values_come_first_ascending() {
        let records = sample();
        let result = query(&records, &QuerySpec::new().sorted_by("size", SortDirection::Asc));

        assert_eq!(ids(&result.items), vec!["r3", "r2", "r5", "r1", "r4"]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let records = sample();
        let result = query(&records, &QuerySpec::new().with_page_size(2).with_page(7));

        assert!(result.items.is_empty());
        assert_eq!(result.total_count, 5);
        assert_eq!(result.total_pages, 3);
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let records = sample();
        let result = query(&records, &QuerySpec::new().with_page_size(0));

        assert_eq!(result.items.len(), 1);
        assert_eq!(result.page_size, 1);
        assert_eq!(result.total_pages, 5);
    }

    fn arb_rows() -> impl Strategy<Value = Vec<Row>> {
        prop::collection::vec(
            (
                prop::sample::select(vec!["alpha", "Beta", "gamma", "Delta beta"]),
                prop::sample::select(vec!["draft", "review", "approved"]),
                prop::option::of(0u32..50),
                1u32..28,
            ),
            0..40,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(idx, (title, status, size, day))| Row {
                    id: format!("r{idx}"),
                    title: title.to_string(),
                    status: status.to_string(),
                    size,
                    day,
                })
                .collect()
        })
    }

    fn arb_spec() -> impl Strategy<Value = QuerySpec> {
        (
            prop::sample::select(vec!["", "beta", "ALPHA", "zzz"]),
            prop::sample::select(vec!["all", "draft", "approved"]),
            prop::option::of(0u32..50),
            prop::sample::select(vec!["title", "status", "size", "day"]),
            any::<bool>(),
            prop::sample::select(vec![5usize, 10, 20, 50]),
            0usize..6,
        )
            .prop_map(|(term, status, min_size, sort_field, desc, page_size, page)| {
                let direction = if desc {
                    SortDirection::Desc
                } else {
                    SortDirection::Asc
                };
                let mut spec = QuerySpec::new()
                    .with_search(term)
                    .with_filter("status", status)
                    .sorted_by(sort_field, direction)
                    .with_page_size(page_size)
                    .with_page(page);
                if let Some(min) = min_size {
                    spec = spec.with_range(RangeFilter::new(
                        "size",
                        Some(RangeBound::Number(f64::from(min))),
                        None,
                    ));
                }
                spec
            })
    }

    fn passes(row: &Row, spec: &QuerySpec) -> bool {
        let needle = spec.search_term.trim().to_lowercase();
        matches_search(row, &needle)
            && matches_filters(row, spec)
            && spec.ranges.iter().all(|range| within_range(row, range))
    }

    proptest! {
        #[test]
        fn query_is_idempotent(rows in arb_rows(), spec in arb_spec()) {
            prop_assert_eq!(query(&rows, &spec), query(&rows, &spec));
        }

        #[test]
        fn page_never_exceeds_page_size(rows in arb_rows(), spec in arb_spec()) {
            let result = query(&rows, &spec);
            prop_assert!(result.items.len() <= spec.page_size);
            prop_assert_eq!(result.total_pages, result.total_count.div_ceil(spec.page_size));
        }

        #[test]
        fn returned_items_satisfy_every_predicate(rows in arb_rows(), spec in arb_spec()) {
            let result = query(&rows, &spec);
            for item in &result.items {
                prop_assert!(passes(item, &spec));
            }
        }

        #[test]
        fn unpaged_result_excludes_only_failing_rows(rows in arb_rows(), spec in arb_spec()) {
            let unpaged = spec.clone().with_page_size(rows.len().max(1)).with_page(0);
            let result = query(&rows, &unpaged);
            for row in &rows {
                let included = result.items.iter().any(|item| item.id == row.id);
                prop_assert_eq!(included, passes(row, &spec));
            }
        }

        #[test]
        fn equal_sort_keys_keep_source_order(rows in arb_rows(), desc in any::<bool>()) {
            let direction = if desc { SortDirection::Desc } else { SortDirection::Asc };
            let spec = QuerySpec::new()
                .sorted_by("status", direction)
                .with_page_size(rows.len().max(1));
            let result = query(&rows, &spec);
            let position = |id: &str| rows.iter().position(|row| row.id == id);
            for pair in result.items.windows(2) {
                if pair[0].status == pair[1].status {
                    prop_assert!(position(&pair[0].id) < position(&pair[1].id));
                }
            }
        }
    }
}
