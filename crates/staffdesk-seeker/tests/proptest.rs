//! Property-based tests for seeker using proptest.

use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use proptest::prelude::*;
use staffdesk_seeker::{
    compute_view, Debounced, Dir, FieldDef, FieldKind, FilterValue, Number, Paginator, Query,
    Schema, Seekable, SortSpec, Value,
};

// ============================================================================
// Test helpers
// ============================================================================

const STATUS: &[&str] = &["active", "returned", "lost"];

#[derive(Debug, Clone)]
struct TestItem {
    id: usize,
    name: String,
    status: &'static str,
    score: Option<i64>,
}

static TEST_ITEM: Schema = Schema::new(&[
    FieldDef::new("id", "ID", FieldKind::Number),
    FieldDef::new("name", "Name", FieldKind::Text).searchable(),
    FieldDef::new("status", "Status", FieldKind::Enum(STATUS)),
    FieldDef::new("score", "Score", FieldKind::Number),
]);

impl Seekable for TestItem {
    fn schema() -> &'static Schema {
        &TEST_ITEM
    }

    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::Number(Number::from(self.id)),
            "name" => Value::String(&self.name),
            "status" => Value::Enum(self.status),
            "score" => self.score.map(|s| Value::Number(Number::I64(s))).unwrap_or(Value::None),
            _ => Value::None,
        }
    }
}

// Strategy to generate test items; ids follow input order.
fn items_strategy(max: usize) -> impl Strategy<Value = Vec<TestItem>> {
    prop::collection::vec(
        (
            "[a-zA-Z]{1,8}",
            prop::sample::select(STATUS),
            prop::option::of(-5i64..5),
        ),
        0..max,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(id, (name, status, score))| TestItem {
                id,
                name,
                status,
                score,
            })
            .collect()
    })
}

fn pager(size: usize, window: usize) -> Paginator {
    Paginator::new(
        NonZeroUsize::new(size).unwrap(),
        NonZeroUsize::new(window).unwrap(),
    )
}

fn ids(rows: &[&TestItem]) -> Vec<usize> {
    rows.iter().map(|r| r.id).collect()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Clamping an already clamped page changes nothing.
    #[test]
    fn clamping_is_idempotent(
        count in 0usize..500,
        requested in 0usize..100,
        size in 1usize..30,
    ) {
        let p = pager(size, 5);
        let once = p.paginate(count, requested);
        let twice = p.paginate(count, once.page);
        prop_assert_eq!(once, twice);
        prop_assert!(once.page >= 1 && once.page <= once.total_pages);
    }

    /// Pages tile the result: every row shows up on exactly one page.
    #[test]
    fn pages_partition_rows(count in 0usize..200, size in 1usize..25) {
        let rows: Vec<usize> = (0..count).collect();
        let p = pager(size, 5);
        let total = p.paginate(count, 1).total_pages;

        let mut seen = Vec::new();
        for n in 1..=total {
            let page = p.paginate(count, n);
            let slice = page.slice(&rows);
            prop_assert!(slice.len() <= size);
            seen.extend_from_slice(slice);
        }
        prop_assert_eq!(seen, rows);
    }

    /// The page window is contiguous, within bounds and contains the page.
    #[test]
    fn window_contains_current_page(
        count in 0usize..500,
        requested in 0usize..60,
        window in 1usize..9,
    ) {
        let page = pager(10, window).paginate(count, requested);
        let range = page.window();
        prop_assert!(range.contains(&page.page));
        prop_assert!(*range.start() >= 1);
        prop_assert!(*range.end() <= page.total_pages);
        prop_assert_eq!(range.count(), window.min(page.total_pages));
    }

    /// Adding a filter never adds rows, and only removes.
    #[test]
    fn filters_are_monotonic(
        items in items_strategy(60),
        search in "[a-z]{0,2}",
        status in prop::sample::select(STATUS),
    ) {
        let unfiltered = compute_view(&items, &search, &BTreeMap::new(), None);

        let mut filters = BTreeMap::new();
        filters.insert("status".to_string(), FilterValue::parse(status));
        let filtered = compute_view(&items, &search, &filters, None);

        prop_assert!(filtered.match_count <= unfiltered.match_count);
        let all = ids(&unfiltered.rows);
        prop_assert!(ids(&filtered.rows).iter().all(|id| all.contains(id)));
        prop_assert!(filtered.rows.iter().all(|r| r.status == status));
    }

    /// Longer search text never matches more rows.
    #[test]
    fn extending_search_is_monotonic(
        items in items_strategy(60),
        prefix in "[a-z]{0,2}",
        extra in "[a-z]{1,2}",
    ) {
        let short = compute_view(&items, &prefix, &BTreeMap::new(), None);
        let long = compute_view(&items, &format!("{}{}", prefix, extra), &BTreeMap::new(), None);
        prop_assert!(long.match_count <= short.match_count);
    }

    /// Rows with equal keys keep input order in both directions.
    #[test]
    fn sort_is_stable(items in items_strategy(60), desc in any::<bool>()) {
        let dir = if desc { Dir::Desc } else { Dir::Asc };
        let view = compute_view(&items, "", &BTreeMap::new(), Some(&SortSpec::new("status", dir)));
        prop_assert_eq!(view.match_count, items.len());

        for pair in view.rows.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.status == b.status {
                prop_assert!(a.id < b.id);
            } else if desc {
                prop_assert!(a.status > b.status);
            } else {
                prop_assert!(a.status < b.status);
            }
        }
    }

    /// Sorting on a field some rows lack never panics or drops rows.
    #[test]
    fn sort_with_missing_values_keeps_every_row(items in items_strategy(60), desc in any::<bool>()) {
        let dir = if desc { Dir::Desc } else { Dir::Asc };
        let view = compute_view(&items, "", &BTreeMap::new(), Some(&SortSpec::new("score", dir)));
        let mut got = ids(&view.rows);
        got.sort_unstable();
        prop_assert_eq!(got, (0..items.len()).collect::<Vec<_>>());
    }

    /// Rows with a score come out ordered however many rows without one sit
    /// between them, and the scoreless rows stay where they were.
    #[test]
    fn sort_orders_present_values_around_missing_ones(
        items in items_strategy(60),
        desc in any::<bool>(),
    ) {
        let dir = if desc { Dir::Desc } else { Dir::Asc };
        let view = compute_view(&items, "", &BTreeMap::new(), Some(&SortSpec::new("score", dir)));

        for (slot, row) in view.rows.iter().enumerate() {
            if row.score.is_none() {
                prop_assert_eq!(row.id, slot);
            }
        }

        let keyed: Vec<&TestItem> = view.rows.iter().copied().filter(|r| r.score.is_some()).collect();
        for pair in keyed.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.score == b.score {
                prop_assert!(a.id < b.id);
            } else if desc {
                prop_assert!(a.score > b.score);
            } else {
                prop_assert!(a.score < b.score);
            }
        }
    }

    /// count() agrees with filter() and find() with its first element.
    #[test]
    fn count_and_find_agree_with_filter(
        items in items_strategy(40),
        status in prop::sample::select(STATUS),
    ) {
        let query = Query::new().and_eq("status", status);
        let filtered = query.filter(&items);
        prop_assert_eq!(query.count(&items), filtered.len());
        prop_assert_eq!(query.find(&items).map(|i| i.id), filtered.first().map(|i| i.id));
    }

    /// While updates arrive faster than the quiet interval nothing settles;
    /// after the last one the value settles exactly once.
    #[test]
    fn debounce_quiescence(gaps in prop::collection::vec(0u64..300, 1..20)) {
        let quiet = Duration::from_millis(300);
        let t0 = Instant::now();
        let mut d = Debounced::new(0usize, quiet);

        let mut now = t0;
        for (i, gap) in gaps.iter().enumerate() {
            now += Duration::from_millis(*gap);
            prop_assert!(d.poll(now).is_none());
            d.push(i + 1, now);
            prop_assert!(d.poll(now).is_none());
        }
        prop_assert_eq!(*d.value(), 0);

        prop_assert!(d.poll(now + quiet - Duration::from_millis(1)).is_none());
        prop_assert_eq!(d.poll(now + quiet).copied(), Some(gaps.len()));
        prop_assert!(d.poll(now + quiet * 2).is_none());
    }
}
