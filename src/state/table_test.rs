use super::*;

fn record(id: i64, name: &str, category: &str) -> NameRecord {
    NameRecord {
        nameid: Some(NameId::from(id)),
        name: name.to_owned(),
        category: category.to_owned(),
        ..NameRecord::default()
    }
}

fn many(count: i64) -> Vec<NameRecord> {
    (1..=count).map(|i| record(i, &format!("Name {i}"), "pets")).collect()
}

fn ids(rows: &[NameRecord]) -> Vec<String> {
    rows.iter().map(|r| r.identifier().map(ToString::to_string).unwrap_or_default()).collect()
}

// =============================================================
// Defaults and sort toggling
// =============================================================

#[test]
fn table_state_defaults() {
    let state = TableState::default();
    assert_eq!(state.page, 1);
    assert_eq!(state.page_size, 50);
    assert!(state.sort.is_none());
}

#[test]
fn toggle_sort_starts_ascending_then_flips() {
    let mut state = TableState::default();
    state.toggle_sort(SortColumn::Name);
    assert_eq!(state.sort, Some((SortColumn::Name, SortDirection::Ascending)));
    state.toggle_sort(SortColumn::Name);
    assert_eq!(state.sort, Some((SortColumn::Name, SortDirection::Descending)));
    state.toggle_sort(SortColumn::Category);
    assert_eq!(state.sort, Some((SortColumn::Category, SortDirection::Ascending)));
}

#[test]
fn sort_indicator_marks_active_column() {
    let mut state = TableState::default();
    assert_eq!(state.sort_indicator(SortColumn::Name), "↕");
    state.toggle_sort(SortColumn::Name);
    assert_eq!(state.sort_indicator(SortColumn::Name), "▲");
    assert_eq!(state.sort_indicator(SortColumn::NameId), "↕");
}

// =============================================================
// sort_names
// =============================================================

#[test]
fn sort_by_name_is_case_insensitive() {
    let mut rows = vec![record(1, "zeta", "pets"), record(2, "Alpha", "pets"), record(3, "beta", "pets")];
    sort_names(&mut rows, SortColumn::Name, SortDirection::Ascending);
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Alpha", "beta", "zeta"]);
}

#[test]
fn sort_by_numeric_id_descending() {
    let mut rows = vec![record(2, "b", "x"), record(10, "c", "x"), record(1, "a", "x")];
    sort_names(&mut rows, SortColumn::NameId, SortDirection::Descending);
    assert_eq!(ids(&rows), ["10", "2", "1"]);
}

#[test]
fn sort_by_id_orders_floats_and_huge_ids_numerically() {
    let mut rows: Vec<NameRecord> = serde_json::from_value(serde_json::json!([
        { "nameid": 18_446_744_073_709_551_615_u64, "name": "big" },
        { "nameid": 2.5, "name": "float" },
        { "nameid": 10, "name": "ten" },
        { "nameid": -1, "name": "negative" }
    ]))
    .unwrap();
    sort_names(&mut rows, SortColumn::NameId, SortDirection::Ascending);
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["negative", "float", "ten", "big"]);
}

#[test]
fn sort_by_id_puts_missing_first() {
    let mut rows = vec![record(3, "c", "x"), NameRecord::default()];
    sort_names(&mut rows, SortColumn::NameId, SortDirection::Ascending);
    assert_eq!(ids(&rows), ["", "3"]);
}

#[test]
fn sort_by_category_is_stable() {
    let mut rows = vec![record(1, "a", "pets"), record(2, "b", "beauty"), record(3, "c", "pets")];
    sort_names(&mut rows, SortColumn::Category, SortDirection::Ascending);
    assert_eq!(ids(&rows), ["2", "1", "3"]);
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn page_rows_returns_first_page_by_default() {
    let rows = TableState::default().page_rows(&many(120));
    assert_eq!(rows.len(), 50);
    assert_eq!(rows[0].name, "Name 1");
}

#[test]
fn page_rows_returns_last_partial_page() {
    let mut state = TableState::default();
    state.set_page(3);
    let rows = state.page_rows(&many(120));
    assert_eq!(rows.len(), 20);
    assert_eq!(rows[0].name, "Name 101");
}

#[test]
fn page_is_clamped_when_list_shrinks() {
    let mut state = TableState::default();
    state.set_page(3);
    let rows = state.page_rows(&many(10));
    assert_eq!(rows.len(), 10);
    assert_eq!(state.current_page(10), 1);
}

#[test]
fn set_page_size_accepts_only_known_sizes_and_resets_page() {
    let mut state = TableState::default();
    state.set_page(2);
    state.set_page_size(25);
    assert_eq!(state.page_size, 25);
    assert_eq!(state.page, 1);

    state.set_page(2);
    state.set_page_size(30);
    assert_eq!(state.page_size, 25);
    assert_eq!(state.page, 2);
}

#[test]
fn page_count_is_at_least_one() {
    let state = TableState::default();
    assert_eq!(state.page_count(0), 1);
    assert_eq!(state.page_count(50), 1);
    assert_eq!(state.page_count(51), 2);
}

#[test]
fn range_label_describes_visible_rows() {
    let mut state = TableState::default();
    assert_eq!(state.range_label(0), "0 of 0");
    assert_eq!(state.range_label(120), "1-50 of 120");
    state.set_page(3);
    assert_eq!(state.range_label(120), "101-120 of 120");
}

#[test]
fn page_rows_applies_sort_before_slicing() {
    let mut state = TableState::default();
    state.set_page_size(25);
    state.toggle_sort(SortColumn::NameId);
    state.toggle_sort(SortColumn::NameId);
    let rows = state.page_rows(&many(60));
    assert_eq!(rows[0].identifier(), Some(&NameId::from(60)));
}
