use super::*;
use crate::state::sort::weekday_rank;

fn rec(id: i64, day: &str) -> ScheduleRecord {
    ScheduleRecord::new(id, day, "08:00", "09:00", "", "")
}

fn ids(records: &[ScheduleRecord]) -> Vec<ScheduleId> {
    records.iter().map(|r| r.id.clone()).collect()
}

fn num_ids(values: &[i64]) -> Vec<ScheduleId> {
    values.iter().copied().map(ScheduleId::Number).collect()
}

// =============================================================
// synchronize
// =============================================================

#[test]
fn synchronize_appends_only_unknown_ids_in_incoming_order() {
    let current = vec![rec(1, "Monday"), rec(2, "Tuesday")];
    let incoming = vec![rec(4, "Friday"), rec(2, "Sunday"), rec(3, "Thursday")];
    let merged = synchronize(&current, &incoming);
    assert_eq!(ids(&merged), num_ids(&[1, 2, 4, 3]));
}

#[test]
fn synchronize_never_overwrites_existing_entries() {
    let current = vec![rec(1, "Monday")];
    let incoming = vec![rec(1, "Saturday")];
    let merged = synchronize(&current, &incoming);
    assert_eq!(merged, current);
}

#[test]
fn synchronize_keeps_local_entries_missing_from_snapshot() {
    let current = vec![rec(1, "Monday"), rec(2, "Tuesday")];
    let merged = synchronize(&current, &[rec(2, "Tuesday")]);
    assert_eq!(ids(&merged), num_ids(&[1, 2]));
}

#[test]
fn synchronize_dedupes_repeated_incoming_ids() {
    let merged = synchronize(&[], &[rec(7, "Monday"), rec(7, "Friday"), rec(8, "Monday")]);
    assert_eq!(ids(&merged), num_ids(&[7, 8]));
    assert_eq!(merged[0].day, "Monday");
}

#[test]
fn synchronize_contains_union_of_ids_exactly_once() {
    let current = vec![rec(5, ""), rec(1, ""), rec(9, "")];
    let incoming = vec![rec(9, ""), rec(2, ""), rec(5, ""), rec(6, "")];
    let merged = synchronize(&current, &incoming);

    let mut got = ids(&merged);
    got.sort_by_key(ToString::to_string);
    got.dedup();
    assert_eq!(got.len(), merged.len());
    assert_eq!(ids(&merged[..3]), ids(&current));
    assert_eq!(ids(&merged[3..]), num_ids(&[2, 6]));
}

#[test]
fn synchronize_treats_text_and_numeric_ids_as_distinct() {
    let current = vec![ScheduleRecord::new(1, "", "", "", "", "")];
    let incoming = vec![ScheduleRecord::new("1", "", "", "", "", "")];
    assert_eq!(synchronize(&current, &incoming).len(), 2);
}

// =============================================================
// ScheduleTableState
// =============================================================

#[test]
fn table_state_defaults() {
    let s = ScheduleTableState::default();
    assert!(s.items.is_empty());
    assert!(s.sort_field.is_none());
    assert_eq!(s.sort_order, SortOrder::Ascending);
    assert!(s.deleting.is_empty());
    assert!(!s.dialog.is_open());
    assert!(s.sort_caption().is_none());
}

#[test]
fn merge_incoming_preserves_sorted_prefix() {
    let mut s = ScheduleTableState::with_items(vec![rec(1, "Sunday"), rec(2, "Monday")]);
    s.sort_by(SortField::Day);
    s.merge_incoming(&[rec(1, "Sunday"), rec(2, "Monday"), rec(3, "Wednesday")]);
    assert_eq!(ids(&s.items), num_ids(&[2, 1, 3]));
}

#[test]
fn sort_twice_toggles_ascending_then_descending() {
    let days = ["Wednesday", "Sunday", "Monday", "", "Friday", "Tuesday"];
    let items = days.iter().enumerate().map(|(i, d)| rec(i64::try_from(i).unwrap() + 1, d)).collect();
    let mut s = ScheduleTableState::with_items(items);

    assert_eq!(s.sort_by(SortField::Day), SortOrder::Ascending);
    let ranks: Vec<u8> = s.items.iter().map(|r| weekday_rank(&r.day)).collect();
    assert!(ranks.windows(2).all(|w| w[0] <= w[1]));

    assert_eq!(s.sort_by(SortField::Day), SortOrder::Descending);
    let ranks: Vec<u8> = s.items.iter().map(|r| weekday_rank(&r.day)).collect();
    assert!(ranks.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn sort_indicator_and_caption_follow_sort_state() {
    let mut s = ScheduleTableState::with_items(vec![rec(1, "Monday")]);
    s.sort_by(SortField::Time);
    assert_eq!(s.sort_indicator(SortField::Time), Some(SortOrder::Ascending));
    assert_eq!(s.sort_indicator(SortField::Day), None);
    assert_eq!(s.sort_caption().as_deref(), Some("Sorted by time (ascending)"));

    s.sort_by(SortField::Time);
    assert_eq!(s.sort_caption().as_deref(), Some("Sorted by time (descending)"));

    s.sort_by(SortField::Note);
    assert_eq!(s.sort_indicator(SortField::Note), Some(SortOrder::Ascending));
}

#[test]
fn remove_and_replace_report_matches() {
    let mut s = ScheduleTableState::with_items(vec![rec(1, "Monday"), rec(2, "Tuesday"), rec(3, "Friday")]);
    assert!(s.replace(&ScheduleId::Number(2), rec(2, "Saturday")));
    assert_eq!(s.items[1].day, "Saturday");
    assert!(!s.replace(&ScheduleId::Number(9), rec(9, "Saturday")));

    assert!(s.remove(&ScheduleId::Number(1)));
    assert!(!s.remove(&ScheduleId::Number(1)));
    assert_eq!(ids(&s.items), num_ids(&[2, 3]));
}

#[test]
fn delete_tracking_is_per_row() {
    let mut s = ScheduleTableState::default();
    let a = ScheduleId::Number(1);
    let b = ScheduleId::Number(2);

    assert!(s.begin_delete(&a));
    assert!(!s.begin_delete(&a));
    assert!(s.begin_delete(&b));
    assert!(s.is_deleting(&a) && s.is_deleting(&b));

    s.end_delete(&a);
    assert!(!s.is_deleting(&a));
    assert!(s.is_deleting(&b));
}

#[test]
fn open_editor_copies_row_into_dialog() {
    let mut s = ScheduleTableState::with_items(vec![rec(1, "Monday")]);
    assert!(s.open_editor(&ScheduleId::Number(1)));
    assert_eq!(s.dialog.draft(), s.get(&ScheduleId::Number(1)));
    assert!(!s.open_editor(&ScheduleId::Number(5)));
}

#[test]
fn apply_update_adopts_record_and_closes_dialog() {
    let mut s = ScheduleTableState::with_items(vec![rec(1, "Monday")]);
    s.open_editor(&ScheduleId::Number(1));
    s.apply_update(&ScheduleId::Number(1), rec(1, "Thursday"));
    assert_eq!(s.items[0].day, "Thursday");
    assert!(!s.dialog.is_open());
}
