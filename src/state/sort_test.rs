use super::*;

fn rec(id: i64, day: &str, time_from: &str, note: &str, area: &str) -> ScheduleRecord {
    ScheduleRecord::new(id, day, time_from, "", note, area)
}

fn ids(records: &[ScheduleRecord]) -> Vec<i64> {
    records
        .iter()
        .map(|r| match r.id {
            crate::net::types::ScheduleId::Number(n) => n,
            crate::net::types::ScheduleId::Text(_) => -1,
        })
        .collect()
}

// =============================================================
// next_order
// =============================================================

#[test]
fn next_order_starts_ascending_without_prior_sort() {
    assert_eq!(next_order(SortField::Day, None, SortOrder::Ascending), SortOrder::Ascending);
}

#[test]
fn next_order_flips_same_field_when_ascending() {
    assert_eq!(next_order(SortField::Note, Some(SortField::Note), SortOrder::Ascending), SortOrder::Descending);
}

#[test]
fn next_order_returns_to_ascending_after_descending() {
    assert_eq!(next_order(SortField::Note, Some(SortField::Note), SortOrder::Descending), SortOrder::Ascending);
}

#[test]
fn next_order_resets_when_switching_field() {
    assert_eq!(next_order(SortField::Time, Some(SortField::Day), SortOrder::Ascending), SortOrder::Ascending);
    assert_eq!(next_order(SortField::Time, Some(SortField::Day), SortOrder::Descending), SortOrder::Ascending);
}

// =============================================================
// Keys
// =============================================================

#[test]
fn weekday_rank_orders_monday_through_sunday() {
    let ranks: Vec<u8> = WEEKDAYS.iter().map(|d| weekday_rank(d)).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn weekday_rank_unknown_or_empty_is_zero() {
    assert_eq!(weekday_rank(""), 0);
    assert_eq!(weekday_rank("Someday"), 0);
    assert_eq!(weekday_rank("monday"), 0);
}

#[test]
fn time_key_strips_colons_and_defaults_missing() {
    assert_eq!(time_key("08:30"), "0830");
    assert_eq!(time_key("7:05"), "705");
    assert_eq!(time_key(""), "0000");
}

#[test]
fn sort_field_parses_select_values() {
    for field in SortField::ALL {
        assert_eq!(field.as_str().parse::<SortField>(), Ok(field));
    }
    assert_eq!("".parse::<SortField>(), Err(UnknownSortField(String::new())));
    assert!("Day".parse::<SortField>().is_err());
}

// =============================================================
// sort_records
// =============================================================

#[test]
fn day_sort_ascending_uses_week_order() {
    let mut list = vec![rec(1, "Sunday", "", "", ""), rec(2, "Monday", "", "", ""), rec(3, "Wednesday", "", "", "")];
    sort_records(&mut list, SortField::Day, SortOrder::Ascending);
    let days: Vec<&str> = list.iter().map(|r| r.day.as_str()).collect();
    assert_eq!(days, vec!["Monday", "Wednesday", "Sunday"]);
}

#[test]
fn day_sort_puts_unknown_first_ascending_and_last_descending() {
    let mut list = vec![rec(1, "Friday", "", "", ""), rec(2, "", "", "", ""), rec(3, "Monday", "", "", "")];
    sort_records(&mut list, SortField::Day, SortOrder::Ascending);
    assert_eq!(ids(&list), vec![2, 3, 1]);
    sort_records(&mut list, SortField::Day, SortOrder::Descending);
    assert_eq!(ids(&list), vec![1, 3, 2]);
}

#[test]
fn time_sort_orders_start_times_and_keeps_tie_order() {
    let mut list = vec![rec(1, "", "09:30", "", ""), rec(2, "", "08:00", "", ""), rec(3, "", "08:00", "", "")];
    sort_records(&mut list, SortField::Time, SortOrder::Ascending);
    assert_eq!(ids(&list), vec![2, 3, 1]);
}

#[test]
fn time_sort_descending_keeps_tie_order() {
    let mut list = vec![rec(1, "", "08:00", "", ""), rec(2, "", "09:30", "", ""), rec(3, "", "08:00", "", "")];
    sort_records(&mut list, SortField::Time, SortOrder::Descending);
    assert_eq!(ids(&list), vec![2, 1, 3]);
}

#[test]
fn time_sort_treats_missing_start_as_midnight() {
    let mut list = vec![rec(1, "", "00:30", "", ""), rec(2, "", "", "", "")];
    sort_records(&mut list, SortField::Time, SortOrder::Ascending);
    assert_eq!(ids(&list), vec![2, 1]);
}

#[test]
fn note_sort_is_case_insensitive() {
    let mut list = vec![rec(1, "", "", "banana", ""), rec(2, "", "", "Apple", ""), rec(3, "", "", "cherry", "")];
    sort_records(&mut list, SortField::Note, SortOrder::Ascending);
    assert_eq!(ids(&list), vec![2, 1, 3]);
}

#[test]
fn area_sort_places_empty_first_ascending() {
    let mut list = vec![rec(1, "", "", "", "Zone B"), rec(2, "", "", "", ""), rec(3, "", "", "", "zone a")];
    sort_records(&mut list, SortField::Area, SortOrder::Ascending);
    assert_eq!(ids(&list), vec![2, 3, 1]);
    sort_records(&mut list, SortField::Area, SortOrder::Descending);
    assert_eq!(ids(&list), vec![1, 3, 2]);
}

#[test]
fn sort_labels_are_human_readable() {
    assert_eq!(SortField::Area.label(), "Area");
    assert_eq!(SortOrder::Descending.label(), "descending");
    assert_eq!(SortField::Time.to_string(), "time");
}
