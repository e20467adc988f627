use super::*;

fn entry(position: &str, company: &str, start: &str, order: i32) -> Experience {
    serde_json::from_value(serde_json::json!({
        "id": position.to_lowercase().replace(' ', "-"),
        "position": position,
        "company": company,
        "startDate": start,
        "order": order,
        "description": "Built things",
    }))
    .expect("experience")
}

#[test]
fn sorted_entries_respects_explicit_order_first() {
    let entries = vec![
        entry("Senior Engineer", "Acme", "2021-01-01", 2),
        entry("Staff Engineer", "Globex", "2019-01-01", 1),
    ];
    let sorted = sorted_entries(entries);
    assert_eq!(sorted[0].position, "Staff Engineer");
}

#[test]
fn equal_order_falls_back_to_recency() {
    let entries = vec![
        entry("Old Role", "Acme", "2018-01-01", 0),
        entry("New Role", "Acme", "2022-01-01", 0),
    ];
    let sorted = sorted_entries(entries);
    assert_eq!(sorted[0].position, "New Role");
}

#[test]
fn visible_entries_searches_position_company_and_description() {
    let entries = vec![
        entry("Backend Engineer", "Acme", "2020-01-01", 0),
        entry("Designer", "Globex", "2021-01-01", 0),
    ];
    assert_eq!(visible_entries(&entries, "acme").len(), 1);
    assert_eq!(visible_entries(&entries, "designer").len(), 1);
    assert_eq!(visible_entries(&entries, "built").len(), 2);
    assert!(visible_entries(&entries, "nomatch").is_empty());
}

#[test]
fn period_label_formats_closed_and_open_ranges() {
    assert_eq!(period_label("2020-01-01", Some("2022-06-01"), false), "2020-01-01 – 2022-06-01");
    assert_eq!(period_label("2020-01-01", None, false), "2020-01-01 – Present");
    assert_eq!(period_label("2020-01-01", Some(""), false), "2020-01-01 – Present");
}

#[test]
fn period_label_current_overrides_end_date() {
    assert_eq!(period_label("2020-01-01", Some("2022-06-01"), true), "2020-01-01 – Present");
}
