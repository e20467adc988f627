use super::*;

fn entry(degree: &str, institution: &str, start: &str, order: i32, field: Option<&str>) -> Education {
    serde_json::from_value(serde_json::json!({
        "id": degree.to_lowercase().replace(' ', "-"),
        "degree": degree,
        "institution": institution,
        "startDate": start,
        "order": order,
        "fieldOfStudy": field,
    }))
    .expect("education")
}

#[test]
fn sorted_entries_orders_by_rank_then_recency() {
    let entries = vec![
        entry("MSc", "Tech University", "2020-09-01", 1, None),
        entry("BSc", "State College", "2016-09-01", 0, None),
        entry("Certificate", "Online Academy", "2022-01-01", 1, None),
    ];
    let sorted = sorted_entries(entries);
    let degrees: Vec<&str> = sorted.iter().map(|e| e.degree.as_str()).collect();
    assert_eq!(degrees, vec!["BSc", "Certificate", "MSc"]);
}

#[test]
fn visible_entries_searches_degree_institution_and_field() {
    let entries = vec![
        entry("BSc", "State College", "2016-09-01", 0, Some("Computer Science")),
        entry("MSc", "Tech University", "2020-09-01", 1, Some("Distributed Systems")),
    ];
    assert_eq!(visible_entries(&entries, "college").len(), 1);
    assert_eq!(visible_entries(&entries, "distributed").len(), 1);
    assert_eq!(visible_entries(&entries, "msc").len(), 1);
    assert_eq!(visible_entries(&entries, "").len(), 2);
}

#[test]
fn missing_field_of_study_does_not_break_search() {
    let entries = vec![entry("BSc", "State College", "2016-09-01", 0, None)];
    assert!(visible_entries(&entries, "science").is_empty());
    assert_eq!(visible_entries(&entries, "state").len(), 1);
}
