use super::*;

fn valid_draft() -> ProjectDraft {
    ProjectDraft {
        title: "E-Commerce Platform".to_owned(),
        short_description: "Storefront and admin".to_owned(),
        description: "Full-stack storefront".to_owned(),
        category: "Web Development".to_owned(),
        technologies: vec!["Rust".to_owned()],
        status: "Completed".to_owned(),
        start_date: "2023-01-01".to_owned(),
        end_date: "2023-06-01".to_owned(),
        ..ProjectDraft::default()
    }
}

#[test]
fn valid_draft_passes_validation() {
    assert!(validate_draft(&valid_draft()).is_empty());
}

#[test]
fn blank_required_fields_are_each_reported() {
    let errors = validate_draft(&ProjectDraft::default());
    for field in ["title", "shortDescription", "description", "category", "startDate", "technologies"] {
        assert!(error_for(&errors, field).is_some(), "missing error for {field}");
    }
}

#[test]
fn end_date_before_start_date_is_rejected() {
    let mut draft = valid_draft();
    draft.end_date = "2022-12-31".to_owned();
    let errors = validate_draft(&draft);
    assert_eq!(error_for(&errors, "endDate"), Some("End date cannot be before start date"));
}

#[test]
fn open_ended_projects_need_no_end_date() {
    let mut draft = valid_draft();
    draft.end_date = String::new();
    assert!(validate_draft(&draft).is_empty());
}

#[test]
fn whitespace_only_title_counts_as_blank() {
    let mut draft = valid_draft();
    draft.title = "   ".to_owned();
    assert!(error_for(&validate_draft(&draft), "title").is_some());
}

#[test]
fn error_for_unknown_field_is_none() {
    let errors = validate_draft(&ProjectDraft::default());
    assert_eq!(error_for(&errors, "likes"), None);
}

#[test]
fn add_technology_trims_and_rejects_duplicates() {
    let mut list = Vec::new();
    assert!(add_technology(&mut list, "  Rust  "));
    assert!(!add_technology(&mut list, "Rust"));
    assert!(!add_technology(&mut list, ""));
    assert!(!add_technology(&mut list, "   "));
    assert_eq!(list, vec!["Rust".to_owned()]);
}

#[test]
fn remove_technology_drops_only_the_target() {
    let mut list = vec!["Rust".to_owned(), "Leptos".to_owned()];
    remove_technology(&mut list, "Rust");
    assert_eq!(list, vec!["Leptos".to_owned()]);
    remove_technology(&mut list, "absent");
    assert_eq!(list, vec!["Leptos".to_owned()]);
}

#[test]
fn empty_draft_defaults_to_first_category_and_status() {
    let draft = empty_draft();
    assert_eq!(draft.category, Project::CATEGORIES[0]);
    assert_eq!(draft.status, Project::STATUSES[0]);
    assert!(draft.technologies.is_empty());
}
