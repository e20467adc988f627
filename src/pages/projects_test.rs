use super::*;

fn project(title: &str, description: &str, category: &str, technologies: &[&str]) -> Project {
    serde_json::from_value(serde_json::json!({
        "id": title.to_lowercase().replace(' ', "-"),
        "title": title,
        "description": description,
        "category": category,
        "technologies": technologies,
    }))
    .expect("project")
}

fn sample() -> Vec<Project> {
    vec![
        project("E-Commerce Platform", "Full-stack storefront", "Web Development", &["React", "Stripe"]),
        project("Mobile Banking App", "Secure banking", "Mobile Development", &["React Native"]),
        project("Weather Dashboard", "Forecasts and maps", "Web Development", &["Chart.js"]),
    ]
}

#[test]
fn all_category_and_blank_search_keep_everything() {
    let projects = sample();
    assert_eq!(visible_projects(&projects, "All", "").len(), 3);
}

#[test]
fn category_filter_is_an_exact_match() {
    let projects = sample();
    let visible = visible_projects(&projects, "Web Development", "");
    assert_eq!(visible.len(), 2);
    assert!(visible.iter().all(|p| p.category == "Web Development"));
}

#[test]
fn search_matches_title_description_and_technologies() {
    let projects = sample();
    assert_eq!(visible_projects(&projects, "All", "banking").len(), 1);
    assert_eq!(visible_projects(&projects, "All", "forecasts").len(), 1);
    assert_eq!(visible_projects(&projects, "All", "stripe").len(), 1);
}

#[test]
fn search_and_category_compose() {
    let projects = sample();
    // "react" appears in both a web and a mobile project
    assert_eq!(visible_projects(&projects, "All", "react").len(), 2);
    assert_eq!(visible_projects(&projects, "Web Development", "react").len(), 1);
}

#[test]
fn no_match_yields_empty() {
    let projects = sample();
    assert!(visible_projects(&projects, "All", "blockchain").is_empty());
    assert!(visible_projects(&projects, "Game Development", "").is_empty());
}
