use super::*;

#[test]
fn project_endpoints_format_expected_paths() {
    assert_eq!(project_endpoint("p1"), "/projects/p1");
    assert_eq!(project_like_endpoint("p1"), "/projects/p1/like");
}

#[test]
fn skill_endpoints_format_expected_paths() {
    assert_eq!(skill_endpoint("s9"), "/skills/s9");
    assert_eq!(skill_priority_endpoint("s9"), "/skills/s9/priority");
}

#[test]
fn experience_endpoints_format_expected_paths() {
    assert_eq!(experience_endpoint("e2"), "/experience/e2");
    assert_eq!(experience_order_endpoint("e2"), "/experience/e2/order");
}

#[test]
fn education_endpoints_format_expected_paths() {
    assert_eq!(education_endpoint("d3"), "/education/d3");
    assert_eq!(education_order_endpoint("d3"), "/education/d3/order");
}

#[test]
fn query_string_is_empty_without_parameters() {
    assert_eq!(query_string(&ListQuery::default()), "");
}

#[test]
fn query_string_renders_each_parameter() {
    let query = ListQuery {
        category: Some("Web Development".to_owned()),
        search: Some("commerce".to_owned()),
        featured: Some(true),
        limit: Some(3),
    };
    assert_eq!(
        query_string(&query),
        "?category=Web%20Development&search=commerce&featured=true&limit=3"
    );
}

#[test]
fn query_string_skips_empty_strings() {
    let query = ListQuery {
        category: Some(String::new()),
        search: Some(String::new()),
        ..ListQuery::default()
    };
    assert_eq!(query_string(&query), "");
}

#[test]
fn encode_component_passes_unreserved_ascii() {
    assert_eq!(encode_component("abc-XYZ_0.9~"), "abc-XYZ_0.9~");
}

#[test]
fn encode_component_escapes_reserved_characters() {
    assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
    assert_eq!(encode_component("/dashboard"), "%2Fdashboard");
}

#[test]
fn encode_component_escapes_multibyte_utf8() {
    assert_eq!(encode_component("café"), "caf%C3%A9");
}
