use super::*;

#[test]
fn parse_round_trips_as_str() {
    assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
}

#[test]
fn parse_rejects_unknown_values() {
    assert_eq!(Theme::parse("solarized"), None);
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("Dark"), None);
}

#[test]
fn toggled_flips_both_ways() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn body_class_matches_theme() {
    assert_eq!(Theme::Light.body_class(), "light-theme");
    assert_eq!(Theme::Dark.body_class(), "dark-theme");
}

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
    assert!(!Theme::default().is_dark());
}
