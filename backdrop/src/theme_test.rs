use super::*;

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn parse_known_tags() {
    assert_eq!(Theme::parse("light"), Theme::Light);
    assert_eq!(Theme::parse("dark"), Theme::Dark);
}

#[test]
fn parse_unknown_tag_falls_back_to_light() {
    assert_eq!(Theme::parse(""), Theme::Light);
    assert_eq!(Theme::parse("midnight"), Theme::Light);
    assert_eq!(Theme::parse("DARK"), Theme::Light);
}

#[test]
fn as_str_round_trips() {
    assert_eq!(Theme::parse(Theme::Light.as_str()), Theme::Light);
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Theme::Dark);
}

#[test]
fn toggled_flips_both_ways() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn is_dark_only_for_dark() {
    assert!(Theme::Dark.is_dark());
    assert!(!Theme::Light.is_dark());
}

#[test]
fn particle_counts_per_theme() {
    assert_eq!(Theme::Light.particle_count(), 60);
    assert_eq!(Theme::Dark.particle_count(), 80);
}

#[test]
fn dark_field_moves_faster() {
    assert_eq!(Theme::Light.speed_range(), 0.3);
    assert_eq!(Theme::Dark.speed_range(), 0.5);
}
