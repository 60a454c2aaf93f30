use super::*;

#[test]
fn trend_follows_sign() {
    assert_eq!(Trend::of(2.0), Trend::Up);
    assert_eq!(Trend::of(-0.5), Trend::Down);
    assert_eq!(Trend::of(0.0), Trend::Flat);
}

#[test]
fn format_delta_signs_and_rounds() {
    assert_eq!(format_delta(12.5), "+12.5%");
    assert_eq!(format_delta(-3.0), "-3%");
    assert_eq!(format_delta(0.0), "0%");
    assert_eq!(format_delta(4.06), "+4.1%");
}

#[test]
fn format_delta_tiny_change_is_flat() {
    assert_eq!(format_delta(0.04), "0%");
    assert_eq!(format_delta(-0.04), "0%");
}

#[test]
fn trend_classes_are_distinct() {
    assert_ne!(Trend::Up.class(), Trend::Down.class());
    assert_eq!(Trend::Flat.marker(), "■");
}
