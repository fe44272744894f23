use super::*;

#[test]
fn frame_class_adds_tall_modifier() {
    assert_eq!(frame_class(false), "map-frame");
    assert_eq!(frame_class(true), "map-frame map-frame--tall");
}

#[test]
fn pin_count_label_pluralizes() {
    assert_eq!(pin_count_label(0), "No listings yet.");
    assert_eq!(pin_count_label(1), "1 listing on the map.");
    assert_eq!(pin_count_label(3), "3 listings on the map.");
}

#[test]
fn update_notice_reports_marker_failures() {
    let err = MapError::Backend("bad element".to_owned());
    assert_eq!(
        update_notice(&err).as_deref(),
        Some("Some pins could not be drawn: map library call failed: bad element")
    );
}

#[test]
fn update_notice_stays_quiet_for_fit_failures() {
    assert_eq!(update_notice(&MapError::Fit("camera busy".to_owned())), None);
}
