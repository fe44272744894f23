use super::*;

#[test]
fn year_of_epoch_is_1970() {
    assert_eq!(year_of(0), 1970);
}

#[test]
fn year_of_known_timestamps() {
    // 2024-02-29T12:00:00Z
    assert_eq!(year_of(1_709_208_000_000), 2024);
    // 2025-12-31T23:59:59Z
    assert_eq!(year_of(1_767_225_599_000), 2025);
    // 2026-01-01T00:00:00Z
    assert_eq!(year_of(1_767_225_600_000), 2026);
}

#[test]
fn now_ms_is_after_2024() {
    assert!(now_ms() > 1_704_067_200_000);
    assert!(current_year() >= 2024);
}
