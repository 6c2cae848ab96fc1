use super::*;

#[test]
fn fnv1a_matches_reference_vector() {
    // FNV-1a 64 of "a".
    assert_eq!(hash_str("a"), 0xaf63_dc4c_8601_ec8c);
    assert_eq!(hash_str(""), Fnv1a64::OFFSET_BASIS);
}

#[test]
fn hash_is_stable_per_key() {
    assert_eq!(hash_str("photos/a.jpg"), hash_str("photos/a.jpg"));
    assert_ne!(hash_str("photos/a.jpg"), hash_str("photos/b.jpg"));
}

#[test]
fn rect_within_allows_slack() {
    let outer = kurbo::Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(rect_within(kurbo::Rect::new(0.0, 0.0, 10.0 + 1e-9, 10.0), outer, EPS));
    assert!(!rect_within(kurbo::Rect::new(-1.0, 0.0, 5.0, 5.0), outer, EPS));
}

#[test]
fn positive_finite() {
    assert!(is_positive_finite(1.0));
    assert!(!is_positive_finite(0.0));
    assert!(!is_positive_finite(f64::NAN));
    assert!(!is_positive_finite(f64::INFINITY));
}

#[test]
fn cover_rect_crops_the_long_side_evenly() {
    let page = kurbo::Rect::new(0.0, 0.0, 100.0, 100.0);
    assert_eq!(cover_rect(page, 2.0), kurbo::Rect::new(-50.0, 0.0, 150.0, 100.0));
    assert_eq!(cover_rect(page, 0.5), kurbo::Rect::new(0.0, -50.0, 100.0, 150.0));
    assert_eq!(cover_rect(page, 1.0), page);
    assert_eq!(cover_rect(page, 0.0), page);
}
