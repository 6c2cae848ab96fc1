use super::*;

#[test]
fn odd_pages_bind_on_the_left() {
    assert_eq!(PageSide::for_page_number(1), PageSide::Right);
    assert_eq!(PageSide::for_page_number(2), PageSide::Left);

    let right = binding_margins(PageSide::Right);
    assert_eq!((right.left, right.right), (54.0, 36.0));
    let left = binding_margins(PageSide::Left);
    assert_eq!((left.left, left.right), (36.0, 54.0));
}

#[test]
fn bottom_keeps_room_for_the_folio() {
    let m = binding_margins(PageSide::Right);
    assert_eq!(m.top, 36.0);
    assert_eq!(m.bottom, 56.0);
}
