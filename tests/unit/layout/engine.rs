use super::*;

fn ids(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("p{i}")).collect()
}

#[test]
fn empty_collection_has_no_layout() {
    let engine = LayoutEngine::default();
    let none: [&str; 0] = [];
    assert!(engine.generate_layout(&none).is_none());
    assert!(engine.next_layout(&none, Some("1-landscape")).is_none());
    assert!(engine.remix(&none, None).is_none());
}

#[test]
fn single_photo_gets_first_template() {
    let engine = LayoutEngine::default();
    let layout = engine.generate_layout(&["a"]).unwrap();
    assert_eq!(layout.name, "1-landscape");
    assert_eq!(layout.template_index, Some(0));
    assert_eq!(layout.slots, vec![Slot::new(10.0, 10.0, 80.0, 60.0).with_photo("a")]);
}

#[test]
fn unknown_current_name_restarts_cycle() {
    let engine = LayoutEngine::default();
    let l = engine.next_layout(&ids(2), Some("nope")).unwrap();
    assert_eq!(l.name, "2-landscape-stack");
    let l = engine.next_layout(&ids(2), Some("2-diagonal")).unwrap();
    assert_eq!(l.name, "2-landscape-stack");
}

#[test]
fn remix_prefers_stored_index_and_falls_back_to_name() {
    let engine = LayoutEngine::default();
    let photos = ids(3);
    let first = engine.generate_layout(&photos).unwrap();
    let second = engine.remix(&photos, Some(&first)).unwrap();
    assert_eq!(second.name, "3-grid-uniform");
    assert_eq!(second.template_index, Some(1));

    let mut stale = second.clone();
    stale.template_index = Some(3);
    assert_eq!(engine.remix(&photos, Some(&stale)).unwrap().name, "3-stack-left");
}

#[test]
fn template_slots_wrap_when_photos_exceed_slots() {
    let catalog = TemplateCatalog::new(vec![
        Template::new(
            "3-one-slot",
            vec![crate::catalog::TemplateSlot {
                x: 0.0,
                y: 0.0,
                w: 10.0,
                h: 10.0,
            }],
        )
        .unwrap(),
    ])
    .unwrap();
    let engine = LayoutEngine::new(catalog);
    let l = engine.generate_layout(&ids(3)).unwrap();
    assert_eq!(l.slots.len(), 3);
    assert!(l.slots.iter().all(|s| s.width == 10.0));
    assert_eq!(l.slots[2].photo_id.as_deref(), Some("p2"));
}

#[test]
fn grid_shapes() {
    assert_eq!(grid_shape(0), (1, 1));
    assert_eq!(grid_shape(1), (1, 1));
    assert_eq!(grid_shape(4), (2, 2));
    assert_eq!(grid_shape(5), (3, 2));
    assert_eq!(grid_shape(6), (3, 2));
    assert_eq!(grid_shape(7), (3, 3));
    assert_eq!(grid_shape(10), (4, 3));
}

#[test]
fn incomplete_last_row_is_centered() {
    let engine = LayoutEngine::default();
    let l = engine.dynamic_grid(&ids(7));
    assert_eq!(l.name, "dynamic-7");
    let cell_w = (96.0 - 4.0) / 3.0;
    let last = &l.slots[6];
    let expected_x = 2.0 + (2.0 * (cell_w + 2.0)) / 2.0;
    assert!((last.x - expected_x).abs() < 1e-9);
    // Centered: equal space on both sides of the single cell.
    let right_space = 100.0 - (last.x + last.width);
    assert!((right_space - last.x).abs() < 1e-9);
}

#[test]
fn zero_gap_grid_tiles_the_page() {
    let engine = LayoutEngine::default().with_gap(0.0);
    let l = engine.dynamic_grid(&ids(9));
    let area: f64 = l.slots.iter().map(|s| s.width * s.height).sum();
    assert!((area - 10_000.0).abs() < 1e-6);
}
