use super::*;

fn square_page(side: f64, margin: f64) -> PageGeometry {
    PageGeometry::new(Size::new(side, side), Edges::uniform(margin))
}

#[test]
fn wide_image_in_square_slot_is_letterboxed_and_centered() {
    let page = square_page(600.0, 0.0);
    let slot = page.percent_rect(0.0, 0.0, 50.0, 50.0);
    let r = fit(slot, 2.0, &page, &FitOptions::default()).rect().unwrap();
    assert_eq!(r, Rect::new(0.0, 75.0, 300.0, 225.0));
}

#[test]
fn tall_image_binds_on_height() {
    let page = square_page(600.0, 0.0);
    let slot = Rect::new(0.0, 0.0, 300.0, 300.0);
    let r = fit(slot, 0.5, &page, &FitOptions::default()).rect().unwrap();
    assert_eq!((r.width(), r.height()), (150.0, 300.0));
    assert_eq!(r.x0, 75.0);
}

#[test]
fn alignment_moves_horizontally_only() {
    let page = square_page(600.0, 0.0);
    let slot = Rect::new(0.0, 0.0, 300.0, 300.0);
    let left = FitOptions {
        alignment: HAlign::Left,
        ..FitOptions::default()
    };
    let right = FitOptions {
        alignment: HAlign::Right,
        ..FitOptions::default()
    };
    let l = fit(slot, 0.5, &page, &left).rect().unwrap();
    let r = fit(slot, 0.5, &page, &right).rect().unwrap();
    assert_eq!(l.x0, 0.0);
    assert_eq!(r.x1, 300.0);
    assert_eq!(l.y0, r.y0);
}

#[test]
fn slot_is_clipped_to_margins() {
    let page = square_page(600.0, 36.0);
    let slot = page.percent_rect(0.0, 0.0, 100.0, 100.0);
    let r = fit(slot, 1.0, &page, &FitOptions::default()).rect().unwrap();
    assert_eq!(r, Rect::new(36.0, 36.0, 564.0, 564.0));
}

#[test]
fn slot_entirely_in_margin_is_skipped() {
    let page = square_page(600.0, 36.0);
    let slot = Rect::new(0.0, 0.0, 30.0, 30.0);
    assert_eq!(
        fit(slot, 1.0, &page, &FitOptions::default()),
        Fit::Skip(SkipReason::EmptySlot)
    );
}

#[test]
fn invalid_aspect_ratios_are_skipped() {
    let page = square_page(600.0, 0.0);
    let slot = Rect::new(0.0, 0.0, 100.0, 100.0);
    for r in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert_eq!(
            fit(slot, r, &page, &FitOptions::default()),
            Fit::Skip(SkipReason::InvalidAspectRatio)
        );
    }
}

#[test]
fn custom_size_keeps_ratio_when_it_fits() {
    let page = square_page(600.0, 0.0);
    let slot = Rect::new(0.0, 0.0, 400.0, 400.0);
    let opts = FitOptions {
        custom: CustomRect {
            width: Some(200.0),
            height: Some(50.0),
            ..CustomRect::default()
        },
        ..FitOptions::default()
    };
    let r = fit(slot, 2.0, &page, &opts).rect().unwrap();
    assert_eq!((r.width(), r.height()), (200.0, 100.0));
}

#[test]
fn custom_size_recomputes_from_height_when_width_overflows() {
    let page = square_page(600.0, 0.0);
    let slot = Rect::new(0.0, 0.0, 400.0, 100.0);
    let opts = FitOptions {
        custom: CustomRect {
            width: Some(400.0),
            height: Some(100.0),
            ..CustomRect::default()
        },
        ..FitOptions::default()
    };
    // 400 / 1.0 would need 400 of height; the slot only has 100.
    let r = fit(slot, 1.0, &page, &opts).rect().unwrap();
    assert_eq!((r.width(), r.height()), (100.0, 100.0));
}

#[test]
fn custom_size_within_tolerance_is_kept_verbatim() {
    let page = square_page(600.0, 0.0);
    let slot = Rect::new(0.0, 0.0, 400.0, 400.0);
    let opts = FitOptions {
        custom: CustomRect {
            width: Some(201.0),
            height: Some(100.0),
            ..CustomRect::default()
        },
        ..FitOptions::default()
    };
    let r = fit(slot, 2.0, &page, &opts).rect().unwrap();
    assert_eq!((r.width(), r.height()), (201.0, 100.0));
}

#[test]
fn custom_offset_is_clamped_to_hard_bounds() {
    let page = square_page(600.0, 20.0);
    let slot = Rect::new(0.0, 0.0, 600.0, 600.0);
    let opts = FitOptions {
        custom: CustomRect {
            x: Some(550.0),
            y: Some(-40.0),
            width: Some(100.0),
            height: Some(100.0),
        },
        ..FitOptions::default()
    };
    let r = fit(slot, 1.0, &page, &opts).rect().unwrap();
    assert_eq!(r, Rect::new(480.0, 20.0, 580.0, 120.0));
}

#[test]
fn percentage_overrides_convert_to_page_units() {
    let page = square_page(500.0, 0.0);
    let mut slot = Slot::new(0.0, 0.0, 50.0, 50.0);
    slot.custom = Some(crate::model::CustomPlacement {
        x: Some(10.0),
        y: None,
        width: Some(20.0),
        height: None,
    });
    let opts = FitOptions::for_slot(&slot, &page);
    assert_eq!(opts.custom.x, Some(50.0));
    assert_eq!(opts.custom.width, Some(100.0));
    assert!(opts.custom.height.is_none());
}
