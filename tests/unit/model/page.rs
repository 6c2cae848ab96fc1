use super::*;

#[test]
fn slot_json_uses_camel_case_and_defaults() {
    let s: Slot = serde_json::from_str(
        r##"{"photoId":"a","x":10,"y":10,"width":80,"height":60,"frameColor":"#fff"}"##,
    )
    .unwrap();
    assert_eq!(s.photo_id.as_deref(), Some("a"));
    assert_eq!(s.alignment, HAlign::Center);
    assert_eq!(s.rotation, 0.0);
    assert_eq!(s.frame_color.as_deref(), Some("#fff"));
    assert!(s.custom.is_none());
}

#[test]
fn text_element_accepts_text_align_alias() {
    let t: TextElement =
        serde_json::from_str(r#"{"id":"t","content":"hi","x":5,"y":6,"textAlign":"center"}"#)
            .unwrap();
    assert_eq!(t.align, Some(TextAlign::Center));
}

#[test]
fn layout_validation_rejects_non_finite_and_negative() {
    let mut layout = Layout {
        name: "x".to_owned(),
        template_index: None,
        slots: vec![Slot::new(0.0, 0.0, 50.0, 50.0)],
    };
    assert!(layout.validate().is_ok());

    layout.slots[0].width = f64::NAN;
    assert!(matches!(layout.validate(), Err(FolioError::Layout(_))));

    layout.slots[0].width = -1.0;
    assert!(layout.validate().is_err());

    // Out-of-range but finite values are clamped later, not rejected.
    layout.slots[0].width = 140.0;
    assert!(layout.validate().is_ok());
}

#[test]
fn page_slot_lookup() {
    let mut page = Page::new("p1");
    assert!(page.slots().is_empty());
    page.layout = Some(Layout {
        name: "2-side-by-side".to_owned(),
        template_index: Some(1),
        slots: vec![
            Slot::new(5.0, 20.0, 42.5, 60.0).with_photo("a"),
            Slot::new(52.5, 20.0, 42.5, 60.0).with_photo("b"),
        ],
    });
    assert_eq!(page.slot_index_of("b"), Some(1));
    assert_eq!(page.slot_index_of("zz"), None);
}
