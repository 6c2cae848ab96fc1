use super::*;

#[test]
fn defaults_match_the_editor_page() {
    let opts = RenderOptions::from_json("{}").unwrap();
    assert_eq!(opts, RenderOptions::default());
    assert_eq!(opts.trim_size(), Size::new(567.0, 567.0));
    assert_eq!(opts.fetch_timeout(), Duration::from_secs(15));
    assert_eq!(opts.media_for(opts.trim_size()).bleed, 0.0);
}

#[test]
fn named_print_size_and_bleed() {
    let opts =
        RenderOptions::from_json(r#"{"printSize":"square-8x8","bleed":true}"#).unwrap();
    assert_eq!(opts.trim_size(), Size::new(576.0, 576.0));
    let media = opts.media_for(opts.trim_size());
    assert_eq!(media.bleed, BLEED_PT);
    assert_eq!(media.media_size(), Size::new(594.0, 594.0));
}

#[test]
fn unknown_print_size_falls_back() {
    let opts = RenderOptions {
        print_size: Some("poster".to_owned()),
        ..RenderOptions::default()
    };
    assert_eq!(opts.trim_size(), Size::new(720.0, 720.0));
}

#[test]
fn binding_margins_alternate_by_page() {
    let opts = RenderOptions {
        binding_margins: true,
        ..RenderOptions::default()
    };
    let first = opts.geometry_for_page(0).margins;
    let second = opts.geometry_for_page(1).margins;
    assert_eq!(first, binding_margins(PageSide::Right));
    assert_eq!(second, binding_margins(PageSide::Left));
    assert!(first.left > first.right);
    assert!(second.right > second.left);
}

#[test]
fn plain_margins_apply_when_binding_is_off() {
    let opts = RenderOptions {
        margins: Edges::uniform(12.0),
        ..RenderOptions::default()
    };
    assert_eq!(opts.geometry_for_page(5).margins, Edges::uniform(12.0));
}

#[test]
fn invalid_options_are_rejected() {
    let bad = [
        r#"{"margins":{"top":-1}}"#,
        r#"{"threads":0}"#,
        r#"{"fetchTimeoutSecs":0}"#,
        r#"{"pageSize":{"width":0,"height":10}}"#,
        r#"{"previewWidthPx":-3}"#,
    ];
    for json in bad {
        assert!(RenderOptions::from_json(json).is_err(), "{json}");
    }
}
