use std::sync::Arc;

use super::*;
use crate::assets::store::{PreparedImage, PreparedSource};
use crate::foundation::core::Size;
use crate::model::{Layout, Photo, Slot, TextElement};

fn fixture() -> (Page, AssetCatalog, PreparedImages, RenderOptions) {
    let mut catalog = AssetCatalog::builtin();
    catalog.insert_photo(Photo::new("sea", "https://img/sea.png"));

    let mut images = PreparedImages::new();
    images.insert(
        "https://img/sea.png",
        PreparedSource::Ready(PreparedImage {
            id: 7,
            format: image::ImageFormat::Png,
            width: 300,
            height: 300,
            bytes: Arc::new(Vec::new()),
        }),
    );

    let mut page = Page::new("page-a");
    page.photos = vec!["sea".to_owned()];
    page.layout = Some(Layout {
        name: "two".to_owned(),
        template_index: None,
        slots: vec![
            Slot::new(0.0, 0.0, 50.0, 50.0).with_photo("sea"),
            Slot::new(50.0, 50.0, 50.0, 50.0),
        ],
    });
    page.elements.push(TextElement {
        id: "caption".to_owned(),
        content: "a < b".to_owned(),
        x: 10.0,
        y: 80.0,
        font_size: Some(24.0),
        ..TextElement::default()
    });

    let options = RenderOptions {
        page_size: Size::new(600.0, 600.0),
        ..RenderOptions::default()
    };
    (page, catalog, images, options)
}

fn by_class<'a>(root: &'a DomNode, class: &str) -> Vec<&'a DomNode> {
    root.find_all(&|n: &DomNode| n.has_class(class))
}

#[test]
fn page_is_scaled_to_css_pixels() {
    let (page, catalog, images, options) = fixture();
    let (root, report) = render(&page, 2, &catalog, &images, &options, &Selection::None).unwrap();
    assert!(report.is_clean());
    assert!(root.has_class("folio-page"));
    assert_eq!(root.get_attr("data-page-index"), Some("2"));
    assert_eq!(root.get_attr("data-page-id"), Some("page-a"));
    assert_eq!(root.style_px("width"), Some(800.0));

    let slots = by_class(&root, "photo-slot");
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[1].style_px("left"), Some(400.0));
    assert_eq!(slots[1].style_px("width"), Some(400.0));
    assert_eq!(slots[0].get_attr("data-photo-id"), Some("sea"));
}

#[test]
fn photo_and_empty_slots_have_their_content() {
    let (page, catalog, images, options) = fixture();
    let (root, _) = render(&page, 0, &catalog, &images, &options, &Selection::None).unwrap();
    let photos = by_class(&root, "slot-photo");
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0].tag(), Some("img"));
    assert_eq!(photos[0].get_attr("src"), Some("https://img/sea.png"));
    assert_eq!(photos[0].style_px("width"), Some(400.0));
    assert_eq!(by_class(&root, "slot-empty").len(), 1);
}

#[test]
fn preview_width_sets_the_scale() {
    let (page, catalog, images, mut options) = fixture();
    options.preview_width_px = Some(300.0);
    let (root, _) = render(&page, 0, &catalog, &images, &options, &Selection::None).unwrap();
    assert_eq!(root.style_px("width"), Some(300.0));
    let texts = by_class(&root, "text-element");
    let text = texts[0];
    assert_eq!(text.style_px("left"), Some(30.0));
    assert_eq!(text.style_px("font-size"), Some(9.0));
}

#[test]
fn selection_marks_one_target() {
    let (page, catalog, images, options) = fixture();
    let (root, _) =
        render(&page, 0, &catalog, &images, &options, &Selection::Slot(1)).unwrap();
    let selected = by_class(&root, "selected");
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].get_attr("data-slot-index"), Some("1"));
    assert_eq!(by_class(&root, "selection-overlay").len(), 1);

    let sel = Selection::Text("caption".to_owned());
    let (root, _) = render(&page, 0, &catalog, &images, &options, &sel).unwrap();
    let selected = by_class(&root, "selected");
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].get_attr("data-element-id"), Some("caption"));
}

#[test]
fn text_is_escaped_in_html() {
    let (page, catalog, images, options) = fixture();
    let (root, _) = render(&page, 0, &catalog, &images, &options, &Selection::None).unwrap();
    let html = root.to_html();
    assert!(html.contains("a &lt; b"));
    assert!(html.contains("<img "));
    assert_eq!(by_class(&root, "text-element")[0].text_content(), "a < b");
}

#[test]
fn frames_become_svg_overlays() {
    let (mut page, catalog, images, options) = fixture();
    page.page_frame_id = Some("frame-classic-gold".to_owned());
    page.image_frame_id = Some("image-thin-line".to_owned());
    let (root, report) = render(&page, 0, &catalog, &images, &options, &Selection::None).unwrap();
    assert!(report.is_clean());
    let page_frame = by_class(&root, "page-frame");
    assert_eq!(page_frame.len(), 1);
    assert_eq!(page_frame[0].get_attr("viewBox"), Some("0 0 600 600"));
    let slot_frames = by_class(&root, "slot-frame");
    assert_eq!(slot_frames.len(), 1);
    assert_eq!(slot_frames[0].get_attr("viewBox"), Some("0 0 300 300"));
}

#[test]
fn cover_is_marked() {
    let (_, catalog, images, options) = fixture();
    let cover = Cover::default();
    let (root, _) = render_cover(&cover, &catalog, &images, &options, &Selection::None).unwrap();
    assert!(root.has_class("folio-cover"));
    assert!(root.get_attr("data-page-index").is_none());
}

#[test]
fn selection_serializes_tagged() {
    let json = serde_json::to_string(&Selection::Slot(3)).unwrap();
    assert_eq!(json, r#"{"kind":"slot","target":3}"#);
    let back: Selection = serde_json::from_str(r#"{"kind":"none"}"#).unwrap();
    assert_eq!(back, Selection::None);
}

#[test]
fn texture_urls_are_escaped_for_css() {
    assert_eq!(css_url("https://img/a.png"), "https://img/a.png");
    assert_eq!(css_url("it's\\here"), "it\\'s\\\\here");
    assert_eq!(css_url("a\nb\tc"), "a\\a b\\9 c");
    assert!(!css_url("x')\n;}body{").contains('\n'));
}
