use std::io::Cursor;

use super::*;
use crate::assets::store::PreparedSource;
use crate::compile::SlotPlan;
use crate::foundation::core::{Point, Size};
use crate::model::{Layout, Photo, Slot};

fn png(w: u32, h: u32, px: [u8; 4]) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(w, h, image::Rgba(px)))
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

fn solid_plan(color: Color) -> PagePlan {
    PagePlan {
        page_index: Some(0),
        size: Size::new(100.0, 50.0),
        background: BackgroundPaint::Color(color),
        decorations: Vec::new(),
        slots: Vec::new(),
        texts: Vec::new(),
    }
}

#[test]
fn background_fills_the_raster() {
    let plan = solid_plan(Color::rgb(0x33, 0x66, 0x99));
    let mut report = RenderReport::new();
    let px = rasterize_plan(&plan, &PreparedImages::new(), 2.0, &mut report).unwrap();
    assert_eq!((px.width, px.height), (200, 100));
    let at = |x: u32, y: u32| {
        let i = ((y * px.width + x) * 4) as usize;
        [px.rgba8[i], px.rgba8[i + 1], px.rgba8[i + 2], px.rgba8[i + 3]]
    };
    assert_eq!(at(100, 50), [0x33, 0x66, 0x99, 255]);
    assert_eq!(at(0, 0), [0x33, 0x66, 0x99, 255]);
    assert!(report.is_clean());
}

#[test]
fn svg_inlines_photos_and_placeholders() {
    let src = "mem://red.png";
    let mut images = PreparedImages::new();
    images.insert(
        src,
        PreparedSource::Ready(PreparedImage::from_bytes(src, png(4, 4, [255, 0, 0, 255])).unwrap()),
    );
    let mut plan = solid_plan(Color::WHITE);
    plan.slots = vec![
        SlotPlan {
            index: 0,
            photo_id: Some("red".to_owned()),
            bounds: Rect::new(0.0, 0.0, 50.0, 50.0),
            rotation: 15.0,
            content: SlotContent::Image {
                photo_id: "red".to_owned(),
                source: src.to_owned(),
                rect: Rect::new(0.0, 0.0, 50.0, 50.0),
                pixels: Some((4, 4)),
            },
            frame: Vec::new(),
        },
        SlotPlan {
            index: 1,
            photo_id: Some("lost".to_owned()),
            bounds: Rect::new(50.0, 0.0, 100.0, 50.0),
            rotation: 0.0,
            content: SlotContent::Placeholder {
                rect: Rect::new(50.0, 0.0, 100.0, 50.0),
            },
            frame: Vec::new(),
        },
    ];
    let mut report = RenderReport::new();
    let svg = plan_to_svg(&plan, &images, &mut report).to_html();
    assert!(report.is_clean());
    assert!(svg.contains("xlink:href=\"data:image/png;base64,"));
    assert!(svg.contains("rotate(15 25 25)"));
    assert!(svg.contains("fill=\"#f0f0f0\""));
}

#[test]
fn unfetched_photo_is_reported_and_drawn_as_placeholder() {
    let mut plan = solid_plan(Color::WHITE);
    plan.slots = vec![SlotPlan {
        index: 2,
        photo_id: Some("gone".to_owned()),
        bounds: Rect::new(0.0, 0.0, 50.0, 50.0),
        rotation: 0.0,
        content: SlotContent::Image {
            photo_id: "gone".to_owned(),
            source: "mem://gone.png".to_owned(),
            rect: Rect::new(0.0, 0.0, 50.0, 50.0),
            pixels: None,
        },
        frame: Vec::new(),
    }];
    let mut report = RenderReport::new();
    let svg = plan_to_svg(&plan, &PreparedImages::new(), &mut report).to_html();
    assert_eq!(report.count(DiagnosticKind::FetchFailure), 1);
    assert_eq!(report.diagnostics[0].slot_index, Some(2));
    assert!(svg.contains("fill=\"#f0f0f0\""));
}

#[test]
fn text_is_wrapped_into_tspans() {
    let mut plan = solid_plan(Color::WHITE);
    plan.texts = vec![TextPlan {
        id: "t".to_owned(),
        content: "one\ntwo".to_owned(),
        origin: Point::new(10.0, 10.0),
        width: 80.0,
        font_size_px: 16.0,
        color: Color::BLACK,
        font_family: "Georgia".to_owned(),
        style_id: None,
        bold: true,
        italic: false,
        align: TextAlign::Center,
        rotation: 0.0,
    }];
    let svg = plan_to_svg(&plan, &PreparedImages::new(), &mut RenderReport::new());
    let found = svg.find_all(&|n: &DomNode| n.tag() == Some("text"));
    let text = found[0];
    assert_eq!(text.get_attr("font-family"), Some("Georgia, serif"));
    assert_eq!(text.get_attr("text-anchor"), Some("middle"));
    assert_eq!(text.get_attr("font-weight"), Some("bold"));
    let spans = text.children();
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0].get_attr("x"), Some("50"));
    assert_eq!(spans[1].text_content(), "two");
}

#[test]
fn render_png_produces_decodable_image() {
    let mut catalog = AssetCatalog::builtin();
    catalog.insert_photo(Photo::new("p", "mem://p.png"));
    let mut images = PreparedImages::new();
    images.insert(
        "mem://p.png",
        PreparedSource::Ready(
            PreparedImage::from_bytes("mem://p.png", png(8, 8, [0, 255, 0, 255])).unwrap(),
        ),
    );
    let mut page = Page::new("p1");
    page.photos = vec!["p".to_owned()];
    page.layout = Some(Layout {
        name: "one".to_owned(),
        template_index: None,
        slots: vec![Slot::new(0.0, 0.0, 100.0, 100.0).with_photo("p")],
    });

    let (bytes, report) =
        render_png(&page, 0, &catalog, &images, &RenderOptions::default(), 36.0).unwrap();
    assert!(report.is_clean());
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (284, 284));
    assert_eq!(decoded.get_pixel(142, 142).0, [0, 255, 0, 255]);
}

#[test]
fn invalid_dpi_is_rejected() {
    let catalog = AssetCatalog::builtin();
    let images = PreparedImages::new();
    let options = RenderOptions::default();
    assert!(render_png(&Page::new("x"), 0, &catalog, &images, &options, 0.0).is_err());
}

#[test]
fn demultiply_restores_straight_alpha() {
    let mut px = vec![64, 32, 0, 128, 10, 10, 10, 0, 1, 2, 3, 255];
    demultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[..4], &[128, 64, 0, 128]);
    assert_eq!(&px[4..8], &[10, 10, 10, 0]);
    assert_eq!(&px[8..], &[1, 2, 3, 255]);
}
