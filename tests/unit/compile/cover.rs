use super::*;
use crate::assets::store::PreparedImages;
use crate::catalog::AssetCatalog;
use crate::foundation::core::{Color, Edges, Size};
use crate::foundation::math::rect_within;
use crate::layout::fit::PageGeometry;
use crate::model::{Cover, CoverLayout, Photo};
use crate::report::RenderReport;

fn compile(cover: &Cover) -> PagePlan {
    let mut catalog = AssetCatalog::builtin();
    catalog.insert_photo(Photo::new("front", "mem://front.jpg").with_aspect_ratio(1.5));
    catalog.insert_photo(Photo::new("back", "mem://back.jpg").with_aspect_ratio(1.0));
    let images = PreparedImages::new();
    let inputs = PlanInputs {
        catalog: &catalog,
        images: &images,
        geometry: PageGeometry::new(Size::new(500.0, 500.0), Edges::default()),
        page_frame_color: None,
    };
    let mut report = RenderReport::new();
    compile_cover(cover, 40.0, &inputs, &mut report).unwrap()
}

fn photo_rect(plan: &PagePlan, index: usize) -> kurbo::Rect {
    let slot = plan.slots.iter().find(|s| s.index == index).unwrap();
    match &slot.content {
        SlotContent::Image { rect, .. } => *rect,
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn spread_is_two_panels_and_a_spine() {
    let plan = compile(&Cover::default());
    assert_eq!(plan.size, Size::new(1040.0, 500.0));
    assert_eq!(plan.page_index, None);
    assert_eq!(plan.decorations.len(), 1);
}

#[test]
fn front_photo_lands_on_front_panel() {
    let cover = Cover {
        title: "Summer".to_owned(),
        front_photo_id: Some("front".to_owned()),
        back_photo_id: Some("back".to_owned()),
        ..Cover::default()
    };
    let plan = compile(&cover);
    let front = photo_rect(&plan, FRONT_SLOT);
    assert!(front.x0 >= 540.0);
    assert!(rect_within(front, kurbo::Rect::new(590.0, 50.0, 990.0, 350.0), 1e-9));
    assert!(((front.width() / front.height()) - 1.5).abs() < 1e-9);

    let back = photo_rect(&plan, BACK_SLOT);
    assert!(back.x1 <= 500.0);
}

#[test]
fn layout_variants_move_title_and_photo() {
    let mut cover = Cover {
        title: "T".to_owned(),
        front_photo_id: Some("front".to_owned()),
        ..Cover::default()
    };
    let standard = compile(&cover);
    cover.layout = CoverLayout::PhotoBottom;
    let bottom = compile(&cover);
    cover.layout = CoverLayout::FullBleed;
    let bleed = compile(&cover);

    let title_y = |p: &PagePlan| p.texts.iter().find(|t| t.id == "cover-title").unwrap().origin.y;
    assert!(title_y(&bottom) < title_y(&standard));
    assert!(photo_rect(&bottom, FRONT_SLOT).y0 > photo_rect(&standard, FRONT_SLOT).y0);
    assert!(photo_rect(&bleed, FRONT_SLOT).width() > photo_rect(&standard, FRONT_SLOT).width());
    let bleed_title = bleed.texts.iter().find(|t| t.id == "cover-title").unwrap();
    assert_eq!(bleed_title.color, Color::WHITE);
}

#[test]
fn spine_text_falls_back_to_title() {
    let cover = Cover {
        title: "Trip".to_owned(),
        ..Cover::default()
    };
    let plan = compile(&cover);
    let spine = plan.texts.iter().find(|t| t.id == "cover-spine").unwrap();
    assert_eq!(spine.content, "Trip");
    assert_eq!(spine.rotation, 90.0);
    assert!(spine.origin.x > 500.0 && spine.origin.x < 540.0);
}

#[test]
fn missing_cover_photos_leave_empty_slots() {
    let plan = compile(&Cover::default());
    assert_eq!(plan.slots.len(), 2);
    assert!(plan.slots.iter().all(|s| s.content == SlotContent::Empty));
}

#[test]
fn unknown_theme_falls_back_to_cover_color() {
    let cover = Cover {
        theme: Some("no-such-theme".to_owned()),
        color: Some("#112233".to_owned()),
        ..Cover::default()
    };
    let plan = compile(&cover);
    assert_eq!(plan.background, BackgroundPaint::Color(Color::rgb(0x11, 0x22, 0x33)));
}
