use super::*;
use crate::model::Project;

#[test]
fn builtin_has_frames_backgrounds_and_styles() {
    let cat = AssetCatalog::builtin();
    assert_eq!(
        cat.frame("frame-modern-bold").map(|f| f.kind),
        Some(FrameKind::Page)
    );
    assert_eq!(
        cat.frame("image-polaroid").map(|f| f.kind),
        Some(FrameKind::Image)
    );
    assert!(cat.background("botanical").is_some());
    assert!(cat.text_style("style-bold-serif").is_some());
    assert_eq!(cat.photos().count(), 0);
}

#[test]
fn project_assets_extend_and_override_builtins() {
    let project = Project::from_json(
        r##"{
            "assets": {
                "photos": [{"id": "a", "url": "a.jpg"}],
                "backgrounds": [{"id": "botanical", "color": "#000000"}],
                "textStyles": [{"id": "mine", "fontFamily": "Courier"}]
            }
        }"##,
    )
    .unwrap();
    let cat = AssetCatalog::for_project(&project);
    assert_eq!(cat.photo("a").map(|p| p.url.as_str()), Some("a.jpg"));
    assert_eq!(
        cat.background("botanical").and_then(|b| b.color.as_deref()),
        Some("#000000")
    );
    assert!(cat.text_style("mine").is_some());
    assert!(cat.frame("frame-art-deco").is_some());
}
