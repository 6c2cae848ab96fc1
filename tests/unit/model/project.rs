use super::*;
use crate::model::CoverLayout;

const DOC: &str = r##"{
  "pages": [
    {
      "id": "p1",
      "background": "#fdf6e3",
      "photos": ["a"],
      "layout": {"name": "1-landscape", "slots": [{"photoId": "a", "x": 10, "y": 10, "width": 80, "height": 60}]},
      "elements": [{"id": "t1", "content": "Summer", "x": 10, "y": 80, "fontSize": 24}]
    }
  ],
  "cover": {"title": "Trip", "layout": "photo-bottom", "frontPhotoId": "a"},
  "assets": {"photos": [{"id": "a", "url": "a.jpg", "aspectRatio": 1.5}]},
  "printSize": "square-8x8"
}"##;

#[test]
fn parses_project_document() {
    let p = Project::from_json(DOC).unwrap();
    assert_eq!(p.pages.len(), 1);
    assert_eq!(p.cover.layout, CoverLayout::PhotoBottom);
    assert_eq!(p.photo("a").and_then(|ph| ph.aspect_ratio), Some(1.5));
    assert_eq!(p.print_size.as_deref(), Some("square-8x8"));
    assert_eq!(p.pages[0].elements[0].font_size, Some(24.0));
}

#[test]
fn duplicate_page_ids_are_rejected() {
    let mut p = Project::from_json(DOC).unwrap();
    p.pages.push(p.pages[0].clone());
    assert!(matches!(p.validate(), Err(FolioError::Validation(_))));
}

#[test]
fn corrupt_layout_is_a_layout_error() {
    let doc = DOC.replace("\"width\": 80", "\"width\": -80");
    assert!(matches!(Project::from_json(&doc), Err(FolioError::Layout(_))));
}

#[test]
fn from_path_reports_missing_file() {
    let err = Project::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("read project file"));
}
