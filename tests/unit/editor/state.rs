use std::sync::{Arc, Mutex};

use super::*;
use crate::model::Photo;

fn editor_with_photos(ids: &[&str]) -> (EditorState, String) {
    let mut project = Project::default();
    for id in ids {
        project
            .assets
            .photos
            .push(Photo::new(*id, format!("https://img/{id}.jpg")).with_aspect_ratio(1.5));
    }
    let mut editor = EditorState::new(project, LayoutEngine::default());
    let page = editor.add_page().unwrap();
    (editor, page)
}

fn layout_name(editor: &EditorState, page: &str) -> Option<String> {
    editor.page(page).unwrap().layout.as_ref().map(|l| l.name.clone())
}

#[test]
fn adding_photos_regenerates_the_layout() {
    let (mut ed, page) = editor_with_photos(&["a", "b"]);
    assert_eq!(ed.active_page_id(), Some(page.as_str()));
    assert!(ed.add_photo_to_page(&page, "a").unwrap());
    assert_eq!(layout_name(&ed, &page).as_deref(), Some("1-landscape"));
    assert!(ed.add_photo_to_page(&page, "b").unwrap());
    let p = ed.page(&page).unwrap();
    assert_eq!(p.slots().len(), 2);
    assert_eq!(p.photos, vec!["a", "b"]);
}

#[test]
fn duplicate_photo_is_a_recorded_noop() {
    let (mut ed, page) = editor_with_photos(&["a"]);
    ed.add_photo_to_page(&page, "a").unwrap();
    let before = ed.history().len();
    assert!(!ed.add_photo_to_page(&page, "a").unwrap());
    assert_eq!(ed.history().len(), before);
    assert_eq!(ed.page(&page).unwrap().photos.len(), 1);
}

#[test]
fn unknown_photo_or_page_is_an_error() {
    let (mut ed, page) = editor_with_photos(&["a"]);
    assert!(ed.add_photo_to_page(&page, "zzz").is_err());
    assert!(ed.add_photo_to_page("nope", "a").is_err());
    assert!(ed.set_active_page("nope").is_err());
}

#[test]
fn removing_the_last_photo_clears_the_layout() {
    let (mut ed, page) = editor_with_photos(&["a"]);
    ed.add_photo_to_page(&page, "a").unwrap();
    assert!(ed.remove_photo_from_page(&page, "a").unwrap());
    assert!(layout_name(&ed, &page).is_none());
    assert!(!ed.remove_photo_from_page(&page, "a").unwrap());
}

#[test]
fn undo_and_redo_restore_snapshots() {
    let (mut ed, page) = editor_with_photos(&["a", "b"]);
    ed.add_photo_to_page(&page, "a").unwrap();
    ed.add_photo_to_page(&page, "b").unwrap();

    assert!(ed.undo());
    assert_eq!(ed.page(&page).unwrap().photos, vec!["a"]);
    assert!(ed.undo());
    assert!(ed.page(&page).unwrap().photos.is_empty());
    assert!(ed.redo());
    assert_eq!(ed.page(&page).unwrap().photos, vec!["a"]);

    ed.set_background(&page, Some("#ffffff".to_owned())).unwrap();
    assert!(!ed.redo(), "new command truncates redo");
}

#[test]
fn undo_of_add_page_moves_the_active_page() {
    let (mut ed, first) = editor_with_photos(&[]);
    let second = ed.add_page().unwrap();
    assert_eq!(ed.active_page_id(), Some(second.as_str()));
    assert!(ed.undo());
    assert_eq!(ed.project().pages.len(), 1);
    assert_eq!(ed.active_page_id(), Some(first.as_str()));
}

#[test]
fn failed_command_records_nothing() {
    let (mut ed, page) = editor_with_photos(&[]);
    let before = ed.history().len();
    assert!(ed.delete_text(&page, "missing").is_err());
    assert!(ed.move_text(&page, "missing", 1.0, 1.0).is_err());
    assert_eq!(ed.history().len(), before);
}

#[test]
fn replace_regenerates_layout_and_keeps_uniqueness() {
    let (mut ed, page) = editor_with_photos(&["a", "b", "c"]);
    ed.add_photo_to_page(&page, "a").unwrap();
    ed.add_photo_to_page(&page, "b").unwrap();
    assert_eq!(layout_name(&ed, &page).as_deref(), Some("2-landscape-stack"));
    assert_eq!(ed.remix_layout(&page).unwrap().as_deref(), Some("2-side-by-side"));
    ed.apply_slot_frame(&page, 0, Some("image-thin-line".to_owned()), None)
        .unwrap();

    assert!(!ed.replace_photo_in_slot(&page, 0, "b").unwrap());
    assert!(ed.replace_photo_in_slot(&page, 0, "c").unwrap());
    let p = ed.page(&page).unwrap();
    assert_eq!(p.photos, vec!["c", "b"]);
    // The photo set changed, so the layout is derived again from the first template.
    assert_eq!(layout_name(&ed, &page).as_deref(), Some("2-landscape-stack"));
    let slot = &p.slots()[0];
    assert_eq!(slot.photo_id.as_deref(), Some("c"));
    assert_eq!(slot.frame_id.as_deref(), Some("image-thin-line"));
    assert!(ed.replace_photo_in_slot(&page, 9, "a").is_err());
}

#[test]
fn swap_exchanges_slots_and_order() {
    let (mut ed, page) = editor_with_photos(&["a", "b"]);
    ed.add_photo_to_page(&page, "a").unwrap();
    ed.add_photo_to_page(&page, "b").unwrap();
    ed.swap_photos(&page, 0, 1).unwrap();
    let p = ed.page(&page).unwrap();
    assert_eq!(p.slots()[0].photo_id.as_deref(), Some("b"));
    assert_eq!(p.slots()[1].photo_id.as_deref(), Some("a"));
    assert_eq!(p.photos, vec!["b", "a"]);
}

#[test]
fn remix_cycles_templates() {
    let (mut ed, page) = editor_with_photos(&["a", "b", "c", "d"]);
    for id in ["a", "b", "c", "d"] {
        ed.add_photo_to_page(&page, id).unwrap();
    }
    assert_eq!(layout_name(&ed, &page).as_deref(), Some("4-grid"));
    assert_eq!(ed.remix_layout(&page).unwrap().as_deref(), Some("4-hero-center"));
    assert_eq!(ed.remix_layout(&page).unwrap().as_deref(), Some("4-grid"));
}

#[test]
fn slot_frames_follow_their_photo_through_relayout() {
    let (mut ed, page) = editor_with_photos(&["a", "b"]);
    ed.add_photo_to_page(&page, "a").unwrap();
    ed.apply_slot_frame(&page, 0, Some("image-dashed".to_owned()), None)
        .unwrap();
    ed.add_photo_to_page(&page, "b").unwrap();
    let p = ed.page(&page).unwrap();
    let slot = &p.slots()[p.slot_index_of("a").unwrap()];
    assert_eq!(slot.frame_id.as_deref(), Some("image-dashed"));
}

#[test]
fn theme_propagates_to_pages_and_cover() {
    let (mut ed, page) = editor_with_photos(&[]);
    let second = ed.add_page().unwrap();
    ed.set_theme("linen").unwrap();
    assert_eq!(ed.project().theme.as_deref(), Some("linen"));
    for id in [&page, &second] {
        assert_eq!(ed.page(id).unwrap().background.as_deref(), Some("linen"));
    }
    assert_eq!(ed.project().cover.theme.as_deref(), Some("linen"));
    let third = ed.add_page().unwrap();
    assert_eq!(ed.page(&third).unwrap().background.as_deref(), Some("linen"));
}

#[test]
fn text_commands() {
    let (mut ed, page) = editor_with_photos(&[]);
    let id = ed
        .add_text(
            &page,
            TextElement {
                content: "Hi".to_owned(),
                ..TextElement::default()
            },
        )
        .unwrap();
    assert!(!id.is_empty());
    ed.move_text(&page, &id, 40.0, 60.0).unwrap();
    ed.update_text(
        &page,
        &id,
        TextUpdate {
            content: Some("Hello".to_owned()),
            style_id: Some(Some("style-elegant-gold".to_owned())),
            ..TextUpdate::default()
        },
    )
    .unwrap();
    let el = &ed.page(&page).unwrap().elements[0];
    assert_eq!((el.x, el.y), (40.0, 60.0));
    assert_eq!(el.content, "Hello");
    assert_eq!(el.style_id.as_deref(), Some("style-elegant-gold"));

    ed.set_selection(Selection::Text(id.clone()));
    ed.delete_text(&page, &id).unwrap();
    assert!(ed.page(&page).unwrap().elements.is_empty());
    assert_eq!(*ed.selection(), Selection::None);
}

#[test]
fn cover_commands() {
    let (mut ed, _) = editor_with_photos(&[]);
    ed.update_cover(|c| {
        c.title = "Summer".to_owned();
        c.front_photo_id = Some("a".to_owned());
    })
    .unwrap();
    ed.swap_cover_photos().unwrap();
    let cover = &ed.project().cover;
    assert_eq!(cover.title, "Summer");
    assert_eq!(cover.front_photo_id, None);
    assert_eq!(cover.back_photo_id.as_deref(), Some("a"));
    assert!(ed.undo());
    assert_eq!(ed.project().cover.front_photo_id.as_deref(), Some("a"));
}

#[test]
fn observers_see_changes_in_order() {
    let (mut ed, page) = editor_with_photos(&["a"]);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let sub = ed.subscribe(move |c| sink.lock().unwrap().push(c.clone()));

    ed.add_photo_to_page(&page, "a").unwrap();
    ed.set_selection(Selection::Slot(0));
    ed.set_selection(Selection::Slot(0));
    ed.undo();
    assert!(ed.unsubscribe(sub));
    ed.set_selection(Selection::Slot(0));

    let seen = seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![
            Change::Page(page.clone()),
            Change::Selection,
            Change::Restored,
        ]
    );
}

#[test]
fn selection_is_not_undoable() {
    let (mut ed, _) = editor_with_photos(&[]);
    let before = ed.history().len();
    ed.set_selection(Selection::Slot(2));
    assert_eq!(ed.history().len(), before);
}
