use super::*;

fn snap(label: &'static str, theme: &str) -> Snapshot {
    Snapshot {
        label,
        pages: Vec::new(),
        cover: Cover::default(),
        assets: ProjectAssets::default(),
        theme: Some(theme.to_owned()),
    }
}

#[test]
fn undo_then_redo_walks_back_and_forth() {
    let mut h = History::default();
    assert!(!h.can_undo());
    h.push(snap("a", "one"));
    h.push(snap("b", "two"));
    assert_eq!(h.undo_label(), Some("b"));

    let prev = h.undo(snap("now", "three")).unwrap();
    assert_eq!(prev.theme.as_deref(), Some("two"));
    assert!(h.can_redo());

    let next = h.redo(snap("now", "two")).unwrap();
    assert_eq!(next.theme.as_deref(), Some("three"));
    assert_eq!(next.label, "b");
    assert!(!h.can_redo());
}

#[test]
fn push_truncates_redo_branch() {
    let mut h = History::default();
    h.push(snap("a", "one"));
    h.undo(snap("now", "two")).unwrap();
    assert!(h.can_redo());
    h.push(snap("c", "three"));
    assert!(!h.can_redo());
    assert!(h.redo(snap("now", "x")).is_none());
}

#[test]
fn capacity_drops_oldest() {
    let mut h = History::new(3);
    for (i, label) in ["a", "b", "c", "d", "e"].into_iter().enumerate() {
        h.push(snap(label, &i.to_string()));
    }
    assert_eq!(h.len(), 3);
    let mut seen = Vec::new();
    while let Some(s) = h.undo(snap("now", "-")) {
        seen.push(s.label);
    }
    assert_eq!(seen, vec!["e", "d", "c"]);
}

#[test]
fn default_capacity_is_fifty() {
    let mut h = History::default();
    for _ in 0..60 {
        h.push(snap("x", "t"));
    }
    assert_eq!(h.len(), HISTORY_CAPACITY);
    assert_eq!(HISTORY_CAPACITY, 50);
}

#[test]
fn snapshot_round_trips_project_fields() {
    let mut project = Project {
        theme: Some("classic".to_owned()),
        print_size: Some("square-8x8".to_owned()),
        ..Project::default()
    };
    project.pages.push(Page::new("p1"));
    let snapshot = Snapshot::capture("edit", &project);

    project.pages.clear();
    project.theme = None;
    project.print_size = Some("square-12x12".to_owned());
    snapshot.restore(&mut project);

    assert_eq!(project.pages.len(), 1);
    assert_eq!(project.theme.as_deref(), Some("classic"));
    assert_eq!(project.print_size.as_deref(), Some("square-12x12"));
}
