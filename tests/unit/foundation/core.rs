use super::*;

#[test]
fn parses_hex_forms() {
    assert_eq!(Color::parse("#ff0000"), Some(Color::rgb(255, 0, 0)));
    assert_eq!(Color::parse("#F00"), Some(Color::rgb(255, 0, 0)));
    assert_eq!(
        Color::parse("#0000ff80"),
        Some(Color {
            r: 0,
            g: 0,
            b: 255,
            a: 128
        })
    );
    assert_eq!(Color::parse("#12"), None);
    assert_eq!(Color::parse("#gg0000"), None);
}

#[test]
fn parses_css_rgb_functions() {
    assert_eq!(Color::parse("rgb(212, 175, 55)"), Some(Color::rgb(212, 175, 55)));
    assert_eq!(
        Color::parse("RGBA(0, 0, 255, 0.5)"),
        Some(Color {
            r: 0,
            g: 0,
            b: 255,
            a: 128
        })
    );
    assert_eq!(Color::parse("rgb(100%, 0%, 50%)"), Some(Color::rgb(255, 0, 128)));
    assert_eq!(
        Color::parse("rgb(1 2 3 / 25%)").map(|c| c.a),
        Some(64)
    );
    assert_eq!(Color::parse("rgb(300, -4, 10)"), Some(Color::rgb(255, 0, 10)));
    assert_eq!(Color::parse("rgb(1, 2)"), None);
    assert_eq!(Color::parse("rgb(1, 2, 3"), None);
    assert_eq!(Color::parse("rgb(a, b, c)"), None);
}

#[test]
fn none_and_keywords() {
    assert_eq!(Color::parse("none"), None);
    assert_eq!(Color::parse("transparent"), None);
    assert_eq!(Color::parse("White"), Some(Color::WHITE));
}

#[test]
fn css_and_hex_output() {
    assert_eq!(Color::rgb(212, 175, 55).to_hex(), "#d4af37");
    let c = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 128,
    };
    assert!(c.to_css().starts_with("rgba(0, 0, 0, 0.50"));
}

#[test]
fn color_serde_roundtrip_via_string() {
    let c: Color = serde_json::from_str("\"#1a1a1a\"").unwrap();
    assert_eq!(c, Color::rgb(26, 26, 26));
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"#1a1a1a\"");
    assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
}

#[test]
fn edges_shrink_never_inverts() {
    let r = Rect::new(0.0, 0.0, 100.0, 50.0);
    let inner = Edges::uniform(10.0).shrink(r);
    assert_eq!(inner, Rect::new(10.0, 10.0, 90.0, 40.0));

    let collapsed = Edges::uniform(40.0).shrink(r);
    assert_eq!(collapsed.height(), 0.0);
    assert!(collapsed.width() >= 0.0);
}
