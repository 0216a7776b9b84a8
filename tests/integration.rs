//! End-to-end tests: JSON in, SVG out, with the layout engine
//! exercised through the public API.

use sketchwire::layout::{Constraints, HeuristicText, LayoutEngine};
use sketchwire::model::{Align, Attrs, Dim, Justify};
use sketchwire::{render_json, Node, NodeKind, RenderOptions, SvgRenderer};

// ── Node construction helpers ──────────────────────────────────

fn page(children: Vec<Node>) -> Node {
    Node::with_children(
        NodeKind::Page {
            title: None,
            device: None,
            viewport: None,
        },
        children,
    )
}

fn header(children: Vec<Node>) -> Node {
    Node::with_children(NodeKind::Header, children)
}

fn main_region(children: Vec<Node>) -> Node {
    Node::with_children(NodeKind::Main, children)
}

fn footer(children: Vec<Node>) -> Node {
    Node::with_children(NodeKind::Footer, children)
}

fn card(title: Option<&str>, children: Vec<Node>) -> Node {
    Node::with_children(
        NodeKind::Card {
            title: title.map(String::from),
        },
        children,
    )
}

fn button(label: &str, icon: Option<&str>) -> Node {
    Node::new(NodeKind::Button {
        label: label.to_string(),
        icon: icon.map(String::from),
    })
}

fn sized(node: Node, w: f64, h: f64) -> Node {
    node.with_attrs(Attrs {
        w: Some(Dim::Px(w)),
        h: Some(Dim::Px(h)),
        ..Default::default()
    })
}

fn placeholder() -> Node {
    Node::new(NodeKind::Placeholder { label: None })
}

// ── Full pipeline ──────────────────────────────────────────────

#[test]
fn renders_app_shell_from_json() {
    let json = r#"{
        "kind": { "type": "Page", "title": "Dashboard" },
        "children": [
            {
                "kind": { "type": "Header" },
                "children": [
                    { "kind": { "type": "Title", "content": "Acme", "level": 3 } },
                    { "kind": { "type": "Avatar", "name": "Ada Lovelace" } }
                ]
            },
            {
                "kind": { "type": "Main" },
                "children": [
                    { "kind": { "type": "Text", "content": "Welcome back" } }
                ]
            },
            {
                "kind": { "type": "Footer" },
                "children": [
                    { "kind": { "type": "Text", "content": "v1.0" } }
                ]
            }
        ]
    }"#;

    let out = render_json(json).unwrap();
    assert_eq!(out.width, 800.0);
    assert_eq!(out.height, 600.0);
    assert!(out.svg.starts_with("<svg "));
    assert!(out.svg.ends_with("</svg>"));
    // Fixed strategy: the band between header and footer is clipped.
    assert!(out.svg.contains("<clipPath id=\"clip0\">"));
    assert!(out.svg.contains("clip-path=\"url(#clip0)\""));
    assert!(out.svg.contains(">Welcome back</text>"));
    // Avatar initials from the name.
    assert!(out.svg.contains(">AL</text>"));
}

#[test]
fn stack_page_has_no_clip() {
    let renderer = SvgRenderer::default();
    let doc = page(vec![card(Some("Sign in"), vec![Node::text("hello")])]);
    let out = renderer.render(&doc);
    assert!(!out.svg.contains("clipPath"));
    // Standalone cards sit in the horizontal middle: (800 - 360) / 2.
    assert!(out.svg.contains(r#"<rect x="220" y="#));
    assert!(out.svg.contains(r#"width="360""#));
}

#[test]
fn rerender_is_byte_identical() {
    let renderer = SvgRenderer::default();
    let doc = page(vec![
        header(vec![Node::text("Brand"), button("Sign up", Some("user"))]),
        main_region(vec![card(None, vec![Node::text("body")])]),
        footer(vec![]),
    ]);
    let first = renderer.render(&doc);
    let second = renderer.render(&doc);
    assert_eq!(first.svg, second.svg);
}

#[test]
fn text_content_is_escaped() {
    let doc = page(vec![Node::text(r#"R&D <Lab> "alpha""#)]);
    let out = SvgRenderer::default().render(&doc);
    assert!(out.svg.contains("R&amp;D &lt;Lab&gt; &quot;alpha&quot;"));
    assert!(!out.svg.contains("<Lab>"));
}

#[test]
fn unknown_kind_skips_without_breaking_siblings() {
    let json = r#"{
        "kind": { "type": "Page" },
        "children": [
            { "kind": { "type": "Text", "content": "before" } },
            { "kind": { "type": "Hologram", "beams": 3 } },
            { "kind": { "type": "Text", "content": "after" } }
        ]
    }"#;
    let out = render_json(json).unwrap();
    assert!(out.svg.contains(">before</text>"));
    assert!(out.svg.contains(">after</text>"));
    assert!(out.svg.contains("<!-- skipped"));
}

#[test]
fn invalid_json_reports_parse_error() {
    let err = render_json("{ not json").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("failed to parse document"));
}

#[test]
fn device_preset_sets_page_size() {
    let doc = Node::new(NodeKind::Page {
        title: None,
        device: Some("phone".to_string()),
        viewport: None,
    });
    let out = SvgRenderer::default().render(&doc);
    assert_eq!(out.width, 375.0);
    assert_eq!(out.height, 667.0);
    assert!(out.svg.contains(r#"viewBox="0 0 375 667""#));
}

#[test]
fn button_icon_comes_from_the_registry() {
    let doc = page(vec![button("Save", Some("check"))]);
    let out = SvgRenderer::default().render(&doc);
    assert!(out.svg.contains(r#"points="20 6 9 17 4 12""#));
    assert!(out.svg.contains(">Save</text>"));
}

#[test]
fn custom_theme_recolors_buttons() {
    let mut options = RenderOptions::default();
    options.theme.primary = "#ff0000".to_string();
    let doc = page(vec![button("Go", None)]);
    let out = SvgRenderer::new(options).render(&doc);
    assert!(out.svg.contains(r##"fill="#ff0000""##));
    assert!(!out.svg.contains("#4f46e5"));
}

// ── Layout through the public engine ───────────────────────────

#[test]
fn space_between_pushes_fixed_children_apart() {
    let text = HeuristicText;
    let engine = LayoutEngine::new(800.0, 600.0, &text);
    let row = Node::with_children(
        NodeKind::Row,
        vec![
            sized(placeholder(), 100.0, 40.0),
            sized(placeholder(), 100.0, 40.0),
        ],
    )
    .with_attrs(Attrs {
        w: Some(Dim::Px(300.0)),
        gap: Some(10.0),
        justify: Some(Justify::Between),
        ..Default::default()
    });

    let root = engine.layout(&row, 0.0, 0.0, &Constraints::new(300.0, None));
    assert!((root.children[0].x).abs() < 0.01);
    assert!((root.children[1].x - 200.0).abs() < 0.01);
}

#[test]
fn flex_column_gives_leftover_to_the_grower() {
    let text = HeuristicText;
    let engine = LayoutEngine::new(800.0, 600.0, &text);
    let col = Node::with_children(
        NodeKind::Col,
        vec![
            sized(placeholder(), 300.0, 50.0),
            main_region(vec![]),
        ],
    )
    .with_attrs(Attrs {
        h: Some(Dim::Px(250.0)),
        gap: Some(10.0),
        ..Default::default()
    });

    let root = engine.layout(&col, 0.0, 0.0, &Constraints::new(400.0, Some(250.0)));
    assert!((root.children[1].height - 190.0).abs() < 0.01);
    assert!((root.children[1].y - 60.0).abs() < 0.01);
}

#[test]
fn header_band_centers_mixed_heights() {
    let text = HeuristicText;
    let engine = LayoutEngine::new(800.0, 600.0, &text);
    let band = header(vec![
        Node::text("Brand"),
        button("Log in", None),
    ])
    .with_attrs(Attrs {
        justify: Some(Justify::Between),
        align: Some(Align::Center),
        ..Default::default()
    });

    let root = engine.layout(&band, 0.0, 0.0, &Constraints::new(800.0, Some(600.0)));
    assert_eq!(root.height, 56.0);
    for child in &root.children {
        let mid = child.y + child.height / 2.0;
        assert!((mid - 28.0).abs() < 0.01, "child not centered: {:?}", child.y);
    }
}

#[test]
fn modal_ignores_tree_position() {
    let text = HeuristicText;
    let engine = LayoutEngine::new(800.0, 600.0, &text);
    let modal = Node::with_children(
        NodeKind::Modal {
            title: Some("Confirm".to_string()),
        },
        vec![Node::text("Delete this item?"), button("Delete", None)],
    );
    let root = engine.layout(&modal, 5.0, 590.0, &Constraints::new(800.0, Some(600.0)));
    assert!((root.x - (800.0 - root.width) / 2.0).abs() < 0.01);
    assert!((root.y - (600.0 - root.height) / 2.0).abs() < 0.01);
}

#[test]
fn full_width_child_takes_the_whole_track() {
    let text = HeuristicText;
    let engine = LayoutEngine::new(800.0, 600.0, &text);
    let json = r#"{
        "kind": { "type": "Card" },
        "children": [
            { "kind": { "type": "Button", "label": "Log in" }, "attrs": { "w": "full" } }
        ]
    }"#;
    let card: Node = serde_json::from_str(json).unwrap();
    let root = engine.layout(&card, 0.0, 0.0, &Constraints::new(800.0, None));
    // Card content width: 360 - 2 x 16 padding.
    assert!((root.children[0].width - 328.0).abs() < 0.01);
}

#[test]
fn full_height_inside_card_stays_finite() {
    let json = r#"{
        "kind": { "type": "Page" },
        "children": [
            {
                "kind": { "type": "Card" },
                "children": [
                    {
                        "kind": { "type": "Row" },
                        "attrs": { "h": "full" },
                        "children": [
                            { "kind": { "type": "Text", "content": "hi" } }
                        ]
                    }
                ]
            }
        ]
    }"#;
    let out = render_json(json).unwrap();
    // A full-height child of an unbounded card collapses to content:
    // one 20px text line plus 16px card padding top and bottom.
    assert!(out.svg.contains(r#"height="52""#));
    assert!(!out.svg.contains("9223372036854775807"));
}

#[test]
fn json_model_roundtrip_preserves_structure() {
    let doc = page(vec![
        header(vec![Node::text("Brand")]),
        main_region(vec![card(Some("Totals"), vec![Node::text("42")])]),
    ]);
    let json = serde_json::to_string(&doc).unwrap();
    let back: Node = serde_json::from_str(&json).unwrap();
    assert_eq!(back.children.len(), 2);
    assert!(matches!(back.children[0].kind, NodeKind::Header));
    let out_a = SvgRenderer::default().render(&doc);
    let out_b = SvgRenderer::default().render(&back);
    assert_eq!(out_a.svg, out_b.svg);
}
