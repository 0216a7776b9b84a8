//! # Wireframe Document Model
//!
//! The input representation for the rendering engine: a tree of typed UI
//! nodes produced by the wireframe parser (or direct JSON construction).
//! Containers (Page, Row, Col, Card, ...) own an ordered list of children;
//! leaves (Text, Button, Badge, ...) carry their content in variant fields.
//!
//! The model is deliberately forgiving: apart from the `type` discriminant
//! and a handful of content fields, every attribute is optional and falls
//! back to a documented default during measurement. An unrecognized `type`
//! deserializes to [`NodeKind::Unknown`], which measures to nothing and
//! renders as an inert comment — a bad node never takes the document down.

use serde::{Deserialize, Serialize};

use crate::layout::Edges;

/// A node in the wireframe tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// What kind of node this is.
    pub kind: NodeKind,

    /// Layout attributes (spacing, sizing, flex) for this node.
    #[serde(default)]
    pub attrs: Attrs,

    /// Child nodes. Meaningful for container kinds; empty for leaves.
    #[serde(default)]
    pub children: Vec<Node>,
}

/// The different kinds of nodes in the wireframe tree.
///
/// Grouped the way the wireframe language groups them: layout, container,
/// text, input, display, data, feedback, overlay, navigation. Adding a
/// variant is a compile-time obligation across the measure, layout, and
/// render passes — all three match exhaustively.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeKind {
    // ── Layout ─────────────────────────────────────────────────
    /// The document root. Dimensions resolve from explicit attrs, then
    /// the device/viewport preset, then renderer defaults.
    Page {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        /// Named device preset (see [`crate::viewport`]).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        device: Option<String>,
        /// Explicit viewport, either a preset name or a "WxH" string.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        viewport: Option<String>,
    },
    /// A fixed top band (56px unless overridden). Children are laid out
    /// at natural height and vertically centered within the band.
    Header,
    /// The flex-growing content region between Header and Footer.
    Main,
    /// A fixed bottom band (60px unless overridden).
    Footer,
    /// A fixed-width side band (200px unless overridden).
    Sidebar,
    /// A horizontal flex container.
    Row,
    /// A vertical flex container.
    Col,

    // ── Containers ─────────────────────────────────────────────
    /// A bordered content card, 360px wide by default.
    Card {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    /// A dialog centered against the page, not its tree position.
    Modal {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    /// A side panel, 280px wide by default.
    Drawer {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    /// Stacked collapsible sections; each child renders as a 40px row.
    Accordion,

    // ── Text ───────────────────────────────────────────────────
    Text {
        content: String,
    },
    Title {
        content: String,
        /// Heading level 1-4; shrinks the font as it deepens.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        level: Option<u8>,
    },
    Link {
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        href: Option<String>,
    },

    // ── Inputs ─────────────────────────────────────────────────
    Button {
        label: String,
        /// Icon name looked up in the icon registry; unknown names
        /// simply render without an icon.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
    },
    Input {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
    Textarea {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
    Select {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(default)]
        options: Vec<String>,
    },
    Checkbox {
        label: String,
        #[serde(default)]
        checked: bool,
    },
    Radio {
        label: String,
        #[serde(default)]
        checked: bool,
    },
    Switch {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(default)]
        on: bool,
    },
    Slider {
        /// Position 0-100 along the track.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<f64>,
    },

    // ── Display ────────────────────────────────────────────────
    Image {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        src: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
    },
    Placeholder {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    Avatar {
        /// Initials are derived from the name when present.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    Badge {
        label: String,
    },
    Icon {
        name: String,
    },

    // ── Data ───────────────────────────────────────────────────
    Table {
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    List {
        items: Vec<String>,
        #[serde(default)]
        ordered: bool,
    },

    // ── Feedback ───────────────────────────────────────────────
    Alert {
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        variant: Option<String>,
    },
    Toast {
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        variant: Option<String>,
    },
    Progress {
        /// Fill 0-100.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<f64>,
    },
    Spinner,

    // ── Overlays ───────────────────────────────────────────────
    Tooltip {
        content: String,
    },
    Popover {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    },
    Dropdown {
        label: String,
        #[serde(default)]
        items: Vec<String>,
    },

    // ── Navigation ─────────────────────────────────────────────
    /// A horizontal navigation bar; children are laid out as a row and
    /// vertically centered, like a header band.
    Nav,
    Tabs {
        tabs: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        active: Option<usize>,
    },
    Breadcrumb {
        items: Vec<String>,
    },
    Divider,

    /// Any `type` this engine doesn't recognize. Inert by contract:
    /// zero size, comment-only render, siblings unaffected.
    #[serde(other)]
    Unknown,
}

/// Main-axis direction of a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Row,
    #[serde(alias = "column")]
    Col,
}

/// Main-axis distribution for a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justify {
    #[default]
    #[serde(alias = "flex-start")]
    Start,
    #[serde(alias = "flex-end")]
    End,
    Center,
    #[serde(alias = "space-between")]
    Between,
    #[serde(alias = "space-around")]
    Around,
    #[serde(alias = "space-evenly")]
    Evenly,
}

/// Cross-axis alignment. `Baseline` is intentionally simplified to
/// `Start` throughout the engine; the parallel HTML renderer relies on
/// the same approximation for visual parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    #[serde(alias = "flex-start")]
    Start,
    #[serde(alias = "flex-end")]
    End,
    Center,
    Stretch,
    Baseline,
}

/// A dimension attribute: a pixel count or the keyword `"full"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dim {
    Px(f64),
    Keyword(DimKeyword),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimKeyword {
    Full,
}

impl Dim {
    /// True for the `"full"` keyword.
    pub fn is_full(&self) -> bool {
        matches!(self, Dim::Keyword(DimKeyword::Full))
    }

    /// Resolve against the available extent: `full` takes it all.
    pub fn resolve(&self, available: f64) -> f64 {
        match self {
            Dim::Px(v) => *v,
            Dim::Keyword(DimKeyword::Full) => available,
        }
    }
}

/// Layout attributes shared by most node kinds. Everything is optional;
/// shorthand precedence is the CSS-familiar specific-over-general
/// (`pt` beats `py` beats `p`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attrs {
    // Padding
    pub p: Option<f64>,
    pub px: Option<f64>,
    pub py: Option<f64>,
    pub pt: Option<f64>,
    pub pr: Option<f64>,
    pub pb: Option<f64>,
    pub pl: Option<f64>,

    // Margin
    pub m: Option<f64>,
    pub mx: Option<f64>,
    pub my: Option<f64>,
    pub mt: Option<f64>,
    pub mr: Option<f64>,
    pub mb: Option<f64>,
    pub ml: Option<f64>,

    // Sizing
    pub w: Option<Dim>,
    pub h: Option<Dim>,
    pub min_w: Option<f64>,
    pub max_w: Option<f64>,
    pub min_h: Option<f64>,
    pub max_h: Option<f64>,

    // Flex
    pub flex: Option<f64>,
    pub direction: Option<Direction>,
    pub justify: Option<Justify>,
    pub align: Option<Align>,
    pub wrap: Option<bool>,
    pub gap: Option<f64>,

    // Grid
    pub span: Option<u32>,

    // Page
    pub centered: Option<bool>,

    // Named size for Avatar/Icon (xs/sm/md/lg/xl).
    pub size: Option<String>,

    // Visual variant for Button/Alert/Badge (primary/outline/ghost/...).
    pub variant: Option<String>,
}

impl Attrs {
    /// Resolve padding shorthands against a per-kind default.
    pub fn padding(&self, default: f64) -> Edges {
        Edges {
            top: self.pt.or(self.py).or(self.p).unwrap_or(default),
            right: self.pr.or(self.px).or(self.p).unwrap_or(default),
            bottom: self.pb.or(self.py).or(self.p).unwrap_or(default),
            left: self.pl.or(self.px).or(self.p).unwrap_or(default),
        }
    }

    /// Resolve margin shorthands. Margins default to zero everywhere.
    pub fn margin(&self) -> Edges {
        Edges {
            top: self.mt.or(self.my).or(self.m).unwrap_or(0.0),
            right: self.mr.or(self.mx).or(self.m).unwrap_or(0.0),
            bottom: self.mb.or(self.my).or(self.m).unwrap_or(0.0),
            left: self.ml.or(self.mx).or(self.m).unwrap_or(0.0),
        }
    }

    pub fn gap_or(&self, default: f64) -> f64 {
        self.gap.unwrap_or(default)
    }

    /// Explicit width resolved against the available width, if any.
    pub fn width(&self, available: f64) -> Option<f64> {
        self.w.map(|d| d.resolve(available))
    }

    /// Explicit height resolved against the available height, if any.
    pub fn height(&self, available: f64) -> Option<f64> {
        self.h.map(|d| d.resolve(available))
    }

    /// Clamp a measured extent to the min/max width attributes.
    pub fn clamp_w(&self, v: f64) -> f64 {
        v.clamp(
            self.min_w.unwrap_or(0.0),
            self.max_w.unwrap_or(f64::INFINITY),
        )
    }

    /// Clamp a measured extent to the min/max height attributes.
    pub fn clamp_h(&self, v: f64) -> f64 {
        v.clamp(
            self.min_h.unwrap_or(0.0),
            self.max_h.unwrap_or(f64::INFINITY),
        )
    }
}

impl Node {
    /// Create a node of the given kind with no attrs or children.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attrs: Attrs::default(),
            children: vec![],
        }
    }

    /// Create a container node with children.
    pub fn with_children(kind: NodeKind, children: Vec<Node>) -> Self {
        Self {
            kind,
            attrs: Attrs::default(),
            children,
        }
    }

    /// Builder-style attrs setter.
    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = attrs;
        self
    }

    /// A plain Text node, the most common leaf.
    pub fn text(content: &str) -> Self {
        Self::new(NodeKind::Text {
            content: content.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_page() {
        let json = r#"{
            "kind": { "type": "Page" },
            "children": [
                { "kind": { "type": "Text", "content": "hello" } }
            ]
        }"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert!(matches!(node.kind, NodeKind::Page { .. }));
        assert_eq!(node.children.len(), 1);
    }

    #[test]
    fn parse_dim_number_and_full() {
        let json = r#"{
            "kind": { "type": "Row" },
            "attrs": { "w": "full", "h": 56, "gap": 10 }
        }"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert!(node.attrs.w.unwrap().is_full());
        assert_eq!(node.attrs.h, Some(Dim::Px(56.0)));
        assert_eq!(node.attrs.gap, Some(10.0));
    }

    #[test]
    fn parse_justify_aliases() {
        let attrs: Attrs =
            serde_json::from_str(r#"{ "justify": "space-between", "align": "center" }"#).unwrap();
        assert_eq!(attrs.justify, Some(Justify::Between));
        assert_eq!(attrs.align, Some(Align::Center));
    }

    #[test]
    fn unknown_kind_degrades() {
        let json = r#"{ "kind": { "type": "Hologram" } }"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert!(matches!(node.kind, NodeKind::Unknown));
    }

    #[test]
    fn padding_shorthand_precedence() {
        let attrs: Attrs = serde_json::from_str(r#"{ "p": 8, "px": 16, "pt": 2 }"#).unwrap();
        let edges = attrs.padding(0.0);
        assert_eq!(edges.top, 2.0);
        assert_eq!(edges.left, 16.0);
        assert_eq!(edges.right, 16.0);
        assert_eq!(edges.bottom, 8.0);
    }

    #[test]
    fn roundtrip_button() {
        let node = Node::new(NodeKind::Button {
            label: "Save".to_string(),
            icon: Some("check".to_string()),
        });
        let json = serde_json::to_string(&node).unwrap();
        let back: Node = serde_json::from_str(&json).unwrap();
        match back.kind {
            NodeKind::Button { label, icon } => {
                assert_eq!(label, "Save");
                assert_eq!(icon.as_deref(), Some("check"));
            }
            other => panic!("expected Button, got {:?}", other),
        }
    }
}
