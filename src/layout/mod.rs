//! # Measurement and Layout
//!
//! The two-phase box engine at the heart of the renderer.
//!
//! **Measure** runs bottom-up: given a node and the constraints flowing
//! down from its parent, compute the intrinsic `{width, height}` it
//! wants, without assigning any position. Measurement is a pure function
//! of `(node, constraints)` — the layout pass re-measures children after
//! classifying their flex role, so any non-determinism here would
//! corrupt the sizing of siblings.
//!
//! **Layout** runs top-down: assign absolute page coordinates, using the
//! flexbox resolver for Row/Col distribution, and produce a [`LayoutBox`]
//! tree that mirrors the node tree one-to-one. Boxes are rebuilt fresh
//! on every render; the only post-hoc mutation is the vertical-centering
//! shift applied to header/footer children.
//!
//! Every numeric default in this module is a committed contract shared
//! with the parallel HTML renderer, not an implementation detail. The
//! same goes for the text width estimate (`0.6 × font size × chars`):
//! it is deliberately not real glyph metrics, and consumers rely on the
//! approximation matching. Swap it via [`TextMeasurer`] if you have a
//! shaping backend.

pub mod flex;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::model::{Align, Attrs, Dim, Direction, Justify, Node, NodeKind};
use flex::{compute_flex_layout, Basis, FlexConfig, FlexItem};

// ── Committed sizing defaults ──────────────────────────────────

pub const HEADER_HEIGHT: f64 = 56.0;
pub const FOOTER_HEIGHT: f64 = 60.0;
pub const SIDEBAR_WIDTH: f64 = 200.0;
pub const NAV_HEIGHT: f64 = 48.0;
pub const CARD_WIDTH: f64 = 360.0;
pub const CARD_PADDING: f64 = 16.0;
pub const CARD_GAP: f64 = 16.0;
pub const MODAL_WIDTH: f64 = 480.0;
pub const MODAL_PADDING: f64 = 24.0;
pub const DRAWER_WIDTH: f64 = 280.0;
pub const TITLE_BAND: f64 = 28.0;
pub const CONTAINER_GAP: f64 = 12.0;
pub const BAND_PADDING_X: f64 = 16.0;
pub const INPUT_HEIGHT: f64 = 36.0;
pub const LABEL_BAND: f64 = 24.0;
pub const HEADER_INPUT_MIN: f64 = 120.0;
pub const ACCORDION_ROW: f64 = 40.0;
pub const TABLE_HEADER_ROW: f64 = 40.0;
pub const TABLE_BODY_ROW: f64 = 36.0;
pub const LIST_ROW: f64 = 28.0;
pub const TEXT_LINE: f64 = 20.0;
pub const TEXT_FONT: f64 = 14.0;

// ── Geometry primitives ────────────────────────────────────────

/// Edge values (top, right, bottom, left) for padding and margin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Edges {
    pub fn uniform(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// The result of measurement. Never carries a position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Downward-propagated sizing context. Never mutated in place; narrowed
/// per child via the helpers.
#[derive(Debug, Clone, Copy)]
pub struct Constraints {
    pub max_width: f64,
    pub max_height: Option<f64>,
    /// Inputs inside a header band flex-grow instead of holding their
    /// natural width.
    pub in_header: bool,
}

impl Constraints {
    pub fn new(max_width: f64, max_height: Option<f64>) -> Self {
        Self {
            max_width,
            max_height,
            in_header: false,
        }
    }

    /// Narrow both axes by padding-like insets.
    pub fn inset(&self, edges: Edges) -> Self {
        Self {
            max_width: (self.max_width - edges.horizontal()).max(0.0),
            max_height: self
                .max_height
                .map(|h| (h - edges.vertical()).max(0.0)),
            in_header: self.in_header,
        }
    }

    pub fn with_width(&self, max_width: f64) -> Self {
        Self {
            max_width: max_width.max(0.0),
            ..*self
        }
    }

    pub fn with_height(&self, max_height: Option<f64>) -> Self {
        Self {
            max_height: max_height.map(|h| h.max(0.0)),
            ..*self
        }
    }
}

/// A positioned, sized box mirroring one node of the input tree.
/// Coordinates are absolute page space, not parent-relative.
#[derive(Debug, Clone)]
pub struct LayoutBox<'a> {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// The source node; `None` for synthetic boxes.
    pub node: Option<&'a Node>,
    pub children: Vec<LayoutBox<'a>>,
    /// Resolved padding, recorded so the render pass can find the
    /// content origin without re-deriving defaults.
    pub padding: Edges,
}

impl<'a> LayoutBox<'a> {
    fn leaf(node: &'a Node, x: f64, y: f64, size: Size) -> Self {
        Self {
            x,
            y,
            width: size.width,
            height: size.height,
            node: Some(node),
            children: vec![],
            padding: Edges::default(),
        }
    }
}

/// Recursively shift a subtree vertically. Used exactly once in the
/// pipeline: centering header/footer children after their natural-height
/// layout.
pub fn shift_y(b: &mut LayoutBox<'_>, dy: f64) {
    b.y += dy;
    for child in &mut b.children {
        shift_y(child, dy);
    }
}

// ── Text width estimation ──────────────────────────────────────

/// Pluggable text width estimator. The engine deliberately avoids a
/// text-shaping backend; the default heuristic is part of the visual
/// contract.
pub trait TextMeasurer {
    fn text_width(&self, text: &str, font_size: f64) -> f64;
}

/// `0.6 × font size × character count`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicText;

impl TextMeasurer for HeuristicText {
    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        0.6 * font_size * text.chars().count() as f64
    }
}

// ── Flex child classification ──────────────────────────────────

/// How a child participates in its parent's flex distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
enum FlexRole {
    /// Explicit pixel size on the main axis: `grow 0, shrink 0`.
    Fixed(f64),
    /// Fills leftover space: `grow 1, shrink 1`, basis as given.
    Grow { basis: f64, min: f64 },
    /// Holds its content size but may shrink.
    Natural,
}

/// True for a Row that directly contains a Sidebar or Main — the
/// app-shell pattern that must fill the page column.
fn is_shell_row(node: &Node) -> bool {
    matches!(node.kind, NodeKind::Row)
        && node
            .children
            .iter()
            .any(|c| matches!(c.kind, NodeKind::Sidebar | NodeKind::Main))
}

// ── The engine ─────────────────────────────────────────────────

/// Measurement + layout over one page. Created per render with the
/// resolved page dimensions (Modal centers against these, wherever it
/// sits in the tree).
pub struct LayoutEngine<'m> {
    page_width: f64,
    page_height: f64,
    text: &'m dyn TextMeasurer,
}

/// A laid-out page: children in document order, each flagged if it
/// belongs inside the scroll clip region of the fixed strategy.
pub struct PageLayout<'a> {
    pub width: f64,
    pub height: f64,
    pub children: Vec<PageChild<'a>>,
    /// Clip rectangle `(x, y, w, h)` for the band between a pinned
    /// header and footer. `None` under the simple stack strategy.
    pub clip: Option<(f64, f64, f64, f64)>,
}

pub struct PageChild<'a> {
    pub layout: LayoutBox<'a>,
    pub clipped: bool,
}

impl<'m> LayoutEngine<'m> {
    pub fn new(page_width: f64, page_height: f64, text: &'m dyn TextMeasurer) -> Self {
        Self {
            page_width,
            page_height,
            text,
        }
    }

    // ── Measurement pass ───────────────────────────────────────

    /// Intrinsic outer size (content + padding + margin) of a node
    /// under the given constraints.
    pub fn measure(&self, node: &Node, cx: &Constraints) -> Size {
        let margin = node.attrs.margin();
        let inner = self.measure_content(node, &cx.inset(margin));
        Size {
            width: inner.width + margin.horizontal(),
            height: inner.height + margin.vertical(),
        }
    }

    fn measure_content(&self, node: &Node, cx: &Constraints) -> Size {
        let attrs = &node.attrs;
        let est = |text: &str, font: f64| self.text.text_width(text, font);

        match &node.kind {
            NodeKind::Page { .. } => Size {
                width: cx.max_width,
                height: cx.max_height.unwrap_or(0.0),
            },

            NodeKind::Header => Size {
                width: cx.max_width,
                height: attrs
                    .height(cx.max_height.unwrap_or(HEADER_HEIGHT))
                    .unwrap_or(HEADER_HEIGHT),
            },
            NodeKind::Footer => Size {
                width: cx.max_width,
                height: attrs
                    .height(cx.max_height.unwrap_or(FOOTER_HEIGHT))
                    .unwrap_or(FOOTER_HEIGHT),
            },
            NodeKind::Nav => Size {
                width: cx.max_width,
                height: attrs.height(NAV_HEIGHT).unwrap_or(NAV_HEIGHT),
            },

            NodeKind::Sidebar => {
                let width = attrs
                    .width(cx.max_width)
                    .unwrap_or(SIDEBAR_WIDTH)
                    .min(cx.max_width);
                let pad = attrs.padding(CARD_PADDING);
                let height = explicit_height(attrs, cx.max_height)
                    .or(cx.max_height)
                    .unwrap_or_else(|| {
                        self.column_content(node, width - pad.horizontal(), cx).height
                            + pad.vertical()
                    });
                Size { width, height }
            }

            NodeKind::Main => {
                let width = attrs.width(cx.max_width).unwrap_or(cx.max_width);
                let pad = attrs.padding(CARD_PADDING);
                let height = explicit_height(attrs, cx.max_height)
                    .or(cx.max_height)
                    .unwrap_or_else(|| {
                        self.column_content(node, width - pad.horizontal(), cx).height
                            + pad.vertical()
                    });
                Size { width, height }
            }

            NodeKind::Row => self.measure_row(node, cx),
            NodeKind::Col => self.measure_col(node, cx),

            NodeKind::Card { title } => self.measure_framed(
                node,
                cx,
                attrs.width(cx.max_width).unwrap_or(CARD_WIDTH.min(cx.max_width)),
                CARD_PADDING,
                title.is_some(),
            ),
            NodeKind::Modal { title } => self.measure_framed(
                node,
                cx,
                attrs.width(cx.max_width).unwrap_or(MODAL_WIDTH.min(cx.max_width)),
                MODAL_PADDING,
                title.is_some(),
            ),
            NodeKind::Drawer { title } => self.measure_framed(
                node,
                cx,
                attrs.width(cx.max_width).unwrap_or(DRAWER_WIDTH.min(cx.max_width)),
                CARD_PADDING,
                title.is_some(),
            ),

            NodeKind::Accordion => Size {
                width: attrs.width(cx.max_width).unwrap_or(cx.max_width),
                height: explicit_height(attrs, cx.max_height)
                    .unwrap_or(ACCORDION_ROW * node.children.len() as f64),
            },

            NodeKind::Text { content } => Size {
                width: est(content, TEXT_FONT).min(cx.max_width),
                height: TEXT_LINE,
            },
            NodeKind::Title { content, level } => {
                let font = title_font(*level);
                Size {
                    width: est(content, font).min(cx.max_width),
                    height: font + 10.0,
                }
            }
            NodeKind::Link { content, .. } => Size {
                width: est(content, TEXT_FONT).min(cx.max_width),
                height: TEXT_LINE,
            },

            NodeKind::Button { label, icon } => {
                let icon_w = if icon.is_some() { 22.0 } else { 0.0 };
                Size {
                    width: attrs
                        .width(cx.max_width)
                        .unwrap_or(est(label, TEXT_FONT) + 32.0 + icon_w),
                    height: attrs.height(INPUT_HEIGHT).unwrap_or(INPUT_HEIGHT),
                }
            }
            NodeKind::Input { label, .. } | NodeKind::Select { label, .. } => Size {
                width: attrs.width(cx.max_width).unwrap_or(200.0_f64.min(cx.max_width)),
                height: INPUT_HEIGHT + label_band(label),
            },
            NodeKind::Dropdown { .. } => Size {
                width: attrs.width(cx.max_width).unwrap_or(200.0_f64.min(cx.max_width)),
                height: INPUT_HEIGHT,
            },
            NodeKind::Textarea { label, .. } => Size {
                width: attrs.width(cx.max_width).unwrap_or(280.0_f64.min(cx.max_width)),
                height: attrs.height(80.0).unwrap_or(80.0) + label_band(label),
            },
            NodeKind::Checkbox { label, .. } | NodeKind::Radio { label, .. } => Size {
                width: (20.0 + 8.0 + est(label, TEXT_FONT)).min(cx.max_width),
                height: 20.0,
            },
            NodeKind::Switch { label, .. } => {
                let label_w = label
                    .as_deref()
                    .map(|l| 8.0 + est(l, TEXT_FONT))
                    .unwrap_or(0.0);
                Size {
                    width: (40.0 + label_w).min(cx.max_width),
                    height: 22.0,
                }
            }
            NodeKind::Slider { .. } => Size {
                width: attrs.width(cx.max_width).unwrap_or(200.0_f64.min(cx.max_width)),
                height: 20.0,
            },

            NodeKind::Image { .. } | NodeKind::Placeholder { .. } => Size {
                width: attrs.width(cx.max_width).unwrap_or(200.0_f64.min(cx.max_width)),
                height: attrs.height(120.0).unwrap_or(120.0),
            },
            NodeKind::Avatar { .. } => {
                let side = avatar_size(attrs.size.as_deref(), cx.in_header);
                Size {
                    width: side,
                    height: side,
                }
            }
            NodeKind::Badge { label } => Size {
                width: est(label, 12.0) + 16.0,
                height: 20.0,
            },
            NodeKind::Icon { .. } => {
                let side = icon_size(attrs.size.as_deref());
                Size {
                    width: side,
                    height: side,
                }
            }

            NodeKind::Table { rows, .. } => Size {
                width: attrs.width(cx.max_width).unwrap_or(cx.max_width),
                height: TABLE_HEADER_ROW + TABLE_BODY_ROW * rows.len() as f64,
            },
            NodeKind::List { items, .. } => {
                let widest = items
                    .iter()
                    .map(|item| est(item, TEXT_FONT))
                    .fold(0.0_f64, f64::max);
                Size {
                    width: (widest + 24.0).min(cx.max_width),
                    height: LIST_ROW * items.len() as f64,
                }
            }

            NodeKind::Alert { .. } => Size {
                width: attrs.width(cx.max_width).unwrap_or(cx.max_width),
                height: attrs.height(48.0).unwrap_or(48.0),
            },
            NodeKind::Toast { .. } => Size {
                width: attrs.width(cx.max_width).unwrap_or(280.0_f64.min(cx.max_width)),
                height: 48.0,
            },
            NodeKind::Progress { .. } => Size {
                width: attrs.width(cx.max_width).unwrap_or(200.0_f64.min(cx.max_width)),
                height: 8.0,
            },
            NodeKind::Spinner => Size {
                width: 24.0,
                height: 24.0,
            },

            NodeKind::Tooltip { content } => Size {
                width: (est(content, 12.0) + 16.0).min(cx.max_width),
                height: 28.0,
            },
            NodeKind::Popover { title, content } => {
                let body = title.iter().map(|_| 24.0).sum::<f64>()
                    + content.iter().map(|_| 18.0).sum::<f64>()
                    + 24.0;
                Size {
                    width: 240.0_f64.min(cx.max_width),
                    height: body.max(80.0),
                }
            }

            NodeKind::Tabs { .. } => {
                let panels = self.column_content(node, cx.max_width, cx);
                let panel_h = if node.children.is_empty() {
                    0.0
                } else {
                    8.0 + panels.height
                };
                Size {
                    width: attrs.width(cx.max_width).unwrap_or(cx.max_width),
                    height: 40.0 + panel_h,
                }
            }
            NodeKind::Breadcrumb { items } => Size {
                width: est(&items.join(" / "), 13.0).min(cx.max_width),
                height: 24.0,
            },
            NodeKind::Divider => Size {
                width: attrs.width(cx.max_width).unwrap_or(cx.max_width),
                height: 16.0,
            },

            NodeKind::Unknown => Size::default(),
        }
    }

    /// Row: height is the tallest child plus padding; width is explicit
    /// when set, else content-sized but never wider than the constraint.
    fn measure_row(&self, node: &Node, cx: &Constraints) -> Size {
        let pad = node.attrs.padding(0.0);
        let gap = node.attrs.gap_or(CONTAINER_GAP);
        let child_cx = cx.inset(pad);
        let sizes: Vec<Size> = node
            .children
            .iter()
            .map(|c| self.measure(c, &child_cx))
            .collect();

        let gaps = gap * (node.children.len().saturating_sub(1)) as f64;
        let content_w: f64 = sizes.iter().map(|s| s.width).sum::<f64>() + gaps;
        let content_h = sizes.iter().map(|s| s.height).fold(0.0_f64, f64::max);

        let width = match node.attrs.w {
            Some(d) => d.resolve(cx.max_width),
            None => (content_w + pad.horizontal()).min(cx.max_width),
        };
        let height = explicit_height(&node.attrs, cx.max_height)
            .unwrap_or(content_h + pad.vertical());
        Size {
            width: node.attrs.clamp_w(width),
            height: node.attrs.clamp_h(height),
        }
    }

    /// Col: width is the widest child (or explicit); height is the sum
    /// of children plus gaps plus padding.
    fn measure_col(&self, node: &Node, cx: &Constraints) -> Size {
        let pad = node.attrs.padding(0.0);
        let child_cx = cx.inset(pad);
        let content = self.column_content(node, child_cx.max_width, &child_cx);

        let width = match node.attrs.w {
            Some(d) => d.resolve(cx.max_width),
            None => (content.width + pad.horizontal()).min(cx.max_width),
        };
        let height = explicit_height(&node.attrs, cx.max_height)
            .unwrap_or(content.height + pad.vertical());
        Size {
            width: node.attrs.clamp_w(width),
            height: node.attrs.clamp_h(height),
        }
    }

    /// Card/Modal/Drawer: fixed default width, padded vertical stack,
    /// optional title band.
    fn measure_framed(
        &self,
        node: &Node,
        cx: &Constraints,
        width: f64,
        pad_default: f64,
        titled: bool,
    ) -> Size {
        let pad = node.attrs.padding(pad_default);
        let title_h = if titled { TITLE_BAND } else { 0.0 };
        let inner = Constraints {
            max_width: (width - pad.horizontal()).max(0.0),
            max_height: None,
            in_header: false,
        };
        let content = self.column_content_with_gap(node, inner.max_width, &inner, CARD_GAP);
        let height = explicit_height(&node.attrs, cx.max_height)
            .unwrap_or(title_h + content.height + pad.vertical());
        Size {
            width: node.attrs.clamp_w(width),
            height: node.attrs.clamp_h(height),
        }
    }

    /// Stacked extent of a node's children at a given inner width.
    fn column_content(&self, node: &Node, inner_width: f64, cx: &Constraints) -> Size {
        self.column_content_with_gap(node, inner_width, cx, node.attrs.gap_or(CONTAINER_GAP))
    }

    fn column_content_with_gap(
        &self,
        node: &Node,
        inner_width: f64,
        cx: &Constraints,
        gap: f64,
    ) -> Size {
        let child_cx = Constraints {
            max_width: inner_width.max(0.0),
            max_height: None,
            in_header: cx.in_header,
        };
        let mut width = 0.0_f64;
        let mut height = 0.0;
        for (i, child) in node.children.iter().enumerate() {
            let size = self.measure(child, &child_cx);
            width = width.max(size.width);
            if i > 0 {
                height += gap;
            }
            height += size.height;
        }
        Size { width, height }
    }

    // ── Layout pass ────────────────────────────────────────────

    /// Assign absolute positions to a subtree rooted at `(x, y)`.
    pub fn layout<'a>(&self, node: &'a Node, x: f64, y: f64, cx: &Constraints) -> LayoutBox<'a> {
        match &node.kind {
            NodeKind::Row => self.layout_flex_container(node, x, y, cx, Direction::Row, 0.0, 0.0),
            NodeKind::Col => self.layout_flex_container(node, x, y, cx, Direction::Col, 0.0, 0.0),
            NodeKind::Main => {
                let dir = node.attrs.direction.unwrap_or(Direction::Col);
                self.layout_flex_container(node, x, y, cx, dir, CARD_PADDING, 0.0)
            }
            NodeKind::Sidebar => {
                self.layout_flex_container(node, x, y, cx, Direction::Col, CARD_PADDING, 0.0)
            }

            NodeKind::Header => self.layout_band(node, x, y, cx, HEADER_HEIGHT, true),
            NodeKind::Footer => self.layout_band(node, x, y, cx, FOOTER_HEIGHT, false),
            NodeKind::Nav => self.layout_band(node, x, y, cx, NAV_HEIGHT, false),

            NodeKind::Card { title } => {
                let band = if title.is_some() { TITLE_BAND } else { 0.0 };
                self.layout_flex_container(node, x, y, cx, Direction::Col, CARD_PADDING, band)
            }
            NodeKind::Drawer { title } => {
                let band = if title.is_some() { TITLE_BAND } else { 0.0 };
                self.layout_flex_container(node, x, y, cx, Direction::Col, CARD_PADDING, band)
            }
            NodeKind::Modal { title } => {
                // Modals center against the page, not their tree slot.
                let size = self.measure(node, cx);
                let mx = (self.page_width - size.width) / 2.0;
                let my = (self.page_height - size.height) / 2.0;
                let band = if title.is_some() { TITLE_BAND } else { 0.0 };
                self.layout_flex_container(
                    node,
                    mx,
                    my,
                    &Constraints::new(size.width, Some(size.height)),
                    Direction::Col,
                    MODAL_PADDING,
                    band,
                )
            }

            NodeKind::Accordion => self.layout_accordion(node, x, y, cx),
            NodeKind::Tabs { .. } => self.layout_tabs(node, x, y, cx),

            // Page is driven through `layout_page`; reaching one here
            // (nested pages are not a thing) degrades to a leaf box.
            NodeKind::Page { .. } => LayoutBox::leaf(node, x, y, self.measure(node, cx)),

            // Everything else is a leaf: measure and wrap.
            _ => {
                let margin = node.attrs.margin();
                let size = self.measure(node, cx);
                LayoutBox {
                    x: x + margin.left,
                    y: y + margin.top,
                    width: size.width - margin.horizontal(),
                    height: size.height - margin.vertical(),
                    node: Some(node),
                    children: vec![],
                    padding: Edges::default(),
                }
            }
        }
    }

    /// Classify a child's flex role along the container's main axis.
    fn classify(&self, child: &Node, dir: Direction, cx: &Constraints) -> FlexRole {
        let attrs = &child.attrs;
        let explicit = match dir {
            Direction::Row => attrs.w,
            Direction::Col => attrs.h,
        };
        if let Some(dim) = explicit {
            match dim {
                Dim::Px(v) => return FlexRole::Fixed(v),
                // 'full' means "take whatever the parent hands out".
                Dim::Keyword(_) => return FlexRole::Grow { basis: 0.0, min: 0.0 },
            }
        }
        if let Some(flex) = attrs.flex {
            if flex > 0.0 {
                return FlexRole::Grow { basis: 0.0, min: 0.0 };
            }
        }
        match dir {
            Direction::Row => {
                if matches!(child.kind, NodeKind::Main) {
                    return FlexRole::Grow { basis: 0.0, min: 0.0 };
                }
                if matches!(child.kind, NodeKind::Col) && attrs.w.is_none() {
                    return FlexRole::Grow { basis: 0.0, min: 0.0 };
                }
                if cx.in_header && matches!(child.kind, NodeKind::Input { .. }) {
                    // Header search boxes stretch, with a usable floor.
                    let measured = self.measure(child, cx).width;
                    return FlexRole::Grow {
                        basis: measured,
                        min: HEADER_INPUT_MIN,
                    };
                }
            }
            Direction::Col => {
                if matches!(child.kind, NodeKind::Main) || is_shell_row(child) {
                    return FlexRole::Grow { basis: 0.0, min: 0.0 };
                }
            }
        }
        FlexRole::Natural
    }

    /// Shared Row/Col/framed-container layout: measure children, build
    /// flex items, resolve, recurse with the allotted sizes.
    #[allow(clippy::too_many_arguments)]
    fn layout_flex_container<'a>(
        &self,
        node: &'a Node,
        x: f64,
        y: f64,
        cx: &Constraints,
        dir: Direction,
        pad_default: f64,
        title_band: f64,
    ) -> LayoutBox<'a> {
        let attrs = &node.attrs;
        let margin = attrs.margin();
        let outer = self.measure(node, cx);
        let bx = x + margin.left;
        let by = y + margin.top;
        let width = outer.width - margin.horizontal();
        let height = outer.height - margin.vertical();

        let pad = attrs.padding(pad_default);
        let gap = attrs.gap_or(match &node.kind {
            NodeKind::Card { .. } | NodeKind::Modal { .. } | NodeKind::Drawer { .. } => CARD_GAP,
            _ => CONTAINER_GAP,
        });

        let inner_x = bx + pad.left;
        let inner_y = by + pad.top + title_band;
        let inner_w = (width - pad.horizontal()).max(0.0);
        let inner_h = (height - pad.vertical() - title_band).max(0.0);

        let child_cx = cx.with_width(inner_w).with_height(Some(inner_h));

        let items: Vec<FlexItem> = node
            .children
            .iter()
            .map(|child| {
                let size = self.measure(child, &child_cx);
                let (main, cross) = axis_split(dir, size);
                match self.classify(child, dir, &child_cx) {
                    FlexRole::Fixed(v) => FlexItem {
                        basis: Basis::Length(v),
                        grow: 0.0,
                        shrink: 0.0,
                        min_size: v,
                        max_size: v,
                        content_size: main,
                        cross_size: cross,
                        align_self: child.attrs.align,
                    },
                    FlexRole::Grow { basis, min } => FlexItem {
                        basis: Basis::Length(basis),
                        grow: child.attrs.flex.unwrap_or(1.0),
                        shrink: 1.0,
                        min_size: min,
                        max_size: f64::INFINITY,
                        content_size: main,
                        cross_size: cross,
                        align_self: child.attrs.align,
                    },
                    FlexRole::Natural => FlexItem {
                        basis: Basis::Content,
                        grow: 0.0,
                        shrink: 1.0,
                        min_size: 0.0,
                        max_size: f64::INFINITY,
                        content_size: main,
                        cross_size: cross,
                        align_self: child.attrs.align,
                    },
                }
            })
            .collect();

        let (main_size, cross_size) = match dir {
            Direction::Row => (inner_w, inner_h),
            Direction::Col => (inner_h, inner_w),
        };
        let config = FlexConfig {
            main_size,
            cross_size: Some(cross_size),
            justify: attrs.justify.unwrap_or_default(),
            align: attrs.align.unwrap_or_default(),
            gap,
        };
        let resolved = compute_flex_layout(&items, &config);

        let children = node
            .children
            .iter()
            .zip(&resolved.items)
            .map(|(child, item)| {
                let (cx_off, cy_off, child_w, child_h) = match dir {
                    Direction::Row => (item.main_pos, item.cross_pos, item.main_size, item.cross_size),
                    Direction::Col => (item.cross_pos, item.main_pos, item.cross_size, item.main_size),
                };
                let child_margin = child.attrs.margin();
                let rec_cx = cx.with_width(child_w).with_height(Some(child_h));
                let mut child_box =
                    self.layout(child, inner_x + cx_off, inner_y + cy_off, &rec_cx);
                // The resolver's answer is authoritative for the main
                // axis; the cross axis keeps the natural size unless the
                // container stretched it.
                match dir {
                    Direction::Row => {
                        child_box.width = child_w - child_margin.horizontal();
                        child_box.height = child_h - child_margin.vertical();
                    }
                    Direction::Col => {
                        child_box.height = child_h - child_margin.vertical();
                        child_box.width = child_w - child_margin.horizontal();
                    }
                }
                child_box
            })
            .collect();

        LayoutBox {
            x: bx,
            y: by,
            width,
            height,
            node: Some(node),
            children,
            padding: pad,
        }
    }

    /// Header/Footer/Nav: a fixed-height band whose children are laid
    /// out at their natural height and then vertically centered. The
    /// centering is a post-hoc shift of each child subtree, applied
    /// once — `max_height` is intentionally suppressed during the
    /// initial layout so children keep their natural extent.
    fn layout_band<'a>(
        &self,
        node: &'a Node,
        x: f64,
        y: f64,
        cx: &Constraints,
        default_height: f64,
        in_header: bool,
    ) -> LayoutBox<'a> {
        let attrs = &node.attrs;
        let width = cx.max_width;
        let height = attrs.height(default_height).unwrap_or(default_height);
        let pad = band_padding(attrs);
        let inner_w = (width - pad.horizontal()).max(0.0);

        let child_cx = Constraints {
            max_width: inner_w,
            max_height: None,
            in_header,
        };

        let items: Vec<FlexItem> = node
            .children
            .iter()
            .map(|child| {
                let size = self.measure(child, &child_cx);
                match self.classify(child, Direction::Row, &child_cx) {
                    FlexRole::Fixed(v) => FlexItem {
                        basis: Basis::Length(v),
                        grow: 0.0,
                        shrink: 0.0,
                        min_size: v,
                        max_size: v,
                        content_size: size.width,
                        cross_size: size.height,
                        align_self: child.attrs.align,
                    },
                    FlexRole::Grow { basis, min } => FlexItem {
                        basis: Basis::Length(basis),
                        grow: 1.0,
                        shrink: 1.0,
                        min_size: min,
                        max_size: f64::INFINITY,
                        content_size: size.width,
                        cross_size: size.height,
                        align_self: child.attrs.align,
                    },
                    FlexRole::Natural => FlexItem {
                        basis: Basis::Content,
                        grow: 0.0,
                        shrink: 1.0,
                        min_size: 0.0,
                        max_size: f64::INFINITY,
                        content_size: size.width,
                        cross_size: size.height,
                        align_self: child.attrs.align,
                    },
                }
            })
            .collect();

        let config = FlexConfig {
            main_size: inner_w,
            cross_size: None,
            justify: attrs.justify.unwrap_or_default(),
            align: attrs.align.unwrap_or_default(),
            gap: attrs.gap_or(CONTAINER_GAP),
        };
        let resolved = compute_flex_layout(&items, &config);

        let children = node
            .children
            .iter()
            .zip(&resolved.items)
            .map(|(child, item)| {
                let rec_cx = Constraints {
                    max_width: item.main_size,
                    max_height: None,
                    in_header,
                };
                let mut child_box =
                    self.layout(child, x + pad.left + item.main_pos, y, &rec_cx);
                child_box.width = item.main_size - child.attrs.margin().horizontal();
                // Center each child band-relative, shifting its whole
                // subtree in one pass.
                let dy = (height - child_box.height) / 2.0 - (child_box.y - y);
                shift_y(&mut child_box, dy);
                child_box
            })
            .collect();

        LayoutBox {
            x,
            y,
            width,
            height,
            node: Some(node),
            children,
            padding: pad,
        }
    }

    /// Accordion: each child collapses to a fixed 40px section row.
    fn layout_accordion<'a>(
        &self,
        node: &'a Node,
        x: f64,
        y: f64,
        cx: &Constraints,
    ) -> LayoutBox<'a> {
        let size = self.measure(node, cx);
        let children = node
            .children
            .iter()
            .enumerate()
            .map(|(i, child)| {
                let row_y = y + ACCORDION_ROW * i as f64;
                let row_cx = Constraints {
                    max_width: (size.width - 44.0).max(0.0),
                    max_height: Some(ACCORDION_ROW),
                    in_header: false,
                };
                let mut child_box = self.layout(child, x + 12.0, row_y, &row_cx);
                let dy = (ACCORDION_ROW - child_box.height) / 2.0 - (child_box.y - row_y);
                shift_y(&mut child_box, dy);
                child_box
            })
            .collect();
        LayoutBox {
            x,
            y,
            width: size.width,
            height: size.height,
            node: Some(node),
            children,
            padding: Edges::default(),
        }
    }

    /// Tabs: 40px tab bar, panels stacked beneath it.
    fn layout_tabs<'a>(&self, node: &'a Node, x: f64, y: f64, cx: &Constraints) -> LayoutBox<'a> {
        let size = self.measure(node, cx);
        let gap = node.attrs.gap_or(CONTAINER_GAP);
        let panel_cx = Constraints {
            max_width: size.width,
            max_height: None,
            in_header: false,
        };
        let mut cursor = y + 40.0 + 8.0;
        let children = node
            .children
            .iter()
            .map(|child| {
                let child_box = self.layout(child, x, cursor, &panel_cx);
                cursor = child_box.y + child_box.height + gap;
                child_box
            })
            .collect();
        LayoutBox {
            x,
            y,
            width: size.width,
            height: size.height,
            node: Some(node),
            children,
            padding: Edges::default(),
        }
    }

    // ── Page orchestration ─────────────────────────────────────

    /// Lay out a page's children under one of the two page strategies.
    ///
    /// Fixed strategy (any direct Header/Main/Footer child): header
    /// pinned to the top, footer pinned to the bottom, everything else
    /// resolved as a flex column filling the band between them, clipped
    /// to that band. Simple strategy otherwise: a padded vertical stack
    /// with uniform gap, optional whole-block centering, and automatic
    /// horizontal centering for standalone Card/Modal children.
    pub fn layout_page<'a>(&self, page: &'a Node, padding: f64) -> PageLayout<'a> {
        let width = self.page_width;
        let height = self.page_height;
        let has_frame = page.children.iter().any(|c| {
            matches!(
                c.kind,
                NodeKind::Header | NodeKind::Main | NodeKind::Footer
            )
        });
        debug!(
            "laying out page {}x{} ({} strategy)",
            width,
            height,
            if has_frame { "fixed" } else { "stack" }
        );
        if has_frame {
            self.layout_page_fixed(page)
        } else {
            self.layout_page_stack(page, padding)
        }
    }

    fn layout_page_fixed<'a>(&self, page: &'a Node) -> PageLayout<'a> {
        let width = self.page_width;
        let height = self.page_height;
        let page_cx = Constraints::new(width, Some(height));

        let header_h = page
            .children
            .iter()
            .find(|c| matches!(c.kind, NodeKind::Header))
            .map(|c| self.measure(c, &page_cx).height)
            .unwrap_or(0.0);
        let footer_h = page
            .children
            .iter()
            .find(|c| matches!(c.kind, NodeKind::Footer))
            .map(|c| self.measure(c, &page_cx).height)
            .unwrap_or(0.0);
        let band_y = header_h;
        let band_h = (height - header_h - footer_h).max(0.0);

        // Resolve the band children as one flex column so Main (and
        // shell rows) absorb the leftover height.
        let band_cx = Constraints::new(width, Some(band_h));
        let band_nodes: Vec<&Node> = page
            .children
            .iter()
            .filter(|c| !matches!(c.kind, NodeKind::Header | NodeKind::Footer))
            .collect();
        let items: Vec<FlexItem> = band_nodes
            .iter()
            .map(|child| {
                let size = self.measure(child, &band_cx);
                match self.classify(child, Direction::Col, &band_cx) {
                    FlexRole::Fixed(v) => FlexItem {
                        basis: Basis::Length(v),
                        grow: 0.0,
                        shrink: 0.0,
                        min_size: v,
                        max_size: v,
                        content_size: size.height,
                        cross_size: size.width,
                        align_self: None,
                    },
                    FlexRole::Grow { basis, min } => FlexItem {
                        basis: Basis::Length(basis),
                        grow: 1.0,
                        shrink: 1.0,
                        min_size: min,
                        max_size: f64::INFINITY,
                        content_size: size.height,
                        cross_size: size.width,
                        align_self: None,
                    },
                    FlexRole::Natural => FlexItem {
                        basis: Basis::Content,
                        grow: 0.0,
                        shrink: 1.0,
                        min_size: 0.0,
                        max_size: f64::INFINITY,
                        content_size: size.height,
                        cross_size: size.width,
                        align_self: None,
                    },
                }
            })
            .collect();
        let config = FlexConfig {
            main_size: band_h,
            cross_size: Some(width),
            justify: Justify::Start,
            align: Align::Start,
            gap: page.attrs.gap_or(0.0),
        };
        let resolved = compute_flex_layout(&items, &config);

        // Re-assemble in document order.
        let mut band_iter = band_nodes.iter().zip(&resolved.items);
        let mut children = Vec::with_capacity(page.children.len());
        for child in &page.children {
            match child.kind {
                NodeKind::Header => {
                    let cx = Constraints::new(width, Some(header_h));
                    children.push(PageChild {
                        layout: self.layout(child, 0.0, 0.0, &cx),
                        clipped: false,
                    });
                }
                NodeKind::Footer => {
                    let cx = Constraints::new(width, Some(footer_h));
                    children.push(PageChild {
                        layout: self.layout(child, 0.0, height - footer_h, &cx),
                        clipped: false,
                    });
                }
                _ => {
                    let (node, item) = band_iter
                        .next()
                        .expect("band items track non-header/footer children");
                    let cx = Constraints::new(width, Some(item.main_size));
                    let mut layout =
                        self.layout(node, 0.0, band_y + item.main_pos, &cx);
                    layout.height = item.main_size;
                    children.push(PageChild {
                        layout,
                        clipped: true,
                    });
                }
            }
        }

        PageLayout {
            width,
            height,
            children,
            clip: Some((0.0, band_y, width, band_h)),
        }
    }

    fn layout_page_stack<'a>(&self, page: &'a Node, padding: f64) -> PageLayout<'a> {
        let width = self.page_width;
        let height = self.page_height;
        let gap = page.attrs.gap_or(16.0);
        let inner_w = (width - 2.0 * padding).max(0.0);
        let cx = Constraints::new(inner_w, Some((height - 2.0 * padding).max(0.0)));

        // First pass: natural sizes, to know the block extent.
        let sizes: Vec<Size> = page
            .children
            .iter()
            .map(|c| self.measure(c, &cx))
            .collect();
        let block_h: f64 = sizes.iter().map(|s| s.height).sum::<f64>()
            + gap * page.children.len().saturating_sub(1) as f64;

        let centered = page.attrs.centered.unwrap_or(false);
        let mut cursor = if centered {
            ((height - block_h) / 2.0).max(padding)
        } else {
            padding
        };

        let children = page
            .children
            .iter()
            .zip(&sizes)
            .map(|(child, size)| {
                // Standalone overlays and cards sit in the horizontal
                // middle even on uncentered pages.
                let auto_center = centered
                    || matches!(child.kind, NodeKind::Card { .. } | NodeKind::Modal { .. });
                let x = if auto_center {
                    (width - size.width) / 2.0
                } else {
                    padding
                };
                let layout = self.layout(child, x.max(padding), cursor, &cx);
                cursor += size.height + gap;
                PageChild {
                    layout,
                    clipped: false,
                }
            })
            .collect();

        PageLayout {
            width,
            height,
            children,
            clip: None,
        }
    }
}

// ── Small lookup helpers ───────────────────────────────────────

/// Explicit height against a possibly unbounded axis. `full` resolves
/// to the bound when there is one and falls back to content sizing
/// when there isn't, so infinity never enters a measured size.
fn explicit_height(attrs: &Attrs, max_height: Option<f64>) -> Option<f64> {
    match attrs.h {
        Some(Dim::Px(v)) => Some(v),
        Some(Dim::Keyword(_)) => max_height,
        None => None,
    }
}

fn label_band(label: &Option<String>) -> f64 {
    if label.is_some() {
        LABEL_BAND
    } else {
        0.0
    }
}

fn title_font(level: Option<u8>) -> f64 {
    let level = level.unwrap_or(1).clamp(1, 4);
    24.0 - 2.0 * (level as f64 - 1.0)
}

/// Avatar diameter by named size; headers shrink the default a step.
fn avatar_size(name: Option<&str>, in_header: bool) -> f64 {
    match name {
        Some("xs") => 24.0,
        Some("sm") => 32.0,
        Some("md") => 40.0,
        Some("lg") => 56.0,
        Some("xl") => 72.0,
        _ if in_header => 32.0,
        _ => 40.0,
    }
}

fn icon_size(name: Option<&str>) -> f64 {
    match name {
        Some("sm") => 16.0,
        Some("lg") => 32.0,
        _ => 24.0,
    }
}

/// Band containers default to 16px horizontal padding only.
fn band_padding(attrs: &Attrs) -> Edges {
    let mut pad = attrs.padding(0.0);
    if attrs.pl.or(attrs.px).or(attrs.p).is_none() {
        pad.left = BAND_PADDING_X;
    }
    if attrs.pr.or(attrs.px).or(attrs.p).is_none() {
        pad.right = BAND_PADDING_X;
    }
    pad
}

fn axis_split(dir: Direction, size: Size) -> (f64, f64) {
    match dir {
        Direction::Row => (size.width, size.height),
        Direction::Col => (size.height, size.width),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Attrs, Dim, NodeKind};

    fn engine(text: &HeuristicText) -> LayoutEngine<'_> {
        LayoutEngine::new(800.0, 600.0, text)
    }

    fn text_node(content: &str) -> Node {
        Node::text(content)
    }

    #[test]
    fn text_width_heuristic() {
        let t = HeuristicText;
        let e = engine(&t);
        let size = e.measure(
            &text_node("hello"),
            &Constraints::new(800.0, None),
        );
        // 0.6 * 14 * 5
        assert!((size.width - 42.0).abs() < 0.001);
        assert!((size.height - TEXT_LINE).abs() < 0.001);
    }

    #[test]
    fn header_default_height() {
        let t = HeuristicText;
        let e = engine(&t);
        let header = Node::with_children(NodeKind::Header, vec![text_node("App")]);
        let size = e.measure(&header, &Constraints::new(800.0, Some(600.0)));
        assert_eq!(size.height, HEADER_HEIGHT);
        assert_eq!(size.width, 800.0);
    }

    #[test]
    fn sidebar_default_width() {
        let t = HeuristicText;
        let e = engine(&t);
        let sidebar = Node::new(NodeKind::Sidebar);
        let size = e.measure(&sidebar, &Constraints::new(800.0, Some(500.0)));
        assert_eq!(size.width, SIDEBAR_WIDTH);
        assert_eq!(size.height, 500.0);
    }

    #[test]
    fn card_width_clamps_to_constraint() {
        let t = HeuristicText;
        let e = engine(&t);
        let card = Node::new(NodeKind::Card { title: None });
        let size = e.measure(&card, &Constraints::new(300.0, None));
        assert_eq!(size.width, 300.0);
        let size = e.measure(&card, &Constraints::new(800.0, None));
        assert_eq!(size.width, CARD_WIDTH);
    }

    #[test]
    fn card_height_sums_children_gap_and_padding() {
        let t = HeuristicText;
        let e = engine(&t);
        let card = Node::with_children(
            NodeKind::Card { title: None },
            vec![text_node("one"), text_node("two")],
        );
        let size = e.measure(&card, &Constraints::new(800.0, None));
        // h1 + h2 + gap 16 + padding 16 top and bottom
        assert!((size.height - (20.0 + 20.0 + 16.0 + 32.0)).abs() < 0.001);
    }

    #[test]
    fn input_label_reserves_band() {
        let t = HeuristicText;
        let e = engine(&t);
        let bare = Node::new(NodeKind::Input {
            label: None,
            placeholder: None,
        });
        let labeled = Node::new(NodeKind::Input {
            label: Some("Email".to_string()),
            placeholder: None,
        });
        let cx = Constraints::new(800.0, None);
        assert_eq!(e.measure(&bare, &cx).height, INPUT_HEIGHT);
        assert_eq!(e.measure(&labeled, &cx).height, INPUT_HEIGHT + LABEL_BAND);
    }

    #[test]
    fn dropdown_face_label_adds_no_band() {
        let t = HeuristicText;
        let e = engine(&t);
        let dropdown = Node::new(NodeKind::Dropdown {
            label: "Actions".to_string(),
            items: vec!["Edit".to_string(), "Delete".to_string()],
        });
        let size = e.measure(&dropdown, &Constraints::new(800.0, None));
        assert_eq!(size.height, INPUT_HEIGHT);
    }

    #[test]
    fn avatar_shrinks_in_header() {
        let t = HeuristicText;
        let e = engine(&t);
        let avatar = Node::new(NodeKind::Avatar { name: None });
        let normal = Constraints::new(800.0, None);
        let header = Constraints {
            in_header: true,
            ..normal
        };
        assert_eq!(e.measure(&avatar, &normal).width, 40.0);
        assert_eq!(e.measure(&avatar, &header).width, 32.0);
    }

    #[test]
    fn measurement_is_deterministic() {
        let t = HeuristicText;
        let e = engine(&t);
        let row = Node::with_children(
            NodeKind::Row,
            vec![text_node("alpha"), text_node("beta"), text_node("gamma")],
        );
        let cx = Constraints::new(640.0, Some(480.0));
        let a = e.measure(&row, &cx);
        let b = e.measure(&row, &cx);
        assert_eq!(a, b);
    }

    #[test]
    fn row_fixed_children_space_between() {
        let t = HeuristicText;
        let e = engine(&t);
        let mut row = Node::with_children(
            NodeKind::Row,
            vec![
                Node::new(NodeKind::Placeholder { label: None }).with_attrs(Attrs {
                    w: Some(Dim::Px(100.0)),
                    h: Some(Dim::Px(40.0)),
                    ..Default::default()
                }),
                Node::new(NodeKind::Placeholder { label: None }).with_attrs(Attrs {
                    w: Some(Dim::Px(100.0)),
                    h: Some(Dim::Px(40.0)),
                    ..Default::default()
                }),
            ],
        );
        row.attrs.w = Some(Dim::Px(300.0));
        row.attrs.gap = Some(10.0);
        row.attrs.justify = Some(Justify::Between);

        let root = e.layout(&row, 0.0, 0.0, &Constraints::new(300.0, None));
        assert!((root.children[0].x - 0.0).abs() < 0.01);
        assert!((root.children[1].x - 200.0).abs() < 0.01);
    }

    #[test]
    fn col_flex_child_absorbs_leftover_height() {
        let t = HeuristicText;
        let e = engine(&t);
        let mut col = Node::with_children(
            NodeKind::Col,
            vec![
                Node::new(NodeKind::Placeholder { label: None }).with_attrs(Attrs {
                    h: Some(Dim::Px(50.0)),
                    ..Default::default()
                }),
                Node::with_children(NodeKind::Main, vec![]),
            ],
        );
        col.attrs.h = Some(Dim::Px(250.0));
        col.attrs.gap = Some(10.0);

        let root = e.layout(&col, 0.0, 0.0, &Constraints::new(400.0, Some(250.0)));
        assert!((root.children[0].height - 50.0).abs() < 0.01);
        assert!((root.children[1].height - 190.0).abs() < 0.01);
        assert!((root.children[1].y - 60.0).abs() < 0.01);
    }

    #[test]
    fn header_children_vertically_centered() {
        let t = HeuristicText;
        let e = engine(&t);
        let header = Node::with_children(NodeKind::Header, vec![text_node("Brand")]);
        let root = e.layout(&header, 0.0, 0.0, &Constraints::new(800.0, Some(600.0)));
        assert_eq!(root.height, HEADER_HEIGHT);
        let child = &root.children[0];
        assert!((child.y - (HEADER_HEIGHT - child.height) / 2.0).abs() < 0.01);
    }

    #[test]
    fn modal_centers_against_page() {
        let t = HeuristicText;
        let e = LayoutEngine::new(800.0, 600.0, &t);
        let modal = Node::with_children(
            NodeKind::Modal { title: None },
            vec![text_node("Are you sure?")],
        );
        // Position args are ignored for modals.
        let root = e.layout(&modal, 37.0, 411.0, &Constraints::new(800.0, Some(600.0)));
        assert!((root.x - (800.0 - root.width) / 2.0).abs() < 0.01);
        assert!((root.y - (600.0 - root.height) / 2.0).abs() < 0.01);
    }

    #[test]
    fn fixed_page_strategy_pins_and_clips() {
        let t = HeuristicText;
        let e = LayoutEngine::new(800.0, 600.0, &t);
        let page = Node::with_children(
            NodeKind::Page {
                title: None,
                device: None,
                viewport: None,
            },
            vec![
                Node::with_children(NodeKind::Header, vec![]),
                Node::with_children(NodeKind::Main, vec![]),
                Node::with_children(NodeKind::Footer, vec![]),
            ],
        );
        let out = e.layout_page(&page, 20.0);
        let (cy, ch) = out.clip.map(|(_, y, _, h)| (y, h)).unwrap();
        assert_eq!(cy, HEADER_HEIGHT);
        assert_eq!(ch, 600.0 - HEADER_HEIGHT - FOOTER_HEIGHT);

        assert_eq!(out.children[0].layout.y, 0.0);
        assert!(!out.children[0].clipped);
        assert!(out.children[1].clipped);
        assert!((out.children[1].layout.height - ch).abs() < 0.01);
        assert_eq!(out.children[2].layout.y, 600.0 - FOOTER_HEIGHT);
    }

    #[test]
    fn stack_page_centers_cards() {
        let t = HeuristicText;
        let e = LayoutEngine::new(800.0, 600.0, &t);
        let page = Node::with_children(
            NodeKind::Page {
                title: None,
                device: None,
                viewport: None,
            },
            vec![Node::with_children(
                NodeKind::Card { title: None },
                vec![Node::text("hi")],
            )],
        );
        let out = e.layout_page(&page, 20.0);
        let card = &out.children[0].layout;
        assert!((card.x - (800.0 - card.width) / 2.0).abs() < 0.01);
    }

    #[test]
    fn full_height_against_unbounded_axis_is_content_sized() {
        let t = HeuristicText;
        let e = engine(&t);
        let json = r#"{
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
        }"#;
        let card: Node = serde_json::from_str(json).unwrap();
        let size = e.measure(&card, &Constraints::new(800.0, None));
        assert!(size.height.is_finite());
        // Row collapses to its content line; card adds 16px padding
        // top and bottom.
        assert!((size.height - 52.0).abs() < 0.001);
    }

    #[test]
    fn constraint_narrowing_keeps_the_header_flag() {
        let cx = Constraints {
            in_header: true,
            ..Constraints::new(800.0, Some(600.0))
        };
        let narrowed = cx.with_width(300.0).with_height(Some(100.0));
        assert!(narrowed.in_header);
        assert_eq!(narrowed.max_width, 300.0);
        assert_eq!(narrowed.max_height, Some(100.0));
    }

    #[test]
    fn unknown_measures_to_nothing() {
        let t = HeuristicText;
        let e = engine(&t);
        let size = e.measure(&Node::new(NodeKind::Unknown), &Constraints::new(800.0, None));
        assert_eq!(size, Size::default());
    }
}
