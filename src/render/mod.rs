//! # SVG Emission
//!
//! Walks the positioned [`LayoutBox`](crate::layout::LayoutBox) tree and
//! turns it into a standalone SVG document. Per-kind fragment emission
//! lives in [`widgets`]; this module owns document assembly, page
//! dimension resolution, and the render-scoped clip state.
//!
//! Clip ids and clip-path definitions are carried in a [`RenderContext`]
//! created fresh inside every `render()` call and threaded explicitly.
//! There is nothing to "remember to reset", and a single
//! [`SvgRenderer`] can be shared across threads — each call owns its
//! whole mutable world.

pub mod widgets;

use std::fmt::Write as _;

use log::debug;

use crate::layout::{HeuristicText, LayoutEngine, TextMeasurer};
use crate::model::{Node, NodeKind};
use crate::theme::Theme;
use crate::viewport;

/// Render configuration. Every field has a documented default; the
/// zero-config path is `RenderOptions::default()`.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Fallback page width when neither attrs nor viewport decide.
    pub width: f64,
    /// Fallback page height.
    pub height: f64,
    /// Uniform output scale factor.
    pub scale: f64,
    /// Page background fill.
    pub background: String,
    /// Inner padding for the simple-stack page strategy.
    pub padding: f64,
    /// Font stack emitted on the content group.
    pub font_family: String,
    /// Color palette widgets draw with.
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: viewport::DEFAULT_WIDTH,
            height: viewport::DEFAULT_HEIGHT,
            scale: 1.0,
            background: "#ffffff".to_string(),
            padding: 20.0,
            font_family: "system-ui, -apple-system, sans-serif".to_string(),
            theme: Theme::default(),
        }
    }
}

/// A finished render: the SVG text plus the resolved page dimensions
/// (pre-scale).
#[derive(Debug, Clone)]
pub struct SvgOutput {
    pub svg: String,
    pub width: f64,
    pub height: f64,
}

/// Mutable state scoped to one `render()` call: the clip-id counter and
/// the accumulated `<clipPath>` definitions.
pub struct RenderContext {
    clip_counter: usize,
    clip_defs: Vec<String>,
}

impl RenderContext {
    fn new() -> Self {
        Self {
            clip_counter: 0,
            clip_defs: Vec::new(),
        }
    }

    /// Register a rectangular clip region and return its fresh id.
    pub fn add_clip_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> String {
        let id = format!("clip{}", self.clip_counter);
        self.clip_counter += 1;
        self.clip_defs.push(format!(
            r#"<clipPath id="{}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath>"#,
            id,
            widgets::num(x),
            widgets::num(y),
            widgets::num(width),
            widgets::num(height)
        ));
        id
    }
}

/// Renders wireframe pages to SVG. Stateless between calls; reuse or
/// share freely.
pub struct SvgRenderer {
    options: RenderOptions,
}

impl SvgRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render one page node to a standalone SVG document.
    pub fn render(&self, page: &Node) -> SvgOutput {
        let (width, height) = self.resolve_dimensions(page);
        let mut ctx = RenderContext::new();
        let text = HeuristicText;
        let engine = LayoutEngine::new(width, height, &text);
        self.render_with(&engine, &mut ctx, page, width, height)
    }

    /// Render with a caller-supplied text measurer (for consumers with
    /// a real shaping backend).
    pub fn render_measured(&self, page: &Node, text: &dyn TextMeasurer) -> SvgOutput {
        let (width, height) = self.resolve_dimensions(page);
        let mut ctx = RenderContext::new();
        let engine = LayoutEngine::new(width, height, text);
        self.render_with(&engine, &mut ctx, page, width, height)
    }

    fn render_with(
        &self,
        engine: &LayoutEngine<'_>,
        ctx: &mut RenderContext,
        page: &Node,
        width: f64,
        height: f64,
    ) -> SvgOutput {
        let layout = engine.layout_page(page, self.options.padding);
        let theme = &self.options.theme;

        let clip_id = layout
            .clip
            .map(|(x, y, w, h)| ctx.add_clip_rect(x, y, w, h));

        let mut body = String::new();
        for child in &layout.children {
            match (child.clipped, clip_id.as_deref()) {
                // The scroll band between pinned header and footer.
                (true, Some(id)) => {
                    let _ = write!(body, r##"<g clip-path="url(#{})">"##, id);
                    widgets::render_tree(&child.layout, theme, &mut body);
                    body.push_str("</g>");
                }
                _ => widgets::render_tree(&child.layout, theme, &mut body),
            }
        }
        debug!("rendered page body: {} bytes, {} clip defs", body.len(), ctx.clip_defs.len());

        let scale = self.options.scale;
        let out_w = width * scale;
        let out_h = height * scale;

        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            widgets::num(out_w),
            widgets::num(out_h),
            widgets::num(out_w),
            widgets::num(out_h)
        );
        svg.push_str("<defs>");
        for def in &ctx.clip_defs {
            svg.push_str(def);
        }
        let _ = write!(
            svg,
            "<style>text{{font-family:{};}}</style>",
            self.options.font_family
        );
        svg.push_str("</defs>");
        let _ = write!(
            svg,
            r#"<rect width="{}" height="{}" fill="{}"/>"#,
            widgets::num(out_w),
            widgets::num(out_h),
            self.options.background
        );
        let _ = write!(svg, r#"<g transform="scale({})">"#, widgets::num(scale));
        svg.push_str(&body);
        svg.push_str("</g></svg>");

        SvgOutput {
            svg,
            width,
            height,
        }
    }

    /// Page pixel dimensions, in strict priority order: explicit attrs,
    /// then viewport/device preset, then renderer defaults.
    fn resolve_dimensions(&self, page: &Node) -> (f64, f64) {
        let (device, viewport_spec) = match &page.kind {
            NodeKind::Page {
                device, viewport, ..
            } => (device.as_deref(), viewport.as_deref()),
            _ => (None, None),
        };

        let preset = if device.is_some() || viewport_spec.is_some() {
            Some(viewport::resolve_viewport(viewport_spec, device))
        } else {
            None
        };

        let width = page
            .attrs
            .width(self.options.width)
            .or(preset.as_ref().map(|v| v.width))
            .unwrap_or(self.options.width);
        let height = page
            .attrs
            .height(self.options.height)
            .or(preset.as_ref().map(|v| v.height))
            .unwrap_or(self.options.height);
        (width, height)
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Attrs, Dim, Node, NodeKind};

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

    #[test]
    fn explicit_attrs_beat_device_preset() {
        let renderer = SvgRenderer::default();
        let mut node = Node::new(NodeKind::Page {
            title: None,
            device: Some("phone".to_string()),
            viewport: None,
        });
        node.attrs = Attrs {
            w: Some(Dim::Px(1000.0)),
            ..Default::default()
        };
        let (w, h) = renderer.resolve_dimensions(&node);
        assert_eq!(w, 1000.0);
        // Height still comes from the preset.
        assert_eq!(h, 667.0);
    }

    #[test]
    fn default_dimensions_without_hints() {
        let renderer = SvgRenderer::default();
        let out = renderer.render(&page(vec![]));
        assert_eq!(out.width, 800.0);
        assert_eq!(out.height, 600.0);
        assert!(out.svg.starts_with("<svg "));
        assert!(out.svg.ends_with("</svg>"));
    }

    #[test]
    fn clip_ids_reset_between_calls() {
        let renderer = SvgRenderer::default();
        let doc = page(vec![
            Node::with_children(NodeKind::Header, vec![]),
            Node::with_children(NodeKind::Main, vec![]),
        ]);
        let first = renderer.render(&doc);
        let second = renderer.render(&doc);
        assert_eq!(first.svg, second.svg);
        assert!(first.svg.contains(r#"clipPath id="clip0""#));
        assert!(!first.svg.contains("clip1"));
    }

    #[test]
    fn scale_multiplies_output_size() {
        let options = RenderOptions {
            scale: 2.0,
            ..Default::default()
        };
        let renderer = SvgRenderer::new(options);
        let out = renderer.render(&page(vec![]));
        assert!(out.svg.contains(r#"width="1600""#));
        assert!(out.svg.contains(r#"transform="scale(2)""#));
        assert_eq!(out.width, 800.0);
    }
}
