//! # Sketchwire
//!
//! A wireframe-to-SVG rendering engine.
//!
//! Wireframe tools usually lean on a browser: build a DOM, let the
//! layout engine run, screenshot the result. That means a headless
//! browser in every pipeline that wants a picture of a mockup.
//!
//! Sketchwire does the layout itself. A typed node tree goes through a
//! bottom-up measurement pass and a top-down placement pass — a
//! flexbox-shaped model with the freeze-loop flexible length
//! resolution — and comes out as absolute pixel boxes that a plain
//! tree walk turns into SVG. No DOM, no browser, deterministic output:
//! the same document renders to byte-identical markup every time.
//!
//! ## Architecture
//!
//! ```text
//! Input (JSON/API)
//!       ↓
//!   [model]    — Wireframe tree: node kinds, layout attrs
//!       ↓
//!   [layout]   — Measure pass, flex resolution, placement
//!       ↓
//!   [render]   — SVG document assembly + per-kind widgets
//! ```

pub mod error;
pub mod icons;
pub mod layout;
pub mod model;
pub mod render;
pub mod theme;
pub mod viewport;

pub use error::SketchError;
pub use model::{Attrs, Dim, Node, NodeKind};
pub use render::{RenderOptions, SvgOutput, SvgRenderer};
pub use theme::Theme;

/// Render a wireframe page to an SVG document.
///
/// This is the primary entry point. Takes the page node and returns
/// the SVG text plus the resolved page dimensions.
pub fn render(page: &Node, options: RenderOptions) -> SvgOutput {
    SvgRenderer::new(options).render(page)
}

/// Render a wireframe page described as JSON to an SVG document.
pub fn render_json(json: &str) -> Result<SvgOutput, SketchError> {
    let page: Node = serde_json::from_str(json)?;
    Ok(render(&page, RenderOptions::default()))
}
