//! Per-kind SVG fragment emission. Each widget owns its visual
//! vocabulary but they all share a few rules: every piece of user text
//! goes through [`esc`], coordinates come straight from the already
//! resolved [`LayoutBox`], and a kind this pass can't draw becomes a
//! comment fragment — rendering failure is node-local, never
//! document-fatal.

use std::borrow::Cow;
use std::fmt::Write as _;

use crate::icons::get_icon_data;
use crate::layout::LayoutBox;
use crate::model::NodeKind;
use crate::theme::Theme;

/// Format a coordinate with at most two decimals and no trailing
/// zeros, so output stays byte-stable and diff-friendly.
pub fn num(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

/// XML-escape text content (`& < > " '`).
pub fn esc(text: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(text)
}

/// Emit a box and its children, in document order, children on top.
pub fn render_tree(b: &LayoutBox<'_>, theme: &Theme, out: &mut String) {
    fragment(b, theme, out);
    for child in &b.children {
        render_tree(child, theme, out);
    }
}

struct Frame {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

fn fragment(b: &LayoutBox<'_>, theme: &Theme, out: &mut String) {
    let Some(node) = b.node else {
        return;
    };
    let f = Frame {
        x: b.x,
        y: b.y,
        w: b.width,
        h: b.height,
    };
    match &node.kind {
        // Pure layout nodes draw nothing of their own.
        NodeKind::Page { .. } | NodeKind::Row | NodeKind::Col | NodeKind::Main => {}

        NodeKind::Header => {
            rect(out, f.x, f.y, f.w, f.h, "#f8fafc", None, 0.0);
            hline(out, f.x, f.x + f.w, f.y + f.h, &theme.border);
        }
        NodeKind::Footer => {
            rect(out, f.x, f.y, f.w, f.h, "#f8fafc", None, 0.0);
            hline(out, f.x, f.x + f.w, f.y, &theme.border);
        }
        NodeKind::Sidebar => {
            rect(out, f.x, f.y, f.w, f.h, "#f8fafc", None, 0.0);
            vline(out, f.x + f.w, f.y, f.y + f.h, &theme.border);
        }
        NodeKind::Nav => {
            hline(out, f.x, f.x + f.w, f.y + f.h, &theme.border);
        }

        NodeKind::Card { title } => {
            rect(out, f.x, f.y, f.w, f.h, "#ffffff", Some(&theme.border), 8.0);
            if let Some(title) = title {
                text(out, f.x + b.padding.left, f.y + b.padding.top + 12.0, 16.0, &theme.foreground, Some(600), None, title);
            }
        }
        NodeKind::Modal { title } => {
            rect(out, f.x, f.y, f.w, f.h, "#ffffff", Some(&theme.border), 12.0);
            if let Some(title) = title {
                text(out, f.x + b.padding.left, f.y + b.padding.top + 12.0, 18.0, &theme.foreground, Some(600), None, title);
            }
        }
        NodeKind::Drawer { title } => {
            rect(out, f.x, f.y, f.w, f.h, "#ffffff", Some(&theme.border), 0.0);
            if let Some(title) = title {
                text(out, f.x + b.padding.left, f.y + b.padding.top + 12.0, 16.0, &theme.foreground, Some(600), None, title);
            }
        }
        NodeKind::Accordion => {
            let rows = node.children.len().max(1);
            let row_h = f.h / rows as f64;
            for i in 0..rows {
                let ry = f.y + row_h * i as f64;
                rect(out, f.x, ry, f.w, row_h, "#ffffff", Some(&theme.border), 0.0);
                icon(out, "chevron-down", f.x + f.w - 28.0, ry + (row_h - 16.0) / 2.0, 16.0, &theme.muted);
            }
        }

        NodeKind::Text { content } => {
            text(out, f.x, baseline(f.y, f.h, 14.0), 14.0, &theme.foreground, None, None, content);
        }
        NodeKind::Title { content, level } => {
            let font = 24.0 - 2.0 * (level.unwrap_or(1).clamp(1, 4) as f64 - 1.0);
            text(out, f.x, baseline(f.y, f.h, font), font, &theme.foreground, Some(700), None, content);
        }
        NodeKind::Link { content, .. } => {
            text(out, f.x, baseline(f.y, f.h, 14.0), 14.0, &theme.primary, None, None, content);
            hline(out, f.x, f.x + f.w, f.y + f.h - 2.0, &theme.primary);
        }

        NodeKind::Button { label, icon: icon_name } => {
            let outline = matches!(node.attrs.variant.as_deref(), Some("outline" | "ghost"));
            let (fill, label_color) = if outline {
                ("#ffffff", theme.primary.as_str())
            } else {
                (theme.primary.as_str(), "#ffffff")
            };
            let stroke = if outline { Some(theme.primary.as_str()) } else { None };
            rect(out, f.x, f.y, f.w, f.h, fill, stroke, 6.0);
            let mut tx = f.x + f.w / 2.0;
            if let Some(name) = icon_name {
                let size = 16.0;
                icon(out, name, f.x + 12.0, f.y + (f.h - size) / 2.0, size, label_color);
                tx += 8.0;
            }
            text(out, tx, baseline(f.y, f.h, 14.0), 14.0, label_color, Some(500), Some("middle"), label);
        }
        NodeKind::Input { label, placeholder } => {
            field(out, theme, &f, label.as_deref(), placeholder.as_deref(), f.h);
        }
        NodeKind::Textarea { label, placeholder } => {
            let field_h = f.h - label.as_ref().map(|_| 24.0).unwrap_or(0.0);
            let fy = f.y + f.h - field_h;
            if let Some(label) = label {
                text(out, f.x, f.y + 14.0, 13.0, &theme.secondary, Some(500), None, label);
            }
            rect(out, f.x, fy, f.w, field_h, "#ffffff", Some(&theme.border), 6.0);
            if let Some(placeholder) = placeholder {
                text(out, f.x + 12.0, fy + 22.0, 14.0, &theme.muted, None, None, placeholder);
            }
        }
        NodeKind::Select { label, .. } => {
            field(out, theme, &f, label.as_deref(), None, f.h);
            let field_h = f.h - label.as_ref().map(|_| 24.0).unwrap_or(0.0);
            let fy = f.y + f.h - field_h;
            icon(out, "chevron-down", f.x + f.w - 26.0, fy + (field_h - 16.0) / 2.0, 16.0, &theme.muted);
        }
        NodeKind::Checkbox { label, checked } => {
            rect(out, f.x, f.y + 2.0, 16.0, 16.0, "#ffffff", Some(&theme.border), 3.0);
            if *checked {
                icon(out, "check", f.x + 2.0, f.y + 4.0, 12.0, &theme.primary);
            }
            text(out, f.x + 24.0, baseline(f.y, f.h, 14.0), 14.0, &theme.foreground, None, None, label);
        }
        NodeKind::Radio { label, checked } => {
            circle(out, f.x + 8.0, f.y + 10.0, 8.0, "#ffffff", Some(&theme.border));
            if *checked {
                circle(out, f.x + 8.0, f.y + 10.0, 4.0, &theme.primary, None);
            }
            text(out, f.x + 24.0, baseline(f.y, f.h, 14.0), 14.0, &theme.foreground, None, None, label);
        }
        NodeKind::Switch { label, on } => {
            let track = if *on { theme.primary.as_str() } else { theme.muted.as_str() };
            rect(out, f.x, f.y, 40.0, 22.0, track, None, 11.0);
            let knob_x = if *on { f.x + 29.0 } else { f.x + 11.0 };
            circle(out, knob_x, f.y + 11.0, 8.0, "#ffffff", None);
            if let Some(label) = label {
                text(out, f.x + 48.0, baseline(f.y, f.h, 14.0), 14.0, &theme.foreground, None, None, label);
            }
        }
        NodeKind::Slider { value } => {
            let frac = (value.unwrap_or(50.0) / 100.0).clamp(0.0, 1.0);
            let cy = f.y + f.h / 2.0;
            hline(out, f.x, f.x + f.w, cy, &theme.border);
            hline(out, f.x, f.x + f.w * frac, cy, &theme.primary);
            circle(out, f.x + f.w * frac, cy, 7.0, "#ffffff", Some(&theme.primary));
        }

        NodeKind::Image { .. } => {
            rect(out, f.x, f.y, f.w, f.h, "#f1f5f9", Some(&theme.border), 0.0);
            // The classic crossed-box image placeholder.
            line(out, f.x, f.y, f.x + f.w, f.y + f.h, &theme.muted);
            line(out, f.x + f.w, f.y, f.x, f.y + f.h, &theme.muted);
        }
        NodeKind::Placeholder { label } => {
            let _ = write!(
                out,
                r##"<rect x="{}" y="{}" width="{}" height="{}" fill="#f8fafc" stroke="{}" stroke-dasharray="6 4"/>"##,
                num(f.x), num(f.y), num(f.w), num(f.h), theme.muted
            );
            if let Some(label) = label {
                text(out, f.x + f.w / 2.0, baseline(f.y, f.h, 13.0), 13.0, &theme.muted, None, Some("middle"), label);
            }
        }
        NodeKind::Avatar { name } => {
            let r = f.w / 2.0;
            circle(out, f.x + r, f.y + r, r, "#e2e8f0", Some(&theme.border));
            let initials = initials(name.as_deref());
            if !initials.is_empty() {
                let font = (f.w * 0.4).round();
                text(out, f.x + r, baseline(f.y, f.h, font), font, &theme.secondary, Some(500), Some("middle"), &initials);
            }
        }
        NodeKind::Badge { label } => {
            rect(out, f.x, f.y, f.w, f.h, "#eef2ff", Some(&theme.primary), 10.0);
            text(out, f.x + f.w / 2.0, baseline(f.y, f.h, 12.0), 12.0, &theme.primary, Some(500), Some("middle"), label);
        }
        NodeKind::Icon { name } => {
            icon(out, name, f.x, f.y, f.w, &theme.foreground);
        }

        NodeKind::Table { columns, rows } => {
            table(out, theme, &f, columns, rows);
        }
        NodeKind::List { items, ordered } => {
            for (i, item) in items.iter().enumerate() {
                let row_y = f.y + 28.0 * i as f64;
                if *ordered {
                    text(out, f.x + 4.0, baseline(row_y, 28.0, 14.0), 14.0, &theme.secondary, None, None, &format!("{}.", i + 1));
                } else {
                    circle(out, f.x + 6.0, row_y + 14.0, 3.0, &theme.secondary, None);
                }
                text(out, f.x + 20.0, baseline(row_y, 28.0, 14.0), 14.0, &theme.foreground, None, None, item);
            }
        }

        NodeKind::Alert { content, variant } => {
            let accent = variant_color(theme, variant.as_deref());
            rect(out, f.x, f.y, f.w, f.h, "#f8fafc", Some(accent), 6.0);
            rect(out, f.x, f.y, 4.0, f.h, accent, None, 2.0);
            text(out, f.x + 16.0, baseline(f.y, f.h, 14.0), 14.0, &theme.foreground, None, None, content);
        }
        NodeKind::Toast { content, .. } => {
            rect(out, f.x, f.y, f.w, f.h, "#1e293b", None, 8.0);
            text(out, f.x + 16.0, baseline(f.y, f.h, 14.0), 14.0, "#ffffff", None, None, content);
        }
        NodeKind::Progress { value } => {
            let frac = (value.unwrap_or(50.0) / 100.0).clamp(0.0, 1.0);
            rect(out, f.x, f.y, f.w, f.h, "#e2e8f0", None, 4.0);
            if frac > 0.0 {
                rect(out, f.x, f.y, f.w * frac, f.h, &theme.primary, None, 4.0);
            }
        }
        NodeKind::Spinner => {
            let r = f.w / 2.0 - 2.0;
            let cx = f.x + f.w / 2.0;
            let cy = f.y + f.h / 2.0;
            let _ = write!(
                out,
                r#"<path d="M {} {} A {} {} 0 1 1 {} {}" fill="none" stroke="{}" stroke-width="3" stroke-linecap="round"/>"#,
                num(cx + r), num(cy), num(r), num(r), num(cx), num(cy - r), theme.primary
            );
        }

        NodeKind::Tooltip { content } => {
            rect(out, f.x, f.y, f.w, f.h, "#1e293b", None, 4.0);
            text(out, f.x + f.w / 2.0, baseline(f.y, f.h, 12.0), 12.0, "#ffffff", None, Some("middle"), content);
        }
        NodeKind::Popover { title, content } => {
            rect(out, f.x, f.y, f.w, f.h, "#ffffff", Some(&theme.border), 8.0);
            let mut cursor = f.y + 12.0;
            if let Some(title) = title {
                cursor += 12.0;
                text(out, f.x + 12.0, cursor, 14.0, &theme.foreground, Some(600), None, title);
                cursor += 6.0;
            }
            if let Some(content) = content {
                text(out, f.x + 12.0, cursor + 14.0, 13.0, &theme.secondary, None, None, content);
            }
        }
        NodeKind::Dropdown { label, .. } => {
            rect(out, f.x, f.y, f.w, f.h, "#ffffff", Some(&theme.border), 6.0);
            text(out, f.x + 12.0, baseline(f.y, f.h, 14.0), 14.0, &theme.foreground, None, None, label);
            icon(out, "chevron-down", f.x + f.w - 26.0, f.y + (f.h - 16.0) / 2.0, 16.0, &theme.muted);
        }

        NodeKind::Tabs { tabs, active } => {
            let bar_bottom = f.y + 40.0;
            hline(out, f.x, f.x + f.w, bar_bottom, &theme.border);
            let active = active.unwrap_or(0);
            let mut tab_x = f.x;
            for (i, tab) in tabs.iter().enumerate() {
                let tab_w = 0.6 * 14.0 * tab.chars().count() as f64 + 24.0;
                let color = if i == active { &theme.primary } else { &theme.secondary };
                text(out, tab_x + tab_w / 2.0, baseline(f.y, 40.0, 14.0), 14.0, color, Some(500), Some("middle"), tab);
                if i == active {
                    let _ = write!(
                        out,
                        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="2"/>"#,
                        num(tab_x + 4.0), num(bar_bottom), num(tab_x + tab_w - 4.0), num(bar_bottom), theme.primary
                    );
                }
                tab_x += tab_w;
            }
        }
        NodeKind::Breadcrumb { items } => {
            text(out, f.x, baseline(f.y, f.h, 13.0), 13.0, &theme.secondary, None, None, &items.join(" / "));
        }
        NodeKind::Divider => {
            hline(out, f.x, f.x + f.w, f.y + f.h / 2.0, &theme.border);
        }

        NodeKind::Unknown => {
            out.push_str("<!-- skipped: unsupported node kind -->");
        }
    }
}

// ── Shared primitives ──────────────────────────────────────────

fn rect(out: &mut String, x: f64, y: f64, w: f64, h: f64, fill: &str, stroke: Option<&str>, rx: f64) {
    let _ = write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}""#,
        num(x), num(y), num(w), num(h), fill
    );
    if let Some(stroke) = stroke {
        let _ = write!(out, r#" stroke="{}""#, stroke);
    }
    if rx > 0.0 {
        let _ = write!(out, r#" rx="{}""#, num(rx));
    }
    out.push_str("/>");
}

fn circle(out: &mut String, cx: f64, cy: f64, r: f64, fill: &str, stroke: Option<&str>) {
    let _ = write!(
        out,
        r#"<circle cx="{}" cy="{}" r="{}" fill="{}""#,
        num(cx), num(cy), num(r), fill
    );
    if let Some(stroke) = stroke {
        let _ = write!(out, r#" stroke="{}""#, stroke);
    }
    out.push_str("/>");
}

fn line(out: &mut String, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str) {
    let _ = write!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"/>"#,
        num(x1), num(y1), num(x2), num(y2), stroke
    );
}

fn hline(out: &mut String, x1: f64, x2: f64, y: f64, stroke: &str) {
    line(out, x1, y, x2, y, stroke);
}

fn vline(out: &mut String, x: f64, y1: f64, y2: f64, stroke: &str) {
    line(out, x, y1, x, y2, stroke);
}

#[allow(clippy::too_many_arguments)]
fn text(
    out: &mut String,
    x: f64,
    y: f64,
    size: f64,
    fill: &str,
    weight: Option<u32>,
    anchor: Option<&str>,
    content: &str,
) {
    let _ = write!(
        out,
        r#"<text x="{}" y="{}" font-size="{}" fill="{}""#,
        num(x), num(y), num(size), fill
    );
    if let Some(weight) = weight {
        let _ = write!(out, r#" font-weight="{}""#, weight);
    }
    if let Some(anchor) = anchor {
        let _ = write!(out, r#" text-anchor="{}""#, anchor);
    }
    let _ = write!(out, ">{}</text>", esc(content));
}

/// Baseline y for vertically centered text inside a band.
fn baseline(y: f64, h: f64, font: f64) -> f64 {
    y + h / 2.0 + font * 0.35
}

/// Scale an icon's 24x24 primitives to `size` at `(x, y)`. Missing
/// names draw nothing.
fn icon(out: &mut String, name: &str, x: f64, y: f64, size: f64, stroke: &str) {
    let Some(shapes) = get_icon_data(name) else {
        return;
    };
    let _ = write!(
        out,
        r#"<g transform="translate({} {}) scale({})" fill="none" stroke="{}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
        num(x), num(y), num(size / 24.0), stroke
    );
    for shape in shapes {
        let _ = write!(out, "<{}", shape.tag);
        for (key, value) in shape.attrs {
            let _ = write!(out, r#" {}="{}""#, key, value);
        }
        out.push_str("/>");
    }
    out.push_str("</g>");
}

/// Shared Input/Select chrome: optional label band above a bordered
/// field with optional placeholder text.
fn field(
    out: &mut String,
    theme: &Theme,
    f: &Frame,
    label: Option<&str>,
    placeholder: Option<&str>,
    total_h: f64,
) {
    let label_band = if label.is_some() { 24.0 } else { 0.0 };
    let field_h = total_h - label_band;
    let fy = f.y + label_band;
    if let Some(label) = label {
        text(out, f.x, f.y + 14.0, 13.0, &theme.secondary, Some(500), None, label);
    }
    rect(out, f.x, fy, f.w, field_h, "#ffffff", Some(&theme.border), 6.0);
    if let Some(placeholder) = placeholder {
        text(out, f.x + 12.0, baseline(fy, field_h, 14.0), 14.0, &theme.muted, None, None, placeholder);
    }
}

fn table(out: &mut String, theme: &Theme, f: &Frame, columns: &[String], rows: &[Vec<String>]) {
    let ncols = columns.len().max(1);
    let col_w = f.w / ncols as f64;
    rect(out, f.x, f.y, f.w, 40.0, "#f8fafc", Some(&theme.border), 0.0);
    for (i, column) in columns.iter().enumerate() {
        text(
            out,
            f.x + col_w * i as f64 + 12.0,
            baseline(f.y, 40.0, 13.0),
            13.0,
            &theme.secondary,
            Some(600),
            None,
            column,
        );
    }
    let mut row_y = f.y + 40.0;
    for row in rows {
        hline(out, f.x, f.x + f.w, row_y + 36.0, &theme.border);
        for (i, cell) in row.iter().take(ncols).enumerate() {
            text(
                out,
                f.x + col_w * i as f64 + 12.0,
                baseline(row_y, 36.0, 13.0),
                13.0,
                &theme.foreground,
                None,
                None,
                cell,
            );
        }
        row_y += 36.0;
    }
    // Outer frame drawn last so row separators don't poke through.
    let _ = write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}"/>"#,
        num(f.x), num(f.y), num(f.w), num(f.h), theme.border
    );
}

fn variant_color<'t>(theme: &'t Theme, variant: Option<&str>) -> &'t str {
    match variant {
        Some("success") => "#16a34a",
        Some("warning") => "#d97706",
        Some("danger" | "error") => "#dc2626",
        Some(name) => theme.color(name),
        None => &theme.primary,
    }
}

/// Up to two initial letters from a display name.
fn initials(name: Option<&str>) -> String {
    name.map(|n| {
        n.split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_trims_trailing_zeros() {
        assert_eq!(num(200.0), "200");
        assert_eq!(num(18.5), "18.5");
        assert_eq!(num(100.0 / 3.0), "33.33");
    }

    #[test]
    fn esc_covers_all_five() {
        assert_eq!(
            esc(r#"<a & "b" 'c'>"#),
            "&lt;a &amp; &quot;b&quot; &apos;c&apos;&gt;"
        );
    }

    #[test]
    fn initials_from_name() {
        assert_eq!(initials(Some("ada lovelace")), "AL");
        assert_eq!(initials(Some("Prince")), "P");
        assert_eq!(initials(None), "");
    }

    #[test]
    fn variant_colors() {
        let theme = Theme::default();
        assert_eq!(variant_color(&theme, Some("danger")), "#dc2626");
        assert_eq!(variant_color(&theme, None), theme.primary);
    }
}
