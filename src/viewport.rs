//! Device presets and viewport resolution. A page can name a device
//! (`device: "phone"`), give a viewport preset or a literal `"WxH"`
//! string, or leave both out and take the renderer default.

use serde::Serialize;

pub const DEFAULT_WIDTH: f64 = 800.0;
pub const DEFAULT_HEIGHT: f64 = 600.0;

/// A resolved page viewport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub category: Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mobile,
    Tablet,
    Desktop,
    Custom,
}

fn preset(name: &str) -> Option<(f64, f64, &'static str, Category)> {
    match name {
        "phone" => Some((375.0, 667.0, "Phone", Category::Mobile)),
        "phone-lg" => Some((390.0, 844.0, "Large Phone", Category::Mobile)),
        "tablet" => Some((810.0, 1080.0, "Tablet", Category::Tablet)),
        "laptop" => Some((1280.0, 800.0, "Laptop", Category::Desktop)),
        "desktop" => Some((1440.0, 900.0, "Desktop", Category::Desktop)),
        _ => None,
    }
}

/// Parse a literal `"WxH"` viewport string like `"390x844"`.
fn parse_dimensions(spec: &str) -> Option<(f64, f64)> {
    let (w, h) = spec.split_once(['x', 'X'])?;
    let width = w.trim().parse::<f64>().ok()?;
    let height = h.trim().parse::<f64>().ok()?;
    if width > 0.0 && height > 0.0 {
        Some((width, height))
    } else {
        None
    }
}

/// Resolve page dimensions from an optional viewport spec and device
/// preset. The viewport spec wins over the device; anything unresolvable
/// falls through to the 800x600 default.
pub fn resolve_viewport(viewport: Option<&str>, device: Option<&str>) -> Viewport {
    if let Some(spec) = viewport {
        if let Some((w, h, label, category)) = preset(spec) {
            return Viewport {
                width: w,
                height: h,
                label: label.to_string(),
                category,
            };
        }
        if let Some((width, height)) = parse_dimensions(spec) {
            return Viewport {
                width,
                height,
                label: spec.to_string(),
                category: Category::Custom,
            };
        }
    }
    if let Some(name) = device {
        if let Some((w, h, label, category)) = preset(name) {
            return Viewport {
                width: w,
                height: h,
                label: label.to_string(),
                category,
            };
        }
    }
    Viewport {
        width: DEFAULT_WIDTH,
        height: DEFAULT_HEIGHT,
        label: "Default".to_string(),
        category: Category::Custom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_device() {
        let vp = resolve_viewport(None, Some("phone"));
        assert_eq!(vp.width, 375.0);
        assert_eq!(vp.category, Category::Mobile);
    }

    #[test]
    fn viewport_string_beats_device() {
        let vp = resolve_viewport(Some("1024x768"), Some("phone"));
        assert_eq!(vp.width, 1024.0);
        assert_eq!(vp.height, 768.0);
        assert_eq!(vp.category, Category::Custom);
    }

    #[test]
    fn garbage_falls_back_to_default() {
        let vp = resolve_viewport(Some("huge"), Some("fridge"));
        assert_eq!(vp.width, DEFAULT_WIDTH);
        assert_eq!(vp.height, DEFAULT_HEIGHT);
    }

    #[test]
    fn zero_dimensions_rejected() {
        let vp = resolve_viewport(Some("0x600"), None);
        assert_eq!(vp.width, DEFAULT_WIDTH);
    }
}
