//! Named color palette for rendered wireframes. Widgets never hardcode
//! hex values; they ask the theme so a whole document can be reskinned
//! from one place.

use serde::{Deserialize, Serialize};

/// The six named colors every widget draws with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
    pub foreground: String,
    pub background: String,
    pub muted: String,
    pub border: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#4f46e5".to_string(),
            secondary: "#64748b".to_string(),
            foreground: "#1e293b".to_string(),
            background: "#ffffff".to_string(),
            muted: "#94a3b8".to_string(),
            border: "#cbd5e1".to_string(),
        }
    }
}

impl Theme {
    /// Look up a color by name; unknown names fall back to `foreground`.
    pub fn color(&self, name: &str) -> &str {
        match name {
            "primary" => &self.primary,
            "secondary" => &self.secondary,
            "foreground" => &self.foreground,
            "background" => &self.background,
            "muted" => &self.muted,
            "border" => &self.border,
            _ => &self.foreground,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_and_unknown() {
        let theme = Theme::default();
        assert_eq!(theme.color("primary"), "#4f46e5");
        assert_eq!(theme.color("nope"), theme.foreground);
    }
}
