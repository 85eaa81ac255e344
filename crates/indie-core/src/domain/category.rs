use chrono::{DateTime, Utc};

/// Swatch colour used when a category's stored colour is not a plain hex value.
pub const DEFAULT_SWATCH_COLOR: &str = "#6366f1";

/// Category entity - a named grouping of posts, addressed by its slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub color: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Link target of the category's own page: `/categories/{slug}`.
    pub fn path(&self) -> String {
        format!("/categories/{}", self.slug)
    }

    /// Colour safe to drop into an inline `background-color` style.
    ///
    /// Accepts `#rgb`, `#rrggbb` and `#rrggbbaa`; anything else falls back to
    /// [`DEFAULT_SWATCH_COLOR`].
    pub fn swatch_color(&self) -> &str {
        let color = self.color.trim();
        let is_hex = color
            .strip_prefix('#')
            .is_some_and(|hex| {
                matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
            });

        if is_hex { color } else { DEFAULT_SWATCH_COLOR }
    }
}
