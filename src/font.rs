use crate::units::Pt;

/// The weight/slant variant of a font face
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

/// A font attribute snapshot: family, style, and size.
///
/// This is a plain value copy of canvas state, not a handle into the
/// canvas—capture the current font with [`Canvas::font`](crate::Canvas::font),
/// modify the copy freely, and nothing changes on the canvas until the copy
/// is applied with [`Canvas::set_font`](crate::Canvas::set_font). Glyph
/// measurement stays with the canvas; this type carries attributes only.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    pub style: FontStyle,
    pub size: Pt,
}

impl Font {
    pub fn new<S: ToString>(family: S, style: FontStyle, size: Pt) -> Font {
        Font {
            family: family.to_string(),
            style,
            size,
        }
    }

    /// Replace the family, keeping style and size
    pub fn with_family<S: ToString>(mut self, family: S) -> Font {
        self.family = family.to_string();
        self
    }

    /// Replace the style, keeping family and size
    pub fn with_style(mut self, style: FontStyle) -> Font {
        self.style = style;
        self
    }

    /// Replace the size, keeping family and style
    pub fn with_size(mut self, size: Pt) -> Font {
        self.size = size;
        self
    }
}
