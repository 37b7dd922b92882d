use crate::canvas::{Canvas, CursorGuard, StyleGuard};
use crate::colour::Colour;
use crate::document::Document;
use crate::error::DocError;
use crate::font::Font;
use crate::layout::{flow_paragraph, Paragraph};
use crate::units::Pt;

/// A document element captured for deferred insertion, so a document can be
/// described as a list of items and replayed onto a canvas later.
pub trait Insertable<C: Canvas> {
    fn insert(&self, doc: &mut Document<C>) -> Result<(), DocError>;
}

/// A paragraph pinned to an explicit anchor, with optional font and text
/// colour applied for the duration of the insert. The canvas's cursor and
/// style are restored afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchParagraph {
    pub x: Pt,
    pub y: Pt,
    pub paragraph: Paragraph,
    pub font: Option<Font>,
    pub text_colour: Option<Colour>,
}

impl<C: Canvas> Insertable<C> for BatchParagraph {
    fn insert(&self, doc: &mut Document<C>) -> Result<(), DocError> {
        let mut style = StyleGuard::save(doc.canvas_mut());
        if let Some(font) = &self.font {
            style.set_font(font);
        }
        if let Some(colour) = self.text_colour {
            style.set_text_colour(colour);
        }

        let mut cursor = CursorGuard::save(&mut *style);
        cursor.set_cursor(self.x, self.y);
        flow_paragraph(&mut *cursor, self.paragraph.clone())
    }
}

/// Replay a batch of items onto `doc` in order, stopping at the first error
pub fn insert_all<C: Canvas>(
    doc: &mut Document<C>,
    items: &[Box<dyn Insertable<C>>],
) -> Result<(), DocError> {
    for item in items {
        item.insert(doc)?;
    }
    Ok(())
}
