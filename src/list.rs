use crate::canvas::{Canvas, CursorGuard, PathStyle};
use crate::document::Document;
use crate::error::DocError;
use crate::units::Pt;

/// Lays out `items` as a bulleted list starting at the cursor, one item per
/// line.
///
/// The marker glyph follows the nesting `level`: an open circle, a filled
/// circle, an open square, then a filled square, cycling for deeper levels.
/// The indent grows with the level. A `line_height` below the current font
/// size resolves to 1.2 × the font size. The cursor is left at the same x,
/// one line height per item further down. Lists do not paginate; keeping
/// them within the page is the caller's concern.
pub fn lay_list<C: Canvas + ?Sized>(
    canvas: &mut C,
    line_height: Pt,
    items: &[String],
    level: usize,
) -> Result<(), DocError> {
    let font = canvas.font();
    let line_height = if line_height < font.size {
        font.size * 1.2
    } else {
        line_height
    };

    let (x, y) = canvas.cursor();
    let radius = font.size * 0.12;
    let indent = font.size * (level as f32 + 1.0);

    for (n, item) in items.iter().enumerate() {
        let item_y = y + line_height * n as f32;
        // the marker sits on the text line, lifted off the baseline
        draw_marker(
            canvas,
            x + indent,
            item_y - radius - font.size * 0.1,
            radius,
            level,
        )?;
        canvas.draw_text(x + indent + radius * 4.0, item_y, item)?;
    }

    canvas.set_cursor(x, y + line_height * items.len() as f32);
    Ok(())
}

fn draw_marker<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: Pt,
    y: Pt,
    size: Pt,
    level: usize,
) -> Result<(), DocError> {
    match level % 4 {
        0 => canvas.draw_circle(x, y, size, PathStyle::Stroke),
        1 => canvas.draw_circle(x, y, size, PathStyle::FillStroke),
        2 => draw_square(canvas, x, y, size, PathStyle::Stroke),
        _ => draw_square(canvas, x, y, size, PathStyle::FillStroke),
    }
}

fn draw_square<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: Pt,
    y: Pt,
    size: Pt,
    style: PathStyle,
) -> Result<(), DocError> {
    let points = [
        (x, y),
        (x + size, y),
        (x + size, y + size),
        (x, y + size),
    ];
    canvas.draw_polygon(&points, style)
}

impl<C: Canvas> Document<C> {
    /// Lay out a bulleted list at the live cursor, leaving the cursor one
    /// line height per item further down. See [lay_list].
    pub fn bulleted_list(
        &mut self,
        line_height: Pt,
        items: &[String],
        level: usize,
    ) -> Result<(), DocError> {
        lay_list(self.canvas_mut(), line_height, items, level)
    }

    /// Lay out a bulleted list anchored at (`x`, `y`), restoring the cursor
    /// after
    pub fn bulleted_list_at(
        &mut self,
        x: Pt,
        y: Pt,
        line_height: Pt,
        items: &[String],
        level: usize,
    ) -> Result<(), DocError> {
        let mut guard = CursorGuard::save(self.canvas_mut());
        guard.set_cursor(x, y);
        lay_list(&mut *guard, line_height, items, level)
    }
}
