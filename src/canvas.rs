use crate::colour::Colour;
use crate::error::DocError;
use crate::font::Font;
use crate::layout::Margins;
use crate::units::Pt;

/// How a shape outline is painted
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PathStyle {
    /// Outline only
    Stroke,
    /// Interior only
    Fill,
    /// Interior, then outline
    FillStroke,
}

/// Horizontal placement of text within a cell
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum CellAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Where the cursor lands after a cell is drawn
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CellAdvance {
    /// To the cell's right edge, ready for the next cell in the row
    Right,
    /// To the left margin, one cell height down
    NextLine,
}

/// A hook invoked by the canvas on every page creation. Hooks run
/// synchronously and re-enter the canvas; any font, colour, or position
/// state a hook touches must be saved and restored by the hook itself
/// (see [StyleGuard]).
pub type PageHook = Box<dyn FnMut(&mut dyn Canvas) -> Result<(), DocError>>;

/// The paged drawing surface the layout engine runs against.
///
/// Coordinates are top-down: y grows toward the bottom of the page, and the
/// printable area spans `top_margin ..= top_margin + usable_height`
/// vertically. The cursor, font, colour, and page state behind this trait
/// are process-wide mutable state with no ownership guard—the layout engine
/// assumes exclusive, non-reentrant access for the duration of a call, which
/// the caller must enforce (one layout pass per canvas, no sharing across
/// threads without external locking).
///
/// State setters (`set_cursor`, `set_font`, the colour setters) are plain
/// state writes and cannot fail; canvases without a requested font face are
/// expected to substitute a fallback. Fallibility is confined to
/// measurement, drawing, and page breaks.
pub trait Canvas {
    /// Measure how wide `text` would render at the current font
    fn measure_text_width(&self, text: &str) -> Result<Pt, DocError>;

    /// The current write position
    fn cursor(&self) -> (Pt, Pt);
    fn set_cursor(&mut self, x: Pt, y: Pt);

    /// The size of the printable area, inside the margins
    fn usable_size(&self) -> (Pt, Pt);
    fn margins(&self) -> Margins;
    fn set_top_margin(&mut self, top: Pt);
    fn set_bottom_margin(&mut self, bottom: Pt);

    /// Draw `text` with its baseline anchor at (x, y)
    fn draw_text(&mut self, x: Pt, y: Pt, text: &str) -> Result<(), DocError>;
    fn draw_line(&mut self, x1: Pt, y1: Pt, x2: Pt, y2: Pt) -> Result<(), DocError>;
    fn draw_circle(&mut self, x: Pt, y: Pt, radius: Pt, style: PathStyle) -> Result<(), DocError>;
    fn draw_polygon(&mut self, points: &[(Pt, Pt)], style: PathStyle) -> Result<(), DocError>;

    /// Draw a `width` × `height` cell at the cursor: optional border,
    /// optional fill with the current fill colour, `text` aligned within,
    /// then move the cursor per `advance`
    #[allow(clippy::too_many_arguments)]
    fn draw_cell(
        &mut self,
        width: Pt,
        height: Pt,
        text: &str,
        border: bool,
        advance: CellAdvance,
        align: CellAlign,
        fill: bool,
    ) -> Result<(), DocError>;

    /// Start a new page and reset the cursor to the top of the printable
    /// area. The canvas fires any registered header/footer hooks as part of
    /// page creation.
    fn page_break(&mut self) -> Result<(), DocError>;

    /// The 1-based number of the current page
    fn page_number(&self) -> usize;

    fn font(&self) -> Font;
    fn set_font(&mut self, font: &Font);

    fn fill_colour(&self) -> Colour;
    fn set_fill_colour(&mut self, colour: Colour);

    fn text_colour(&self) -> Colour;
    fn set_text_colour(&mut self, colour: Colour);

    fn set_header_hook(&mut self, hook: PageHook);
    fn set_footer_hook(&mut self, hook: PageHook);
}

/// Saves the canvas cursor on creation and restores it on drop, so anchored
/// operations leave the live cursor exactly where it was—including on early
/// error returns.
pub struct CursorGuard<'c, C: Canvas + ?Sized> {
    canvas: &'c mut C,
    saved: (Pt, Pt),
}

impl<'c, C: Canvas + ?Sized> CursorGuard<'c, C> {
    pub fn save(canvas: &'c mut C) -> CursorGuard<'c, C> {
        let saved = canvas.cursor();
        CursorGuard { canvas, saved }
    }
}

impl<C: Canvas + ?Sized> std::ops::Deref for CursorGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> std::ops::DerefMut for CursorGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> Drop for CursorGuard<'_, C> {
    fn drop(&mut self) {
        let (x, y) = self.saved;
        self.canvas.set_cursor(x, y);
    }
}

/// Saves the canvas font, text colour, and fill colour on creation and
/// restores all three on drop. Used around any styled region (titles, table
/// headers, header/footer hooks) so the enclosing layout pass never observes
/// leaked style state.
pub struct StyleGuard<'c, C: Canvas + ?Sized> {
    canvas: &'c mut C,
    font: Font,
    text_colour: Colour,
    fill_colour: Colour,
}

impl<'c, C: Canvas + ?Sized> StyleGuard<'c, C> {
    pub fn save(canvas: &'c mut C) -> StyleGuard<'c, C> {
        let font = canvas.font();
        let text_colour = canvas.text_colour();
        let fill_colour = canvas.fill_colour();
        StyleGuard {
            canvas,
            font,
            text_colour,
            fill_colour,
        }
    }

    /// The font that was active when the guard was taken
    pub fn saved_font(&self) -> &Font {
        &self.font
    }
}

impl<C: Canvas + ?Sized> std::ops::Deref for StyleGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> std::ops::DerefMut for StyleGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> Drop for StyleGuard<'_, C> {
    fn drop(&mut self) {
        let font = self.font.clone();
        self.canvas.set_font(&font);
        self.canvas.set_text_colour(self.text_colour);
        self.canvas.set_fill_colour(self.fill_colour);
    }
}
