use log::debug;

use crate::canvas::{Canvas, CellAdvance, CellAlign, CursorGuard, StyleGuard};
use crate::colour::{colours, Colour};
use crate::error::DocError;
use crate::font::FontStyle;
use crate::layout::{flow_paragraph, Paragraph};
use crate::units::Pt;

/// Page furniture (headers/footers) renders in grey at this fraction of the
/// body font size
const FURNITURE_COLOUR: Colour = Colour {
    r: 150.0 / 255.0,
    g: 150.0 / 255.0,
    b: 150.0 / 255.0,
};
const FURNITURE_SCALE: f32 = 0.8;

/// Registering a footer requires at least this much bottom margin so the
/// footer text has room below the flow
const FOOTER_MIN_BOTTOM: Pt = Pt(36.0);

/// The document builder: owns a [Canvas] and exposes the flowing-document
/// surface on top of it—paragraphs (free or anchored, left or justified),
/// titles, tables, bulleted lists, and header/footer registration.
///
/// One `Document` per canvas, driven from a single thread; layout calls run
/// to completion before returning and must not be interleaved.
pub struct Document<C: Canvas> {
    canvas: C,
}

impl<C: Canvas> Document<C> {
    pub fn new(canvas: C) -> Document<C> {
        Document { canvas }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Consume the builder, handing the canvas back
    pub fn into_canvas(self) -> C {
        self.canvas
    }

    /// Flow a paragraph at the live cursor. This is the "continue the
    /// document flow" entry point: the cursor is left one line height below
    /// the paragraph, so consecutive calls stack vertically.
    pub fn paragraph(&mut self, par: Paragraph) -> Result<(), DocError> {
        flow_paragraph(&mut self.canvas, par)
    }

    /// Flow a paragraph anchored at `x`, keeping the cursor's current y.
    ///
    /// Anchored calls are "stamp text here and leave everything else
    /// untouched": the live cursor is restored to its pre-call value, even
    /// if layout fails partway.
    pub fn paragraph_at_x(&mut self, x: Pt, par: Paragraph) -> Result<(), DocError> {
        let mut guard = CursorGuard::save(&mut self.canvas);
        let (_, y) = guard.cursor();
        guard.set_cursor(x, y);
        flow_paragraph(&mut *guard, par)
    }

    /// Flow a paragraph anchored at (`x`, `y`), restoring the cursor after
    pub fn paragraph_at(&mut self, x: Pt, y: Pt, par: Paragraph) -> Result<(), DocError> {
        let mut guard = CursorGuard::save(&mut self.canvas);
        guard.set_cursor(x, y);
        flow_paragraph(&mut *guard, par)
    }

    /// Flow a paragraph horizontally centred in the usable width, restoring
    /// the cursor after
    pub fn paragraph_centered(&mut self, par: Paragraph) -> Result<(), DocError> {
        let (usable_width, _) = self.canvas.usable_size();
        let left = self.canvas.margins().left;
        let x = left + (usable_width - par.width) / 2.0;
        self.paragraph_at_x(x, par)
    }

    /// Flow a paragraph against the right edge of the usable width,
    /// restoring the cursor after
    pub fn paragraph_right(&mut self, par: Paragraph) -> Result<(), DocError> {
        let (usable_width, _) = self.canvas.usable_size();
        let left = self.canvas.margins().left;
        let x = left + usable_width - par.width;
        self.paragraph_at_x(x, par)
    }

    /// Insert a title at the cursor. `level` adjusts the font size: level 0
    /// (a master title) renders centred at 2 × the current size, each level
    /// below shrinks by a quarter of the base size and renders left-aligned,
    /// never below the current size. Colours default to black on white.
    /// Font and colours are restored afterwards; the cursor is left below
    /// the title's trailing spacing.
    pub fn title(
        &mut self,
        text: &str,
        level: u8,
        text_colour: Option<Colour>,
        fill_colour: Option<Colour>,
    ) -> Result<(), DocError> {
        debug!("title (level {level}): {text:?}");
        let (usable_width, _) = self.canvas.usable_size();

        let mut guard = StyleGuard::save(&mut self.canvas);
        let base = guard.saved_font().clone();

        guard.set_text_colour(text_colour.unwrap_or(colours::BLACK));
        guard.set_fill_colour(fill_colour.unwrap_or(colours::WHITE));

        let scale = 2.0 - f32::from(level) * 0.25;
        let size = (base.size * scale).max(base.size);
        let heading = base.with_style(FontStyle::Bold).with_size(size);
        guard.set_font(&heading);

        let cell_height = heading.size * 2.0;
        let align = if level == 0 {
            CellAlign::Center
        } else {
            CellAlign::Left
        };
        guard.draw_cell(
            usable_width,
            cell_height,
            text,
            false,
            CellAdvance::NextLine,
            align,
            true,
        )?;

        // spacing below the title
        guard.draw_cell(
            usable_width,
            cell_height,
            "",
            false,
            CellAdvance::NextLine,
            CellAlign::Left,
            false,
        )?;

        Ok(())
    }

    /// Draw a cell whose overall height stays fixed: when `text` is too wide
    /// for `width` and the canvas will wrap it over several lines, the
    /// per-line height handed to the cell primitive shrinks so the box does
    /// not grow. The shrink is a purely geometric pre-computation, not an
    /// error-recovery loop.
    pub fn fixed_height_cell(
        &mut self,
        width: Pt,
        height: Pt,
        text: &str,
        border: bool,
        align: CellAlign,
        fill: bool,
    ) -> Result<(), DocError> {
        let text_width = self.canvas.measure_text_width(text)?;
        let line_height = if text_width > width && width > Pt::ZERO {
            height / ((text_width / width).floor() + 1.0)
        } else {
            height
        };
        self.canvas.draw_cell(
            width,
            line_height,
            text,
            border,
            CellAdvance::NextLine,
            align,
            fill,
        )
    }

    /// Register a header with left, centre, and right text, drawn by the
    /// canvas on every page creation. The top margin is doubled to make
    /// room.
    pub fn set_header(&mut self, left: &str, centre: &str, right: &str) {
        debug!("registering header hook");
        let top = self.canvas.margins().top;
        self.canvas.set_top_margin(top * 2.0);

        let (left, centre, right) = (left.to_string(), centre.to_string(), right.to_string());
        self.canvas.set_header_hook(Box::new(move |canvas| {
            let y = canvas.margins().top / 2.0;
            draw_slots(canvas, y, &left, &centre, &right)
        }));
    }

    /// Register a footer with left, centre, and right text, drawn by the
    /// canvas on every page creation. The bottom margin is raised if needed
    /// so the footer has room below the flow.
    pub fn set_footer(&mut self, left: &str, centre: &str, right: &str) {
        debug!("registering footer hook");
        self.reserve_footer_room();

        let (left, centre, right) = (left.to_string(), centre.to_string(), right.to_string());
        self.canvas.set_footer_hook(Box::new(move |canvas| {
            let y = footer_y(canvas);
            draw_slots(canvas, y, &left, &centre, &right)
        }));
    }

    /// Like [Document::set_footer], with the current page number substituted
    /// into the centre slot
    pub fn set_footer_with_page_number(&mut self, left: &str, right: &str) {
        debug!("registering page-number footer hook");
        self.reserve_footer_room();

        let (left, right) = (left.to_string(), right.to_string());
        self.canvas.set_footer_hook(Box::new(move |canvas| {
            let y = footer_y(canvas);
            let page = canvas.page_number().to_string();
            draw_slots(canvas, y, &left, &page, &right)
        }));
    }

    fn reserve_footer_room(&mut self) {
        if self.canvas.margins().bottom < FOOTER_MIN_BOTTOM {
            self.canvas.set_bottom_margin(FOOTER_MIN_BOTTOM);
        }
    }
}

/// The vertical centre of the bottom margin, where footer text sits
fn footer_y(canvas: &dyn Canvas) -> Pt {
    let margins = canvas.margins();
    let (_, usable_height) = canvas.usable_size();
    usable_height + margins.top + margins.bottom / 2.0
}

/// Draws a left/centre/right row of page furniture at `y`, in grey at 0.8 ×
/// the current font size. Saves and restores the canvas style around the
/// draws, as page hooks must.
fn draw_slots(
    canvas: &mut dyn Canvas,
    y: Pt,
    left: &str,
    centre: &str,
    right: &str,
) -> Result<(), DocError> {
    let margins = canvas.margins();
    let (usable_width, _) = canvas.usable_size();

    let mut guard = StyleGuard::save(canvas);
    let small_size = guard.saved_font().size * FURNITURE_SCALE;
    let small = guard.saved_font().clone().with_size(small_size);
    guard.set_text_colour(FURNITURE_COLOUR);
    guard.set_font(&small);

    guard.draw_text(margins.left, y, left)?;

    let width = guard.measure_text_width(centre)?;
    guard.draw_text(margins.left + usable_width / 2.0 - width / 2.0, y, centre)?;

    let width = guard.measure_text_width(right)?;
    guard.draw_text(margins.left + usable_width - width, y, right)?;

    Ok(())
}
