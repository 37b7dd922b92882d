use log::debug;

use crate::canvas::{Canvas, CellAdvance, CellAlign, CursorGuard, StyleGuard};
use crate::colour::colours;
use crate::document::Document;
use crate::error::DocError;
use crate::font::FontStyle;
use crate::units::Pt;

/// Lays out `rows` as a table starting at the cursor, partitioning `width`
/// equally among each row's columns.
///
/// `aligns` gives the per-column text alignment; a list whose length does
/// not match a row's column count falls back to centring every cell in that
/// row rather than failing. `header` renders the first row bold; `banded`
/// fills every even row light grey. Each cell delegates to
/// [Canvas::draw_cell] for its chunking and painting; the row height is
/// 1.2 × the current font size, and the cursor is left two row heights below
/// the last row. Font and fill colour are restored afterwards.
pub fn lay_table<C: Canvas + ?Sized>(
    canvas: &mut C,
    width: Pt,
    rows: &[Vec<String>],
    aligns: &[CellAlign],
    header: bool,
    banded: bool,
) -> Result<(), DocError> {
    if rows.is_empty() {
        return Ok(());
    }
    debug!("table: {} rows into {}", rows.len(), width);

    let (x_origin, _) = canvas.cursor();

    let mut guard = StyleGuard::save(canvas);
    let base = guard.saved_font().clone();
    let bold = base.clone().with_style(FontStyle::Bold);
    let row_height = base.size * 1.2;

    for (row_index, row) in rows.iter().enumerate() {
        let columns = row.len();
        if columns == 0 {
            continue;
        }
        let column_width = width / columns as f32;

        for (column, cell) in row.iter().enumerate() {
            if column == 0 {
                let (_, y) = guard.cursor();
                guard.set_cursor(x_origin, y);
            }

            let advance = if column == columns - 1 {
                CellAdvance::NextLine
            } else {
                CellAdvance::Right
            };
            let align = if aligns.len() == columns {
                aligns[column]
            } else {
                CellAlign::default()
            };

            if banded && row_index % 2 == 0 {
                guard.set_fill_colour(colours::LIGHT_GREY);
            } else {
                guard.set_fill_colour(colours::WHITE);
            }
            if header && row_index == 0 {
                guard.set_font(&bold);
            } else {
                guard.set_font(&base);
            }

            guard.draw_cell(column_width, row_height, cell, true, advance, align, true)?;
        }
    }

    drop(guard);

    let (x, y) = canvas.cursor();
    canvas.set_cursor(x, y + row_height * 2.0);

    Ok(())
}

impl<C: Canvas> Document<C> {
    /// Lay out a table at the live cursor, leaving the cursor two row
    /// heights below it. See [lay_table] for the styling knobs.
    pub fn table(
        &mut self,
        width: Pt,
        rows: &[Vec<String>],
        aligns: &[CellAlign],
        header: bool,
        banded: bool,
    ) -> Result<(), DocError> {
        lay_table(self.canvas_mut(), width, rows, aligns, header, banded)
    }

    /// Lay out a table anchored at `x`, restoring the cursor after
    pub fn table_at_x(
        &mut self,
        x: Pt,
        width: Pt,
        rows: &[Vec<String>],
        aligns: &[CellAlign],
        header: bool,
        banded: bool,
    ) -> Result<(), DocError> {
        let mut guard = CursorGuard::save(self.canvas_mut());
        let (_, y) = guard.cursor();
        guard.set_cursor(x, y);
        lay_table(&mut *guard, width, rows, aligns, header, banded)
    }

    /// Lay out a table anchored at (`x`, `y`), restoring the cursor after
    #[allow(clippy::too_many_arguments)]
    pub fn table_at(
        &mut self,
        x: Pt,
        y: Pt,
        width: Pt,
        rows: &[Vec<String>],
        aligns: &[CellAlign],
        header: bool,
        banded: bool,
    ) -> Result<(), DocError> {
        let mut guard = CursorGuard::save(self.canvas_mut());
        guard.set_cursor(x, y);
        lay_table(&mut *guard, width, rows, aligns, header, banded)
    }

    /// Lay out a table horizontally centred in the usable width, restoring
    /// the cursor after
    pub fn table_centered(
        &mut self,
        width: Pt,
        rows: &[Vec<String>],
        aligns: &[CellAlign],
        header: bool,
        banded: bool,
    ) -> Result<(), DocError> {
        let (usable_width, _) = self.canvas().usable_size();
        let left = self.canvas().margins().left;
        let x = left + (usable_width - width) / 2.0;
        self.table_at_x(x, width, rows, aligns, header, banded)
    }
}
