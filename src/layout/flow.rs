use log::{debug, trace};

use crate::canvas::Canvas;
use crate::error::DocError;
use crate::layout::justify::justify;
use crate::layout::line::break_lines;
use crate::units::Pt;

/// How lines are placed within a paragraph's width.
///
/// This is a closed set: right and centre *placement* are anchor arithmetic
/// on the positioning façade (see
/// [`Document::paragraph_right`](crate::Document::paragraph_right) and
/// [`Document::paragraph_centered`](crate::Document::paragraph_centered)),
/// never per-line alignment inside the flow engine.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    /// Full justification: inter-word spacing is widened so every line but
    /// the last spans the paragraph width
    Justify,
}

/// A paragraph layout request: the text to flow, the width to flow it into,
/// the vertical distance between lines, and the alignment mode.
///
/// A `line_height` below the current font size (including the `Pt(0.0)`
/// default) resolves to 1.2 × the font size at layout time. Requests are
/// immutable once built and consumed by a single layout call.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub width: Pt,
    pub line_height: Pt,
    pub align: Alignment,
}

impl Paragraph {
    pub fn new<S: ToString>(text: S, width: Pt) -> Paragraph {
        Paragraph {
            text: text.to_string(),
            width,
            line_height: Pt::ZERO,
            align: Alignment::default(),
        }
    }

    /// Set the alignment mode
    pub fn align(mut self, align: Alignment) -> Paragraph {
        self.align = align;
        self
    }

    /// Set an explicit line height
    pub fn line_height(mut self, line_height: Pt) -> Paragraph {
        self.line_height = line_height;
        self
    }
}

/// Flows `par` onto the canvas starting at the current cursor, breaking to
/// new pages as the flow runs past the printable area.
///
/// Before each line is placed, the flow checks whether the line would land
/// past `usable_height + top_margin`; if so it requests a page break, re-reads
/// the cursor's y on the fresh page, and continues with x pinned to the
/// paragraph's left edge. The check runs once per line, so a paragraph may
/// span any number of pages. Under [Alignment::Justify] the final line is
/// always placed at natural spacing.
///
/// After the last line the cursor is left at the paragraph's left edge, one
/// extra line height down (the paragraph's trailing space). Any canvas error
/// aborts the remaining lines immediately; lines already placed stand.
pub fn flow_paragraph<C: Canvas + ?Sized>(canvas: &mut C, par: Paragraph) -> Result<(), DocError> {
    let font = canvas.font();
    let line_height = if par.line_height < font.size {
        font.size * 1.2
    } else {
        par.line_height
    };

    let lines = break_lines(&par.text, par.width, &mut |s| canvas.measure_text_width(s))?;
    trace!(
        "flowing paragraph: {} lines of {} at line height {}",
        lines.len(),
        par.width,
        line_height
    );

    let (_, usable_height) = canvas.usable_size();
    let top_margin = canvas.margins().top;

    let (left, y0) = canvas.cursor();
    let mut y = y0;
    let last = lines.len() - 1;

    for (n, line) in lines.iter().enumerate() {
        if y + line_height > usable_height + top_margin {
            debug!("page break at y={y}, line {n}");
            canvas.page_break()?;
            let (_, home_y) = canvas.cursor();
            y = home_y;
        }

        match par.align {
            Alignment::Left => {
                if !line.is_empty() {
                    canvas.draw_text(left, y, &line.text())?;
                }
            }
            Alignment::Justify if n == last => {
                // the trailing partial line keeps its natural spacing
                if !line.is_empty() {
                    canvas.draw_text(left, y, &line.text())?;
                }
            }
            Alignment::Justify => {
                let placed = justify(line, par.width, &mut |s| canvas.measure_text_width(s))?;
                for (word, offset) in placed {
                    canvas.draw_text(left + offset, y, &word)?;
                }
            }
        }

        y += line_height;
    }

    canvas.set_cursor(left, y + line_height);
    Ok(())
}
