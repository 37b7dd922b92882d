#![allow(dead_code)]

use doc_gen::layout::Margins;
use doc_gen::{
    colours, Canvas, CellAdvance, CellAlign, Colour, DocError, Font, FontStyle, PageHook,
    PathStyle, Pt,
};

/// Fixed-advance measurement: 10pt per character, 5pt per space. Two-letter
/// words therefore measure 20pt, matching the worked layout scenarios.
pub fn measure(text: &str) -> Pt {
    Pt(text
        .chars()
        .map(|ch| if ch == ' ' { 5.0 } else { 10.0 })
        .sum())
}

/// Everything the canvas was asked to do, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Text {
        page: usize,
        x: Pt,
        y: Pt,
        text: String,
        colour: Colour,
        font: Font,
    },
    Line {
        page: usize,
    },
    Circle {
        page: usize,
        x: Pt,
        y: Pt,
        radius: Pt,
        style: PathStyle,
    },
    Polygon {
        page: usize,
        corners: usize,
        style: PathStyle,
    },
    Cell {
        page: usize,
        x: Pt,
        y: Pt,
        width: Pt,
        height: Pt,
        text: String,
        align: CellAlign,
        fill: Option<Colour>,
        colour: Colour,
        font: Font,
    },
    PageBreak {
        page: usize,
    },
}

/// A canvas double that records every call, simulates pages with a top-down
/// cursor, and fires registered hooks on page breaks.
pub struct MockCanvas {
    pub cursor: (Pt, Pt),
    pub margins: Margins,
    pub usable: (Pt, Pt),
    pub font: Font,
    pub text_colour: Colour,
    pub fill_colour: Colour,
    pub page: usize,
    pub page_breaks: usize,
    pub ops: Vec<Op>,
    /// When set, every draw past this many succeeds-then-refuses
    pub fail_after_draws: Option<usize>,
    draws: usize,
    header_hook: Option<PageHook>,
    footer_hook: Option<PageHook>,
}

impl MockCanvas {
    pub fn new(usable_width: f32, usable_height: f32, margin: f32) -> MockCanvas {
        MockCanvas {
            cursor: (Pt(margin), Pt(margin)),
            margins: Margins::all(Pt(margin)),
            usable: (Pt(usable_width), Pt(usable_height)),
            font: Font::new("Helvetica", FontStyle::Regular, Pt(10.0)),
            text_colour: colours::BLACK,
            fill_colour: colours::WHITE,
            page: 1,
            page_breaks: 0,
            ops: Vec::new(),
            fail_after_draws: None,
            draws: 0,
            header_hook: None,
            footer_hook: None,
        }
    }

    fn bump_draws(&mut self) -> Result<(), DocError> {
        self.draws += 1;
        if let Some(limit) = self.fail_after_draws {
            if self.draws > limit {
                return Err(DocError::RenderFailure(format!(
                    "draw {} refused",
                    self.draws
                )));
            }
        }
        Ok(())
    }

    /// The recorded text draws as (x, y, text)
    pub fn texts(&self) -> Vec<(Pt, Pt, String)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { x, y, text, .. } => Some((*x, *y, text.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn cells(&self) -> Vec<&Op> {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Cell { .. }))
            .collect()
    }
}

impl Canvas for MockCanvas {
    fn measure_text_width(&self, text: &str) -> Result<Pt, DocError> {
        Ok(measure(text))
    }

    fn cursor(&self) -> (Pt, Pt) {
        self.cursor
    }

    fn set_cursor(&mut self, x: Pt, y: Pt) {
        self.cursor = (x, y);
    }

    fn usable_size(&self) -> (Pt, Pt) {
        self.usable
    }

    fn margins(&self) -> Margins {
        self.margins.clone()
    }

    fn set_top_margin(&mut self, top: Pt) {
        self.margins.top = top;
    }

    fn set_bottom_margin(&mut self, bottom: Pt) {
        self.margins.bottom = bottom;
    }

    fn draw_text(&mut self, x: Pt, y: Pt, text: &str) -> Result<(), DocError> {
        self.bump_draws()?;
        self.ops.push(Op::Text {
            page: self.page,
            x,
            y,
            text: text.to_string(),
            colour: self.text_colour,
            font: self.font.clone(),
        });
        Ok(())
    }

    fn draw_line(&mut self, _x1: Pt, _y1: Pt, _x2: Pt, _y2: Pt) -> Result<(), DocError> {
        self.bump_draws()?;
        self.ops.push(Op::Line { page: self.page });
        Ok(())
    }

    fn draw_circle(&mut self, x: Pt, y: Pt, radius: Pt, style: PathStyle) -> Result<(), DocError> {
        self.bump_draws()?;
        self.ops.push(Op::Circle {
            page: self.page,
            x,
            y,
            radius,
            style,
        });
        Ok(())
    }

    fn draw_polygon(&mut self, points: &[(Pt, Pt)], style: PathStyle) -> Result<(), DocError> {
        self.bump_draws()?;
        self.ops.push(Op::Polygon {
            page: self.page,
            corners: points.len(),
            style,
        });
        Ok(())
    }

    fn draw_cell(
        &mut self,
        width: Pt,
        height: Pt,
        text: &str,
        _border: bool,
        advance: CellAdvance,
        align: CellAlign,
        fill: bool,
    ) -> Result<(), DocError> {
        self.bump_draws()?;
        let (x, y) = self.cursor;
        self.ops.push(Op::Cell {
            page: self.page,
            x,
            y,
            width,
            height,
            text: text.to_string(),
            align,
            fill: fill.then_some(self.fill_colour),
            colour: self.text_colour,
            font: self.font.clone(),
        });
        self.cursor = match advance {
            CellAdvance::Right => (x + width, y),
            CellAdvance::NextLine => (self.margins.left, y + height),
        };
        Ok(())
    }

    fn page_break(&mut self) -> Result<(), DocError> {
        self.page += 1;
        self.page_breaks += 1;
        self.ops.push(Op::PageBreak { page: self.page });
        self.cursor = (self.margins.left, self.margins.top);

        if let Some(mut hook) = self.header_hook.take() {
            let result = hook(self);
            self.header_hook = Some(hook);
            result?;
        }
        if let Some(mut hook) = self.footer_hook.take() {
            let result = hook(self);
            self.footer_hook = Some(hook);
            result?;
        }
        Ok(())
    }

    fn page_number(&self) -> usize {
        self.page
    }

    fn font(&self) -> Font {
        self.font.clone()
    }

    fn set_font(&mut self, font: &Font) {
        self.font = font.clone();
    }

    fn fill_colour(&self) -> Colour {
        self.fill_colour
    }

    fn set_fill_colour(&mut self, colour: Colour) {
        self.fill_colour = colour;
    }

    fn text_colour(&self) -> Colour {
        self.text_colour
    }

    fn set_text_colour(&mut self, colour: Colour) {
        self.text_colour = colour;
    }

    fn set_header_hook(&mut self, hook: PageHook) {
        self.header_hook = Some(hook);
    }

    fn set_footer_hook(&mut self, hook: PageHook) {
        self.footer_hook = Some(hook);
    }
}
