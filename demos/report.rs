use doc_gen::layout::{Alignment, Margins, Paragraph};
use doc_gen::{
    colours, Canvas, CellAdvance, CellAlign, Colour, DocError, Document, Font, FontStyle, PageHook,
    PathStyle, Pt,
};

/// A canvas that narrates its draw calls to stdout, one line per primitive,
/// with a banner per page. Text is measured at a fixed half-em advance per
/// character, which is plenty for demonstrating the flow.
struct ConsoleCanvas {
    cursor: (Pt, Pt),
    margins: Margins,
    usable: (Pt, Pt),
    font: Font,
    text_colour: Colour,
    fill_colour: Colour,
    page: usize,
    header_hook: Option<PageHook>,
    footer_hook: Option<PageHook>,
}

impl ConsoleCanvas {
    fn new() -> ConsoleCanvas {
        let margins = Margins::all(Pt(36.0));
        ConsoleCanvas {
            cursor: (margins.left, margins.top),
            margins,
            usable: (Pt(451.0), Pt(720.0)),
            font: Font::new("Helvetica", FontStyle::Regular, Pt(10.0)),
            text_colour: colours::BLACK,
            fill_colour: colours::WHITE,
            page: 1,
            header_hook: None,
            footer_hook: None,
        }
    }
}

impl Canvas for ConsoleCanvas {
    fn measure_text_width(&self, text: &str) -> Result<Pt, DocError> {
        Ok(self.font.size * 0.5 * text.chars().count() as f32)
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
        println!("  text @ ({x:7.1}, {y:7.1}): {text}", x = x.0, y = y.0);
        Ok(())
    }

    fn draw_line(&mut self, x1: Pt, y1: Pt, x2: Pt, y2: Pt) -> Result<(), DocError> {
        println!(
            "  line ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            x1.0, y1.0, x2.0, y2.0
        );
        Ok(())
    }

    fn draw_circle(&mut self, x: Pt, y: Pt, radius: Pt, style: PathStyle) -> Result<(), DocError> {
        println!(
            "  circle @ ({:.1}, {:.1}) r={:.1} {:?}",
            x.0, y.0, radius.0, style
        );
        Ok(())
    }

    fn draw_polygon(&mut self, points: &[(Pt, Pt)], style: PathStyle) -> Result<(), DocError> {
        println!("  polygon with {} corners {:?}", points.len(), style);
        Ok(())
    }

    fn draw_cell(
        &mut self,
        width: Pt,
        height: Pt,
        text: &str,
        border: bool,
        advance: CellAdvance,
        align: CellAlign,
        fill: bool,
    ) -> Result<(), DocError> {
        let (x, y) = self.cursor;
        println!(
            "  cell @ ({:7.1}, {:7.1}) {:.0}x{:.0} border={border} fill={fill} {align:?}: {text}",
            x.0, y.0, width.0, height.0
        );
        self.cursor = match advance {
            CellAdvance::Right => (x + width, y),
            CellAdvance::NextLine => (self.margins.left, y + height),
        };
        Ok(())
    }

    fn page_break(&mut self) -> Result<(), DocError> {
        self.page += 1;
        println!("=== page {} ===", self.page);
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

fn main() {
    let mut doc = Document::new(ConsoleCanvas::new());
    doc.set_header("doc-gen", "", "demo");
    doc.set_footer_with_page_number("generated report", "confidential");

    println!("=== page 1 ===");

    let (usable_width, _) = doc.canvas().usable_size();

    doc.title("Quarterly Report", 0, Some(colours::WHITE), Some(colours::BLUE))
        .expect("can lay out title");
    doc.title("Summary", 1, None, None).expect("can lay out title");

    doc.paragraph(
        Paragraph::new(lipsum::lipsum(120), usable_width).align(Alignment::Justify),
    )
    .expect("can lay out paragraph");

    doc.paragraph_centered(
        Paragraph::new(lipsum::lipsum(40), usable_width / 2.0).align(Alignment::Left),
    )
    .expect("can lay out paragraph");

    let rows: Vec<Vec<String>> = vec![
        vec!["region".into(), "units".into(), "revenue".into()],
        vec!["north".into(), "1 204".into(), "$48k".into()],
        vec!["south".into(), "960".into(), "$39k".into()],
    ];
    doc.table_centered(
        usable_width / 2.0,
        &rows,
        &[CellAlign::Left, CellAlign::Center, CellAlign::Right],
        true,
        true,
    )
    .expect("can lay out table");

    let highlights: Vec<String> = vec![
        "new regions onboarded".into(),
        "flat infrastructure cost".into(),
        "headcount unchanged".into(),
    ];
    doc.bulleted_list(Pt(0.0), &highlights, 0)
        .expect("can lay out list");

    doc.paragraph(Paragraph::new(lipsum::lipsum(220), usable_width).align(Alignment::Justify))
        .expect("can lay out paragraph");
}
