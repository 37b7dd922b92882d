//! The text-flow layout engine: breaking text into lines, justifying them,
//! and flowing them down pages.
//!
//! The pipeline runs leaf-first: [break_lines] turns raw text plus a target
//! width into an ordered sequence of [Line]s using the canvas's measurement;
//! [justify] turns a broken line into per-word horizontal offsets;
//! [flow_paragraph] walks the lines down the page, requesting a page break
//! from the canvas whenever the next line would land past the printable
//! area. Convenience entry points that anchor a paragraph somewhere other
//! than the live cursor live on [`Document`](crate::Document).
//!
//! # Example
//!
//! ```no_run
//! use doc_gen::layout::{flow_paragraph, Alignment, Paragraph};
//! use doc_gen::{Canvas, Pt};
//!
//! fn body(canvas: &mut dyn Canvas) -> Result<(), doc_gen::DocError> {
//!     let par = Paragraph::new("Lorem ipsum dolor sit amet.", Pt(400.0))
//!         .align(Alignment::Justify);
//!     flow_paragraph(canvas, par)
//! }
//! ```

mod flow;
mod justify;
mod line;
mod margins;

pub use flow::*;
pub use justify::*;
pub use line::*;
pub use margins::*;
