use crate::error::DocError;
use crate::layout::line::Line;
use crate::units::Pt;

/// Computes the horizontal offset of every word in `line` so the line spans
/// `target_width`, distributing the slack evenly across the inter-word gaps.
/// Offsets are measured from the line's left edge.
///
/// A one-word line, or a line with no slack to distribute, degrades to the
/// natural single-space gap—negative or undefined spacing is never produced.
///
/// Callers are responsible for exempting the final line of a paragraph:
/// full justification on a trailing partial line is visually wrong, so the
/// flow requests left alignment for it regardless of the paragraph's
/// alignment mode.
pub fn justify<F>(
    line: &Line,
    target_width: Pt,
    measure: &mut F,
) -> Result<Vec<(String, Pt)>, DocError>
where
    F: FnMut(&str) -> Result<Pt, DocError>,
{
    let words = line.words();
    if words.is_empty() {
        return Ok(Vec::new());
    }

    let mut widths: Vec<Pt> = Vec::with_capacity(words.len());
    for word in words {
        widths.push(measure(word)?);
    }
    let words_width: Pt = widths.iter().copied().sum();
    let slack = target_width - words_width;

    let gap = if words.len() == 1 || slack <= Pt::ZERO {
        measure(" ")?
    } else {
        slack / (words.len() - 1) as f32
    };

    let mut placed = Vec::with_capacity(words.len());
    let mut x = Pt::ZERO;
    for (word, width) in words.iter().zip(widths) {
        placed.push((word.clone(), x));
        x += width + gap;
    }

    Ok(placed)
}
