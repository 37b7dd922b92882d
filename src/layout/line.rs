use crate::error::DocError;
use crate::units::Pt;

/// A single laid-out line: the words it carries, in reading order, and its
/// measured width at the font that was current when it was broken.
///
/// Lines are produced by [break_lines] and never mutated afterwards; the
/// layout pass that built them owns them for its duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    words: Vec<String>,
    width: Pt,
}

impl Line {
    pub(crate) fn new(words: Vec<String>, width: Pt) -> Line {
        Line { words, width }
    }

    /// An empty line, as produced for a blank paragraph
    pub(crate) fn empty() -> Line {
        Line {
            words: Vec::new(),
            width: Pt::ZERO,
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The measured width of [Line::text]
    pub fn width(&self) -> Pt {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The line's words joined with single spaces, i.e. the line at its
    /// natural (unjustified) spacing
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

/// Splits `text` into a sequence of [Line]s that each fit `width`, measuring
/// candidates through `measure`.
///
/// Words are accumulated greedily: a candidate line whose measured width
/// reaches or exceeds `width` overflows, and the word that caused the
/// overflow starts the next line. A single word wider than `width` is placed
/// alone on its own line, untruncated—overflow is accepted rather than
/// hyphenated.
///
/// Empty (or all-whitespace) text produces exactly one empty line, so a
/// blank paragraph still advances the flow by one line height. A
/// non-positive `width` disables wrapping and produces a single line.
pub fn break_lines<F>(text: &str, width: Pt, measure: &mut F) -> Result<Vec<Line>, DocError>
where
    F: FnMut(&str) -> Result<Pt, DocError>,
{
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Ok(vec![Line::empty()]);
    }

    if width <= Pt::ZERO {
        let joined = words.join(" ");
        let measured = measure(&joined)?;
        return Ok(vec![Line::new(
            words.into_iter().map(str::to_string).collect(),
            measured,
        )]);
    }

    let mut lines: Vec<Line> = Vec::new();

    let mut current: Vec<&str> = vec![words[0]];
    let mut current_text: String = words[0].to_string();
    let mut current_width = measure(&current_text)?;

    for &word in &words[1..] {
        let candidate = format!("{current_text} {word}");
        let candidate_width = measure(&candidate)?;

        if candidate_width >= width {
            lines.push(Line::new(
                current.iter().map(|w| w.to_string()).collect(),
                current_width,
            ));
            current = vec![word];
            current_text = word.to_string();
            current_width = measure(&current_text)?;
        } else {
            current.push(word);
            current_text = candidate;
            current_width = candidate_width;
        }
    }

    lines.push(Line::new(
        current.into_iter().map(str::to_string).collect(),
        current_width,
    ));

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 20pt per word, 5pt per space: the measurement model used throughout
    // the layout tests
    fn measure(text: &str) -> Result<Pt, DocError> {
        let words = text.split(' ').filter(|w| !w.is_empty()).count();
        let spaces = text.matches(' ').count();
        Ok(Pt(words as f32 * 20.0 + spaces as f32 * 5.0))
    }

    fn flatten(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .flat_map(|l| l.words().iter().cloned())
            .collect()
    }

    #[test]
    fn preserves_every_word_in_order() {
        let text = "the quick brown fox jumps over the lazy dog";
        let lines = break_lines(text, Pt(60.0), &mut measure).expect("can break");
        let flat = flatten(&lines);
        let original: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        assert_eq!(flat, original);
    }

    #[test]
    fn infinite_width_produces_one_line() {
        let lines =
            break_lines("a b c d e f g", Pt(f32::INFINITY), &mut measure).expect("can break");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].words().len(), 7);
    }

    #[test]
    fn reaching_the_width_exactly_overflows() {
        // "aa bb cc" measures 70; adding "dd" lands exactly on 95, which
        // still counts as overflow
        let lines = break_lines("aa bb cc dd", Pt(95.0), &mut measure).expect("can break");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "aa bb cc");
        assert_eq!(lines[0].width(), Pt(70.0));
        assert_eq!(lines[1].text(), "dd");

        // one unit of headroom keeps all four words on the line
        let lines = break_lines("aa bb cc dd", Pt(96.0), &mut measure).expect("can break");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "aa bb cc dd");
    }

    #[test]
    fn overwide_word_is_placed_alone() {
        let mut wide = |text: &str| -> Result<Pt, DocError> {
            match text {
                "gargantuan" => Ok(Pt(150.0)),
                other => measure(other),
            }
        };
        let lines = break_lines("gargantuan", Pt(100.0), &mut wide).expect("can break");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "gargantuan");
        assert_eq!(lines[0].width(), Pt(150.0));
    }

    #[test]
    fn overwide_word_mid_text_gets_its_own_line() {
        let mut wide = |text: &str| -> Result<Pt, DocError> {
            if text.contains("gargantuan") {
                Ok(Pt(150.0))
            } else {
                measure(text)
            }
        };
        let lines = break_lines("aa gargantuan bb", Pt(100.0), &mut wide).expect("can break");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text(), "aa");
        assert_eq!(lines[1].text(), "gargantuan");
        assert_eq!(lines[2].text(), "bb");
    }

    #[test]
    fn empty_text_produces_a_single_empty_line() {
        let lines = break_lines("", Pt(100.0), &mut measure).expect("can break");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_empty());

        let lines = break_lines("   \t  ", Pt(100.0), &mut measure).expect("can break");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_empty());
    }

    #[test]
    fn non_positive_width_disables_wrapping() {
        let lines = break_lines("a b c d", Pt(0.0), &mut measure).expect("can break");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "a b c d");

        let lines = break_lines("a b c d", Pt(-10.0), &mut measure).expect("can break");
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn measurement_failure_propagates() {
        let mut failing = |text: &str| -> Result<Pt, DocError> {
            Err(DocError::MeasurementUnavailable(text.to_string()))
        };
        assert!(break_lines("a b", Pt(100.0), &mut failing).is_err());
    }
}
