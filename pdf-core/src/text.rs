/// Horizontal alignment of text within its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Options for `PdfDocument::text`.
///
/// `width` bounds wrapping and alignment. When it is `None` and
/// `line_break` is on, the box extends to the page's right margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextOptions {
    pub align: TextAlign,
    pub width: Option<f64>,
    pub underline: bool,
    pub line_break: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        TextOptions {
            align: TextAlign::Left,
            width: None,
            underline: false,
            line_break: true,
        }
    }
}

impl TextOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn no_line_break(mut self) -> Self {
        self.line_break = false;
        self
    }
}

/// Break text into lines no wider than `max_width`, splitting on spaces.
/// Explicit newlines always break. A single word wider than the box is
/// kept whole on its own line.
pub(crate) fn wrap_lines<F>(text: &str, max_width: Option<f64>, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f64,
{
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let Some(max_width) = max_width else {
            lines.push(paragraph.to_string());
            continue;
        };
        let mut line = String::new();
        for word in paragraph.split(' ').filter(|w| !w.is_empty()) {
            if line.is_empty() {
                line.push_str(word);
                continue;
            }
            let candidate = format!("{} {}", line, word);
            if measure(&candidate) > max_width {
                lines.push(std::mem::replace(&mut line, word.to_string()));
            } else {
                line = candidate;
            }
        }
        lines.push(line);
    }
    lines
}

/// Horizontal offset of a line of `line_width` inside a box.
pub(crate) fn align_offset(align: TextAlign, box_width: Option<f64>, line_width: f64) -> f64 {
    match (align, box_width) {
        (TextAlign::Left, _) | (_, None) => 0.0,
        (TextAlign::Center, Some(w)) => (w - line_width) / 2.0,
        (TextAlign::Right, Some(w)) => w - line_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> f64 {
        s.chars().count() as f64
    }

    #[test]
    fn no_width_keeps_single_line() {
        assert_eq!(wrap_lines("a b c", None, chars), vec!["a b c"]);
    }

    #[test]
    fn wraps_greedily_on_spaces() {
        let lines = wrap_lines("aaa bbb ccc ddd", Some(7.0), chars);
        assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
    }

    #[test]
    fn newline_forces_break_and_long_word_stays_whole() {
        let lines = wrap_lines("x\nverylongword y", Some(5.0), chars);
        assert_eq!(lines, vec!["x", "verylongword", "y"]);
    }

    #[test]
    fn right_and_center_offsets() {
        assert_eq!(align_offset(TextAlign::Right, Some(75.0), 25.0), 50.0);
        assert_eq!(align_offset(TextAlign::Center, Some(15.0), 5.0), 5.0);
        assert_eq!(align_offset(TextAlign::Right, None, 25.0), 0.0);
    }
}
