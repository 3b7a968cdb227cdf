//! Decorative separator lines and centered banner text

use serde::{Deserialize, Serialize};

pub const DEFAULT_PATTERN_STYLE: char = '-';
pub const DEFAULT_PATTERN_LEN: usize = 50;

/// Repeated-character separator built once from a style and a target length.
///
/// The line holds `len / 2` style characters joined by the style itself, so
/// its length is the largest odd number not above `len` (49 for 50). Banner
/// text is centered two characters narrower than the line.
///
/// # Example
///
/// ```
/// use log_druid::PatternTemplate;
///
/// let pattern = PatternTemplate::new('=', 10);
/// assert_eq!(pattern.line(), "=========");
/// assert_eq!(pattern.center("hi"), "== hi =");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternTemplate {
    style: char,
    line: String,
}

impl PatternTemplate {
    pub fn new(style: char, len: usize) -> Self {
        let pairs = len / 2;
        let count = (2 * pairs).saturating_sub(1);
        Self {
            style,
            line: std::iter::repeat(style).take(count).collect(),
        }
    }

    pub fn style(&self) -> char {
        self.style
    }

    /// The full separator line
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Length of the separator line in characters
    pub fn len(&self) -> usize {
        self.line.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    /// Width available to centered text
    pub fn width(&self) -> usize {
        self.len().saturating_sub(2)
    }

    /// Pad `text` with one space on each side and center it in the pattern width.
    ///
    /// Text wider than the pattern is returned padded but untrimmed.
    pub fn center(&self, text: &str) -> String {
        center(&format!(" {} ", text), self.width(), self.style)
    }
}

impl Default for PatternTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN_STYLE, DEFAULT_PATTERN_LEN)
    }
}

/// Center `text` within `width` characters using `fill`.
///
/// When the margin is odd the extra fill character goes on the left only if
/// `width` is odd as well, otherwise on the right.
pub fn center(text: &str, width: usize, fill: char) -> String {
    let (left, right) = center_margins(text.chars().count(), width);
    if left + right == 0 {
        return text.to_string();
    }

    let margin = left + right;
    let mut out = String::with_capacity(text.len() + margin * fill.len_utf8());
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(text);
    out.extend(std::iter::repeat(fill).take(right));
    out
}

/// Fill counts `(left, right)` that [`center`] puts around `len` characters.
pub fn center_margins(len: usize, width: usize) -> (usize, usize) {
    if width <= len {
        return (0, 0);
    }

    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    (left, margin - left)
}
