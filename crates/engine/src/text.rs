//! Whitespace-based text statistics.
//!
//! Lines are joined with a single space and trimmed before counting, so the
//! word and character counts see one token stream regardless of how the text
//! was broken into lines. Every step uses [`char::is_whitespace`] as its
//! definition of whitespace.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub lines: usize,
    pub words: usize,
    pub chars: usize,
    /// First token of maximal length (in chars). Empty when there are no words.
    pub longest_word: String,
}

impl TextStats {
    /// Compute statistics over already split lines (terminators removed).
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut content = String::new();
        let mut line_count = 0;
        for line in lines {
            content.push_str(line.as_ref());
            content.push(' ');
            line_count += 1;
        }

        let mut stats = Self::from_content(&content);
        stats.lines = line_count;
        stats
    }

    /// Word/char statistics of a single string. `lines` is left at zero.
    pub fn from_content(content: &str) -> Self {
        let trimmed = content.trim();

        let mut words = 0;
        let mut longest = "";
        let mut longest_len = 0;
        // split_whitespace never yields an empty token, so "" gives zero words
        for word in trimmed.split_whitespace() {
            words += 1;
            let len = word.chars().count();
            if len > longest_len {
                longest = word;
                longest_len = len;
            }
        }

        let chars = trimmed.chars().filter(|c| !c.is_whitespace()).count();

        Self {
            lines: 0,
            words,
            chars,
            longest_word: longest.to_string(),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn avg_word_length(&self) -> f64 {
        if self.words == 0 {
            0.0
        } else {
            self.chars as f64 / self.words as f64
        }
    }
}
