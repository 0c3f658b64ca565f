use unicode_segmentation::UnicodeSegmentation;

/// Split a request into word and punctuation units.
///
/// Uses UAX#29 word boundaries so that units like "node.js" or "can't"
/// survive as single tokens. Whitespace runs are dropped; punctuation is
/// kept as its own token.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split_word_bounds()
        .map(str::trim)
        .filter(|unit| !unit.is_empty())
        .map(str::to_string)
        .collect()
}
