//! Teaser text computation.
//!
//! Cuts on `char` boundaries without looking at words or grapheme clusters,
//! so a teaser may end mid-word.

/// True when `full_text` is longer than `teaser_length` characters and
/// therefore gets a toggle control.
pub fn is_eligible(full_text: &str, teaser_length: usize) -> bool {
    full_text.chars().nth(teaser_length).is_some()
}

/// The first `teaser_length` characters of `full_text` followed by `ellipsis`.
pub fn teaser_text(full_text: &str, teaser_length: usize, ellipsis: &str) -> String {
    let cut = full_text
        .char_indices()
        .nth(teaser_length)
        .map_or(full_text.len(), |(idx, _)| idx);

    let mut teaser = String::with_capacity(cut + ellipsis.len());
    teaser.push_str(&full_text[..cut]);
    teaser.push_str(ellipsis);
    teaser
}
