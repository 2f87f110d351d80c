use unicode_segmentation::UnicodeSegmentation;

const MAX_INITIALS: usize = 2;

/// Short textual stand-in for a person's picture: first grapheme of each whitespace separated
/// word, uppercased, at most two graphemes
pub fn initials(name: &str) -> String {
    let upper = name
        .split_whitespace()
        .filter_map(|word| word.graphemes(true).next())
        .collect::<String>()
        .to_uppercase();
    upper.graphemes(true).take(MAX_INITIALS).collect()
}
