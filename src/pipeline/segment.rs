/// Split text into sentence-like units on runs of terminal punctuation.
///
/// The iterator is lazy and restartable; yielded sentences are trimmed and
/// never empty. Text without terminal punctuation is a single sentence.
pub fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| matches!(c, '.' | '!' | '?'))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
