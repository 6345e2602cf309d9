//! Word, sentence and syllable counting.
//!
//! The readability formulas only ever look at a handful of counts, so they
//! are gathered once into [`TextStats`] and every metric is derived from it.

use std::sync::LazyLock;

use regex::Regex;

/// A run of text up to and including its terminal punctuation.
static SENTENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]*").expect("valid sentence regex"));

/// Sentences shorter than this many words are treated as labels or
/// abbreviations rather than sentences.
const MIN_SENTENCE_WORDS: usize = 3;

/// Words with at least this many syllables count as complex.
pub const COMPLEX_WORD_SYLLABLES: usize = 3;

/// Counts derived from a piece of plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    /// Whitespace-delimited tokens, punctuation included.
    pub tokens: usize,
    /// Tokens that contain at least one letter or digit.
    pub words: usize,
    /// Sentences, never less than one.
    pub sentences: usize,
    /// Total syllables across all words.
    pub syllables: usize,
    /// Words with [`COMPLEX_WORD_SYLLABLES`] or more syllables.
    pub complex_words: usize,
    /// Characters that are not whitespace.
    pub characters: usize,
}

impl TextStats {
    /// Collects every count in a single pass over the words.
    pub fn from_text(text: &str) -> Self {
        let mut stats = Self {
            tokens: token_count(text),
            sentences: sentence_count(text),
            characters: char_count(text),
            ..Self::default()
        };

        for word in words(text) {
            let syllables = syllable_count(word);
            stats.words += 1;
            stats.syllables += syllables;
            if syllables >= COMPLEX_WORD_SYLLABLES {
                stats.complex_words += 1;
            }
        }

        stats
    }

    /// Average words per sentence.
    pub fn words_per_sentence(&self) -> f64 {
        self.words as f64 / self.sentences.max(1) as f64
    }

    /// Average syllables per word, 0 for empty text.
    pub fn syllables_per_word(&self) -> f64 {
        if self.words == 0 { 0.0 } else { self.syllables as f64 / self.words as f64 }
    }

    /// Percentage of words that are complex, 0 for empty text.
    pub fn complex_word_percentage(&self) -> f64 {
        if self.words == 0 { 0.0 } else { 100.0 * self.complex_words as f64 / self.words as f64 }
    }
}

/// Number of whitespace-delimited tokens.
pub fn token_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of non-whitespace characters.
pub fn char_count(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Iterates over the words of `text` with surrounding punctuation removed.
///
/// Tokens made only of punctuation or symbols (`-`, `|`, `©`) are skipped.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| !word.is_empty())
}

/// Number of sentences, never less than one.
pub fn sentence_count(text: &str) -> usize {
    let sentences = SENTENCE
        .find_iter(text)
        .filter(|m| words(m.as_str()).count() >= MIN_SENTENCE_WORDS)
        .count();

    sentences.max(1)
}

/// Estimates the syllables in an English word.
///
/// Counts groups of consecutive vowels, then discounts a silent final `e`
/// and the `-es`/`-ed` endings that do not add a syllable (`makes`, `jumped`
/// but not `boxes`, `wanted`). Every word has at
/// least one syllable; numbers and other words without letters count as one.
pub fn syllable_count(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if letters.len() <= 3 {
        return 1;
    }

    let mut count = 0;
    let mut previous_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            count += 1;
        }
        previous_vowel = vowel;
    }

    let n = letters.len();
    let last = letters[n - 1];
    let before_last = letters[n - 2];
    let third_last = letters[n - 3];

    let silent_e = last == 'e' && !(before_last == 'l' && !is_vowel(third_last));
    let silent_suffix = before_last == 'e'
        && !is_vowel(third_last)
        && match last {
            'd' => !matches!(third_last, 't' | 'd'),
            's' => !matches!(third_last, 'c' | 'g' | 'h' | 's' | 'x' | 'z'),
            _ => false,
        };

    if (silent_e || silent_suffix) && count > 1 {
        count -= 1;
    }

    count.max(1)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}
