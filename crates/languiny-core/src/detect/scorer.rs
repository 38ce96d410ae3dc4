// Languiny Plausibility Scoring
// Strategies that rate how plausible a text is when read under a layout

use smallvec::SmallVec;

use super::profile::LayoutProfile;
use crate::Layout;

/// Rates how plausible `text` is as something typed under `layout`.
///
/// Scores are comparable across layouts. Implementations must be
/// deterministic and must not consult external state.
pub trait PlausibilityScorer: Send + Sync {
    fn score(&self, text: &str, layout: Layout) -> f64;
}

impl<F> PlausibilityScorer for F
where
    F: Fn(&str, Layout) -> f64 + Send + Sync,
{
    fn score(&self, text: &str, layout: Layout) -> f64 {
        self(text, layout)
    }
}

/// Default scorer: alphabet coverage weighted by word shape and a small
/// common-word lexicon.
///
/// ```text
/// score = coverage * ((1 - w) * shape + w * lexicon)
/// ```
///
/// * `coverage` - alphabet letters / non-whitespace characters, not counting
///   the non-letters that close a token (`wait...`, `hello,`)
/// * `shape` - letters inside well-formed or common words / letters inside words
/// * `lexicon` - common words / words
///
/// The result lies in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexicalScorer {
    dictionary_weight: f64,
}

impl LexicalScorer {
    pub fn new(dictionary_weight: f64) -> Self {
        Self {
            dictionary_weight: dictionary_weight.clamp(0.0, 1.0),
        }
    }

    pub fn dictionary_weight(&self) -> f64 {
        self.dictionary_weight
    }
}

impl Default for LexicalScorer {
    fn default() -> Self {
        Self::new(super::DEFAULT_DICTIONARY_WEIGHT)
    }
}

impl PlausibilityScorer for LexicalScorer {
    fn score(&self, text: &str, layout: Layout) -> f64 {
        let profile = LayoutProfile::of(layout);

        let mut visible = 0usize;
        let mut letters = 0usize;
        // Non-letters since the last letter of the current token
        let mut pending = 0usize;
        let mut words: SmallVec<[String; 8]> = SmallVec::new();
        let mut current = String::new();

        for c in text.chars() {
            if c.is_whitespace() {
                flush_word(&mut current, &mut words);
                pending = 0;
                continue;
            }
            let lower = lowercase(c);
            if profile.is_letter(lower) {
                visible += pending + 1;
                pending = 0;
                letters += 1;
                current.push(lower);
            } else {
                pending += 1;
                flush_word(&mut current, &mut words);
            }
        }
        flush_word(&mut current, &mut words);

        if visible == 0 || words.is_empty() {
            return 0.0;
        }

        let coverage = letters as f64 / visible as f64;

        let mut common = 0usize;
        let mut plausible_letters = 0usize;
        for word in &words {
            let is_common = profile.is_common_word(word);
            if is_common {
                common += 1;
            }
            if is_common || profile.is_well_formed(word) {
                plausible_letters += word.chars().count();
            }
        }

        let shape = plausible_letters as f64 / letters as f64;
        let lexicon = common as f64 / words.len() as f64;
        let w = self.dictionary_weight;

        coverage * ((1.0 - w) * shape + w * lexicon)
    }
}

fn flush_word(current: &mut String, words: &mut SmallVec<[String; 8]>) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

fn lowercase(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
