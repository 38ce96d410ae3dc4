// Languiny Switch Detection
// Decides whether typed text would read better under another layout

pub mod profile;
pub mod scorer;

use std::sync::LazyLock;

use smallvec::SmallVec;

use crate::remap::remap_with;
use crate::table::TableRegistry;
use crate::{Layout, LayoutError};

pub use profile::LayoutProfile;
pub use scorer::{LexicalScorer, PlausibilityScorer};

/// Default margin a candidate must beat the current reading by.
///
/// A well-formed word that is not in the lexicon scores `1 - w` (0.75 with the
/// default weight) and a lexicon word scores 1.0, so a lexicon hit alone never
/// clears this margin: a switch needs the current reading to be malformed.
pub const DEFAULT_MARGIN: f64 = 0.3;

/// Default share of the score given to common-word hits
pub const DEFAULT_DICTIONARY_WEIGHT: f64 = 0.25;

static DEFAULT_DETECTOR: LazyLock<Detector> = LazyLock::new(Detector::default);

/// Tunable parameters of the detector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorConfig {
    /// How much a candidate's score must exceed the current score
    pub margin: f64,
    /// Weight of the common-word lexicon in [`LexicalScorer`]
    pub dictionary_weight: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            dictionary_weight: DEFAULT_DICTIONARY_WEIGHT,
        }
    }
}

/// One alternate reading of the input
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub layout: Layout,
    /// The input remapped into `layout`
    pub text: String,
    pub score: f64,
}

/// Outcome of evaluating a text against the current layout
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub current: Layout,
    pub current_score: f64,
    /// Highest scoring alternate reading, if any layout pair applies
    pub best: Option<Candidate>,
    pub switch: bool,
}

impl Verdict {
    fn keep(current: Layout, current_score: f64) -> Self {
        Self {
            current,
            current_score,
            best: None,
            switch: false,
        }
    }

    /// The layout to switch to, when a switch is recommended
    pub fn target(&self) -> Option<Layout> {
        self.best.as_ref().filter(|_| self.switch).map(|c| c.layout)
    }
}

/// Switch detector over the built-in layout tables.
///
/// Stateless between calls; safe to share across threads.
#[derive(Debug, Clone)]
pub struct Detector<S = LexicalScorer> {
    scorer: S,
    margin: f64,
}

impl Detector<LexicalScorer> {
    pub fn new(config: DetectorConfig) -> Self {
        Self::with_scorer(LexicalScorer::new(config.dictionary_weight), config.margin)
    }
}

impl Default for Detector<LexicalScorer> {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}

impl<S: PlausibilityScorer> Detector<S> {
    /// Use a custom scoring strategy
    pub fn with_scorer(scorer: S, margin: f64) -> Self {
        Self { scorer, margin }
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Score the text under `current` and under every layout reachable from it
    pub fn evaluate(&self, text: &str, current: Layout) -> Verdict {
        if text.trim().is_empty() {
            return Verdict::keep(current, 0.0);
        }

        let current_score = self.scorer.score(text, current);

        // Keyed punctuation alone ("...", ",") remaps to letters; never act on it
        if !text.chars().any(char::is_alphabetic) {
            return Verdict::keep(current, current_score);
        }

        let candidates: SmallVec<[Candidate; 2]> = TableRegistry::global()
            .from_layout(current)
            .map(|table| {
                let remapped = remap_with(text, table);
                let score = self.scorer.score(&remapped, table.target());
                Candidate {
                    layout: table.target(),
                    text: remapped,
                    score,
                }
            })
            .collect();

        // First candidate wins ties, keeping the result stable
        let best = candidates
            .into_iter()
            .reduce(|best, next| if next.score > best.score { next } else { best });

        let switch = best
            .as_ref()
            .is_some_and(|c| c.score > current_score + self.margin);

        Verdict {
            current,
            current_score,
            best,
            switch,
        }
    }

    pub fn should_switch(&self, text: &str, current: Layout) -> bool {
        self.evaluate(text, current).switch
    }

    /// Same as [`Detector::should_switch`] with a raw layout identifier
    pub fn should_switch_id(&self, text: &str, current: i32) -> Result<bool, LayoutError> {
        let current = Layout::from_id(current)?;
        Ok(self.should_switch(text, current))
    }
}

/// Decide with the default detector whether `text` was typed in the wrong
/// layout. Fails only when `current` is not a known layout identifier.
///
/// # Examples
/// ```
/// use languiny_core::detect::should_switch;
/// assert_eq!(should_switch("ghbdtn", 0), Ok(true));
/// assert_eq!(should_switch("hello", 0), Ok(false));
/// assert!(should_switch("hello", 9).is_err());
/// ```
pub fn should_switch(text: &str, current: i32) -> Result<bool, LayoutError> {
    DEFAULT_DETECTOR.should_switch_id(text, current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gibberish_switches() {
        let detector = Detector::default();
        assert!(detector.should_switch("ghbdtn", Layout::EnUS));
        assert!(detector.should_switch("ntcn", Layout::EnUS));
        assert!(detector.should_switch("rfr ltkf", Layout::EnUS));
    }

    #[test]
    fn test_plausible_text_stays() {
        let detector = Detector::default();
        assert!(!detector.should_switch("hello", Layout::EnUS));
        assert!(!detector.should_switch("keyboard", Layout::EnUS));
        assert!(!detector.should_switch("привет", Layout::RuRU));
    }

    #[test]
    fn test_wrong_layout_from_russian() {
        let detector = Detector::default();
        // "program" typed with the Russian layout active
        let verdict = detector.evaluate("зкщпкфь", Layout::RuRU);
        assert!(verdict.switch);
        assert_eq!(verdict.target(), Some(Layout::EnUS));
        assert_eq!(verdict.best.unwrap().text, "program");
    }

    #[test]
    fn test_evaluate_reports_scores() {
        let verdict = Detector::default().evaluate("ghbdtn", Layout::EnUS);
        assert_eq!(verdict.current, Layout::EnUS);
        assert_eq!(verdict.current_score, 0.0);
        let best = verdict.best.clone().unwrap();
        assert_eq!(best.layout, Layout::RuRU);
        assert_eq!(best.text, "привет");
        assert_eq!(best.score, 1.0);
        assert_eq!(verdict.target(), Some(Layout::RuRU));
    }

    #[test]
    fn test_empty_and_whitespace_are_negative() {
        let detector = Detector::default();
        for layout in Layout::all() {
            assert!(!detector.should_switch("", layout));
            assert!(!detector.should_switch(" \t\n", layout));
            assert_eq!(detector.evaluate("", layout).best, None);
        }
    }

    #[test]
    fn test_no_letters_is_negative() {
        let detector = Detector::default();
        assert!(!detector.should_switch("12345!@#$%", Layout::EnUS));
    }

    #[test]
    fn test_keyed_punctuation_alone_is_negative() {
        let detector = Detector::default();
        for text in ["...", ",", ".", ";", "'", "[]", "`", ", ."] {
            for layout in Layout::all() {
                let verdict = detector.evaluate(text, layout);
                assert!(!verdict.switch, "{:?} under {}", text, layout);
                assert_eq!(verdict.best, None);
            }
        }
        assert_eq!(should_switch("...", 0), Ok(false));
        assert_eq!(should_switch(",", 0), Ok(false));
    }

    #[test]
    fn test_word_with_trailing_punctuation_stays() {
        let detector = Detector::default();
        assert!(!detector.should_switch("Wait...", Layout::EnUS));
        assert!(!detector.should_switch("Hmm...", Layout::EnUS));
        assert!(!detector.should_switch("Hello, world.", Layout::EnUS));
        // Still caught when the word itself is wrong-layout
        assert!(detector.should_switch("ghbdtn!", Layout::EnUS));
    }

    #[test]
    fn test_vowelless_abbreviations_stay() {
        let detector = Detector::default();
        for text in ["http", "html", "tcp", "ftp", "ssh", "www", "https"] {
            assert!(!detector.should_switch(text, Layout::EnUS), "{}", text);
        }
    }

    #[test]
    fn test_margin_is_configurable() {
        // "ntcn" remaps to "тест": 0.75 against 0.0
        let strict = Detector::new(DetectorConfig {
            margin: 0.8,
            ..DetectorConfig::default()
        });
        assert!(!strict.should_switch("ntcn", Layout::EnUS));

        let loose = Detector::new(DetectorConfig {
            margin: 0.5,
            ..DetectorConfig::default()
        });
        assert!(loose.should_switch("ntcn", Layout::EnUS));
    }

    #[test]
    fn test_custom_scorer() {
        let prefers_russian = |_: &str, layout: Layout| match layout {
            Layout::RuRU => 1.0,
            Layout::EnUS => 0.0,
        };
        let detector = Detector::with_scorer(prefers_russian, 0.5);
        assert!(detector.should_switch("hello", Layout::EnUS));
        assert!(!detector.should_switch("hello", Layout::RuRU));
    }

    #[test]
    fn test_should_switch_ids() {
        assert_eq!(should_switch("ghbdtn", 0), Ok(true));
        assert_eq!(should_switch("hello", 0), Ok(false));
        assert_eq!(should_switch("", 1), Ok(false));
        assert_eq!(should_switch("hello", 2), Err(LayoutError::UnknownLayout(2)));
        assert_eq!(should_switch("", -1), Err(LayoutError::UnknownLayout(-1)));
    }

    #[test]
    fn test_deterministic() {
        let detector = Detector::default();
        let first = detector.evaluate("rfr ltkf", Layout::EnUS);
        for _ in 0..10 {
            assert_eq!(detector.evaluate("rfr ltkf", Layout::EnUS), first);
        }
    }
}
