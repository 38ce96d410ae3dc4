// Languiny Corrector
// Applies word rules and switch detection to finished words

use crate::detect::{Detector, DetectorConfig, LexicalScorer, PlausibilityScorer};
use crate::rules::WordFilter;
use crate::Layout;

/// A word re-typed under the layout the user most likely intended
#[derive(Debug, Clone, PartialEq)]
pub struct Correction {
    pub layout: Layout,
    pub text: String,
}

/// Word filter plus detector, as a host would run them on every flushed word
#[derive(Debug, Clone)]
pub struct Corrector<S = LexicalScorer> {
    filter: WordFilter,
    detector: Detector<S>,
}

impl Corrector<LexicalScorer> {
    pub fn new(filter: WordFilter, config: DetectorConfig) -> Self {
        Self {
            filter,
            detector: Detector::new(config),
        }
    }
}

impl Default for Corrector<LexicalScorer> {
    fn default() -> Self {
        Self::new(WordFilter::default(), DetectorConfig::default())
    }
}

impl<S: PlausibilityScorer> Corrector<S> {
    pub fn with_detector(filter: WordFilter, detector: Detector<S>) -> Self {
        Self { filter, detector }
    }

    pub fn filter(&self) -> &WordFilter {
        &self.filter
    }

    pub fn detector(&self) -> &Detector<S> {
        &self.detector
    }

    /// The corrected word, or `None` when the word is filtered out or already
    /// reads fine under `current`.
    pub fn correct(&self, word: &str, current: Layout) -> Option<Correction> {
        if !self.filter.accepts(word) {
            return None;
        }
        let verdict = self.detector.evaluate(word, current);
        let layout = verdict.target()?;
        let text = verdict.best?.text;
        Some(Correction { layout, text })
    }
}
