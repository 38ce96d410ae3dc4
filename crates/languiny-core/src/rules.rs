// Languiny Word Rules
// Filters deciding which flushed words are worth judging at all

use std::sync::LazyLock;

use regex::Regex;

/// Default minimum word length, in code points
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

static URL_OR_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        ^(?:
            [a-z][a-z0-9+.\-]*://\S+        # scheme://...
          | www\.\S+                        # www.host
          | [^\s@]+@[^\s@]+\.[^\s@]+        # user@host.tld
        )$",
    )
    .unwrap()
});

/// Word-level rules applied before switch detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordFilter {
    pub min_word_length: usize,
    pub ignore_urls_emails: bool,
}

impl Default for WordFilter {
    fn default() -> Self {
        Self {
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            ignore_urls_emails: true,
        }
    }
}

impl WordFilter {
    pub fn new(min_word_length: usize, ignore_urls_emails: bool) -> Self {
        Self {
            min_word_length,
            ignore_urls_emails,
        }
    }

    /// Whether `word` should be handed to the detector
    pub fn accepts(&self, word: &str) -> bool {
        if word.chars().count() < self.min_word_length {
            return false;
        }
        !(self.ignore_urls_emails && looks_like_url_or_email(word))
    }
}

pub fn looks_like_url_or_email(word: &str) -> bool {
    URL_OR_EMAIL.is_match(word)
}
