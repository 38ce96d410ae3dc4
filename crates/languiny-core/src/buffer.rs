// Languiny Word Buffer
// Collects typed characters into words and flushes them at boundaries

use crate::table;

/// A completed word together with the character that ended it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    /// Boundary character that closed the word (`None` for an explicit flush)
    pub separator: Option<char>,
}

/// Accumulates characters until a word boundary is typed.
///
/// Punctuation that sits on a letter key of some supported layout (`,` `.`
/// `;` `[` and friends) is part of the word, since under the other layout it
/// is a letter.
#[derive(Debug, Clone, Default)]
pub struct WordBuffer {
    buffer: String,
}

impl WordBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one typed character. Returns the finished word when `c` is a
    /// boundary.
    pub fn push(&mut self, c: char) -> Option<Word> {
        if is_boundary(c) {
            return self.flush(Some(c));
        }
        if !c.is_control() {
            self.buffer.push(c);
            log::trace!("buffer: {}", self.buffer);
        }
        None
    }

    /// Remove the last character, if any
    pub fn backspace(&mut self) {
        self.buffer.pop();
        log::trace!("buffer: {}", self.buffer);
    }

    /// Drop the current contents without emitting a word
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Emit the buffered word. Nothing is emitted for an empty buffer unless a
    /// separator was typed.
    pub fn flush(&mut self, separator: Option<char>) -> Option<Word> {
        let text = std::mem::take(&mut self.buffer);
        if text.is_empty() && separator.is_none() {
            return None;
        }
        Some(Word { text, separator })
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Buffered length in code points
    pub fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

/// Whitespace, and punctuation that no layout table treats as a key
pub fn is_boundary(c: char) -> bool {
    if c.is_whitespace() {
        return true;
    }
    is_punctuation(c) && !table::is_keyed_symbol(c)
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '«' | '»' | '„' | '“' | '”' | '‘' | '’' | '—' | '–' | '…' | '¡' | '¿' | '№'
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(buffer: &mut WordBuffer, text: &str) -> Vec<Word> {
        text.chars().filter_map(|c| buffer.push(c)).collect()
    }

    #[test]
    fn test_word_boundaries() {
        let mut buffer = WordBuffer::new();
        let words = feed(&mut buffer, "test next");
        assert_eq!(
            words,
            vec![Word {
                text: "test".to_string(),
                separator: Some(' '),
            }]
        );
        assert_eq!(buffer.as_str(), "next");

        let last = buffer.flush(None).unwrap();
        assert_eq!(last.text, "next");
        assert_eq!(last.separator, None);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_backspace_updates_buffer() {
        let mut buffer = WordBuffer::new();
        feed(&mut buffer, "ab");
        buffer.backspace();
        buffer.backspace();
        buffer.backspace();
        assert!(buffer.is_empty());
        assert_eq!(buffer.flush(None), None);
    }

    #[test]
    fn test_separator_on_empty_buffer_is_emitted() {
        let mut buffer = WordBuffer::new();
        let word = buffer.push(' ').unwrap();
        assert_eq!(word.text, "");
        assert_eq!(word.separator, Some(' '));
    }

    #[test]
    fn test_keyed_punctuation_stays_in_word() {
        let mut buffer = WordBuffer::new();
        let words = feed(&mut buffer, "[jhjij!");
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text, "[jhjij");
        assert_eq!(words[0].separator, Some('!'));
    }

    #[test]
    fn test_unicode_length() {
        let mut buffer = WordBuffer::new();
        feed(&mut buffer, "привет");
        assert_eq!(buffer.len(), 6);
        buffer.backspace();
        assert_eq!(buffer.as_str(), "приве");
    }

    #[test]
    fn test_reset_discards() {
        let mut buffer = WordBuffer::new();
        feed(&mut buffer, "abc");
        buffer.reset();
        assert_eq!(buffer.flush(None), None);
    }

    #[test]
    fn test_boundaries() {
        assert!(is_boundary(' '));
        assert!(is_boundary('\n'));
        assert!(is_boundary('!'));
        assert!(is_boundary('?'));
        assert!(is_boundary('«'));
        assert!(!is_boundary(','));
        assert!(!is_boundary(';'));
        assert!(!is_boundary('a'));
        assert!(!is_boundary('ж'));
    }
}
