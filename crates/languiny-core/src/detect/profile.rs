// Languiny Layout Profiles
// Per-layout alphabet and word-shape facts used by the plausibility scorer

use crate::Layout;

/// What a plausible word looks like when typed under a layout
#[derive(Debug)]
pub struct LayoutProfile {
    pub layout: Layout,
    /// Lowercase letters of the layout's alphabet
    pub alphabet: &'static str,
    /// Lowercase vowels (subset of `alphabet`)
    pub vowels: &'static str,
    /// Letters that are neither vowels nor consonants (e.g. Russian hard/soft signs)
    pub signs: &'static str,
    /// Longest run of consonants accepted inside one word
    pub max_consonant_run: usize,
    /// Letters a word never starts with
    pub forbidden_initials: &'static str,
    /// Short list of very frequent words, lowercase
    pub common_words: &'static [&'static str],
}

static EN_US: LayoutProfile = LayoutProfile {
    layout: Layout::EnUS,
    alphabet: "abcdefghijklmnopqrstuvwxyz",
    vowels: "aeiouy",
    signs: "",
    max_consonant_run: 5,
    forbidden_initials: "",
    common_words: &[
        "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be",
        "because", "but", "by", "can", "come", "could", "day", "do", "even", "for", "from", "get",
        "give", "go", "good", "have", "he", "hello", "her", "hi", "him", "his", "how", "i", "if",
        "in", "into", "is", "it", "just", "know", "like", "look", "make", "me", "my", "new", "no",
        "not", "now", "of", "ok", "on", "one", "only", "or", "other", "our", "out", "people",
        "please", "say", "see", "she", "so", "some", "take", "thanks", "than", "that", "the",
        "their", "them", "then", "there", "they", "think", "this", "time", "to", "two", "up",
        "us", "use", "want", "was", "way", "we", "well", "what", "when", "which", "who", "will",
        "with", "work", "would", "year", "yes", "you", "your",
        // vowel-less abbreviations and interjections
        "brb", "btw", "cpu", "css", "dns", "ftp", "gps", "gpu", "hmm", "html", "http", "https",
        "jpg", "mrs", "npm", "pdf", "php", "pls", "png", "sql", "ssd", "ssh", "ssl", "svg", "tcp",
        "thx", "tls", "www", "xml",
    ],
};

static RU_RU: LayoutProfile = LayoutProfile {
    layout: Layout::RuRU,
    alphabet: "абвгдеёжзийклмнопрстуфхцчшщъыьэюя",
    vowels: "аеёиоуыэюя",
    signs: "ъь",
    max_consonant_run: 5,
    forbidden_initials: "ъьы",
    common_words: &[
        "а", "без", "был", "была", "было", "быть", "в", "вам", "вас", "весь", "во", "вот", "все",
        "всё", "вы", "где", "да", "даже", "дела", "для", "до", "его", "ее", "её", "если", "есть",
        "еще", "ещё", "же", "за", "здравствуйте", "и", "из", "или", "им", "их", "к", "как",
        "когда", "кто", "ли", "мне", "может", "можно", "мой", "мы", "на", "надо", "нас", "не",
        "него", "нет", "ни", "но", "ну", "о", "об", "он", "она", "они", "оно", "от", "очень",
        "по", "пока", "пожалуйста", "привет", "при", "с", "сейчас", "со", "спасибо", "так",
        "там", "то", "только", "ты", "у", "уже", "хорошо", "что", "это", "я",
    ],
};

impl LayoutProfile {
    /// Profile for a layout
    pub fn of(layout: Layout) -> &'static LayoutProfile {
        match layout {
            Layout::EnUS => &EN_US,
            Layout::RuRU => &RU_RU,
        }
    }

    /// `c` must already be lowercase
    pub fn is_letter(&self, c: char) -> bool {
        self.alphabet.contains(c)
    }

    pub fn is_vowel(&self, c: char) -> bool {
        self.vowels.contains(c)
    }

    pub fn is_consonant(&self, c: char) -> bool {
        self.is_letter(c) && !self.is_vowel(c) && !self.signs.contains(c)
    }

    pub fn is_common_word(&self, word: &str) -> bool {
        self.common_words.contains(&word)
    }

    /// Whether a lowercase word has a shape this layout's language allows
    pub fn is_well_formed(&self, word: &str) -> bool {
        let Some(first) = word.chars().next() else {
            return false;
        };
        if self.forbidden_initials.contains(first) {
            return false;
        }

        let mut letters = 0;
        let mut has_vowel = false;
        let mut run = 0;
        let mut longest_run = 0;
        for c in word.chars() {
            letters += 1;
            if self.is_vowel(c) {
                has_vowel = true;
                run = 0;
            } else if self.is_consonant(c) {
                run += 1;
                longest_run = longest_run.max(run);
            }
        }

        (has_vowel || letters < 3) && longest_run <= self.max_consonant_run
    }
}
