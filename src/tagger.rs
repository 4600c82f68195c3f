use std::sync::Arc;

use crate::language::Language;
use crate::languages::{LanguageRules, RuleContext};
use crate::lexicon::Lexicon;
use crate::token::TaggedToken;

/// Tag assigned by the lookup stage, before any rule runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Provisional {
    /// Stripping left nothing of the token.
    Blank,
    /// Unknown single character, tagged `<char>^`.
    Sentinel(String),
    Tag(String),
}

impl Provisional {
    fn into_tag(self) -> String {
        match self {
            Provisional::Blank => String::new(),
            Provisional::Sentinel(tag) | Provisional::Tag(tag) => tag,
        }
    }
}

/// Lexicon lookup followed by contextual transformation rules.
///
/// The lexicon is never written to after construction, so a single `Tagger`
/// (or several sharing one `Arc<Lexicon>`) can serve any number of threads.
pub struct Tagger {
    lexicon: Arc<Lexicon>,
    rules: &'static dyn LanguageRules,
}

impl Tagger {
    pub fn new(lexicon: impl Into<Arc<Lexicon>>) -> Self {
        Self::with_language(lexicon, Language::default())
    }

    pub fn with_language(lexicon: impl Into<Arc<Lexicon>>, language: Language) -> Self {
        Self {
            lexicon: lexicon.into(),
            rules: language.rules(),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Tags each token, returning one result per token in input order.
    pub fn tag<S: AsRef<str>>(&self, words: &[S]) -> Vec<TaggedToken> {
        let mut output: Vec<TaggedToken> = Vec::with_capacity(words.len());

        for (i, word) in words.iter().enumerate() {
            let word = word.as_ref();
            let tag = match self.lookup(word) {
                Provisional::Tag(tag) => {
                    let prev = i
                        .checked_sub(1)
                        .map(|p| (words[p].as_ref(), output[p].tag.as_str()));
                    let ctx = RuleContext {
                        word,
                        prev_word: prev.map(|(w, _)| w),
                        prev_tag: prev.map(|(_, t)| t),
                    };
                    self.rules.apply_rules(&ctx, &tag)
                }
                terminal => terminal.into_tag(),
            };
            output.push(TaggedToken::new(word, tag));
        }
        output
    }

    /// Splits on single spaces only, so doubled spaces yield empty tokens.
    pub fn tag_sentence(&self, sentence: &str) -> Vec<TaggedToken> {
        if sentence.is_empty() {
            return Vec::new();
        }
        let words: Vec<&str> = sentence.split(' ').collect();
        self.tag(&words)
    }

    pub(crate) fn lookup(&self, word: &str) -> Provisional {
        let clean = strip_special(word);
        if clean.is_empty() {
            return Provisional::Blank;
        }

        if let Some(tag) = self.lexicon.primary_tag(clean) {
            return Provisional::Tag(tag.to_string());
        }

        let mut chars = clean.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Provisional::Sentinel(format!("{c}^")),
            _ => Provisional::Tag("NN".to_string()),
        }
    }
}

/// Trims characters outside `[A-Za-z0-9]` from both ends. A single-character
/// token is returned as is.
fn strip_special(word: &str) -> &str {
    if word.chars().count() == 1 {
        return word;
    }
    word.trim_matches(|c: char| !c.is_ascii_alphanumeric())
}
