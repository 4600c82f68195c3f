use serde::{Deserialize, Serialize};

/// A token paired with its final part-of-speech tag.
///
/// `word` is the token exactly as it was passed in, punctuation included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaggedToken {
    pub word: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_word_and_tag() {
        let token = TaggedToken::new("dog,", "NN");
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"word":"dog,","tag":"NN"}"#);
    }
}
