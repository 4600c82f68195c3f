use std::collections::HashMap;
use tracing::debug;

/// Word to candidate-tag dictionary.
///
/// Keys are stored exactly as they appear in the source text. Lookups try the
/// exact spelling first and the lowercased spelling second.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, Vec<String>>,
}

impl Lexicon {
    /// Builds a lexicon from lines of the form `word tag1 tag2 ...`.
    ///
    /// A later line for the same word replaces the earlier one. Lines without a
    /// word field are skipped, so this never fails.
    pub fn new(text: &str) -> Self {
        let mut entries = HashMap::new();
        let mut skipped = 0usize;

        // "\r\n", "\n" and a lone "\r" all end a line; the empty pieces are blank lines.
        for line in text.split(['\r', '\n']).filter(|l| !l.is_empty()) {
            match Self::parse_line(line) {
                Some((word, tags)) => {
                    entries.insert(word, tags);
                }
                None => skipped += 1,
            }
        }

        debug!(entries = entries.len(), skipped, "built lexicon");
        Self { entries }
    }

    fn parse_line(line: &str) -> Option<(String, Vec<String>)> {
        let mut fields = line.split(' ');
        let word = fields.next().filter(|w| !w.is_empty())?;
        // "dog NN " or "dog  NN" leave empty fields behind; they are not tags.
        let tags = fields
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        Some((word.to_string(), tags))
    }

    /// True if the word is stored either as given or lowercased.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word) || self.entries.contains_key(&word.to_lowercase())
    }

    /// Candidate tags stored under exactly this key.
    pub fn tags(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    /// First tag for the word, trying the exact spelling and then the
    /// lowercased one. The first key found decides: if it has no tags the
    /// result is `None`, without trying the other spelling.
    pub fn primary_tag(&self, word: &str) -> Option<&str> {
        let tags = match self.tags(word) {
            Some(tags) => tags,
            None => self.tags(&word.to_lowercase())?,
        };
        tags.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entries_in_priority_order() {
        let lexicon = Lexicon::new("dog NN NNS VB\nthe DT");
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.tags("dog").unwrap(), ["NN", "NNS", "VB"]);
        assert_eq!(lexicon.primary_tag("dog"), Some("NN"));
        assert_eq!(lexicon.primary_tag("the"), Some("DT"));
    }

    #[test]
    fn test_last_line_wins() {
        let lexicon = Lexicon::new("run VB NN\nrun NN");
        assert_eq!(lexicon.tags("run").unwrap(), ["NN"]);
    }

    #[test]
    fn test_blank_and_wordless_lines_are_skipped() {
        let lexicon = Lexicon::new("\n  NN\ncat NN\n\n");
        assert_eq!(lexicon.len(), 1);
        assert!(lexicon.contains("cat"));
        assert!(!lexicon.contains(""));
    }

    #[test]
    fn test_empty_input() {
        let lexicon = Lexicon::new("");
        assert!(lexicon.is_empty());
        assert!(!lexicon.contains("anything"));
    }

    #[test]
    fn test_word_without_tags() {
        let lexicon = Lexicon::new("orphan");
        assert!(lexicon.contains("orphan"));
        assert_eq!(lexicon.tags("orphan").unwrap().len(), 0);
        assert_eq!(lexicon.primary_tag("orphan"), None);
    }

    #[test]
    fn test_stray_spaces_do_not_produce_empty_tags() {
        let lexicon = Lexicon::new("dog  NN \r\ncat NNS");
        assert_eq!(lexicon.tags("dog").unwrap(), ["NN"]);
        assert_eq!(lexicon.tags("cat").unwrap(), ["NNS"]);
    }

    #[test]
    fn test_contains_is_case_insensitive_on_query_only() {
        let lexicon = Lexicon::new("the DT\nParis NNP");
        assert!(lexicon.contains("the"));
        assert!(lexicon.contains("The"));
        assert!(lexicon.contains("THE"));
        assert!(lexicon.contains("Paris"));
        // Stored keys are not lowercased.
        assert!(!lexicon.contains("paris"));
    }

    #[test]
    fn test_primary_tag_prefers_exact_case() {
        let lexicon = Lexicon::new("May MD\nmay NNP");
        assert_eq!(lexicon.primary_tag("May"), Some("MD"));
        assert_eq!(lexicon.primary_tag("may"), Some("NNP"));
        assert_eq!(lexicon.primary_tag("MAY"), Some("NNP"));
    }

    #[test]
    fn test_empty_exact_entry_stops_lookup() {
        let lexicon = Lexicon::new("Bank\nbank VB");
        assert_eq!(lexicon.primary_tag("Bank"), None);
        assert_eq!(lexicon.primary_tag("BANK"), Some("VB"));
    }

    #[test]
    fn test_lone_carriage_return_ends_line() {
        let lexicon = Lexicon::new("dog NN\rcat NNS\r\rthe DT\r\n");
        assert_eq!(lexicon.len(), 3);
        assert_eq!(lexicon.tags("dog").unwrap(), ["NN"]);
        assert_eq!(lexicon.tags("cat").unwrap(), ["NNS"]);
        assert_eq!(lexicon.primary_tag("the"), Some("DT"));
    }
}
