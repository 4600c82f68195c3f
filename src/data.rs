use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::LexiconError;
use crate::lexicon::Lexicon;

/// Small English sample lexicon shipped with the crate.
pub fn bundled_lexicon() -> Lexicon {
    Lexicon::new(include_str!("../data/lexicon.txt"))
}

/// Reads a lexicon file in `word tag1 tag2 ...` format.
pub fn load_lexicon(path: impl AsRef<Path>) -> Result<Lexicon, LexiconError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let lexicon = Lexicon::new(&text);
    debug!(path = %path.display(), entries = lexicon.len(), "loaded lexicon");
    Ok(lexicon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bundled_lexicon_has_common_words() {
        let lexicon = bundled_lexicon();
        assert!(!lexicon.is_empty());
        assert_eq!(lexicon.primary_tag("the"), Some("DT"));
        assert!(lexicon.contains("The"));
    }

    #[test]
    fn test_load_lexicon_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dog NN NNS").unwrap();
        writeln!(file, "the DT").unwrap();

        let lexicon = load_lexicon(file.path()).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.primary_tag("dog"), Some("NN"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = load_lexicon(&path).unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }
}
