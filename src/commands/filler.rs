//! Filler word command

use crate::core::Word;
use crate::solver::{LetterSet, find_filler_words};
use crate::wordlists::WordCorpus;
use anyhow::Result;

/// Filler words found for a letter query
pub struct FillerResult<'a> {
    /// Distinct query letters, sorted
    pub letters: String,
    pub words: Vec<&'a Word>,
}

/// Find corpus words spelled only from `letters`
///
/// # Errors
///
/// Returns an error if `letters` is not 1-5 distinct ASCII letters.
pub fn run_filler<'a>(corpus: &'a WordCorpus, letters: &str) -> Result<FillerResult<'a>> {
    let set = LetterSet::parse(letters)?;
    let words = find_filler_words(corpus, letters)?;

    Ok(FillerResult {
        letters: set.letters(),
        words,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filler_reports_normalised_letters() {
        let corpus = WordCorpus::from_strs(&["tests", "sates", "crane"]);
        let result = run_filler(&corpus, "TSeTa").unwrap();

        assert_eq!(result.letters, "aest");
        let texts: Vec<&str> = result.words.iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["sates", "tests"]);
    }

    #[test]
    fn filler_rejects_bad_query() {
        let corpus = WordCorpus::from_strs(&["crane"]);
        assert!(run_filler(&corpus, "").is_err());
        assert!(run_filler(&corpus, "abcdef").is_err());
        assert!(run_filler(&corpus, "ab!").is_err());
    }
}
