//! Candidate filtering from tile feedback
//!
//! A guess and its feedback compile into a [`GuessConstraint`]; a candidate
//! survives when it satisfies every positional and letter-count rule.
//!
//! # Rules
//! For a guess letter `L` at position `i`:
//! - Correct: the candidate has `L` at `i`
//! - Present: the candidate does not have `L` at `i`
//! - Absent: the candidate does not have `L` at `i`
//!
//! Counting: let `k` be the number of Present/Correct tiles for `L`. If any
//! tile for `L` is Absent the candidate holds exactly `k` copies of `L`
//! (zero when every tile is Absent), otherwise at least `k`.

use crate::core::{ALPHABET_SIZE, Feedback, Mark, WORD_LENGTH, Word, letter_index};

/// Upper bound used when a letter's count is unconstrained
const UNBOUNDED: u8 = WORD_LENGTH as u8;

/// Constraint set implied by a single guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessConstraint {
    required: [Option<u8>; WORD_LENGTH],
    excluded: [u32; WORD_LENGTH],
    min_counts: [u8; ALPHABET_SIZE],
    max_counts: [u8; ALPHABET_SIZE],
}

impl GuessConstraint {
    /// Compile a guess and its feedback
    #[must_use]
    pub fn new(guess: &Word, feedback: Feedback) -> Self {
        let mut required = [None; WORD_LENGTH];
        let mut excluded = [0u32; WORD_LENGTH];
        let mut confirmed = [0u8; ALPHABET_SIZE];
        let mut capped = [false; ALPHABET_SIZE];

        for (i, (&letter, &mark)) in guess.chars().iter().zip(feedback.marks()).enumerate() {
            let Some(index) = letter_index(letter) else {
                continue;
            };
            match mark {
                Mark::Correct => {
                    required[i] = Some(letter);
                    confirmed[index] += 1;
                }
                Mark::Present => {
                    excluded[i] |= 1 << index;
                    confirmed[index] += 1;
                }
                Mark::Absent => {
                    excluded[i] |= 1 << index;
                    capped[index] = true;
                }
            }
        }

        let max_counts = std::array::from_fn(|i| if capped[i] { confirmed[i] } else { UNBOUNDED });

        Self {
            required,
            excluded,
            min_counts: confirmed,
            max_counts,
        }
    }

    /// Check whether a candidate is consistent with this guess
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        for (i, &ch) in word.chars().iter().enumerate() {
            if self.required[i].is_some_and(|required| required != ch) {
                return false;
            }
            if letter_index(ch).is_some_and(|index| self.excluded[i] & (1 << index) != 0) {
                return false;
            }
        }

        word.letter_counts()
            .iter()
            .zip(self.min_counts.iter().zip(&self.max_counts))
            .all(|(&count, (&min, &max))| (min..=max).contains(&count))
    }
}

/// Narrow `candidates` to the words consistent with `guess` and `feedback`
///
/// Pure: the input is not modified and survivors keep their order.
///
/// # Examples
/// ```
/// use wordle_assist::core::{Feedback, Word};
/// use wordle_assist::solver::filter;
///
/// let words: Vec<Word> = ["crane", "slate", "plate", "irate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let candidates: Vec<&Word> = words.iter().collect();
///
/// let guess = Word::new("crate").unwrap();
/// let feedback = Feedback::parse("--GGG").unwrap();
///
/// let survivors = filter(&candidates, &guess, feedback);
/// assert_eq!(survivors.len(), 2); // slate, plate
/// ```
#[must_use]
pub fn filter<'a>(candidates: &[&'a Word], guess: &Word, feedback: Feedback) -> Vec<&'a Word> {
    let constraint = GuessConstraint::new(guess, feedback);
    candidates
        .iter()
        .copied()
        .filter(|word| constraint.matches(word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn run(list: &[&str], guess: &str, feedback: &str) -> Vec<String> {
        let owned = words(list);
        let candidates: Vec<&Word> = owned.iter().collect();
        filter(
            &candidates,
            &Word::new(guess).unwrap(),
            Feedback::parse(feedback).unwrap(),
        )
        .into_iter()
        .map(|w| w.text().to_string())
        .collect()
    }

    #[test]
    fn absent_letter_excludes_words_containing_it() {
        let survivors = run(&["crane", "slate", "moist", "pudgy"], "tacos", "-----");
        assert_eq!(survivors, ["pudgy"]);
    }

    #[test]
    fn correct_letter_pins_position() {
        let survivors = run(&["crane", "crate", "grate", "brave"], "zzzze", "----G");
        assert_eq!(survivors, ["crane", "crate", "grate", "brave"]);

        let survivors = run(&["crane", "crate", "grate", "brave"], "gxxxx", "G----");
        assert_eq!(survivors, ["grate"]);
    }

    #[test]
    fn present_letter_required_elsewhere() {
        // R is in the word but not at position 1
        let survivors = run(&["crane", "rainy", "moist", "tiger"], "xrxxx", "-Y---");
        assert_eq!(survivors, ["rainy", "tiger"]);
    }

    #[test]
    fn apple_scenario_eliminates_everything() {
        // A green, first P yellow, second P gray: exactly one P, not at 1 or 2.
        // L and E gray remove ANGLE and ANKLE; APPLE has P at position 1.
        let survivors = run(&["apple", "angle", "ankle"], "apple", "GY---");
        assert!(survivors.is_empty());
    }

    #[test]
    fn repeated_green_letter() {
        // SPEED against CREEP gives -YGG-
        let survivors = run(&["creep", "geese", "sheep"], "speed", "-YGG-");
        assert_eq!(survivors, ["creep"]);
    }

    #[test]
    fn gray_surplus_copy_sets_exact_count() {
        // GEESE against CREEP gives -YG--: the gray E caps the count at two
        // instead of ruling E out
        let survivors = run(&["creep", "eerie", "green", "fever"], "geese", "-YG--");
        assert_eq!(survivors, ["creep"]);
    }

    #[test]
    fn present_count_is_a_minimum() {
        // Two yellow E tiles require at least two E
        let survivors = run(&["eerie", "elder", "bread"], "xeexx", "-YY--");
        assert_eq!(survivors, ["elder"]);
    }

    #[test]
    fn perfect_feedback_keeps_only_the_guess() {
        let survivors = run(&["crane", "crate", "grate"], "crate", "GGGGG");
        assert_eq!(survivors, ["crate"]);
    }

    #[test]
    fn all_correct_is_idempotent() {
        let owned = words(&["crane", "crate", "grate"]);
        let candidates: Vec<&Word> = owned.iter().collect();
        let guess = Word::new("crate").unwrap();

        let once = filter(&candidates, &guess, Feedback::PERFECT);
        let twice = filter(&once, &guess, Feedback::PERFECT);
        assert_eq!(once, twice);
    }

    #[test]
    fn filter_never_grows() {
        let owned = words(&["crane", "slate", "irate", "crate", "grate", "trace"]);
        let candidates: Vec<&Word> = owned.iter().collect();
        let guess = Word::new("react").unwrap();

        for feedback in ["-----", "YYYYY", "GGGGG", "G-Y-G", "--G--"] {
            let survivors = filter(&candidates, &guess, Feedback::parse(feedback).unwrap());
            assert!(survivors.len() <= candidates.len());
        }
    }

    #[test]
    fn true_feedback_keeps_answer() {
        let owned = words(&["speed", "creep", "erase", "geese", "abbey", "robot", "floor"]);
        for answer in &owned {
            for guess in &owned {
                let feedback = Feedback::calculate(guess, answer);
                let constraint = GuessConstraint::new(guess, feedback);
                assert!(
                    constraint.matches(answer),
                    "{guess} / {feedback} wrongly rejects {answer}"
                );
            }
        }
    }
}
