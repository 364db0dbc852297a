//! Quiz session state
//!
//! Maintains:
//! - The subset of strings eligible for question generation
//! - The current fretboard size
//! - The active question and its derived correct answer

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::scale::{self, NoteName};
use crate::strings::GuitarString;

/// Fretboard size a session starts with.
pub const DEFAULT_MAX_FRETS: usize = 12;

/// Errors from session queries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// The answer was queried before any question had been generated.
    #[error("no question has been generated yet")]
    NoActiveQuestion,
}

/// An active quiz question: a string and a fret interval on it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Question {
    /// The string the note sits on.
    pub string: GuitarString,
    /// Fret distance from the open string.
    pub interval: usize,
}

/// Complete quiz session state.
///
/// Owns the allowed-string subset, the fretboard size, the active question,
/// and the random source questions are drawn from. The random source is
/// injected so question sequences are reproducible under test.
#[derive(Debug)]
pub struct QuizSession<R = StdRng> {
    allowed: Vec<GuitarString>,
    max_frets: usize,
    current: Option<Question>,
    rng: R,
}

impl QuizSession<StdRng> {
    /// Creates a session with an entropy-seeded random source.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for QuizSession<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> QuizSession<R> {
    /// Creates a session with all six strings allowed, a 12-fret board, and
    /// no active question.
    pub fn with_rng(rng: R) -> Self {
        Self {
            allowed: GuitarString::ALL.to_vec(),
            max_frets: DEFAULT_MAX_FRETS,
            current: None,
            rng,
        }
    }

    /// Randomly generates the next question.
    ///
    /// Picks one of the allowed strings and a fret interval below the last
    /// fret of the current board, and makes that pair the active question.
    pub fn generate_question(&mut self) {
        // `allowed` is never empty, so `choose` cannot return None.
        let string = *self.allowed.choose(&mut self.rng).unwrap();
        let interval = self.rng.gen_range(0..self.max_frets - 1);
        self.current = Some(Question { string, interval });
        debug!(
            "new question: {:?} fret {}, answer {}",
            string,
            interval,
            scale::resolve_note(string.open_note(), interval)
        );
    }

    /// The correct note name for the active question.
    ///
    /// # Returns
    /// * `Err(QuizError::NoActiveQuestion)` if no question has been generated
    pub fn correct_answer(&self) -> Result<NoteName, QuizError> {
        self.current
            .map(|q| scale::resolve_note(q.string.open_note(), q.interval))
            .ok_or(QuizError::NoActiveQuestion)
    }

    /// Adds or removes a string from the set eligible for questions.
    ///
    /// Removing the last remaining string is refused so that question
    /// generation always has a string to draw from.
    ///
    /// # Returns
    /// * `true` if the string was added or removed, `false` if refused
    pub fn filter_string(&mut self, string: GuitarString) -> bool {
        let success = if let Some(pos) = self.allowed.iter().position(|&s| s == string) {
            if self.allowed.len() > 1 {
                self.allowed.remove(pos);
                true
            } else {
                false
            }
        } else {
            self.allowed.push(string);
            true
        };
        debug!("allowed strings: {:?}", self.allowed);
        success
    }

    /// The active question, if one has been generated.
    pub fn current_question(&self) -> Option<Question> {
        self.current
    }

    /// The string carrying the active question.
    pub fn current_string(&self) -> Option<GuitarString> {
        self.current.map(|q| q.string)
    }

    /// The fret interval of the active question.
    pub fn current_interval(&self) -> Option<usize> {
        self.current.map(|q| q.interval)
    }

    /// Number of frets on the board; bounds the generated intervals.
    pub fn max_frets(&self) -> usize {
        self.max_frets
    }

    /// Sets the number of frets on the board.
    pub fn set_max_frets(&mut self, frets: usize) {
        self.max_frets = frets;
    }

    /// Strings currently eligible for question generation.
    pub fn allowed_strings(&self) -> &[GuitarString] {
        &self.allowed
    }

    /// Whether a string is currently eligible for question generation.
    pub fn is_allowed(&self, string: GuitarString) -> bool {
        self.allowed.contains(&string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> QuizSession<StdRng> {
        QuizSession::with_rng(StdRng::seed_from_u64(42))
    }

    #[test]
    fn starts_with_all_strings_and_no_question() {
        let session = seeded();
        assert_eq!(session.allowed_strings(), GuitarString::ALL);
        assert_eq!(session.max_frets(), DEFAULT_MAX_FRETS);
        assert_eq!(session.correct_answer(), Err(QuizError::NoActiveQuestion));
        assert_eq!(session.current_question(), None);
    }

    #[test]
    fn removes_and_restores_strings() {
        let mut session = seeded();
        assert!(session.filter_string(GuitarString::D));
        assert_eq!(session.allowed_strings().len(), 5);
        assert!(!session.is_allowed(GuitarString::D));

        assert!(session.filter_string(GuitarString::D));
        assert_eq!(session.allowed_strings().len(), 6);
        assert!(session.is_allowed(GuitarString::D));
    }

    #[test]
    fn refuses_to_remove_the_last_string() {
        let mut session = seeded();
        for string in [
            GuitarString::B,
            GuitarString::G,
            GuitarString::D,
            GuitarString::A,
            GuitarString::LowE,
        ] {
            assert!(session.filter_string(string));
        }
        assert_eq!(session.allowed_strings(), [GuitarString::HighE]);

        assert!(!session.filter_string(GuitarString::HighE));
        assert_eq!(session.allowed_strings(), [GuitarString::HighE]);
    }

    #[test]
    fn generates_only_allowed_strings_within_range() {
        let mut session = seeded();
        session.filter_string(GuitarString::HighE);
        session.filter_string(GuitarString::B);
        session.filter_string(GuitarString::D);
        session.filter_string(GuitarString::A);
        // G and low E remain.
        for _ in 0..200 {
            session.generate_question();
            let q = session.current_question().unwrap();
            assert!(matches!(q.string, GuitarString::G | GuitarString::LowE));
            assert!(q.interval <= session.max_frets() - 2);
        }
    }

    #[test]
    fn answer_matches_the_active_question() {
        let mut session = seeded();
        session.generate_question();
        let q = session.current_question().unwrap();
        assert_eq!(
            session.correct_answer(),
            Ok(scale::resolve_note(q.string.open_note(), q.interval))
        );
    }
}
