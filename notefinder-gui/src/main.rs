//! # NoteFinder - Guitar Fretboard Note Trainer GUI
//!
//! This module contains the main GUI application for the NoteFinder trainer.
//! It renders the fretboard with the current quiz marker, the twelve
//! note-guess buttons, and the string-filter controls.
//!
//! ## Architecture
//! - **Core crate**: headless quiz state and chromatic note resolution
//! - **GUI**: Iced application with dark theme
//! - **Feedback**: transient correct/incorrect label cleared by a timer
//!   subscription that only ticks while the label is visible

mod ui;

use iced::{self, Element, Subscription, Theme};
use log::{info, warn};
use notefinder_core::{GuitarString, QuizSession, scale};
use std::time::{Duration, Instant};
use ui::main_display::create_main_view;

/// How long the correct/incorrect feedback stays on screen.
const FEEDBACK_DURATION: Duration = Duration::from_millis(800);
/// Board size with the "Full Fretboard" toggle off.
const SHORT_BOARD_FRETS: usize = 12;
/// Board size with the "Full Fretboard" toggle on.
const FULL_BOARD_FRETS: usize = 24;

/// Main entry point for the NoteFinder application.
///
/// Initializes logging and runs the Iced application with dark theme.
pub fn main() -> iced::Result {
    pretty_env_logger::init();
    info!("starting NoteFinder");
    iced::application("NoteFinder", TrainerApp::update, TrainerApp::view)
        .subscription(TrainerApp::subscription)
        .theme(TrainerApp::theme)
        .run()
}

/// Application message types for the Iced GUI framework.
#[derive(Debug, Clone)]
pub enum Message {
    // Quiz interactions
    NoteGuessed(&'static str), // One of the twelve note buttons, by its label
    StringToggled(GuitarString), // A string-filter checkbox was toggled

    // Board controls
    FullFretboardToggled(bool), // The "Full Fretboard" checkbox was toggled

    // Feedback timer
    Tick, // Timer tick used to hide stale feedback
}

/// Outcome of the most recent guess, shown briefly under the fretboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// The guessed label matched the correct answer
    Correct,
    /// The guessed label did not match
    Incorrect,
}

/// Main application state for the NoteFinder trainer.
///
/// Holds the quiz session from the core crate and the transient feedback
/// from the most recent guess, with the instant it was shown.
#[derive(Debug)]
struct TrainerApp {
    session: QuizSession,
    feedback: Option<(Feedback, Instant)>,
}

impl Default for TrainerApp {
    /// Creates the app with a fresh session and the first question active.
    fn default() -> Self {
        let mut session = QuizSession::new();
        session.generate_question();
        Self {
            session,
            feedback: None,
        }
    }
}

impl TrainerApp {
    /// Handles application state updates based on incoming messages.
    ///
    /// Processes note guesses, string-filter toggles, board-size changes,
    /// and the feedback-hiding timer tick.
    fn update(&mut self, message: Message) {
        match message {
            Message::NoteGuessed(label) => {
                let Ok(answer) = self.session.correct_answer() else {
                    warn!("guess received before any question was generated");
                    return;
                };
                if scale::note_from_label(label) == Some(answer) {
                    self.session.generate_question();
                    self.show_feedback(Feedback::Correct);
                } else {
                    self.show_feedback(Feedback::Incorrect);
                }
            }
            Message::StringToggled(string) => {
                let success = self.session.filter_string(string);
                // Checkbox state is derived from the session on every view
                // pass, so a refused toggle needs no explicit revert.
                if success && self.session.current_string() == Some(string) {
                    self.session.generate_question();
                }
            }
            Message::FullFretboardToggled(full) => {
                let frets = if full {
                    FULL_BOARD_FRETS
                } else {
                    SHORT_BOARD_FRETS
                };
                self.session.set_max_frets(frets);
                // A question generated on the full board can sit past the
                // last drawable fret of the short board.
                if self
                    .session
                    .current_interval()
                    .is_some_and(|interval| interval > frets - 2)
                {
                    self.session.generate_question();
                }
            }
            Message::Tick => {
                if let Some((_, shown_at)) = self.feedback {
                    if shown_at.elapsed() >= FEEDBACK_DURATION {
                        self.feedback = None;
                    }
                }
            }
        }
    }

    /// Shows feedback for the latest guess, restarting the hide timer.
    fn show_feedback(&mut self, feedback: Feedback) {
        self.feedback = Some((feedback, Instant::now()));
    }

    /// Renders the main application interface.
    ///
    /// Delegates all UI rendering to the main_display module,
    /// keeping this function focused on application logic only.
    fn view(&self) -> Element<'_, Message> {
        create_main_view(&self.session, self.feedback.map(|(feedback, _)| feedback))
    }

    /// Creates a subscription for hiding stale feedback.
    ///
    /// Only ticks while feedback is on screen; a new guess restarts the
    /// display window, so there is no separate cancellation path.
    fn subscription(&self) -> Subscription<Message> {
        if self.feedback.is_some() {
            iced::time::every(Duration::from_millis(50)).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Returns the application theme.
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}
