//! # Main Display Module
//!
//! This module contains the main display components and layout logic
//! for the NoteFinder trainer: the string filters and board-size toggle in
//! a header row, the fretboard, the transient feedback label, and the
//! twelve note-guess buttons.

use iced::widget::{Space, button, checkbox, column, container, horizontal_space, row, text};
use iced::{Alignment, Color, Element, Length};
use notefinder_core::{GuitarString, NoteName, QuizSession};

use super::fretboard::Fretboard;
use crate::{Feedback, Message};

/// Creates the complete main application view.
pub fn create_main_view(
    session: &QuizSession,
    feedback: Option<Feedback>,
) -> Element<'static, Message> {
    let header = row![
        string_filter_row(session),
        horizontal_space(),
        checkbox("Full Fretboard", session.max_frets() == crate::FULL_BOARD_FRETS)
            .on_toggle(Message::FullFretboardToggled),
    ]
    .align_y(Alignment::Center);

    let title = container(text("NoteFinder").size(38)).center_x(Length::Fill);

    let marker = session
        .current_question()
        .map(|question| (question.string.string_num(), question.interval));
    let board = Fretboard::new(session.max_frets(), marker).view();

    let content = column![
        header,
        title,
        Space::with_height(20),
        board,
        Space::with_height(10),
        feedback_label(feedback),
        Space::with_height(10),
        note_button_row(),
    ]
    .spacing(10)
    .padding(20);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Creates one filter checkbox per guitar string, highest pitch first.
fn string_filter_row(session: &QuizSession) -> Element<'static, Message> {
    let mut filters = row![].spacing(12);
    for string in GuitarString::ALL {
        filters = filters.push(
            checkbox(string.label(), session.is_allowed(string))
                .on_toggle(move |_| Message::StringToggled(string)),
        );
    }
    filters.into()
}

/// Creates the transient feedback label under the fretboard.
fn feedback_label(feedback: Option<Feedback>) -> Element<'static, Message> {
    let (label, color) = match feedback {
        Some(Feedback::Correct) => ("Correct", Color::from_rgb8(60, 213, 96)),
        Some(Feedback::Incorrect) => ("Incorrect", Color::from_rgb8(0xFF, 0xAF, 0xAF)),
        None => ("", Color::WHITE),
    };
    container(text(label).size(32).color(color))
        .center_x(Length::Fill)
        .into()
}

/// Creates the row of twelve note-guess buttons.
fn note_button_row() -> Element<'static, Message> {
    let mut buttons = row![].spacing(8);
    for note in NoteName::ALL {
        buttons = buttons.push(note_button(note));
    }
    container(buttons).center_x(Length::Fill).into()
}

/// Creates a single note-guess button.
///
/// Natural notes are white with black text; accidentals (the compound
/// enharmonic labels) are black with white text.
fn note_button(note: NoteName) -> Element<'static, Message> {
    let accidental = note.is_accidental();
    button(text(note.label()).size(24))
        .padding([8, 12])
        .style(move |_theme, _status| {
            use iced::widget::button;
            let (background, text_color) = if accidental {
                (Color::BLACK, Color::WHITE)
            } else {
                (Color::WHITE, Color::BLACK)
            };
            button::Style {
                background: Some(iced::Background::Color(background)),
                text_color,
                ..button::Style::default()
            }
        })
        .on_press(Message::NoteGuessed(note.label()))
        .into()
}
