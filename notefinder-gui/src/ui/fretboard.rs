//! # Fretboard Widget
//!
//! This module draws the guitar fretboard for the trainer: the board
//! itself, six strings, fret wires with their numbers, position-marker
//! inlays, and the marker dot for the current quiz note.

use iced::widget::canvas::{self, Geometry, Path, Text};
use iced::widget::container;
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Size, Theme, alignment, mouse};

/// Thickness of a drawn string.
const STRING_GAUGE: f32 = 2.0;
/// Thickness of a drawn fret wire.
const FRET_WIDTH: f32 = 4.0;
/// Height of the board; fret numbers are drawn below it.
const BOARD_HEIGHT: f32 = 150.0;
/// Vertical room reserved under the board for the fret numbers.
const NUMBER_STRIP: f32 = 25.0;
/// Gap between the top board edge and the first string.
const EDGE_SPACING: f32 = 8.0;
/// Strings on the board, highest pitch first.
const STRING_COUNT: usize = 6;

/// Fretboard rendering widget.
///
/// Draws the board for the current fret count and, when a question is
/// active, a marker dot at its (string, fret) position.
#[derive(Debug, Clone)]
pub struct Fretboard {
    max_frets: usize,
    /// (string ordinal, fret interval) of the active question.
    marker: Option<(usize, usize)>,
}

impl Fretboard {
    pub fn new(max_frets: usize, marker: Option<(usize, usize)>) -> Self {
        Self { max_frets, marker }
    }

    // This consumes `self`; the canvas takes ownership of the widget state.
    pub fn view(self) -> Element<'static, crate::Message> {
        container(
            canvas::Canvas::new(self)
                .width(Length::Fill)
                .height(Length::Fixed(BOARD_HEIGHT + NUMBER_STRIP)),
        )
        .into()
    }
}

impl<Message> canvas::Program<Message> for Fretboard {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let fret_spacing = bounds.width / self.max_frets as f32;
        let string_spacing =
            (BOARD_HEIGHT - EDGE_SPACING - STRING_COUNT as f32 * STRING_GAUGE) / 5.0;
        let fret_x = |fret: usize| (fret + 1) as f32 * fret_spacing - FRET_WIDTH;
        let string_y = |string: usize| EDGE_SPACING + string as f32 * string_spacing;

        // Board
        frame.fill_rectangle(
            Point::ORIGIN,
            Size::new(bounds.width, BOARD_HEIGHT),
            Color::from_rgb8(74, 65, 40),
        );

        // Fret wires, each numbered underneath
        for fret in 0..self.max_frets {
            let x = fret_x(fret);
            frame.fill_rectangle(
                Point::new(x, 0.0),
                Size::new(FRET_WIDTH, BOARD_HEIGHT),
                Color::from_rgb8(0xC0, 0xC0, 0xC0),
            );
            frame.fill_text(Text {
                content: (fret + 1).to_string(),
                position: Point::new(x - fret_spacing / 2.0, BOARD_HEIGHT + 8.0),
                color: Color::from_rgb8(0xC0, 0xC0, 0xC0),
                size: 14.0.into(),
                horizontal_alignment: alignment::Horizontal::Center,
                ..Text::default()
            });
        }

        // Strings
        for string in 0..STRING_COUNT {
            frame.fill_rectangle(
                Point::new(0.0, string_y(string)),
                Size::new(bounds.width, STRING_GAUGE),
                Color::from_rgb8(0x80, 0x80, 0x80),
            );
        }

        // Inlay dots: single dots along the middle string, a double dot at
        // the 12th fret.
        let inlay_size = string_spacing - 10.0;
        for fret in 0..self.max_frets {
            let center_x = fret_x(fret) - fret_spacing / 2.0;
            if fret % 2 == 0 && fret != 0 && fret != 10 && fret != 12 {
                frame.fill(
                    &Path::circle(
                        Point::new(center_x, string_y(2) + 6.0 + inlay_size / 2.0),
                        inlay_size / 2.0,
                    ),
                    Color::from_rgb8(0xC0, 0xC0, 0xC0),
                );
            } else if fret == 11 {
                for string in [0, 4] {
                    frame.fill(
                        &Path::circle(
                            Point::new(center_x, string_y(string) + 6.0 + inlay_size / 2.0),
                            inlay_size / 2.0,
                        ),
                        Color::from_rgb8(0xC0, 0xC0, 0xC0),
                    );
                }
            }
        }

        // Marker for the active question
        if let Some((string_num, interval)) = self.marker {
            let note_size = string_spacing - 10.0;
            frame.fill(
                &Path::circle(
                    Point::new(fret_x(interval) - fret_spacing / 2.0, string_y(string_num)),
                    note_size / 2.0,
                ),
                Color::from_rgb8(60, 213, 96),
            );
        }

        vec![frame.into_geometry()]
    }
}
