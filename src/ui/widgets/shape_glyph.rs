// SPDX-License-Identifier: MPL-2.0
//! Outline of a lens shape, used as the icon of the shape toggle.

use crate::preferences::LensShape;
use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};

const STROKE_WIDTH: f32 = 2.0;

#[derive(Debug, Clone, Copy)]
pub struct ShapeGlyph {
    shape: LensShape,
    color: Color,
}

impl ShapeGlyph {
    #[must_use]
    pub fn new(shape: LensShape, color: Color) -> Self {
        Self { shape, color }
    }

    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::ICON_MD))
            .height(Length::Fixed(sizing::ICON_MD))
            .into()
    }
}

impl<Message> canvas::Program<Message> for ShapeGlyph {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let inset = STROKE_WIDTH * 2.0;
        let extent = frame.width().min(frame.height()) - inset * 2.0;

        let path = match self.shape {
            LensShape::Circle => Path::circle(frame.center(), extent / 2.0),
            LensShape::Square => Path::rectangle(Point::new(inset, inset), Size::new(extent, extent)),
        };
        frame.stroke(
            &path,
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(self.color),
        );

        vec![frame.into_geometry()]
    }
}
