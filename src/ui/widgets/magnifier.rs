// SPDX-License-Identifier: MPL-2.0
//! Magnifying lens drawn over a displayed image.
//!
//! The canvas sits exactly on top of the image widget. While the cursor is
//! inside, a circular or square lens centred on it shows the same image
//! scaled by `zoom` relative to its displayed size, positioned so the point
//! under the cursor stays under the cursor.

use crate::config::MAGNIFIER_BORDER_WIDTH;
use crate::preferences::LensShape;
use crate::ui::design_tokens::{opacity, palette};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::image;
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};

/// Height of the horizontal bands a circular lens is assembled from.
const CIRCLE_BAND_HEIGHT: f32 = 2.0;

/// Where the lens and its magnified image sit, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lens {
    pub center: Point,
    pub radius: f32,
    /// The whole image at magnified size.
    pub magnified: Rectangle,
}

impl Lens {
    /// Lens of edge `lens_size` centred on `cursor`, over an image displayed
    /// at `display` size.
    #[must_use]
    pub fn at(cursor: Point, display: Size, zoom: f32, lens_size: f32) -> Self {
        let magnified = Rectangle {
            x: cursor.x * (1.0 - zoom),
            y: cursor.y * (1.0 - zoom),
            width: display.width * zoom,
            height: display.height * zoom,
        };

        Self {
            center: cursor,
            radius: lens_size / 2.0,
            magnified,
        }
    }

    /// Square bounding the lens.
    #[must_use]
    pub fn bounds(&self) -> Rectangle {
        Rectangle {
            x: self.center.x - self.radius,
            y: self.center.y - self.radius,
            width: self.radius * 2.0,
            height: self.radius * 2.0,
        }
    }

    /// Rectangles whose union is the lens area.
    #[must_use]
    pub fn clip_regions(&self, shape: LensShape) -> Vec<Rectangle> {
        match shape {
            LensShape::Square => vec![self.bounds()],
            LensShape::Circle => self.circle_bands(),
        }
    }

    fn circle_bands(&self) -> Vec<Rectangle> {
        let r = self.radius;
        if r <= 0.0 {
            return Vec::new();
        }

        let top = self.center.y - r;
        let bottom = self.center.y + r;
        let mut bands = Vec::new();
        let mut y = top;
        while y < bottom {
            let height = CIRCLE_BAND_HEIGHT.min(bottom - y);
            let dy = y + height / 2.0 - self.center.y;
            let half_width = (r * r - dy * dy).max(0.0).sqrt();
            bands.push(Rectangle {
                x: self.center.x - half_width,
                y,
                width: half_width * 2.0,
                height,
            });
            y += height;
        }
        bands
    }

    /// Border path of the lens.
    #[must_use]
    pub fn outline(&self, shape: LensShape) -> Path {
        match shape {
            LensShape::Circle => Path::circle(self.center, self.radius),
            LensShape::Square => {
                let bounds = self.bounds();
                Path::rectangle(bounds.position(), bounds.size())
            }
        }
    }
}

/// Canvas program drawing the lens for one preview.
#[derive(Debug, Clone)]
pub struct Magnifier {
    handle: image::Handle,
    zoom: f32,
    lens_size: f32,
    shape: LensShape,
}

impl Magnifier {
    #[must_use]
    pub fn new(handle: image::Handle, zoom: f32, lens_size: f32, shape: LensShape) -> Self {
        Self {
            handle,
            zoom,
            lens_size,
            shape,
        }
    }

    /// Canvas of exactly `size`, to be stacked over the image.
    pub fn into_element<'a, Message: 'a>(self, size: Size) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fixed(size.width))
            .height(Length::Fixed(size.height))
            .into()
    }
}

impl<Message> canvas::Program<Message> for Magnifier {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        match event {
            iced::Event::Mouse(
                mouse::Event::CursorMoved { .. }
                | mouse::Event::CursorEntered
                | mouse::Event::CursorLeft,
            ) => Some(Action::request_redraw()),
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let Some(position) = cursor.position_in(bounds) else {
            return Vec::new();
        };

        let size = bounds.size();
        let lens = Lens::at(position, size, self.zoom, self.lens_size);
        let mut frame = Frame::new(renderer, size);

        // Keep the lens inside this preview.
        frame.with_clip(Rectangle::with_size(size), |frame| {
            for region in lens.clip_regions(self.shape) {
                frame.with_clip(region, |frame| {
                    // Coordinates inside a clip are relative to its origin.
                    let target = Rectangle {
                        x: lens.magnified.x - region.x,
                        y: lens.magnified.y - region.y,
                        ..lens.magnified
                    };
                    frame.draw_image(target, canvas::Image::new(self.handle.clone()));
                });
            }

            frame.stroke(
                &lens.outline(self.shape),
                Stroke::default()
                    .with_width(MAGNIFIER_BORDER_WIDTH)
                    .with_color(Color {
                        a: opacity::OVERLAY_PRESSED,
                        ..palette::WHITE
                    }),
            );
        });

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    #[test]
    fn point_under_cursor_stays_under_cursor() {
        let display = Size::new(300.0, 200.0);
        for (cursor, zoom) in [
            (Point::new(10.0, 20.0), 1.8),
            (Point::new(150.0, 100.0), 7.0),
            (Point::new(299.0, 0.0), 0.5),
        ] {
            let lens = Lens::at(cursor, display, zoom, 150.0);
            // The image point under the cursor lands here after magnification.
            let x = lens.magnified.x + cursor.x * zoom;
            let y = lens.magnified.y + cursor.y * zoom;
            assert!((x - cursor.x).abs() < EPSILON);
            assert!((y - cursor.y).abs() < EPSILON);
        }
    }

    #[test]
    fn magnified_image_scales_with_zoom() {
        let lens = Lens::at(Point::ORIGIN, Size::new(100.0, 50.0), 2.5, 100.0);
        assert_eq!(lens.magnified.size(), Size::new(250.0, 125.0));
    }

    #[test]
    fn square_lens_is_one_region_centred_on_cursor() {
        let lens = Lens::at(Point::new(100.0, 80.0), Size::new(400.0, 300.0), 2.0, 150.0);
        let regions = lens.clip_regions(LensShape::Square);

        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0], Rectangle::new(Point::new(25.0, 5.0), Size::new(150.0, 150.0)));
        assert_eq!(regions[0].center(), Point::new(100.0, 80.0));
    }

    #[test]
    fn circle_bands_cover_the_lens_height_inside_its_square() {
        let lens = Lens::at(Point::new(100.0, 100.0), Size::new(400.0, 300.0), 2.0, 50.0);
        let bounds = lens.bounds();
        let bands = lens.clip_regions(LensShape::Circle);

        let total_height: f32 = bands.iter().map(|band| band.height).sum();
        assert!((total_height - bounds.height).abs() < EPSILON);
        for band in &bands {
            assert!(band.x >= bounds.x - EPSILON);
            assert!(band.x + band.width <= bounds.x + bounds.width + EPSILON);
        }
    }

    #[test]
    fn circle_bands_are_widest_at_the_middle() {
        let lens = Lens::at(Point::new(60.0, 60.0), Size::new(400.0, 300.0), 2.0, 100.0);
        let bands = lens.clip_regions(LensShape::Circle);

        let first = bands.first().expect("bands");
        let middle = bands[bands.len() / 2];
        assert!(middle.width > first.width);
        assert!(middle.width <= 100.0 + EPSILON);
    }

    #[test]
    fn zero_size_circle_has_no_bands() {
        let lens = Lens::at(Point::ORIGIN, Size::new(10.0, 10.0), 2.0, 0.0);
        assert!(lens.clip_regions(LensShape::Circle).is_empty());
    }
}
