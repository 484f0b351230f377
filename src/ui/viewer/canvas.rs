// SPDX-License-Identifier: MPL-2.0
//! Page canvas: draws the active page fitted into the viewport, then scaled
//! and offset by the displayed transform.

use crate::media::ImageData;
use crate::ui::design_tokens::sizing;
use crate::ui::state::transform::TransformState;
use iced::widget::canvas::{self, Canvas};
use iced::{mouse, Element, Length, Point, Rectangle, Renderer, Size, Theme};

/// Largest rectangle with the aspect ratio of `image` that fits in
/// `available`, centered in it.
#[must_use]
pub fn fit_size(available: Size, image: Size) -> Size {
    if image.width <= 0.0 || image.height <= 0.0 {
        return Size::ZERO;
    }

    let factor = (available.width / image.width)
        .min(available.height / image.height)
        .max(0.0);
    Size::new(image.width * factor, image.height * factor)
}

/// Where the page lands inside a viewport of size `bounds`.
///
/// The fitted page is scaled about the viewport center; the offset is applied
/// before scaling, so it is magnified along with the page.
#[must_use]
pub fn page_rect(bounds: Size, image: Size, transform: TransformState) -> Rectangle {
    let available = Size::new(
        (bounds.width - 2.0 * sizing::PAGE_INSET).max(0.0),
        (bounds.height - 2.0 * sizing::PAGE_INSET).max(0.0),
    );
    let fitted = fit_size(available, image);
    let scale = transform.scale.max(0.0);
    let size = Size::new(fitted.width * scale, fitted.height * scale);

    let center = Point::new(
        bounds.width / 2.0 + transform.offset.x * scale,
        bounds.height / 2.0 + transform.offset.y * scale,
    );

    Rectangle::new(
        Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
        size,
    )
}

/// Canvas program rendering one page.
#[derive(Debug, Clone, Copy)]
pub struct PageCanvas<'a> {
    image: &'a ImageData,
    transform: TransformState,
    opacity: f32,
}

impl<'a> PageCanvas<'a> {
    #[must_use]
    pub fn new(image: &'a ImageData, transform: TransformState, opacity: f32) -> Self {
        Self {
            image,
            transform,
            opacity: opacity.clamp(0.0, 1.0),
        }
    }

    pub fn into_element<Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for PageCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let rect = page_rect(bounds.size(), self.image.size(), self.transform);
        if rect.width > 0.0 && rect.height > 0.0 {
            frame.draw_image(
                rect,
                canvas::Image::new(self.image.handle.clone()).opacity(self.opacity),
            );
        }

        vec![frame.into_geometry()]
    }
}
