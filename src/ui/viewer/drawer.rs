// SPDX-License-Identifier: MPL-2.0
//! Thumbnail drawer docked to the top-right edge.
//!
//! The drawer always shows its handle; opening it reveals the thumbnails of
//! every page by widening the panel, and fades them in.

use crate::domain::page::PageId;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::alignment::Vertical;
use iced::widget::{button, container, image, opaque, Container, Image, Row, Text};
use iced::{Background, Border, Color, Element, Length, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Toggle,
    Select(PageId),
}

/// One thumbnail entry.
#[derive(Debug, Clone)]
pub struct Thumbnail<'a> {
    pub id: PageId,
    /// `None` while the page is still loading or failed to load.
    pub handle: Option<&'a image::Handle>,
    pub active: bool,
}

pub struct ViewModel<'a> {
    pub colors: ColorScheme,
    pub open: bool,
    /// Displayed openness, from 0 (closed) to 1 (open).
    pub progress: f32,
    pub thumbnails: Vec<Thumbnail<'a>>,
}

/// Visible drawer width for a displayed openness.
#[must_use]
pub fn visible_width(progress: f32) -> f32 {
    let progress = progress.clamp(0.0, 1.0);
    sizing::DRAWER_PEEK + (sizing::DRAWER_WIDTH - sizing::DRAWER_PEEK) * progress
}

fn handle_label(open: bool) -> &'static str {
    if open {
        "›"
    } else {
        "‹"
    }
}

fn thumbnail_view<'a>(
    thumbnail: Thumbnail<'a>,
    progress: f32,
    colors: ColorScheme,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match thumbnail.handle {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
            .opacity(progress)
            .into(),
        None => Container::new(Text::new(thumbnail.id.to_string()).size(typography::CAPTION))
            .center_x(Length::Fixed(sizing::THUMBNAIL_WIDTH))
            .into(),
    };

    let border_color = if thumbnail.active {
        colors.selection
    } else {
        Color::TRANSPARENT
    };

    button(content)
        .on_press(Message::Select(thumbnail.id))
        .padding(spacing::XXS)
        .style(move |_theme: &Theme, _status: button::Status| button::Style {
            background: None,
            text_color: colors.panel_text,
            border: Border {
                color: border_color,
                width: 2.0,
                radius: radius::MD.into(),
            },
            ..button::Style::default()
        })
        .into()
}

pub fn view(model: ViewModel<'_>) -> Element<'_, Message> {
    let colors = model.colors;

    let handle = button(Text::new(handle_label(model.open)).size(typography::BODY * 2.0))
        .on_press(Message::Toggle)
        .width(Length::Fixed(sizing::HANDLE_WIDTH))
        .height(Length::Fixed(sizing::HANDLE_HEIGHT))
        .padding(0)
        .style(move |_theme: &Theme, _status: button::Status| button::Style {
            background: None,
            text_color: colors.handle,
            ..button::Style::default()
        });

    let row = model.thumbnails.into_iter().fold(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(handle),
        |row, thumbnail| row.push(thumbnail_view(thumbnail, model.progress, colors)),
    );

    let panel = Container::new(row)
        .width(Length::Fixed(visible_width(model.progress)))
        .padding([spacing::MD, spacing::XS])
        .clip(true)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(colors.panel_background)),
            border: Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    opaque(panel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_drawer_shows_only_the_peek() {
        assert_eq!(visible_width(0.0), sizing::DRAWER_PEEK);
        assert_eq!(visible_width(-1.0), sizing::DRAWER_PEEK);
    }

    #[test]
    fn open_drawer_is_full_width() {
        assert_eq!(visible_width(1.0), sizing::DRAWER_WIDTH);
        assert_eq!(visible_width(3.0), sizing::DRAWER_WIDTH);
    }

    #[test]
    fn handle_points_the_way_the_drawer_moves() {
        assert_eq!(handle_label(false), "‹");
        assert_eq!(handle_label(true), "›");
    }

    #[test]
    fn drawer_view_renders_without_images() {
        let _element = view(ViewModel {
            colors: ColorScheme::light(),
            open: true,
            progress: 0.5,
            thumbnails: vec![
                Thumbnail {
                    id: PageId::new(0),
                    handle: None,
                    active: true,
                },
                Thumbnail {
                    id: PageId::new(1),
                    handle: None,
                    active: false,
                },
            ],
        });
    }
}
