// SPDX-License-Identifier: MPL-2.0
//! Scale and offset readout shown above the page.

use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::state::transform::TransformState;
use crate::ui::theming::ColorScheme;
use iced::alignment::Vertical;
use iced::widget::{button, container, Container, Row, Space, Text};
use iced::{Background, Border, Element, Length, Theme};

/// Formats a readout value with two decimals, without a negative zero.
#[must_use]
pub fn format_number(value: f32) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        "0.00".to_string()
    } else {
        format!("{rounded:.2}")
    }
}

#[must_use]
pub fn readout(transform: TransformState) -> [(&'static str, String); 3] {
    [
        ("Scale", format_number(transform.scale)),
        ("Offset X", format_number(transform.offset.x)),
        ("Offset Y", format_number(transform.offset.y)),
    ]
}

/// Info toggle plus, when `visible`, the readout of `transform`.
pub fn view<'a, Message: Clone + 'a>(
    transform: TransformState,
    visible: bool,
    colors: ColorScheme,
    on_toggle: Message,
) -> Element<'a, Message> {
    let toggle = button(Text::new("i").size(typography::BODY))
        .on_press(on_toggle)
        .width(Length::Fixed(sizing::BUTTON_HEIGHT))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding(spacing::XS);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(toggle);

    if visible {
        let [scale, x, y] = readout(transform);
        row = row
            .push(Space::new().width(Length::Fill))
            .push(Text::new(format!("{}: {}", scale.0, scale.1)).size(typography::BODY))
            .push(Space::new().width(Length::Fill))
            .push(Text::new(format!("{}: {}", x.0, x.1)).size(typography::BODY))
            .push(Text::new(format!("{}: {}", y.0, y.1)).size(typography::BODY))
            .push(Space::new().width(Length::Fill));
    }

    let width = if visible {
        Length::Fill
    } else {
        Length::Shrink
    };

    Container::new(row)
        .width(width)
        .padding([spacing::XS, spacing::SM])
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(colors.panel_background)),
            text_color: Some(colors.panel_text),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
