// SPDX-License-Identifier: MPL-2.0
//! Viewer controls: scale step down, reset, scale step up.

use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::state::transform::{scale_bounds, Message};
use crate::ui::theming::ColorScheme;
use iced::alignment::Vertical;
use iced::widget::{button, container, opaque, Container, Row, Text};
use iced::{Background, Border, Element, Length, Theme};

#[derive(Debug, Clone, Copy)]
pub struct ViewContext {
    pub colors: ColorScheme,
    /// Committed scale, used to disable buttons that would not change it.
    pub scale: f32,
}

fn control_button(label: &str, message: Option<Message>) -> Element<'_, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press_maybe(message)
        .width(Length::Fixed(sizing::BUTTON_WIDTH))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding(spacing::XS)
        .into()
}

pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let step_down =
        control_button("-", (ctx.scale > scale_bounds::MIN).then_some(Message::StepDown));
    let reset = control_button("1:1", Some(Message::Reset));
    let step_up = control_button("+", (ctx.scale < scale_bounds::MAX).then_some(Message::StepUp));

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(step_down)
        .push(reset)
        .push(step_up);

    let colors = ctx.colors;
    let panel = Container::new(row)
        .padding([spacing::SM, spacing::LG])
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(colors.panel_background)),
            text_color: Some(colors.panel_text),
            border: Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    opaque(panel)
}
