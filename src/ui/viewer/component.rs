// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! Raw window events are translated into pointer input for the gesture
//! recognizer; recognized gestures drive the transform controller, whose
//! committed state the displayed transform then animates toward.

use crate::domain::page::{PageId, PageList};
use crate::error::Error;
use crate::media::PageImages;
use crate::ui::design_tokens::spacing;
use crate::ui::state::animation::{AnimatedTransform, AnimationSettings, Curve, Transition};
use crate::ui::state::gesture::{GestureRecognizer, GestureSettings, Input, Pointer};
use crate::ui::state::transform::{self, TransformController, TransformState};
use crate::ui::state::PageSelector;
use crate::ui::theming::ColorScheme;
use crate::ui::viewer::{canvas::PageCanvas, controls, drawer, info_panel};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, Container, Stack, Text};
use iced::{event, keyboard, mouse, touch, Background, Element, Length, Point, Theme};
use std::time::Instant;

/// Pixel scroll deltas per wheel line.
const PIXELS_PER_LINE: f32 = 120.0;

/// Opacity of the page before the appear animation starts.
const APPEAR_FROM_OPACITY: f32 = 0.1;

/// Messages emitted by viewer-related widgets.
#[derive(Debug, Clone)]
pub enum Message {
    RawEvent(event::Event),
    Transform(transform::Message),
    Drawer(drawer::Message),
    ToggleInfoPanel,
    PageLoaded {
        index: usize,
        result: Result<PageImages, Error>,
    },
    Tick(Instant),
}

/// Side effects the application should perform after handling a viewer message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    PageChanged(PageId),
}

/// Load state of one page's images.
#[derive(Debug, Clone)]
pub enum PageSlot {
    Loading,
    Ready(PageImages),
    Failed(String),
}

/// Complete viewer state.
#[derive(Debug, Clone)]
pub struct State {
    controller: TransformController,
    selector: PageSelector,
    recognizer: GestureRecognizer,
    displayed: AnimatedTransform,
    drawer: Transition<f32>,
    appear: Transition<f32>,
    animation: AnimationSettings,
    slots: Vec<PageSlot>,
    info_visible: bool,
    cursor: Point,
    modifiers: keyboard::Modifiers,
    now: Instant,
}

impl State {
    /// Creates the viewer at rest on the first page, with the page fading in.
    #[must_use]
    pub fn new(
        pages: PageList,
        gestures: GestureSettings,
        animation: AnimationSettings,
        now: Instant,
    ) -> Self {
        let slots = vec![PageSlot::Loading; pages.len()];
        let mut appear = Transition::new(APPEAR_FROM_OPACITY);
        appear.retarget(1.0, Curve::Linear, animation.transform, now);

        Self {
            controller: TransformController::new(),
            selector: PageSelector::new(pages),
            recognizer: GestureRecognizer::new(gestures),
            displayed: AnimatedTransform::new(animation),
            drawer: Transition::new(0.0),
            appear,
            animation,
            slots,
            info_visible: true,
            cursor: Point::ORIGIN,
            modifiers: keyboard::Modifiers::default(),
            now,
        }
    }

    #[must_use]
    pub fn controller(&self) -> &TransformController {
        &self.controller
    }

    #[must_use]
    pub fn selector(&self) -> &PageSelector {
        &self.selector
    }

    /// Makes the page with `id` active without going through a message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPageId`] when no page has that id.
    pub fn select_page(&mut self, id: PageId) -> crate::error::Result<()> {
        self.selector.select_page(id)
    }

    #[must_use]
    pub fn pages(&self) -> &PageList {
        self.selector.pages()
    }

    /// Transform as drawn at the last update.
    #[must_use]
    pub fn displayed_transform(&self) -> TransformState {
        self.displayed.value_at(self.now)
    }

    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&PageSlot> {
        self.slots.get(index)
    }

    #[must_use]
    pub fn is_info_visible(&self) -> bool {
        self.info_visible
    }

    /// Whether frames must keep coming: a transition is running or a wheel
    /// magnification waits to be closed.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.displayed.is_settled(self.now)
            || !self.drawer.is_settled(self.now)
            || !self.appear.is_settled(self.now)
            || self.recognizer.needs_tick()
    }

    pub fn handle_message(&mut self, message: Message, now: Instant) -> Effect {
        self.now = now;

        match message {
            Message::RawEvent(event) => {
                if let Some(action) = self.keyboard_action(&event) {
                    return self.handle_message(action, now);
                }
                if let Some(input) = self.pointer_input(&event, now) {
                    self.feed(input, now);
                }
                Effect::None
            }
            Message::Transform(msg) => {
                self.apply(msg, now);
                Effect::None
            }
            Message::Drawer(drawer::Message::Toggle) => {
                self.selector.toggle_drawer();
                let target = if self.selector.is_drawer_open() {
                    1.0
                } else {
                    0.0
                };
                self.drawer
                    .retarget(target, Curve::EaseOut, self.animation.drawer, now);
                Effect::None
            }
            Message::Drawer(drawer::Message::Select(id)) => match self.selector.select_page(id) {
                Ok(()) => Effect::PageChanged(id),
                Err(err) => {
                    log::warn!("Ignoring page selection: {err}");
                    Effect::None
                }
            },
            Message::ToggleInfoPanel => {
                self.info_visible = !self.info_visible;
                Effect::None
            }
            Message::PageLoaded { index, result } => {
                let slot = match result {
                    Ok(images) => PageSlot::Ready(images),
                    Err(err) => {
                        log::warn!("Failed to load page at position {index}: {err}");
                        PageSlot::Failed(err.to_string())
                    }
                };
                if let Some(existing) = self.slots.get_mut(index) {
                    *existing = slot;
                }
                Effect::None
            }
            Message::Tick(at) => {
                self.feed(Input::Tick(at), at);
                Effect::None
            }
        }
    }

    fn feed(&mut self, input: Input, now: Instant) {
        for gesture in self.recognizer.handle(input) {
            self.apply(gesture.into(), now);
        }
    }

    fn apply(&mut self, msg: transform::Message, now: Instant) {
        if let transform::Effect::Changed { state, motion } = self.controller.handle(msg) {
            self.displayed.retarget(state, motion, now);
        }
    }

    /// Keyboard shortcuts: `+`/`=` step up, `-` step down, `0` reset,
    /// `Tab` toggles the drawer, `i` toggles the info panel.
    fn keyboard_action(&mut self, event: &event::Event) -> Option<Message> {
        let event::Event::Keyboard(keyboard_event) = event else {
            return None;
        };

        match keyboard_event {
            keyboard::Event::ModifiersChanged(modifiers) => {
                self.modifiers = *modifiers;
                None
            }
            keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Tab),
                modifiers,
                ..
            } if !modifiers.command() && !modifiers.alt() => {
                Some(Message::Drawer(drawer::Message::Toggle))
            }
            keyboard::Event::KeyPressed {
                key: keyboard::Key::Character(c),
                modifiers,
                ..
            } if !modifiers.command() && !modifiers.alt() => match c.as_str() {
                "+" | "=" => Some(Message::Transform(transform::Message::StepUp)),
                "-" => Some(Message::Transform(transform::Message::StepDown)),
                "0" => Some(Message::Transform(transform::Message::Reset)),
                "i" | "I" => Some(Message::ToggleInfoPanel),
                _ => None,
            },
            _ => None,
        }
    }

    fn pointer_input(&mut self, event: &event::Event, now: Instant) -> Option<Input> {
        match event {
            event::Event::Mouse(mouse_event) => match mouse_event {
                mouse::Event::CursorMoved { position } => {
                    self.cursor = *position;
                    Some(Input::Moved {
                        pointer: Pointer::Mouse,
                        position: *position,
                    })
                }
                mouse::Event::ButtonPressed(mouse::Button::Left) => Some(Input::Pressed {
                    pointer: Pointer::Mouse,
                    position: self.cursor,
                    at: now,
                }),
                mouse::Event::ButtonReleased(mouse::Button::Left) => Some(Input::Released {
                    pointer: Pointer::Mouse,
                    at: now,
                }),
                mouse::Event::CursorLeft => Some(Input::Cancelled {
                    pointer: Pointer::Mouse,
                }),
                mouse::Event::WheelScrolled { delta }
                    if self.modifiers.control() || self.modifiers.command() =>
                {
                    let lines = scroll_lines(delta);
                    (lines.abs() >= f32::EPSILON).then_some(Input::Wheel { lines, at: now })
                }
                _ => None,
            },
            event::Event::Touch(touch_event) => match touch_event {
                touch::Event::FingerPressed { id, position } => Some(Input::Pressed {
                    pointer: Pointer::Finger(id.0),
                    position: *position,
                    at: now,
                }),
                touch::Event::FingerMoved { id, position } => Some(Input::Moved {
                    pointer: Pointer::Finger(id.0),
                    position: *position,
                }),
                touch::Event::FingerLifted { id, .. } => Some(Input::Released {
                    pointer: Pointer::Finger(id.0),
                    at: now,
                }),
                touch::Event::FingerLost { id, .. } => Some(Input::Cancelled {
                    pointer: Pointer::Finger(id.0),
                }),
            },
            _ => None,
        }
    }

    pub fn view(&self, colors: ColorScheme) -> Element<'_, Message> {
        let active_index = self.selector.active_index();

        let page: Element<'_, Message> = match self.slots.get(active_index) {
            Some(PageSlot::Ready(images)) => PageCanvas::new(
                &images.image,
                self.displayed.value_at(self.now),
                self.appear.value_at(self.now),
            )
            .into_element(),
            Some(PageSlot::Failed(reason)) => centered_text(format!(
                "Cannot show {}: {reason}",
                self.selector.active_page().image_name()
            )),
            Some(PageSlot::Loading) | None => centered_text("Loading…".to_string()),
        };

        let background = colors.canvas_background;
        let base = Container::new(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(background)),
                ..Default::default()
            });

        let info = Container::new(info_panel::view(
            self.controller.state(),
            self.info_visible,
            colors,
            Message::ToggleInfoPanel,
        ))
        .width(Length::Fill)
        .padding([spacing::LG, spacing::MD])
        .align_x(Horizontal::Left)
        .align_y(Vertical::Top);

        let controls = Container::new(
            controls::view(controls::ViewContext {
                colors,
                scale: self.controller.scale(),
            })
            .map(Message::Transform),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom);

        let thumbnails = self
            .pages()
            .iter()
            .enumerate()
            .map(|(index, page)| drawer::Thumbnail {
                id: page.id(),
                handle: match self.slots.get(index) {
                    Some(PageSlot::Ready(images)) => Some(&images.thumbnail.handle),
                    _ => None,
                },
                active: index == active_index,
            })
            .collect();

        let drawer = Container::new(
            drawer::view(drawer::ViewModel {
                colors,
                open: self.selector.is_drawer_open(),
                progress: self.drawer.value_at(self.now),
                thumbnails,
            })
            .map(Message::Drawer),
        )
        .width(Length::Fill)
        .padding([spacing::LG * 3.0, 0.0])
        .align_x(Horizontal::Right)
        .align_y(Vertical::Top);

        Stack::new()
            .push(base)
            .push(controls)
            .push(info)
            .push(drawer)
            .into()
    }
}

fn centered_text<'a>(content: String) -> Element<'a, Message> {
    Container::new(Text::new(content))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn scroll_lines(delta: &mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => *y,
        mouse::ScrollDelta::Pixels { y, .. } => *y / PIXELS_PER_LINE,
    }
}
