// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events (keyboard, mouse, touch) are routed to the viewer unless a
//! widget already captured them, so presses on buttons never become taps.

use super::Message;
use crate::ui::viewer::component;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Frame interval used while animating.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn is_routed(event: &event::Event) -> bool {
    matches!(
        event,
        event::Event::Mouse(_) | event::Event::Touch(_) | event::Event::Keyboard(_)
    )
}

/// Creates the viewer event subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if !is_routed(&event) {
            return None;
        }

        // Releases and modifier changes must reach the recognizer even when a
        // widget captured them, or a drag could never end.
        let always = matches!(
            event,
            event::Event::Mouse(iced::mouse::Event::ButtonReleased(_))
                | event::Event::Touch(
                    iced::touch::Event::FingerLifted { .. } | iced::touch::Event::FingerLost { .. }
                )
                | event::Event::Keyboard(iced::keyboard::Event::ModifiersChanged(_))
        );

        match status {
            event::Status::Ignored => Some(Message::Viewer(component::Message::RawEvent(event))),
            event::Status::Captured if always => {
                Some(Message::Viewer(component::Message::RawEvent(event)))
            }
            event::Status::Captured => None,
        }
    })
}

/// Creates a periodic tick subscription while the viewer is animating.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
