// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native keyboard and touch events into lightbox input messages.
//! Whether an event has any effect is decided by the `input` translation
//! layer, not here; this module only names what happened.

use super::Message;
use crate::input::KeyPress;
use iced::{event, keyboard, touch, Subscription};

/// Listens for the window events the lightbox consumes.
///
/// Keyboard events already captured by a focused widget are left alone;
/// touch begin/end always pass through so an in-flight gesture cannot lose
/// its endpoint.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => key_press(&key).map(Message::KeyPressed),
            event::Status::Captured => None,
        },
        event::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::TouchStarted(position.x))
        }
        event::Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(Message::TouchEnded(position.x))
        }
        event::Event::Touch(touch::Event::FingerLost { .. }) => Some(Message::TouchCancelled),
        _ => None,
    })
}

fn key_press(key: &keyboard::Key) -> Option<KeyPress> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::Escape) => Some(KeyPress::Escape),
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(KeyPress::ArrowRight),
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(KeyPress::ArrowLeft),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_keys_map_to_lightbox_keys() {
        assert_eq!(
            key_press(&keyboard::Key::Named(keyboard::key::Named::Escape)),
            Some(KeyPress::Escape)
        );
        assert_eq!(
            key_press(&keyboard::Key::Named(keyboard::key::Named::ArrowRight)),
            Some(KeyPress::ArrowRight)
        );
        assert_eq!(
            key_press(&keyboard::Key::Named(keyboard::key::Named::ArrowLeft)),
            Some(KeyPress::ArrowLeft)
        );
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        assert_eq!(
            key_press(&keyboard::Key::Named(keyboard::key::Named::Enter)),
            None
        );
        assert_eq!(
            key_press(&keyboard::Key::Character("q".into())),
            None
        );
    }
}
