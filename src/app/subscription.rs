// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The only native events the application listens for are key presses, and
//! only while the lightbox overlay is open. The update loop re-checks the
//! open state as well, so a stray key press can never mutate a closed
//! lightbox.

use super::Message;
use iced::{event, keyboard, Subscription};

/// Creates the keyboard subscription for lightbox navigation.
pub fn create_event_subscription(lightbox_open: bool) -> Subscription<Message> {
    if !lightbox_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window| {
        if let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event {
            match status {
                event::Status::Ignored => Some(Message::KeyPressed(key)),
                event::Status::Captured => None,
            }
        } else {
            None
        }
    })
}
