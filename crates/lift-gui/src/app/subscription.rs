//! Application subscriptions.
//!
//! | Subscription  | Interval   | Condition     | Purpose                     |
//! |---------------|------------|---------------|-----------------------------|
//! | Keyboard      | Continuous | Always        | Escape closes dialogs       |
//! | Toast Timer   | 500 ms     | Toast visible | Auto-dismiss notifications  |

use std::time::Duration;

use iced::keyboard::key::Named;
use iced::{Subscription, keyboard, time};

use crate::component::ToastMessage;
use crate::message::Message;
use crate::state::AppState;

/// How often a visible toast checks its age.
const TOAST_CHECK_INTERVAL: Duration = Duration::from_millis(500);

pub fn create_subscription(state: &AppState) -> Subscription<Message> {
    Subscription::batch([keyboard_subscription(), toast_subscription(state)])
}

fn keyboard_subscription() -> Subscription<Message> {
    keyboard::listen().map(|event| match event {
        keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(Named::Escape),
            ..
        } => Message::EscapePressed,
        _ => Message::Noop,
    })
}

/// Only runs while a toast is visible. Each tick carries the current time so
/// a toast replaced just before a tick still gets its full duration.
fn toast_subscription(state: &AppState) -> Subscription<Message> {
    if state.toast.is_some() {
        time::every(TOAST_CHECK_INTERVAL).map(|now| Message::Toast(ToastMessage::Tick(now)))
    } else {
        Subscription::none()
    }
}
