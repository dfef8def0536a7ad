// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window events drive the drop gesture and the preview width; the spinner
//! tick only runs while a decode is in flight.

use super::Message;
use crate::selection::Phase;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Routes the window events the application reacts to.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::FileHovered(path)) => Some(Message::FileHovered(path)),
        event::Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
        event::Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Drives the spinner animation (~60 FPS) while decoding.
pub fn create_spinner_subscription(phase: Phase) -> Subscription<Message> {
    if phase == Phase::Decoding {
        time::every(Duration::from_millis(16)).map(|_| Message::SpinnerTick)
    } else {
        Subscription::none()
    }
}
