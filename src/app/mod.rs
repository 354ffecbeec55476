// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// COSMIC application wiring and main app struct.

pub mod document;
mod message;
mod model;
mod update;
pub mod view;

pub use message::AppMessage;
pub use model::AppModel;

use cosmic::app::Core;
use cosmic::iced::event::{self, Event};
use cosmic::iced::keyboard::{self, Key, Modifiers, key::Named};
use cosmic::iced::{Subscription, window};
use cosmic::{Action, Application, ApplicationExt, Element, Task};

use crate::Args;
use crate::config::AppConfig;
use crate::fl;

/// Flags passed from `main` into the application.
#[derive(Debug, Clone)]
pub enum Flags {
    Args(Args),
}

/// Main application type.
pub struct GlimpseApp {
    core: Core,
    model: AppModel,
    config: AppConfig,
}

impl Application for GlimpseApp {
    type Executor = cosmic::SingleThreadExecutor;
    type Flags = Flags;
    type Message = AppMessage;

    const APP_ID: &'static str = "io.github.glimpse.Glimpse";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        let config = AppConfig::default();
        let mut model = AppModel::new(&config);

        let Flags::Args(args) = flags;
        if let Some(dir) = args.directory {
            model.open_directory(&dir);
        }

        let mut app = Self {
            core,
            model,
            config,
        };
        app.refresh_title();

        (app, Task::none())
    }

    fn update(&mut self, message: Self::Message) -> Task<Action<Self::Message>> {
        let result = update::update(self, &message);

        if matches!(
            message,
            AppMessage::FolderChosen(_) | AppMessage::NextImage | AppMessage::PrevImage
        ) {
            self.refresh_title();
        }

        match result {
            update::UpdateResult::None => Task::none(),
            update::UpdateResult::Task(task) => task,
        }
    }

    fn view(&self) -> Element<'_, Self::Message> {
        view::view(&self.model)
    }

    fn footer(&self) -> Option<Element<'_, Self::Message>> {
        Some(view::footer::view(&self.model))
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        Subscription::batch([
            keyboard::on_key_press(handle_key_press),
            event::listen_with(handle_event),
        ])
    }
}

impl GlimpseApp {
    /// Show the current file name in the header bar.
    fn refresh_title(&mut self) {
        let title = match self.model.current_name() {
            Some(name) => format!("{name} - {}", fl!("app-title")),
            None => fl!("app-title"),
        };
        self.set_header_title(title);
    }
}

/// Map raw key presses + modifiers into high-level application messages.
fn handle_key_press(key: Key, modifiers: Modifiers) -> Option<AppMessage> {
    use AppMessage::{NextImage, OpenFolder, PrevImage, ZoomIn, ZoomOut, ZoomReset};

    // Ctrl shortcuts; Shift is allowed so that Ctrl+Shift+= produces "+".
    if modifiers.control() && !modifiers.alt() && !modifiers.logo() {
        return match key.as_ref() {
            Key::Character("+" | "=") => Some(ZoomIn),
            Key::Character("-") => Some(ZoomOut),
            Key::Character("0") => Some(ZoomReset),
            Key::Character(ch) if ch.eq_ignore_ascii_case("o") => Some(OpenFolder),
            _ => None,
        };
    }

    // Ignore key presses when command-style modifiers are pressed.
    if modifiers.command() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    match key.as_ref() {
        Key::Named(Named::ArrowRight) => Some(NextImage),
        Key::Named(Named::ArrowLeft) => Some(PrevImage),
        _ => None,
    }
}

/// Track modifier state for the crop marker, which starts on Ctrl+click.
fn handle_event(event: Event, _status: event::Status, _id: window::Id) -> Option<AppMessage> {
    match event {
        Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
            Some(AppMessage::ModifiersChanged(modifiers))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(ch: &str) -> Key {
        Key::Character(ch.into())
    }

    #[test]
    fn ctrl_plus_and_equal_zoom_in() {
        assert!(matches!(
            handle_key_press(character("+"), Modifiers::CTRL | Modifiers::SHIFT),
            Some(AppMessage::ZoomIn)
        ));
        assert!(matches!(
            handle_key_press(character("="), Modifiers::CTRL),
            Some(AppMessage::ZoomIn)
        ));
        assert!(matches!(
            handle_key_press(character("-"), Modifiers::CTRL),
            Some(AppMessage::ZoomOut)
        ));
        assert!(matches!(
            handle_key_press(character("0"), Modifiers::CTRL),
            Some(AppMessage::ZoomReset)
        ));
    }

    #[test]
    fn zoom_keys_need_control() {
        assert!(handle_key_press(character("+"), Modifiers::empty()).is_none());
        assert!(handle_key_press(character("-"), Modifiers::empty()).is_none());
    }

    #[test]
    fn arrows_navigate() {
        assert!(matches!(
            handle_key_press(Key::Named(Named::ArrowRight), Modifiers::empty()),
            Some(AppMessage::NextImage)
        ));
        assert!(matches!(
            handle_key_press(Key::Named(Named::ArrowLeft), Modifiers::empty()),
            Some(AppMessage::PrevImage)
        ));
        assert!(handle_key_press(Key::Named(Named::ArrowLeft), Modifiers::ALT).is_none());
    }

    #[test]
    fn ctrl_o_opens_folder() {
        assert!(matches!(
            handle_key_press(character("o"), Modifiers::CTRL),
            Some(AppMessage::OpenFolder)
        ));
    }

    #[test]
    fn modifier_changes_are_forwarded() {
        let event = Event::Keyboard(keyboard::Event::ModifiersChanged(Modifiers::CTRL));
        let message = handle_event(event, event::Status::Ignored, window::Id::unique());
        assert!(matches!(
            message,
            Some(AppMessage::ModifiersChanged(m)) if m.control()
        ));
    }
}
