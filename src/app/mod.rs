// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct owns the selection, the persisted lens preferences and
//! the transient UI state (drag gesture, open picker, notice), and turns
//! messages into side effects such as decoding a file or writing a
//! preference back to the store.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Capabilities};
use crate::i18n::fluent::I18n;
use crate::preferences::{FileStore, MemoryStore, PreferenceStore, Preferences};
use crate::selection::{DropGesture, Selection};
use crate::ui::components::notice::Notice;
use crate::ui::controls;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    capabilities: Capabilities,
    theme_mode: ThemeMode,
    /// Backing store of `preferences`; every change is written through.
    store: Box<dyn PreferenceStore + Send>,
    preferences: Preferences,
    selection: Selection,
    drop_gesture: DropGesture,
    controls: controls::State,
    /// Blocking notice; input is ignored while it is shown.
    notice: Option<Notice>,
    window_width: f32,
    spinner_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("preferences", &self.preferences)
            .field("phase", &self.selection.phase())
            .field("notice", &self.notice)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            capabilities: Capabilities::default(),
            theme_mode: ThemeMode::System,
            store: Box::new(MemoryStore::new()),
            preferences: Preferences::default(),
            selection: Selection::new(),
            drop_gesture: DropGesture::new(),
            controls: controls::State::default(),
            notice: None,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            spinner_rotation: 0.0,
        }
    }
}

impl App {
    /// Builds the application around an explicit preference store.
    pub fn with_store(store: Box<dyn PreferenceStore + Send>) -> Self {
        let preferences = Preferences::load(store.as_ref());
        Self {
            store,
            preferences,
            ..Self::default()
        }
    }

    /// Loads config, translations and preferences, then selects the file
    /// given on the command line, if any.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(
            flags.lang.clone(),
            flags.i18n_dir.as_deref().map(Path::new),
            &config,
        );

        let store: Box<dyn PreferenceStore + Send> = match FileStore::open_in(None) {
            Some(store) => {
                tracing::info!(path = %store.path().display(), "using preference store");
                Box::new(store)
            }
            None => {
                tracing::warn!("no data directory; preferences will not persist");
                Box::new(MemoryStore::new())
            }
        };

        let mut app = Self {
            i18n,
            capabilities: config.controls,
            theme_mode: config.general.theme_mode,
            ..Self::with_store(store)
        };

        if config_warning.is_some() {
            app.notice = Some(Notice::config_load_error());
        }

        let task = match flags.file_path {
            Some(path) => app.update(Message::FilesPicked(vec![PathBuf::from(path)])),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.selection.path().and_then(Path::file_name) {
            Some(name) => format!("{} - {app_name}", name.to_string_lossy()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_spinner_subscription(self.selection.phase()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            store: self.store.as_mut(),
            preferences: &mut self.preferences,
            selection: &mut self.selection,
            drop_gesture: &mut self.drop_gesture,
            controls: &mut self.controls,
            notice: &mut self.notice,
            window_width: &mut self.window_width,
            spinner_rotation: &mut self.spinner_rotation,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            capabilities: self.capabilities,
            preferences: &self.preferences,
            selection: &self.selection,
            controls: &self.controls,
            notice: self.notice.as_ref(),
            is_dragging: self.drop_gesture.is_dragging(),
            window_width: self.window_width,
            spinner_rotation: self.spinner_rotation,
        })
    }
}
