// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct loads the configuration, resolves the page catalog and its
//! image files, starts decoding them in the background and then forwards
//! every event to the viewer component.

pub mod config;
mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::domain::page::{PageId, PageList};
use crate::media::{self, PageAssets};
use crate::ui::theming::AppTheme;
use crate::ui::viewer::component;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Application name shown in the window title.
const APP_TITLE: &str = "Pinch";

/// Root Iced application state.
pub struct App {
    viewer: component::State,
    theme: AppTheme,
    assets: PageAssets,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("assets", &self.assets.dir())
            .field("active_index", &self.viewer.selector().active_index())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(
            config::WINDOW_DEFAULT_WIDTH as f32,
            config::WINDOW_DEFAULT_HEIGHT as f32,
        ),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Flags are consumed once, but iced requires an `Fn` boot function
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

impl App {
    /// Loads the configuration and kicks off asynchronous page loading.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            log::warn!("{warning}");
        }

        Self::with_config(&config, flags)
    }

    /// Builds the application from an already loaded configuration.
    fn with_config(config: &Config, flags: Flags) -> (Self, Task<Message>) {
        let pages = config.page_list().unwrap_or_else(|err| {
            log::warn!("{err}; using the built-in pages");
            PageList::builtin()
        });

        let assets = PageAssets::new(paths::resolve_assets_dir(
            flags.assets_dir.map(PathBuf::from),
            config.general.assets_dir.clone(),
        ));
        for missing in assets.missing_images(&pages) {
            log::warn!("Page image not found: {}", missing.display());
        }

        let mut viewer = component::State::new(
            pages,
            config.gesture_settings(),
            config.animation_settings(),
            Instant::now(),
        );

        if let Some(id) = flags.page {
            if let Err(err) = viewer.select_page(PageId::new(id)) {
                log::warn!("Ignoring --page: {err}");
            }
        }

        log::info!(
            "Showing {} page(s) from {}",
            viewer.pages().len(),
            assets.dir().display()
        );

        let app = App {
            viewer,
            theme: AppTheme::new(config.general.theme_mode),
            assets,
        };
        let task = app.load_pages();

        (app, task)
    }

    /// One background decode task per page.
    fn load_pages(&self) -> Task<Message> {
        Task::batch(self.viewer.pages().iter().enumerate().map(|(index, page)| {
            let assets = self.assets.clone();
            let page = page.clone();
            Task::perform(
                async move { media::load_page(&assets, &page) },
                move |result| Message::Viewer(component::Message::PageLoaded { index, result }),
            )
        }))
    }

    fn title(&self) -> String {
        let page = self.viewer.selector().active_page();
        format!("{} - {APP_TITLE}", page.image_name())
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.viewer.is_animating()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let (viewer_message, now) = match message {
            Message::Viewer(viewer_message) => (viewer_message, Instant::now()),
            Message::Tick(now) => (component::Message::Tick(now), now),
        };

        match self.viewer.handle_message(viewer_message, now) {
            component::Effect::PageChanged(id) => {
                log::info!("Selected page {id}");
            }
            component::Effect::None => {}
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        self.viewer.view(self.theme.colors).map(Message::Viewer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::{GeneralConfig, PageConfig};
    use crate::ui::state::transform;
    use crate::ui::theming::ThemeMode;
    use std::time::Duration;
    use tempfile::tempdir;

    fn flags_for(dir: &std::path::Path) -> Flags {
        Flags {
            assets_dir: Some(dir.to_string_lossy().into_owned()),
            ..Flags::default()
        }
    }

    #[test]
    fn title_names_the_active_page() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (app, _task) = App::with_config(&Config::default(), flags_for(temp_dir.path()));

        assert_eq!(app.title(), "magazine-front-cover - Pinch");
    }

    #[test]
    fn page_flag_selects_initial_page() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let flags = Flags {
            page: Some(1),
            ..flags_for(temp_dir.path())
        };

        let (app, _task) = App::with_config(&Config::default(), flags);

        assert_eq!(app.viewer.selector().active_index(), 1);
        assert_eq!(app.title(), "magazine-back-cover - Pinch");
    }

    #[test]
    fn unknown_page_flag_is_ignored() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let flags = Flags {
            page: Some(42),
            ..flags_for(temp_dir.path())
        };

        let (app, _task) = App::with_config(&Config::default(), flags);

        assert_eq!(app.viewer.selector().active_index(), 0);
    }

    #[test]
    fn configured_pages_and_assets_dir_are_used() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
                assets_dir: Some(temp_dir.path().to_path_buf()),
            },
            pages: vec![PageConfig {
                id: 7,
                image_name: "poster".to_string(),
            }],
            ..Config::default()
        };

        let (app, _task) = App::with_config(&config, Flags::default());

        assert_eq!(app.assets.dir(), temp_dir.path());
        assert_eq!(app.viewer.pages().len(), 1);
        assert_eq!(app.title(), "poster - Pinch");
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn duplicate_configured_pages_fall_back_to_builtin() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let page = PageConfig {
            id: 3,
            image_name: "same".to_string(),
        };
        let config = Config {
            pages: vec![page.clone(), page],
            ..Config::default()
        };

        let (app, _task) = App::with_config(&config, flags_for(temp_dir.path()));

        assert_eq!(app.viewer.pages(), &PageList::builtin());
    }

    #[test]
    fn update_forwards_viewer_messages_and_ticks() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (mut app, _task) = App::with_config(&Config::default(), flags_for(temp_dir.path()));

        let _ = app.update(Message::Viewer(component::Message::Transform(
            transform::Message::StepUp,
        )));
        assert_eq!(app.viewer.controller().scale(), 2.0);

        let later = Instant::now() + Duration::from_secs(5);
        let _ = app.update(Message::Tick(later));
        assert_eq!(app.viewer.displayed_transform().scale, 2.0);
        assert!(!app.viewer.is_animating());
    }

    #[test]
    fn view_renders() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (app, _task) = App::with_config(&Config::default(), flags_for(temp_dir.path()));
        let _element = app.view();
    }
}
