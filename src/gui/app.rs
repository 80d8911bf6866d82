//! Main GUI application

use crate::catalog::PhraseCatalog;
use crate::clipboard::SystemClipboard;
use crate::dispatch::{CopyDispatcher, CopyOutcome, PhraseBoard};
use crate::gui::draft::SettingsDraft;
use crate::gui::theme::{self, AppBackground, Palette};
use crate::shortcuts::{Hotkey, ShortcutMap};
use crate::utils::{AppSettings, ThemeChoice, PROJECT_URL};
use iced::keyboard::{self, key, Key, Modifiers};
use iced::widget::container;
use iced::{Application, Command, Element, Length, Subscription, Theme};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Startup data handed to the window
#[derive(Debug, Clone)]
pub struct AppFlags {
    pub catalog: PhraseCatalog,
    pub settings: AppSettings,
    pub settings_path: PathBuf,
}

/// Main application state
pub struct ItcApp {
    board: PhraseBoard<SystemClipboard>,
    settings: AppSettings,
    settings_path: PathBuf,

    // UI State
    current_view: View,
    draft: SettingsDraft,
    last_copy_failed: bool,
}

/// Application view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Main,
    Settings,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Phrase grid
    PhrasePressed(usize),
    PhraseHovered(usize),
    PhraseLeft,
    KeyPressed(Key, Modifiers),
    ClearStatus(u64),

    // Header
    OpenAbout,

    // View navigation
    SwitchToMain,
    SwitchToSettings,

    // Settings
    ThemeSelected(ThemeChoice),
    ShortcutsToggled(bool),
    StartRecording(usize),
    CancelRecording,
    UnbindShortcut(usize),
    SaveSettings,
}

impl ItcApp {
    fn palette(&self) -> Palette {
        // Preview the drafted theme while on the settings screen
        match self.current_view {
            View::Settings => Palette::for_choice(self.draft.theme),
            View::Main => Palette::for_choice(self.settings.theme),
        }
    }

    fn fresh_draft(&self) -> SettingsDraft {
        SettingsDraft::new(&self.settings, self.board.shortcuts().clone())
    }

    /// Record the outcome of a copy and, on success, schedule the toast to disappear.
    fn after_copy(&mut self, outcome: CopyOutcome) -> Command<Message> {
        match outcome {
            CopyOutcome::Copied { .. } => {
                self.last_copy_failed = false;
                let generation = self.board.status().generation;
                let timeout = Duration::from_millis(self.settings.status_timeout_ms);
                Command::perform(
                    async move {
                        tokio::time::sleep(timeout).await;
                        generation
                    },
                    Message::ClearStatus,
                )
            }
            CopyOutcome::Failed { index, reason } => {
                warn!("Copy of phrase #{} failed: {}", index, reason);
                self.last_copy_failed = true;
                Command::none()
            }
            CopyOutcome::NoSuchEntry(index) => {
                warn!("Ignoring activation of unknown phrase #{}", index);
                Command::none()
            }
        }
    }

    fn handle_key(&mut self, pressed: Key, modifiers: Modifiers) -> Command<Message> {
        if self.current_view == View::Settings && self.draft.recording.is_some() {
            if pressed == Key::Named(key::Named::Escape) {
                self.draft.cancel_recording();
                return Command::none();
            }
            if modifiers.alt() {
                if let Some(hotkey) = hotkey_from_key(&pressed) {
                    self.draft.record(hotkey);
                }
            }
            return Command::none();
        }

        if self.current_view != View::Main || !modifiers.alt() {
            return Command::none();
        }
        match hotkey_from_key(&pressed).and_then(|hotkey| self.board.on_shortcut(&hotkey)) {
            Some(outcome) => self.after_copy(outcome),
            None => Command::none(),
        }
    }

    fn save_settings(&mut self) {
        let mut settings = self.settings.clone();
        self.draft.apply_to(&mut settings);

        let shortcuts = self.draft.shortcuts.clone();
        self.board.set_shortcuts(shortcuts, settings.shortcuts_enabled);

        if let Err(e) = settings.save(&self.settings_path) {
            warn!("Failed to save settings: {}", e);
            self.draft.error = Some(format!("Failed to save settings: {}", e));
            self.settings = settings;
            return;
        }
        self.settings = settings;
        self.current_view = View::Main;
    }
}

/// Alt+key character for a key event; named keys (Enter, F1, ...) are not bindable.
fn hotkey_from_key(key: &Key) -> Option<Hotkey> {
    match key {
        Key::Character(c) => Hotkey::from_key(c.as_str()),
        _ => None,
    }
}

impl Application for ItcApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppFlags;

    fn new(flags: Self::Flags) -> (Self, Command<Message>) {
        let AppFlags {
            catalog,
            mut settings,
            settings_path,
        } = flags;

        settings.validate(catalog.len());
        let shortcuts = settings.shortcut_map(catalog.len()).unwrap_or_else(|e| {
            warn!("Invalid shortcuts in settings, using defaults: {}", e);
            ShortcutMap::defaults(&catalog)
        });

        info!(
            "Starting with {} phrases, {} shortcuts",
            catalog.len(),
            shortcuts.len()
        );

        let draft = SettingsDraft::new(&settings, shortcuts.clone());
        let board = PhraseBoard::new(catalog, CopyDispatcher::new(SystemClipboard::new()))
            .with_shortcuts(shortcuts, settings.shortcuts_enabled);

        let app = Self {
            board,
            settings,
            settings_path,
            current_view: View::Main,
            draft,
            last_copy_failed: false,
        };

        (app, Command::none())
    }

    fn title(&self) -> String {
        String::from("Islāmic Text Copier")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::PhrasePressed(index) => {
                let outcome = self.board.on_activate(index);
                self.after_copy(outcome)
            }
            Message::PhraseHovered(index) => {
                self.board.on_hover_enter(index);
                Command::none()
            }
            Message::PhraseLeft => {
                self.board.on_hover_leave();
                Command::none()
            }
            Message::KeyPressed(key, modifiers) => self.handle_key(key, modifiers),
            Message::ClearStatus(generation) => {
                self.board.clear_status_if(generation);
                Command::none()
            }

            Message::OpenAbout => {
                if let Err(e) = open::that(PROJECT_URL) {
                    warn!("Failed to open {}: {}", PROJECT_URL, e);
                }
                Command::none()
            }

            // View navigation
            Message::SwitchToMain => {
                // Leaving without saving discards the draft
                self.draft = self.fresh_draft();
                self.current_view = View::Main;
                Command::none()
            }
            Message::SwitchToSettings => {
                self.board.on_hover_leave();
                self.draft = self.fresh_draft();
                self.current_view = View::Settings;
                Command::none()
            }

            // Settings
            Message::ThemeSelected(theme) => {
                self.draft.theme = theme;
                Command::none()
            }
            Message::ShortcutsToggled(enabled) => {
                self.draft.shortcuts_enabled = enabled;
                Command::none()
            }
            Message::StartRecording(index) => {
                self.draft.start_recording(index);
                Command::none()
            }
            Message::CancelRecording => {
                self.draft.cancel_recording();
                Command::none()
            }
            Message::UnbindShortcut(index) => {
                self.draft.unbind(index);
                Command::none()
            }
            Message::SaveSettings => {
                self.save_settings();
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        use crate::gui::views::{main_view, settings_view, MainViewState};

        let palette = self.palette();

        let content = match self.current_view {
            View::Main => main_view(
                MainViewState {
                    catalog: self.board.catalog(),
                    shortcuts: self
                        .board
                        .shortcuts_enabled()
                        .then(|| self.board.shortcuts()),
                    gloss: self.board.gloss_text(),
                    gloss_is_placeholder: self.board.hovered().is_none(),
                    status: &self.board.status().message,
                    status_failed: self.last_copy_failed,
                },
                palette,
            ),
            View::Settings => settings_view(self.board.catalog(), &self.draft, palette),
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(20)
            .style(iced::theme::Container::Custom(Box::new(AppBackground(
                palette,
            ))))
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, modifiers| Some(Message::KeyPressed(key, modifiers)))
    }

    fn theme(&self) -> Self::Theme {
        match self.current_view {
            View::Settings => theme::iced_theme(self.draft.theme),
            View::Main => theme::iced_theme(self.settings.theme),
        }
    }
}
