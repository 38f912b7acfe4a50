use crate::channel_controller::{ChannelController, ControllerResponse};
use crate::display::{compose, Canvas, Display, Style};
use crate::error::{DeskfolioError, ErrorType};
use crate::event::InputEvent;
use crate::geometry::Size;
use crate::i18n::Locale;
use crate::input_manager::InputManager;
use crate::links::LinkOpener;
use crate::{Config, Desktop};
use std::time::Instant;
use tracing::{debug, info};

/// Owns the desktop and drives it from terminal input and the frame clock.
pub struct LogicManager {
    config: Config,
    desktop: Desktop,
    display: Display,
    links: LinkOpener,
}

impl LogicManager {
    /// Create a manager sized to the current terminal.
    pub fn new(config: Config, locale: Locale) -> Result<Self, DeskfolioError> {
        let screen = Display::get_terminal_size()?;

        return Ok(Self::with_screen(config, locale, screen));
    }

    pub fn with_screen(config: Config, locale: Locale, screen: Size) -> Self {
        let desktop = Desktop::new(&config, locale, screen);
        let links = LinkOpener::new(config.get_environment_ref().link_opener_ref().clone());

        return Self {
            config,
            desktop,
            display: Display::new(),
            links,
        };
    }

    pub fn desktop_ref(&self) -> &Desktop {
        return &self.desktop;
    }

    pub fn should_quit(&self) -> bool {
        return self.desktop.should_quit();
    }

    /// Run until the quit command is received or input closes. The terminal must already be
    /// in raw mode with mouse capture enabled.
    pub async fn start_event_loop(mut self) -> Result<(), DeskfolioError> {
        let (mut controller, tx) =
            ChannelController::new(self.config.get_environment_ref().frame_interval());
        let input = InputManager::start(tx)?;

        self.display = std::mem::take(&mut self.display).init()?;
        self.render(Instant::now())?;

        info!("Started event loop at {}", self.desktop.screen());

        loop {
            let now = Instant::now();

            match controller.wait_for_message().await {
                ControllerResponse::Input(event) => self.process_event(event, now),
                ControllerResponse::Tick => self
                    .desktop
                    .tick(now, &chrono::Local::now().naive_local()),
                ControllerResponse::Closed => {
                    input.stop();
                    return Err(ErrorType::InputClosedError.into_error());
                }
            }

            if self.desktop.should_quit() {
                break;
            }

            self.links.open_all(self.desktop.take_links());

            if self.desktop.take_dirty() {
                self.render(now)?;
            }
        }

        info!("Quit requested");
        input.stop();

        return self.display.restore();
    }

    /// Route one input event to the desktop.
    pub fn process_event(&mut self, event: InputEvent, now: Instant) {
        match event {
            InputEvent::Key(key) => {
                let command = self.config.key_map().command_for_key(&key).cloned();

                match command {
                    Some(command) => self.desktop.handle_command(&command, now),
                    None => debug!("Unbound key {:?}", key),
                }
            }
            InputEvent::Pointer(pointer) => self.desktop.handle_pointer(&pointer, now),
            InputEvent::Resize(size) => {
                self.desktop.resize(size, now);
                self.display.invalidate();
            }
        }
    }

    fn render(&mut self, now: Instant) -> Result<(), DeskfolioError> {
        let theme = self.desktop.theme_ref();
        let mut canvas = Canvas::new(
            self.desktop.screen(),
            Style::new(theme.body_text, theme.desktop_background),
        );

        compose(&self.desktop, &mut canvas, now);

        return self.display.render(&canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::LogicManager;
    use crate::apps::{AppKind, PanelId};
    use crate::event::{InputEvent, Key};
    use crate::geometry::Size;
    use crate::i18n::Locale;
    use crate::Config;
    use std::time::Instant;

    fn manager() -> LogicManager {
        return LogicManager::with_screen(Config::default(), Locale::En, Size::new(40, 140));
    }

    #[test]
    fn quit_shortcut_stops_the_loop() {
        let mut manager = manager();

        manager.process_event(InputEvent::Key(Key::Ctrl('q')), Instant::now());
        assert!(manager.should_quit());
    }

    #[test]
    fn number_keys_launch_dock_items() {
        let mut manager = manager();

        manager.process_event(InputEvent::Key(Key::Char('6')), Instant::now());
        assert!(manager.desktop_ref().is_open(PanelId::App(AppKind::Photos)));

        manager.process_event(InputEvent::Key(Key::Char('w')), Instant::now());
        assert!(!manager.desktop_ref().is_open(PanelId::App(AppKind::Photos)));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut manager = manager();

        manager.process_event(InputEvent::Key(Key::Char('z')), Instant::now());
        assert_eq!(manager.desktop_ref().open_count(), 0);
        assert!(!manager.should_quit());
    }

    #[test]
    fn resize_reaches_the_desktop() {
        let mut manager = manager();

        manager.process_event(InputEvent::Resize(Size::new(30, 90)), Instant::now());
        assert_eq!(manager.desktop_ref().screen(), Size::new(30, 90));
    }
}
