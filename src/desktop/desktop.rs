use super::capture::{CaptureSlot, CaptureTarget};
use super::dock::Dock;
use super::icons::IconLayer;
use super::menu_bar::MenuBar;
use super::panel::{PanelInstance, TitleControl};
use super::stacking::{Depth, StackingCoordinator};
use crate::apps::{ContentAction, PanelBody, PanelId, ViewContext};
use crate::catalog::{DockAction, DOCK_ITEMS};
use crate::command::Command;
use crate::config::{Config, Profile, Theme, WindowSettings};
use crate::display::Painter;
use crate::event::{PointerEvent, PointerKind};
use crate::geometry::{Direction, Position, Rect, Size};
use crate::i18n::{Locale, Translator};
use chrono::NaiveDateTime;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, info, warn};

const PANEL_SCROLL_ROWS: i32 = 1;
const DOCK_SCROLL_COLS: i32 = 3;
const JITTER_COLS: i32 = 10;
const JITTER_ROWS: i32 = 2;

/// The whole simulated desktop.
///
/// Open panels and their stacking order live here and nowhere else. Everything that changes
/// state goes through [open](Desktop::open), [close](Desktop::close) and
/// [focus](Desktop::focus) or one of the input handlers built on them.
pub struct Desktop {
    screen: Size,
    translator: Translator,
    windows: WindowSettings,
    theme: Theme,
    profile: Profile,
    stacking: StackingCoordinator<PanelId>,
    panels: HashMap<PanelId, PanelInstance>,
    icons: IconLayer,
    dock: Dock,
    menu_bar: MenuBar,
    capture: CaptureSlot,
    rng: StdRng,
    links: Vec<String>,
    last_tick: Option<Instant>,
    quit: bool,
    dirty: bool,
}

impl Desktop {
    pub fn new(config: &Config, locale: Locale, screen: Size) -> Self {
        return Self::with_rng(config, locale, screen, StdRng::from_entropy());
    }

    /// Same as [new](Desktop::new) with a fixed placement jitter sequence.
    pub fn with_seed(config: &Config, locale: Locale, screen: Size, seed: u64) -> Self {
        return Self::with_rng(config, locale, screen, StdRng::seed_from_u64(seed));
    }

    fn with_rng(config: &Config, locale: Locale, screen: Size, rng: StdRng) -> Self {
        return Self {
            screen,
            translator: Translator::new(locale),
            windows: config.get_windows_ref().clone(),
            theme: config.get_theme_ref().clone(),
            profile: config.get_profile_ref().clone(),
            stacking: StackingCoordinator::new(),
            panels: HashMap::new(),
            icons: IconLayer::new(),
            dock: Dock::new(config.get_dock_ref().clone(), screen),
            menu_bar: MenuBar::new(locale),
            capture: CaptureSlot::new(),
            rng,
            links: Vec::new(),
            last_tick: None,
            quit: false,
            dirty: true,
        };
    }

    pub fn screen(&self) -> Size {
        return self.screen;
    }

    pub fn translator(&self) -> Translator {
        return self.translator;
    }

    pub fn theme_ref(&self) -> &Theme {
        return &self.theme;
    }

    pub fn profile_ref(&self) -> &Profile {
        return &self.profile;
    }

    pub fn icons_ref(&self) -> &IconLayer {
        return &self.icons;
    }

    pub fn dock_ref(&self) -> &Dock {
        return &self.dock;
    }

    pub fn menu_bar_ref(&self) -> &MenuBar {
        return &self.menu_bar;
    }

    pub fn capture_ref(&self) -> &CaptureSlot {
        return &self.capture;
    }

    pub fn panel(&self, id: PanelId) -> Option<&PanelInstance> {
        return self.panels.get(&id);
    }

    pub fn depth_of(&self, id: PanelId) -> Option<Depth> {
        return self.stacking.depth_of(id);
    }

    pub fn is_open(&self, id: PanelId) -> bool {
        return self.stacking.is_open(id);
    }

    pub fn open_count(&self) -> usize {
        return self.stacking.len();
    }

    /// Open panels from the topmost down.
    pub fn stacking_order(&self) -> Vec<PanelId> {
        return self.stacking.stacking_order();
    }

    /// Open panels from the bottom up.
    pub fn paint_order(&self) -> Vec<PanelId> {
        return self.stacking.paint_order();
    }

    /// The topmost panel that is currently showing.
    pub fn focused(&self) -> Option<PanelId> {
        return self
            .stacking
            .stacking_order()
            .into_iter()
            .find(|id| self.panels.get(id).map_or(false, |p| p.is_visible()));
    }

    /// The region between the menu bar and the dock.
    pub fn desktop_area(&self) -> Rect {
        let rows = self
            .screen
            .get_rows()
            .saturating_sub(1)
            .saturating_sub(self.dock.band().height() as u16);

        return Rect::new(0, 1, Size::new(rows, self.screen.get_cols()));
    }

    pub fn view_context(&self, now: Instant) -> ViewContext<'_> {
        return ViewContext {
            translator: self.translator,
            theme: &self.theme,
            profile: &self.profile,
            now,
        };
    }

    pub fn should_quit(&self) -> bool {
        return self.quit;
    }

    /// Whether anything changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        return std::mem::replace(&mut self.dirty, false);
    }

    /// Outbound links requested since the last call.
    pub fn take_links(&mut self) -> Vec<String> {
        return std::mem::take(&mut self.links);
    }

    /// True while something on screen changes without input.
    pub fn is_animating(&self) -> bool {
        return self.dock.is_animating()
            || self
                .panels
                .values()
                .any(|p| !p.is_visible() || p.body_ref().is_animating());
    }

    /// Open `id`, or bring it to the top if it is already open. Returns false for project
    /// identifiers that do not exist.
    pub fn open(&mut self, id: PanelId, now: Instant) -> bool {
        if self.panels.contains_key(&id) {
            self.stacking.open(id);
            self.dirty = true;
            debug!("Raised {} to {:?}", id, self.stacking.depth_of(id));

            return true;
        }

        let body = match PanelBody::for_id(id, now) {
            Some(b) => b,
            None => {
                warn!("Nothing to open for {}", id);
                return false;
            }
        };

        let jitter = match id {
            PanelId::Project(_) if self.windows.placement_jitter() => Position::new(
                self.rng.gen_range(-JITTER_COLS..=JITTER_COLS),
                self.rng.gen_range(-JITTER_ROWS..=JITTER_ROWS),
            ),
            _ => Position::new(0, 0),
        };

        let panel = PanelInstance::open(id, body, self.desktop_area(), &self.windows, jitter);
        self.panels.insert(id, panel);

        let depth = self.stacking.open(id);
        self.dirty = true;
        info!("Opened {} at depth {}", id, depth);

        return true;
    }

    /// Close `id` and release any gesture bound to it.
    pub fn close(&mut self, id: PanelId) -> bool {
        let removed = self.panels.remove(&id).is_some();
        self.stacking.close(id);

        if self.capture.release_target(CaptureTarget::Panel(id)) {
            debug!("Released capture held by {}", id);
        }

        if removed {
            self.dirty = true;
            info!("Closed {}", id);
        }

        return removed;
    }

    /// Bring an open panel to the top. Panels that are not open are ignored.
    pub fn focus(&mut self, id: PanelId) -> bool {
        return match self.stacking.focus(id) {
            Some(depth) => {
                self.dirty = true;
                debug!("Focused {} at depth {}", id, depth);
                true
            }
            None => false,
        };
    }

    pub fn minimize(&mut self, id: PanelId, now: Instant) -> bool {
        let delay = self.windows.minimize_delay();

        return match self.panels.get_mut(&id) {
            Some(panel) => {
                panel.minimize(now, delay);
                self.capture.release_target(CaptureTarget::Panel(id));
                self.dirty = true;
                debug!("Minimized {}", id);
                true
            }
            None => false,
        };
    }

    pub fn toggle_maximize(&mut self, id: PanelId, now: Instant) -> bool {
        let panel = match self.panels.get_mut(&id) {
            Some(p) => p,
            None => return false,
        };

        panel.toggle_maximize();
        let maximized = panel.is_maximized();
        self.capture.release_target(CaptureTarget::Panel(id));
        self.clamp_scroll(id, now);
        self.dirty = true;
        debug!("{} maximized: {}", id, maximized);

        return true;
    }

    /// Move a panel's top left corner, clamped to the desktop area.
    pub fn move_panel(&mut self, id: PanelId, position: Position) -> bool {
        let area = self.desktop_area();
        let margin = self.windows.drag_margin();

        let moved = self
            .panels
            .get_mut(&id)
            .map_or(false, |p| p.move_to(position, area, margin));
        self.dirty |= moved;

        return moved;
    }

    pub fn resize(&mut self, screen: Size, now: Instant) {
        self.screen = screen;
        self.dock.resize(screen);

        let area = self.desktop_area();

        for panel in self.panels.values_mut() {
            panel.resize(area, &self.windows);
        }

        let ids: Vec<PanelId> = self.panels.keys().copied().collect();

        for id in ids {
            self.clamp_scroll(id, now);
        }

        self.dirty = true;
        debug!("Resized to {}", screen);
    }

    /// Advance timers: restore minimized panels, step the dock springs and refresh the clock.
    pub fn tick(&mut self, now: Instant, wall: &NaiveDateTime) {
        let elapsed = match self.last_tick {
            Some(last) => now.saturating_duration_since(last),
            None => std::time::Duration::from_millis(0),
        };
        self.last_tick = Some(now);

        for panel in self.panels.values_mut() {
            if panel.restore_if_due(now) {
                debug!("Restored {}", panel.id());
                self.dirty = true;
            }
        }

        if self.dock.is_animating() {
            self.dock.tick(elapsed);
            self.dirty = true;
        }

        if self.menu_bar.update(wall) {
            self.dirty = true;
        }

        if self.panels.values().any(|p| p.body_ref().is_animating()) {
            self.dirty = true;
        }
    }

    pub fn handle_command(&mut self, command: &Command, now: Instant) {
        debug!("Command {}", command.get_name());

        match command {
            Command::QuitCommand => {
                self.quit = true;
            }
            Command::FocusNextCommand => {
                // Raising the bottom panel cycles through all of them.
                let visible: Vec<PanelId> = self
                    .stacking
                    .stacking_order()
                    .into_iter()
                    .filter(|id| self.panels.get(id).map_or(false, |p| p.is_visible()))
                    .collect();

                if let Some(id) = visible.last() {
                    self.focus(*id);
                }
            }
            Command::CloseFocusedCommand => {
                if let Some(id) = self.focused() {
                    self.close(id);
                }
            }
            Command::MinimizeFocusedCommand => {
                if let Some(id) = self.focused() {
                    self.minimize(id, now);
                }
            }
            Command::MaximizeFocusedCommand => {
                if let Some(id) = self.focused() {
                    self.toggle_maximize(id, now);
                }
            }
            Command::MoveFocusedCommand(direction) => {
                if let Some(id) = self.focused() {
                    self.nudge(id, *direction);
                }
            }
            Command::LaunchDockItemCommand(index) => {
                self.launch_dock_item(*index, now);
            }
        }
    }

    fn nudge(&mut self, id: PanelId, direction: Direction) -> bool {
        let area = self.desktop_area();
        let margin = self.windows.drag_margin();

        let moved = self
            .panels
            .get_mut(&id)
            .map_or(false, |p| p.nudge(direction, area, margin));
        self.dirty |= moved;

        return moved;
    }

    /// Run a dock item's action. Returns false for indices past the end.
    pub fn launch_dock_item(&mut self, index: usize, now: Instant) -> bool {
        let item = match DOCK_ITEMS.get(index) {
            Some(i) => i,
            None => return false,
        };

        match item.action {
            DockAction::Launch(kind) => {
                self.open(PanelId::App(kind), now);
            }
            DockAction::OpenInstagram => {
                self.links.push(self.profile.instagram_url_ref().clone());
            }
            DockAction::OpenMail => {
                self.links.push(self.profile.mail_link());
            }
        }

        return true;
    }

    fn panel_at(&self, point: Position) -> Option<PanelId> {
        let area = self.desktop_area();

        return self.stacking.stacking_order().into_iter().find(|id| {
            self.panels
                .get(id)
                .map_or(false, |p| p.is_visible() && p.frame(area).contains(point))
        });
    }

    /// Lay a panel's content out without drawing it.
    fn measure(&self, id: PanelId, now: Instant) -> Option<Painter<'static>> {
        let panel = self.panels.get(&id)?;
        let content = panel.content_rect(self.desktop_area());
        let mut painter = Painter::measure(content.size(), panel.scroll());

        panel
            .body_ref()
            .view(&mut painter, &self.view_context(now));

        return Some(painter);
    }

    fn max_scroll(&self, id: PanelId, now: Instant) -> u16 {
        let painter = match self.measure(id, now) {
            Some(p) => p,
            None => return 0,
        };

        return painter.extent().saturating_sub(painter.height());
    }

    fn clamp_scroll(&mut self, id: PanelId, now: Instant) {
        let max = self.max_scroll(id, now);

        if let Some(panel) = self.panels.get_mut(&id) {
            panel.clamp_scroll(max);
        }
    }

    fn content_action(&self, id: PanelId, point: Position, now: Instant) -> Option<ContentAction> {
        let panel = self.panels.get(&id)?;
        let content = panel.content_rect(self.desktop_area());

        if !content.contains(point) {
            return None;
        }

        let local = point - content.position() + Position::new(0, panel.scroll() as i32);
        let painter = self.measure(id, now)?;

        return painter.action_at(local).cloned();
    }

    fn apply_content_action(&mut self, id: PanelId, action: ContentAction, now: Instant) {
        debug!("{} content action {:?}", id, action);

        match action {
            ContentAction::Dismiss => {
                self.close(id);
            }
            ContentAction::OpenLink(url) => {
                self.links.push(url);
            }
            other => {
                let changed = self
                    .panels
                    .get_mut(&id)
                    .map_or(false, |p| p.mut_body_ref().apply(&other));

                if changed {
                    self.clamp_scroll(id, now);
                    self.dirty = true;
                }
            }
        }
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent, now: Instant) {
        let point = event.position();

        match event.kind() {
            PointerKind::Down => self.pointer_down(point, now),
            PointerKind::Drag => self.pointer_drag(point),
            PointerKind::Up => self.pointer_up(point, now),
            PointerKind::Move => {
                self.dirty |= self.dock.pointer_moved(point);
            }
            PointerKind::ScrollUp => self.scroll(point, -1, now),
            PointerKind::ScrollDown => self.scroll(point, 1, now),
        }
    }

    fn pointer_down(&mut self, point: Position, now: Instant) {
        // A press always starts a new gesture.
        self.capture.release();

        if !self.dock.contains(point) {
            self.dirty |= self.dock.pointer_left();
        }

        if point.row() == 0 {
            return;
        }

        if self.dock.contains(point) {
            if let Some(index) = self.dock.item_at(point) {
                self.launch_dock_item(index, now);
            }

            return;
        }

        if let Some(id) = self.panel_at(point) {
            self.focus(id);
            self.panel_down(id, point, now);
            return;
        }

        let area = self.desktop_area();

        if let Some(index) = self.icons.icon_at(point, area) {
            if let Some(icon) = self.icons.get(index) {
                self.capture
                    .acquire(CaptureTarget::Icon(index), point, icon.position(area));
            }
        }
    }

    fn panel_down(&mut self, id: PanelId, point: Position, now: Instant) {
        let area = self.desktop_area();

        let (title, control, origin, maximized) = match self.panels.get(&id) {
            Some(p) => (
                p.title_rect(area).contains(point),
                p.control_at(area, point),
                p.position(),
                p.is_maximized(),
            ),
            None => return,
        };

        if let Some(control) = control {
            match control {
                TitleControl::Close => {
                    self.close(id);
                }
                TitleControl::Minimize => {
                    self.minimize(id, now);
                }
                TitleControl::Maximize => {
                    self.toggle_maximize(id, now);
                }
            }

            return;
        }

        if title {
            if !maximized {
                self.capture.acquire(CaptureTarget::Panel(id), point, origin);
            }

            return;
        }

        if let Some(action) = self.content_action(id, point, now) {
            self.apply_content_action(id, action, now);
        }
    }

    fn pointer_drag(&mut self, point: Position) {
        let area = self.desktop_area();

        match self.capture.drag_to(point) {
            Some((CaptureTarget::Panel(id), position)) => {
                self.move_panel(id, position);
            }
            Some((CaptureTarget::Icon(index), position)) => {
                if let Some(icon) = self.icons.get_mut(index) {
                    self.dirty |= icon.move_to(position, area);
                }
            }
            None => {
                self.dirty |= self.dock.pointer_moved(point);
            }
        }
    }

    fn pointer_up(&mut self, point: Position, now: Instant) {
        let capture = match self.capture.release() {
            Some(c) => c,
            None => return,
        };

        if let CaptureTarget::Icon(index) = capture.target() {
            if capture.moved() {
                return;
            }

            let area = self.desktop_area();
            let project = match self.icons.get(index) {
                Some(icon) if icon.rect(area).contains(point) => icon.project(),
                _ => return,
            };

            self.open(PanelId::Project(project.id), now);
        }
    }

    fn scroll(&mut self, point: Position, direction: i32, now: Instant) {
        if self.dock.contains(point) {
            if self.dock.is_compact() {
                self.dirty |= self.dock.scroll_by(direction * DOCK_SCROLL_COLS);
            }

            return;
        }

        let id = match self.panel_at(point) {
            Some(id) => id,
            None => return,
        };

        let max = self.max_scroll(id, now);

        if let Some(panel) = self.panels.get_mut(&id) {
            self.dirty |= panel.scroll_by(direction * PANEL_SCROLL_ROWS, max);
        }
    }
}
