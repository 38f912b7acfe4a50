use super::spring::{Spring, SpringParams};
use crate::catalog::DOCK_ITEMS;
use crate::config::DockSettings;
use crate::geometry::{Position, Rect, Size};
use std::time::Duration;

/// Rows reserved at the bottom of the screen: a tooltip row above the bar.
pub const DOCK_BAND_ROWS: u16 = 4;
/// Rows of the bar itself.
pub const DOCK_BAR_ROWS: u16 = 3;
const ICON_ROWS: u16 = 2;
const GAP_COLS: u16 = 1;
const SEPARATOR_COLS: u16 = 2;
const PADDING_COLS: u16 = 2;

/// Target size for an icon whose centre is `distance` columns from the pointer.
pub fn magnify(distance: f32, base: f32, max: f32, radius: f32) -> f32 {
    if radius <= 0.0 {
        return base;
    }

    let t = 1.0 - (distance.abs() / radius).min(1.0);
    return base + (max - base) * t;
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct DockSlot {
    pub index: usize,
    /// The icon box, lifted rows included.
    pub icon: Rect,
    /// The clickable column span across the whole bar height.
    pub hit: Rect,
    /// Column of the separator drawn after this icon.
    pub separator: Option<i32>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DockLayout {
    pub bar: Rect,
    pub slots: Vec<DockSlot>,
}

impl DockLayout {
    pub fn slot_at(&self, point: Position) -> Option<&DockSlot> {
        return self.slots.iter().find(|s| s.hit.contains(point));
    }
}

/// The launcher row at the bottom of the screen.
///
/// Icon sizes follow the pointer's horizontal distance through springs. Below a width
/// threshold the effect is off, icons use a fixed size and the row scrolls instead.
pub struct Dock {
    settings: DockSettings,
    screen: Size,
    springs: Vec<Spring>,
    pointer: Option<Position>,
    scroll: u16,
}

impl Dock {
    pub fn new(settings: DockSettings, screen: Size) -> Self {
        let base = settings.base_size();

        return Self {
            settings,
            screen,
            springs: DOCK_ITEMS.iter().map(|_| Spring::new(base)).collect(),
            pointer: None,
            scroll: 0,
        };
    }

    fn params(&self) -> SpringParams {
        return SpringParams {
            stiffness: self.settings.stiffness(),
            damping: self.settings.damping(),
            mass: self.settings.mass(),
        };
    }

    pub fn is_compact(&self) -> bool {
        return self.screen.get_cols() < self.settings.compact_below_cols();
    }

    pub fn resize(&mut self, screen: Size) {
        self.screen = screen;
        self.pointer = None;

        let base = self.settings.base_size();

        for spring in self.springs.iter_mut() {
            spring.reset(base);
        }

        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// The rows the dock owns, tooltip row included.
    pub fn band(&self) -> Rect {
        let rows = DOCK_BAND_ROWS.min(self.screen.get_rows());

        return Rect::new(
            0,
            (self.screen.get_rows() - rows) as i32,
            Size::new(rows, self.screen.get_cols()),
        );
    }

    pub fn tooltip_row(&self) -> i32 {
        return self.band().y();
    }

    /// The current size of icon `index` in columns.
    pub fn size_of(&self, index: usize) -> f32 {
        if self.is_compact() {
            return self.settings.compact_size();
        }

        return self
            .springs
            .get(index)
            .map(|s| s.value())
            .unwrap_or(self.settings.base_size());
    }

    /// Rows icon `index` is raised by, grows with magnification up to the configured lift.
    pub fn lift_of(&self, index: usize) -> f32 {
        let base = self.settings.base_size();
        let range = self.settings.max_size() - base;

        if self.is_compact() || range <= 0.0 {
            return 0.0;
        }

        let t = ((self.size_of(index) - base) / range).max(0.0).min(1.0);
        return t * self.settings.max_lift();
    }

    fn widths(&self, sizes: &[f32]) -> (Vec<u16>, u16) {
        let widths: Vec<u16> = sizes.iter().map(|s| (s.round() as u16).max(1)).collect();
        let separators = DOCK_ITEMS.iter().filter(|i| i.separator_after).count() as u16;
        let total = widths.iter().sum::<u16>()
            + GAP_COLS * (widths.len() as u16).saturating_sub(1)
            + SEPARATOR_COLS * separators
            + PADDING_COLS * 2;

        return (widths, total);
    }

    fn max_scroll(&self) -> u16 {
        if !self.is_compact() {
            return 0;
        }

        let sizes = vec![self.settings.compact_size(); DOCK_ITEMS.len()];
        let (_, total) = self.widths(&sizes);

        return total.saturating_sub(self.screen.get_cols());
    }

    fn layout_with(&self, sizes: &[f32], lifts: &[f32]) -> DockLayout {
        let (widths, total) = self.widths(sizes);
        let cols = self.screen.get_cols();
        let bar_top = self.screen.get_rows() as i32 - DOCK_BAR_ROWS as i32;

        let start = if total <= cols {
            ((cols - total) / 2) as i32
        } else {
            -(self.scroll as i32)
        };

        let bar = Rect::new(start, bar_top, Size::new(DOCK_BAR_ROWS, total));
        let mut x = start + PADDING_COLS as i32;
        let mut slots = Vec::with_capacity(widths.len());

        for (index, item) in DOCK_ITEMS.iter().enumerate() {
            let width = widths[index];
            let rest_top = bar_top + (DOCK_BAR_ROWS - ICON_ROWS) as i32;
            let lift = (lifts[index].round() as i32).max(0).min(rest_top.max(0));
            let icon_top = rest_top - lift;
            let icon_rows = ICON_ROWS + lift as u16;

            let mut slot = DockSlot {
                index,
                icon: Rect::new(x, icon_top, Size::new(icon_rows, width)),
                hit: Rect::new(x, bar_top, Size::new(DOCK_BAR_ROWS, width)),
                separator: None,
            };

            x += (width + GAP_COLS) as i32;

            if item.separator_after {
                slot.separator = Some(x);
                x += SEPARATOR_COLS as i32;
            }

            slots.push(slot);
        }

        return DockLayout { bar, slots };
    }

    /// Where every icon is drawn right now.
    pub fn layout(&self) -> DockLayout {
        let sizes: Vec<f32> = (0..DOCK_ITEMS.len()).map(|i| self.size_of(i)).collect();
        let lifts: Vec<f32> = (0..DOCK_ITEMS.len()).map(|i| self.lift_of(i)).collect();

        return self.layout_with(&sizes, &lifts);
    }

    /// The layout with every icon at rest. Distances are measured against it so the
    /// magnification does not feed back into itself.
    fn resting_layout(&self) -> DockLayout {
        let size = if self.is_compact() {
            self.settings.compact_size()
        } else {
            self.settings.base_size()
        };

        return self.layout_with(&vec![size; DOCK_ITEMS.len()], &vec![0.0; DOCK_ITEMS.len()]);
    }

    fn retarget(&mut self) {
        let base = self.settings.base_size();

        let pointer_x = match self.pointer {
            Some(p) if !self.is_compact() => p.column() as f32 + 0.5,
            _ => {
                for spring in self.springs.iter_mut() {
                    spring.set_target(base);
                }

                return;
            }
        };

        let resting = self.resting_layout();
        let max = self.settings.max_size();
        let radius = self.settings.influence_radius();

        for (slot, spring) in resting.slots.iter().zip(self.springs.iter_mut()) {
            let centre = slot.icon.x() as f32 + slot.icon.width() as f32 / 2.0;
            spring.set_target(magnify(pointer_x - centre, base, max, radius));
        }
    }

    /// Track a pointer move. Only positions over the bar count, anything else releases the
    /// effect. Returns true if the hovered state changed.
    pub fn pointer_moved(&mut self, point: Position) -> bool {
        let over = self.resting_layout().bar.contains(point) || self.layout().bar.contains(point);
        let next = if over { Some(point) } else { None };

        if next == self.pointer {
            return false;
        }

        self.pointer = next;
        self.retarget();

        return true;
    }

    pub fn pointer_left(&mut self) -> bool {
        if self.pointer.is_none() {
            return false;
        }

        self.pointer = None;
        self.retarget();

        return true;
    }

    /// The item under the tracked pointer, for the tooltip.
    pub fn hovered(&self) -> Option<usize> {
        let point = self.pointer?;
        return self.layout().slot_at(point).map(|s| s.index);
    }

    pub fn item_at(&self, point: Position) -> Option<usize> {
        return self.layout().slot_at(point).map(|s| s.index);
    }

    pub fn contains(&self, point: Position) -> bool {
        return self.band().contains(point);
    }

    pub fn scroll(&self) -> u16 {
        return self.scroll;
    }

    /// Scroll the compact row horizontally. Returns true if it moved.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        let max = self.max_scroll() as i32;
        let next = (self.scroll as i32 + delta).max(0).min(max) as u16;
        let changed = next != self.scroll;
        self.scroll = next;

        return changed;
    }

    /// Advance the springs. Returns true while any icon is still moving.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        let params = self.params();
        let mut moving = false;

        for spring in self.springs.iter_mut() {
            moving |= spring.step(elapsed, &params);
        }

        return moving;
    }

    pub fn is_animating(&self) -> bool {
        return !self.is_compact() && self.springs.iter().any(|s| !s.is_settled());
    }
}

#[cfg(test)]
mod tests {
    use super::{magnify, Dock, ICON_ROWS};
    use crate::catalog::DOCK_ITEMS;
    use crate::config::DockSettings;
    use crate::Config;
    use crate::geometry::{Position, Size};
    use std::time::Duration;

    fn settle(dock: &mut Dock) {
        for _ in 0..200 {
            dock.tick(Duration::from_millis(16));
        }
    }

    #[test]
    fn magnify_is_linear_and_clamped() {
        assert_eq!(magnify(0.0, 5.0, 8.0, 20.0), 8.0);
        assert_eq!(magnify(10.0, 5.0, 8.0, 20.0), 6.5);
        assert_eq!(magnify(-10.0, 5.0, 8.0, 20.0), 6.5);
        assert_eq!(magnify(20.0, 5.0, 8.0, 20.0), 5.0);
        assert_eq!(magnify(200.0, 5.0, 8.0, 20.0), 5.0);
    }

    #[test]
    fn icon_under_pointer_reaches_max_size() {
        let mut dock = Dock::new(DockSettings::default(), Size::new(40, 160));
        let resting = dock.layout();
        let first = resting.slots[0].icon;
        let point = Position::new(first.x() + first.width() / 2, first.y() + 1);

        assert!(dock.pointer_moved(point));
        settle(&mut dock);

        assert_eq!(dock.size_of(0), 8.0);
        assert_eq!(dock.size_of(DOCK_ITEMS.len() - 1), 5.0);
        assert!(dock.lift_of(0) > 0.5);
        assert_eq!(dock.hovered(), Some(0));

        assert!(dock.pointer_left());
        settle(&mut dock);
        assert_eq!(dock.size_of(0), 5.0);
    }

    #[test]
    fn pointer_outside_the_bar_is_ignored() {
        let mut dock = Dock::new(DockSettings::default(), Size::new(40, 160));

        assert!(!dock.pointer_moved(Position::new(80, 10)));
        assert!(!dock.is_animating());
        assert_eq!(dock.hovered(), None);
    }

    #[test]
    fn narrow_screens_disable_magnification_and_scroll() {
        let mut dock = Dock::new(DockSettings::default(), Size::new(24, 40));
        assert!(dock.is_compact());

        let slot = dock.layout().slots[0].icon;
        dock.pointer_moved(Position::new(slot.x(), slot.y()));
        settle(&mut dock);

        assert_eq!(dock.size_of(0), 4.0);
        assert!(!dock.is_animating());

        assert!(dock.scroll_by(5));
        assert_eq!(dock.layout().bar.x(), -5);
        assert!(dock.scroll_by(-50));
        assert_eq!(dock.scroll(), 0);
    }

    #[test]
    fn separators_follow_music_and_photos() {
        let dock = Dock::new(DockSettings::default(), Size::new(40, 160));
        let separated: Vec<usize> = dock
            .layout()
            .slots
            .iter()
            .filter(|s| s.separator.is_some())
            .map(|s| s.index)
            .collect();

        assert_eq!(separated, vec![2, 5]);
    }

    fn hover_first_icon(settings: DockSettings) -> Dock {
        let mut dock = Dock::new(settings, Size::new(40, 160));
        let first = dock.layout().slots[0].icon;

        dock.pointer_moved(Position::new(first.x() + first.width() / 2, first.y() + 1));
        settle(&mut dock);

        return dock;
    }

    #[test]
    fn negative_lift_keeps_icons_on_the_bar() {
        let config = Config::from_toml_string("[dock]\nmax_lift = -2.0").unwrap();
        let dock = hover_first_icon(config.get_dock_ref().clone());
        let layout = dock.layout();

        assert_eq!(dock.size_of(0), 8.0);
        assert_eq!(dock.lift_of(0), 0.0);
        assert_eq!(layout.slots[0].icon.height(), ICON_ROWS as i32);
        assert_eq!(layout.slots[0].icon.bottom(), layout.bar.bottom());
    }

    #[test]
    fn lift_stops_at_the_top_of_the_screen() {
        let config = Config::from_toml_string("[dock]\nmax_lift = 1000.0").unwrap();
        let dock = hover_first_icon(config.get_dock_ref().clone());
        let icon = dock.layout().slots[0].icon;

        assert_eq!(icon.y(), 0);
        assert_eq!(icon.bottom(), dock.layout().bar.bottom());
    }
}
