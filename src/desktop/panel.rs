use crate::apps::{Chrome, PanelBody, PanelId};
use crate::config::WindowSettings;
use crate::geometry::{Direction, Position, Rect, Size};
use std::time::{Duration, Instant};

/// The smallest size a panel is shrunk to on tiny terminals.
pub const MIN_PANEL_SIZE: Size = Size::new(2, 8);

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Lifecycle {
    Open,
    /// Hidden until `restore_at`, then open again.
    Minimized { restore_at: Instant },
}

/// The three buttons in the title row of a framed window.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TitleControl {
    Close,
    Minimize,
    Maximize,
}

impl TitleControl {
    pub const ALL: [TitleControl; 3] = [
        TitleControl::Close,
        TitleControl::Minimize,
        TitleControl::Maximize,
    ];

    /// Column of the glyph relative to the panel's left edge.
    pub fn glyph_offset(&self) -> i32 {
        return match self {
            TitleControl::Close => 2,
            TitleControl::Minimize => 4,
            TitleControl::Maximize => 6,
        };
    }

    /// Clickable columns relative to the panel's left edge, two cells each.
    fn hit_offset(&self) -> i32 {
        return self.glyph_offset() - 1;
    }
}

/// One open panel: where it is, how big it is and whether it is showing.
///
/// A panel only ever changes its own geometry. Depth lives with the desktop.
pub struct PanelInstance {
    id: PanelId,
    body: PanelBody,
    position: Position,
    size: Size,
    lifecycle: Lifecycle,
    maximized: bool,
    scroll: u16,
}

/// Shrink `preferred` to fit in `area` with padding around it.
pub fn fit_size(preferred: Size, area: Rect, settings: &WindowSettings) -> Size {
    let available = area.size().saturating_sub(
        settings.padding_rows().saturating_mul(2),
        settings.padding_cols().saturating_mul(2),
    );
    let size = preferred.min(available);

    return Size::new(
        size.get_rows().max(MIN_PANEL_SIZE.get_rows()),
        size.get_cols().max(MIN_PANEL_SIZE.get_cols()),
    );
}

fn clamp(value: i32, low: i32, high: i32) -> i32 {
    return value.max(low).min(high.max(low));
}

/// Keep at least `margin` columns of a `size` panel horizontally inside `area` and its title
/// row between the top and bottom of `area`.
pub fn clamp_position(position: Position, size: Size, area: Rect, margin: u16) -> Position {
    let width = size.get_cols() as i32;
    let margin = (margin as i32).min(width);

    let x = clamp(
        position.column(),
        area.x() + margin - width,
        area.right() - margin,
    );
    let y = clamp(position.row(), area.y(), area.bottom() - 1);

    return Position::new(x, y);
}

impl PanelInstance {
    /// Open `body` centred in `area`, shifted by `jitter` and clamped.
    pub fn open(
        id: PanelId,
        body: PanelBody,
        area: Rect,
        settings: &WindowSettings,
        jitter: Position,
    ) -> Self {
        let size = fit_size(body.preferred_size(), area, settings);
        let centred = Position::new(
            area.x() + (area.width() - size.get_cols() as i32) / 2,
            area.y() + (area.height() - size.get_rows() as i32) / 2,
        );
        let position = clamp_position(centred + jitter, size, area, settings.drag_margin());

        return Self {
            id,
            body,
            position,
            size,
            lifecycle: Lifecycle::Open,
            maximized: false,
            scroll: 0,
        };
    }

    pub fn id(&self) -> PanelId {
        return self.id;
    }

    pub fn body_ref(&self) -> &PanelBody {
        return &self.body;
    }

    pub fn mut_body_ref(&mut self) -> &mut PanelBody {
        return &mut self.body;
    }

    pub fn position(&self) -> Position {
        return self.position;
    }

    pub fn size(&self) -> Size {
        return self.size;
    }

    pub fn lifecycle(&self) -> Lifecycle {
        return self.lifecycle;
    }

    pub fn is_maximized(&self) -> bool {
        return self.maximized;
    }

    pub fn is_visible(&self) -> bool {
        return self.lifecycle == Lifecycle::Open;
    }

    pub fn chrome(&self) -> Chrome {
        return self.body.chrome();
    }

    /// The rectangle the panel occupies. Maximized panels fill `area`.
    pub fn frame(&self, area: Rect) -> Rect {
        if self.maximized {
            return area;
        }

        return Rect::at(self.position, self.size);
    }

    pub fn title_rect(&self, area: Rect) -> Rect {
        let frame = self.frame(area);
        return Rect::new(frame.x(), frame.y(), Size::new(1, frame.size().get_cols()));
    }

    /// Everything below the title row, one column in from each side.
    pub fn content_rect(&self, area: Rect) -> Rect {
        let frame = self.frame(area);

        return Rect::new(
            frame.x() + 1,
            frame.y() + 1,
            frame.size().saturating_sub(1, 2),
        );
    }

    pub fn control_rect(&self, area: Rect, control: TitleControl) -> Rect {
        let frame = self.frame(area);
        return Rect::new(frame.x() + control.hit_offset(), frame.y(), Size::new(1, 2));
    }

    /// The title button under `point`, if this panel has any.
    pub fn control_at(&self, area: Rect, point: Position) -> Option<TitleControl> {
        if self.chrome() != Chrome::Window {
            return None;
        }

        return TitleControl::ALL
            .iter()
            .copied()
            .find(|c| self.control_rect(area, *c).contains(point));
    }

    pub fn minimize(&mut self, now: Instant, delay: Duration) {
        self.lifecycle = Lifecycle::Minimized {
            restore_at: now + delay,
        };
    }

    /// Reopen a minimized panel once its delay has passed. Returns true if it was restored.
    pub fn restore_if_due(&mut self, now: Instant) -> bool {
        return match self.lifecycle {
            Lifecycle::Minimized { restore_at } if now >= restore_at => {
                self.lifecycle = Lifecycle::Open;
                true
            }
            _ => false,
        };
    }

    pub fn toggle_maximize(&mut self) {
        self.maximized = !self.maximized;
        self.scroll = 0;
    }

    /// Move the panel so its top left corner is at `position`, clamped. Maximized panels do
    /// not move. Returns true if the position changed.
    pub fn move_to(&mut self, position: Position, area: Rect, margin: u16) -> bool {
        if self.maximized {
            return false;
        }

        let clamped = clamp_position(position, self.size, area, margin);
        let changed = clamped != self.position;
        self.position = clamped;

        return changed;
    }

    pub fn nudge(&mut self, direction: Direction, area: Rect, margin: u16) -> bool {
        return self.move_to(self.position + direction.delta(), area, margin);
    }

    /// Refit the size to a new desktop area and clamp the position into it.
    pub fn resize(&mut self, area: Rect, settings: &WindowSettings) {
        self.size = fit_size(self.body.preferred_size(), area, settings);
        self.position = clamp_position(self.position, self.size, area, settings.drag_margin());
    }

    pub fn scroll(&self) -> u16 {
        return self.scroll;
    }

    /// Scroll by `delta` rows, never past `max`. Returns true if the offset changed.
    pub fn scroll_by(&mut self, delta: i32, max: u16) -> bool {
        let next = clamp(self.scroll as i32 + delta, 0, max as i32) as u16;
        let changed = next != self.scroll;
        self.scroll = next;

        return changed;
    }

    pub fn clamp_scroll(&mut self, max: u16) {
        self.scroll = self.scroll.min(max);
    }
}
