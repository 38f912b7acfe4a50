use super::{Palette, ViewContext};
use crate::display::{Painter, Style};
use std::time::{Duration, Instant};

const TEXT: &str = "hello world";
const TYPING_DELAY: Duration = Duration::from_millis(120);
const CURSOR_BLINK: Duration = Duration::from_millis(530);

/// Types out a greeting and blinks a cursor. Both are derived from the time since opening so
/// the view itself never changes.
pub struct HelloView {
    opened_at: Instant,
}

impl HelloView {
    pub const TITLE: &'static str = "hello_world";

    pub fn new(opened_at: Instant) -> Self {
        return Self { opened_at };
    }

    /// The typed prefix at `now`.
    pub fn typed(&self, now: Instant) -> &'static str {
        let elapsed = now.saturating_duration_since(self.opened_at);
        let count = (elapsed.as_millis() / TYPING_DELAY.as_millis()) as usize;

        return match TEXT.char_indices().nth(count) {
            Some((end, _)) => &TEXT[..end],
            None => TEXT,
        };
    }

    pub fn cursor_visible(&self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.opened_at);
        return (elapsed.as_millis() / CURSOR_BLINK.as_millis()) % 2 == 0;
    }

    pub fn view(&self, painter: &mut Painter, ctx: &ViewContext, palette: &Palette) {
        let body = Style::new(palette.text, palette.background);
        let typed = self.typed(ctx.now);
        let col = 3 + painter.text(3, 2, "> ", Style::new(ctx.theme.music_accent, palette.background));
        let used = painter.text(col, 2, typed, body);

        if self.cursor_visible(ctx.now) {
            painter.text(col + used, 2, "▌", body);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HelloView;
    use std::time::{Duration, Instant};

    #[test]
    fn types_one_character_per_step() {
        let start = Instant::now();
        let view = HelloView::new(start);

        assert_eq!(view.typed(start), "");
        assert_eq!(view.typed(start + Duration::from_millis(119)), "");
        assert_eq!(view.typed(start + Duration::from_millis(120)), "h");
        assert_eq!(view.typed(start + Duration::from_millis(600)), "hello");
        assert_eq!(view.typed(start + Duration::from_secs(10)), "hello world");
    }

    #[test]
    fn cursor_blinks() {
        let start = Instant::now();
        let view = HelloView::new(start);

        assert!(view.cursor_visible(start));
        assert!(!view.cursor_visible(start + Duration::from_millis(530)));
        assert!(view.cursor_visible(start + Duration::from_millis(1060)));
    }
}
