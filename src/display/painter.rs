use super::canvas::{Canvas, Style};
use super::text;
use crate::apps::{ContentAction, Hotspot};
use crate::geometry::{Position, Rect, Size};

/// Draws panel content in content relative coordinates.
///
/// Row `r` of the content lands at `area.y + r - scroll`, anything outside of `area` is
/// dropped. A painter without a canvas only records hotspots and the content extent, which
/// is how hit testing and scroll limits are computed without drawing.
pub struct Painter<'a> {
    canvas: Option<&'a mut Canvas>,
    area: Rect,
    clip: Rect,
    scroll: u16,
    hotspots: Vec<Hotspot>,
    extent: u16,
}

impl<'a> Painter<'a> {
    pub fn new(canvas: &'a mut Canvas, area: Rect, scroll: u16) -> Self {
        let clip = area
            .intersect(&canvas.bounds())
            .unwrap_or(Rect::new(area.x(), area.y(), Size::default()));

        return Self {
            canvas: Some(canvas),
            area,
            clip,
            scroll,
            hotspots: Vec::new(),
            extent: 0,
        };
    }

    pub fn measure(size: Size, scroll: u16) -> Painter<'static> {
        let area = Rect::new(0, 0, size);

        return Painter {
            canvas: None,
            area,
            clip: area,
            scroll,
            hotspots: Vec::new(),
            extent: 0,
        };
    }

    pub fn width(&self) -> u16 {
        return self.area.size().get_cols();
    }

    pub fn height(&self) -> u16 {
        return self.area.size().get_rows();
    }

    pub fn scroll(&self) -> u16 {
        return self.scroll;
    }

    fn absolute(&self, col: u16, row: u16) -> (i32, i32) {
        return (
            self.area.x() + col as i32,
            self.area.y() + row as i32 - self.scroll as i32,
        );
    }

    fn grow(&mut self, bottom: u16) {
        self.extent = self.extent.max(bottom);
    }

    /// Write `text` clipped to the content area. Returns the columns it occupies.
    pub fn text(&mut self, col: u16, row: u16, value: &str, style: Style) -> u16 {
        self.grow(row + 1);

        let (x, y) = self.absolute(col, row);
        let clip = self.clip;

        if let Some(canvas) = self.canvas.as_mut() {
            canvas.put_str(x, y, value, style, &clip);
        }

        return text::width(value) as u16;
    }

    /// Like [text](Painter::text) but centred on the whole content width.
    pub fn centered(&mut self, row: u16, value: &str, style: Style) -> u16 {
        let col = text::center_offset(value, self.width() as usize) as u16;
        self.text(col, row, value, style);

        return col;
    }

    pub fn fill(&mut self, col: u16, row: u16, size: Size, style: Style) {
        if size.is_empty() {
            return;
        }

        self.grow(row + size.get_rows());

        let (x, y) = self.absolute(col, row);
        let clip = self.clip;

        if let Some(canvas) = self.canvas.as_mut() {
            canvas.fill(&Rect::new(x, y, size), style, &clip);
        }
    }

    pub fn hotspot(&mut self, col: u16, row: u16, size: Size, action: ContentAction) {
        self.grow(row + size.get_rows());
        self.hotspots.push(Hotspot {
            rect: Rect::new(col as i32, row as i32, size),
            action,
        });
    }

    /// Rows written so far.
    pub fn extent(&self) -> u16 {
        return self.extent;
    }

    pub fn hotspots_ref(&self) -> &Vec<Hotspot> {
        return &self.hotspots;
    }

    /// The action under a content relative point, later hotspots win.
    pub fn action_at(&self, point: Position) -> Option<&ContentAction> {
        return self
            .hotspots
            .iter()
            .rev()
            .find(|h| h.rect.contains(point))
            .map(|h| &h.action);
    }
}

#[cfg(test)]
mod tests {
    use super::Painter;
    use crate::apps::ContentAction;
    use crate::display::canvas::{Canvas, Style};
    use crate::geometry::{Position, Rect, Size};
    use crate::Color;

    fn style() -> Style {
        return Style::new(Color::BLACK, Color::WHITE);
    }

    #[test]
    fn scrolled_rows_shift_up_and_clip() {
        let mut canvas = Canvas::new(Size::new(4, 10), style());
        let area = Rect::new(1, 1, Size::new(2, 6));

        {
            let mut painter = Painter::new(&mut canvas, area, 1);
            painter.text(0, 0, "hidden", style());
            painter.text(0, 1, "first", style());
            painter.text(0, 2, "second", style());
            painter.text(0, 3, "below", style());

            assert_eq!(painter.extent(), 4);
        }

        assert_eq!(canvas.row_text(0), "          ");
        assert_eq!(canvas.row_text(1), " first    ");
        assert_eq!(canvas.row_text(2), " second   ");
        assert_eq!(canvas.row_text(3), "          ");
    }

    #[test]
    fn measuring_records_hotspots() {
        let mut painter = Painter::measure(Size::new(5, 20), 0);
        painter.hotspot(2, 3, Size::new(1, 8), ContentAction::Dismiss);

        assert_eq!(
            painter.action_at(Position::new(5, 3)),
            Some(&ContentAction::Dismiss)
        );
        assert_eq!(painter.action_at(Position::new(5, 4)), None);
        assert_eq!(painter.extent(), 4);
    }
}
