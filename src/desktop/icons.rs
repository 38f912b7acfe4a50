use crate::catalog::{Project, PROJECTS};
use crate::geometry::{Position, Rect, Size};

pub const ICON_SIZE: Size = Size::new(2, 12);

/// A launch icon for one project. Its place is the project's percentage anchor plus however
/// far it has been dragged.
#[derive(Clone, Debug)]
pub struct DesktopIcon {
    project: &'static Project,
    offset: Position,
}

impl DesktopIcon {
    pub fn project(&self) -> &'static Project {
        return self.project;
    }

    fn anchor(&self, area: Rect) -> Position {
        let (px, py) = self.project.anchor;
        let free_cols = (area.width() - ICON_SIZE.get_cols() as i32).max(0);
        let free_rows = (area.height() - ICON_SIZE.get_rows() as i32).max(0);

        return Position::new(
            area.x() + free_cols * px.min(100) as i32 / 100,
            area.y() + free_rows * py.min(100) as i32 / 100,
        );
    }

    /// Icons stay completely inside the desktop area.
    fn clamp(position: Position, area: Rect) -> Position {
        let max_x = (area.right() - ICON_SIZE.get_cols() as i32).max(area.x());
        let max_y = (area.bottom() - ICON_SIZE.get_rows() as i32).max(area.y());

        return Position::new(
            position.column().max(area.x()).min(max_x),
            position.row().max(area.y()).min(max_y),
        );
    }

    pub fn position(&self, area: Rect) -> Position {
        return Self::clamp(self.anchor(area) + self.offset, area);
    }

    pub fn rect(&self, area: Rect) -> Rect {
        return Rect::at(self.position(area), ICON_SIZE);
    }

    /// Put the icon at `position`, clamped. Returns true if it moved.
    pub fn move_to(&mut self, position: Position, area: Rect) -> bool {
        let before = self.position(area);
        let clamped = Self::clamp(position, area);
        self.offset = clamped - self.anchor(area);

        return clamped != before;
    }
}

/// Every project icon, in catalog order. Later icons are drawn above earlier ones.
#[derive(Clone, Debug)]
pub struct IconLayer {
    icons: Vec<DesktopIcon>,
}

impl IconLayer {
    pub fn new() -> Self {
        return Self {
            icons: PROJECTS
                .iter()
                .map(|project| DesktopIcon {
                    project,
                    offset: Position::new(0, 0),
                })
                .collect(),
        };
    }

    pub fn icons_ref(&self) -> &Vec<DesktopIcon> {
        return &self.icons;
    }

    pub fn get(&self, index: usize) -> Option<&DesktopIcon> {
        return self.icons.get(index);
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut DesktopIcon> {
        return self.icons.get_mut(index);
    }

    /// The topmost icon under `point`.
    pub fn icon_at(&self, point: Position, area: Rect) -> Option<usize> {
        return self
            .icons
            .iter()
            .enumerate()
            .rev()
            .find(|(_, icon)| icon.rect(area).contains(point))
            .map(|(index, _)| index);
    }
}

impl Default for IconLayer {
    fn default() -> Self {
        return Self::new();
    }
}
