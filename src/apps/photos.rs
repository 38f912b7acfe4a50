use super::{ContentAction, Palette, ViewContext};
use crate::catalog::PHOTOS;
use crate::display::{text, Painter, Style};
use crate::geometry::Size;
use crate::i18n::TranslationKey;

const COLUMNS: u16 = 3;
const TILE_ROWS: u16 = 6;
const GAP: u16 = 1;

pub struct PhotosView {
    selected: Option<usize>,
}

fn photo_name(path: &str) -> &str {
    return path.trim_start_matches('/');
}

impl PhotosView {
    pub fn new() -> Self {
        return Self { selected: None };
    }

    pub fn selected(&self) -> Option<usize> {
        return self.selected;
    }

    /// Show a single photo, or the grid for `None`. Out of range indices are ignored.
    pub fn select(&mut self, selected: Option<usize>) -> bool {
        if selected.map_or(false, |i| i >= PHOTOS.len()) || selected == self.selected {
            return false;
        }

        self.selected = selected;
        return true;
    }

    pub fn view(&self, painter: &mut Painter, ctx: &ViewContext, palette: &Palette) {
        let t = ctx.translator;
        let width = painter.width();
        let tile_style = Style::new(palette.text, palette.title_bar);

        match self.selected {
            Some(index) => {
                let back = Style::new(ctx.theme.link, palette.background);
                let used = painter.text(1, 0, t.t(TranslationKey::AllPhotos), back);
                painter.hotspot(1, 0, Size::new(1, used), ContentAction::ShowAllPhotos);

                let rows = painter.height().saturating_sub(3).max(TILE_ROWS);
                let cols = width.saturating_sub(4);
                painter.fill(2, 2, Size::new(rows, cols), tile_style);

                let label = text::truncate(photo_name(PHOTOS[index]), cols as usize);
                painter.text(
                    2 + text::center_offset(&label, cols as usize) as u16,
                    2 + rows / 2,
                    &label,
                    tile_style,
                );
            }
            None => {
                let tile_cols = width.saturating_sub(GAP * (COLUMNS + 1)) / COLUMNS;

                for (i, photo) in PHOTOS.iter().enumerate() {
                    let col = GAP + (i as u16 % COLUMNS) * (tile_cols + GAP);
                    let row = GAP + (i as u16 / COLUMNS) * (TILE_ROWS + GAP);
                    let size = Size::new(TILE_ROWS, tile_cols);

                    painter.fill(col, row, size, tile_style);

                    let label = text::truncate(photo_name(photo), tile_cols as usize);
                    painter.text(
                        col + text::center_offset(&label, tile_cols as usize) as u16,
                        row + TILE_ROWS / 2,
                        &label,
                        tile_style,
                    );
                    painter.hotspot(col, row, size, ContentAction::SelectPhoto(i));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PhotosView;
    use crate::apps::{ContentAction, PanelBody, ViewContext};
    use crate::config::{Profile, Theme};
    use crate::display::Painter;
    use crate::geometry::{Position, Size};
    use crate::i18n::{Locale, Translator};
    use std::time::Instant;

    fn measure(view: PhotosView) -> Painter<'static> {
        let theme = Theme::default();
        let profile = Profile::default();
        let ctx = ViewContext {
            translator: Translator::new(Locale::En),
            theme: &theme,
            profile: &profile,
            now: Instant::now(),
        };
        let mut painter = Painter::measure(Size::new(20, 64), 0);
        PanelBody::Photos(view).view(&mut painter, &ctx);

        return painter;
    }

    #[test]
    fn grid_has_three_columns() {
        let painter = measure(PhotosView::new());

        assert_eq!(painter.hotspots_ref().len(), 5);
        // Tiles are 20 columns wide with a one column gap.
        assert_eq!(
            painter.action_at(Position::new(22, 1)),
            Some(&ContentAction::SelectPhoto(1))
        );
        assert_eq!(
            painter.action_at(Position::new(1, 8)),
            Some(&ContentAction::SelectPhoto(3))
        );
    }

    #[test]
    fn selected_photo_has_a_back_control() {
        let mut view = PhotosView::new();
        assert!(view.select(Some(2)));
        assert!(!view.select(Some(9)));
        assert_eq!(view.selected(), Some(2));

        let painter = measure(view);
        assert_eq!(
            painter.action_at(Position::new(2, 0)),
            Some(&ContentAction::ShowAllPhotos)
        );
    }
}
