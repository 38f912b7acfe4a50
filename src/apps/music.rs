use super::{Palette, ViewContext};
use crate::catalog::{
    PlaylistName, ALBUM_SWATCHES, NOW_PLAYING_ALBUM, NOW_PLAYING_ARTIST, NOW_PLAYING_TITLE,
    PLAYLISTS,
};
use crate::display::{text, Painter, Style};
use crate::geometry::Size;
use crate::i18n::{TranslationKey, Translator};
use crate::Color;

/// Minimum content width before the now playing pane is shown.
pub const NOW_PLAYING_MIN_COLS: u16 = 80;
const NOW_PLAYING_COLS: u16 = 26;
const SWATCH_COLS: u16 = 4;
const ELAPSED: &str = "0:22";
const DURATION: &str = "1:53";

/// A static player mockup. Nothing in it reacts to input.
pub struct MusicView {}

fn playlist_name(translator: Translator, name: &PlaylistName) -> &'static str {
    return match name {
        PlaylistName::Fixed(value) => *value,
        PlaylistName::Localized(key) => translator.t(*key),
    };
}

/// Paint a left to right gradient one column at a time.
fn gradient(painter: &mut Painter, col: u16, row: u16, size: Size, from: Color, to: Color) {
    let cols = size.get_cols();

    for i in 0..cols {
        let amount = if cols > 1 {
            i as f32 / (cols - 1) as f32
        } else {
            0.0
        };
        let color = from.mix(to, amount);

        painter.fill(
            col + i,
            row,
            Size::new(size.get_rows(), 1),
            Style::new(color, color),
        );
    }
}

impl MusicView {
    pub fn new() -> Self {
        return Self {};
    }

    pub fn view(&self, painter: &mut Painter, ctx: &ViewContext, palette: &Palette) {
        let t = ctx.translator;
        let theme = ctx.theme;
        let width = painter.width();
        let wide = width >= NOW_PLAYING_MIN_COLS;
        let main_cols = if wide {
            width - NOW_PLAYING_COLS - 1
        } else {
            width
        };
        let body = Style::new(palette.text, palette.background);
        let muted = Style::new(theme.muted_text.mix(palette.text, 0.3), palette.background);
        let heading = body.bold();

        // Filter chips, the first one selected.
        let mut col = 2;
        let chips = [
            TranslationKey::SpotifyAll,
            TranslationKey::SpotifyMusic,
            TranslationKey::SpotifyPodcasts,
        ];

        for (i, key) in chips.iter().enumerate() {
            let style = if i == 0 {
                Style::new(palette.background, palette.text)
            } else {
                Style::new(palette.text, palette.title_bar)
            };

            col += painter.text(col, 1, &format!(" {} ", t.t(*key)), style) + 1;
        }

        // Two column playlist grid.
        let cell_cols = main_cols.saturating_sub(5) / 2;
        let cell_style = Style::new(palette.text, palette.title_bar).bold();

        for (i, playlist) in PLAYLISTS.iter().enumerate() {
            let col = 2 + (i as u16 % 2) * (cell_cols + 1);
            let row = 3 + (i as u16 / 2) * 3;

            painter.fill(col, row, Size::new(2, cell_cols), cell_style);
            gradient(
                painter,
                col,
                row,
                Size::new(2, SWATCH_COLS),
                playlist.from,
                playlist.to,
            );

            let name = text::truncate(
                playlist_name(t, &playlist.name),
                cell_cols.saturating_sub(SWATCH_COLS + 2) as usize,
            );
            painter.text(col + SWATCH_COLS + 1, row, &name, cell_style);
        }

        let mut row = 3 + (PLAYLISTS.len() as u16 + 1) / 2 * 3 + 1;

        painter.text(2, row, t.t(TranslationKey::SpotifyMadeFor), heading);

        let show_all = t.t(TranslationKey::SpotifyShowAll);
        painter.text(
            main_cols.saturating_sub(text::width(show_all) as u16 + 2),
            row,
            show_all,
            muted,
        );
        row += 2;

        let tile_cols = 8;
        let tiles = (main_cols.saturating_sub(2) / (tile_cols + 1)).min(ALBUM_SWATCHES.len() as u16);

        for i in 0..tiles {
            let (from, to) = ALBUM_SWATCHES[i as usize];
            gradient(
                painter,
                2 + i * (tile_cols + 1),
                row,
                Size::new(4, tile_cols),
                from,
                to,
            );
        }

        row += 5;

        if wide {
            self.now_playing(painter, ctx, palette, width - NOW_PLAYING_COLS);
        }

        let bar_row = row.max(painter.height().saturating_sub(3));
        self.player_bar(painter, palette, theme.music_accent, bar_row);
    }

    fn now_playing(&self, painter: &mut Painter, ctx: &ViewContext, palette: &Palette, col: u16) {
        let t = ctx.translator;
        let pane = Style::new(palette.text, palette.title_bar);
        let inner = (NOW_PLAYING_COLS - 2) as usize;
        let (from, to) = ALBUM_SWATCHES[0];

        painter.fill(col, 1, Size::new(20, NOW_PLAYING_COLS), pane);
        painter.text(col + 1, 2, &text::truncate(NOW_PLAYING_ALBUM, inner), pane.bold());
        gradient(painter, col + 1, 4, Size::new(8, NOW_PLAYING_COLS - 2), from, to);
        painter.text(col + 1, 13, &text::truncate(NOW_PLAYING_TITLE, inner), pane.bold());
        painter.text(col + 1, 14, &text::truncate(NOW_PLAYING_ARTIST, inner), pane);
        painter.text(
            col + 1,
            17,
            &text::truncate(t.t(TranslationKey::SpotifyAboutArtist), inner),
            pane.bold(),
        );
    }

    fn player_bar(&self, painter: &mut Painter, palette: &Palette, accent: Color, row: u16) {
        let width = painter.width();
        let bar = Style::new(palette.text, palette.title_bar);

        painter.fill(0, row, Size::new(3, width), bar);
        painter.text(
            2,
            row + 1,
            &text::truncate(NOW_PLAYING_TITLE, (width / 4).saturating_sub(4) as usize),
            bar.bold(),
        );

        let controls = "⇄   ⏮   ▶   ⏭   ↻";
        painter.centered(row, controls, bar);

        let track_cols = (width / 3).max(10);
        let played = track_cols / 5;
        let col = (width.saturating_sub(track_cols)) / 2;

        painter.text(col.saturating_sub(5), row + 1, ELAPSED, bar);
        painter.fill(col, row + 1, Size::new(1, played), Style::new(accent, accent));
        painter.fill(
            col + played,
            row + 1,
            Size::new(1, track_cols - played),
            Style::new(palette.text, palette.text.mix(palette.title_bar, 0.6)),
        );
        painter.text(col + track_cols + 1, row + 1, DURATION, bar);
    }
}
