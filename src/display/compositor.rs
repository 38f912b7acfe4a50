use super::canvas::{Canvas, Style};
use super::painter::Painter;
use super::text;
use crate::apps::Chrome;
use crate::catalog::DOCK_ITEMS;
use crate::desktop::{CaptureTarget, Desktop, PanelInstance, TitleControl};
use crate::geometry::{Rect, Size};
use crate::Color;
use std::time::Instant;

const LIGHT: &str = "●";

/// Black or white, whichever reads better on `background`.
fn contrast(background: Color) -> Color {
    let luma = 0.299 * background.red() as f32
        + 0.587 * background.green() as f32
        + 0.114 * background.blue() as f32;

    return if luma > 150.0 {
        Color::BLACK
    } else {
        Color::WHITE
    };
}

/// Draw the desktop into `canvas`. The canvas is expected to match the desktop's screen size.
///
/// Layers from the bottom: wallpaper, icons, panels by depth, dock, menu bar.
pub fn compose(desktop: &Desktop, canvas: &mut Canvas, now: Instant) {
    let theme = desktop.theme_ref();
    let clip = canvas.bounds();

    canvas.fill(
        &clip,
        Style::new(theme.icon_label, theme.desktop_background),
        &clip,
    );

    compose_icons(desktop, canvas);

    for id in desktop.paint_order() {
        if let Some(panel) = desktop.panel(id) {
            if panel.is_visible() {
                compose_panel(desktop, panel, canvas, now);
            }
        }
    }

    compose_dock(desktop, canvas);
    compose_menu_bar(desktop, canvas);
}

fn compose_icons(desktop: &Desktop, canvas: &mut Canvas) {
    let theme = desktop.theme_ref();
    let area = desktop.desktop_area();
    let clip = area.intersect(&canvas.bounds()).unwrap_or_default();
    let held = match desktop.capture_ref().current().map(|c| c.target()) {
        Some(CaptureTarget::Icon(index)) => Some(index),
        _ => None,
    };

    for (index, icon) in desktop.icons_ref().icons_ref().iter().enumerate() {
        let rect = icon.rect(area);
        let project = icon.project();
        let width = rect.width() as usize;

        let folder = "▄▆▆▄";
        canvas.put_str(
            rect.x() + text::center_offset(folder, width) as i32,
            rect.y(),
            folder,
            Style::new(
                project.preview_color.mix(Color::WHITE, 0.35),
                theme.desktop_background,
            ),
            &clip,
        );

        let label = text::truncate(project.name, width);
        let style = if held == Some(index) {
            Style::new(theme.icon_label, theme.icon_highlight)
        } else {
            Style::new(theme.icon_label, theme.desktop_background)
        };

        canvas.put_str(
            rect.x() + text::center_offset(&label, width) as i32,
            rect.y() + 1,
            &label,
            style,
            &clip,
        );
    }
}

fn compose_panel(desktop: &Desktop, panel: &PanelInstance, canvas: &mut Canvas, now: Instant) {
    let theme = desktop.theme_ref();
    let ctx = desktop.view_context(now);
    let area = desktop.desktop_area();
    let clip = canvas.bounds();
    let body = panel.body_ref();
    let palette = body.palette(theme);
    let frame = panel.frame(area);
    let title_rect = panel.title_rect(area);
    let focused = desktop.focused() == Some(panel.id());

    canvas.fill(&frame, Style::new(palette.text, palette.background), &clip);
    canvas.fill(
        &title_rect,
        Style::new(palette.title_text, palette.title_bar),
        &clip,
    );

    let reserved = match panel.chrome() {
        Chrome::Window => {
            for control in TitleControl::ALL.iter() {
                let color = match control {
                    TitleControl::Close => theme.close_light,
                    TitleControl::Minimize => theme.minimize_light,
                    TitleControl::Maximize => theme.maximize_light,
                };
                let color = if focused {
                    color
                } else {
                    color.mix(palette.title_bar, 0.6)
                };

                canvas.put_str(
                    frame.x() + control.glyph_offset(),
                    frame.y(),
                    LIGHT,
                    Style::new(color, palette.title_bar),
                    &clip,
                );
            }

            // Room for the lights on both sides keeps the title centred.
            16
        }
        Chrome::Dialog => 2,
    };

    let title = text::truncate(
        &body.title(&ctx),
        (frame.width() as usize).saturating_sub(reserved),
    );
    let mut title_style = Style::new(palette.title_text, palette.title_bar);

    if focused {
        title_style = title_style.bold();
    }

    canvas.put_str(
        frame.x() + text::center_offset(&title, frame.width() as usize) as i32,
        frame.y(),
        &title,
        title_style,
        &clip,
    );

    let content = panel.content_rect(area);
    let mut painter = Painter::new(canvas, content, panel.scroll());
    body.view(&mut painter, &ctx);
}

fn compose_dock(desktop: &Desktop, canvas: &mut Canvas) {
    let theme = desktop.theme_ref();
    let dock = desktop.dock_ref();
    let layout = dock.layout();
    let clip = canvas.bounds();
    let bar_style = Style::new(theme.tooltip_text, theme.dock_background);

    canvas.fill(&layout.bar, bar_style, &clip);

    for slot in layout.slots.iter() {
        let item = &DOCK_ITEMS[slot.index];
        let icon_style = Style::new(contrast(item.accent), item.accent);

        canvas.fill(&slot.icon, icon_style, &clip);

        let width = slot.icon.width() as usize;
        let glyph = text::truncate(item.glyph, width);
        canvas.put_str(
            slot.icon.x() + text::center_offset(&glyph, width) as i32,
            slot.icon.y() + (slot.icon.height() - 1) / 2,
            &glyph,
            icon_style.bold(),
            &clip,
        );

        if let Some(col) = slot.separator {
            let line = Rect::new(
                col,
                layout.bar.y() + 1,
                Size::new((layout.bar.height() - 1) as u16, 1),
            );

            for row in line.y()..line.bottom() {
                canvas.put_str(
                    col,
                    row,
                    "│",
                    Style::new(theme.dock_separator, theme.dock_background),
                    &clip,
                );
            }
        }
    }

    if let Some(index) = dock.hovered() {
        if let Some(slot) = layout.slots.iter().find(|s| s.index == index) {
            let label = format!(
                " {} ",
                desktop.translator().t(DOCK_ITEMS[index].label)
            );
            let width = text::width(&label) as i32;
            let centre = slot.icon.x() + slot.icon.width() / 2;
            let col = (centre - width / 2)
                .max(0)
                .min((canvas.size().get_cols() as i32 - width).max(0));

            canvas.put_str(
                col,
                dock.tooltip_row(),
                &label,
                Style::new(theme.tooltip_text, theme.tooltip_background),
                &clip,
            );
        }
    }
}

fn compose_menu_bar(desktop: &Desktop, canvas: &mut Canvas) {
    let theme = desktop.theme_ref();
    let clip = canvas.bounds();
    let width = canvas.size().get_cols();
    let style = Style::new(theme.menu_bar_text, theme.menu_bar_background);

    canvas.fill(&Rect::new(0, 0, Size::new(1, width)), style, &clip);

    for segment in desktop.menu_bar_ref().segments(width) {
        let style = if segment.bold { style.bold() } else { style };
        canvas.put_str(segment.col as i32, 0, &segment.text, style, &clip);
    }
}

#[cfg(test)]
mod tests {
    use super::{compose, contrast};
    use crate::apps::{AppKind, PanelId};
    use crate::display::{Canvas, Style};
    use crate::geometry::Size;
    use crate::i18n::Locale;
    use crate::{Color, Config, Desktop};
    use chrono::NaiveDate;
    use std::time::Instant;

    fn render(desktop: &Desktop) -> Canvas {
        let mut canvas = Canvas::new(
            desktop.screen(),
            Style::new(Color::WHITE, Color::BLACK),
        );
        compose(desktop, &mut canvas, Instant::now());

        return canvas;
    }

    fn text_rows(canvas: &Canvas) -> Vec<String> {
        return (0..canvas.size().get_rows())
            .map(|r| canvas.row_text(r))
            .collect();
    }

    #[test]
    fn contrast_picks_readable_text() {
        assert_eq!(contrast(Color::from_hex(0xf7d774)), Color::BLACK);
        assert_eq!(contrast(Color::from_hex(0x2f2f2f)), Color::WHITE);
    }

    #[test]
    fn empty_desktop_shows_menu_icons_and_dock() {
        let mut desktop = Desktop::new(&Config::default(), Locale::En, Size::new(40, 140));
        let wall = NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap();
        desktop.tick(Instant::now(), &wall);

        let rows = text_rows(&render(&desktop));

        assert!(rows[0].contains("Safari"));
        assert!(rows[0].contains("Fri, Oct 16 02:05 PM"));
        assert!(rows.iter().any(|r| r.contains("ROTA 1")));
        assert!(rows[38].contains("</>"));
    }

    #[test]
    fn topmost_panel_is_drawn_last() {
        let mut desktop = Desktop::new(&Config::default(), Locale::En, Size::new(40, 140));
        let now = Instant::now();

        desktop.open(PanelId::App(AppKind::Photos), now);
        desktop.open(PanelId::App(AppKind::Trash), now);

        let rows = text_rows(&render(&desktop));
        assert!(rows.iter().any(|r| r.contains("OK, I didn't see it")));

        desktop.focus(PanelId::App(AppKind::Photos));
        let rows = text_rows(&render(&desktop));
        assert!(!rows.iter().any(|r| r.contains("OK, I didn't see it")));
    }
}
