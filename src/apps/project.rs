use super::{ContentAction, Palette, ViewContext};
use crate::catalog::{Project, ProjectContent};
use crate::display::{text, Painter, Style};
use crate::geometry::Size;
use crate::i18n::TranslationKey;

const MARGIN: u16 = 2;
const IMAGE_ROWS: u16 = 5;

/// The details window opened from a desktop icon.
pub struct ProjectView {
    project: &'static Project,
}

/// The file name of an asset path, which is all a placeholder shows.
fn asset_name(path: &str) -> &str {
    return path.rsplit('/').next().unwrap_or(path);
}

impl ProjectView {
    pub fn new(project: &'static Project) -> Self {
        return Self { project };
    }

    pub fn project(&self) -> &'static Project {
        return self.project;
    }

    pub fn view(&self, painter: &mut Painter, ctx: &ViewContext, palette: &Palette) {
        let t = ctx.translator;
        let theme = ctx.theme;
        let project = self.project;
        let body = Style::new(palette.text, palette.background);
        let heading = Style::new(theme.heading_text, palette.background).bold();
        let muted = Style::new(theme.muted_text, palette.background);
        let inner = painter.width().saturating_sub(MARGIN * 2) as usize;

        let mut row = 1;

        painter.fill(
            MARGIN,
            row,
            Size::new(2, 4),
            Style::new(palette.text, project.preview_color),
        );
        painter.text(MARGIN + 6, row, &text::truncate(project.name, inner.saturating_sub(6)), heading);
        painter.text(MARGIN + 6, row + 1, ctx.profile.name_ref(), muted);
        row += 3;

        for line in text::wrap(project.description, inner) {
            painter.text(MARGIN, row, &line, body);
            row += 1;
        }

        row += 1;
        painter.text(MARGIN, row, t.t(TranslationKey::Details), heading);
        row += 1;

        let kind_line = format!(
            "{} {} > {}",
            t.t(TranslationKey::TypeLabel),
            project.kind,
            project.category
        );
        painter.text(MARGIN, row, &text::truncate(&kind_line, inner), body);
        row += 1;

        if let Some(link) = project.link.as_ref() {
            let label = if link.is_mail() {
                t.t(TranslationKey::SayHi)
            } else {
                t.t(TranslationKey::VisitSite)
            };
            let label = format!("{} ↗", label);
            let link_style = Style::new(theme.link, palette.background).underline();
            let used = painter.text(MARGIN, row, &label, link_style);

            painter.hotspot(MARGIN, row, Size::new(1, used), ContentAction::OpenLink(link.url()));
            row += 1;
        }

        row += 1;

        match project.content {
            ProjectContent::Folder { items } => {
                painter.text(MARGIN, row, t.t(TranslationKey::Content), heading);
                row += 1;

                let item_style = Style::new(palette.text, theme.folder_row);

                for item in items.iter() {
                    painter.fill(MARGIN, row, Size::new(1, inner as u16), item_style);
                    painter.text(
                        MARGIN + 1,
                        row,
                        &text::truncate(&format!("▸ {}", item), inner.saturating_sub(2)),
                        item_style,
                    );
                    row += 2;
                }
            }
            ProjectContent::Gallery {
                images,
                coming_soon,
            } => {
                painter.text(MARGIN, row, t.t(TranslationKey::Preview), heading);
                row += 1;

                let start = row;

                for image in images.iter() {
                    self.image_placeholder(painter, row, inner as u16, image, palette, coming_soon);
                    row += IMAGE_ROWS + 1;
                }

                if coming_soon && row > start {
                    let banner = format!(" {} ", t.t(TranslationKey::ComingSoon));
                    let middle = start + (row - start) / 2;
                    painter.centered(
                        middle.saturating_sub(1),
                        &banner,
                        Style::new(theme.tooltip_text, theme.tooltip_background).bold(),
                    );
                }
            }
            ProjectContent::Preview => {
                painter.text(MARGIN, row, t.t(TranslationKey::Preview), heading);
                row += 1;

                painter.fill(
                    MARGIN,
                    row,
                    Size::new(IMAGE_ROWS, inner as u16),
                    Style::new(palette.text, project.preview_color),
                );
                row += IMAGE_ROWS;
            }
        }

        // Trailing blank row so the last item is not glued to the frame.
        painter.text(0, row, "", body);
    }

    fn image_placeholder(
        &self,
        painter: &mut Painter,
        row: u16,
        width: u16,
        path: &str,
        palette: &Palette,
        blurred: bool,
    ) {
        let swatch = self.project.preview_color.mix(palette.background, 0.35);
        let style = Style::new(palette.background, swatch);

        painter.fill(MARGIN, row, Size::new(IMAGE_ROWS, width), style);

        if blurred {
            let haze: String = std::iter::repeat('░').take(width as usize).collect();

            for r in row..row + IMAGE_ROWS {
                painter.text(MARGIN, r, &haze, style);
            }

            return;
        }

        let label = text::truncate(asset_name(path), width.saturating_sub(2) as usize);
        let col = MARGIN + text::center_offset(&label, width as usize) as u16;
        painter.text(col, row + IMAGE_ROWS / 2, &label, style);
    }
}

#[cfg(test)]
mod tests {
    use super::{asset_name, ProjectView};
    use crate::apps::{ContentAction, ViewContext};
    use crate::catalog;
    use crate::config::{Profile, Theme};
    use crate::display::Painter;
    use crate::geometry::Size;
    use crate::i18n::{Locale, Translator};
    use std::time::Instant;

    fn measure(id: &str) -> Painter<'static> {
        let theme = Theme::default();
        let profile = Profile::default();
        let ctx = ViewContext {
            translator: Translator::new(Locale::En),
            theme: &theme,
            profile: &profile,
            now: Instant::now(),
        };
        let view = ProjectView::new(catalog::project(id).unwrap());
        let body = crate::apps::PanelBody::Project(view);
        let mut painter = Painter::measure(Size::new(20, 60), 0);
        body.view(&mut painter, &ctx);

        return painter;
    }

    #[test]
    fn asset_names_drop_directories() {
        assert_eq!(asset_name("/folderImages/folderImage1i.png"), "folderImage1i.png");
        assert_eq!(asset_name("plain.png"), "plain.png");
    }

    #[test]
    fn mail_projects_link_to_mailto() {
        let painter = measure("secret-help");
        let links: Vec<&ContentAction> = painter
            .hotspots_ref()
            .iter()
            .map(|h| &h.action)
            .filter(|a| matches!(a, ContentAction::OpenLink(_)))
            .collect();

        assert_eq!(links.len(), 1);
        match links[0] {
            ContentAction::OpenLink(url) => assert!(url.starts_with("mailto:")),
            _ => unreachable!(),
        }
    }

    #[test]
    fn galleries_extend_past_the_viewport() {
        let painter = measure("rotanova-v2");
        assert!(painter.extent() > 20);
    }
}
