use super::{ContentAction, Palette, ViewContext};
use crate::catalog::SKILLS;
use crate::display::{text, Painter, Style};
use crate::geometry::Size;
use crate::i18n::TranslationKey;

const SIDEBAR_COLS: u16 = 16;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum NotesTab {
    AboutMe,
    Skills,
    Contact,
}

impl NotesTab {
    pub const ALL: [NotesTab; 3] = [NotesTab::AboutMe, NotesTab::Skills, NotesTab::Contact];

    pub fn label(&self) -> TranslationKey {
        return match self {
            NotesTab::AboutMe => TranslationKey::AboutMe,
            NotesTab::Skills => TranslationKey::Skills,
            NotesTab::Contact => TranslationKey::Contact,
        };
    }
}

pub struct NotesView {
    tab: NotesTab,
}

impl NotesView {
    pub fn new() -> Self {
        return Self {
            tab: NotesTab::AboutMe,
        };
    }

    pub fn tab(&self) -> NotesTab {
        return self.tab;
    }

    pub fn select(&mut self, tab: NotesTab) -> bool {
        if self.tab == tab {
            return false;
        }

        self.tab = tab;
        return true;
    }

    pub fn view(&self, painter: &mut Painter, ctx: &ViewContext, palette: &Palette) {
        let t = ctx.translator;
        let theme = ctx.theme;
        let sidebar = Style::new(palette.text, theme.sidebar_background);

        painter.fill(0, 0, Size::new(painter.height(), SIDEBAR_COLS), sidebar);

        for (i, tab) in NotesTab::ALL.iter().enumerate() {
            let row = 1 + i as u16 * 2;
            let style = if *tab == self.tab {
                Style::new(theme.heading_text, theme.sidebar_selected).bold()
            } else {
                sidebar
            };

            painter.fill(0, row, Size::new(1, SIDEBAR_COLS), style);
            painter.text(
                2,
                row,
                &text::truncate(t.t(tab.label()), (SIDEBAR_COLS - 3) as usize),
                style,
            );
            painter.hotspot(0, row, Size::new(1, SIDEBAR_COLS), ContentAction::SelectTab(*tab));
        }

        let left = SIDEBAR_COLS + 2;
        let inner = painter.width().saturating_sub(left + 2) as usize;
        let body = Style::new(palette.text, palette.background);
        let heading = Style::new(theme.heading_text, palette.background).bold();

        painter.text(left, 1, t.t(self.tab.label()), heading);

        match self.tab {
            NotesTab::AboutMe => {
                for (i, line) in text::wrap(t.t(TranslationKey::AboutText), inner)
                    .iter()
                    .enumerate()
                {
                    painter.text(left, 3 + i as u16, line, body);
                }
            }
            NotesTab::Skills => {
                painter.text(left, 3, t.t(TranslationKey::ICanDo), body);

                let check = Style::new(theme.check_mark, palette.background).bold();

                for (i, skill) in SKILLS.iter().enumerate() {
                    let row = 5 + i as u16;
                    painter.text(left, row, "✓", check);
                    painter.text(
                        left + 2,
                        row,
                        &text::truncate(skill, inner.saturating_sub(2)),
                        body,
                    );
                }
            }
            NotesTab::Contact => {
                painter.text(left, 3, t.t(TranslationKey::GetInTouch), body);

                let link = Style::new(theme.link, palette.background).underline();
                let rows = [
                    (
                        "✉",
                        ctx.profile.email_ref().as_str(),
                        ctx.profile.mail_link(),
                    ),
                    (
                        "◎",
                        ctx.profile.instagram_handle_ref().as_str(),
                        ctx.profile.instagram_url_ref().clone(),
                    ),
                ];

                for (i, (glyph, label, url)) in rows.iter().enumerate() {
                    let row = 5 + i as u16 * 2;
                    painter.text(left, row, glyph, body);

                    let used = painter.text(
                        left + 2,
                        row,
                        &text::truncate(label, inner.saturating_sub(2)),
                        link,
                    );
                    painter.hotspot(
                        left + 2,
                        row,
                        Size::new(1, used),
                        ContentAction::OpenLink(url.clone()),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NotesTab, NotesView};
    use crate::apps::{ContentAction, PanelBody, ViewContext};
    use crate::config::{Profile, Theme};
    use crate::display::Painter;
    use crate::geometry::{Position, Size};
    use crate::i18n::{Locale, Translator};
    use std::time::Instant;

    fn measure(view: NotesView, rows: u16) -> Painter<'static> {
        let theme = Theme::default();
        let profile = Profile::default();
        let ctx = ViewContext {
            translator: Translator::new(Locale::En),
            theme: &theme,
            profile: &profile,
            now: Instant::now(),
        };
        let mut painter = Painter::measure(Size::new(rows, 70), 0);
        PanelBody::Notes(view).view(&mut painter, &ctx);

        return painter;
    }

    #[test]
    fn sidebar_rows_select_tabs() {
        let painter = measure(NotesView::new(), 22);

        assert_eq!(
            painter.action_at(Position::new(3, 3)),
            Some(&ContentAction::SelectTab(NotesTab::Skills))
        );
        assert_eq!(
            painter.action_at(Position::new(3, 5)),
            Some(&ContentAction::SelectTab(NotesTab::Contact))
        );
    }

    #[test]
    fn contact_rows_are_links() {
        let mut view = NotesView::new();
        view.select(NotesTab::Contact);
        let painter = measure(view, 22);

        assert_eq!(
            painter.action_at(Position::new(21, 5)),
            Some(&ContentAction::OpenLink(
                "mailto:sabihaecemylmaz@gmail.com".to_string()
            ))
        );
        assert_eq!(
            painter.action_at(Position::new(21, 7)),
            Some(&ContentAction::OpenLink(
                "https://www.instagram.com/heyiamsabi".to_string()
            ))
        );
    }

    #[test]
    fn skills_list_every_skill() {
        let mut view = NotesView::new();
        view.select(NotesTab::Skills);
        assert_eq!(view.tab(), NotesTab::Skills);

        // The sidebar fills the visible rows, the list runs past them.
        let painter = measure(view, 10);
        assert_eq!(painter.extent(), 5 + crate::catalog::SKILLS.len() as u16);
    }
}
