use super::{ContentAction, Palette, ViewContext};
use crate::display::{text, Painter, Style};
use crate::geometry::Size;
use crate::i18n::TranslationKey;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum DialogKind {
    Error,
    Trash,
    Figma,
}

impl DialogKind {
    pub fn title(&self) -> TranslationKey {
        return match self {
            DialogKind::Error => TranslationKey::Error,
            DialogKind::Trash => TranslationKey::Trash,
            DialogKind::Figma => TranslationKey::Figma,
        };
    }

    pub fn glyph(&self) -> &'static str {
        return match self {
            DialogKind::Error => "⚠",
            DialogKind::Trash => "♻",
            DialogKind::Figma => "✦",
        };
    }

    pub fn messages(&self) -> &'static [TranslationKey] {
        return match self {
            DialogKind::Error => &[TranslationKey::ErrorMessage1, TranslationKey::ErrorMessage2],
            DialogKind::Trash => &[TranslationKey::TrashMessage1, TranslationKey::TrashMessage2],
            DialogKind::Figma => &[TranslationKey::FigmaMessage],
        };
    }

    pub fn button(&self) -> TranslationKey {
        return match self {
            DialogKind::Error => TranslationKey::ErrorButton,
            DialogKind::Trash => TranslationKey::TrashButton,
            DialogKind::Figma => TranslationKey::Ok,
        };
    }
}

/// A small modal looking panel with a message and one button that closes it.
pub struct DialogView {
    kind: DialogKind,
}

impl DialogView {
    pub fn new(kind: DialogKind) -> Self {
        return Self { kind };
    }

    pub fn kind(&self) -> DialogKind {
        return self.kind;
    }

    pub fn preferred_size(&self) -> Size {
        return match self.kind {
            DialogKind::Figma => Size::new(10, 44),
            _ => Size::new(11, 50),
        };
    }

    pub fn view(&self, painter: &mut Painter, ctx: &ViewContext, palette: &Palette) {
        let t = ctx.translator;
        let body = Style::new(palette.text, palette.background);
        let inner = painter.width().saturating_sub(4) as usize;

        painter.centered(1, self.kind.glyph(), body.bold());

        let mut row = 3;

        for key in self.kind.messages().iter() {
            for line in text::wrap(t.t(*key), inner) {
                painter.centered(row, &line, body);
                row += 1;
            }
        }

        row += 1;

        let label = format!(" {} ", t.t(self.kind.button()));
        let label = text::truncate(&label, inner);
        let button = Style::new(ctx.theme.tooltip_text, ctx.theme.dialog_button).bold();
        let col = painter.centered(row, &label, button);

        painter.hotspot(
            col,
            row,
            Size::new(1, text::width(&label) as u16),
            ContentAction::Dismiss,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{DialogKind, DialogView};
    use crate::apps::{ContentAction, PanelBody, ViewContext};
    use crate::config::{Profile, Theme};
    use crate::display::Painter;
    use crate::i18n::{Locale, Translator};
    use std::time::Instant;

    fn measure(kind: DialogKind, locale: Locale) -> Painter<'static> {
        let theme = Theme::default();
        let profile = Profile::default();
        let ctx = ViewContext {
            translator: Translator::new(locale),
            theme: &theme,
            profile: &profile,
            now: Instant::now(),
        };
        let view = DialogView::new(kind);
        let mut painter = Painter::measure(view.preferred_size().saturating_sub(1, 2), 0);
        PanelBody::Dialog(view).view(&mut painter, &ctx);

        return painter;
    }

    #[test]
    fn every_dialog_has_a_dismiss_button() {
        for kind in [DialogKind::Error, DialogKind::Trash, DialogKind::Figma].iter() {
            for locale in [Locale::En, Locale::Tr].iter() {
                let painter = measure(*kind, *locale);
                let hotspots = painter.hotspots_ref();

                assert_eq!(hotspots.len(), 1);
                assert_eq!(hotspots[0].action, ContentAction::Dismiss);
            }
        }
    }

    #[test]
    fn messages_fit_the_preferred_size() {
        for kind in [DialogKind::Error, DialogKind::Trash, DialogKind::Figma].iter() {
            for locale in [Locale::En, Locale::Tr].iter() {
                let view = DialogView::new(*kind);
                let painter = measure(*kind, *locale);

                assert!(painter.extent() < view.preferred_size().get_rows(), "{:?}", kind);
            }
        }
    }
}
