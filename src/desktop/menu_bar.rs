use crate::display::text;
use crate::i18n::{clock_text, Locale, TranslationKey, Translator};
use chrono::NaiveDateTime;

pub const APP_GLYPH: &str = "◆";
pub const APP_NAME: &str = "Safari";
const TRAY: &str = "▂▄▆  ⌕  ☰";

const MENUS: [TranslationKey; 8] = [
    TranslationKey::MenuFile,
    TranslationKey::MenuEdit,
    TranslationKey::MenuView,
    TranslationKey::MenuHistory,
    TranslationKey::MenuBookmarks,
    TranslationKey::MenuDevelopment,
    TranslationKey::MenuWindow,
    TranslationKey::MenuHelp,
];

/// One piece of text in the menu bar and the column it starts at.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MenuSegment {
    pub col: u16,
    pub text: String,
    pub bold: bool,
}

/// The top row. The only state is the clock, refreshed once per wall clock second.
#[derive(Clone, Debug)]
pub struct MenuBar {
    locale: Locale,
    clock: String,
    second: Option<i64>,
}

impl MenuBar {
    pub fn new(locale: Locale) -> Self {
        return Self {
            locale,
            clock: String::new(),
            second: None,
        };
    }

    pub fn clock_ref(&self) -> &String {
        return &self.clock;
    }

    /// Refresh the clock text. Returns true if the second changed.
    pub fn update(&mut self, now: &NaiveDateTime) -> bool {
        let second = now.and_utc().timestamp();

        if self.second == Some(second) {
            return false;
        }

        self.second = Some(second);
        self.clock = clock_text(self.locale, now);

        return true;
    }

    /// Left aligned menus and the right aligned tray and clock for a `width` column row.
    pub fn segments(&self, width: u16) -> Vec<MenuSegment> {
        let translator = Translator::new(self.locale);
        let mut items = vec![(APP_GLYPH, false), (APP_NAME, true)];
        items.extend(MENUS.iter().map(|key| (translator.t(*key), false)));

        let right = format!("{}  {}", TRAY, self.clock);
        let right_col = width.saturating_sub(text::width(&right) as u16 + 2);

        let mut segments = Vec::new();
        let mut col = 2;

        for (label, bold) in items {
            let end = col + text::width(label) as u16;

            // Menus that would run into the tray are dropped.
            if end + 1 >= right_col {
                break;
            }

            segments.push(MenuSegment {
                col,
                text: label.to_string(),
                bold,
            });
            col = end + 2;
        }

        segments.push(MenuSegment {
            col: right_col,
            text: right,
            bold: false,
        });

        return segments;
    }
}

#[cfg(test)]
mod tests {
    use super::{MenuBar, APP_NAME};
    use crate::i18n::Locale;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> chrono::NaiveDateTime {
        return NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap();
    }

    #[test]
    fn clock_refreshes_once_per_second() {
        let mut bar = MenuBar::new(Locale::En);

        assert!(bar.update(&at(14, 5, 0)));
        assert_eq!(bar.clock_ref(), "Fri, Oct 16 02:05 PM");
        assert!(!bar.update(&at(14, 5, 0)));
        assert!(bar.update(&at(14, 5, 1)));
    }

    #[test]
    fn narrow_rows_drop_menus_not_the_clock() {
        let mut bar = MenuBar::new(Locale::Tr);
        bar.update(&at(14, 5, 0));

        let wide = bar.segments(160);
        assert_eq!(wide.len(), 11);
        assert!(wide[1].bold);
        assert_eq!(wide[1].text, APP_NAME);

        let narrow = bar.segments(50);
        assert!(narrow.len() < wide.len());
        assert!(narrow.last().unwrap().text.ends_with("16 Eki Cum 14:05"));
    }
}
