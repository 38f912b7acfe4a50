mod calendar;
mod locale;
mod translations;

pub use calendar::clock_text;
pub use locale::Locale;
pub use translations::{translate, TranslationKey};

/// A locale bound lookup handed to anything that draws text.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        return Self { locale };
    }

    pub fn locale(&self) -> Locale {
        return self.locale;
    }

    pub fn t(&self, key: TranslationKey) -> &'static str {
        return translate(self.locale, key);
    }
}
