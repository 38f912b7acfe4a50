/// The two supported display languages.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Locale {
    En,
    Tr,
}

impl Locale {
    /// Environment variables consulted in order, the first non-empty one wins.
    pub const ENVIRONMENT_VARIABLES: [&'static str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

    /// Any tag starting with `tr` selects Turkish. Everything else, including empty or
    /// unsupported tags, selects English.
    pub fn from_language_tag(tag: &str) -> Self {
        if tag.trim().to_lowercase().starts_with("tr") {
            return Locale::Tr;
        } else {
            return Locale::En;
        }
    }

    /// Resolve the locale from an explicit override, falling back to the process environment.
    pub fn detect(override_tag: Option<&str>) -> Self {
        return Self::detect_with(override_tag, |name| std::env::var(name).ok());
    }

    pub fn detect_with<F>(override_tag: Option<&str>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(tag) = override_tag {
            if !tag.trim().is_empty() && !tag.eq_ignore_ascii_case("auto") {
                return Self::from_language_tag(tag);
            }
        }

        for name in Self::ENVIRONMENT_VARIABLES.iter() {
            if let Some(value) = lookup(name) {
                if !value.trim().is_empty() {
                    return Self::from_language_tag(&value);
                }
            }
        }

        return Locale::En;
    }

    pub fn code(&self) -> &'static str {
        return match self {
            Locale::En => "en",
            Locale::Tr => "tr",
        };
    }

    pub fn tag(&self) -> &'static str {
        return match self {
            Locale::En => "en-US",
            Locale::Tr => "tr-TR",
        };
    }
}

impl Default for Locale {
    fn default() -> Self {
        return Locale::En;
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "{}", self.tag());
    }
}
