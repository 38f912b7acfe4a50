use super::serde_default_funcs::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct Environment {
    #[serde(default = "serde_default_1")]
    log_level: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    log_file: Option<String>,
    /// A language tag such as `tr-TR`, or `auto` to read the locale environment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    locale: Option<String>,
    #[serde(default = "serde_default_link_opener")]
    link_opener: String,
    #[serde(default = "serde_default_frame_interval_ms")]
    frame_interval_ms: u64,
}

impl Environment {
    pub fn set_log_file(&mut self, file: String) {
        self.log_file = Some(file);
    }

    pub fn log_file_ref(&self) -> &Option<String> {
        return &self.log_file;
    }

    pub fn set_log_level(&mut self, level: usize) {
        self.log_level = level;
    }

    pub fn log_level(&self) -> usize {
        return self.log_level;
    }

    pub fn set_locale(&mut self, locale: String) {
        self.locale = Some(locale);
    }

    pub fn locale_ref(&self) -> &Option<String> {
        return &self.locale;
    }

    pub fn link_opener_ref(&self) -> &String {
        return &self.link_opener;
    }

    /// The redraw and animation period, never shorter than a millisecond.
    pub fn frame_interval(&self) -> Duration {
        return Duration::from_millis(self.frame_interval_ms.max(1));
    }
}

impl Default for Environment {
    fn default() -> Self {
        return Self {
            log_level: serde_default_1(),
            log_file: None,
            locale: None,
            link_opener: serde_default_link_opener(),
            frame_interval_ms: serde_default_frame_interval_ms(),
        };
    }
}
