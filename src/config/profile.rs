use super::serde_default_funcs::*;
use serde::{Deserialize, Serialize};

/// The portfolio owner shown in titles and contact links.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct Profile {
    #[serde(default = "serde_default_owner_name")]
    name: String,
    #[serde(default = "serde_default_short_name")]
    short_name: String,
    #[serde(default = "serde_default_email")]
    email: String,
    #[serde(default = "serde_default_instagram_handle")]
    instagram_handle: String,
    #[serde(default = "serde_default_instagram_url")]
    instagram_url: String,
}

impl Profile {
    pub fn name_ref(&self) -> &String {
        return &self.name;
    }

    pub fn short_name_ref(&self) -> &String {
        return &self.short_name;
    }

    pub fn email_ref(&self) -> &String {
        return &self.email;
    }

    pub fn mail_link(&self) -> String {
        return format!("mailto:{}", self.email);
    }

    pub fn instagram_handle_ref(&self) -> &String {
        return &self.instagram_handle;
    }

    pub fn instagram_url_ref(&self) -> &String {
        return &self.instagram_url;
    }
}

impl Default for Profile {
    fn default() -> Self {
        return Self {
            name: serde_default_owner_name(),
            short_name: serde_default_short_name(),
            email: serde_default_email(),
            instagram_handle: serde_default_instagram_handle(),
            instagram_url: serde_default_instagram_url(),
        };
    }
}
