use super::{DockSettings, Environment, Keys, Profile, Theme, WindowSettings};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    environment: Environment,
    #[serde(default)]
    windows: WindowSettings,
    #[serde(default)]
    dock: DockSettings,
    #[serde(default)]
    theme: Theme,
    #[serde(default)]
    profile: Profile,
    #[serde(default)]
    keys: Keys,
}

impl Config {
    pub fn new() -> Self {
        return Self::default();
    }

    pub fn key_map(&self) -> &Keys {
        return &self.keys;
    }

    pub fn mut_key_map(&mut self) -> &mut Keys {
        return &mut self.keys;
    }

    pub fn get_environment_ref(&self) -> &Environment {
        return &self.environment;
    }

    pub fn get_environment_mut_ref(&mut self) -> &mut Environment {
        return &mut self.environment;
    }

    pub fn get_windows_ref(&self) -> &WindowSettings {
        return &self.windows;
    }

    pub fn get_windows_mut_ref(&mut self) -> &mut WindowSettings {
        return &mut self.windows;
    }

    pub fn get_dock_ref(&self) -> &DockSettings {
        return &self.dock;
    }

    pub fn get_theme_ref(&self) -> &Theme {
        return &self.theme;
    }

    pub fn get_profile_ref(&self) -> &Profile {
        return &self.profile;
    }

    pub fn from_toml_string(toml: &str) -> Result<Self, String> {
        return toml::from_str(toml).map_err(|e| e.to_string());
    }

    pub fn from_json_string(json: &str) -> Result<Self, String> {
        return serde_json::from_str(json).map_err(|e| e.to_string());
    }

    pub fn default_path(format: &str) -> Option<String> {
        let mut path = dirs::home_dir()?;

        if format.to_lowercase() == "json" {
            path.push(".config/deskfolio/config.json");
        } else {
            path.push(".config/deskfolio/config.toml");
        }

        return path.to_str().map(|s| s.to_string());
    }
}

impl Default for Config {
    fn default() -> Self {
        return Self {
            environment: Environment::default(),
            windows: WindowSettings::default(),
            dock: DockSettings::default(),
            theme: Theme::default(),
            profile: Profile::default(),
            keys: Keys::default(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::command::Command;
    use crate::event::Key;
    use crate::geometry::Direction;
    use crate::Color;

    #[test]
    fn basic_toml_test() {
        let input = "
        [environment]\n\
        log_level = 3\n\
        locale = \"tr-TR\"\n\
        link_opener = \"firefox\"\n\
        \n\
        [windows]\n\
        drag_margin = 6\n\
        placement_jitter = false\n\
        \n\
        [dock]\n\
        damping = 25.0\n\
        \n\
        [theme]\n\
        link = \"blue\"\n\
        window_background = \"#ffffff\"\n\
        \n\
        [[keys]]\n\
        shortcut = \"ctrl+x\"\n\
        command = \"Quit\"\n\
        \n\
        [[keys]]\n\
        shortcut = \"alt+h\"\n\
        key = \"h\"\n\
        command = \"MoveFocused\"\n\
        args = [\"left\"]\n\
        ";

        let conf = Config::from_toml_string(input).unwrap();

        assert_eq!(conf.get_environment_ref().log_level(), 3);
        assert_eq!(
            conf.get_environment_ref().locale_ref().as_deref(),
            Some("tr-TR")
        );
        assert_eq!(conf.get_environment_ref().link_opener_ref(), "firefox");
        assert_eq!(conf.get_windows_ref().drag_margin(), 6);
        assert!(!conf.get_windows_ref().placement_jitter());
        assert_eq!(conf.get_dock_ref().damping(), 25.0);
        assert_eq!(conf.get_dock_ref().stiffness(), 350.0);
        assert_eq!(conf.get_theme_ref().link, Color::BLUE);
        assert_eq!(conf.get_theme_ref().window_background, Color::WHITE);

        let keys = conf.key_map();
        assert_eq!(
            keys.command_for_key(&Key::Ctrl('x')),
            Some(&Command::QuitCommand)
        );
        assert_eq!(
            keys.command_for_key(&Key::Alt('h')),
            Some(&Command::MoveFocusedCommand(Direction::Left))
        );
        assert_eq!(
            keys.command_for_key(&Key::Char('h')),
            Some(&Command::MoveFocusedCommand(Direction::Left))
        );
        // Defaults survive alongside the configured bindings.
        assert_eq!(
            keys.command_for_key(&Key::Ctrl('q')),
            Some(&Command::QuitCommand)
        );
    }

    #[test]
    fn missing_sections_use_defaults() {
        assert_eq!(Config::from_toml_string("").unwrap(), Config::default());
        assert_eq!(Config::from_json_string("{}").unwrap(), Config::default());
    }

    #[test]
    fn unknown_command_is_rejected() {
        let input = "[[keys]]\nkey = \"x\"\ncommand = \"Explode\"\n";

        assert!(Config::from_toml_string(input).is_err());
    }

    #[test]
    fn printed_defaults_parse_back() {
        let toml_text = toml::to_string(&Config::default()).unwrap();
        let json_text = serde_json::to_string_pretty(&Config::default()).unwrap();

        assert_eq!(Config::from_toml_string(&toml_text).unwrap(), Config::default());
        assert_eq!(Config::from_json_string(&json_text).unwrap(), Config::default());
    }
}
