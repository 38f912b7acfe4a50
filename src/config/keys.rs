use crate::command::Command;
use crate::event::Key;
use crate::geometry::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, PartialEq, Debug)]
pub struct Keys {
    single_key_map: HashMap<char, Command>,
    shortcut_map: HashMap<Key, Command>,
}

#[derive(Deserialize, Serialize)]
struct KeyPair {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shortcut: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    args: Option<Vec<String>>,
}

fn key_from_string(string: String) -> Result<Key, &'static str> {
    let mut first_half = String::new();
    let mut string: Vec<char> = string.chars().collect();

    while string.len() > 0 {
        if string[0] == '+' {
            if first_half.len() == 0 {
                return Err("A single character is required to follow a '+'");
            }

            string.remove(0);
            break;
        } else {
            first_half.push(string.remove(0));
        }
    }

    let lowered = first_half.to_lowercase();

    if string.len() > 0 {
        if string.len() != 1 {
            return Err("Expected a single character to follow '+'.");
        }

        if lowered == "ctrl" {
            return Ok(Key::Ctrl(string[0].to_ascii_lowercase()));
        } else if lowered == "alt" {
            return Ok(Key::Alt(string[0]));
        } else {
            return Err("Only the \"Alt\" and \"Ctrl\" modifiers are supported.");
        }
    }

    return match lowered.as_str() {
        "tab" => Ok(Key::Tab),
        "backtab" => Ok(Key::BackTab),
        "esc" | "escape" => Ok(Key::Esc),
        "enter" => Ok(Key::Enter),
        "up" => Ok(Key::Up),
        "down" => Ok(Key::Down),
        "left" => Ok(Key::Left),
        "right" => Ok(Key::Right),
        _ => {
            if first_half.chars().count() != 1 {
                Err("A single character key, a named key or modifier '+' single character is expected.")
            } else {
                first_half
                    .chars()
                    .next()
                    .map(Key::Char)
                    .ok_or("A single character key is expected.")
            }
        }
    };
}

fn key_to_string(key: &Key) -> String {
    return match key {
        Key::Char(ch) => ch.to_string(),
        Key::Ctrl(ch) => format!("ctrl+{}", ch),
        Key::Alt(ch) => format!("alt+{}", ch),
        Key::Tab => String::from("tab"),
        Key::BackTab => String::from("backtab"),
        Key::Esc => String::from("esc"),
        Key::Enter => String::from("enter"),
        Key::Up => String::from("up"),
        Key::Down => String::from("down"),
        Key::Left => String::from("left"),
        Key::Right => String::from("right"),
    };
}

impl Keys {
    pub fn new() -> Self {
        return Self::default();
    }

    /// Plain characters resolve through the single key map, everything else through the
    /// shortcut map.
    pub fn command_for_key(&self, key: &Key) -> Option<&Command> {
        return match key {
            Key::Char(ch) => self.single_key_map.get(ch),
            other => self.shortcut_map.get(other),
        };
    }

    pub fn command_for_shortcut(&self, key: &Key) -> Option<&Command> {
        return self.shortcut_map.get(key);
    }

    pub fn map_shortcut(&mut self, key: Key, cmd: Command) {
        self.shortcut_map.insert(key, cmd);
    }

    pub fn unmap_shortcut(&mut self, key: &Key) {
        self.shortcut_map.remove(key);
    }

    pub fn command_for_character(&self, ch: &char) -> Option<&Command> {
        return self.single_key_map.get(ch);
    }

    pub fn map_character(&mut self, key: char, cmd: Command) {
        self.single_key_map.insert(key, cmd);
    }

    pub fn unmap_character(&mut self, key: &char) {
        self.single_key_map.remove(key);
    }

    #[inline]
    const fn is_permitted_char(ch: char) -> bool {
        return ch.is_ascii_alphanumeric() || ch.is_ascii_punctuation();
    }
}

impl Default for Keys {
    fn default() -> Self {
        let mut n = Self {
            single_key_map: HashMap::new(),
            shortcut_map: HashMap::new(),
        };

        n.shortcut_map.insert(Key::Ctrl('q'), Command::QuitCommand);
        n.shortcut_map.insert(Key::Tab, Command::FocusNextCommand);
        n.shortcut_map
            .insert(Key::Up, Command::MoveFocusedCommand(Direction::Up));
        n.shortcut_map
            .insert(Key::Down, Command::MoveFocusedCommand(Direction::Down));
        n.shortcut_map
            .insert(Key::Left, Command::MoveFocusedCommand(Direction::Left));
        n.shortcut_map
            .insert(Key::Right, Command::MoveFocusedCommand(Direction::Right));

        n.single_key_map.insert('w', Command::CloseFocusedCommand);
        n.single_key_map.insert('m', Command::MinimizeFocusedCommand);
        n.single_key_map.insert('f', Command::MaximizeFocusedCommand);

        for (index, ch) in ('1'..='9').enumerate() {
            n.single_key_map
                .insert(ch, Command::LaunchDockItemCommand(index));
        }

        return n;
    }
}

impl<'de> Deserialize<'de> for Keys {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let keys: Vec<KeyPair> = Deserialize::deserialize(deserializer)?;
        let mut res = Self::default();

        for key_pair in keys {
            let (shortcut, key, command, args) = (
                key_pair.shortcut,
                key_pair.key,
                key_pair.command,
                key_pair.args.unwrap_or(Vec::new()),
            );

            let cmd =
                Command::try_from_string(command, args).map_err(|e| serde::de::Error::custom(e))?;

            if let Some(shortcut) = shortcut {
                let shortcut =
                    key_from_string(shortcut).map_err(|e| serde::de::Error::custom(e))?;

                match shortcut {
                    Key::Char(ch) => res.single_key_map.insert(ch, cmd.clone()),
                    other => res.shortcut_map.insert(other, cmd.clone()),
                };
            }

            if let Some(key) = key {
                let key: Vec<char> = key.chars().collect();

                let ch = match key.as_slice() {
                    [ch] => *ch,
                    _ => {
                        return Err(serde::de::Error::custom(
                            "Expected a single character 'key'.",
                        ))
                    }
                };

                if !Self::is_permitted_char(ch) {
                    return Err(serde::de::Error::custom(format!(
                        "Unsupported 'key': {}",
                        ch
                    )));
                }

                res.single_key_map.insert(ch, cmd);
            }
        }

        return Ok(res);
    }
}

impl Serialize for Keys {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut pairs: Vec<KeyPair> = Vec::new();

        for (ch, cmd) in &self.single_key_map {
            pairs.push(KeyPair {
                shortcut: None,
                key: Some(ch.to_string()),
                command: cmd.get_name().to_string(),
                args: Some(cmd.get_args()).filter(|a| !a.is_empty()),
            });
        }

        for (key, cmd) in &self.shortcut_map {
            pairs.push(KeyPair {
                shortcut: Some(key_to_string(key)),
                key: None,
                command: cmd.get_name().to_string(),
                args: Some(cmd.get_args()).filter(|a| !a.is_empty()),
            });
        }

        // HashMap order is unstable, keep the printed config deterministic.
        pairs.sort_by(|a, b| {
            (a.shortcut.as_ref(), a.key.as_ref()).cmp(&(b.shortcut.as_ref(), b.key.as_ref()))
        });

        return Serialize::serialize(&pairs, serializer);
    }
}

#[cfg(test)]
mod tests {
    use super::{key_from_string, Keys};
    use crate::command::Command;
    use crate::event::Key;

    #[test]
    fn parses_modifiers_and_named_keys() {
        assert_eq!(key_from_string("ctrl+Q".to_string()), Ok(Key::Ctrl('q')));
        assert_eq!(key_from_string("alt+x".to_string()), Ok(Key::Alt('x')));
        assert_eq!(key_from_string("Tab".to_string()), Ok(Key::Tab));
        assert_eq!(key_from_string("left".to_string()), Ok(Key::Left));
        assert_eq!(key_from_string("z".to_string()), Ok(Key::Char('z')));
        assert!(key_from_string("shift+x".to_string()).is_err());
        assert!(key_from_string("+x".to_string()).is_err());
        assert!(key_from_string("ctrl+xy".to_string()).is_err());
    }

    #[test]
    fn default_bindings() {
        let keys = Keys::default();

        assert_eq!(
            keys.command_for_key(&Key::Ctrl('q')),
            Some(&Command::QuitCommand)
        );
        assert_eq!(
            keys.command_for_key(&Key::Char('1')),
            Some(&Command::LaunchDockItemCommand(0))
        );
        assert_eq!(
            keys.command_for_key(&Key::Char('9')),
            Some(&Command::LaunchDockItemCommand(8))
        );
        assert_eq!(keys.command_for_key(&Key::Char('x')), None);
    }

    #[test]
    fn serialized_keys_parse_back() {
        let keys = Keys::default();
        let json = serde_json::to_string(&keys).unwrap();
        let parsed: Keys = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, keys);
    }
}
