use crate::geometry::Direction;

#[derive(Clone, PartialEq, Debug)]
pub enum Command {
    QuitCommand,
    FocusNextCommand,
    CloseFocusedCommand,
    MinimizeFocusedCommand,
    MaximizeFocusedCommand,
    MoveFocusedCommand(Direction),
    LaunchDockItemCommand(usize),
}

impl Command {
    pub fn get_name(&self) -> &str {
        return match self {
            Self::QuitCommand => "Quit",
            Self::FocusNextCommand => "FocusNext",
            Self::CloseFocusedCommand => "CloseFocused",
            Self::MinimizeFocusedCommand => "MinimizeFocused",
            Self::MaximizeFocusedCommand => "MaximizeFocused",
            Self::MoveFocusedCommand(_) => "MoveFocused",
            Self::LaunchDockItemCommand(_) => "LaunchDockItem",
        };
    }

    /// The arguments that reproduce this command through [try_from_string](Command::try_from_string).
    pub fn get_args(&self) -> Vec<String> {
        return match self {
            Self::MoveFocusedCommand(direction) => vec![direction.as_str().to_string()],
            Self::LaunchDockItemCommand(index) => vec![index.to_string()],
            _ => Vec::new(),
        };
    }

    pub fn try_from_string(name: String, mut args: Vec<String>) -> Result<Self, String> {
        let lowered_name = name.to_lowercase();

        let mut required_0_args = true;

        let cmd = match lowered_name.as_str() {
            "quit" => Self::QuitCommand,
            "focusnext" => Self::FocusNextCommand,
            "closefocused" => Self::CloseFocusedCommand,
            "minimizefocused" => Self::MinimizeFocusedCommand,
            "maximizefocused" => Self::MaximizeFocusedCommand,
            "movefocused" => {
                let arg = match (args.pop(), args.is_empty()) {
                    (Some(arg), true) => arg,
                    _ => {
                        return Err(
                            "The move focused command must be supplied a single direction argument."
                                .to_string(),
                        )
                    }
                };

                required_0_args = false;
                Self::MoveFocusedCommand(Direction::try_from_string(&arg)?)
            }
            "launchdockitem" => {
                let arg = match (args.pop(), args.is_empty()) {
                    (Some(arg), true) => arg,
                    _ => {
                        return Err(
                            "The launch dock item command must be supplied an integer argument."
                                .to_string(),
                        )
                    }
                };

                let index = arg.parse::<usize>().map_err(|_| {
                    "The launch dock item command must be supplied an integer argument."
                        .to_string()
                })?;

                required_0_args = false;
                Self::LaunchDockItemCommand(index)
            }
            _ => return Err(format!("Unknown command: {}", name)),
        };

        if required_0_args && args.len() != 0 {
            return Err(format!(
                "The {} command expects 0 arguments but {} were provided",
                cmd.get_name(),
                args.len()
            ));
        }

        return Ok(cmd);
    }
}

#[cfg(test)]
mod tests {
    use super::Command;
    use crate::geometry::Direction;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(
            Command::try_from_string("quit".to_string(), Vec::new()),
            Ok(Command::QuitCommand)
        );
        assert_eq!(
            Command::try_from_string("MoveFocused".to_string(), vec!["Left".to_string()]),
            Ok(Command::MoveFocusedCommand(Direction::Left))
        );
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(Command::try_from_string("Quit".to_string(), vec!["x".to_string()]).is_err());
        assert!(Command::try_from_string("LaunchDockItem".to_string(), Vec::new()).is_err());
        assert!(
            Command::try_from_string("LaunchDockItem".to_string(), vec!["two".to_string()])
                .is_err()
        );
        assert!(Command::try_from_string("Subdivide".to_string(), Vec::new()).is_err());
    }

    #[test]
    fn name_and_args_reproduce_the_command() {
        let cmd = Command::LaunchDockItemCommand(4);
        let parsed = Command::try_from_string(cmd.get_name().to_string(), cmd.get_args());

        assert_eq!(parsed, Ok(cmd));
    }
}
