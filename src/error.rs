use std::error::Error;

#[derive(Clone, PartialEq, Debug, Hash)]
pub enum ErrorType {
    DetermineTerminalSizeError {
        reason: String,
    },

    StdoutFlushError {
        reason: String,
    },

    EnterRawModeError {
        reason: String,
    },

    QueueExecuteError {
        reason: String,
    },

    LinkOpenError {
        url: String,
        reason: String,
    },

    InputClosedError,
    InputManagerRunningError,
}

#[derive(Clone, PartialEq, Hash)]
pub struct DeskfolioError {
    debug_description: String,
    description: String,
    terminate: bool,
}

impl ErrorType {
    pub fn into_error(self) -> DeskfolioError {
        return DeskfolioError::new(self);
    }

    pub fn new_input_manager_running_error() -> DeskfolioError {
        return Self::InputManagerRunningError.into_error();
    }

    pub fn new_enter_raw_mode_error(reason: String) -> DeskfolioError {
        return Self::EnterRawModeError { reason }.into_error();
    }
}

impl DeskfolioError {
    pub fn new(tp: ErrorType) -> Self {
        return match tp {
            ErrorType::DetermineTerminalSizeError { reason } => {
                Self::new_determine_terminal_size_error(reason)
            }
            ErrorType::StdoutFlushError { reason } => Self::new_stdout_flush_error(reason),
            ErrorType::EnterRawModeError { reason } => Self::new_enter_raw_mode_error(reason),
            ErrorType::QueueExecuteError { reason } => Self::new_queue_execute_error(reason),
            ErrorType::LinkOpenError { url, reason } => Self::new_link_open_error(url, reason),
            ErrorType::InputClosedError => Self::new_input_closed_error(),
            ErrorType::InputManagerRunningError => Self::new_input_manager_running_error(),
        };
    }

    pub fn description(&self) -> String {
        return format!("Desktop Error: {}", self.description);
    }

    pub fn debug_description(&self) -> String {
        return format!("Desktop Error: {}", self.debug_description);
    }

    pub fn should_terminate(&self) -> bool {
        return self.terminate;
    }

    fn new_determine_terminal_size_error(reason: String) -> Self {
        return Self {
            debug_description: format!("Failed to determine terminal size. Reason: {}", reason),
            description: format!("Failed to determine terminal size."),
            terminate: true,
        };
    }

    fn new_stdout_flush_error(reason: String) -> Self {
        return Self {
            debug_description: format!("Failed to flush stdout. Reason: {}", reason),
            description: "Failed to flush stdout".to_string(),
            terminate: true,
        };
    }

    fn new_enter_raw_mode_error(reason: String) -> Self {
        return Self {
            debug_description: format!("Failed to enter TTY raw mode. Reason: {}", reason),
            description: "Failed to enter TTY raw mode".to_string(),
            terminate: true,
        };
    }

    fn new_queue_execute_error(reason: String) -> Self {
        return Self {
            debug_description: format!(
                "Failed to queue or execute display element. Reason: {}",
                reason
            ),
            description: format!(
                "Failed to queue or execute display element. Reason: {}",
                reason
            ),
            terminate: true,
        };
    }

    fn new_link_open_error(url: String, reason: String) -> Self {
        return Self {
            debug_description: format!("Failed to open link '{}'. Reason: {}", url, reason),
            description: format!("Failed to open link '{}'.", url),
            terminate: false,
        };
    }

    fn new_input_closed_error() -> Self {
        return Self {
            debug_description: "The terminal input stream closed unexpectedly".to_string(),
            description: "The terminal input stream closed".to_string(),
            terminate: true,
        };
    }

    fn new_input_manager_running_error() -> Self {
        return Self {
            debug_description: "The input manager is already running".to_string(),
            description: "The input manager is already running".to_string(),
            terminate: true,
        };
    }
}

impl std::fmt::Display for DeskfolioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "{}", self.description);
    }
}

impl std::fmt::Debug for DeskfolioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "{}", self.debug_description);
    }
}

impl Error for DeskfolioError {}

#[cfg(test)]
mod tests {
    use super::ErrorType;

    #[test]
    fn link_errors_do_not_terminate() {
        let err = ErrorType::LinkOpenError {
            url: "mailto:someone@example.com".to_string(),
            reason: "not found".to_string(),
        }
        .into_error();

        assert!(!err.should_terminate());
        assert_eq!(
            err.to_string(),
            "Failed to open link 'mailto:someone@example.com'."
        );
    }

    #[test]
    fn terminal_errors_terminate() {
        let err = ErrorType::StdoutFlushError {
            reason: "broken pipe".to_string(),
        }
        .into_error();

        assert!(err.should_terminate());
        assert_eq!(
            format!("{:?}", err),
            "Failed to flush stdout. Reason: broken pipe"
        );
    }

    #[test]
    fn raw_mode_errors_terminate() {
        let err = ErrorType::new_enter_raw_mode_error("not a tty".to_string());

        assert!(err.should_terminate());
        assert_eq!(
            err.description(),
            "Desktop Error: Failed to enter TTY raw mode"
        );
        assert_eq!(
            format!("{:?}", err),
            "Failed to enter TTY raw mode. Reason: not a tty"
        );
    }
}
