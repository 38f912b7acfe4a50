use crate::error::{DeskfolioError, ErrorType};
use std::process::{Command, Stdio};
use std::thread;

/// Hands URLs to an external program such as `xdg-open`. The program is detached from the
/// terminal so its output cannot corrupt the screen, and a short lived thread waits on it so
/// finished openers are reaped.
#[derive(Clone, PartialEq, Debug)]
pub struct LinkOpener {
    program: String,
}

impl LinkOpener {
    pub fn new(program: String) -> Self {
        return Self { program };
    }

    pub fn open(&self, url: &str) -> Result<(), DeskfolioError> {
        tracing::info!("Opening {} with {}", url, self.program);

        let mut child = Command::new(&self.program)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                ErrorType::LinkOpenError {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
                .into_error()
            })?;

        let program = self.program.clone();
        thread::spawn(move || match child.wait() {
            Ok(status) if !status.success() => {
                tracing::warn!("{} exited with {}", program, status);
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("Failed to wait on {}. Reason: {}", program, e),
        });

        return Ok(());
    }

    /// Open every link, logging the ones that fail.
    pub fn open_all(&self, urls: Vec<String>) {
        for url in urls {
            if let Err(e) = self.open(&url) {
                tracing::warn!("{:?}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LinkOpener;

    #[test]
    fn missing_programs_report_the_url() {
        let opener = LinkOpener::new("deskfolio-no-such-opener".to_string());
        let error = opener.open("mailto:someone@example.com").unwrap_err();

        assert!(!error.should_terminate());
        assert!(error.description().contains("mailto:someone@example.com"));
    }

    /// Children of this process that have exited but were never waited on.
    #[cfg(target_os = "linux")]
    fn zombie_children() -> usize {
        let parent = std::process::id().to_string();
        let entries = std::fs::read_dir("/proc").unwrap();

        return entries
            .filter_map(|entry| std::fs::read_to_string(entry.ok()?.path().join("stat")).ok())
            .filter(|stat| {
                // The command name is parenthesised and may contain spaces.
                let fields: Vec<&str> = match stat.rfind(')') {
                    Some(end) => stat[end + 1..].split_whitespace().collect(),
                    None => return false,
                };

                fields.len() > 1 && fields[0] == "Z" && fields[1] == parent
            })
            .count();
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn finished_openers_are_reaped() {
        let opener = LinkOpener::new("true".to_string());

        for _ in 0..5 {
            opener.open("https://example.com").unwrap();
        }

        // Give the children time to exit before looking for leftovers.
        std::thread::sleep(std::time::Duration::from_millis(250));

        let mut zombies = zombie_children();
        for _ in 0..40 {
            if zombies == 0 {
                break;
            }

            std::thread::sleep(std::time::Duration::from_millis(50));
            zombies = zombie_children();
        }

        assert_eq!(zombies, 0);
    }
}
