use crate::error::{DeskfolioError, ErrorType};
use crate::event::InputEvent;
use crossterm::event;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc::Sender;

/// The input manager reads terminal events on its own thread and forwards the ones the desktop
/// understands.
pub struct InputManager {
    running: Arc<AtomicBool>,
    stop: Arc<AtomicBool>,
}

impl InputManager {
    /// How long a read waits before checking whether the manager was stopped.
    const POLL_INTERVAL: Duration = Duration::from_millis(100);

    /// Start a new thread that reads from the terminal and sends every translated event through
    /// `sender`. The terminal is expected to already be in raw mode.
    pub fn start(sender: Sender<InputEvent>) -> Result<Self, DeskfolioError> {
        let mut val = Self {
            running: Arc::new(AtomicBool::new(false)),
            stop: Arc::new(AtomicBool::new(false)),
        };

        return val.start_internal(sender).map(|_| val);
    }

    fn start_internal(&mut self, sender: Sender<InputEvent>) -> Result<(), DeskfolioError> {
        // Ensure this method hasn't been called more than once
        if self.is_running() {
            return Err(ErrorType::new_input_manager_running_error());
        }

        let running = self.running.clone();
        let stop = self.stop.clone();
        running.store(true, Ordering::SeqCst);

        thread::spawn(move || {
            while !stop.load(Ordering::SeqCst) {
                match event::poll(Self::POLL_INTERVAL) {
                    Ok(true) => (),
                    Ok(false) => continue,
                    Err(e) => {
                        tracing::error!("Polling terminal input failed: {}", e);
                        break;
                    }
                }

                let raw = match event::read() {
                    Ok(raw) => raw,
                    Err(e) => {
                        tracing::error!("Reading terminal input failed: {}", e);
                        break;
                    }
                };

                let event = match InputEvent::from_crossterm(raw) {
                    Some(event) => event,
                    None => continue,
                };

                if sender.blocking_send(event).is_err() {
                    break;
                }
            }

            running.store(false, Ordering::SeqCst);
        });

        return Ok(());
    }

    /// Ask the input thread to exit after its current poll.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    /// Returns the status of the input thread, if it is still running or not.
    pub fn is_running(&self) -> bool {
        return self.running.load(Ordering::SeqCst);
    }
}

impl Drop for InputManager {
    fn drop(&mut self) {
        self.stop();
    }
}
