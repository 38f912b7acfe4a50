use crate::event::InputEvent;
use std::time::Duration;
use tokio::sync::mpsc::{self, Receiver, Sender};
use tokio::time::{self, Interval, MissedTickBehavior};

#[derive(Clone, PartialEq, Debug)]
pub enum ControllerResponse {
    Input(InputEvent),
    /// The frame interval elapsed.
    Tick,
    /// Every input sender has been dropped.
    Closed,
}

/// Multiplexes terminal input with the frame clock.
pub struct ChannelController {
    input_rx: Receiver<InputEvent>,
    ticker: Interval,
}

impl ChannelController {
    const BUFFER_SIZE: usize = 100;

    /// Must be called from within a tokio runtime.
    pub fn new(frame_interval: Duration) -> (Self, Sender<InputEvent>) {
        let (tx, rx) = mpsc::channel(Self::BUFFER_SIZE);
        let mut ticker = time::interval(frame_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        return (
            Self {
                input_rx: rx,
                ticker,
            },
            tx,
        );
    }

    pub async fn wait_for_message(&mut self) -> ControllerResponse {
        tokio::select! {
            event = self.input_rx.recv() => {
                return match event {
                    Some(event) => ControllerResponse::Input(event),
                    None => ControllerResponse::Closed,
                };
            }

            _ = self.ticker.tick() => {
                return ControllerResponse::Tick;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ChannelController, ControllerResponse};
    use crate::event::{InputEvent, Key};
    use std::time::Duration;

    #[tokio::test]
    async fn input_is_delivered() {
        let (mut controller, tx) = ChannelController::new(Duration::from_secs(60));

        // The first tick of an interval completes immediately.
        assert_eq!(controller.wait_for_message().await, ControllerResponse::Tick);

        tx.send(InputEvent::Key(Key::Tab)).await.unwrap();
        assert_eq!(
            controller.wait_for_message().await,
            ControllerResponse::Input(InputEvent::Key(Key::Tab))
        );
    }

    #[tokio::test]
    async fn dropped_senders_close_the_controller() {
        let (mut controller, tx) = ChannelController::new(Duration::from_secs(60));
        controller.wait_for_message().await;

        drop(tx);
        assert_eq!(controller.wait_for_message().await, ControllerResponse::Closed);
    }
}
