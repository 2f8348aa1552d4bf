//! Timers feeding the event loop.
//!
//! A [`ScheduledTask`] owns a tokio task that posts [`AppEvent`]s into the
//! app's channel. Dropping the handle aborts the task, so a screen that holds
//! its timers stops them simply by being torn down.

use std::future::Future;
use std::time::Duration;

use crossterm::event::KeyEvent;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    /// Animation frame, only triggers a redraw
    Frame,
    GameTick(u64),
    ScanComplete(u64),
    ScanRedirect(u64),
}

pub type EventSender = mpsc::UnboundedSender<AppEvent>;
pub type EventReceiver = mpsc::UnboundedReceiver<AppEvent>;

pub struct ScheduledTask {
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }

    /// Sends `event` every `period`, first after one full period.
    pub fn every(period: Duration, events: EventSender, event: AppEvent) -> Self {
        Self::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if events.send(event.clone()).is_err() {
                    break;
                }
            }
        })
    }

    pub fn once(delay: Duration, events: EventSender, event: AppEvent) -> Self {
        Self::spawn(async move {
            time::sleep(delay).await;
            let _ = events.send(event);
        })
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
