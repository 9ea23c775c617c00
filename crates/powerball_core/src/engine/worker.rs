//! Off-thread execution of the realistic simulation.
//!
//! The engine runs on a dedicated thread and communicates exclusively
//! through an unbounded FIFO event channel; the only shared state is the
//! immutable starting ticket and the cooperative stop flag.

use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use super::realistic::{run_realistic, RealisticConfig, RealisticResult};
use super::Outcome;
use crate::models::Ticket;
use crate::stats::SimStats;

/// Outbound event stream of a realistic run. Delivered in emission order;
/// exactly one terminal event (`Complete` or `Cancelled`) closes the stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEvent {
    /// A narrative line. `delay_ms` is a pacing hint for the display layer.
    Message {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        delay_ms: Option<u64>,
    },
    /// Advisory snapshot; consumers may coalesce or drop these under load.
    Progress(SimStats),
    Complete(RealisticResult),
    Cancelled,
}

/// Clonable cancellation trigger for a running simulation.
#[derive(Debug, Clone)]
pub struct StopToken {
    flag: Arc<AtomicBool>,
}

impl StopToken {
    /// Requests a cooperative stop. The in-flight iteration completes before
    /// the flag is observed; no further events follow the terminal one.
    pub fn request_stop(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }
}

/// Handle to a spawned realistic simulation.
///
/// Dropping the handle requests a stop and joins the worker, so an
/// abandoned run does not spin forever.
pub struct RealisticHandle {
    events: Receiver<SimEvent>,
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl RealisticHandle {
    /// The outbound event stream.
    pub fn events(&self) -> &Receiver<SimEvent> {
        &self.events
    }

    /// A clonable trigger for cancelling this run from any thread.
    pub fn stop_token(&self) -> StopToken {
        StopToken { flag: Arc::clone(&self.stop) }
    }

    /// Requests a cooperative stop.
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Waits for the worker thread to finish.
    pub fn join(mut self) {
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for RealisticHandle {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

/// Spawns the realistic simulation for a fixed ticket on its own thread.
pub fn spawn_realistic(ticket: Ticket, config: RealisticConfig) -> RealisticHandle {
    let (tx, rx) = unbounded();
    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = Arc::clone(&stop);

    let thread = thread::Builder::new()
        .name("realistic-sim".to_string())
        .spawn(move || worker_main(ticket, config, tx, stop_flag))
        .expect("failed to spawn simulation thread");

    RealisticHandle { events: rx, stop, thread: Some(thread) }
}

fn worker_main(
    ticket: Ticket,
    config: RealisticConfig,
    tx: Sender<SimEvent>,
    stop: Arc<AtomicBool>,
) {
    log::debug!("realistic worker started for ticket {}", ticket);
    let mut rng = rand::thread_rng();

    // Send errors mean every receiver is gone; the Drop impl on the handle
    // also raises the stop flag, so the loop unwinds shortly after.
    let outcome = run_realistic(
        &mut rng,
        ticket,
        &config,
        |text, delay| {
            let _ = tx.send(SimEvent::Message {
                text: text.to_string(),
                delay_ms: delay.map(|d| d.as_millis() as u64),
            });
        },
        |stats| {
            let _ = tx.send(SimEvent::Progress(stats));
        },
        || stop.load(Ordering::Relaxed),
    );

    match outcome {
        Outcome::Won(result) => {
            let _ = tx.send(SimEvent::Complete(result));
        }
        Outcome::Cancelled => {
            log::debug!("realistic worker cancelled");
            let _ = tx.send(SimEvent::Cancelled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate_ticket;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::time::Duration;

    #[test]
    fn test_cancelled_run_ends_with_cancelled_event() {
        let ticket = generate_ticket(&mut ChaCha8Rng::seed_from_u64(1));
        let handle = spawn_realistic(ticket, RealisticConfig { line_delay: Duration::ZERO });
        handle.request_stop();

        let events: Vec<SimEvent> = handle.events().iter().collect();
        handle.join();

        assert!(!events.is_empty());
        assert!(matches!(
            events.first(),
            Some(SimEvent::Message { text, .. }) if text.starts_with("Generating tickets")
        ));
        assert_eq!(events.last(), Some(&SimEvent::Cancelled));
        // The terminal event is unique.
        let terminals = events
            .iter()
            .filter(|e| matches!(e, SimEvent::Cancelled | SimEvent::Complete(_)))
            .count();
        assert_eq!(terminals, 1);
    }

    #[test]
    fn test_drop_stops_the_worker() {
        let ticket = generate_ticket(&mut ChaCha8Rng::seed_from_u64(2));
        let handle = spawn_realistic(ticket, RealisticConfig { line_delay: Duration::ZERO });
        // No explicit stop: dropping the handle must not hang.
        drop(handle);
    }

    #[test]
    fn test_stop_token_works_cross_thread() {
        let ticket = generate_ticket(&mut ChaCha8Rng::seed_from_u64(3));
        let handle = spawn_realistic(ticket, RealisticConfig { line_delay: Duration::ZERO });
        let token = handle.stop_token();
        let stopper = std::thread::spawn(move || token.request_stop());
        stopper.join().unwrap();

        let last = handle.events().iter().last();
        assert_eq!(last, Some(SimEvent::Cancelled));
        handle.join();
    }
}
