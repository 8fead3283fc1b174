//! Background guess processor.
//!
//! Evaluation itself is O(1), but it still runs on a dedicated thread so the
//! UI thread never waits on guess handling. Communication is a pair of FIFO
//! channels (guesses in, results out); results come back in submission order
//! because there is a single processor thread and a single channel pair.
//!
//! The processor never dies from a fault: a panic during evaluation is caught,
//! logged, and converted into a diagnostic [`GuessResult::Invalid`].

use std::{
    panic::{self, AssertUnwindSafe},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::{self, RecvTimeoutError, TryRecvError},
    },
    thread::JoinHandle,
    time::Duration,
};

use hilo_core::{GuessResult, InvalidReason, PendingGuess};

/// How long the processor waits on its inbound channel before re-checking the
/// shutdown flag.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Error surfaced when the processor channels are gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("guess processor disconnected")]
pub struct Disconnected;

/// Handle to the background evaluation thread.
///
/// Dropping the handle signals shutdown and joins the thread; the thread
/// notices within one poll interval.
#[derive(Debug)]
pub struct GuessProcessor {
    guess_tx: mpsc::Sender<PendingGuess>,
    result_rx: mpsc::Receiver<GuessResult>,
    shutdown: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl GuessProcessor {
    /// Spawns the processor thread with empty queues.
    ///
    /// # Panics
    ///
    /// Panics if the OS refuses to spawn the thread; that only happens during
    /// process startup, where it is fatal by design.
    #[must_use]
    pub fn spawn() -> Self {
        let (guess_tx, guess_rx) = mpsc::channel::<PendingGuess>();
        let (result_tx, result_rx) = mpsc::channel::<GuessResult>();
        let shutdown = Arc::new(AtomicBool::new(false));

        let thread_shutdown = Arc::clone(&shutdown);
        let thread = std::thread::Builder::new()
            .name("guess-processor".to_owned())
            .spawn(move || run(&guess_rx, &result_tx, &thread_shutdown))
            .expect("failed to spawn guess processor thread");

        Self {
            guess_tx,
            result_rx,
            shutdown,
            thread: Some(thread),
        }
    }

    /// Queues a guess for evaluation.
    pub fn submit(&self, pending: PendingGuess) -> Result<(), Disconnected> {
        self.guess_tx.send(pending).map_err(|_| Disconnected)
    }

    /// Non-blocking check for a completed result.
    pub fn poll(&self) -> Result<Option<GuessResult>, Disconnected> {
        match self.result_rx.try_recv() {
            Ok(result) => Ok(Some(result)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(Disconnected),
        }
    }
}

impl Drop for GuessProcessor {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn run(
    guess_rx: &mpsc::Receiver<PendingGuess>,
    result_tx: &mpsc::Sender<GuessResult>,
    shutdown: &AtomicBool,
) {
    log::info!("guess processor started");
    while !shutdown.load(Ordering::Relaxed) {
        match guess_rx.recv_timeout(POLL_INTERVAL) {
            Ok(pending) => {
                let result = evaluate_guarded(move || pending.evaluate());
                if result_tx.send(result).is_err() {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    log::info!("guess processor stopped");
}

/// Runs an evaluation, converting a panic into a diagnostic `Invalid` result
/// so the processor thread survives any fault.
fn evaluate_guarded<F>(eval: F) -> GuessResult
where
    F: FnOnce() -> GuessResult,
{
    match panic::catch_unwind(AssertUnwindSafe(eval)) {
        Ok(result) => result,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            log::error!("guess evaluation panicked: {message}");
            GuessResult::Invalid {
                reason: InvalidReason::Fault(message),
            }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    fn wait_for_result(processor: &GuessProcessor) -> GuessResult {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(result) = processor.poll().expect("processor alive") {
                return result;
            }
            assert!(Instant::now() < deadline, "timed out waiting for result");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    fn pending(raw: &str, secret: Option<u32>, attempts: u32) -> PendingGuess {
        PendingGuess {
            raw: raw.to_owned(),
            secret,
            attempts,
        }
    }

    #[test]
    fn sequential_guesses_yield_ordered_results() {
        let processor = GuessProcessor::spawn();
        let secret = Some(77_777);

        let mut attempts = 0;
        let mut results = Vec::new();
        for raw in ["10", "20", "30"] {
            processor.submit(pending(raw, secret, attempts)).unwrap();
            let result = wait_for_result(&processor);
            attempts = result.attempts().expect("scored result");
            results.push(result);
        }

        assert_eq!(
            results,
            vec![
                GuessResult::TooLow {
                    guess: 10,
                    attempts: 1,
                },
                GuessResult::TooLow {
                    guess: 20,
                    attempts: 2,
                },
                GuessResult::TooLow {
                    guess: 30,
                    attempts: 3,
                },
            ]
        );
    }

    #[test]
    fn burst_submissions_preserve_fifo_order() {
        let processor = GuessProcessor::spawn();
        let secret = Some(1);

        for (attempts, raw) in ["2", "3", "4"].into_iter().enumerate() {
            processor
                .submit(pending(raw, secret, u32::try_from(attempts).unwrap()))
                .unwrap();
        }

        let guesses: Vec<_> = (0..3)
            .map(|_| match wait_for_result(&processor) {
                GuessResult::TooHigh { guess, .. } => guess,
                other => panic!("unexpected result: {other:?}"),
            })
            .collect();
        assert_eq!(guesses, vec![2, 3, 4]);
    }

    #[test]
    fn missing_secret_yields_invalid_result() {
        let processor = GuessProcessor::spawn();
        processor.submit(pending("10", None, 0)).unwrap();

        assert_eq!(
            wait_for_result(&processor),
            GuessResult::Invalid {
                reason: InvalidReason::NoActiveGame,
            }
        );
    }

    #[test]
    fn panics_become_invalid_results() {
        let result = evaluate_guarded(|| panic!("boom"));
        assert_eq!(
            result,
            GuessResult::Invalid {
                reason: InvalidReason::Fault("boom".to_owned()),
            }
        );
    }

    #[test]
    fn drop_shuts_the_processor_down() {
        let processor = GuessProcessor::spawn();
        let started = Instant::now();
        drop(processor);
        // Join must complete within a couple of poll intervals.
        assert!(started.elapsed() < Duration::from_secs(2));
    }
}
