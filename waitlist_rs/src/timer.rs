//! Fallback timer seam.
//!
//! The controller arms one timer per dispatched attempt and cancels it when the
//! frame reports completion first. Whoever owns the controller is responsible
//! for calling `on_timeout` with the fired [`Attempt`] when an armed timer
//! fires.

use std::time::Duration;

/// How long to wait for the frame before assuming the provider accepted.
pub const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_millis(2000);

/// Longest fallback delay accepted from config or the builder.
///
/// Browser `setTimeout` takes an `i32` of milliseconds; this stays well inside it.
pub const MAX_SUBMIT_TIMEOUT: Duration = Duration::from_secs(60);

/// One dispatched submission. A timer hands it back when it fires so a late
/// fire from an earlier attempt cannot resolve a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Attempt(u64);

impl Attempt {
    pub(crate) fn next(self) -> Self {
        Attempt(self.0 + 1)
    }
}

pub trait Timer {
    type Handle;

    /// Schedule one fire of `attempt` after `delay`. `None` when the host
    /// cannot schedule.
    fn arm(&mut self, attempt: Attempt, delay: Duration) -> Option<Self::Handle>;

    fn cancel(&mut self, handle: Self::Handle);
}

#[cfg(feature = "tokio")]
pub use tokio_timer::TokioTimer;

#[cfg(feature = "tokio")]
mod tokio_timer {
    use std::sync::Arc;
    use std::time::Duration;

    use tokio::task::AbortHandle;

    use super::{Attempt, Timer};

    /// Timer for native hosts running inside a tokio runtime.
    ///
    /// Each arm spawns a task that sleeps and then runs `on_fire` with the
    /// armed attempt; cancel aborts the task. A task already past its sleep
    /// when it is aborted may still call `on_fire`, which the controller
    /// ignores for any attempt but the current one.
    #[derive(Clone)]
    pub struct TokioTimer {
        on_fire: Arc<dyn Fn(Attempt) + Send + Sync>,
    }

    impl TokioTimer {
        pub fn new(on_fire: impl Fn(Attempt) + Send + Sync + 'static) -> Self {
            Self {
                on_fire: Arc::new(on_fire),
            }
        }
    }

    impl Timer for TokioTimer {
        type Handle = AbortHandle;

        fn arm(&mut self, attempt: Attempt, delay: Duration) -> Option<AbortHandle> {
            let runtime = match tokio::runtime::Handle::try_current() {
                Ok(runtime) => runtime,
                Err(err) => {
                    tracing::warn!(%err, "no tokio runtime, fallback timer not armed");
                    return None;
                }
            };
            let on_fire = Arc::clone(&self.on_fire);
            let task = runtime.spawn(async move {
                tokio::time::sleep(delay).await;
                on_fire(attempt);
            });
            Some(task.abort_handle())
        }

        fn cancel(&mut self, handle: AbortHandle) {
            handle.abort();
        }
    }
}
