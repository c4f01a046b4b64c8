//! The submission state machine.
//!
//! ```text
//! Idle --submit(valid)--> Submitting --completion | timeout--> Succeeded --reset--> Idle
//! Idle --submit(invalid)--> Failed --edit--> Idle
//! ```
//!
//! Two sources race to finish a dispatched attempt: the hidden frame's load
//! event (`on_completion_signal`) and the fallback timer (`on_timeout`). The
//! pending flag lets exactly one of them resolve it; the loser is a no-op.
//! Timer fires carry the [`Attempt`] they were armed for, and a fire for any
//! attempt other than the latest dispatched one is dropped.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::dispatch::Dispatch;
use crate::email;
use crate::error::SubmitError;
use crate::provider::ProviderConfig;
use crate::state::SubmissionState;
use crate::timer::{Attempt, DEFAULT_SUBMIT_TIMEOUT, MAX_SUBMIT_TIMEOUT, Timer};

pub struct SilentSubmitController<D, T: Timer> {
    provider: ProviderConfig,
    target: String,
    timeout: Duration,
    dispatch: D,
    timer: T,
    state: SubmissionState,
    email: String,
    honeypot: String,
    /// A post left the page and nothing has resolved it yet.
    pending: bool,
    /// The frame's own blank load has been seen.
    frame_load_seen: bool,
    /// Latest dispatched attempt.
    attempt: Attempt,
    armed: Option<(Attempt, T::Handle)>,
    closed: bool,
}

impl<D, T: Timer> SilentSubmitController<D, T> {
    /// `target` is the `name` of the hidden frame the form posts into.
    pub fn new(provider: ProviderConfig, target: impl Into<String>, dispatch: D, timer: T) -> Self {
        Self {
            provider,
            target: target.into(),
            timeout: DEFAULT_SUBMIT_TIMEOUT,
            dispatch,
            timer,
            state: SubmissionState::Idle,
            email: String::new(),
            honeypot: String::new(),
            pending: false,
            frame_load_seen: false,
            attempt: Attempt::default(),
            armed: None,
            closed: false,
        }
    }

    /// Fallback delay, capped at [`MAX_SUBMIT_TIMEOUT`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        if timeout > MAX_SUBMIT_TIMEOUT {
            warn!(?timeout, "submit timeout capped");
        }
        self.timeout = timeout.min(MAX_SUBMIT_TIMEOUT);
        self
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn error_message(&self) -> Option<String> {
        self.state.error_message()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn provider(&self) -> &ProviderConfig {
        &self.provider
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatch
    }

    /// Replace the input value. Clears a previous validation error.
    pub fn edit_email(&mut self, value: impl Into<String>) {
        if self.closed {
            return;
        }
        self.email = value.into();
        if self.state.is_failed() {
            self.transition(SubmissionState::Idle);
        }
    }

    /// Replace the decoy field value. Humans never see that input.
    pub fn edit_honeypot(&mut self, value: impl Into<String>) {
        if self.closed {
            return;
        }
        self.honeypot = value.into();
    }

    /// Allow another signup after a successful one.
    pub fn reset(&mut self) {
        if self.closed || self.state != SubmissionState::Succeeded {
            return;
        }
        self.email.clear();
        self.transition(SubmissionState::Idle);
    }

    /// The hidden frame finished loading something.
    pub fn on_completion_signal(&mut self) {
        if self.closed {
            return;
        }
        if !self.frame_load_seen {
            self.frame_load_seen = true;
            debug!(frame = %self.target, "initial frame load ignored");
            return;
        }
        if !self.pending {
            debug!(frame = %self.target, "frame load with nothing pending");
            return;
        }
        if let Some((_, handle)) = self.armed.take() {
            self.timer.cancel(handle);
        }
        self.resolve("frame load");
    }

    /// The fallback timer armed by `submit` for `attempt` fired.
    pub fn on_timeout(&mut self, attempt: Attempt) {
        if self.closed {
            return;
        }
        // That timer has fired, there is nothing left to cancel.
        if self.armed.as_ref().is_some_and(|(armed, _)| *armed == attempt) {
            self.armed = None;
        }
        if attempt != self.attempt {
            debug!(frame = %self.target, ?attempt, "timeout for an earlier attempt ignored");
            return;
        }
        if !self.pending {
            return;
        }
        self.resolve("timeout");
    }

    /// Cancel any armed timer and ignore everything from now on.
    pub fn teardown(&mut self) {
        if self.closed {
            return;
        }
        if let Some((_, handle)) = self.armed.take() {
            self.timer.cancel(handle);
        }
        self.pending = false;
        self.closed = true;
        debug!(frame = %self.target, "controller torn down");
    }

    fn resolve(&mut self, via: &'static str) {
        self.pending = false;
        self.email.clear();
        self.transition(SubmissionState::Succeeded);
        info!(frame = %self.target, via, "waitlist submission resolved");
    }

    fn transition(&mut self, next: SubmissionState) {
        debug!(
            frame = %self.target,
            from = self.state.as_label(),
            to = next.as_label(),
            "submission state"
        );
        self.state = next;
    }
}

impl<D: Dispatch, T: Timer> SilentSubmitController<D, T> {
    /// Validate `email` and, if it passes, post it through the hidden frame.
    ///
    /// Ignored while an attempt is already in flight.
    pub fn submit(&mut self, email: &str) -> SubmissionState {
        if self.closed {
            return self.state;
        }
        if self.state == SubmissionState::Submitting {
            debug!(frame = %self.target, "submit ignored, attempt in flight");
            return self.state;
        }

        self.email = email.to_string();
        self.transition(SubmissionState::Validating);

        let Some(address) = email::normalize(email) else {
            self.transition(SubmissionState::Failed(SubmitError::InvalidAddress));
            return self.state;
        };

        if !self.honeypot.is_empty() {
            info!(frame = %self.target, "decoy field filled, accepting without dispatch");
            self.email.clear();
            self.transition(SubmissionState::Succeeded);
            return self.state;
        }

        let submission = self.provider.submission(address, &self.honeypot, &self.target);
        self.attempt = self.attempt.next();
        self.pending = true;
        self.transition(SubmissionState::Submitting);

        match self.dispatch.dispatch(&submission) {
            Ok(()) => {
                info!(frame = %self.target, "waitlist submission dispatched");
                let attempt = self.attempt;
                self.armed = self
                    .timer
                    .arm(attempt, self.timeout)
                    .map(|handle| (attempt, handle));
                if self.armed.is_none() {
                    warn!(
                        frame = %self.target,
                        "fallback timer unavailable, waiting on frame load only"
                    );
                }
            }
            Err(err) => {
                warn!(frame = %self.target, %err, "waitlist submission not sent");
                self.pending = false;
                self.transition(SubmissionState::Failed(SubmitError::SurfaceUnavailable));
            }
        }
        self.state
    }
}

impl<D, T: Timer> Drop for SilentSubmitController<D, T> {
    fn drop(&mut self) {
        self.teardown();
    }
}
