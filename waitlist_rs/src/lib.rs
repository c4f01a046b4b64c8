//! # lupin-waitlist
//!
//! **Silent waitlist submission** - the logic behind the Lupin landing page
//! email capture, kept free of any DOM so it can be tested on the host.
//!
//! The landing pages post the visitor's email to Mailchimp through a hidden
//! frame. The page never navigates, and the only thing the provider gives back
//! is a `load` event on that frame. [`SilentSubmitController`] turns that weak
//! signal into a definitive outcome:
//!
//! - validates the address before anything leaves the page
//! - dispatches exactly once per valid attempt
//! - races the frame's completion signal against a fallback timer
//! - resolves every attempt to `Succeeded` exactly once
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use lupin_waitlist::{
//!     Attempt, Dispatch, DispatchError, ProviderConfig, SilentSubmitController, Submission,
//!     SubmissionState, Timer,
//! };
//!
//! #[derive(Default)]
//! struct Sent(Vec<Submission>);
//!
//! impl Dispatch for Sent {
//!     fn dispatch(&mut self, submission: &Submission) -> Result<(), DispatchError> {
//!         self.0.push(submission.clone());
//!         Ok(())
//!     }
//! }
//!
//! struct NoTimer;
//!
//! impl Timer for NoTimer {
//!     type Handle = ();
//!     fn arm(&mut self, _attempt: Attempt, _delay: Duration) -> Option<()> { Some(()) }
//!     fn cancel(&mut self, _handle: ()) {}
//! }
//!
//! let mut controller = SilentSubmitController::new(
//!     ProviderConfig::default(),
//!     "mailchimp_iframe",
//!     Sent::default(),
//!     NoTimer,
//! );
//!
//! controller.on_completion_signal(); // blank frame load, ignored
//! controller.submit("a@b.com");
//! assert_eq!(controller.state(), SubmissionState::Submitting);
//!
//! controller.on_completion_signal(); // provider answered
//! assert_eq!(controller.state(), SubmissionState::Succeeded);
//! assert_eq!(controller.email(), "");
//! ```

// ============================================================================
// Core Modules
// ============================================================================

/// Process-wide, init-once analytics bootstrap.
pub mod analytics;

/// Embedded TOML configuration for the landing site.
pub mod config;

/// The submission state machine.
pub mod controller;

/// Outbound channel seam and the dispatched payload.
pub mod dispatch;

/// Minimal email shape check.
pub mod email;

/// User-facing and configuration errors.
pub mod error;

/// Mailchimp list identifiers and derived form fields.
pub mod provider;

/// Submission status.
pub mod state;

/// Fallback timer seam.
pub mod timer;

/// URL path to page variant routing.
pub mod variant;

// ============================================================================
// Re-exports
// ============================================================================

pub use analytics::{AnalyticsConfig, AnalyticsGuard, AnalyticsInit};
pub use config::WaitlistConfig;
pub use controller::SilentSubmitController;
pub use dispatch::{Dispatch, DispatchError, Submission};
pub use error::{ConfigError, SubmitError};
pub use provider::ProviderConfig;
pub use state::SubmissionState;
pub use timer::{Attempt, MAX_SUBMIT_TIMEOUT, Timer};
pub use variant::PageVariant;

#[cfg(feature = "tokio")]
pub use timer::TokioTimer;
