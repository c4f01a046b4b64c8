//! End-to-end walks through the waitlist form lifecycle using only the public API.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use lupin_waitlist::{
    Attempt, Dispatch, DispatchError, PageVariant, SilentSubmitController, Submission, SubmissionState,
    SubmitError, Timer, WaitlistConfig,
};

/// Shared log of everything that left the page.
#[derive(Clone, Default)]
struct Outbox(Rc<RefCell<Vec<Submission>>>);

impl Dispatch for Outbox {
    fn dispatch(&mut self, submission: &Submission) -> Result<(), DispatchError> {
        self.0.borrow_mut().push(submission.clone());
        Ok(())
    }
}

/// Single-slot fake timer; the test decides when it fires.
#[derive(Clone, Default)]
struct Alarm(Rc<RefCell<Option<(Attempt, Duration)>>>);

impl Alarm {
    fn armed(&self) -> Option<Duration> {
        self.0.borrow().map(|(_, delay)| delay)
    }

    /// Fires the armed slot, handing back the attempt it belongs to.
    fn ring(&self) -> Attempt {
        let (attempt, _) = self.0.borrow_mut().take().expect("alarm was not armed");
        attempt
    }
}

impl Timer for Alarm {
    type Handle = ();

    fn arm(&mut self, attempt: Attempt, delay: Duration) -> Option<()> {
        *self.0.borrow_mut() = Some((attempt, delay));
        Some(())
    }

    fn cancel(&mut self, _handle: ()) {
        *self.0.borrow_mut() = None;
    }
}

fn page(variant: PageVariant) -> (SilentSubmitController<Outbox, Alarm>, Outbox, Alarm) {
    let config = WaitlistConfig::default();
    let outbox = Outbox::default();
    let alarm = Alarm::default();
    let mut controller = SilentSubmitController::new(
        config.provider.clone(),
        variant.frame_name(),
        outbox.clone(),
        alarm.clone(),
    )
    .with_timeout(config.submit_timeout());
    // The hidden frame's own about:blank load arrives right after mount.
    controller.on_completion_signal();
    (controller, outbox, alarm)
}

#[test]
fn invalid_address_scenario() {
    let (mut controller, outbox, _) = page(PageVariant::Classic);

    controller.submit("not-an-email");

    assert_eq!(
        controller.state(),
        SubmissionState::Failed(SubmitError::InvalidAddress)
    );
    assert_eq!(
        controller.error_message().as_deref(),
        Some("Please enter a valid email address")
    );
    assert!(outbox.0.borrow().is_empty());
}

#[test]
fn completion_signal_scenario() {
    let (mut controller, outbox, alarm) = page(PageVariant::Split);

    assert_eq!(controller.submit("a@b.com"), SubmissionState::Submitting);
    assert_eq!(alarm.armed(), Some(Duration::from_millis(2000)));

    controller.on_completion_signal();

    assert_eq!(controller.state(), SubmissionState::Succeeded);
    assert_eq!(controller.email(), "");
    assert_eq!(alarm.armed(), None);

    let sent = outbox.0.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].target, "mailchimp_iframe_3");
    assert_eq!(sent[0].field("EMAIL"), Some("a@b.com"));
    assert_eq!(sent[0].field("u"), Some("5708d487c290f03aaa16cbbd7"));
    assert_eq!(sent[0].field("id"), Some("4df9c7ef2c"));
    assert_eq!(sent[0].field("f_id"), Some("00e0ede4f0"));
}

#[test]
fn timeout_scenario() {
    let (mut controller, _, alarm) = page(PageVariant::Meadow);

    controller.submit("a@b.com");
    assert_eq!(alarm.armed(), Some(Duration::from_millis(2000)));

    // No frame load; the alarm goes off.
    controller.on_timeout(alarm.ring());

    assert_eq!(controller.state(), SubmissionState::Succeeded);
    assert_eq!(controller.email(), "");

    // A very late provider response changes nothing.
    controller.on_completion_signal();
    assert_eq!(controller.state(), SubmissionState::Succeeded);
}

#[test]
fn fail_edit_submit_reset_cycle() {
    let (mut controller, outbox, _) = page(PageVariant::Spotlight);

    controller.submit("someone@");
    assert!(controller.state().is_failed());

    controller.edit_email("someone@lupin.app");
    assert_eq!(controller.state(), SubmissionState::Idle);

    let typed = controller.email().to_string();
    controller.submit(&typed);
    controller.on_completion_signal();
    assert_eq!(controller.state(), SubmissionState::Succeeded);

    controller.reset();
    assert_eq!(controller.state(), SubmissionState::Idle);
    assert_eq!(controller.email(), "");
    assert_eq!(outbox.0.borrow().len(), 1);
}

#[test]
fn valid_shapes_never_fail() {
    for address in ["a@b.co", "x.y@z.io", "hi+waitlist@lupin.app", " padded@space.org "] {
        let (mut controller, _, alarm) = page(PageVariant::Classic);
        assert_eq!(controller.submit(address), SubmissionState::Submitting, "{address}");
        controller.on_timeout(alarm.ring());
        assert_eq!(controller.state(), SubmissionState::Succeeded, "{address}");
    }
}

#[test]
fn decoy_filled_right_before_submit_is_swallowed() {
    let (mut controller, outbox, alarm) = page(PageVariant::Classic);

    // Autofill wrote the hidden field without any input event reaching us;
    // the page copies the live value in on submit.
    controller.edit_honeypot("https://spam.example");
    assert_eq!(controller.submit("bot@spam.com"), SubmissionState::Succeeded);

    assert!(outbox.0.borrow().is_empty());
    assert_eq!(alarm.armed(), None);
}
