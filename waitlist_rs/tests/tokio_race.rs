//! The completion race on a real (paused) tokio clock.

#![cfg(feature = "tokio")]

use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use lupin_waitlist::{
    Dispatch, DispatchError, ProviderConfig, SilentSubmitController, Submission, SubmissionState,
    TokioTimer,
};

#[derive(Default)]
struct Sent(usize);

impl Dispatch for Sent {
    fn dispatch(&mut self, _submission: &Submission) -> Result<(), DispatchError> {
        self.0 += 1;
        Ok(())
    }
}

type Shared = Arc<Mutex<Option<SilentSubmitController<Sent, TokioTimer>>>>;

fn mount() -> Shared {
    let slot: Shared = Arc::new(Mutex::new(None));
    let weak: Weak<Mutex<Option<SilentSubmitController<Sent, TokioTimer>>>> = Arc::downgrade(&slot);
    let timer = TokioTimer::new(move |attempt| {
        if let Some(slot) = weak.upgrade() {
            if let Some(controller) = slot.lock().unwrap().as_mut() {
                controller.on_timeout(attempt);
            }
        }
    });
    let mut controller =
        SilentSubmitController::new(ProviderConfig::default(), "mailchimp_iframe", Sent::default(), timer);
    controller.on_completion_signal();
    *slot.lock().unwrap() = Some(controller);
    slot
}

fn state(slot: &Shared) -> SubmissionState {
    slot.lock().unwrap().as_ref().unwrap().state()
}

#[tokio::test(start_paused = true)]
async fn timeout_wins_without_frame_load() {
    let slot = mount();
    slot.lock().unwrap().as_mut().unwrap().submit("a@b.com");

    tokio::time::sleep(Duration::from_millis(1999)).await;
    assert_eq!(state(&slot), SubmissionState::Submitting);

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(state(&slot), SubmissionState::Succeeded);
}

#[tokio::test(start_paused = true)]
async fn frame_load_wins_and_timer_stays_quiet() {
    let slot = mount();
    slot.lock().unwrap().as_mut().unwrap().submit("a@b.com");

    tokio::time::sleep(Duration::from_millis(300)).await;
    slot.lock().unwrap().as_mut().unwrap().on_completion_signal();
    assert_eq!(state(&slot), SubmissionState::Succeeded);

    slot.lock().unwrap().as_mut().unwrap().reset();
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(state(&slot), SubmissionState::Idle);
}

#[tokio::test(start_paused = true)]
async fn unmount_cancels_pending_timer() {
    let slot = mount();
    slot.lock().unwrap().as_mut().unwrap().submit("a@b.com");

    let controller = slot.lock().unwrap().take();
    drop(controller);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(slot.lock().unwrap().is_none());
}
