//! Browser implementations of the controller's dispatch and timer seams.

use std::rc::Rc;
use std::time::Duration;

use leptos::html;
use leptos::prelude::*;
use lupin_waitlist::{Attempt, Dispatch, DispatchError, SilentSubmitController, Submission, Timer};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

pub type FormController = SilentSubmitController<FrameDispatch, BrowserTimer>;

/// Posts the rendered form into the hidden frame named by the submission.
///
/// `HTMLFormElement.submit()` skips the form's own submit event, so this never
/// re-enters the page's submit handler. The decoy input is posted exactly as
/// the DOM holds it; dispatch never writes to it.
#[derive(Clone)]
pub struct FrameDispatch {
    form: NodeRef<html::Form>,
    frame: NodeRef<html::Iframe>,
    decoy: String,
}

impl FrameDispatch {
    pub fn new(
        form: NodeRef<html::Form>,
        frame: NodeRef<html::Iframe>,
        decoy: impl Into<String>,
    ) -> Self {
        Self {
            form,
            frame,
            decoy: decoy.into(),
        }
    }
}

/// Submission fields the dispatcher copies into form inputs, decoy excluded.
fn fields_to_write<'a>(
    submission: &'a Submission,
    decoy: &'a str,
) -> impl Iterator<Item = &'a (String, String)> + 'a {
    submission.fields.iter().filter(move |(name, _)| name.as_str() != decoy)
}

/// `setTimeout` takes an `i32` millisecond delay.
fn browser_delay(delay: Duration) -> Option<Duration> {
    i32::try_from(delay.as_millis()).ok().map(|_| delay)
}

impl Dispatch for FrameDispatch {
    fn dispatch(&mut self, submission: &Submission) -> Result<(), DispatchError> {
        let form = self.form.get_untracked().ok_or(DispatchError::Unmounted)?;
        if self.frame.get_untracked().is_none() {
            return Err(DispatchError::Unmounted);
        }

        form.set_action(&submission.action);
        form.set_method("post");
        form.set_target(&submission.target);

        for (name, value) in fields_to_write(submission, &self.decoy) {
            let input = form
                .query_selector(&format!("input[name=\"{name}\"]"))
                .ok()
                .flatten()
                .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
                .ok_or_else(|| DispatchError::Rejected(format!("form has no `{name}` input")))?;
            input.set_value(value);
        }

        form.submit()
            .map_err(|err| DispatchError::Rejected(format!("{err:?}")))
    }
}

/// `setTimeout`-backed fallback timer.
pub struct BrowserTimer {
    on_fire: Rc<dyn Fn(Attempt)>,
}

impl BrowserTimer {
    pub fn new(on_fire: impl Fn(Attempt) + 'static) -> Self {
        Self {
            on_fire: Rc::new(on_fire),
        }
    }
}

impl Timer for BrowserTimer {
    type Handle = TimeoutHandle;

    fn arm(&mut self, attempt: Attempt, delay: Duration) -> Option<TimeoutHandle> {
        let Some(delay) = browser_delay(delay) else {
            tracing::warn!(?delay, "delay too long for setTimeout");
            return None;
        };
        let on_fire = Rc::clone(&self.on_fire);
        match set_timeout_with_handle(move || on_fire(attempt), delay) {
            Ok(handle) => Some(handle),
            Err(err) => {
                tracing::warn!(?err, "setTimeout refused");
                None
            }
        }
    }

    fn cancel(&mut self, handle: TimeoutHandle) {
        handle.clear();
    }
}

#[cfg(test)]
mod tests {
    use lupin_waitlist::ProviderConfig;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn decoy_input_is_left_as_the_dom_holds_it() {
        let provider = ProviderConfig::default();
        let decoy = provider.honeypot_name();
        let submission = provider.submission("a@b.com", "", "mailchimp_iframe");

        let written: Vec<&str> = fields_to_write(&submission, &decoy)
            .map(|(name, _)| name.as_str())
            .collect();

        assert_eq!(written, vec!["u", "id", "f_id", "EMAIL"]);
    }

    #[test]
    fn delay_past_i32_millis_is_refused() {
        assert_eq!(
            browser_delay(Duration::from_millis(2000)),
            Some(Duration::from_millis(2000))
        );
        assert_eq!(browser_delay(Duration::from_millis(i32::MAX as u64 + 1)), None);
        assert_eq!(browser_delay(Duration::MAX), None);
    }
}
