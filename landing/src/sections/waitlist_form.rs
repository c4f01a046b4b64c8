//! The waitlist form every page variant renders.
//!
//! Each mount owns a fresh [`FormController`]. The hidden frame stays mounted
//! for the component's whole life so its initial blank load is seen exactly
//! once; the form itself swaps with the success card.

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use lupin_waitlist::provider::EMAIL_FIELD;
use lupin_waitlist::{PageVariant, SilentSubmitController, SubmissionState, WaitlistConfig};

use super::icons::{ALERT_CIRCLE, ARROW_RIGHT, CHECK_CIRCLE, Icon, LOADER};
use crate::bridge::{BrowserTimer, FormController, FrameDispatch};

/// Per-variant classes and copy for the form.
#[derive(Debug, Clone, Copy)]
pub struct FormSkin {
    pub form: &'static str,
    pub row: &'static str,
    pub input: &'static str,
    pub input_ok: &'static str,
    pub input_error: &'static str,
    pub placeholder: &'static str,
    pub button: &'static str,
    pub spinner: &'static str,
    /// Trailing arrow on the idle button label.
    pub arrow: bool,
    pub error: &'static str,
    pub error_icon: &'static str,
    /// Line rendered inside the form, under the input row.
    pub footnote: Option<(&'static str, &'static str)>,
    pub success: SuccessSkin,
}

#[derive(Debug, Clone, Copy)]
pub struct SuccessSkin {
    pub card: &'static str,
    pub badge: &'static str,
    pub icon: &'static str,
    pub text: &'static str,
    pub title_class: &'static str,
    pub title: &'static str,
    pub body_class: &'static str,
    pub body: &'static str,
    pub button_class: &'static str,
    pub button: &'static str,
}

/// Strings the form markup needs from the provider config.
struct FormMarkup {
    action: String,
    honeypot: String,
    hidden: Vec<(&'static str, String)>,
}

/// Runs controller operations and mirrors the result into signals.
#[derive(Clone, Copy)]
struct FormHandle {
    slot: StoredValue<Option<FormController>, LocalStorage>,
    set_state: WriteSignal<SubmissionState>,
    set_email: WriteSignal<String>,
}

impl FormHandle {
    fn drive<R>(self, op: impl FnOnce(&mut FormController) -> R) -> Option<R> {
        // Signals are written after the slot borrow ends so effects that run
        // synchronously never see it locked.
        let (out, state, email) = self
            .slot
            .try_update_value(|slot| {
                slot.as_mut().map(|controller| {
                    let out = op(controller);
                    (out, controller.state(), controller.email().to_owned())
                })
            })
            .flatten()?;

        self.set_state.set(state);
        self.set_email.set(email);
        Some(out)
    }
}

#[component]
pub fn WaitlistForm(variant: PageVariant, skin: FormSkin) -> impl IntoView {
    let config = use_context::<WaitlistConfig>().unwrap_or_default();
    let form_ref = NodeRef::<html::Form>::new();
    let frame_ref = NodeRef::<html::Iframe>::new();
    let decoy_ref = NodeRef::<html::Input>::new();
    let (state, set_state) = signal(SubmissionState::Idle);
    let (email, set_email) = signal(String::new());

    let slot = StoredValue::new_local(None::<FormController>);
    let handle = FormHandle {
        slot,
        set_state,
        set_email,
    };

    let timer = BrowserTimer::new(move |attempt| {
        handle.drive(|controller| controller.on_timeout(attempt));
    });
    let controller = SilentSubmitController::new(
        config.provider.clone(),
        variant.frame_name(),
        FrameDispatch::new(form_ref, frame_ref, config.provider.honeypot_name()),
        timer,
    )
    .with_timeout(config.submit_timeout());
    slot.set_value(Some(controller));

    on_cleanup(move || {
        // Dropping the controller tears it down and clears its timer.
        slot.try_update_value(Option::take);
    });

    let markup = StoredValue::new(FormMarkup {
        action: config.provider.action_url(),
        honeypot: config.provider.honeypot_name(),
        hidden: config
            .provider
            .hidden_fields()
            .iter()
            .map(|(name, value)| (*name, (*value).to_owned()))
            .collect(),
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // Autofill can fill the decoy without firing `input`.
        let decoy = decoy_ref
            .get_untracked()
            .map(|input| input.value())
            .unwrap_or_default();
        handle.drive(|controller| {
            controller.edit_honeypot(decoy);
            let typed = controller.email().to_owned();
            controller.submit(&typed)
        });
    };

    let failed = move || state.get().is_failed();
    let busy = move || state.get().is_busy();

    let success_card = move || {
        let s = skin.success;
        view! {
            <div class=s.card>
                <div class=s.badge>
                    <Icon path=CHECK_CIRCLE class=s.icon />
                </div>
                <div class=s.text>
                    <p class=s.title_class>{s.title}</p>
                    <p class=s.body_class>{s.body}</p>
                </div>
                <button
                    type="button"
                    class=s.button_class
                    on:click=move |_| {
                        handle.drive(FormController::reset);
                    }
                >
                    {s.button}
                </button>
            </div>
        }
    };

    view! {
        <iframe
            node_ref=frame_ref
            name=variant.frame_name()
            title=variant.frame_title()
            style="display: none"
            aria-hidden="true"
            on:load=move |_| {
                handle.drive(FormController::on_completion_signal);
            }
        ></iframe>
        <Show
            when=move || state.get() != SubmissionState::Succeeded
            fallback=success_card
        >
            <form
                node_ref=form_ref
                on:submit=on_submit
                action=markup.with_value(|m| m.action.clone())
                method="post"
                target=variant.frame_name()
                class=skin.form
                novalidate=true
            >
                {markup
                    .with_value(|m| {
                        m.hidden
                            .iter()
                            .map(|(name, value)| {
                                view! { <input type="hidden" name=*name value=value.clone() /> }
                            })
                            .collect_view()
                    })}
                <div style="position: absolute; left: -5000px" aria-hidden="true">
                    <input
                        node_ref=decoy_ref
                        type="text"
                        name=markup.with_value(|m| m.honeypot.clone())
                        tabindex="-1"
                        autocomplete="off"
                        value=""
                    />
                </div>
                <div class=skin.row>
                    <input
                        name=EMAIL_FIELD
                        type="email"
                        placeholder=skin.placeholder
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            handle.drive(|controller| controller.edit_email(event_target_value(&ev)));
                        }
                        disabled=busy
                        required=true
                        autocomplete="email"
                        inputmode="email"
                        spellcheck="false"
                        aria-invalid=move || if failed() { "true" } else { "false" }
                        aria-describedby=move || failed().then_some(variant.error_id())
                        class=move || {
                            let tone = if failed() { skin.input_error } else { skin.input_ok };
                            format!("{} {tone}", skin.input)
                        }
                    />
                    <button type="submit" disabled=busy class=skin.button>
                        {move || {
                            if busy() {
                                view! {
                                    <Icon path=LOADER class=skin.spinner />
                                    "Joining..."
                                }
                                    .into_any()
                            } else {
                                view! {
                                    "Get Early Access"
                                    {skin.arrow.then(|| view! { <Icon path=ARROW_RIGHT class="h-5 w-5" /> })}
                                }
                                    .into_any()
                            }
                        }}
                    </button>
                </div>
                {skin
                    .footnote
                    .map(|(class, text)| view! { <p class=class>{text}</p> })}
                <Show when=failed>
                    <div
                        id=variant.error_id()
                        class=skin.error
                        role="alert"
                        aria-live="assertive"
                    >
                        <Icon path=ALERT_CIRCLE class=skin.error_icon />
                        {move || state.get().error_message().unwrap_or_default()}
                    </div>
                </Show>
            </form>
        </Show>
    }
}
