// Classic page (`/`): centred serif hero between two avatar clusters
use leptos::ev;
use leptos::prelude::*;
use lupin_waitlist::PageVariant;

use crate::sections::{
    BOTTOM_RIGHT, CornerCluster, FOOTNOTE_LEAD, FOOTNOTE_TAIL, FormSkin, HEADLINE, Origin, PITCH,
    SuccessSkin, TOP_LEFT, WaitlistForm,
};

const MOBILE_QUERY: &str = "(max-width: 900px)";

const SKIN: FormSkin = FormSkin {
    form: "flex flex-col gap-4",
    row: "flex flex-col gap-4",
    input: "w-full px-6 py-4 text-lg bg-white border-2 rounded-xl outline-none transition-all duration-200 shadow-sm disabled:bg-gray-50 disabled:cursor-not-allowed",
    input_ok: "border-gray-200 focus:border-[#9333ea] text-gray-900 placeholder:text-gray-400",
    input_error: "border-red-300 focus:border-red-500 text-red-900 placeholder:text-red-300",
    placeholder: "Enter your email for early access",
    button: "w-full bg-[#81A6A2] hover:bg-[#6f938f] text-white font-semibold text-lg py-4 px-8 rounded-xl transition-all duration-200 shadow-lg hover:shadow-xl hover:-translate-y-0.5 disabled:opacity-70 disabled:cursor-not-allowed disabled:transform-none flex items-center justify-center",
    spinner: "w-5 h-5 mr-2 animate-spin",
    arrow: false,
    error: "flex items-center text-red-500 text-sm -mt-2",
    error_icon: "w-3 h-3 mr-1",
    footnote: None,
    success: SuccessSkin {
        card: "border border-[#c5d9d5] rounded-xl p-6 flex flex-col items-center animate-in fade-in zoom-in duration-300",
        badge: "mb-3",
        icon: "w-12 h-12 text-[#81A6A2]",
        text: "flex flex-col items-center",
        title_class: "text-lg font-semibold text-[#8303A6]",
        title: "You're in the loop!",
        body_class: "text-[#81A6A2]",
        body: "We'll be in touch soon.",
        button_class: "mt-4 text-sm text-[#81A6A2] hover:text-[#6f938f] underline",
        button: "Sign up with another email",
    },
};

fn viewport_is_mobile() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(MOBILE_QUERY).ok().flatten())
        .is_some_and(|query| query.matches())
}

#[component]
pub fn ClassicPage() -> impl IntoView {
    let (mobile, set_mobile) = signal(viewport_is_mobile());
    let resize = window_event_listener(ev::resize, move |_| {
        set_mobile.set(viewport_is_mobile());
    });
    on_cleanup(move || resize.remove());

    let top_left_scale = Signal::derive(move || if mobile.get() { 0.7 } else { 1.0 });
    let bottom_right_scale = Signal::derive(move || if mobile.get() { 0.8 } else { 1.0 });

    // Extra room on mobile so the bottom cluster clears the footnote.
    let page_style = move || {
        if mobile.get() {
            "min-height: calc(100vh + 120px); padding-bottom: 240px;"
        } else {
            "min-height: max(100vh, 1000px);"
        }
    };

    view! {
        <div
            class="relative min-h-screen overflow-visible bg-white px-6 py-12 pb-48 md:px-12 md:pb-28"
            style=page_style
        >
            <CornerCluster
                circles=TOP_LEFT
                origin=Origin::TopLeft
                width=360.0
                height=230.0
                scale=top_left_scale
                mobile=mobile
            />
            <CornerCluster
                circles=BOTTOM_RIGHT
                origin=Origin::BottomRight
                width=460.0
                height=320.0
                scale=bottom_right_scale
                mobile=mobile
            />

            <main class="relative z-10 w-full max-w-xl mx-auto text-center flex flex-col items-center">
                <div class="mb-12">
                    <img src="/lupin-logo.png" alt="Lupin Logo" class="mx-auto" style="height: 120px; width: auto" />
                </div>

                <div class="space-y-6 mb-12">
                    <h1
                        class="text-4xl md:text-5xl font-bold tracking-tight text-gray-900"
                        style="font-family: 'Playfair Display', serif; line-height: 1.2"
                    >
                        {HEADLINE}
                    </h1>
                    <p class="text-lg md:text-xl text-gray-600">{PITCH}</p>
                </div>

                <div class="w-full max-w-md mx-auto mb-6">
                    <WaitlistForm variant=PageVariant::Classic skin=SKIN />
                </div>

                <div class="text-center space-y-1">
                    <p class="text-sm text-gray-400">{FOOTNOTE_LEAD}</p>
                    <p class="text-sm text-gray-400">{FOOTNOTE_TAIL}</p>
                </div>
            </main>
        </div>
    }
}
