// Spotlight page (`/4`): skewed violet band, centred form, floating avatars
use leptos::prelude::*;
use lupin_waitlist::PageVariant;

use crate::sections::{FOOTNOTE, FormSkin, PITCH, SuccessSkin, WaitlistForm};

const SKIN: FormSkin = FormSkin {
    form: "flex flex-col gap-3 rounded-3xl bg-white/80 p-4 shadow-xl ring-1 ring-black/5 backdrop-blur",
    row: "flex flex-col items-center gap-3 sm:flex-row",
    input: "w-full rounded-full border-2 bg-white py-3 text-base text-[#120731] placeholder:text-[#9a8fb1] shadow-sm transition focus:border-[#5b32ff] focus:outline-none focus:ring-2 focus:ring-[#c9b8ff] sm:flex-1 sm:text-lg sm:px-5",
    input_ok: "border-transparent",
    input_error: "border-red-400",
    placeholder: "Enter your email",
    button: "flex w-full items-center justify-center gap-2 rounded-full bg-gradient-to-r from-[#6b4ff6] to-[#8b68ff] px-6 py-3 text-base font-semibold text-white shadow-[0_18px_50px_rgba(107,79,246,0.35)] transition hover:-translate-y-0.5 hover:shadow-[0_20px_60px_rgba(107,79,246,0.45)] disabled:translate-y-0 disabled:opacity-70 sm:w-auto sm:px-8 sm:text-lg",
    spinner: "h-5 w-5 animate-spin",
    arrow: true,
    error: "flex items-center gap-2 text-sm text-red-500",
    error_icon: "h-4 w-4",
    footnote: Some(("text-center text-sm text-[#5c4f73]", FOOTNOTE)),
    success: SuccessSkin {
        card: "flex items-center gap-3 rounded-2xl bg-white shadow-lg px-4 py-4 ring-1 ring-black/5",
        badge: "flex h-11 w-11 items-center justify-center rounded-full bg-[#8ae45a] text-[#145b1b]",
        icon: "h-6 w-6",
        text: "text-left",
        title_class: "text-base font-semibold text-[#120731]",
        title: "You\u{2019}re on the list!",
        body_class: "text-sm text-[#5c4f73]",
        body: "We\u{2019}ll follow up with early access soon.",
        button_class: "ml-auto text-sm font-semibold text-[#5b32ff] underline decoration-2 decoration-transparent transition hover:decoration-[#5b32ff]",
        button: "Add another",
    },
};

const SCRIPT_FONT: &str = "font-family: 'Pacifico', 'Brush Script MT', cursive";

/// One ringed avatar floating beside the form.
struct Floating {
    src: &'static str,
    alt: &'static str,
    frame: &'static str,
    image: &'static str,
    style: &'static str,
}

const LEFT: &[Floating] = &[
    Floating {
        src: "/avatars/1.png",
        alt: "Curious child",
        frame: "absolute h-24 w-24 rounded-full bg-white shadow-xl ring-4 ring-[#6b4ff6]/20",
        image: "h-24 w-24 rounded-full object-cover",
        style: "left: -28px; top: 0px",
    },
    Floating {
        src: "/avatars/2.png",
        alt: "Smiling child",
        frame: "absolute h-18 w-18 rounded-full bg-white shadow-xl ring-4 ring-[#6b4ff6]/15",
        image: "h-16 w-16 rounded-full object-cover",
        style: "left: 52px; top: 300px",
    },
    Floating {
        src: "/avatars/3.png",
        alt: "Playful child",
        frame: "absolute h-20 w-20 rounded-full bg-white shadow-xl ring-4 ring-[#6b4ff6]/25",
        image: "h-[72px] w-[72px] rounded-full object-cover",
        style: "left: -74px; top: 600px",
    },
];

const RIGHT: &[Floating] = &[
    Floating {
        src: "/avatars/7.png",
        alt: "Happy child",
        frame: "absolute flex h-24 w-24 items-center justify-center rounded-full bg-white shadow-xl ring-4 ring-[#6b4ff6]/15",
        image: "h-20 w-20 rounded-full object-cover",
        style: "right: 0px; bottom: -140px",
    },
    Floating {
        src: "/avatars/5.png",
        alt: "Joyful child",
        frame: "absolute flex h-16 w-16 items-center justify-center rounded-full bg-white shadow-xl ring-4 ring-[#6b4ff6]/15",
        image: "h-14 w-14 rounded-full object-cover",
        style: "right: 120px; top: 100px",
    },
    Floating {
        src: "/avatars/9.png",
        alt: "Cheerful child",
        frame: "absolute flex h-[72px] w-[72px] items-center justify-center rounded-full bg-white shadow-xl ring-4 ring-[#6b4ff6]/20",
        image: "h-[60px] w-[60px] rounded-full object-cover",
        style: "right: -140px; top: 40px",
    },
    Floating {
        src: "/avatars/9.png",
        alt: "Smiling kid",
        frame: "relative h-44 w-44 overflow-hidden rounded-full bg-white shadow-[0_22px_50px_rgba(18,7,49,0.12)] ring-4 ring-[#f5a500]/20",
        image: "h-full w-full object-cover",
        style: "right: 0px; bottom: 240px",
    },
];

fn floating(avatars: &'static [Floating]) -> impl IntoView {
    avatars
        .iter()
        .map(|avatar| {
            view! {
                <div class=avatar.frame style=avatar.style>
                    <img src=avatar.src alt=avatar.alt class=avatar.image />
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn SpotlightPage() -> impl IntoView {
    view! {
        <div class="relative min-h-screen overflow-hidden bg-[#fdfcff] text-[#120731] flex items-center justify-center">
            <div class="pointer-events-none absolute left-[-32%] top-[-12%] h-[130%] w-[55%] -skew-x-[14deg] bg-gradient-to-b from-[#6b4ff6] via-[#7a5eff] to-[#9a7bff] shadow-[0_0_80px_rgba(107,79,246,0.35)]"></div>
            <div class="pointer-events-none absolute right-32 top-36 h-8 w-8 rounded-full bg-[#f5a500]/30"></div>
            <div class="pointer-events-none absolute right-[12%] bottom-10 h-24 w-24 rounded-full bg-[#d6ceff]/70 blur-[2px]"></div>

            <div class="relative mx-auto max-w-5xl px-6 py-24 lg:py-28">
                <div class="relative grid place-items-center">
                    <div class="w-full max-w-[740px] space-y-6 text-center">
                        <h1 class="text-4xl sm:text-5xl lg:text-6xl font-black leading-tight tracking-tight drop-shadow-sm">
                            <span class="text-[#f7f3ff] lg:text-[#120731]">
                                <span class="text-[#f5a500]" style=SCRIPT_FONT>"Show up"</span>
                                " for the people who "
                                <span class="text-[#5b32ff]" style=SCRIPT_FONT>"matter"</span>
                                ", regularly."
                            </span>
                        </h1>
                        <p class="mx-auto max-w-xl text-lg text-white/90 lg:text-[#61557a]">{PITCH}</p>

                        <div class="w-full max-w-[704px] mx-auto">
                            <WaitlistForm variant=PageVariant::Spotlight skin=SKIN />
                        </div>
                    </div>

                    <div
                        class="pointer-events-none absolute top-1/2 hidden -translate-y-1/2 lg:flex lg:flex-col lg:items-center lg:gap-6"
                        style="left: -260px"
                    >
                        <div class="relative flex h-full min-h-[700px] w-[220px] items-center justify-center">
                            {floating(LEFT)}
                        </div>
                    </div>

                    <div
                        class="pointer-events-none absolute top-1/2 hidden -translate-y-1/2 lg:flex lg:flex-col lg:items-center lg:gap-6"
                        style="right: -340px; bottom: 100px"
                    >
                        <div class="relative flex w-full max-w-[340px] items-center justify-center">
                            <div class="absolute right-12 top-[-20px] h-14 w-14 rounded-full bg-[#f5a500]/40 blur-[1px]"></div>
                            {floating(RIGHT)}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
