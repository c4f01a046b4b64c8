// Meadow page (`/2`): sage split layout with a free-standing avatar cluster
use leptos::prelude::*;
use lupin_waitlist::PageVariant;

use super::ON_THE_LIST;
use crate::sections::{FOOTNOTE, FormSkin, MEADOW_CLUSTER, Origin, PITCH, WaitlistForm, circle_style};

const SKIN: FormSkin = FormSkin {
    form: "flex flex-col gap-3 rounded-2xl bg-white/10 p-3 ring-1 ring-white/15 backdrop-blur",
    row: "flex flex-col gap-3 sm:flex-row",
    input: "w-full rounded-xl border-2 bg-white text-base text-gray-900 placeholder:text-gray-500 transition focus:border-[#d5ff57] focus:outline-none focus:ring-2 focus:ring-[#d5ff57] sm:flex-1 sm:text-lg sm:leading-[52px] sm:px-5",
    input_ok: "border-transparent",
    input_error: "border-red-400",
    placeholder: "Enter your email",
    button: "flex w-full items-center justify-center rounded-xl bg-[#467302] px-5 py-3 text-base font-semibold text-white shadow-[0_12px_0_#2f4d01] transition hover:-translate-y-0.5 hover:shadow-[0_14px_0_#2f4d01] disabled:translate-y-0 disabled:opacity-80 disabled:shadow-[0_12px_0_#2f4d01] sm:w-auto sm:text-lg",
    spinner: "mr-2 h-5 w-5 animate-spin",
    arrow: false,
    error: "flex items-center gap-2 text-sm text-red-200",
    error_icon: "h-4 w-4",
    footnote: None,
    success: ON_THE_LIST,
};

#[component]
pub fn MeadowPage() -> impl IntoView {
    let cluster = MEADOW_CLUSTER
        .iter()
        .map(|circle| {
            view! {
                <div class="absolute" style=circle_style(circle, Origin::TopLeft, 1.0)>
                    <div class="relative h-full w-full rounded-full bg-white p-2">
                        <img
                            src=circle.src
                            alt=circle.alt
                            class="h-full w-full rounded-full object-cover"
                            style="border: 3px solid #000"
                        />
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="min-h-screen bg-[#C5D9D5] text-white px-6 py-12 md:px-12 lg:px-16">
            <div class="mx-auto flex w-full max-w-6xl flex-col-reverse items-center gap-12 lg:grid lg:grid-cols-2 lg:items-center lg:gap-16 lg:min-h-[80vh]">
                <div class="w-full space-y-8">
                    <div class="flex justify-center">
                        <img src="/lupin-logo-transparent.png" alt="Lupin logo" class="h-20 w-auto" />
                    </div>
                    <div class="space-y-4">
                        <h1
                            class="text-4xl font-black leading-tight text-black sm:text-5xl md:text-6xl mb-3"
                            style="font-family: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif; font-weight: 700"
                        >
                            <span class="text-[#8303A6]">"Show up"</span>
                            " for the people who matter, regularly."
                        </h1>
                        <p class="max-w-xl text-lg text-black/80">{PITCH}</p>
                    </div>

                    <div class="w-full max-w-lg">
                        <WaitlistForm variant=PageVariant::Meadow skin=SKIN />
                    </div>

                    <p class="text-sm text-white/70">{FOOTNOTE}</p>
                </div>

                <div class="relative w-full max-w-xl">
                    <div class="absolute -left-6 top-4 h-14 w-14 rotate-12 rounded-2xl bg-[#8303A6]" aria-hidden="true"></div>
                    <div class="absolute -right-8 -bottom-6 h-16 w-16 -rotate-6 rounded-full bg-[#0f2a14]" aria-hidden="true"></div>
                    <div class="relative min-h-[520px] w-full overflow-visible">{cluster}</div>
                </div>
            </div>
        </div>
    }
}
