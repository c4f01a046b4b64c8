// Split page (`/3`): two-tone background with the product preview
use leptos::prelude::*;
use lupin_waitlist::PageVariant;

use super::ON_THE_LIST;
use crate::sections::{FOOTNOTE, FormSkin, PITCH, WaitlistForm};

const SKIN: FormSkin = FormSkin {
    form: "flex flex-col gap-3 rounded-2xl p-3 backdrop-blur",
    row: "flex flex-col gap-3",
    input: "w-full rounded-full border bg-[#F7E8F2] px-5 py-2 text-base text-[#2d1837] placeholder:text-[#7a5f7a] shadow-sm transition focus:border-[#0b0732] focus:outline-none focus:ring-2 focus:ring-[#d1b3e0] sm:flex-1 sm:text-lg sm:leading-[32px] sm:px-6",
    input_ok: "border-[#7a4b87]",
    input_error: "border-red-400",
    placeholder: "Enter your email for early access",
    button: "flex w-full items-center justify-center rounded-full border border-[#0b0732] bg-[#0b0732] px-7 py-2 text-base font-semibold text-white shadow-md shadow-[#0b0732]/30 transition hover:-translate-y-0.5 hover:shadow-lg hover:shadow-[#0b0732]/40 disabled:translate-y-0 disabled:opacity-70 sm:w-auto sm:px-8 sm:text-lg",
    spinner: "mr-2 h-5 w-5 animate-spin",
    arrow: false,
    error: "flex items-center gap-2 text-sm text-red-200",
    error_icon: "h-4 w-4",
    footnote: None,
    success: ON_THE_LIST,
};

#[component]
pub fn SplitPage() -> impl IntoView {
    view! {
        <div class="min-h-screen text-white px-6 py-12 md:px-12 lg:px-16 bg-[linear-gradient(to_bottom,_#C5D9D5_0%,_#C5D9D5_50%,_white_50%,_white_100%)] lg:bg-[linear-gradient(to_right,_#C5D9D5_0%,_#C5D9D5_50%,_white_50%,_white_100%)]">
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
                            " for the people who matter, "
                            <span class="text-[#8303A6]">"regularly."</span>
                        </h1>
                        <p class="max-w-xl text-lg text-black/80">{PITCH}</p>
                    </div>

                    <div class="w-full max-w-lg">
                        <WaitlistForm variant=PageVariant::Split skin=SKIN />
                    </div>

                    <p class="text-sm text-black/70">{FOOTNOTE}</p>
                </div>

                <div class="relative w-full max-w-xl flex justify-center">
                    <img src="/landing3.png" alt="Lupin landing preview" class="w-full max-w-xl rounded-3xl" />
                </div>
            </div>
        </div>
    }
}
