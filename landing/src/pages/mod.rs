// Landing page variants, one per path (`/`, `/2`, `/3`, `/4`)
// Developed with 💜 by the Lupin team (c)2025

mod classic;
mod meadow;
mod split;
mod spotlight;

pub use classic::ClassicPage;
pub use meadow::MeadowPage;
pub use split::SplitPage;
pub use spotlight::SpotlightPage;

use crate::sections::SuccessSkin;

/// Success card copy shared by the `/2`, `/3` and `/4` variants.
const ON_THE_LIST: SuccessSkin = SuccessSkin {
    card: "flex items-center gap-3 rounded-2xl bg-white/10 px-4 py-4 ring-1 ring-white/15 backdrop-blur",
    badge: "flex h-11 w-11 items-center justify-center rounded-full bg-[#d5ff57] text-[#1f4a2b]",
    icon: "h-6 w-6",
    text: "",
    title_class: "text-base font-semibold text-white",
    title: "You\u{2019}re on the list!",
    body_class: "text-sm text-white/70",
    body: "We\u{2019}ll follow up with early access soon.",
    button_class: "ml-auto text-sm font-medium text-[#d5ff57] underline decoration-2 decoration-transparent transition hover:decoration-[#d5ff57]",
    button: "Add another",
};
