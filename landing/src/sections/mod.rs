// Landing page sections shared by every variant
// Developed with 💜 by the Lupin team (c)2025

mod avatars;
mod icons;
mod waitlist_form;

pub use avatars::{BOTTOM_RIGHT, CornerCluster, MEADOW_CLUSTER, Origin, TOP_LEFT, circle_style};
pub use waitlist_form::{FormSkin, SuccessSkin, WaitlistForm};

pub const HEADLINE: &str = "Show up for the people who matter, regularly.";

pub const PITCH: &str = "Lupin helps you stay connected over time with the people you care about \
most. It creates simple, recurring moments to check in, share updates, and respond, without the \
pressure of constant messaging. And when life gets busy, Lupin quietly helps smooth things out, \
so staying in touch feels natural, not forced.";

pub const FOOTNOTE_LEAD: &str = "No spam, no noise.";
pub const FOOTNOTE_TAIL: &str = "Just keeping you in the loop as Lupin gets ready to launch.";
pub const FOOTNOTE: &str =
    "No spam, no noise. Just keeping you in the loop as Lupin gets ready to launch.";
