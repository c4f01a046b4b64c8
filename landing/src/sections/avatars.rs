//! Decorative avatar circles.
//!
//! Positions are offsets from the cluster's anchored corner. Every circle is
//! pushed in by [`CIRCLE_SPACING`] and padded by half of it, so circles keep
//! the same gap from each other and from the container edge.

use leptos::prelude::*;

/// Gap between circles and between a cluster and its container edge, in px.
pub const CIRCLE_SPACING: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleSpec {
    pub src: &'static str,
    pub alt: &'static str,
    pub size: f64,
    pub x: f64,
    pub y: f64,
    /// Dropped from the layout on narrow viewports.
    pub desktop_only: bool,
}

const fn circle(src: &'static str, alt: &'static str, size: f64, x: f64, y: f64) -> CircleSpec {
    CircleSpec {
        src,
        alt,
        size,
        x,
        y,
        desktop_only: false,
    }
}

/// Which corner of the container the offsets are measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    TopLeft,
    BottomRight,
}

impl Origin {
    fn edges(self) -> (&'static str, &'static str) {
        match self {
            Origin::TopLeft => ("top", "left"),
            Origin::BottomRight => ("bottom", "right"),
        }
    }
}

pub const TOP_LEFT: &[CircleSpec] = &[
    circle("/avatars/1.png", "Happy Lupin customer", 130.0, 22.0, 18.0),
    circle("/avatars/2.png", "Smiling Lupin customer", 82.0, 0.0, 126.0),
    circle("/avatars/10.png", "Excited Lupin customer", 95.0, 25.0, 195.0),
];

pub const BOTTOM_RIGHT: &[CircleSpec] = &[
    circle("/avatars/4.png", "Happy Lupin customer", 132.0, 0.0, 0.0),
    circle("/avatars/3.png", "Smiling Lupin customer", 96.0, 113.0, 106.0),
    circle("/avatars/13.png", "Cheerful Lupin customer", 116.0, 140.0, 0.0),
    circle("/avatars/5.png", "Excited Lupin customer", 150.0, 0.0, 152.0),
    circle("/avatars/8.png", "Delighted Lupin customer", 110.0, 198.0, 104.0),
    CircleSpec {
        desktop_only: true,
        ..circle("/avatars/7.png", "Joyful Lupin customer", 88.0, 418.0, 0.0)
    },
    circle("/avatars/9.png", "Grateful Lupin customer", 158.0, 272.0, 0.0),
];

pub const MEADOW_CLUSTER: &[CircleSpec] = &[
    circle("/avatars/1.png", "Happy Lupin customer", 150.0, 40.0, 0.0),
    circle("/avatars/2.png", "Smiling Lupin customer", 96.0, 0.0, 150.0),
    circle("/avatars/10.png", "Excited Lupin customer", 95.0, 70.0, 320.0),
    circle("/avatars/4.png", "Happy Lupin customer", 132.0, 200.0, 20.0),
    circle("/avatars/3.png", "Smiling Lupin customer", 110.0, 120.0, 180.0),
    circle("/avatars/13.png", "Cheerful Lupin customer", 120.0, 360.0, 70.0),
    circle("/avatars/5.png", "Excited Lupin customer", 150.0, 260.0, 190.0),
    circle("/avatars/8.png", "Delighted Lupin customer", 110.0, 180.0, 330.0),
    circle("/avatars/7.png", "Joyful Lupin customer", 96.0, 390.0, 250.0),
    circle("/avatars/9.png", "Grateful Lupin customer", 158.0, 310.0, 340.0),
];

/// CSS lengths with at most two decimals and no trailing zeros.
fn px(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded}px")
}

/// Inline style placing one circle inside its cluster.
pub fn circle_style(circle: &CircleSpec, origin: Origin, scale: f64) -> String {
    let (vertical, horizontal) = origin.edges();
    let size = px(circle.size * scale);
    format!(
        "{vertical}: {}; {horizontal}: {}; width: {size}; height: {size}; padding: {};",
        px(CIRCLE_SPACING + circle.y * scale),
        px(CIRCLE_SPACING + circle.x * scale),
        px(CIRCLE_SPACING / 2.0),
    )
}

/// Inline style for the cluster container anchored at `origin`.
pub fn cluster_style(width: f64, height: f64, origin: Origin, scale: f64) -> String {
    let (vertical, horizontal) = origin.edges();
    format!(
        "{vertical}: 0; {horizontal}: 0; width: {}; height: {}; padding: {};",
        px(width * scale),
        px(height * scale),
        px(CIRCLE_SPACING),
    )
}

pub fn visible(circles: &'static [CircleSpec], mobile: bool) -> Vec<&'static CircleSpec> {
    circles
        .iter()
        .filter(|circle| !(mobile && circle.desktop_only))
        .collect()
}

/// A corner-anchored cluster of outlined avatar circles.
#[component]
pub fn CornerCluster(
    circles: &'static [CircleSpec],
    origin: Origin,
    /// Container size before scaling, in px
    width: f64,
    height: f64,
    #[prop(into)] scale: Signal<f64>,
    #[prop(into)] mobile: Signal<bool>,
) -> impl IntoView {
    let corner = match origin {
        Origin::TopLeft => "origin-top-left",
        Origin::BottomRight => "origin-bottom-right",
    };

    view! {
        <div
            aria-hidden="true"
            class=format!("absolute pointer-events-none select-none opacity-70 {corner}")
            style=move || cluster_style(width, height, origin, scale.get())
        >
            {move || {
                let scale = scale.get();
                visible(circles, mobile.get())
                    .into_iter()
                    .map(|circle| {
                        view! {
                            <div class="absolute" style=circle_style(circle, origin, scale)>
                                <img
                                    src=circle.src
                                    alt=circle.alt
                                    class="rounded-full object-cover w-full h-full"
                                    style="border: 3px solid #000"
                                />
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
