/// Visual variant of the landing page, picked by URL path.
///
/// Every variant hosts its own waitlist form, so each gets a distinct frame
/// name and error element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageVariant {
    /// `/` (and anything unknown): logo, serif hero, avatar clusters.
    #[default]
    Classic,
    /// `/2`: sage split layout with an avatar cluster.
    Meadow,
    /// `/3`: two-tone split with a product preview.
    Split,
    /// `/4`: skewed violet gradient with floating avatars.
    Spotlight,
}

impl PageVariant {
    pub const ALL: [PageVariant; 4] = [
        PageVariant::Classic,
        PageVariant::Meadow,
        PageVariant::Split,
        PageVariant::Spotlight,
    ];

    /// Exact match on `/N` or `/N/`; everything else is `Classic`.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/2" | "/2/" => PageVariant::Meadow,
            "/3" | "/3/" => PageVariant::Split,
            "/4" | "/4/" => PageVariant::Spotlight,
            _ => PageVariant::Classic,
        }
    }

    /// `name` of the hidden frame the form posts into.
    pub fn frame_name(&self) -> &'static str {
        match self {
            PageVariant::Classic => "mailchimp_iframe",
            PageVariant::Meadow => "mailchimp_iframe_2",
            PageVariant::Split => "mailchimp_iframe_3",
            PageVariant::Spotlight => "mailchimp_iframe_4",
        }
    }

    pub fn frame_title(&self) -> &'static str {
        match self {
            PageVariant::Classic => "mailchimp-silent-submit",
            PageVariant::Meadow => "mailchimp-silent-submit-2",
            PageVariant::Split => "mailchimp-silent-submit-3",
            PageVariant::Spotlight => "mailchimp-silent-submit-4",
        }
    }

    /// Id of the inline error, referenced by `aria-describedby`.
    pub fn error_id(&self) -> &'static str {
        match self {
            PageVariant::Classic => "email-error",
            PageVariant::Meadow => "lp2-email-error",
            PageVariant::Split => "lp3-email-error",
            PageVariant::Spotlight => "lp4-email-error",
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            PageVariant::Classic => "classic",
            PageVariant::Meadow => "meadow",
            PageVariant::Split => "split",
            PageVariant::Spotlight => "spotlight",
        }
    }
}
