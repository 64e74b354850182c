use dioxus::prelude::*;

/// Colour family of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Positive,
    Warning,
    Critical,
}

impl BadgeTone {
    fn class(&self) -> &'static str {
        match self {
            BadgeTone::Neutral => "neutral",
            BadgeTone::Positive => "positive",
            BadgeTone::Warning => "warning",
            BadgeTone::Critical => "critical",
        }
    }

    /// Tone for the free-text statuses used across the mock datasets.
    pub fn for_status(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "paid" | "approved" | "active" | "published" | "funded" | "on track" | "present" => {
                BadgeTone::Positive
            }
            "pending" | "under review" | "partial" | "on leave" | "submitted" => BadgeTone::Warning,
            "overdue" | "rejected" | "suspended" | "at risk" | "absent" => BadgeTone::Critical,
            _ => BadgeTone::Neutral,
        }
    }
}

/// Inline status pill.
#[component]
pub fn Badge(
    #[props(default)] tone: BadgeTone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-tone", tone.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

/// Badge whose tone is derived from the status text.
#[component]
pub fn StatusBadge(status: String) -> Element {
    let tone = BadgeTone::for_status(&status);
    rsx! {
        Badge { tone: tone, "{status}" }
    }
}
