use dioxus::prelude::*;

/// Panel container used by every dashboard view.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section {
            ..merged,
            {children}
        }
    }
}

/// Title row of a Card with an optional one-line description.
#[component]
pub fn CardHeader(
    title: String,
    #[props(default)] description: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        header { class: "card-header",
            div {
                h3 { class: "card-title", "{title}" }
                if let Some(text) = description {
                    p { class: "card-description", "{text}" }
                }
            }
            div { class: "card-action", {children} }
        }
    }
}

/// Main content section of a Card.
#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

/// Direction of a stat's change since the last period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    fn class(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Flat => "flat",
        }
    }

    fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "\u{2191}",
            Trend::Down => "\u{2193}",
            Trend::Flat => "\u{2192}",
        }
    }
}

/// Headline number card: title, value, and an optional trend caption.
#[component]
pub fn StatCard(
    title: String,
    value: String,
    #[props(default)] caption: Option<String>,
    #[props(default)] trend: Option<Trend>,
) -> Element {
    let trend_class = trend.map(|t| t.class()).unwrap_or("flat");
    let arrow = trend.map(|t| t.arrow());

    rsx! {
        Card { class: "stat-card",
            span { class: "stat-title", "{title}" }
            span { class: "stat-value", "{value}" }
            if let Some(text) = caption {
                span {
                    class: "stat-caption",
                    "data-trend": trend_class,
                    if let Some(arrow) = arrow {
                        "{arrow} "
                    }
                    "{text}"
                }
            }
        }
    }
}

/// Responsive grid that lays stat cards out in a row.
#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        div { class: "stat-grid", {children} }
    }
}
