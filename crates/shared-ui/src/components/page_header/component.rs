use dioxus::prelude::*;

/// Title block at the top of a view, with the menu path above it and
/// optional actions on the right.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] breadcrumb: Vec<String>,
    #[props(default)] subtitle: Option<String>,
    children: Element,
) -> Element {
    let last = breadcrumb.len().saturating_sub(1);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            div {
                if breadcrumb.len() > 1 {
                    nav { class: "page-breadcrumb", "aria-label": "Breadcrumb",
                        for (i, crumb) in breadcrumb.iter().enumerate() {
                            span {
                                key: "{i}",
                                class: if i == last { "crumb current" } else { "crumb" },
                                "{crumb}"
                            }
                            if i != last {
                                span { class: "crumb-separator", "/" }
                            }
                        }
                    }
                }
                h1 { class: "page-title", "{title}" }
                if let Some(text) = subtitle {
                    p { class: "page-subtitle", "{text}" }
                }
            }
            div { class: "page-actions", {children} }
        }
    }
}
