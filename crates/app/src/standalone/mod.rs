//! Self-contained applications for roles that do not use the shared shell.

use dioxus::prelude::*;
use shared_types::{MenuItem, StandaloneApp};

use crate::icons::MenuIcon;
use crate::role_switcher::RoleSwitcher;

mod lecturer;
mod student;

/// Mounts the application owned by a self-contained role.
#[component]
pub fn StandaloneRoot(app: StandaloneApp) -> Element {
    match app {
        StandaloneApp::StudentPortal => rsx! { student::StudentPortal {} },
        StandaloneApp::LecturerPortal => rsx! { lecturer::LecturerPortal {} },
    }
}

/// Header bar shared by the standalone apps. Carries the role switcher so the
/// user can always get back to the shell.
#[component]
fn StandaloneHeader(app: StandaloneApp, subtitle: String) -> Element {
    rsx! {
        header { class: "standalone-header",
            div {
                h1 { class: "standalone-title", {app.title()} }
                p { class: "standalone-subtitle", "{subtitle}" }
            }
            RoleSwitcher {}
        }
    }
}

/// Horizontal tab strip built from the role's flat menu.
#[component]
fn TabStrip(tabs: &'static [MenuItem], active: String, on_select: EventHandler<&'static str>) -> Element {
    rsx! {
        nav { class: "standalone-tabs",
            for tab in tabs.iter() {
                button {
                    key: "{tab.id}",
                    r#type: "button",
                    class: "standalone-tab",
                    "data-active": if tab.id == active { "true" } else { "false" },
                    onclick: move |_| on_select.call(tab.id),
                    MenuIcon { icon: tab.icon }
                    span { {tab.label} }
                }
            }
        }
    }
}

/// First tab id of a flat menu, empty when there are none.
fn first_tab(tabs: &[MenuItem]) -> String {
    tabs.first().map(|tab| tab.id.to_string()).unwrap_or_default()
}

/// Look a tab id up in an app's tab table. Unknown ids land on `home`.
fn tab_for<T: Copy>(table: &[(&str, T)], id: &str, home: T) -> T {
    table
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, tab)| *tab)
        .unwrap_or(home)
}
