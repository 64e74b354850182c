use dioxus::prelude::*;
use navigation::ShellEvent;
use shared_types::Role;

use crate::session::use_session;

/// Drop-down that switches the session role. Rendered by the shell navbar and
/// by every standalone application so any role can be left again.
#[component]
pub fn RoleSwitcher() -> Element {
    let mut session = use_session();
    let current = session.role();

    rsx! {
        label { class: "role-switcher",
            span { class: "role-switcher-label", "Viewing as" }
            select {
                value: current.as_str(),
                onchange: move |evt| {
                    let role = Role::from_str_or_default(&evt.value());
                    session.dispatch(ShellEvent::SetRole { role });
                },
                for role in Role::ALL {
                    option {
                        key: "{role}",
                        value: role.as_str(),
                        selected: role == current,
                        {role.label()}
                    }
                }
            }
        }
    }
}
