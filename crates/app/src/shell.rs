use dioxus::prelude::*;
use navigation::ShellEvent;
use shared_types::MenuItem;
use shared_ui::{
    Sidebar, SidebarContent, SidebarFooter, SidebarHeader, SidebarInset, SidebarLockToggle,
    SidebarMenu, SidebarMenuButton, SidebarMenuItem, SidebarMenuLabel, SidebarMenuSub,
    SidebarMenuSubButton, SidebarMenuSubItem, SidebarProvider, SidebarSeparator, SidebarTrigger,
};

use crate::icons::{LockIcon, MenuIcon};
use crate::role_switcher::RoleSwitcher;
use crate::session::use_session;
use crate::views::ContentArea;

/// Shared application shell: role menu on the left, active view on the right.
#[component]
pub fn Shell() -> Element {
    let mut session = use_session();
    let snapshot = session.snapshot();
    let breadcrumb = session.breadcrumb();
    let sidebar = snapshot.sidebar;
    let collapsed = sidebar.collapsed();
    let locked = sidebar.locked();
    let role_label = snapshot.role.label();

    rsx! {
        SidebarProvider { collapsed: collapsed,
            Sidebar {
                collapsed: collapsed,
                locked: locked,
                on_pointer_enter: move |_| session.dispatch(ShellEvent::PointerEnterSidebar),
                on_pointer_leave: move |_| session.dispatch(ShellEvent::PointerLeaveSidebar),

                SidebarHeader {
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-mark", "U" }
                        span { class: "sidebar-brand-name", "Campus ERP" }
                    }
                    SidebarLockToggle {
                        locked: locked,
                        onclick: move |_| session.dispatch(ShellEvent::ToggleSidebarLock),
                        LockIcon { locked: locked }
                    }
                }

                SidebarSeparator {}

                SidebarContent {
                    SidebarMenu {
                        for item in snapshot.menu.iter() {
                            MenuEntry {
                                key: "{item.id}",
                                item: *item,
                                active: session.is_branch_active(item.id),
                                expanded: snapshot.expanded_menus.contains(item.id),
                                active_view_id: snapshot.active_view_id.clone(),
                            }
                        }
                    }
                }

                SidebarFooter {
                    span { class: "sidebar-footer-label", "{role_label}" }
                }
            }

            SidebarInset {
                header { class: "navbar",
                    SidebarTrigger {
                        collapsed: collapsed,
                        onclick: move |_| session.dispatch(ShellEvent::ToggleSidebarCollapse),
                        span { class: "navbar-trigger-icon", "\u{2630}" }
                    }
                    span { class: "navbar-title", {snapshot.view.title()} }
                    div { class: "navbar-spacer" }
                    RoleSwitcher {}
                }

                div { class: "page-content",
                    ContentArea { view: snapshot.view.clone(), breadcrumb: breadcrumb }
                }
            }
        }
    }
}

/// One top-level menu entry. Parents toggle their submenu, leaves activate
/// their view.
#[component]
fn MenuEntry(item: MenuItem, active: bool, expanded: bool, active_view_id: String) -> Element {
    let mut session = use_session();
    let id = item.id;

    if !item.is_parent() {
        return rsx! {
            SidebarMenuItem {
                SidebarMenuButton {
                    active: active,
                    title: item.label,
                    onclick: move |_| session.dispatch(ShellEvent::SelectMenuItem { id: id.to_string() }),
                    MenuIcon { icon: item.icon }
                    SidebarMenuLabel { {item.label} }
                }
            }
        };
    }

    rsx! {
        SidebarMenuItem {
            SidebarMenuButton {
                active: active,
                expanded: Some(expanded),
                title: item.label,
                onclick: move |_| session.dispatch(ShellEvent::SelectMenuItem { id: id.to_string() }),
                MenuIcon { icon: item.icon }
                SidebarMenuLabel { {item.label} }
            }
            if expanded {
                SidebarMenuSub {
                    for child in item.submenu.iter() {
                        SubmenuEntry {
                            key: "{child.id}",
                            parent_id: id,
                            item: *child,
                            active: child.id == active_view_id,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SubmenuEntry(parent_id: &'static str, item: MenuItem, active: bool) -> Element {
    let mut session = use_session();
    let id = item.id;

    rsx! {
        SidebarMenuSubItem {
            SidebarMenuSubButton {
                active: active,
                onclick: move |_| {
                    session.dispatch(ShellEvent::SelectSubmenuItem {
                        parent_id: parent_id.to_string(),
                        id: id.to_string(),
                    })
                },
                {item.label}
            }
        }
    }
}
