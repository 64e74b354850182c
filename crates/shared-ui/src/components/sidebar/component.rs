use dioxus::prelude::*;

/// Caller attributes layered over the component's own class and data flags.
fn sidebar_attrs(class: &'static str, flags: &[(&'static str, bool)], extra: Vec<Attribute>) -> Vec<Attribute> {
    let mut base = vec![Attribute::new("class", class, None, false)];
    for (name, on) in flags {
        base.push(Attribute::new(*name, if *on { "true" } else { "false" }, None, false));
    }
    dioxus_primitives::merge_attributes(vec![base, extra])
}

/// Outermost flex row holding the sidebar and the inset.
#[component]
pub fn SidebarProvider(collapsed: bool, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-collapsed": if collapsed { "true" } else { "false" },
            {children}
        }
    }
}

/// Navigation column.
///
/// Width is whatever `collapsed` says; the owner decides it and reacts to the
/// forwarded pointer enter/leave.
#[component]
pub fn Sidebar(
    collapsed: bool,
    locked: bool,
    #[props(default)] on_pointer_enter: Option<EventHandler<()>>,
    #[props(default)] on_pointer_leave: Option<EventHandler<()>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut attrs = sidebar_attrs("sidebar", &[("data-locked", locked)], attributes);
    attrs.push(Attribute::new(
        "data-state",
        if collapsed { "collapsed" } else { "expanded" },
        None,
        false,
    ));

    rsx! {
        aside {
            onmouseenter: move |_| {
                if let Some(handler) = &on_pointer_enter {
                    handler.call(());
                }
            },
            onmouseleave: move |_| {
                if let Some(handler) = &on_pointer_leave {
                    handler.call(());
                }
            },
            ..attrs,
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = sidebar_attrs("sidebar-header", &[], attributes);
    rsx! {
        div { ..attrs, {children} }
    }
}

/// Scrolls independently of the header and footer.
#[component]
pub fn SidebarContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = sidebar_attrs("sidebar-content", &[], attributes);
    rsx! {
        nav { ..attrs, {children} }
    }
}

#[component]
pub fn SidebarFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = sidebar_attrs("sidebar-footer", &[], attributes);
    rsx! {
        div { ..attrs, {children} }
    }
}

#[component]
pub fn SidebarMenu(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = sidebar_attrs("sidebar-menu", &[], attributes);
    rsx! {
        ul { ..attrs, {children} }
    }
}

#[component]
pub fn SidebarMenuItem(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = sidebar_attrs("sidebar-menu-item", &[], attributes);
    rsx! {
        li { ..attrs, {children} }
    }
}

/// Top-level entry button.
///
/// Pass `expanded` only for entries that own a submenu: it adds the caret and
/// `aria-expanded`.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    #[props(default)] expanded: Option<bool>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut flags = vec![("data-active", active)];
    if let Some(open) = expanded {
        flags.push(("aria-expanded", open));
    }
    let attrs = sidebar_attrs("sidebar-menu-button", &flags, attributes);

    rsx! {
        button {
            r#type: "button",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            ..attrs,
            {children}
            if let Some(open) = expanded {
                span {
                    class: "sidebar-menu-caret",
                    "data-open": if open { "true" } else { "false" },
                    "\u{25B8}"
                }
            }
        }
    }
}

/// Hidden by the stylesheet while the sidebar is narrow.
#[component]
pub fn SidebarMenuLabel(children: Element) -> Element {
    rsx! {
        span { class: "sidebar-menu-label", {children} }
    }
}

#[component]
pub fn SidebarMenuSub(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = sidebar_attrs("sidebar-menu-sub", &[], attributes);
    rsx! {
        ul { ..attrs, {children} }
    }
}

#[component]
pub fn SidebarMenuSubItem(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = sidebar_attrs("sidebar-menu-sub-item", &[], attributes);
    rsx! {
        li { ..attrs, {children} }
    }
}

#[component]
pub fn SidebarMenuSubButton(
    #[props(default = false)] active: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = sidebar_attrs("sidebar-menu-sub-button", &[("data-active", active)], attributes);

    rsx! {
        button {
            r#type: "button",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            ..attrs,
            {children}
        }
    }
}

/// Collapse/expand button for the navbar.
#[component]
pub fn SidebarTrigger(
    collapsed: bool,
    onclick: EventHandler<MouseEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = sidebar_attrs("sidebar-trigger", &[], attributes);

    rsx! {
        button {
            r#type: "button",
            "aria-label": if collapsed { "Expand sidebar" } else { "Collapse sidebar" },
            onclick: move |evt| onclick.call(evt),
            ..attrs,
            {children}
        }
    }
}

/// Pin button. Pinned keeps the current width; unpinned follows the pointer.
#[component]
pub fn SidebarLockToggle(
    locked: bool,
    onclick: EventHandler<MouseEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = sidebar_attrs(
        "sidebar-lock",
        &[("data-locked", locked), ("aria-pressed", locked)],
        attributes,
    );

    rsx! {
        button {
            r#type: "button",
            title: if locked { "Unpin sidebar" } else { "Pin sidebar" },
            onclick: move |evt| onclick.call(evt),
            ..attrs,
            {children}
        }
    }
}

#[component]
pub fn SidebarSeparator(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let attrs = sidebar_attrs("sidebar-separator", &[], attributes);
    rsx! {
        hr { ..attrs }
    }
}

/// Page area to the right of the sidebar.
#[component]
pub fn SidebarInset(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = sidebar_attrs("sidebar-inset", &[], attributes);
    rsx! {
        main { ..attrs, {children} }
    }
}
