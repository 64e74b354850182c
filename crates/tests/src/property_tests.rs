use navigation::{menus, views, NavigationController, ShellEvent, ShellSession, SidebarModel};
use proptest::prelude::*;
use shared_types::{find_item, leaf_ids, Role, ShellMode, ViewDescriptor};

fn arb_role() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::ALL.to_vec())
}

/// Ids drawn from every menu plus a few that appear in none.
fn arb_id() -> impl Strategy<Value = String> {
    let mut ids: Vec<&'static str> = Role::ALL
        .iter()
        .flat_map(|role| {
            let menu = menus::resolve(*role);
            menu.iter().map(|item| item.id).chain(leaf_ids(menu))
        })
        .collect();
    ids.extend(["nonexistent-id", "", "Dashboard"]);
    prop::sample::select(ids).prop_map(str::to_string)
}

fn arb_event() -> impl Strategy<Value = ShellEvent> {
    prop_oneof![
        arb_role().prop_map(|role| ShellEvent::SetRole { role }),
        arb_id().prop_map(|id| ShellEvent::SelectMenuItem { id }),
        (arb_id(), arb_id())
            .prop_map(|(parent_id, id)| ShellEvent::SelectSubmenuItem { parent_id, id }),
        Just(ShellEvent::ToggleSidebarLock),
        Just(ShellEvent::ToggleSidebarCollapse),
        Just(ShellEvent::PointerEnterSidebar),
        Just(ShellEvent::PointerLeaveSidebar),
    ]
}

fn arb_sidebar() -> impl Strategy<Value = SidebarModel> {
    (any::<bool>(), any::<bool>()).prop_map(|(collapsed, locked)| SidebarModel::new(collapsed, locked))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Expanded ids always name parent items of the current role's tree.
    #[test]
    fn prop_expanded_menus_are_parents_in_current_tree(
        role in arb_role(),
        events in prop::collection::vec(arb_event(), 0..40),
    ) {
        let mut session = ShellSession::new(role, SidebarModel::default());
        for event in events {
            session.apply(event);
            for id in session.expanded_menus() {
                let found = find_item(session.menu(), id);
                prop_assert!(found.is_some_and(|m| m.item.is_parent()), "{id} expanded");
            }
        }
    }

    /// A role change always yields exactly the fresh state for that role.
    #[test]
    fn prop_set_role_resets_navigation(
        events in prop::collection::vec(arb_event(), 0..30),
        role in arb_role(),
    ) {
        let mut session = ShellSession::default();
        for event in events {
            session.apply(event);
        }
        session.apply(ShellEvent::SetRole { role });
        prop_assert_eq!(session.navigation(), &NavigationController::new(role));
        prop_assert_eq!(session.mode(), views::mode_for(role));
    }

    /// Clicking the same parent twice changes nothing.
    #[test]
    fn prop_parent_toggle_is_an_involution(
        role in arb_role(),
        events in prop::collection::vec(arb_event(), 0..20),
    ) {
        let mut session = ShellSession::new(role, SidebarModel::default());
        for event in events {
            session.apply(event);
        }
        let parents: Vec<&'static str> = session
            .menu()
            .iter()
            .filter(|item| item.is_parent())
            .map(|item| item.id)
            .collect();
        for id in parents {
            let before = session.snapshot();
            session.select_menu_item(id);
            session.select_menu_item(id);
            prop_assert_eq!(session.snapshot(), before);
        }
    }

    /// Leaves only move the active view; parents only move the expansion set.
    #[test]
    fn prop_selection_touches_one_half_of_navigation(
        role in arb_role(),
        events in prop::collection::vec(arb_event(), 0..20),
        id in arb_id(),
    ) {
        let mut session = ShellSession::new(role, SidebarModel::default());
        for event in events {
            session.apply(event);
        }
        let expanded_before = session.expanded_menus().clone();
        let active_before = session.active_view_id().to_string();
        let is_parent = find_item(session.menu(), &id).is_some_and(|m| m.item.is_parent());

        session.select_menu_item(&id);

        if is_parent {
            prop_assert_eq!(session.active_view_id(), active_before.as_str());
        } else {
            prop_assert_eq!(session.expanded_menus(), &expanded_before);
            prop_assert_eq!(session.active_view_id(), id.as_str());
        }
    }

    /// While locked, pointer movement never changes the sidebar.
    #[test]
    fn prop_locked_sidebar_ignores_pointer(
        collapsed in any::<bool>(),
        moves in prop::collection::vec(any::<bool>(), 0..20),
    ) {
        let mut sidebar = SidebarModel::new(collapsed, true);
        for enter in moves {
            if enter {
                sidebar.pointer_enter();
            } else {
                sidebar.pointer_leave();
            }
            prop_assert_eq!(sidebar, SidebarModel::new(collapsed, true));
        }
    }

    /// While unlocked, the width tracks the last pointer event.
    #[test]
    fn prop_unlocked_sidebar_tracks_pointer(
        start in arb_sidebar(),
        moves in prop::collection::vec(any::<bool>(), 1..20),
    ) {
        let mut sidebar = SidebarModel::new(start.collapsed(), false);
        let last = moves[moves.len() - 1];
        for enter in moves {
            if enter {
                sidebar.pointer_enter();
            } else {
                sidebar.pointer_leave();
            }
        }
        prop_assert_eq!(sidebar.renders_wide(), last);
        prop_assert!(!sidebar.locked());
    }

    /// The content area always has something to show.
    #[test]
    fn prop_view_resolution_is_total(role in arb_role(), id in arb_id()) {
        let view = views::resolve(role, &id);
        match views::mode_for(role) {
            ShellMode::Standalone(app) => {
                prop_assert_eq!(view, ViewDescriptor::Standalone { app });
            }
            ShellMode::Shell => {
                let is_standalone = matches!(view, ViewDescriptor::Standalone { .. });
                prop_assert!(!is_standalone);
            }
        }
    }

    /// Role changes never touch the sidebar.
    #[test]
    fn prop_role_change_keeps_sidebar(
        sidebar in arb_sidebar(),
        from in arb_role(),
        to in arb_role(),
    ) {
        let mut session = ShellSession::new(from, sidebar);
        session.apply(ShellEvent::SetRole { role: to });
        prop_assert_eq!(session.sidebar(), sidebar);
    }
}
