use std::collections::BTreeSet;

use shared_types::{find_item, MenuItem, Role, FALLBACK_VIEW_ID};

use crate::menus;

/// What a menu click did to the navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A leaf was selected and became the active view.
    Activated,
    /// A parent was clicked; `expanded` is its state after the toggle.
    Toggled { expanded: bool },
    /// The id is not in the current tree. It still becomes the active view
    /// and renders as a placeholder.
    Unlisted,
}

/// Owns which view is active and which parent items are expanded for the
/// current role.
///
/// Collapsed parents are simply absent from the expansion set, so toggling
/// the same parent twice restores the previous state exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationController {
    role: Role,
    menu: &'static [MenuItem],
    active_view_id: String,
    expanded_menus: BTreeSet<&'static str>,
}

/// First top-level id of `menu`, or the fallback id for an empty tree.
fn initial_view_id(menu: &[MenuItem]) -> String {
    menu.first()
        .map(|item| item.id)
        .unwrap_or(FALLBACK_VIEW_ID)
        .to_string()
}

impl NavigationController {
    pub fn new(role: Role) -> Self {
        Self::with_menu(role, menus::resolve(role))
    }

    /// Build a controller over an explicit tree instead of the role's
    /// built-in menu.
    pub fn with_menu(role: Role, menu: &'static [MenuItem]) -> Self {
        Self {
            role,
            menu,
            active_view_id: initial_view_id(menu),
            expanded_menus: BTreeSet::new(),
        }
    }

    /// Switch roles. The previous navigation state is discarded, never merged.
    pub fn set_role(&mut self, role: Role) {
        *self = Self::new(role);
        tracing::debug!(%role, active = %self.active_view_id, "navigation reset");
    }

    /// Handle a click on any item of the current tree.
    pub fn select_menu_item(&mut self, id: &str) -> Selection {
        let Some(found) = find_item(self.menu, id) else {
            tracing::debug!(role = %self.role, id, "selected id is not in the menu");
            self.active_view_id = id.to_string();
            return Selection::Unlisted;
        };
        let item = found.item;
        if item.is_parent() {
            let expanded = self.toggle_expanded(item.id);
            tracing::debug!(id, expanded, "submenu toggled");
            Selection::Toggled { expanded }
        } else {
            self.active_view_id = item.id.to_string();
            tracing::debug!(id, "view activated");
            Selection::Activated
        }
    }

    /// Handle a click on an entry inside `parent_id`'s submenu. The parent
    /// stays expanded.
    pub fn select_submenu_item(&mut self, parent_id: &str, id: &str) -> Selection {
        let under_parent = find_item(self.menu, parent_id)
            .map(|found| found.item.contains(id))
            .unwrap_or(false);
        if !under_parent {
            tracing::debug!(parent_id, id, "submenu item not found under parent");
        }
        self.select_menu_item(id)
    }

    fn toggle_expanded(&mut self, id: &'static str) -> bool {
        if self.expanded_menus.remove(id) {
            false
        } else {
            self.expanded_menus.insert(id);
            true
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn menu(&self) -> &'static [MenuItem] {
        self.menu
    }

    pub fn active_view_id(&self) -> &str {
        &self.active_view_id
    }

    /// Ids of the parent items currently showing their submenu.
    pub fn expanded_menus(&self) -> &BTreeSet<&'static str> {
        &self.expanded_menus
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_menus.contains(id)
    }

    /// True if `id` is the active view or an ancestor of it.
    pub fn is_branch_active(&self, id: &str) -> bool {
        if self.active_view_id == id {
            return true;
        }
        find_item(self.menu, id)
            .map(|found| found.item.contains(&self.active_view_id))
            .unwrap_or(false)
    }
}
