use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use shared_types::{label_path, MenuItem, Role, ShellConfig, ShellMode, ViewDescriptor};

use crate::controller::NavigationController;
use crate::sidebar::SidebarModel;
use crate::views;

/// Every input the presentation layer can send to the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShellEvent {
    SetRole { role: Role },
    SelectMenuItem { id: String },
    SelectSubmenuItem { parent_id: String, id: String },
    ToggleSidebarLock,
    ToggleSidebarCollapse,
    PointerEnterSidebar,
    PointerLeaveSidebar,
}

/// Point-in-time copy of everything the presentation layer reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShellSnapshot {
    pub role: Role,
    pub mode: ShellMode,
    pub menu: &'static [MenuItem],
    pub active_view_id: String,
    pub expanded_menus: BTreeSet<&'static str>,
    pub sidebar: SidebarModel,
    pub view: ViewDescriptor,
}

/// The whole session-local state of the dashboard shell.
///
/// Each event is applied to completion before the next one, so a click and a
/// pointer-leave arriving in the same frame are simply processed in arrival
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellSession {
    nav: NavigationController,
    sidebar: SidebarModel,
    mode: ShellMode,
}

impl Default for ShellSession {
    fn default() -> Self {
        Self::new(Role::default(), SidebarModel::default())
    }
}

impl ShellSession {
    pub fn new(role: Role, sidebar: SidebarModel) -> Self {
        Self {
            nav: NavigationController::new(role),
            sidebar,
            mode: views::mode_for(role),
        }
    }

    pub fn from_config(config: &ShellConfig) -> Self {
        Self::new(
            config.default_role(),
            SidebarModel::from_defaults(config.sidebar),
        )
    }

    /// Apply one event and report the resulting mode.
    pub fn apply(&mut self, event: ShellEvent) -> ShellMode {
        match event {
            ShellEvent::SetRole { role } => self.set_role(role),
            ShellEvent::SelectMenuItem { id } => self.select_menu_item(&id),
            ShellEvent::SelectSubmenuItem { parent_id, id } => {
                self.select_submenu_item(&parent_id, &id)
            }
            ShellEvent::ToggleSidebarLock => self.toggle_sidebar_lock(),
            ShellEvent::ToggleSidebarCollapse => self.toggle_sidebar_collapse(),
            ShellEvent::PointerEnterSidebar => self.pointer_enter_sidebar(),
            ShellEvent::PointerLeaveSidebar => self.pointer_leave_sidebar(),
        }
        self.mode
    }

    /// Select a role. Navigation state is rebuilt from scratch and the shell
    /// mode is recomputed; the sidebar keeps its width and pin.
    pub fn set_role(&mut self, role: Role) {
        let previous = self.nav.role();
        self.nav.set_role(role);
        self.mode = views::mode_for(role);
        tracing::info!(from = %previous, to = %role, mode = ?self.mode, "role changed");
    }

    pub fn select_menu_item(&mut self, id: &str) {
        self.nav.select_menu_item(id);
    }

    pub fn select_submenu_item(&mut self, parent_id: &str, id: &str) {
        self.nav.select_submenu_item(parent_id, id);
    }

    pub fn toggle_sidebar_lock(&mut self) {
        self.sidebar.toggle_lock();
    }

    pub fn toggle_sidebar_collapse(&mut self) {
        self.sidebar.toggle_collapse();
    }

    pub fn pointer_enter_sidebar(&mut self) {
        self.sidebar.pointer_enter();
    }

    pub fn pointer_leave_sidebar(&mut self) {
        self.sidebar.pointer_leave();
    }

    pub fn role(&self) -> Role {
        self.nav.role()
    }

    pub fn mode(&self) -> ShellMode {
        self.mode
    }

    pub fn menu(&self) -> &'static [MenuItem] {
        self.nav.menu()
    }

    pub fn active_view_id(&self) -> &str {
        self.nav.active_view_id()
    }

    pub fn expanded_menus(&self) -> &BTreeSet<&'static str> {
        self.nav.expanded_menus()
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.nav
    }

    pub fn sidebar(&self) -> SidebarModel {
        self.sidebar
    }

    /// What the content area should mount right now.
    pub fn view(&self) -> ViewDescriptor {
        match self.mode {
            ShellMode::Standalone(app) => ViewDescriptor::Standalone { app },
            ShellMode::Shell => views::resolve(self.role(), self.active_view_id()),
        }
    }

    /// Menu labels leading to the active view. Ids outside the tree yield
    /// the raw id.
    pub fn breadcrumb(&self) -> Vec<String> {
        match label_path(self.menu(), self.active_view_id()) {
            Some(labels) => labels.into_iter().map(str::to_string).collect(),
            None => vec![self.active_view_id().to_string()],
        }
    }

    pub fn snapshot(&self) -> ShellSnapshot {
        ShellSnapshot {
            role: self.role(),
            mode: self.mode,
            menu: self.menu(),
            active_view_id: self.active_view_id().to_string(),
            expanded_menus: self.expanded_menus().clone(),
            sidebar: self.sidebar,
            view: self.view(),
        }
    }
}
