use serde::Serialize;
use shared_types::SidebarDefaults;

/// The four observable sidebar states.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SidebarPhase {
    WideLocked,
    NarrowLocked,
    /// Unlocked and expanded, normally because the pointer is over it.
    WideUnlockedHovered,
    NarrowUnlockedIdle,
}

/// Width and pinning of the sidebar.
///
/// While unlocked the width follows the pointer. While locked only the
/// explicit collapse control changes it.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SidebarModel {
    collapsed: bool,
    locked: bool,
}

impl Default for SidebarModel {
    fn default() -> Self {
        Self::from_defaults(SidebarDefaults::default())
    }
}

impl SidebarModel {
    pub fn new(collapsed: bool, locked: bool) -> Self {
        Self { collapsed, locked }
    }

    pub fn from_defaults(defaults: SidebarDefaults) -> Self {
        Self::new(defaults.collapsed, defaults.locked)
    }

    pub fn toggle_lock(&mut self) {
        self.locked = !self.locked;
        tracing::debug!(locked = self.locked, "sidebar lock toggled");
    }

    /// Explicit expand/collapse button. Expanding while unlocked also pins
    /// the sidebar so a stale hover state cannot collapse it again.
    pub fn toggle_collapse(&mut self) {
        self.collapsed = !self.collapsed;
        if !self.collapsed && !self.locked {
            self.locked = true;
        }
        tracing::debug!(
            collapsed = self.collapsed,
            locked = self.locked,
            "sidebar collapse toggled"
        );
    }

    pub fn pointer_enter(&mut self) {
        if !self.locked {
            self.collapsed = false;
        }
    }

    pub fn pointer_leave(&mut self) {
        if !self.locked {
            self.collapsed = true;
        }
    }

    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    /// Icon plus label when true, icon only when false.
    pub fn renders_wide(&self) -> bool {
        !self.collapsed
    }

    pub fn phase(&self) -> SidebarPhase {
        match (self.locked, self.collapsed) {
            (true, false) => SidebarPhase::WideLocked,
            (true, true) => SidebarPhase::NarrowLocked,
            (false, false) => SidebarPhase::WideUnlockedHovered,
            (false, true) => SidebarPhase::NarrowUnlockedIdle,
        }
    }
}
