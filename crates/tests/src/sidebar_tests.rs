use navigation::{SidebarModel, SidebarPhase};
use pretty_assertions::assert_eq;

#[test]
fn test_locked_sidebar_ignores_pointer() {
    let mut sidebar = SidebarModel::new(false, true);
    sidebar.pointer_leave();
    assert_eq!(sidebar.phase(), SidebarPhase::WideLocked);

    let mut sidebar = SidebarModel::new(true, true);
    sidebar.pointer_enter();
    assert_eq!(sidebar.phase(), SidebarPhase::NarrowLocked);
}

#[test]
fn test_unlocked_sidebar_follows_pointer() {
    let mut sidebar = SidebarModel::new(true, false);
    sidebar.pointer_enter();
    assert_eq!(sidebar.phase(), SidebarPhase::WideUnlockedHovered);
    assert!(sidebar.renders_wide());
    sidebar.pointer_leave();
    assert_eq!(sidebar.phase(), SidebarPhase::NarrowUnlockedIdle);
    assert!(!sidebar.renders_wide());
}

#[test]
fn test_lock_toggle_keeps_width() {
    let mut sidebar = SidebarModel::new(true, true);
    sidebar.toggle_lock();
    assert_eq!(sidebar, SidebarModel::new(true, false));
    sidebar.toggle_lock();
    assert_eq!(sidebar, SidebarModel::new(true, true));
}

#[test]
fn test_collapse_while_locked_stays_locked() {
    let mut sidebar = SidebarModel::default();
    sidebar.toggle_collapse();
    assert_eq!(sidebar.phase(), SidebarPhase::NarrowLocked);
    sidebar.toggle_collapse();
    assert_eq!(sidebar.phase(), SidebarPhase::WideLocked);
}

#[test]
fn test_expanding_unlocked_sidebar_pins_it() {
    let mut sidebar = SidebarModel::new(true, false);
    sidebar.toggle_collapse();
    assert_eq!(sidebar.phase(), SidebarPhase::WideLocked);
    sidebar.pointer_leave();
    assert!(!sidebar.collapsed());
}

#[test]
fn test_collapsing_unlocked_sidebar_leaves_it_unlocked() {
    let mut sidebar = SidebarModel::new(false, false);
    sidebar.toggle_collapse();
    assert_eq!(sidebar.phase(), SidebarPhase::NarrowUnlockedIdle);
    sidebar.pointer_enter();
    assert_eq!(sidebar.phase(), SidebarPhase::WideUnlockedHovered);
}

#[test]
fn test_phase_serializes_snake_case() {
    let json = serde_json::to_string(&SidebarPhase::WideUnlockedHovered).unwrap();
    assert_eq!(json, "\"wide_unlocked_hovered\"");
}
