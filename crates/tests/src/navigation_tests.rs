use navigation::{NavigationController, Selection};
use pretty_assertions::assert_eq;
use shared_types::Role;

#[test]
fn test_initial_state_per_role() {
    let admin = NavigationController::new(Role::Admin);
    assert_eq!(admin.active_view_id(), "dashboard");
    assert!(admin.expanded_menus().is_empty());

    let student = NavigationController::new(Role::Student);
    assert_eq!(student.active_view_id(), "student-home");
}

#[test]
fn test_parent_click_toggles_without_changing_active_view() {
    let mut nav = NavigationController::new(Role::Admin);
    assert_eq!(
        nav.select_menu_item("academics"),
        Selection::Toggled { expanded: true }
    );
    assert!(nav.is_expanded("academics"));
    assert_eq!(nav.active_view_id(), "dashboard");

    assert_eq!(
        nav.select_menu_item("academics"),
        Selection::Toggled { expanded: false }
    );
    assert!(!nav.is_expanded("academics"));
    assert_eq!(nav, NavigationController::new(Role::Admin));
}

#[test]
fn test_several_parents_can_be_open_at_once() {
    let mut nav = NavigationController::new(Role::Admin);
    nav.select_menu_item("finance");
    nav.select_menu_item("hr");
    let open: Vec<&str> = nav.expanded_menus().iter().copied().collect();
    assert_eq!(open, vec!["finance", "hr"]);
}

#[test]
fn test_leaf_click_activates_and_keeps_expansion() {
    let mut nav = NavigationController::new(Role::Admin);
    nav.select_menu_item("finance");
    assert_eq!(nav.select_submenu_item("finance", "payroll"), Selection::Activated);
    assert_eq!(nav.active_view_id(), "payroll");
    assert!(nav.is_expanded("finance"));
}

#[test]
fn test_top_level_leaf_click_activates() {
    let mut nav = NavigationController::new(Role::Admin);
    assert_eq!(nav.select_menu_item("library"), Selection::Activated);
    assert_eq!(nav.active_view_id(), "library");
}

#[test]
fn test_unknown_id_becomes_active() {
    let mut nav = NavigationController::new(Role::Faculty);
    assert_eq!(nav.select_menu_item("nonexistent-id"), Selection::Unlisted);
    assert_eq!(nav.active_view_id(), "nonexistent-id");
}

#[test]
fn test_submenu_item_under_wrong_parent_still_activates() {
    let mut nav = NavigationController::new(Role::Admin);
    assert_eq!(nav.select_submenu_item("hr", "grants"), Selection::Activated);
    assert_eq!(nav.active_view_id(), "grants");
}

#[test]
fn test_branch_activity_follows_active_leaf() {
    let mut nav = NavigationController::new(Role::Admin);
    nav.select_submenu_item("research", "publications");
    assert!(nav.is_branch_active("research"));
    assert!(nav.is_branch_active("publications"));
    assert!(!nav.is_branch_active("finance"));
    assert!(!nav.is_branch_active("dashboard"));
}

#[test]
fn test_set_role_discards_previous_state() {
    let mut nav = NavigationController::new(Role::Admin);
    nav.select_menu_item("academics");
    nav.select_submenu_item("academics", "courses");
    nav.set_role(Role::Department);
    assert_eq!(nav, NavigationController::new(Role::Department));
}

#[test]
fn test_set_same_role_still_resets() {
    let mut nav = NavigationController::new(Role::Admin);
    nav.select_menu_item("finance");
    nav.select_submenu_item("finance", "budget");
    nav.set_role(Role::Admin);
    assert_eq!(nav.active_view_id(), "dashboard");
    assert!(nav.expanded_menus().is_empty());
}
