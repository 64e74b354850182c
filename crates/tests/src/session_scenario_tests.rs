use navigation::{ShellEvent, SidebarModel, SidebarPhase};
use pretty_assertions::assert_eq;
use shared_types::{Role, ShellMode, StandaloneApp, ViewDescriptor, ViewKind};

use crate::common::{replay, select, select_sub, session_for};

#[test]
fn test_admin_opens_finance_then_switches_to_student() {
    let mut session = session_for(Role::Admin);
    replay(
        &mut session,
        [select("finance"), select_sub("finance", "finance-overview")],
    );
    assert_eq!(session.active_view_id(), "finance-overview");
    assert_eq!(
        session.view(),
        ViewDescriptor::View { view: ViewKind::FinanceOverview }
    );
    assert_eq!(session.breadcrumb(), vec!["Finance", "Overview"]);

    let mode = session.apply(ShellEvent::SetRole { role: Role::Student });
    assert_eq!(mode, ShellMode::Standalone(StandaloneApp::StudentPortal));
    assert_eq!(session.active_view_id(), "student-home");
    assert!(session.expanded_menus().is_empty());
    assert_eq!(
        session.view(),
        ViewDescriptor::Standalone { app: StandaloneApp::StudentPortal }
    );
}

#[test]
fn test_switching_back_from_standalone_restores_shell() {
    let mut session = session_for(Role::Lecturer);
    assert_eq!(
        session.mode(),
        ShellMode::Standalone(StandaloneApp::LecturerPortal)
    );
    let mode = session.apply(ShellEvent::SetRole { role: Role::Faculty });
    assert_eq!(mode, ShellMode::Shell);
    assert_eq!(
        session.view(),
        ViewDescriptor::View { view: ViewKind::FacultyDashboard }
    );
}

#[test]
fn test_toggling_academics_twice_restores_snapshot() {
    let mut session = session_for(Role::Admin);
    let before = session.snapshot();
    replay(&mut session, [select("academics"), select("academics")]);
    assert_eq!(session.snapshot(), before);
}

#[test]
fn test_nonexistent_id_renders_placeholder() {
    let mut session = session_for(Role::Admin);
    session.apply(select("nonexistent-id"));
    assert_eq!(session.view(), ViewDescriptor::placeholder("nonexistent-id"));
    assert_eq!(session.breadcrumb(), vec!["nonexistent-id"]);
}

#[test]
fn test_role_change_preserves_sidebar() {
    let mut session = session_for(Role::Admin);
    replay(
        &mut session,
        [ShellEvent::ToggleSidebarLock, ShellEvent::PointerLeaveSidebar],
    );
    assert_eq!(session.sidebar().phase(), SidebarPhase::NarrowUnlockedIdle);
    session.apply(ShellEvent::SetRole { role: Role::Department });
    assert_eq!(session.sidebar(), SidebarModel::new(true, false));
}

#[test]
fn test_click_then_pointer_leave_in_same_frame() {
    // Unlocked and hovered: the user expands a parent and the pointer leaves
    // before the next render. Both events apply in order.
    let mut session = session_for(Role::Admin);
    replay(
        &mut session,
        [
            ShellEvent::ToggleSidebarLock,
            ShellEvent::PointerEnterSidebar,
            select("research"),
            ShellEvent::PointerLeaveSidebar,
        ],
    );
    assert!(session.navigation().is_expanded("research"));
    assert_eq!(session.sidebar().phase(), SidebarPhase::NarrowUnlockedIdle);
}

#[test]
fn test_snapshot_serializes_for_inspection() {
    let mut session = session_for(Role::Department);
    replay(&mut session, [select("staff"), select_sub("staff", "leave-management")]);
    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["role"], "department");
    assert_eq!(json["mode"]["mode"], "shell");
    assert_eq!(json["active_view_id"], "leave-management");
    assert_eq!(json["expanded_menus"], serde_json::json!(["staff"]));
    assert_eq!(json["view"]["view"], "leave_management");
}

#[test]
fn test_events_round_trip_through_json() {
    let events = vec![
        ShellEvent::SetRole { role: Role::Faculty },
        select_sub("academics", "courses"),
        ShellEvent::ToggleSidebarCollapse,
    ];
    let json = serde_json::to_string(&events).unwrap();
    let parsed: Vec<ShellEvent> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, events);
}
