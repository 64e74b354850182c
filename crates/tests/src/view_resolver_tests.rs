use navigation::{menus, views};
use pretty_assertions::assert_eq;
use shared_types::{leaf_ids, Role, ShellMode, StandaloneApp, ViewDescriptor, ViewKind};

use crate::common::SHELL_ROLES;

#[test]
fn test_mode_per_role() {
    assert_eq!(views::mode_for(Role::Admin), ShellMode::Shell);
    assert_eq!(views::mode_for(Role::Faculty), ShellMode::Shell);
    assert_eq!(views::mode_for(Role::Department), ShellMode::Shell);
    assert_eq!(
        views::mode_for(Role::Student),
        ShellMode::Standalone(StandaloneApp::StudentPortal)
    );
    assert_eq!(
        views::mode_for(Role::Lecturer),
        ShellMode::Standalone(StandaloneApp::LecturerPortal)
    );
}

#[test]
fn test_dashboard_is_role_specific() {
    let kinds: Vec<ViewDescriptor> = SHELL_ROLES
        .iter()
        .map(|role| views::resolve(*role, "dashboard"))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ViewDescriptor::View { view: ViewKind::AdminDashboard },
            ViewDescriptor::View { view: ViewKind::FacultyDashboard },
            ViewDescriptor::View { view: ViewKind::DepartmentDashboard },
        ]
    );
}

#[test]
fn test_finance_overview_resolves() {
    assert_eq!(
        views::resolve(Role::Admin, "finance-overview"),
        ViewDescriptor::View { view: ViewKind::FinanceOverview }
    );
}

#[test]
fn test_unregistered_menu_leaves_render_as_placeholders() {
    for id in ["budget", "recruitment", "hostel", "settings"] {
        assert_eq!(
            views::resolve(Role::Admin, id),
            ViewDescriptor::placeholder(id),
            "{id}"
        );
    }
}

#[test]
fn test_every_shell_leaf_resolves_to_something_renderable() {
    for role in SHELL_ROLES {
        for id in leaf_ids(menus::resolve(role)) {
            match views::resolve(role, id) {
                ViewDescriptor::View { .. } => {}
                ViewDescriptor::Placeholder { label } => assert_eq!(label, id),
                ViewDescriptor::Standalone { .. } => panic!("{role}/{id} resolved standalone"),
            }
        }
    }
}

#[test]
fn test_standalone_roles_ignore_active_id() {
    for id in ["dashboard", "payroll", "nonexistent-id", ""] {
        assert_eq!(
            views::resolve(Role::Student, id),
            ViewDescriptor::Standalone { app: StandaloneApp::StudentPortal }
        );
    }
}

#[test]
fn test_placeholder_title_is_the_raw_id() {
    let view = views::resolve(Role::Department, "nonexistent-id");
    assert!(view.is_placeholder());
    assert_eq!(view.title(), "nonexistent-id");
}

#[test]
fn test_descriptor_serializes_tagged() {
    let json = serde_json::to_value(views::resolve(Role::Admin, "payroll")).unwrap();
    assert_eq!(json, serde_json::json!({ "kind": "view", "view": "payroll" }));
    let json = serde_json::to_value(views::resolve(Role::Lecturer, "dashboard")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "kind": "standalone", "app": "lecturer_portal" })
    );
}
