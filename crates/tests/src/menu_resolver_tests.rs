use navigation::menus;
use pretty_assertions::assert_eq;
use shared_types::{duplicate_ids, find_item, leaf_ids, Role};

use crate::common::SHELL_ROLES;

#[test]
fn test_every_role_has_a_non_empty_menu() {
    for role in Role::ALL {
        assert!(!menus::resolve(role).is_empty(), "{role} has no menu");
    }
}

#[test]
fn test_resolve_is_referentially_stable() {
    for role in Role::ALL {
        assert!(std::ptr::eq(menus::resolve(role), menus::resolve(role)));
    }
}

#[test]
fn test_ids_are_unique_within_each_tree() {
    for role in Role::ALL {
        assert_eq!(duplicate_ids(menus::resolve(role)), Vec::<&str>::new(), "{role}");
    }
}

#[test]
fn test_shell_roles_start_with_dashboard() {
    for role in SHELL_ROLES {
        assert_eq!(menus::resolve(role)[0].id, "dashboard");
    }
}

#[test]
fn test_admin_menu_has_finance_submenu() {
    let menu = menus::resolve(Role::Admin);
    let finance = find_item(menu, "finance").expect("admin has finance");
    assert!(finance.item.is_parent());
    assert!(finance.parent.is_none());
    let overview = find_item(menu, "finance-overview").expect("finance overview");
    assert_eq!(overview.parent.map(|p| p.id), Some("finance"));
}

#[test]
fn test_student_and_lecturer_menus_are_flat() {
    for role in [Role::Student, Role::Lecturer] {
        let menu = menus::resolve(role);
        assert!(menu.iter().all(|item| !item.is_parent()), "{role}");
        assert_eq!(leaf_ids(menu).len(), menu.len());
    }
}

#[test]
fn test_unknown_key_falls_back_to_admin() {
    let admin = menus::resolve(Role::Admin);
    assert!(std::ptr::eq(menus::resolve_key("janitor"), admin));
    assert!(std::ptr::eq(menus::resolve_key(""), admin));
}

#[test]
fn test_key_lookup_is_case_insensitive() {
    assert!(std::ptr::eq(
        menus::resolve_key("Faculty"),
        menus::resolve(Role::Faculty)
    ));
    assert!(std::ptr::eq(
        menus::resolve_key(" student "),
        menus::resolve(Role::Student)
    ));
}

#[test]
fn test_menu_serializes_without_empty_submenus() {
    let json = serde_json::to_value(menus::resolve(Role::Lecturer)).unwrap();
    let first = &json[0];
    assert_eq!(first["id"], "lecturer-home");
    assert!(first.get("submenu").is_none());
}
