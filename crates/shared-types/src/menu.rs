use serde::Serialize;

/// Icon shown next to a menu label. The presentation layer maps each variant
/// to a concrete glyph.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum IconRef {
    Dashboard,
    Academics,
    Finance,
    People,
    Research,
    Calendar,
    Attendance,
    Reports,
    Records,
    Library,
    Hostel,
    Examinations,
    Staff,
    Security,
    Notifications,
    Settings,
}

impl IconRef {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconRef::Dashboard => "dashboard",
            IconRef::Academics => "academics",
            IconRef::Finance => "finance",
            IconRef::People => "people",
            IconRef::Research => "research",
            IconRef::Calendar => "calendar",
            IconRef::Attendance => "attendance",
            IconRef::Reports => "reports",
            IconRef::Records => "records",
            IconRef::Library => "library",
            IconRef::Hostel => "hostel",
            IconRef::Examinations => "examinations",
            IconRef::Staff => "staff",
            IconRef::Security => "security",
            IconRef::Notifications => "notifications",
            IconRef::Settings => "settings",
        }
    }
}

/// One entry of a role's navigation tree.
///
/// Menu tables are `'static` data, so a tree is a `&'static [MenuItem]` and
/// two lookups for the same role return the same slice.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: IconRef,
    #[serde(skip_serializing_if = "no_children")]
    pub submenu: &'static [MenuItem],
}

fn no_children(submenu: &&'static [MenuItem]) -> bool {
    submenu.is_empty()
}

impl MenuItem {
    /// An item that selects a view when clicked.
    pub const fn leaf(id: &'static str, label: &'static str, icon: IconRef) -> Self {
        Self {
            id,
            label,
            icon,
            submenu: &[],
        }
    }

    /// An item that only expands or collapses its submenu when clicked.
    pub const fn parent(
        id: &'static str,
        label: &'static str,
        icon: IconRef,
        submenu: &'static [MenuItem],
    ) -> Self {
        Self {
            id,
            label,
            icon,
            submenu,
        }
    }

    pub fn is_parent(&self) -> bool {
        !self.submenu.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.submenu
            .iter()
            .any(|child| child.id == id || child.contains(id))
    }
}

/// Result of looking an id up in a menu tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuMatch<'a> {
    pub item: &'a MenuItem,
    /// Immediate parent, `None` for top-level items.
    pub parent: Option<&'a MenuItem>,
}

/// Depth-first search for `id`. Earlier entries win if a tree repeats an id.
pub fn find_item<'a>(tree: &'a [MenuItem], id: &str) -> Option<MenuMatch<'a>> {
    fn walk<'a>(
        items: &'a [MenuItem],
        parent: Option<&'a MenuItem>,
        id: &str,
    ) -> Option<MenuMatch<'a>> {
        for item in items {
            if item.id == id {
                return Some(MenuMatch { item, parent });
            }
            if let Some(found) = walk(item.submenu, Some(item), id) {
                return Some(found);
            }
        }
        None
    }
    walk(tree, None, id)
}

/// Labels from the top-level item down to `id`, or `None` if `id` is absent.
pub fn label_path(tree: &[MenuItem], id: &str) -> Option<Vec<&'static str>> {
    for item in tree {
        if item.id == id {
            return Some(vec![item.label]);
        }
        if let Some(mut rest) = label_path(item.submenu, id) {
            rest.insert(0, item.label);
            return Some(rest);
        }
    }
    None
}

/// Ids of every selectable (leaf) item, in display order.
pub fn leaf_ids(tree: &[MenuItem]) -> Vec<&'static str> {
    let mut out = Vec::new();
    for item in tree {
        if item.is_parent() {
            out.extend(leaf_ids(item.submenu));
        } else {
            out.push(item.id);
        }
    }
    out
}

/// Ids that occur more than once anywhere in the tree.
pub fn duplicate_ids(tree: &[MenuItem]) -> Vec<&'static str> {
    fn collect(items: &[MenuItem], seen: &mut Vec<&'static str>, dupes: &mut Vec<&'static str>) {
        for item in items {
            if seen.contains(&item.id) {
                if !dupes.contains(&item.id) {
                    dupes.push(item.id);
                }
            } else {
                seen.push(item.id);
            }
            collect(item.submenu, seen, dupes);
        }
    }
    let mut seen = Vec::new();
    let mut dupes = Vec::new();
    collect(tree, &mut seen, &mut dupes);
    dupes
}
