use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBookOpen, LdBriefcase, LdCalendar, LdClock, LdFileText, LdFolder,
    LdLayoutDashboard, LdLock, LdLockOpen, LdPackage, LdScale, LdSearch, LdSettings, LdShield,
    LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::IconRef;

const ICON_SIZE: u32 = 18;

/// Glyph for a menu entry.
#[component]
pub fn MenuIcon(icon: IconRef) -> Element {
    match icon {
        IconRef::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: ICON_SIZE, height: ICON_SIZE } },
        IconRef::Academics | IconRef::Library => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: ICON_SIZE, height: ICON_SIZE } },
        IconRef::Finance => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: ICON_SIZE, height: ICON_SIZE } },
        IconRef::People => rsx! { Icon::<LdUsers> { icon: LdUsers, width: ICON_SIZE, height: ICON_SIZE } },
        IconRef::Research => rsx! { Icon::<LdSearch> { icon: LdSearch, width: ICON_SIZE, height: ICON_SIZE } },
        IconRef::Calendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: ICON_SIZE, height: ICON_SIZE } },
        IconRef::Attendance => rsx! { Icon::<LdClock> { icon: LdClock, width: ICON_SIZE, height: ICON_SIZE } },
        IconRef::Reports => rsx! { Icon::<LdFileText> { icon: LdFileText, width: ICON_SIZE, height: ICON_SIZE } },
        IconRef::Records => rsx! { Icon::<LdFolder> { icon: LdFolder, width: ICON_SIZE, height: ICON_SIZE } },
        IconRef::Hostel => rsx! { Icon::<LdPackage> { icon: LdPackage, width: ICON_SIZE, height: ICON_SIZE } },
        IconRef::Examinations => rsx! { Icon::<LdScale> { icon: LdScale, width: ICON_SIZE, height: ICON_SIZE } },
        IconRef::Staff => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: ICON_SIZE, height: ICON_SIZE } },
        IconRef::Security => rsx! { Icon::<LdShield> { icon: LdShield, width: ICON_SIZE, height: ICON_SIZE } },
        IconRef::Notifications => rsx! { Icon::<LdBell> { icon: LdBell, width: ICON_SIZE, height: ICON_SIZE } },
        IconRef::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: ICON_SIZE, height: ICON_SIZE } },
    }
}

/// Pin state glyph for the sidebar lock toggle.
#[component]
pub fn LockIcon(locked: bool) -> Element {
    if locked {
        rsx! { Icon::<LdLock> { icon: LdLock, width: 16, height: 16 } }
    } else {
        rsx! { Icon::<LdLockOpen> { icon: LdLockOpen, width: 16, height: 16 } }
    }
}
