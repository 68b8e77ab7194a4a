use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBaby, LdBuilding, LdCalendar, LdFileText, LdLayoutDashboard, LdScrollText, LdServer,
    LdStethoscope, LdSyringe, LdUserCog, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::Role;
use shared_ui::{is_active, MatchMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Dashboard,
    Parents,
    Infants,
    Visits,
    Vaccinations,
    Schedules,
    Reports,
    Facilities,
    Users,
    System,
    Logs,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub label: &'static str,
    pub icon: MenuIcon,
    pub target: Route,
    pub mode: MatchMode,
}

impl MenuItem {
    fn new(label: &'static str, icon: MenuIcon, target: Route, mode: MatchMode) -> Self {
        Self {
            label,
            icon,
            target,
            mode,
        }
    }

    pub fn is_active(&self, location: &str) -> bool {
        is_active(&self.target.to_string(), self.mode, location)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuSection {
    pub title: &'static str,
    pub items: Vec<MenuItem>,
}

/// Sidebar contents for a portal.
pub fn menu(role: Role) -> Vec<MenuSection> {
    use MatchMode::{Exact, Prefix};
    use MenuIcon::*;

    let overview = |target| MenuSection {
        title: "Overview",
        items: vec![MenuItem::new("Dashboard", Dashboard, target, Exact)],
    };

    match role {
        Role::HealthWorker => vec![
            overview(Route::HealthWorkerDashboard {}),
            MenuSection {
                title: "Records",
                items: vec![
                    MenuItem::new("Parents", Parents, Route::ParentList {}, Prefix),
                    MenuItem::new("Infants", Infants, Route::InfantList {}, Prefix),
                ],
            },
            MenuSection {
                title: "Care",
                items: vec![
                    MenuItem::new("Visits", Visits, Route::VisitList {}, Exact),
                    MenuItem::new("Vaccinations", Vaccinations, Route::VaccinationList {}, Exact),
                    MenuItem::new("Schedules", Schedules, Route::ScheduleList {}, Exact),
                ],
            },
        ],
        Role::DataAnalyst => vec![
            overview(Route::AnalystDashboard {}),
            MenuSection {
                title: "Analytics",
                items: vec![
                    MenuItem::new("Reports", Reports, Route::Reports {}, Exact),
                    MenuItem::new("Coverage", Vaccinations, Route::CoverageReport {}, Exact),
                ],
            },
            MenuSection {
                title: "Directory",
                items: vec![MenuItem::new(
                    "Facilities",
                    Facilities,
                    Route::FacilityDirectory {},
                    Exact,
                )],
            },
        ],
        Role::SuperAdmin => vec![
            overview(Route::AdminDashboard {}),
            MenuSection {
                title: "Administration",
                items: vec![
                    MenuItem::new("Facilities", Facilities, Route::FacilityAdmin {}, Exact),
                    MenuItem::new("Users", Users, Route::UserAdmin {}, Exact),
                ],
            },
            MenuSection {
                title: "Monitoring",
                items: vec![
                    MenuItem::new("System", System, Route::SystemStatus {}, Exact),
                    MenuItem::new("Logs", Logs, Route::SystemLogs {}, Exact),
                ],
            },
        ],
    }
}

pub fn menu_icon(icon: MenuIcon) -> Element {
    match icon {
        MenuIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        MenuIcon::Parents => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        MenuIcon::Infants => rsx! { Icon::<LdBaby> { icon: LdBaby, width: 18, height: 18 } },
        MenuIcon::Visits => rsx! { Icon::<LdStethoscope> { icon: LdStethoscope, width: 18, height: 18 } },
        MenuIcon::Vaccinations => rsx! { Icon::<LdSyringe> { icon: LdSyringe, width: 18, height: 18 } },
        MenuIcon::Schedules => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
        MenuIcon::Reports => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        MenuIcon::Facilities => rsx! { Icon::<LdBuilding> { icon: LdBuilding, width: 18, height: 18 } },
        MenuIcon::Users => rsx! { Icon::<LdUserCog> { icon: LdUserCog, width: 18, height: 18 } },
        MenuIcon::System => rsx! { Icon::<LdServer> { icon: LdServer, width: 18, height: 18 } },
        MenuIcon::Logs => rsx! { Icon::<LdScrollText> { icon: LdScrollText, width: 18, height: 18 } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::table::route_table;
    use shared_types::ALL_ROLES;

    fn concrete(path: String) -> String {
        path.replace(":id", "1")
    }

    #[test]
    fn every_item_targets_a_page_of_its_own_portal() {
        for role in ALL_ROLES.iter().copied() {
            let pages: Vec<String> = route_table(Some(role))
                .iter()
                .map(|d| d.full_path(Some(role)))
                .collect();
            for section in menu(role) {
                for item in section.items {
                    let path = item.target.to_string();
                    assert!(pages.contains(&path), "{role:?}: {path}");
                }
            }
        }
    }

    #[test]
    fn exactly_one_item_is_active_on_every_page() {
        for role in ALL_ROLES.iter().copied() {
            let items: Vec<MenuItem> = menu(role).into_iter().flat_map(|s| s.items).collect();
            for page in route_table(Some(role)) {
                let location = concrete(page.full_path(Some(role)));
                let active: Vec<_> = items
                    .iter()
                    .filter(|i| i.is_active(&location))
                    .map(|i| i.label)
                    .collect();
                assert_eq!(active.len(), 1, "{location}: {active:?}");
            }
        }
    }

    #[test]
    fn dashboards_use_exact_matching() {
        for role in ALL_ROLES.iter().copied() {
            let first = &menu(role)[0].items[0];
            assert_eq!(first.mode, MatchMode::Exact);
            assert_eq!(first.target, Route::home(role));
        }
    }
}
