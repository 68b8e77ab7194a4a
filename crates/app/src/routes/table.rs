//! Flat, ordered description of every page per portal. Drives page titles
//! and is checked against the router in tests.

use shared_types::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Path relative to the portal prefix. `:name` marks a parameter segment.
    pub path: &'static str,
    pub title: &'static str,
}

const fn page(path: &'static str, title: &'static str) -> RouteDescriptor {
    RouteDescriptor { path, title }
}

const AUTH: &[RouteDescriptor] = &[
    page("signin", "Sign in"),
    page("signup", "Create account"),
    page("forgot-password", "Forgot password"),
    page("verify-otp", "Verify code"),
];

const HEALTH_WORKER: &[RouteDescriptor] = &[
    page("dashboard", "Dashboard"),
    page("parents", "Parents"),
    page("parents/new", "New parent"),
    page("parents/:id", "Parent details"),
    page("infants", "Infants"),
    page("infants/:id", "Infant details"),
    page("visits", "Visits"),
    page("vaccinations", "Vaccinations"),
    page("schedules", "Schedules"),
];

const DATA_ANALYST: &[RouteDescriptor] = &[
    page("dashboard", "Dashboard"),
    page("reports", "Reports"),
    page("vaccinations", "Vaccination coverage"),
    page("facilities", "Facilities"),
];

const SUPER_ADMIN: &[RouteDescriptor] = &[
    page("dashboard", "Dashboard"),
    page("facilities", "Facilities"),
    page("users", "Users"),
    page("system", "System status"),
    page("logs", "Logs"),
];

/// Pages of one portal in menu order. `None` is the unauthenticated area.
pub fn route_table(role: Option<Role>) -> &'static [RouteDescriptor] {
    match role {
        None => AUTH,
        Some(Role::HealthWorker) => HEALTH_WORKER,
        Some(Role::DataAnalyst) => DATA_ANALYST,
        Some(Role::SuperAdmin) => SUPER_ADMIN,
    }
}

pub fn area_prefix(role: Option<Role>) -> &'static str {
    role.map_or("/auth", |r| r.path_prefix())
}

impl RouteDescriptor {
    pub fn full_path(&self, role: Option<Role>) -> String {
        format!("{}/{}", area_prefix(role), self.path)
    }

    fn matches(&self, relative: &str) -> bool {
        let pattern = self.path.split('/');
        let mut actual = relative.split('/');
        for segment in pattern {
            match actual.next() {
                Some(value) if segment.starts_with(':') && !value.is_empty() => {}
                Some(value) if value == segment => {}
                _ => return false,
            }
        }
        actual.next().is_none()
    }
}

/// Title of the page at `location`, if it belongs to the portal.
pub fn title_for(role: Option<Role>, location: &str) -> Option<&'static str> {
    let location = shared_ui::nav::normalize_path(location);
    let relative = location
        .strip_prefix(area_prefix(role))?
        .strip_prefix('/')?;
    route_table(role)
        .iter()
        .find(|d| d.matches(relative))
        .map(|d| d.title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Route;
    use pretty_assertions::assert_eq;
    use shared_types::ALL_ROLES;
    use std::collections::HashSet;

    fn areas() -> Vec<Option<Role>> {
        std::iter::once(None)
            .chain(ALL_ROLES.iter().copied().map(Some))
            .collect()
    }

    fn concrete(path: &str) -> String {
        path.split('/')
            .map(|s| if s.starts_with(':') { "1" } else { s })
            .collect::<Vec<_>>()
            .join("/")
    }

    #[test]
    fn paths_are_non_empty_and_unique_per_area() {
        for role in areas() {
            let table = route_table(role);
            assert!(!table.is_empty());
            let unique: HashSet<_> = table.iter().map(|d| d.path).collect();
            assert_eq!(unique.len(), table.len(), "{role:?}");
            assert!(table.iter().all(|d| !d.path.is_empty()));
        }
    }

    #[test]
    fn every_descriptor_resolves_to_a_real_route() {
        for role in areas() {
            for d in route_table(role) {
                let path = concrete(&d.full_path(role));
                let route: Route = path.parse().unwrap_or_else(|e| panic!("{path}: {e}"));
                assert!(!matches!(route, Route::NotFound { .. }), "{path}");
            }
        }
    }

    #[test]
    fn titles_follow_table_order() {
        let hw = Some(Role::HealthWorker);
        assert_eq!(title_for(hw, "/healthworker/parents/new"), Some("New parent"));
        assert_eq!(title_for(hw, "/healthworker/parents/12/"), Some("Parent details"));
        assert_eq!(title_for(hw, "/healthworker/parents"), Some("Parents"));
        assert_eq!(title_for(hw, "/healthworker/parents/12/extra"), None);
        assert_eq!(title_for(hw, "/superadmin/users"), None);
        assert_eq!(title_for(None, "/auth/verify-otp"), Some("Verify code"));
    }
}
