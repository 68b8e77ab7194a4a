/// How a navigation item decides it is the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Only the item's own path. Used for dashboards and leaf pages.
    Exact,
    /// The item's path or anything beneath it. Used for lists with detail
    /// children, e.g. `/healthworker/infants` for `/healthworker/infants/7`.
    Prefix,
}

/// Drop query, fragment and trailing slashes. The root stays `/`.
pub fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Whether an item targeting `item_path` should be highlighted at `location`.
/// Prefix matches respect segment boundaries.
pub fn is_active(item_path: &str, mode: MatchMode, location: &str) -> bool {
    let item = normalize_path(item_path);
    let location = normalize_path(location);
    match mode {
        MatchMode::Exact => item == location,
        MatchMode::Prefix => {
            item == location
                || (item == "/" && location.starts_with('/'))
                || location
                    .strip_prefix(item)
                    .is_some_and(|rest| rest.starts_with('/'))
        }
    }
}
