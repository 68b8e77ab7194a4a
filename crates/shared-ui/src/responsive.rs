//! Media query evaluation against a known viewport.
//!
//! Only the subset the portal uses is understood: width and height bounds in
//! pixels plus `prefers-color-scheme`, joined with `and`.

use std::fmt;

/// Snapshot of the browser window the queries are evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub prefers_dark: bool,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            prefers_dark: false,
        }
    }

    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::from_width(self.width)
    }

    pub fn is_mobile(&self) -> bool {
        self.breakpoint() == Breakpoint::Mobile
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Feature {
    MinWidth(f64),
    MaxWidth(f64),
    MinHeight(f64),
    MaxHeight(f64),
    PrefersDark(bool),
}

impl Feature {
    fn matches(self, v: &Viewport) -> bool {
        match self {
            Feature::MinWidth(px) => v.width >= px,
            Feature::MaxWidth(px) => v.width <= px,
            Feature::MinHeight(px) => v.height >= px,
            Feature::MaxHeight(px) => v.height <= px,
            Feature::PrefersDark(dark) => v.prefers_dark == dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError(String);

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported media query: {}", self.0)
    }
}

impl std::error::Error for QueryError {}

/// A parsed media query.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaQuery {
    features: Vec<Feature>,
}

impl MediaQuery {
    /// Parse e.g. `(min-width: 768px) and (max-width: 1023px)`. A leading
    /// `screen` or `all` media type is accepted and ignored.
    pub fn parse(query: &str) -> Result<Self, QueryError> {
        let err = || QueryError(query.to_string());
        let mut features = Vec::new();

        for (i, part) in query.split(" and ").enumerate() {
            let part = part.trim();
            if i == 0 && matches!(part, "screen" | "all") {
                continue;
            }
            let inner = part
                .strip_prefix('(')
                .and_then(|p| p.strip_suffix(')'))
                .ok_or_else(err)?;
            let (name, value) = inner.split_once(':').ok_or_else(err)?;
            let value = value.trim();
            let feature = match name.trim() {
                "min-width" => Feature::MinWidth(parse_px(value).ok_or_else(err)?),
                "max-width" => Feature::MaxWidth(parse_px(value).ok_or_else(err)?),
                "min-height" => Feature::MinHeight(parse_px(value).ok_or_else(err)?),
                "max-height" => Feature::MaxHeight(parse_px(value).ok_or_else(err)?),
                "prefers-color-scheme" => match value {
                    "dark" => Feature::PrefersDark(true),
                    "light" => Feature::PrefersDark(false),
                    _ => return Err(err()),
                },
                _ => return Err(err()),
            };
            features.push(feature);
        }

        if features.is_empty() {
            return Err(err());
        }
        Ok(Self { features })
    }

    pub fn matches(&self, viewport: &Viewport) -> bool {
        self.features.iter().all(|f| f.matches(viewport))
    }
}

fn parse_px(value: &str) -> Option<f64> {
    value.strip_suffix("px")?.trim().parse().ok()
}

/// Named width ranges used for layout decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// Below 768px.
    Mobile,
    /// 768px to 1023px.
    Tablet,
    /// 1024px to 1279px.
    Desktop,
    /// 1280px and up.
    Wide,
}

pub const MOBILE_QUERY: &str = "(max-width: 767px)";
pub const TABLET_QUERY: &str = "(min-width: 768px) and (max-width: 1023px)";
pub const DESKTOP_QUERY: &str = "(min-width: 1024px)";
pub const WIDE_QUERY: &str = "(min-width: 1280px)";
pub const DARK_MODE_QUERY: &str = "(prefers-color-scheme: dark)";

impl Breakpoint {
    pub fn from_width(width: f64) -> Self {
        if width < 768.0 {
            Breakpoint::Mobile
        } else if width < 1024.0 {
            Breakpoint::Tablet
        } else if width < 1280.0 {
            Breakpoint::Desktop
        } else {
            Breakpoint::Wide
        }
    }

    /// Query that matches this breakpoint. `Desktop` includes wide screens.
    pub fn query(self) -> &'static str {
        match self {
            Breakpoint::Mobile => MOBILE_QUERY,
            Breakpoint::Tablet => TABLET_QUERY,
            Breakpoint::Desktop => DESKTOP_QUERY,
            Breakpoint::Wide => WIDE_QUERY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(q: &str) -> MediaQuery {
        MediaQuery::parse(q).unwrap()
    }

    #[test]
    fn width_bounds_are_inclusive() {
        let q = query(TABLET_QUERY);
        assert!(!q.matches(&Viewport::new(767.0, 800.0)));
        assert!(q.matches(&Viewport::new(768.0, 800.0)));
        assert!(q.matches(&Viewport::new(1023.0, 800.0)));
        assert!(!q.matches(&Viewport::new(1024.0, 800.0)));
    }

    #[test]
    fn breakpoint_queries_agree_with_from_width() {
        for width in [320.0, 767.0, 768.0, 1000.0, 1023.0, 1024.0, 1279.0, 1280.0, 1920.0] {
            let v = Viewport::new(width, 900.0);
            let bp = Breakpoint::from_width(width);
            assert!(query(bp.query()).matches(&v), "{width} should match {bp:?}");
        }
        assert!(query(DESKTOP_QUERY).matches(&Viewport::new(1600.0, 900.0)));
        assert!(!query(WIDE_QUERY).matches(&Viewport::new(1279.0, 900.0)));
    }

    #[test]
    fn mobile_query_ends_below_768() {
        let q = query(MOBILE_QUERY);
        assert!(q.matches(&Viewport::new(767.0, 900.0)));
        assert!(!q.matches(&Viewport::new(768.0, 900.0)));
    }

    #[test]
    fn mobile_viewport() {
        assert!(Viewport::new(375.0, 812.0).is_mobile());
        assert!(!Viewport::new(768.0, 1024.0).is_mobile());
    }

    #[test]
    fn dark_mode_preference() {
        let q = query(DARK_MODE_QUERY);
        let mut v = Viewport::new(1024.0, 768.0);
        assert!(!q.matches(&v));
        v.prefers_dark = true;
        assert!(q.matches(&v));
        assert!(!query("(prefers-color-scheme: light)").matches(&v));
    }

    #[test]
    fn media_type_prefix_and_height() {
        let q = query("screen and (min-height: 600px)");
        assert!(q.matches(&Viewport::new(300.0, 600.0)));
        assert!(!q.matches(&Viewport::new(300.0, 599.0)));
    }

    #[test]
    fn unsupported_queries_are_rejected() {
        for bad in [
            "",
            "screen",
            "(orientation: landscape)",
            "(min-width: 40em)",
            "min-width: 100px",
            "(prefers-color-scheme: sepia)",
        ] {
            assert!(MediaQuery::parse(bad).is_err(), "{bad:?}");
        }
    }
}
