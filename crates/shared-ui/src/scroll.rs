//! Scroll-derived UI state: which page section is current, and whether the
//! top bar should cast a shadow.

/// Vertical extent of one observed section, in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, bottom: f64) -> Self {
        Self {
            id: id.into(),
            top,
            bottom,
        }
    }

    fn contains(&self, y: f64) -> bool {
        self.top <= y && y < self.bottom
    }
}

/// Id of the section the reader is looking at.
///
/// `sections` must be in document order. `offset` shifts the probe point
/// down from the top of the viewport, usually by the sticky header height.
/// Above the first section the first one is current; at or past the end of
/// the last one, the last is. A probe that falls between two sections yields
/// `None` so the caller can keep whatever it showed before.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<&str> {
    let first = sections.first()?;
    let last = sections.last()?;
    let probe = scroll_y + offset;

    if probe < first.top {
        return Some(&first.id);
    }
    if probe >= last.bottom {
        return Some(&last.id);
    }
    sections
        .iter()
        .find(|s| s.contains(probe))
        .map(|s| s.id.as_str())
}

pub const DEFAULT_SHADOW_THRESHOLD: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Elevation {
    #[default]
    Resting,
    Elevated,
}

impl Elevation {
    pub fn as_str(self) -> &'static str {
        match self {
            Elevation::Resting => "resting",
            Elevation::Elevated => "elevated",
        }
    }
}

/// The top bar lifts once the page has scrolled strictly past `threshold`.
pub fn elevation(scroll_y: f64, threshold: f64) -> Elevation {
    if scroll_y > threshold {
        Elevation::Elevated
    } else {
        Elevation::Resting
    }
}
