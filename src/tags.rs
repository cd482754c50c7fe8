//! Locating condition regions inside choice labels.
//!
//! A label carries at most one disable region and one hide region:
//!
//! ```text
//! <dis>\v[1] < 3</dis>Buy the sword<hide>\v[2] == 1</hide>
//! ```
//!
//! Extraction removes both regions (markers included) and hands back the raw
//! condition text of each. Everything outside the regions is kept verbatim.

use std::{fmt, ops::Range};

/// Open/close marker pair delimiting one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPair {
    pub open: String,
    pub close: String,
}

impl TagPair {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        TagPair {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Locate the first open marker and the first close marker after it.
    fn find_in(&self, text: &str) -> Option<Region> {
        if self.open.is_empty() || self.close.is_empty() {
            return None;
        }
        let start = text.find(&self.open)?;
        let content_start = start + self.open.len();
        let content_end = content_start + text[content_start..].find(&self.close)?;
        Some(Region {
            span: start..content_end + self.close.len(),
            content: content_start..content_end,
        })
    }
}

/// Markers recognised for each kind of condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSet {
    pub disable: TagPair,
    pub hide: TagPair,
}

impl Default for TagSet {
    /// `<dis>…</dis>` and `<hide>…</hide>`
    fn default() -> Self {
        TagSet {
            disable: TagPair::new("<dis>", "</dis>"),
            hide: TagPair::new("<hide>", "</hide>"),
        }
    }
}

impl TagSet {
    /// `<disable>…</disable>` and `<hide>…</hide>`
    pub fn long_form() -> Self {
        TagSet {
            disable: TagPair::new("<disable>", "</disable>"),
            ..TagSet::default()
        }
    }

    pub fn with_disable(mut self, pair: TagPair) -> Self {
        self.disable = pair;
        self
    }

    pub fn with_hide(mut self, pair: TagPair) -> Self {
        self.hide = pair;
        self
    }

    pub fn pair(&self, kind: TagKind) -> &TagPair {
        match kind {
            TagKind::Disable => &self.disable,
            TagKind::Hide => &self.hide,
        }
    }
}

/// Which flag a condition controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Disable,
    Hide,
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagKind::Disable => f.write_str("disable"),
            TagKind::Hide => f.write_str("hide"),
        }
    }
}

#[derive(Debug, Clone)]
struct Region {
    /// Markers and content
    span: Range<usize>,
    content: Range<usize>,
}

/// A label with its condition regions taken out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extracted {
    /// Label text with the regions removed
    pub text: String,
    /// Raw disable condition, if a region was found
    pub disable: Option<String>,
    /// Raw hide condition, if a region was found
    pub hide: Option<String>,
}

impl Extracted {
    pub fn condition(&self, kind: TagKind) -> Option<&str> {
        match kind {
            TagKind::Disable => self.disable.as_deref(),
            TagKind::Hide => self.hide.as_deref(),
        }
    }
}

/// Strip up to one disable and one hide region from `text`.
///
/// If the two regions overlap, the one that starts first is kept and the
/// other is ignored.
///
/// # Examples
///
/// ```
/// use choice_conditions::tags::{extract, TagSet};
///
/// let out = extract("<hide>true</hide>test<dis>false</dis>choice", &TagSet::default());
/// assert_eq!(out.text, "testchoice");
/// assert_eq!(out.disable.as_deref(), Some("false"));
/// assert_eq!(out.hide.as_deref(), Some("true"));
/// ```
pub fn extract(text: &str, tags: &TagSet) -> Extracted {
    let mut found: Vec<(TagKind, Region)> = [TagKind::Disable, TagKind::Hide]
        .into_iter()
        .filter_map(|kind| tags.pair(kind).find_in(text).map(|r| (kind, r)))
        .collect();
    found.sort_by_key(|(_, region)| region.span.start);

    if let [(_, first), (kind, second)] = found.as_slice()
        && second.span.start < first.span.end
    {
        log::debug!("ignoring {} region nested in another region: {:?}", kind, text);
        found.pop();
    }

    let mut out = Extracted::default();
    let mut cursor = 0;
    for (kind, region) in found {
        out.text.push_str(&text[cursor..region.span.start]);
        cursor = region.span.end;

        let raw = text[region.content].to_string();
        match kind {
            TagKind::Disable => out.disable = Some(raw),
            TagKind::Hide => out.hide = Some(raw),
        }
    }
    out.text.push_str(&text[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_region_is_ignored() {
        let out = extract("<dis>1 <hide>true</hide></dis>label", &TagSet::default());
        assert_eq!(out.text, "label");
        assert_eq!(out.disable.as_deref(), Some("1 <hide>true</hide>"));
        assert_eq!(out.hide, None);
    }

    #[test]
    fn close_before_open_is_not_a_region() {
        let out = extract("</dis>a<dis>b", &TagSet::default());
        assert_eq!(out.text, "</dis>a<dis>b");
        assert_eq!(out.disable, None);
    }

    #[test]
    fn empty_markers_never_match() {
        let tags = TagSet::default().with_hide(TagPair::new("", ""));
        let out = extract("plain", &tags);
        assert_eq!(out.text, "plain");
        assert_eq!(out.hide, None);
    }
}
