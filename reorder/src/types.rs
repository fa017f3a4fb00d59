use alloc::string::String;
use core::fmt;

/// Reserved prefix carried by every placeholder marker.
///
/// Real item identifiers must never start with this string.
pub const PLACEHOLDER_PREFIX: &str = "__reorder_placeholder__";

/// Returns `true` when `marker` names a placeholder entry rather than a real item.
pub fn is_placeholder_marker(marker: &str) -> bool {
    marker.starts_with(PLACEHOLDER_PREFIX)
}

/// A point in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// An axis-aligned box in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Returns this rect moved by `(dx, dy)`.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            ..*self
        }
    }

    /// The smallest rect containing both `self` and `other`.
    pub fn union(self, other: Rect) -> Self {
        let left = self.left.min(other.left);
        let top = self.top.min(other.top);
        Self {
            left,
            top,
            width: self.right().max(other.right()) - left,
            height: self.bottom().max(other.bottom()) - top,
        }
    }
}

/// Vertical direction of travel inferred from consecutive pointer samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalDirection {
    Up,
    #[default]
    Down,
}

/// Where the placeholder currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaceholderPosition {
    /// Index the dragged item would take in the committed order.
    At(usize),
    /// The dragged item is outside the list and would be removed on release.
    Ejected,
}

impl PlaceholderPosition {
    pub fn item_index(self) -> Option<usize> {
        match self {
            Self::At(index) => Some(index),
            Self::Ejected => None,
        }
    }

    pub fn is_ejected(self) -> bool {
        matches!(self, Self::Ejected)
    }
}

/// Identifier of a transient placeholder entry.
///
/// Holds only the generated suffix; the reserved prefix is applied by [`PlaceholderId::marker`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceholderId(String);

impl PlaceholderId {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self(suffix.into())
    }

    pub fn suffix(&self) -> &str {
        &self.0
    }

    /// The marker attribute rendered for this placeholder (`prefix + suffix`).
    pub fn marker(&self) -> String {
        let mut out = String::with_capacity(PLACEHOLDER_PREFIX.len() + self.0.len());
        out.push_str(PLACEHOLDER_PREFIX);
        out.push_str(&self.0);
        out
    }
}

impl fmt::Display for PlaceholderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PLACEHOLDER_PREFIX)?;
        f.write_str(&self.0)
    }
}

/// One displayed entry: either a real item or the placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Entry<K> {
    Item(K),
    Placeholder(PlaceholderId),
}

impl<K> Entry<K> {
    pub fn item(&self) -> Option<&K> {
        match self {
            Self::Item(key) => Some(key),
            Self::Placeholder(_) => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

impl<K: PartialEq> Entry<K> {
    pub(crate) fn is_item(&self, key: &K) -> bool {
        matches!(self, Self::Item(k) if k == key)
    }
}
