// Languiny Layout Type
// Closed set of physical keyboard layouts known to the engine

use std::fmt;
use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString, FromRepr, IntoStaticStr};

/// A physical keyboard layout.
///
/// The numeric discriminant is the layout identifier used across the C
/// boundary (`0` = US English, `1` = Russian). New layouts are added as new
/// variants together with their mapping tables.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    FromRepr,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[repr(i32)]
pub enum Layout {
    /// US English (QWERTY)
    #[strum(to_string = "en_US", serialize = "en-US", serialize = "enus", serialize = "us", serialize = "en")]
    EnUS = 0,
    /// Russian (ЙЦУКЕН)
    #[strum(to_string = "ru_RU", serialize = "ru-RU", serialize = "ruru", serialize = "ru")]
    RuRU = 1,
}

/// Errors raised when a layout identifier is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("unknown layout id: {0}")]
    UnknownLayout(i32),

    #[error("unknown layout name: '{0}'")]
    UnknownLayoutName(String),
}

impl Layout {
    /// Numeric identifier of this layout
    pub const fn id(self) -> i32 {
        self as i32
    }

    /// Canonical locale-style name (e.g. `en_US`)
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Resolve a numeric identifier
    pub fn from_id(id: i32) -> Result<Self, LayoutError> {
        Self::from_repr(id).ok_or(LayoutError::UnknownLayout(id))
    }

    /// Resolve a layout name, ignoring ASCII case and surrounding whitespace
    pub fn from_name(name: &str) -> Result<Self, LayoutError> {
        Self::from_str(name.trim()).map_err(|_| LayoutError::UnknownLayoutName(name.to_string()))
    }

    /// Every supported layout, in identifier order
    pub fn all() -> impl Iterator<Item = Layout> {
        Self::iter()
    }
}

impl TryFrom<i32> for Layout {
    type Error = LayoutError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        Self::from_id(id)
    }
}

impl From<Layout> for i32 {
    fn from(layout: Layout) -> Self {
        layout.id()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_ids() {
        assert_eq!(Layout::EnUS.id(), 0);
        assert_eq!(Layout::RuRU.id(), 1);
        assert_eq!(Layout::from_id(0), Ok(Layout::EnUS));
        assert_eq!(Layout::from_id(1), Ok(Layout::RuRU));
    }

    #[test]
    fn test_unknown_layout_id() {
        assert_eq!(Layout::from_id(2), Err(LayoutError::UnknownLayout(2)));
        assert_eq!(Layout::try_from(-1), Err(LayoutError::UnknownLayout(-1)));
    }

    #[test]
    fn test_layout_names() {
        assert_eq!(Layout::EnUS.to_string(), "en_US");
        assert_eq!(Layout::RuRU.name(), "ru_RU");
        assert_eq!(Layout::from_name("en_US"), Ok(Layout::EnUS));
        assert_eq!(Layout::from_name(" EN-us "), Ok(Layout::EnUS));
        assert_eq!(Layout::from_name("RU"), Ok(Layout::RuRU));
        assert!(matches!(
            Layout::from_name("de_DE"),
            Err(LayoutError::UnknownLayoutName(_))
        ));
    }

    #[test]
    fn test_all_layouts_in_id_order() {
        let ids: Vec<i32> = Layout::all().map(Layout::id).collect();
        assert_eq!(ids, vec![0, 1]);
    }
}
