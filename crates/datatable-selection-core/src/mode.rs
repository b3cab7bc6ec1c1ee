//! Selection mode and the options a data table exposes for row selection.

use crate::error::ParseSelectModeError;
use std::fmt;
use std::str::FromStr;

/// How many rows may be selected at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SelectMode {
    /// Radio-style: selecting a row replaces the previous selection.
    Single,
    /// Checkbox-style: rows are added to and removed from the selection independently.
    #[default]
    Multiple,
}

impl SelectMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SelectMode::Single => "single",
            SelectMode::Multiple => "multiple",
        }
    }
}

impl fmt::Display for SelectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectMode {
    type Err = ParseSelectModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "single" => Ok(SelectMode::Single),
            "multiple" => Ok(SelectMode::Multiple),
            other => Err(ParseSelectModeError {
                value: other.to_string(),
            }),
        }
    }
}

/// Options for [`SelectableRows`](crate::selection::SelectableRows).
///
/// Selection is disabled by default; a table opts in by setting `selectable`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct SelectableOptions {
    pub selectable: bool,
    pub select_mode: SelectMode,
}

impl SelectableOptions {
    pub fn new(select_mode: SelectMode) -> Self {
        Self {
            selectable: true,
            select_mode,
        }
    }

    pub fn single() -> Self {
        Self::new(SelectMode::Single)
    }

    pub fn multiple() -> Self {
        Self::new(SelectMode::Multiple)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mode_names() {
        assert_eq!("single".parse::<SelectMode>(), Ok(SelectMode::Single));
        assert_eq!(" multiple ".parse::<SelectMode>(), Ok(SelectMode::Multiple));
        let err = "multi".parse::<SelectMode>().unwrap_err();
        assert_eq!(err.value, "multi");
        assert_eq!(
            err.to_string(),
            "unknown select mode 'multi', expected 'single' or 'multiple'"
        );
    }

    #[test]
    fn display_matches_parse() {
        for mode in [SelectMode::Single, SelectMode::Multiple] {
            assert_eq!(mode.to_string().parse::<SelectMode>(), Ok(mode));
        }
    }

    #[test]
    fn defaults_disable_selection() {
        let opts = SelectableOptions::default();
        assert!(!opts.selectable);
        assert_eq!(opts.select_mode, SelectMode::Multiple);
        assert!(SelectableOptions::single().selectable);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn options_deserialize_with_defaults() {
        let opts: SelectableOptions =
            serde_json::from_str(r#"{ "select-mode": "single" }"#).unwrap();
        assert_eq!(
            opts,
            SelectableOptions {
                selectable: false,
                select_mode: SelectMode::Single,
            }
        );
    }
}
