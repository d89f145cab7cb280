use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown page size '{0}'. Expected one of: letter, tabloid, ANSI-A, ANSI-B, ANSI-C, ANSI-D")]
pub struct UnknownPageSize(pub String);

/// Sheet sizes accepted for shop drawings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageSize {
    #[default]
    #[serde(rename = "letter")]
    Letter,
    #[serde(rename = "tabloid")]
    Tabloid,
    #[serde(rename = "ANSI-A")]
    AnsiA,
    #[serde(rename = "ANSI-B")]
    AnsiB,
    #[serde(rename = "ANSI-C")]
    AnsiC,
    #[serde(rename = "ANSI-D")]
    AnsiD,
}

impl PageSize {
    pub const ALL: [PageSize; 6] = [
        PageSize::Letter,
        PageSize::Tabloid,
        PageSize::AnsiA,
        PageSize::AnsiB,
        PageSize::AnsiC,
        PageSize::AnsiD,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PageSize::Letter => "letter",
            PageSize::Tabloid => "tabloid",
            PageSize::AnsiA => "ANSI-A",
            PageSize::AnsiB => "ANSI-B",
            PageSize::AnsiC => "ANSI-C",
            PageSize::AnsiD => "ANSI-D",
        }
    }

    /// Landscape sheet dimensions in inches (width, height).
    pub fn dimensions_in(self) -> (f64, f64) {
        match self {
            PageSize::Letter | PageSize::AnsiA => (11.0, 8.5),
            PageSize::Tabloid | PageSize::AnsiB => (17.0, 11.0),
            PageSize::AnsiC => (22.0, 17.0),
            PageSize::AnsiD => (34.0, 22.0),
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PageSize {
    type Err = UnknownPageSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.name() == s)
            .ok_or_else(|| UnknownPageSize(s.to_string()))
    }
}
