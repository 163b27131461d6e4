use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Named JSON resources exposed by the dashboard API.
///
/// The set is closed: each variant maps to exactly one `<name>.json` file
/// in the data directory, and the mapping never changes at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dataset {
    MarketShare,
    RevenueTrends,
    MarketSegmentation,
}

impl Dataset {
    pub const ALL: [Dataset; 3] = [
        Dataset::MarketShare,
        Dataset::RevenueTrends,
        Dataset::MarketSegmentation,
    ];

    // Identifier used in routes and file names.
    pub fn name(self) -> &'static str {
        match self {
            Dataset::MarketShare => "marketShare",
            Dataset::RevenueTrends => "revenueTrends",
            Dataset::MarketSegmentation => "marketSegmentation",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.json", self.name())
    }

    // Resolve the backing file inside the given data directory.
    pub fn path_in(self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name())
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownDataset(pub String);

impl fmt::Display for UnknownDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown dataset: {}", self.0)
    }
}

impl std::error::Error for UnknownDataset {}

impl FromStr for Dataset {
    type Err = UnknownDataset;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Dataset::ALL
            .into_iter()
            .find(|dataset| dataset.name() == name)
            .ok_or_else(|| UnknownDataset(name.to_string()))
    }
}
