//! Corpus partitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The partition a document belongs to.
///
/// Only TRAIN documents feed the vocabulary, the estimator and feature
/// selection, only TEST documents are evaluated, and OTHER documents are
/// never used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Split {
    Train,
    Test,
    Other,
}

impl Split {
    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "TRAIN",
            Split::Test => "TEST",
            Split::Other => "OTHER",
        }
    }
}

impl FromStr for Split {
    type Err = std::convert::Infallible;

    /// `TRAIN` and `TEST` (case-insensitive); anything else is `Other`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = match s.trim().to_ascii_uppercase().as_str() {
            "TRAIN" => Split::Train,
            "TEST" => Split::Test,
            _ => Split::Other,
        };
        Ok(split)
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_split() {
        assert_eq!("TRAIN".parse::<Split>().unwrap(), Split::Train);
        assert_eq!("test".parse::<Split>().unwrap(), Split::Test);
        assert_eq!("NOT-USED".parse::<Split>().unwrap(), Split::Other);
        assert_eq!("".parse::<Split>().unwrap(), Split::Other);
    }

    #[test]
    fn test_display() {
        assert_eq!(Split::Train.to_string(), "TRAIN");
        assert_eq!(Split::Other.to_string(), "OTHER");
    }
}
