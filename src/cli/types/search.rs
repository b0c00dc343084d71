//! Search request parameters: search type and result count.

use crate::error::{CompareError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which ranking backend the search runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// Combined keyword and embedding ranking (`combine_score`).
    #[default]
    Hybrid,
    /// Embedding similarity only (`similarity_score`).
    Semantic,
}

impl SearchType {
    /// Wire value sent in the request body.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Hybrid => "hybrid",
            SearchType::Semantic => "semantic",
        }
    }

    /// Heading text for a results page.
    pub fn display_name(&self) -> &'static str {
        match self {
            SearchType::Hybrid => "Hybrid",
            SearchType::Semantic => "Semantic Only",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchType {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "hybrid" => Ok(SearchType::Hybrid),
            "semantic" => Ok(SearchType::Semantic),
            _ => Err(CompareError::InvalidSearchType {
                value: s.to_string(),
            }),
        }
    }
}

/// Number of results requested from the search backend (1..=50).
///
/// # Examples
///
/// ```rust
/// use player_compare::TopK;
///
/// assert_eq!("10".parse::<TopK>().unwrap().as_u8(), 10);
/// assert!("0".parse::<TopK>().is_err());
/// assert!("51".parse::<TopK>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct TopK(u8);

impl TopK {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 50;

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl Default for TopK {
    fn default() -> Self {
        Self(10)
    }
}

impl TryFrom<i64> for TopK {
    type Error = CompareError;

    fn try_from(requested: i64) -> Result<Self> {
        if requested < i64::from(Self::MIN) || requested > i64::from(Self::MAX) {
            return Err(CompareError::ResultCountOutOfRange {
                requested,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(requested as u8))
    }
}

impl From<TopK> for u8 {
    fn from(top_k: TopK) -> Self {
        top_k.0
    }
}

impl FromStr for TopK {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self> {
        let requested: i64 = s.trim().parse()?;
        Self::try_from(requested)
    }
}

impl fmt::Display for TopK {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
