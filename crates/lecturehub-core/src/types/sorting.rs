//! Sort orders for the lecture catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Sort order for lecture catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LectureSort {
    /// Most recently created first.
    Recent,
    /// Highest enrolled head count first.
    Popular,
    /// Highest enrollment rate (current / max) first.
    Rate,
}

impl LectureSort {
    /// Return the SQL `ORDER BY` clause for this sort order.
    ///
    /// The returned fragments are static strings, never user input.
    pub fn order_by_sql(&self) -> &'static str {
        match self {
            Self::Recent => "created_at DESC",
            Self::Popular => "current_participants DESC",
            Self::Rate => "(current_participants::float / max_participants) DESC",
        }
    }
}

impl Default for LectureSort {
    fn default() -> Self {
        Self::Popular
    }
}

impl fmt::Display for LectureSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Recent => "recent",
            Self::Popular => "popular",
            Self::Rate => "rate",
        };
        write!(f, "{s}")
    }
}

impl FromStr for LectureSort {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "recent" => Ok(Self::Recent),
            "popular" => Ok(Self::Popular),
            "rate" => Ok(Self::Rate),
            _ => Err(AppError::validation(format!(
                "Invalid sort order: '{s}'. Expected one of: recent, popular, rate"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("recent".parse::<LectureSort>().unwrap(), LectureSort::Recent);
        assert_eq!("RATE".parse::<LectureSort>().unwrap(), LectureSort::Rate);
        assert!("alphabetical".parse::<LectureSort>().is_err());
    }

    #[test]
    fn test_default_is_popular() {
        assert_eq!(LectureSort::default(), LectureSort::Popular);
    }
}
