use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CompetitionMovement, Federation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl CompetitionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for CompetitionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompetitionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(Self::Upcoming),
            "ongoing" => Ok(Self::Ongoing),
            "completed" => Ok(Self::Completed),
            other => Err(format!(
                "unknown competition status '{}' (expected upcoming, ongoing or completed)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competition {
    pub competition_id: Uuid,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub slug: String,
    pub status: CompetitionStatus,
    pub venue: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub federation: Federation,
    #[serde(default)]
    pub movements: Vec<CompetitionMovement>,
}

impl Competition {
    /// Movements sorted by `display_order`, unordered ones last. Ties keep
    /// the order the server sent them in.
    pub fn movements_in_order(&self) -> Vec<&CompetitionMovement> {
        let mut movements: Vec<&CompetitionMovement> = self.movements.iter().collect();
        movements.sort_by_key(|m| (m.display_order.is_none(), m.display_order));
        movements
    }
}
