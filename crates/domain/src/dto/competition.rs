use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Competition, CompetitionStatus};

/// Filters for the competition list. Only fields that are set become query
/// parameters.
#[derive(Debug, Clone, Default)]
pub struct CompetitionFilters {
    pub status: Option<CompetitionStatus>,
    pub country: Option<String>,
    pub search: Option<String>,
}

/// Peer set that participant ranks are computed against in a competition
/// detail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingScope {
    #[default]
    Group,
    Category,
}

impl RankingScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for RankingScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankingScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "group" => Ok(Self::Group),
            "category" => Ok(Self::Category),
            other => Err(format!(
                "unknown ranking scope '{}' (expected group or category)",
                other
            )),
        }
    }
}

/// Competition with its categories, participants and lifts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitionDetail {
    #[serde(flatten)]
    pub competition: Competition,
    #[serde(default)]
    pub categories: Vec<CategoryDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub category_id: i32,
    pub name: String,
    pub gender: String,
    pub weight_class_min: Option<Decimal>,
    pub weight_class_max: Option<Decimal>,
    #[serde(default)]
    pub participants: Vec<ParticipantDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantDetail {
    pub rank: Option<i32>,
    pub athlete: AthleteInfo,
    pub bodyweight: Option<Decimal>,
    pub total: Option<Decimal>,
    pub ris_score: Option<Decimal>,
    #[serde(default)]
    pub is_disqualified: bool,
    pub disqualified_reason: Option<String>,
    #[serde(default)]
    pub lifts: Vec<LiftDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthleteInfo {
    pub athlete_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub slug: String,
    pub country: String,
    pub gender: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiftDetail {
    pub movement_name: String,
    pub max_weight: Decimal,
    #[serde(default)]
    pub attempts: Vec<AttemptInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptInfo {
    pub attempt_number: i16,
    pub weight: Decimal,
    pub is_successful: bool,
    pub no_rep_reason: Option<String>,
}
