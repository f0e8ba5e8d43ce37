use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::PaginatedResponse;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingMovement {
    Muscleup,
    Pullup,
    Dips,
    Squat,
    #[default]
    Total,
}

impl RankingMovement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Muscleup => "muscleup",
            Self::Pullup => "pullup",
            Self::Dips => "dips",
            Self::Squat => "squat",
            Self::Total => "total",
        }
    }
}

impl fmt::Display for RankingMovement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankingMovement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "muscleup" => Ok(Self::Muscleup),
            "pullup" => Ok(Self::Pullup),
            "dips" => Ok(Self::Dips),
            "squat" => Ok(Self::Squat),
            "total" => Ok(Self::Total),
            other => Err(format!("unknown movement '{}'", other)),
        }
    }
}

/// Query for the global ranking. `pagination` is always sent; the other
/// fields only when set.
#[derive(Debug, Clone, Default)]
pub struct RankingFilters {
    pub pagination: u32,
    pub gender: Option<String>,
    pub country: Option<String>,
    pub movement: Option<RankingMovement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalRankingEntry {
    pub rank: i64,
    pub athlete: AthleteInfo,
    pub ris: f64,
    pub total: f64,
    pub muscleup: f64,
    pub pullup: f64,
    pub dips: f64,
    pub squat: f64,
    pub competition: CompetitionInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthleteInfo {
    pub athlete_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub slug: String,
    pub country: String,
    pub gender: String,
    pub bodyweight: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitionInfo {
    pub competition_id: Uuid,
    pub name: String,
    pub date: Option<NaiveDate>,
}

pub type RankingsResponse = PaginatedResponse<GlobalRankingEntry>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_wire_format() {
        assert_eq!(
            serde_json::to_string(&RankingMovement::Muscleup).unwrap(),
            "\"muscleup\""
        );
        assert_eq!(RankingMovement::default(), RankingMovement::Total);
        assert_eq!("dips".parse::<RankingMovement>(), Ok(RankingMovement::Dips));
        assert!("bench".parse::<RankingMovement>().is_err());
    }

    #[test]
    fn test_deserialize_rankings_response() {
        let body = r#"{
            "data": [{
                "rank": 1,
                "athlete": {
                    "athlete_id": "2f0c9d64-1b4e-4f7a-8a39-3b8f1e7d9c21",
                    "first_name": "Jane",
                    "last_name": "Doe",
                    "slug": "jane-doe",
                    "country": "France",
                    "gender": "F",
                    "bodyweight": 61.4
                },
                "ris": 512.3,
                "total": 180.0,
                "muscleup": 20.0,
                "pullup": 50.0,
                "dips": 60.0,
                "squat": 50.0,
                "competition": {
                    "competition_id": "6f1c2a5e-8d1b-4c8e-9a57-0c6c4d7e2b11",
                    "name": "World Cup 2024",
                    "date": "2024-06-01"
                }
            }],
            "pagination": { "page": 1, "page_size": 50, "total_items": 1, "total_pages": 1 }
        }"#;

        let response: RankingsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].athlete.slug, "jane-doe");
        assert_eq!(
            response.data[0].competition.date,
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
        assert_eq!(response.pagination.total_items, 1);
    }
}
