use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Athlete profile with competition history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthleteDetail {
    pub athlete_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub slug: String,
    pub gender: String,
    pub nationality: Option<String>,
    pub country: String,
    pub profile_picture_url: Option<String>,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub competitions: Vec<AthleteCompetitionSummary>,
    #[serde(default)]
    pub personal_records: Vec<PersonalRecord>,
    pub total_competitions: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthleteCompetitionSummary {
    pub competition_id: Uuid,
    pub competition_name: String,
    pub competition_slug: String,
    pub competition_date: Option<chrono::NaiveDate>,
    pub category_name: String,
    pub rank: Option<i32>,
    pub total: rust_decimal::Decimal,
    pub ris_score: Option<rust_decimal::Decimal>,
    pub is_disqualified: bool,
}

/// Best successful lift for one movement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalRecord {
    pub movement_name: String,
    pub max_weight: rust_decimal::Decimal,
    pub competition_name: String,
    pub competition_slug: String,
    pub date: Option<chrono::NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAthleteRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "First name must be between 1 and 255 characters"
    ))]
    pub first_name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Last name must be between 1 and 255 characters"
    ))]
    pub last_name: String,

    #[validate(custom(function = "validate_gender"))]
    pub gender: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255))]
    pub nationality: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Country is required"))]
    pub country: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url)]
    #[validate(length(max = 500))]
    pub profile_picture_url: Option<String>,
}

/// Partial update; unset fields are left out of the payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateAthleteRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255))]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255))]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_gender"))]
    pub gender: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255))]
    pub nationality: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255))]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url)]
    #[validate(length(max = 500))]
    pub profile_picture_url: Option<String>,
}

fn validate_gender(gender: &str) -> Result<(), validator::ValidationError> {
    const VALID_GENDERS: &[&str] = &["M", "F", "MX"];

    if VALID_GENDERS.contains(&gender) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_gender"))
    }
}
