use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Athlete {
    pub athlete_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub slug: String,
    pub gender: String,
    pub nationality: Option<String>,
    pub country: String,
    pub profile_picture_url: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

