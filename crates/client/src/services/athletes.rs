use domain::dto::athlete::{AthleteDetail, CreateAthleteRequest, UpdateAthleteRequest};
use domain::models::Athlete;
use validator::Validate;

use crate::error::Result;
use crate::http::{ApiClient, RequestOptions};

/// List all athletes
pub async fn list(client: &ApiClient) -> Result<Vec<Athlete>> {
    client.get("/api/athletes", &RequestOptions::default()).await
}

/// Get athlete by slug
pub async fn get_by_slug(client: &ApiClient, slug: &str) -> Result<Athlete> {
    client
        .get(&format!("/api/athletes/{}", slug), &RequestOptions::default())
        .await
}

/// Get athlete with competition history and personal records
pub async fn get_detailed(client: &ApiClient, slug: &str) -> Result<AthleteDetail> {
    client
        .get(
            &format!("/api/athletes/{}/detailed", slug),
            &RequestOptions::default(),
        )
        .await
}

/// Create a new athlete. Requires an API key; invalid payloads are rejected
/// before any request is sent.
pub async fn create(client: &ApiClient, request: &CreateAthleteRequest) -> Result<Athlete> {
    request.validate()?;
    client
        .post("/api/athletes", Some(request), &RequestOptions::default())
        .await
}

/// Update an athlete. Requires an API key.
pub async fn update(
    client: &ApiClient,
    slug: &str,
    request: &UpdateAthleteRequest,
) -> Result<Athlete> {
    request.validate()?;
    client
        .put(
            &format!("/api/athletes/{}", slug),
            Some(request),
            &RequestOptions::default(),
        )
        .await
}

/// Delete an athlete. Requires an API key.
pub async fn delete(client: &ApiClient, slug: &str) -> Result<()> {
    client
        .delete(&format!("/api/athletes/{}", slug), &RequestOptions::default())
        .await
}
