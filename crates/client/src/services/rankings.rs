use domain::dto::ranking::{RankingFilters, RankingsResponse};

use crate::error::Result;
use crate::http::{ApiClient, QueryParams, RequestOptions};

/// Get a page of the global ranking
pub async fn get_global_rankings(
    client: &ApiClient,
    filters: &RankingFilters,
) -> Result<RankingsResponse> {
    client
        .get(
            "/api/rankings/global",
            &RequestOptions::with_params(ranking_params(filters)),
        )
        .await
}

/// `pagination` is always present. `gender`, `country` and `movement` are
/// left out entirely when unset or empty.
fn ranking_params(filters: &RankingFilters) -> QueryParams {
    let mut params = QueryParams::new().with("pagination", filters.pagination);

    if let Some(gender) = non_empty(&filters.gender) {
        params.push("gender", gender);
    }
    if let Some(country) = non_empty(&filters.country) {
        params.push("country", country);
    }
    if let Some(movement) = filters.movement {
        params.push("movement", movement);
    }

    params
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
