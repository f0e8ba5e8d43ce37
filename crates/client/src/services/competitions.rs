use domain::dto::competition::{CompetitionDetail, CompetitionFilters, RankingScope};
use domain::models::Competition;

use crate::error::Result;
use crate::http::{ApiClient, QueryParams, RequestOptions};

/// List competitions with federation and movements
pub async fn get_all(
    client: &ApiClient,
    filters: Option<&CompetitionFilters>,
) -> Result<Vec<Competition>> {
    let params = filters.map(filter_params).unwrap_or_default();
    client
        .get("/api/competitions/detailed", &RequestOptions::with_params(params))
        .await
}

/// Get a competition with its categories and participants, ranked within
/// `scope` (`group` when not given)
pub async fn get_by_id(
    client: &ApiClient,
    slug: &str,
    scope: Option<RankingScope>,
) -> Result<CompetitionDetail> {
    let params = QueryParams::new().with("ranking_scope", scope.unwrap_or_default());
    client
        .get(
            &format!("/api/competitions/{}/detailed", slug),
            &RequestOptions::with_params(params),
        )
        .await
}

fn filter_params(filters: &CompetitionFilters) -> QueryParams {
    let mut params = QueryParams::new();

    if let Some(status) = filters.status {
        params.push("status", status);
    }
    if let Some(country) = &filters.country {
        params.push("country", country);
    }
    if let Some(search) = &filters.search {
        params.push("search", search);
    }

    params
}
