//! Contributor handlers
//!
//! Read-only endpoints over the contributors feed.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Contributor;
use crate::domain::ports::{FeedFetcher, FeedFilter};
use crate::error::AppError;
use crate::AppState;

/// Query params for GET /contributors
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<usize>,
    #[serde(default)]
    pub offset: usize,
    /// `field:value[,value]` filters separated by `;`
    pub filters: Option<String>,
}

/// Contributor list response
#[derive(Debug, Serialize, Deserialize)]
pub struct ContributorListResponse {
    pub contributors: Vec<Contributor>,
    pub total_shown: usize,
}

impl From<Vec<Contributor>> for ContributorListResponse {
    fn from(contributors: Vec<Contributor>) -> Self {
        Self {
            total_shown: contributors.len(),
            contributors,
        }
    }
}

/// GET /contributors
///
/// Contributors in feed order, optionally paginated and filtered.
pub async fn list_contributors<F: FeedFetcher + 'static>(
    State(state): State<AppState<F>>,
    Query(params): Query<ListParams>,
) -> Result<Json<ContributorListResponse>, AppError> {
    let filters = params
        .filters
        .as_deref()
        .map(FeedFilter::parse_list)
        .transpose()
        .map_err(AppError::BadRequest)?
        .unwrap_or_default();

    let contributors = state
        .contributor_service
        .list_all(params.limit, params.offset, &filters)
        .await?;

    Ok(Json(contributors.into()))
}

/// GET /vips
///
/// VIP contributors sorted by name.
pub async fn list_vips<F: FeedFetcher + 'static>(
    State(state): State<AppState<F>>,
) -> Result<Json<ContributorListResponse>, AppError> {
    let vips = state.contributor_service.list_vips().await?;
    Ok(Json(vips.into()))
}

/// GET /contributors/:username
///
/// A single contributor. Unknown usernames get the anonymous placeholder.
pub async fn get_contributor<F: FeedFetcher + 'static>(
    State(state): State<AppState<F>>,
    Path(username): Path<String>,
) -> Result<Json<Contributor>, AppError> {
    let contributor = state
        .contributor_service
        .find_by_username(&username)
        .await?;

    if contributor.is_anonymous() && username != contributor.username {
        tracing::info!("Contributor '{}' not in feed, serving placeholder", username);
    }

    Ok(Json(contributor))
}
