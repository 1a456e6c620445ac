use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use tweetmood_analyzer::{Score, Sentiment};

use crate::middleware::RequestId;
use crate::pages::SearchQuery;
use crate::search::{run_search, SearchError, SearchRequest};

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct SearchData {
    pub screen_name: String,
    pub positive: u32,
    pub negative: u32,
    pub neutral: u32,
    pub total: u32,
}

#[derive(Debug, Deserialize)]
pub(super) struct ScoreRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub(super) struct ScoreData {
    pub score: Score,
    pub sentiment: Sentiment,
}

pub(super) async fn search_timeline(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<SearchData>>, ApiError> {
    let request = SearchRequest::parse(query.screen_name.as_deref()).ok_or_else(|| {
        ApiError::new(
            req_id.0.clone(),
            "validation_error",
            "screen_name must be 1-15 letters, digits or underscores",
        )
    })?;

    let report = run_search(&state, &request)
        .await
        .map_err(|e| match e {
            SearchError::NotFound => ApiError::new(
                req_id.0.clone(),
                "not_found",
                format!("no results for @{}", request.screen_name),
            ),
            SearchError::Upstream(err) => {
                tracing::error!(screen_name = %request.screen_name, error = %err, "timeline fetch failed");
                ApiError::new(req_id.0.clone(), "upstream_error", "timeline fetch failed")
            }
        })?;

    Ok(Json(ApiResponse {
        data: SearchData {
            screen_name: report.screen_name,
            positive: report.tally.positive,
            negative: report.tally.negative,
            neutral: report.tally.neutral,
            total: report.tally.total(),
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn score_text(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<ScoreRequest>,
) -> Json<ApiResponse<ScoreData>> {
    let score = state.analyzer.score(&body.text);
    Json(ApiResponse {
        data: ScoreData {
            score,
            sentiment: Sentiment::from_score(score),
        },
        meta: ResponseMeta::new(req_id.0),
    })
}
