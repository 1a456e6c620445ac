//! Browser-facing HTML routes.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::api::AppState;
use crate::chart::render_pie;
use crate::search::{run_search, SearchError, SearchReport, SearchRequest};

#[derive(Debug, Deserialize)]
pub(crate) struct SearchQuery {
    pub screen_name: Option<String>,
}

pub(crate) async fn index() -> Html<String> {
    Html(layout(
        "tweetmood",
        r#"<form action="/search" method="get">
<label for="screen_name">Screen name</label>
<input id="screen_name" name="screen_name" placeholder="@screen_name" autocomplete="off" autofocus>
<button type="submit">Search</button>
</form>"#,
    ))
}

/// Missing, invalid, and unknown screen names all send the browser back to
/// the index page.
pub(crate) async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Response {
    let Some(request) = SearchRequest::parse(query.screen_name.as_deref()) else {
        return Redirect::to("/").into_response();
    };

    match run_search(&state, &request).await {
        Ok(report) => Html(render_report(&report)).into_response(),
        Err(SearchError::NotFound) => Redirect::to("/").into_response(),
        Err(SearchError::Upstream(e)) => {
            tracing::error!(screen_name = %request.screen_name, error = %e, "timeline fetch failed");
            (
                StatusCode::BAD_GATEWAY,
                Html(layout(
                    "tweetmood",
                    "<p>Could not fetch that timeline right now. Please try again later.</p>\
                     <p><a href=\"/\">Back</a></p>",
                )),
            )
                .into_response()
        }
    }
}

fn render_report(report: &SearchReport) -> String {
    let name = escape_html(&report.screen_name);
    let tally = report.tally;
    let body = format!(
        "<h2>@{name}</h2>\n{chart}\n<table>\
         <tr><th>positive</th><td>{positive}</td></tr>\
         <tr><th>negative</th><td>{negative}</td></tr>\
         <tr><th>neutral</th><td>{neutral}</td></tr>\
         </table>\n<p><a href=\"/\">Search again</a></p>",
        chart = render_pie(&tally),
        positive = tally.positive,
        negative = tally.negative,
        neutral = tally.neutral,
    );
    layout(&format!("@{name} | tweetmood"), &body)
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n</head>\n<body>\n<h1><a href=\"/\">tweetmood</a></h1>\n{body}\n</body>\n</html>\n"
    )
}

pub(crate) fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
