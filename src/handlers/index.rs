use askama::Template;
use axum::response::Html;

use crate::error::{AppError, Result};
use crate::version::GIT_VERSION;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    git_version: &'static str,
}

pub async fn index() -> Result<Html<String>> {
    let template = IndexTemplate {
        git_version: GIT_VERSION,
    };

    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    ))
}
