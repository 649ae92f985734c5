//! Product detail route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};

use driftwood_core::{ProductId, resolve};

use crate::catalog;
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::state::AppState;

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub download_url: String,
    pub details_html: Option<String>,
    pub instructions_url: Option<String>,
    pub video_embed_url: Option<String>,
}

/// Display the protected product detail page.
///
/// Resolves the id against a fresh catalog snapshot; the feed has no
/// lookup-by-id of its own. An unknown id renders the not-found state.
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(_visitor): RequireAuth,
    Path(id): Path<String>,
) -> Result<ProductShowTemplate> {
    let records = state.catalog().load().await?;

    let product_id = ProductId::from(id);
    let record = resolve::find_product(&product_id, &records)
        .ok_or_else(|| AppError::NotFound(product_id.to_string()))?;

    let instructions_url = record
        .details
        .as_deref()
        .and_then(resolve::instructions_link)
        .map(str::to_string);
    let details_html = record.details.as_deref().map(catalog::render_markdown);
    let video_embed_url = record
        .video_url
        .as_deref()
        .map(|raw| resolve::embed_url(raw).into_owned());

    Ok(ProductShowTemplate {
        name: record.name.clone(),
        description: record.description.clone(),
        image_url: record.image_url.clone(),
        download_url: record.download_url.clone(),
        details_html,
        instructions_url,
        video_embed_url,
    })
}
