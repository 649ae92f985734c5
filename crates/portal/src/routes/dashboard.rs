//! Dashboard route handler.
//!
//! The protected catalog grid, plus the one-time welcome overlay.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use driftwood_core::{ProductRecord, gate};

use crate::middleware::RequireAuth;
use crate::state::AppState;

/// Card data for the catalog grid.
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
}

impl From<ProductRecord> for ProductCard {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.name,
            description: record.description,
            image_url: record.image_url,
        }
    }
}

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/index.html")]
pub struct DashboardTemplate {
    pub display_name: String,
    pub products: Vec<ProductCard>,
    pub error: Option<&'static str>,
    pub overlay_visible: bool,
}

/// Display the protected catalog grid.
///
/// The catalog is fetched fresh per visit. A failed fetch renders the
/// error banner in place of the grid; either way the fetch has settled by
/// render time, so the welcome overlay may show.
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(visitor): RequireAuth,
) -> impl IntoResponse {
    let (products, error) = match state.catalog().load().await {
        Ok(records) => (
            records.into_iter().map(ProductCard::from).collect(),
            None,
        ),
        Err(err) => {
            tracing::error!(error = %err, "failed to load the product catalog");
            (Vec::new(), Some("Failed to load product library."))
        }
    };

    let overlay_visible = gate::overlay_visible(&state.session().snapshot(), true);

    DashboardTemplate {
        display_name: visitor.display_name,
        products,
        error,
        overlay_visible,
    }
}
