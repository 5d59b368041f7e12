//! Message generation endpoint.

use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};

use promozap_core::ProductId;

use crate::db::ProductRepository;
use crate::error::AppError;
use crate::middleware::RequireAuth;
use crate::services::composer;
use crate::state::AppState;

/// Request body for message generation: product IDs selected on the
/// catalog page.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub ids: Vec<i64>,
}

/// One ready-to-paste message per requested product, in catalog order.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub mensagens: Vec<String>,
}

/// Build the message generation router.
pub fn router() -> Router<AppState> {
    Router::new().route("/gerar_mensagem", post(generate))
}

/// Compose broadcast messages for the selected products.
///
/// POST /gerar_mensagem
///
/// IDs with no matching product are skipped rather than failing the whole
/// request, so a stale catalog page still gets messages for what remains.
async fn generate(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let ids: Vec<ProductId> = request.ids.into_iter().map(ProductId::new).collect();

    let products = ProductRepository::new(state.pool()).get_by_ids(&ids).await?;
    let mensagens = composer::compose_messages(&products);

    Ok(Json(GenerateResponse { mensagens }))
}
