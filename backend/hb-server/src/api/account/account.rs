//! Account REST API handlers

use crate::{
    AccountResponse, ApiResult, AppState, Session, UpdateUsernameRequest, UpdateUsernameResponse,
};

use hb_core::{AccountError, AccountLoader, LoadOutcome, StatusMessage, UsernameClaim, resolve_identity};

use axum::{Json, extract::State};

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/account
///
/// The signed-in user's identity and current (or suggested) username
pub async fn get_account(
    State(state): State<AppState>,
    session: Session,
) -> ApiResult<Json<AccountResponse>> {
    let account = state.backend.session(session.token());
    let identity = resolve_identity(account.as_ref()).await?;

    match AccountLoader::new(account.as_ref()).load(identity).await {
        LoadOutcome::Loaded(view) => Ok(Json(view.into())),
        LoadOutcome::SignedOut { .. } => Err(AccountError::unauthenticated().into()),
    }
}

/// PUT /api/account/username
///
/// Validate, check availability, then store the username
pub async fn update_username(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<UpdateUsernameRequest>,
) -> ApiResult<Json<UpdateUsernameResponse>> {
    let account = state.backend.session(session.token());
    let identity = resolve_identity(account.as_ref()).await?;

    let mut claim = UsernameClaim::new(account.as_ref());
    let handle = claim.submit(identity.as_ref(), &request.username).await?;

    Ok(Json(UpdateUsernameResponse {
        username: handle.into_inner(),
        message: StatusMessage::username_updated(),
    }))
}
