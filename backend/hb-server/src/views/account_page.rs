//! Account settings page: view and edit the username

use crate::views::html::{self, escape};
use crate::{AppState, Session, UpdateUsernameRequest};

use hb_core::{
    AccountForm, AccountLoader, Identity, LoadOutcome, MAX_HANDLE_LENGTH, MIN_HANDLE_LENGTH,
    StatusMessage, resolve_identity,
};

use axum::{Form, extract::State, response::Html};

const TITLE: &str = "Account Settings";

/// GET /account
pub async fn show_account(State(state): State<AppState>, session: Session) -> Html<String> {
    let account = state.backend.session(session.token());

    match AccountLoader::new(account.as_ref()).activate().await {
        LoadOutcome::Loaded(view) => {
            Html(render_account(&view.identity, &AccountForm::from_view(&view)))
        }
        LoadOutcome::SignedOut { message } => Html(render_signed_out(message.as_ref())),
    }
}

/// POST /account
pub async fn submit_account(
    State(state): State<AppState>,
    session: Session,
    Form(request): Form<UpdateUsernameRequest>,
) -> Html<String> {
    let account = state.backend.session(session.token());

    let identity = match resolve_identity(account.as_ref()).await {
        Ok(identity) => identity,
        Err(e) => return Html(render_signed_out(Some(&StatusMessage::from(&e)))),
    };

    let mut form = AccountForm::new(request.username);
    // Outcome is carried by the form's message
    let _ = form.submit(account.as_ref(), identity.as_ref()).await;

    match identity {
        Some(ref identity) => Html(render_account(identity, &form)),
        None => Html(render_signed_out(form.message())),
    }
}

pub fn render_signed_out(message: Option<&StatusMessage>) -> String {
    let body = format!(
        r#"{message}<p>Please log in to view your account settings.</p>
"#,
        message = html::status_message(message),
    );

    html::page(Some(TITLE), &body)
}

pub fn render_account(identity: &Identity, form: &AccountForm) -> String {
    let body = format!(
        r#"<h1>{title}</h1>
<section>
<label for="email">Email Address</label>
<input id="email" type="email" value="{email}" disabled>
<p class="hint">Your email is private and only used for account management</p>
</section>
<form method="post" action="/account">
<label for="username">Username <span class="hint">(@handle)</span></label>
<span class="prefix">@</span>
<input id="username" name="username" type="text" value="{handle}" placeholder="yourusername" pattern="[a-zA-Z0-9_-]+" minlength="{min}" maxlength="{max}">
<p class="hint">This is your public handle. Choose a unique username that others can use to find you.</p>
<button type="submit">Save</button>
</form>
{message}<section>
<h2>Account Information</h2>
<dl>
<dt>User ID</dt>
<dd><code>{id}</code></dd>
<dt>Account Created</dt>
<dd>{created}</dd>
</dl>
</section>
"#,
        title = TITLE,
        message = html::status_message(form.message()),
        email = escape(identity.email.as_deref().unwrap_or_default()),
        handle = escape(form.handle()),
        min = MIN_HANDLE_LENGTH,
        max = MAX_HANDLE_LENGTH,
        id = identity.id,
        created = identity.created_at.format("%B %-d, %Y"),
    );

    html::page(Some(TITLE), &body)
}
