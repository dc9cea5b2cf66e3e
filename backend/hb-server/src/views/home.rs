use crate::views::html;

use axum::response::Html;

/// GET /
pub async fn home() -> Html<String> {
    Html(html::page(
        None,
        r#"<h1>HabitBattle</h1>
<nav><a href="/account">Account Settings</a></nav>
"#,
    ))
}
