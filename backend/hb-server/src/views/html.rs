use hb_core::StatusMessage;

/// Escape text for use in element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub const SITE_TITLE: &str = "HabitBattle - Build habits with friends";
pub const SITE_DESCRIPTION: &str =
    "Build habits with friends, level up, and never miss a streak again.";

/// Wrap `body` in the shared page shell. `body` must already be escaped.
///
/// A page title is prefixed to the site title; `None` uses the site title alone.
pub fn page(title: Option<&str>, body: &str) -> String {
    let title = match title {
        Some(title) => format!("{title} | {SITE_TITLE}"),
        None => SITE_TITLE.to_string(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="description" content="{description}">
<title>{title}</title>
</head>
<body>
<main>
{body}
</main>
</body>
</html>
"#,
        description = escape(SITE_DESCRIPTION),
        title = escape(&title),
        body = body,
    )
}

/// Status message box with a dismiss link back to the plain account page
pub fn status_message(message: Option<&StatusMessage>) -> String {
    match message {
        Some(message) => format!(
            r#"<div class="message message-{kind}" role="status">
<p>{text}</p>
<a href="/account" class="dismiss" aria-label="Dismiss">&times;</a>
</div>
"#,
            kind = message.kind.as_str(),
            text = escape(&message.text),
        ),
        None => String::new(),
    }
}
