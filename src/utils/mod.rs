use chrono::NaiveDateTime;

/// Formats a purchase timestamp for display, e.g. `March 05, 2024 - 14:30`.
pub fn format_purchase_date(date: NaiveDateTime) -> String {
    date.format("%B %d, %Y - %H:%M").to_string()
}

/// Escapes the characters that carry meaning in HTML text and attributes.
pub fn escape_html(text: &str) -> String {
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
