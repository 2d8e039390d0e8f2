//! Standalone error page

use maud::{html, Markup};

use super::layout::layout;

/// Full-page error with a short message
pub fn error_page(message: &str, logged_in: bool) -> Markup {
    layout(
        "Error",
        logged_in,
        html! {
            h1 { "Something went wrong" }
            p.error { (message) }
            p { a href="/" { "Back to the feed" } }
        },
    )
}
