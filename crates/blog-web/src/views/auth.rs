//! Registration and login pages

use maud::{html, Markup};

use super::layout::layout;

/// Registration form, optionally with an inline error
pub fn register_page(error: Option<&str>) -> Markup {
    layout(
        "Register",
        false,
        html! {
            h1 { "Create an account" }
            @if let Some(message) = error {
                p.error { (message) }
            }
            form method="post" action="/register" {
                label for="username" { "Username" }
                input type="text" name="username" id="username" autocomplete="username";
                label for="email" { "Email" }
                input type="email" name="email" id="email" autocomplete="email";
                label for="password" { "Password" }
                input type="password" name="password" id="password" autocomplete="new-password";
                button type="submit" { "Register" }
            }
            p { "Already have an account? " a href="/login" { "Log in" } }
        },
    )
}

/// Login form, optionally with an inline error
pub fn login_page(error: Option<&str>) -> Markup {
    layout(
        "Log in",
        false,
        html! {
            h1 { "Log in" }
            @if let Some(message) = error {
                p.error { (message) }
            }
            form method="post" action="/login" {
                label for="credential" { "Username or email" }
                input type="text" name="credential" id="credential" autocomplete="username";
                label for="password" { "Password" }
                input type="password" name="password" id="password" autocomplete="current-password";
                button type="submit" { "Log in" }
            }
            p { "No account yet? " a href="/register" { "Register" } }
        },
    )
}
