//! # blog-web
//!
//! HTTP layer for the blog. Serves the server-rendered pages, handles
//! form submissions, and owns the session cookie.
//!
//! ## Structure
//!
//! - `routes` - URL to handler mapping
//! - `handlers` - request handlers organized by domain
//! - `extractors` - session and page-number extractors
//! - `views` - HTML templates (maud)
//! - `response` - error-to-page mapping
//! - `server` - dependency wiring and the server runner

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;
pub mod views;

pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
