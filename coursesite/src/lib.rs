//! # coursesite
//!
//! A small server-rendered website (home, contact, FAQ and signup pages)
//! whose pages are composed from named template fragments.
//!
//! ## Layout
//!
//! - [`views`]: fragment sources, template composition and the startup check
//! - [`controllers`]: adapters from templates to axum handlers, FAQ and signup
//! - [`site`]: the route table and the 404 fallback
//! - [`server`]: listener, middleware and graceful shutdown
//!
//! ## Example
//!
//! ```rust,no_run
//! use coursesite::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     // Broken templates end the process here, before anything is served
//!     let views = must(Views::load(&config));
//!
//!     Server::new(config).serve(router(views)).await
//! }
//! ```

pub mod config;
pub mod controllers;
pub mod error;
pub mod observability;
pub mod server;
pub mod site;
pub mod views;

pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::controllers::{faq, Page, Renderer, Users};
    pub use crate::error::{Error, Result};
    pub use crate::observability::init_tracing;
    pub use crate::server::Server;
    pub use crate::site::{not_found, router};
    pub use crate::views::{
        must, parse, parse_fs, DirFragments, EmbeddedFragments, FragmentSource, MemoryFragments,
        Template, Views,
    };

    pub use tracing::{debug, error, info, warn};
}
