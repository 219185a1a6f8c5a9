//! Request handlers built on top of compiled templates.
//!
//! Handlers never see [`Template`] directly; they hold a [`Renderer`], which
//! keeps the adapters testable with renderers that fail on purpose.

mod faq;
mod page;
mod users;

use minijinja::Value;
use std::io;

use crate::error::Result;
use crate::views::Template;

pub use faq::{faq, Question, QUESTIONS};
pub use page::{render_html, DataFn, Page};
pub use users::{SignupForm, Users};

/// Anything that can write a page for a data value.
pub trait Renderer: Send + Sync + 'static {
    /// Write the page for `data` into `out`.
    fn execute(&self, out: &mut dyn io::Write, data: &Value) -> Result<()>;
}

impl Renderer for Template {
    fn execute(&self, out: &mut dyn io::Write, data: &Value) -> Result<()> {
        self.render(out, data)
    }
}
