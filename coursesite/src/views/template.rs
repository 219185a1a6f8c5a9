//! Compiled, reusable page templates.

use minijinja::Environment;
use serde::Serialize;
use std::io;
use std::sync::Arc;

use crate::error::{Error, Result};

/// A composed set of fragments with a single entry point.
///
/// Cloning is cheap and the compiled structure is never mutated after
/// composition, so one `Template` can serve any number of concurrent renders.
#[derive(Clone)]
pub struct Template {
    env: Arc<Environment<'static>>,
    entry: String,
}

impl Template {
    pub(crate) fn new(env: Environment<'static>, entry: String) -> Self {
        Self {
            env: Arc::new(env),
            entry,
        }
    }

    /// Registered name of the entry fragment, e.g. `home.html`.
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Entry fragment name without its extension, e.g. `home`.
    pub fn name(&self) -> &str {
        self.entry
            .rsplit_once('.')
            .map_or(self.entry.as_str(), |(stem, _)| stem)
    }

    /// Execute the entry point against `data`, streaming into `out`.
    ///
    /// Output is written as it is produced, so on error a prefix of the page
    /// may already be in `out`.
    pub fn render<W, S>(&self, out: W, data: S) -> Result<()>
    where
        W: io::Write,
        S: Serialize,
    {
        let tmpl = self
            .env
            .get_template(&self.entry)
            .map_err(|err| self.render_error(err))?;

        tmpl.render_captured_to(data, out)
            .map(|_| ())
            .map_err(|err| self.render_error(err))
    }

    /// Render into a fresh string.
    pub fn render_to_string<S: Serialize>(&self, data: S) -> Result<String> {
        self.env
            .get_template(&self.entry)
            .and_then(|tmpl| tmpl.render(data))
            .map_err(|err| self.render_error(err))
    }

    fn render_error(&self, err: minijinja::Error) -> Error {
        Error::Render {
            name: self.name().to_string(),
            source: Box::new(err),
        }
    }
}

impl std::fmt::Debug for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Template")
            .field("entry", &self.entry)
            .finish_non_exhaustive()
    }
}
