//! Composes fragments into executable templates.

use minijinja::{Environment, UndefinedBehavior};
use std::path::Path;

use super::source::{DirFragments, FragmentSource};
use super::template::Template;
use crate::error::{Error, Result};

/// Compile the named fragments of `source` into one template.
///
/// Every fragment is registered under its base file name, so a page may
/// `{% extends "tailwind.html" %}` no matter which directory the layout
/// lives in. A later fragment with the same base name replaces an earlier one.
/// The first name is the entry point.
pub fn parse_fs<F>(source: &F, names: &[&str]) -> Result<Template>
where
    F: FragmentSource + ?Sized,
{
    let (first, _) = names.split_first().ok_or(Error::EmptyComposition)?;

    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    for name in names {
        let markup = source.read(name)?;
        let registered = base_name(name).to_string();

        env.add_template_owned(registered, markup)
            .map_err(|err| Error::Parse {
                name: (*name).to_string(),
                source: Box::new(err),
            })?;
    }

    let template = Template::new(env, base_name(first).to_string());
    tracing::debug!(
        template = template.name(),
        fragments = ?names,
        "Composed template"
    );

    Ok(template)
}

/// Compile a single template file from disk.
pub fn parse(path: impl AsRef<Path>) -> Result<Template> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| Error::FragmentNotFound(path.display().to_string()))?;
    let root = path.parent().unwrap_or_else(|| Path::new("."));

    parse_fs(&DirFragments::new(root), &[file_name])
}

fn base_name(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}
