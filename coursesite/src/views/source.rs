//! Places template fragments are read from.

use rust_embed::Embed;
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Name-to-markup lookup used by the template compiler.
///
/// Implementations only need to answer "give me all bytes of this fragment";
/// the compiler does not care whether they come from disk or from the binary.
pub trait FragmentSource: Send + Sync {
    /// Read the full markup of a fragment.
    ///
    /// Returns [`Error::FragmentNotFound`] if the name does not resolve.
    fn read(&self, name: &str) -> Result<String>;

    /// All fragment names this source can resolve, sorted.
    fn names(&self) -> Vec<String>;
}

/// Fragments compiled into the binary from the crate's `templates/` folder.
#[derive(Embed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

/// The site's built-in fragment set.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedFragments;

impl FragmentSource for EmbeddedFragments {
    fn read(&self, name: &str) -> Result<String> {
        let file = EmbeddedTemplates::get(name)
            .ok_or_else(|| Error::FragmentNotFound(name.to_string()))?;

        String::from_utf8(file.data.into_owned()).map_err(|_| Error::InvalidFragment {
            name: name.to_string(),
        })
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = EmbeddedTemplates::iter().map(|s| s.to_string()).collect();
        names.sort();
        names
    }
}

/// Fragments read from a directory on disk at compile time.
#[derive(Debug, Clone)]
pub struct DirFragments {
    root: PathBuf,
}

impl DirFragments {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a fragment name below the root, refusing anything that escapes it.
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        let contained = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        contained.then(|| self.root.join(relative))
    }
}

impl FragmentSource for DirFragments {
    fn read(&self, name: &str) -> Result<String> {
        let path = self
            .resolve(name)
            .ok_or_else(|| Error::FragmentNotFound(name.to_string()))?;

        match std::fs::read(&path) {
            Ok(bytes) => String::from_utf8(bytes).map_err(|_| Error::InvalidFragment {
                name: name.to_string(),
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::FragmentNotFound(name.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn names(&self) -> Vec<String> {
        let mut names = Vec::new();
        collect_files(&self.root, &self.root, &mut names);
        names.sort();
        names
    }
}

fn collect_files(root: &Path, dir: &Path, out: &mut Vec<String>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_files(root, &path, out);
        } else if let Ok(relative) = path.strip_prefix(root) {
            let name = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            out.push(name);
        }
    }
}

/// Fragments held in memory, mostly for tests and generated markup.
#[derive(Debug, Clone, Default)]
pub struct MemoryFragments {
    fragments: BTreeMap<String, String>,
}

impl MemoryFragments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a fragment.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, markup: impl Into<String>) -> Self {
        self.insert(name, markup);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, markup: impl Into<String>) {
        self.fragments.insert(name.into(), markup.into());
    }
}

impl FragmentSource for MemoryFragments {
    fn read(&self, name: &str) -> Result<String> {
        self.fragments
            .get(name)
            .cloned()
            .ok_or_else(|| Error::FragmentNotFound(name.to_string()))
    }

    fn names(&self) -> Vec<String> {
        self.fragments.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_contains_site_pages() {
        let names = EmbeddedFragments.names();
        for page in ["home.html", "contact.html", "faq.html", "signup.html", "tailwind.html"] {
            assert!(names.iter().any(|n| n == page), "missing {page}");
        }

        let layout = EmbeddedFragments.read("tailwind.html").unwrap();
        assert!(layout.contains("<html"));
    }

    #[test]
    fn test_embedded_missing_fragment() {
        let err = EmbeddedFragments.read("nope.html").unwrap_err();
        assert!(matches!(err, Error::FragmentNotFound(name) if name == "nope.html"));
    }

    #[test]
    fn test_dir_fragments_read_and_list() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("layouts")).unwrap();
        std::fs::write(dir.path().join("page.html"), "<p>page</p>").unwrap();
        std::fs::write(dir.path().join("layouts/base.html"), "<main></main>").unwrap();

        let source = DirFragments::new(dir.path());
        assert_eq!(source.read("page.html").unwrap(), "<p>page</p>");
        assert_eq!(source.read("layouts/base.html").unwrap(), "<main></main>");
        assert_eq!(source.names(), vec!["layouts/base.html", "page.html"]);
    }

    #[test]
    fn test_dir_fragments_missing_and_escaping() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirFragments::new(dir.path().join("templates"));

        assert!(matches!(
            source.read("absent.html"),
            Err(Error::FragmentNotFound(_))
        ));
        assert!(matches!(
            source.read("../secret.html"),
            Err(Error::FragmentNotFound(_))
        ));
    }

    #[test]
    fn test_dir_fragments_rejects_binary() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("blob.html"), [0xff, 0xfe, 0x00]).unwrap();

        let err = DirFragments::new(dir.path()).read("blob.html").unwrap_err();
        assert!(matches!(err, Error::InvalidFragment { .. }));
    }

    #[test]
    fn test_memory_fragments() {
        let source = MemoryFragments::new()
            .with("a.html", "first")
            .with("a.html", "second");
        assert_eq!(source.read("a.html").unwrap(), "second");
        assert_eq!(source.names(), vec!["a.html"]);
        assert!(source.read("b.html").is_err());
    }
}
