//! The site's page set, compiled once at startup.

use super::compiler::parse_fs;
use super::source::{DirFragments, EmbeddedFragments, FragmentSource};
use super::template::Template;
use crate::config::Config;
use crate::error::Result;

/// Shared layout every page extends.
pub const LAYOUT: &str = "tailwind.html";

/// Every page template the router serves.
#[derive(Debug, Clone)]
pub struct Views {
    pub home: Template,
    pub contact: Template,
    pub faq: Template,
    pub signup: Template,
}

impl Views {
    /// Compile all pages against one fragment source, stopping at the first failure.
    pub fn compile<F>(source: &F) -> Result<Self>
    where
        F: FragmentSource + ?Sized,
    {
        Ok(Self {
            home: parse_fs(source, &["home.html", LAYOUT])?,
            contact: parse_fs(source, &["contact.html", LAYOUT])?,
            faq: parse_fs(source, &["faq.html", LAYOUT])?,
            signup: parse_fs(source, &["signup.html", LAYOUT])?,
        })
    }

    /// Compile from the configured template directory, or the embedded set.
    pub fn load(config: &Config) -> Result<Self> {
        match &config.templates.dir {
            Some(dir) => {
                tracing::info!("Loading templates from {}", dir.display());
                Self::compile(&DirFragments::new(dir))
            }
            None => {
                tracing::info!("Loading embedded templates");
                Self::compile(&EmbeddedFragments)
            }
        }
    }

    /// Pages keyed by their route path, in registration order.
    pub fn pages(&self) -> [(&'static str, &Template); 4] {
        [
            ("/", &self.home),
            ("/contact", &self.contact),
            ("/faq", &self.faq),
            ("/signup", &self.signup),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::MemoryFragments;

    #[test]
    fn test_embedded_views_compile() {
        let views = Views::load(&Config::default()).unwrap();
        let names: Vec<_> = views.pages().iter().map(|(_, t)| t.name()).collect();
        assert_eq!(names, vec!["home", "contact", "faq", "signup"]);
    }

    #[test]
    fn test_missing_layout_fails() {
        let source = MemoryFragments::new()
            .with("home.html", "home")
            .with("contact.html", "contact")
            .with("faq.html", "faq")
            .with("signup.html", "signup");

        let err = Views::compile(&source).unwrap_err();
        assert!(matches!(err, crate::Error::FragmentNotFound(name) if name == LAYOUT));
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        for page in ["home.html", "contact.html", "faq.html", "signup.html"] {
            std::fs::write(
                dir.path().join(page),
                format!(r#"{{% extends "{LAYOUT}" %}}{{% block content %}}{page}{{% endblock %}}"#),
            )
            .unwrap();
        }
        std::fs::write(
            dir.path().join(LAYOUT),
            "<body>{% block content %}{% endblock %}</body>",
        )
        .unwrap();

        let mut config = Config::default();
        config.templates.dir = Some(dir.path().to_path_buf());

        let views = Views::load(&config).unwrap();
        assert_eq!(
            views.contact.render_to_string(()).unwrap(),
            "<body>contact.html</body>"
        );
    }
}
