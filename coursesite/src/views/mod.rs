//! Template composition for server-rendered pages.
//!
//! Pages are built from named fragments: a page fragment plus the shared
//! layout it extends. Fragments come from a [`FragmentSource`], are composed
//! by [`parse_fs`] into a [`Template`], and are checked once at startup with
//! [`must`] so a broken fragment stops the process before it serves traffic.
//!
//! ```rust,ignore
//! use coursesite::views::{must, parse_fs, EmbeddedFragments};
//!
//! let home = must(parse_fs(&EmbeddedFragments, &["home.html", "tailwind.html"]));
//! let html = home.render_to_string(())?;
//! ```
//!
//! Undefined variables are strict: a template that reads a field the page
//! data does not have fails at render time with [`crate::Error::Render`].

mod compiler;
mod must;
mod pages;
mod source;
mod template;

pub use compiler::{parse, parse_fs};
pub use must::must;
pub use pages::{Views, LAYOUT};
pub use source::{DirFragments, EmbeddedFragments, FragmentSource, MemoryFragments};
pub use template::Template;
