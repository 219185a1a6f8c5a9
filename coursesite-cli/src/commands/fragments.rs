use anyhow::{bail, Result};
use coursesite::views::{DirFragments, EmbeddedFragments, FragmentSource};
use std::path::PathBuf;

pub fn execute(dir: Option<PathBuf>) -> Result<()> {
    let names = match dir {
        Some(dir) => {
            if !dir.is_dir() {
                bail!("{} is not a directory", dir.display());
            }
            DirFragments::new(dir).names()
        }
        None => EmbeddedFragments.names(),
    };

    for name in names {
        println!("{name}");
    }

    Ok(())
}
