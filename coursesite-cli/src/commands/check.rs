use anyhow::{bail, Result};
use colored::Colorize;
use coursesite::views::Views;
use std::path::PathBuf;

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = super::load_config(config_path.as_deref())?;

    let source = match &config.templates.dir {
        Some(dir) => format!("directory {}", dir.display()),
        None => "embedded templates".to_string(),
    };
    println!("Checking pages from {}", source.bold());

    match Views::load(&config) {
        Ok(views) => {
            for (route, template) in views.pages() {
                println!("  {} {:<10} {}", "✓".green(), route, template.entry());
            }
            println!("{}", "All pages compiled".green().bold());
            Ok(())
        }
        Err(err) => {
            println!("  {} {}", "✗".red(), err);
            bail!("template check failed")
        }
    }
}
