//! @acp:module "Catalog Command"
//! @acp:summary "List the templates available for installation"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use crate::catalog::{Catalog, Category};

use super::resolve_template_dir;

/// Options for the catalog command
#[derive(Debug, Clone, Default)]
pub struct CatalogOptions {
    /// Template directory (flag or environment)
    pub templates: Option<PathBuf>,
}

/// Execute the catalog command
pub fn execute_catalog(options: CatalogOptions) -> Result<()> {
    let Some(dir) = resolve_template_dir(options.templates) else {
        eprintln!("{} No template directory found", style("✗").red());
        eprintln!("  Pass --templates or set CLAUDE_SETUP_TEMPLATES");
        std::process::exit(1);
    };

    let catalog = Catalog::scan(&dir)
        .with_context(|| format!("Failed to read templates from {}", dir.display()))?;

    println!(
        "{} {} templates in {}",
        style("✓").green(),
        catalog.len(),
        dir.display()
    );
    for category in Category::ALL {
        let names: Vec<&str> = catalog.entries(category).collect();
        println!("\n{} ({})", style(category).bold().cyan(), names.len());
        for name in names {
            println!("  {}", name);
        }
    }

    Ok(())
}
