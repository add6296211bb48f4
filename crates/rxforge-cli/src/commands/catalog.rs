use crate::cli::CatalogArgs;
use crate::config::PartialRunConfig;
use crate::error::Result;
use crate::render;
use rxforge::core::catalog::Catalog;
use std::path::Path;
use tracing::info;

pub async fn run(args: CatalogArgs) -> Result<()> {
    let partial_config = PartialRunConfig::load(args.config.as_deref())?;
    let catalog_path = args.catalog.as_deref().or(partial_config.catalog_path());

    let catalog = load_catalog(catalog_path)?;
    print!("{}", render::render_catalog(&catalog));
    Ok(())
}

/// Loads the catalog from `path`, or the built-in tables when no path is configured.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(p) => {
            info!("Loading catalog from {:?}", p);
            Ok(Catalog::load(p)?)
        }
        None => {
            info!("Using built-in catalog.");
            Ok(Catalog::builtin())
        }
    }
}
