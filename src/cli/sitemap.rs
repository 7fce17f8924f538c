//! `sitemap`: write sitemap.xml.

use crate::config::LumenConfig;
use crate::generator::sitemap::write_sitemap;
use anyhow::Result;
use std::path::Path;

/// `lumen sitemap`. Without `--output`, the configured path is used,
/// relative to the config file's directory.
pub fn run_sitemap(config: &LumenConfig, output: Option<&Path>) -> Result<()> {
    let path = match output {
        Some(path) => path.to_path_buf(),
        None => config.root_join(&config.sitemap.path),
    };
    write_sitemap(&config.site, &config.sitemap, &path)
}
