//! `init`: write a default config file.

use crate::config::LumenConfig;
use crate::log;
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

/// Write the default config template to `path`.
///
/// Refuses to overwrite an existing file unless `force` is set. With `dry`,
/// prints the template instead.
pub fn run_init(path: &Path, force: bool, dry: bool) -> Result<()> {
    let template = LumenConfig::template()?;

    if dry {
        print!("{}", template);
        return Ok(());
    }

    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    fs::write(path, template).with_context(|| format!("Failed to write {}", path.display()))?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lumen.toml");

        run_init(&path, false, false).unwrap();
        let config = LumenConfig::load(&path).unwrap();
        assert_eq!(config.site.brand_name, "Light SaaS");

        assert!(run_init(&path, false, false).is_err());
        run_init(&path, true, false).unwrap();
    }
}
