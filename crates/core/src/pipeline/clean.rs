use std::{fs::remove_dir_all, path::Path};

use anyhow::Result;

pub fn clean(dist_dir: &Path) -> Result<()> {
    if dist_dir.exists() {
        remove_dir_all(dist_dir)?;
        println!("Removed {}", dist_dir.display());
    } else {
        println!("Skipped {} (not found)", dist_dir.display());
    }
    Ok(())
}
