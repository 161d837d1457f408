//! CLI command for looking up one URL

use anyhow::bail;
use std::path::Path;

use crate::sidebar::normalize_url;

pub fn execute(url: &str, source: Option<&Path>) -> anyhow::Result<()> {
    let map = super::load_map(source)?;

    let normalized = normalize_url(url);
    let Some(paths) = map.get(&normalized) else {
        bail!("no saved tab found for {normalized}");
    };

    for path in paths {
        println!("{path}");
    }

    Ok(())
}
