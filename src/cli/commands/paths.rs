//! CLI command for printing the URL -> paths table

use std::path::Path;

pub fn execute(source: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let map = super::load_map(source)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    for (url, paths) in &map {
        println!("{url}");
        for path in paths {
            println!("    {path}");
        }
    }
    println!("{} distinct URLs", map.len());

    Ok(())
}
