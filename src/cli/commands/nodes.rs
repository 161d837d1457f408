//! CLI command for dumping the node index

use std::path::Path;

use crate::sidebar::{build_node_index, read_sidebar};

pub fn execute(source: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let path = super::resolve_source(source)?;
    let doc = read_sidebar(path)?;
    let index = build_node_index(&doc);

    if json {
        println!("{}", serde_json::to_string_pretty(&index)?);
        return Ok(());
    }

    for (id, node) in &index {
        let title = node.title.as_deref().unwrap_or("-");
        let parent = node.parent_id.as_deref().unwrap_or("-");
        match node.saved_url.as_deref() {
            Some(url) => println!("{id}  {title}  (parent: {parent})  {url}"),
            None => println!("{id}  {title}  (parent: {parent})"),
        }
    }
    println!("{} nodes", index.len());

    Ok(())
}
