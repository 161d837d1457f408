//! arc-sidebar command-line binary

fn main() -> anyhow::Result<()> {
    arc_sidebar::cli::run_cli()
}
