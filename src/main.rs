use anyhow::Result;
use directorio::config::Config;
use directorio::constants::ERROR_NO_GROUPS;
use directorio::groups::GroupStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    let store = match &config.data.groups_file {
        Some(path) => GroupStore::load_from_file(path)?,
        None => GroupStore::load_bundled()?,
    };

    if store.is_empty() {
        eprintln!("{}", ERROR_NO_GROUPS);
        eprintln!("\n💡 Point data.groups_file in your config at a JSON file of group records,");
        eprintln!("or rebuild with a non-empty data/groups.json.");
        return Ok(());
    }

    // Run the TUI application
    directorio::ui::run_app(config, store).await?;

    Ok(())
}
