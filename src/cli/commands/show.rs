//! Show command - print the cache store

use crate::cache::{CacheStore, ContentCache};
use crate::cli::args::{OutputFormat, ShowArgs};
use crate::error::CodeCacheResult;
use crate::ui::{self, Status, UiContext};
use console::style;

/// Execute the show command
pub fn execute(args: ShowArgs, cache: &ContentCache) -> CodeCacheResult<()> {
    let store = cache.load()?;

    match args.format {
        OutputFormat::Table => print_table(cache, &store),
        OutputFormat::Json => print_json(&store)?,
        OutputFormat::Plain => print_plain(&store),
    }

    Ok(())
}

fn print_table(cache: &ContentCache, store: &CacheStore) {
    let ctx = UiContext::detect();
    ui::intro(&ctx, "Code id cache");
    ui::key_value(&ctx, "Store", &cache.paths().cache_file.display().to_string());
    ui::key_value(&ctx, "Start time", &store.start_time.to_string());
    println!();

    if store.is_empty() {
        ui::status(&ctx, Status::Info, "No cached code ids", None);
        return;
    }

    println!("{:<66} {:>8}", style("KEY").bold(), style("CODE ID").bold());
    println!("{}", "-".repeat(75));

    for (key, code_id) in &store.file_cache {
        println!("{:<66} {:>8}", key, code_id);
    }

    println!();
    println!("{} entr{}", store.len(), if store.len() == 1 { "y" } else { "ies" });
}

fn print_json(store: &CacheStore) -> CodeCacheResult<()> {
    let json = serde_json::to_string_pretty(store)?;
    println!("{}", json);
    Ok(())
}

fn print_plain(store: &CacheStore) {
    for (key, code_id) in &store.file_cache {
        println!("{} {}", key, code_id);
    }
}
