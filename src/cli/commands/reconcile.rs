//! Reconcile command - drop the cache after a chain restart

use crate::cache::content::is_current;
use crate::cache::{CacheStore, ContentCache};
use crate::error::CodeCacheResult;
use crate::ui::{self, Status, UiContext};

/// Execute the reconcile command
pub fn execute(cache: &ContentCache) -> CodeCacheResult<()> {
    let ctx = UiContext::detect();
    let epoch = cache.read_chain_epoch()?;

    let stored = cache.stored_epoch()?;
    // None when file_cache is unreadable; reconcile still resets that store
    let dropped = cache.load().map(|store| store.len()).ok();
    let after = cache.reconcile(CacheStore::default(), epoch)?;

    if is_current(stored, epoch) {
        ui::status(
            &ctx,
            Status::Done,
            "Cache is current",
            Some(&format!("epoch {}, {} entries", epoch, after.len())),
        );
    } else {
        let dropped = match dropped {
            Some(count) => format!("dropped {} entries", count),
            None => "dropped unreadable entries".to_string(),
        };
        ui::status(
            &ctx,
            Status::Warning,
            &format!("Chain restarted ({} -> {}), {}", stored, epoch, dropped),
            Some("contracts will be redeployed"),
        );
    }

    Ok(())
}
