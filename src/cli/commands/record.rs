//! Record command - store the code id a deployment returned

use crate::cache::{CacheStore, ContentCache};
use crate::cli::args::RecordArgs;
use crate::error::CodeCacheResult;
use crate::ui::{self, Status, UiContext};

/// Execute the record command
pub fn execute(args: RecordArgs, cache: &ContentCache) -> CodeCacheResult<()> {
    let ctx = UiContext::detect();
    let key = cache.fingerprint(&args.contract.file, &args.contract.chain_id)?;
    let epoch = cache.read_chain_epoch()?;

    let mut store = cache.reconcile(CacheStore::default(), epoch)?;
    let code_id = cache.record(&mut store, &key, args.code_id)?;

    ui::status(
        &ctx,
        Status::Done,
        &format!("Recorded code id {}", code_id),
        Some(&format!("{} on {}", args.contract.file.display(), args.contract.chain_id)),
    );
    ui::status(&ctx, Status::Note, &key, None);

    Ok(())
}
