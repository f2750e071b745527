//! Lookup command - print the cached code id for a contract

use crate::cache::{CacheStore, ContentCache};
use crate::cli::args::ContractArgs;
use crate::error::{CodeCacheError, CodeCacheResult};
use tracing::debug;

/// Execute the lookup command
pub fn execute(args: ContractArgs, cache: &ContentCache) -> CodeCacheResult<()> {
    let key = cache.fingerprint(&args.file, &args.chain_id)?;
    let epoch = cache.read_chain_epoch()?;
    let store = cache.reconcile(CacheStore::default(), epoch)?;

    match store.lookup(&key) {
        Some(code_id) => {
            debug!("{} -> {}", key, code_id);
            println!("{}", code_id);
            Ok(())
        }
        None => Err(CodeCacheError::CacheMiss { key }),
    }
}
