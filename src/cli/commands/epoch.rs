//! Epoch command - print the current chain epoch

use crate::cache::ContentCache;
use crate::error::CodeCacheResult;

/// Execute the epoch command
pub fn execute(cache: &ContentCache) -> CodeCacheResult<()> {
    let epoch = cache.read_chain_epoch()?;
    println!("{}", epoch);
    Ok(())
}
