//! Fingerprint command - print the content key for a contract

use crate::cache::ContentCache;
use crate::cli::args::ContractArgs;
use crate::error::CodeCacheResult;

/// Execute the fingerprint command
pub fn execute(args: ContractArgs, cache: &ContentCache) -> CodeCacheResult<()> {
    let key = cache.fingerprint(&args.file, &args.chain_id)?;
    println!("{}", key);
    Ok(())
}
