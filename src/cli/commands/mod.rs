//! CLI command implementations

pub mod config;
pub mod epoch;
pub mod fingerprint;
pub mod init;
pub mod lookup;
pub mod reconcile;
pub mod record;
pub mod show;

pub use config::execute as config;
pub use epoch::execute as epoch;
pub use fingerprint::execute as fingerprint;
pub use init::execute as init;
pub use lookup::execute as lookup;
pub use reconcile::execute as reconcile;
pub use record::execute as record;
pub use show::execute as show;
