mod init_logging;
mod run;
mod summary;

pub use init_logging::*;
pub use run::*;
pub use summary::*;
