mod derive_params;
mod scheduler;

pub use derive_params::*;
pub use scheduler::*;
