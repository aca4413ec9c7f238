mod logic;
mod models;

pub mod prelude {
    pub use crate::logic::*;
    pub use crate::models::*;

    // Third Party Crates
    pub use async_trait::async_trait;
    pub use bon::Builder;
    pub use derive_more::Display;
    pub use getset::Getters;
    pub use log::{debug, error, info, warn};
    pub use url::Url;
}
