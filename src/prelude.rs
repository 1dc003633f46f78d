pub use crate::base::{
    config::Config,
    facts::Facts,
    types::{AskError, Err, Res, Void},
};
pub use anyhow::anyhow;
pub use tracing::{debug, error, info, instrument, warn};
