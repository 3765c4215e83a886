use thiserror::Error;

use super::driver::LoadState;
use super::index::RegistryError;
use crate::core::data::loader::DataError;

/// Fatal errors of the one-shot load pass.
///
/// Any of these aborts mod initialization; there is no partial or degraded
/// mode, and nothing is retried. The host engine surfaces the failure
/// through its own startup error reporting.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Data loading failed: {source}")]
    Data {
        #[from]
        source: DataError,
    },

    #[error("Registry insertion failed: {source}")]
    Registry {
        #[from]
        source: RegistryError,
    },

    #[error("'{operation}' is not valid in the {state:?} state")]
    InvalidTransition {
        operation: &'static str,
        state: LoadState,
    },
}
