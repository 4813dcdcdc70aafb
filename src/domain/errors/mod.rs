//! Domain error types.

mod mastodon_error;
mod storage_error;

pub use mastodon_error::MastodonError;
pub use storage_error::StorageError;
