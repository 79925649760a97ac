//! Profile store adapters.

mod local_profile_store;

pub use local_profile_store::LocalProfileStore;
