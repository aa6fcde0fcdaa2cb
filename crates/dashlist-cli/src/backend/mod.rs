//! The caller side of the list contract: data, query execution and
//! persisted tabs.

pub mod fixture;
pub mod query;
pub mod session;
pub mod tab_store;

pub use fixture::Fixture;
pub use query::{FixtureVariant, QueryPage, run_query};
pub use session::ListSession;
pub use tab_store::{StoredTab, TabStore};
