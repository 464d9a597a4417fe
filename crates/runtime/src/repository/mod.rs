//! Persistence for user preferences.
//!
//! Three flat records survive between sessions: the last player names, the
//! settings blob and the recent word history. Stores only deal in JSON
//! strings ([`RecordStore`]); typed access comes from [`PreferenceStore`].

mod error;
mod file;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::FilePreferenceStore;
pub use memory::InMemoryPreferenceStore;
pub use traits::{PreferenceStore, RecordStore};
pub use types::{Settings, SettingsPatch, keys};
