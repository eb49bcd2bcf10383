//! Recipient store with available and selected partitions.

mod model;
mod state;

pub use model::{DomainMap, SearchOutcome, SelectedRecipients};
pub use state::RecipientStore;
