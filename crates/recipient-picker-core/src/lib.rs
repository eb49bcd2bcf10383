//! # recipient-picker-core
//!
//! Core state for the recipient picker.
//!
//! This crate provides:
//! - **Recipient Store** - available pool grouped by domain, selected set split
//!   into whole-domain and individual selections
//! - **Search and Add** - substring filtering with implicit add of new addresses
//! - **Validation** - `local@domain.tld` address checks
//! - **Seed Loading** - startup records from JSON or the built-in defaults
//!
//! ## Example
//!
//! ```
//! use recipient_picker_core::{RecipientStore, SeedEntry};
//!
//! let mut store = RecipientStore::from_seed(&[
//!     SeedEntry::available("ann@timescale.com"),
//!     SeedEntry::available("bob@timescale.com"),
//! ])?;
//!
//! store.select_email("ann@timescale.com")?;
//! assert_eq!(store.email_recipients(), ["ann@timescale.com"]);
//! assert_eq!(store.filtered_view("bob").len(), 1);
//! # Ok::<(), recipient_picker_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod error;
pub mod recipient;
pub mod seed;
pub mod store;

pub use error::{Error, Result};
pub use recipient::{Recipient, domain_of, is_valid_email};
pub use seed::{SEED_PATH_ENV, SeedEntry, default_seed, load_seed, parse_seed, seed_path};
pub use store::{DomainMap, RecipientStore, SearchOutcome, SelectedRecipients};
