//! Startup seed data for the recipient store.

mod loader;
mod model;

pub use loader::{SEED_PATH_ENV, load_seed, parse_seed, seed_path};
pub use model::{SeedEntry, default_seed};
