//! Recipient addresses and their domains.

mod address;

pub use address::{Recipient, domain_of, is_valid_email};
