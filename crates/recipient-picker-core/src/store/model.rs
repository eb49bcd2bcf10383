//! Partition types held by the recipient store.

use std::collections::BTreeMap;

use crate::recipient::Recipient;

/// Emails grouped by domain, in insertion order within each domain.
pub type DomainMap = BTreeMap<String, Vec<String>>;

/// Recipients the user has chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedRecipients {
    /// Whole-domain selections.
    pub company_recipients: DomainMap,
    /// Individually selected emails, in selection order.
    pub email_recipients: Vec<String>,
}

impl SelectedRecipients {
    /// Returns `true` if `email` is selected in either form.
    #[must_use]
    pub fn contains(&self, email: &str) -> bool {
        self.email_recipients.iter().any(|e| e == email)
            || self
                .company_recipients
                .values()
                .any(|emails| emails.iter().any(|e| e == email))
    }

    /// Total number of selected emails.
    #[must_use]
    pub fn len(&self) -> usize {
        self.company_recipients.values().map(Vec::len).sum::<usize>() + self.email_recipients.len()
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// What [`crate::RecipientStore::search`] did besides setting the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The term is an email already known to the store.
    Found,
    /// The term was a new email and was added to the available pool.
    Added(Recipient),
}
