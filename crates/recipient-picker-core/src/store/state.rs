//! The recipient store: available pool, selected set and search filter.

use tracing::{debug, info, warn};

use super::model::{DomainMap, SearchOutcome, SelectedRecipients};
use crate::error::{Error, Result};
use crate::recipient::{Recipient, domain_of};
use crate::seed::SeedEntry;

/// Holds every known recipient in exactly one place: an available domain
/// bucket, a whole-domain selection, or the individual selection list.
///
/// Every mutating method either updates both partitions together or returns
/// an error without touching anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientStore {
    available: DomainMap,
    selected: SelectedRecipients,
    filter: String,
}

impl RecipientStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from seed records.
    ///
    /// Selected entries become whole-domain selections under their domain,
    /// the rest go to the available pool.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] for a malformed address and
    /// [`Error::DuplicateEmail`] if the seed lists an address twice.
    pub fn from_seed(seed: &[SeedEntry]) -> Result<Self> {
        let mut store = Self::new();

        for entry in seed {
            let recipient = Recipient::parse(entry.email.as_str())?;
            if store.contains(recipient.as_str()) {
                return Err(Error::DuplicateEmail(recipient.into_string()));
            }

            let target = if entry.is_selected {
                &mut store.selected.company_recipients
            } else {
                &mut store.available
            };
            target
                .entry(recipient.domain().to_string())
                .or_default()
                .push(recipient.into_string());
        }

        info!(
            "Recipient store initialized: {} available, {} selected",
            store.available_count(),
            store.selected_count()
        );
        Ok(store)
    }

    /// Available recipients grouped by domain.
    #[must_use]
    pub const fn available(&self) -> &DomainMap {
        &self.available
    }

    /// Both selection partitions.
    #[must_use]
    pub const fn selected(&self) -> &SelectedRecipients {
        &self.selected
    }

    /// Whole-domain selections.
    #[must_use]
    pub const fn company_recipients(&self) -> &DomainMap {
        &self.selected.company_recipients
    }

    /// Individually selected emails, in selection order.
    #[must_use]
    pub fn email_recipients(&self) -> &[String] {
        &self.selected.email_recipients
    }

    /// The active search filter.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Returns `true` if `email` is anywhere in the store.
    #[must_use]
    pub fn contains(&self, email: &str) -> bool {
        self.is_available(email) || self.selected.contains(email)
    }

    /// Returns `true` if `email` is in the available pool.
    #[must_use]
    pub fn is_available(&self, email: &str) -> bool {
        domain_of(email)
            .and_then(|domain| self.available.get(domain))
            .is_some_and(|emails| emails.iter().any(|e| e == email))
    }

    /// Number of emails in the available pool.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.available.values().map(Vec::len).sum()
    }

    /// Number of selected emails, both forms.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Total number of known emails.
    #[must_use]
    pub fn len(&self) -> usize {
        self.available_count() + self.selected_count()
    }

    /// Returns `true` if the store knows no emails.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every selected email: whole-domain selections first (by domain), then
    /// individual selections in the order they were made.
    #[must_use]
    pub fn selected_emails(&self) -> Vec<&str> {
        self.selected
            .company_recipients
            .values()
            .flatten()
            .chain(&self.selected.email_recipients)
            .map(String::as_str)
            .collect()
    }

    /// Moves a whole domain from the available pool into the company
    /// selections.
    ///
    /// If the domain is already selected (an address was added to it after
    /// it was selected), the available emails are appended to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainNotAvailable`] if the pool has no such domain.
    pub fn select_domain(&mut self, domain: &str) -> Result<()> {
        let Some(emails) = self.available.remove(domain) else {
            warn!("Cannot select domain {}: not available", domain);
            return Err(Error::DomainNotAvailable(domain.to_string()));
        };

        debug!("Selecting domain {} ({} emails)", domain, emails.len());
        self.selected
            .company_recipients
            .entry(domain.to_string())
            .or_default()
            .extend(emails);
        Ok(())
    }

    /// Moves a single email from the available pool to the end of the
    /// individual selections.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmailNotAvailable`] if the email is not in the pool.
    pub fn select_email(&mut self, email: &str) -> Result<()> {
        let Some(domain) = domain_of(email) else {
            warn!("Cannot select {}: not available", email);
            return Err(Error::EmailNotAvailable(email.to_string()));
        };

        let Some(bucket) = self.available.get_mut(domain) else {
            warn!("Cannot select {}: not available", email);
            return Err(Error::EmailNotAvailable(email.to_string()));
        };

        let Some(pos) = bucket.iter().position(|e| e == email) else {
            warn!("Cannot select {}: not available", email);
            return Err(Error::EmailNotAvailable(email.to_string()));
        };

        let email = bucket.remove(pos);
        if bucket.is_empty() {
            self.available.remove(domain);
        }

        debug!("Selecting email {}", email);
        self.selected.email_recipients.push(email);
        Ok(())
    }

    /// Moves a whole-domain selection back into the available pool.
    ///
    /// If the pool already has a bucket for the domain, the restored emails
    /// go first and the existing ones follow.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainNotSelected`] if the domain is not selected.
    pub fn remove_domain(&mut self, domain: &str) -> Result<()> {
        let Some(mut emails) = self.selected.company_recipients.remove(domain) else {
            warn!("Cannot remove domain {}: not selected", domain);
            return Err(Error::DomainNotSelected(domain.to_string()));
        };

        debug!("Removing domain {} ({} emails)", domain, emails.len());
        if let Some(existing) = self.available.remove(domain) {
            debug!("Merging {} available emails into {}", existing.len(), domain);
            emails.extend(existing);
        }
        if !emails.is_empty() {
            self.available.insert(domain.to_string(), emails);
        }
        Ok(())
    }

    /// Moves an individually selected email back to the end of its domain
    /// bucket in the available pool.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmailNotSelected`] if the email is not individually
    /// selected.
    pub fn remove_email(&mut self, email: &str) -> Result<()> {
        let Some(pos) = self
            .selected
            .email_recipients
            .iter()
            .position(|e| e == email)
        else {
            warn!("Cannot remove {}: not selected", email);
            return Err(Error::EmailNotSelected(email.to_string()));
        };

        let email = self.selected.email_recipients.remove(pos);
        let domain = domain_of(&email).unwrap_or_default().to_string();

        debug!("Removing email {}", email);
        self.available.entry(domain).or_default().push(email);
        Ok(())
    }

    /// Sets the active filter without adding anything.
    pub fn set_filter(&mut self, term: impl Into<String>) {
        self.filter = term.into();
    }

    /// Sets the active filter and, if `term` is not a known email, tries to
    /// add it.
    ///
    /// The filter is updated even when the add fails.
    ///
    /// # Errors
    ///
    /// Propagates the [`Error::InvalidFormat`] or [`Error::DuplicateEmail`]
    /// from [`Self::add_email`].
    pub fn search(&mut self, term: &str) -> Result<SearchOutcome> {
        self.set_filter(term);

        if self.contains(term) {
            debug!("Search matched existing email {}", term);
            return Ok(SearchOutcome::Found);
        }

        self.add_email(term).map(SearchOutcome::Added)
    }

    /// Validates `email` and appends it to its domain bucket in the
    /// available pool.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if the address is malformed, or
    /// [`Error::DuplicateEmail`] if it is already in the store.
    pub fn add_email(&mut self, email: &str) -> Result<Recipient> {
        let recipient = Recipient::parse(email).inspect_err(|_| {
            warn!("Rejected invalid email {:?}", email);
        })?;

        if self.contains(recipient.as_str()) {
            warn!("Rejected duplicate email {}", email);
            return Err(Error::DuplicateEmail(recipient.into_string()));
        }

        debug!("Adding email {}", recipient);
        self.available
            .entry(recipient.domain().to_string())
            .or_default()
            .push(recipient.as_str().to_string());
        Ok(recipient)
    }

    /// Available recipients whose address contains `term`, grouped by
    /// domain. Domains without matches are left out.
    ///
    /// Matching is case-sensitive substring containment; an empty term
    /// matches everything.
    #[must_use]
    pub fn filtered_view(&self, term: &str) -> DomainMap {
        self.available
            .iter()
            .filter_map(|(domain, emails)| {
                let matches: Vec<String> = emails
                    .iter()
                    .filter(|email| email.contains(term))
                    .cloned()
                    .collect();
                (!matches.is_empty()).then(|| (domain.clone(), matches))
            })
            .collect()
    }

    /// [`Self::filtered_view`] with the active filter.
    #[must_use]
    pub fn filtered_available(&self) -> DomainMap {
        self.filtered_view(&self.filter)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::seed::default_seed;

    fn timescale_store() -> RecipientStore {
        RecipientStore::from_seed(&[
            SeedEntry::available("ann@timescale.com"),
            SeedEntry::available("bob@timescale.com"),
        ])
        .unwrap()
    }

    fn domain_map(entries: Vec<(&str, Vec<&str>)>) -> DomainMap {
        entries
            .into_iter()
            .map(|(domain, emails)| {
                (
                    domain.to_string(),
                    emails.into_iter().map(str::to_string).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_from_seed_partitions() {
        let store = RecipientStore::from_seed(&default_seed()).unwrap();

        assert_eq!(
            store.available(),
            &domain_map(vec![
                ("awesome.com", vec!["jane@awesome.com"]),
                ("qwerty.com", vec!["james@qwerty.com"]),
                ("timescale.com", vec!["ann@timescale.com", "bob@timescale.com"]),
            ])
        );
        assert_eq!(
            store.company_recipients(),
            &domain_map(vec![
                ("hello.com", vec!["mike@hello.com"]),
                ("qwerty.com", vec!["brian@qwerty.com", "kate@qwerty.com"]),
            ])
        );
        assert!(store.email_recipients().is_empty());
        assert_eq!(store.len(), 7);
    }

    #[test]
    fn test_from_seed_rejects_invalid() {
        let result = RecipientStore::from_seed(&[SeedEntry::available("bogus")]);
        assert!(matches!(result, Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn test_from_seed_rejects_duplicates() {
        let result = RecipientStore::from_seed(&[
            SeedEntry::available("ann@timescale.com"),
            SeedEntry::selected("ann@timescale.com"),
        ]);
        assert!(matches!(result, Err(Error::DuplicateEmail(_))));
    }

    #[test]
    fn test_select_domain() {
        let mut store = timescale_store();
        store.select_domain("timescale.com").unwrap();

        assert!(store.available().is_empty());
        assert_eq!(
            store.company_recipients(),
            &domain_map(vec![("timescale.com", vec!["ann@timescale.com", "bob@timescale.com"])])
        );
    }

    #[test]
    fn test_select_domain_missing_is_rejected() {
        let mut store = timescale_store();
        let before = store.clone();

        let err = store.select_domain("nowhere.com").unwrap_err();
        assert!(matches!(err, Error::DomainNotAvailable(ref d) if d == "nowhere.com"));
        assert_eq!(store, before);
    }

    #[test]
    fn test_select_domain_merges_into_existing_selection() {
        let mut store = RecipientStore::from_seed(&default_seed()).unwrap();
        store.select_domain("qwerty.com").unwrap();

        assert!(!store.available().contains_key("qwerty.com"));
        assert_eq!(
            store.company_recipients()["qwerty.com"],
            vec!["brian@qwerty.com", "kate@qwerty.com", "james@qwerty.com"]
        );
        assert_eq!(store.len(), 7);
    }

    #[test]
    fn test_select_email_removes_empty_bucket() {
        let mut store = RecipientStore::from_seed(&default_seed()).unwrap();
        store.select_email("jane@awesome.com").unwrap();

        assert!(!store.available().contains_key("awesome.com"));
        assert_eq!(store.email_recipients(), ["jane@awesome.com"]);
    }

    #[test]
    fn test_select_email_keeps_remaining() {
        let mut store = timescale_store();
        store.select_email("ann@timescale.com").unwrap();
        store.select_email("bob@timescale.com").unwrap();

        assert!(store.available().is_empty());
        assert_eq!(
            store.email_recipients(),
            ["ann@timescale.com", "bob@timescale.com"]
        );
    }

    #[test]
    fn test_select_email_missing_is_rejected() {
        let mut store = timescale_store();
        let before = store.clone();

        assert!(matches!(
            store.select_email("zed@timescale.com"),
            Err(Error::EmailNotAvailable(_))
        ));
        assert!(matches!(
            store.select_email("no-at-sign"),
            Err(Error::EmailNotAvailable(_))
        ));
        assert_eq!(store, before);
    }

    #[test]
    fn test_select_email_twice_is_rejected() {
        let mut store = timescale_store();
        store.select_email("ann@timescale.com").unwrap();

        assert!(matches!(
            store.select_email("ann@timescale.com"),
            Err(Error::EmailNotAvailable(_))
        ));
        assert_eq!(store.email_recipients(), ["ann@timescale.com"]);
    }

    #[test]
    fn test_remove_domain_round_trip() {
        let mut store = timescale_store();
        let before = store.available()["timescale.com"].clone();

        store.select_domain("timescale.com").unwrap();
        store.remove_domain("timescale.com").unwrap();

        assert_eq!(store.available()["timescale.com"], before);
        assert!(store.company_recipients().is_empty());
    }

    #[test]
    fn test_remove_domain_merges_with_available() {
        let mut store = RecipientStore::from_seed(&default_seed()).unwrap();
        store.remove_domain("qwerty.com").unwrap();

        assert_eq!(
            store.available()["qwerty.com"],
            vec!["brian@qwerty.com", "kate@qwerty.com", "james@qwerty.com"]
        );
        assert!(!store.company_recipients().contains_key("qwerty.com"));
    }

    #[test]
    fn test_remove_domain_missing_is_rejected() {
        let mut store = timescale_store();
        let before = store.clone();

        assert!(matches!(
            store.remove_domain("timescale.com"),
            Err(Error::DomainNotSelected(_))
        ));
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_email_appends_to_bucket() {
        let mut store = timescale_store();
        store.select_email("ann@timescale.com").unwrap();
        store.remove_email("ann@timescale.com").unwrap();

        assert_eq!(
            store.available()["timescale.com"],
            vec!["bob@timescale.com", "ann@timescale.com"]
        );
        assert!(store.email_recipients().is_empty());
    }

    #[test]
    fn test_remove_email_recreates_bucket() {
        let mut store = RecipientStore::from_seed(&default_seed()).unwrap();
        store.select_email("jane@awesome.com").unwrap();
        store.remove_email("jane@awesome.com").unwrap();

        assert_eq!(store.available()["awesome.com"], vec!["jane@awesome.com"]);
    }

    #[test]
    fn test_remove_email_missing_is_rejected() {
        let mut store = RecipientStore::from_seed(&default_seed()).unwrap();
        let before = store.clone();

        // Selected as part of a domain, not individually
        assert!(matches!(
            store.remove_email("brian@qwerty.com"),
            Err(Error::EmailNotSelected(_))
        ));
        assert_eq!(store, before);
    }

    #[test]
    fn test_add_email() {
        let mut store = timescale_store();
        let added = store.add_email("cat@timescale.com").unwrap();

        assert_eq!(added.as_str(), "cat@timescale.com");
        assert_eq!(
            store.available()["timescale.com"],
            vec!["ann@timescale.com", "bob@timescale.com", "cat@timescale.com"]
        );
    }

    #[test]
    fn test_add_email_invalid_format() {
        let mut store = RecipientStore::from_seed(&default_seed()).unwrap();
        let before = store.clone();

        let err = store.add_email("not-an-email").unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(_)));
        assert_eq!(store, before);
    }

    #[test]
    fn test_add_email_duplicate_everywhere() {
        let mut store = RecipientStore::from_seed(&default_seed()).unwrap();
        store.select_email("jane@awesome.com").unwrap();
        let before = store.clone();

        for email in ["brian@qwerty.com", "ann@timescale.com", "jane@awesome.com"] {
            let err = store.add_email(email).unwrap_err();
            assert!(matches!(err, Error::DuplicateEmail(ref e) if e == email));
        }
        assert_eq!(store, before);
    }

    #[test]
    fn test_filtered_view_groups_by_domain() {
        let store = timescale_store();
        assert_eq!(
            store.filtered_view(""),
            domain_map(vec![("timescale.com", vec!["ann@timescale.com", "bob@timescale.com"])])
        );
    }

    #[test]
    fn test_filtered_view_substring() {
        let store = timescale_store();
        assert_eq!(
            store.filtered_view("ann"),
            domain_map(vec![("timescale.com", vec!["ann@timescale.com"])])
        );
    }

    #[test]
    fn test_filtered_view_is_case_sensitive_and_drops_empty_domains() {
        let store = RecipientStore::from_seed(&default_seed()).unwrap();
        assert!(store.filtered_view("ANN").is_empty());
        assert_eq!(
            store.filtered_view("qwerty"),
            domain_map(vec![("qwerty.com", vec!["james@qwerty.com"])])
        );
    }

    #[test]
    fn test_search_adds_new_email() {
        let mut store = timescale_store();
        let outcome = store.search("new@domain.com").unwrap();

        assert!(matches!(outcome, SearchOutcome::Added(ref r) if r.as_str() == "new@domain.com"));
        assert_eq!(store.available()["domain.com"], vec!["new@domain.com"]);
        assert_eq!(store.filter(), "new@domain.com");
    }

    #[test]
    fn test_search_existing_email() {
        let mut store = RecipientStore::from_seed(&default_seed()).unwrap();
        let before_len = store.len();

        assert_eq!(store.search("brian@qwerty.com").unwrap(), SearchOutcome::Found);
        assert_eq!(store.len(), before_len);
    }

    #[test]
    fn test_search_partial_term_sets_filter_and_fails() {
        let mut store = timescale_store();
        let err = store.search("ann").unwrap_err();

        assert!(matches!(err, Error::InvalidFormat(_)));
        assert_eq!(store.filter(), "ann");
        assert_eq!(
            store.filtered_available(),
            domain_map(vec![("timescale.com", vec!["ann@timescale.com"])])
        );
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_set_filter_never_adds() {
        let mut store = timescale_store();
        store.set_filter("new@domain.com");

        assert_eq!(store.len(), 2);
        assert!(store.filtered_available().is_empty());
    }

    #[test]
    fn test_selected_emails_order() {
        let mut store = RecipientStore::from_seed(&default_seed()).unwrap();
        store.select_email("jane@awesome.com").unwrap();
        store.select_email("ann@timescale.com").unwrap();

        assert_eq!(
            store.selected_emails(),
            vec![
                "mike@hello.com",
                "brian@qwerty.com",
                "kate@qwerty.com",
                "jane@awesome.com",
                "ann@timescale.com",
            ]
        );
        assert_eq!(store.selected_count(), 5);
    }
}
