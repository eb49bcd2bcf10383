//! Expand/collapse state of the panel sections.

use std::collections::HashSet;

/// A collapsible section in either panel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Section {
    /// A domain group in the available panel.
    Available(String),
    /// The "Company Recipients" group in the selected panel.
    CompanyRecipients,
    /// A domain inside "Company Recipients".
    Company(String),
    /// The "Email Recipients" group in the selected panel.
    EmailRecipients,
}

impl Section {
    /// Whether the section starts out expanded.
    ///
    /// Available domains start collapsed; everything in the selected panel
    /// starts open.
    const fn open_by_default(&self) -> bool {
        !matches!(self, Self::Available(_))
    }
}

/// Tracks which sections the user has flipped away from their default.
#[derive(Debug, Clone, Default)]
pub struct PanelState {
    toggled: HashSet<Section>,
}

impl PanelState {
    /// Flips a section between expanded and collapsed.
    pub fn toggle(&mut self, section: Section) {
        if !self.toggled.remove(&section) {
            self.toggled.insert(section);
        }
    }

    /// Returns `true` if the section should render its body.
    #[must_use]
    pub fn is_open(&self, section: &Section) -> bool {
        section.open_by_default() != self.toggled.contains(section)
    }

    /// Returns `true` if an available domain group should render its
    /// emails. Groups are forced open while a search filter is active so
    /// matches are visible.
    #[must_use]
    pub fn is_available_open(&self, domain: &str, filtering: bool) -> bool {
        filtering || self.is_open(&Section::Available(domain.to_string()))
    }
}
