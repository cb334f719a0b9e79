//! Local UI navigation state (active tab, open campaign).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state so navigation
//! can evolve independently of campaign data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top-level tabs shown once signed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Explore,
    Create,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Explore, Tab::Create, Tab::Profile];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Explore => "Explore Tokens",
            Self::Create => "Create Token",
            Self::Profile => "My Profile",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub tab: Tab,
    /// Campaign shown in the detail view, replacing the Explore list.
    pub open_campaign: Option<String>,
}

impl UiState {
    /// Switch tabs. Any open campaign detail is closed.
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.open_campaign = None;
    }

    pub fn open_campaign(&mut self, campaign_id: impl Into<String>) {
        self.tab = Tab::Explore;
        self.open_campaign = Some(campaign_id.into());
    }

    pub fn close_campaign(&mut self) {
        self.open_campaign = None;
    }
}
