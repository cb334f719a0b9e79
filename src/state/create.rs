//! Create-tab state: the campaign draft plus preview/success flags.

#[cfg(test)]
#[path = "create_test.rs"]
mod create_test;

use claims::{Address, Campaign, CampaignDraft, CampaignStore, PublishError};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateState {
    pub draft: CampaignDraft,
    pub show_preview: bool,
    /// The last publish succeeded; the success panel replaces the form.
    pub published: bool,
}

impl CreateState {
    /// Attempt to publish the draft into `store`.
    ///
    /// Marks the draft touched either way so field highlighting kicks in.
    ///
    /// # Errors
    ///
    /// Propagates [`PublishError`] from the store; the draft is kept intact.
    pub fn publish(
        &mut self,
        store: &mut CampaignStore,
        creator: Option<Address>,
        now_ms: u64,
    ) -> Result<Campaign, PublishError> {
        self.draft.touched = true;
        let campaign = store.publish(&self.draft, creator, now_ms)?;
        self.published = true;
        self.show_preview = false;
        Ok(campaign)
    }

    /// "Create another": start over with an empty form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
