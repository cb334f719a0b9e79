//! Editable campaign form state for the Create view.
//!
//! DESIGN
//! ======
//! Validation always runs; `touched` only decides whether problems are
//! highlighted. The publish button is driven by [`CampaignDraft::is_publishable`]
//! so an invalid draft never reaches the store in the first place.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use crate::campaign::Phase;
use crate::image::{ImageData, ImageError};

/// A single reason the draft cannot be published yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftIssue {
    ProjectName,
    TokenName,
    TokenSymbol,
    Description,
    Image,
    /// Phase at this index has no positive price.
    PhasePrice(usize),
    /// Phase at this index has no positive participant cap.
    PhaseParticipants(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CampaignDraft {
    pub project_name: String,
    pub token_name: String,
    pub token_symbol: String,
    pub description: String,
    pub image: Option<ImageData>,
    pub image_error: Option<ImageError>,
    pub phases: Vec<Phase>,
    /// Set once the user has attempted to publish.
    pub touched: bool,
}

impl Default for CampaignDraft {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            token_name: String::new(),
            token_symbol: String::new(),
            description: String::new(),
            image: None,
            image_error: None,
            phases: vec![Phase::empty()],
            touched: false,
        }
    }
}

impl CampaignDraft {
    /// Every problem blocking publish, in form order.
    #[must_use]
    pub fn validate(&self) -> Vec<DraftIssue> {
        let mut issues = Vec::new();
        let text_fields = [
            (&self.project_name, DraftIssue::ProjectName),
            (&self.token_name, DraftIssue::TokenName),
            (&self.token_symbol, DraftIssue::TokenSymbol),
            (&self.description, DraftIssue::Description),
        ];
        for (value, issue) in text_fields {
            if value.trim().is_empty() {
                issues.push(issue);
            }
        }
        if self.image.as_ref().is_none_or(ImageData::is_empty) {
            issues.push(DraftIssue::Image);
        }
        for (i, phase) in self.phases.iter().enumerate() {
            if phase.price_per_claim <= 0.0 || phase.price_per_claim.is_nan() {
                issues.push(DraftIssue::PhasePrice(i));
            }
            if phase.max_participants == 0 {
                issues.push(DraftIssue::PhaseParticipants(i));
            }
        }
        issues
    }

    #[must_use]
    pub fn is_publishable(&self) -> bool {
        self.validate().is_empty()
    }

    /// Whether a field should render in its error style.
    #[must_use]
    pub fn highlighted(&self, issue: DraftIssue) -> bool {
        self.touched && self.validate().contains(&issue)
    }

    /// Whether a phase editor should render as invalid.
    #[must_use]
    pub fn phase_invalid(&self, index: usize) -> bool {
        self.touched && self.phases.get(index).is_some_and(|p| !p.is_complete())
    }

    pub fn set_token_symbol(&mut self, raw: &str) {
        self.token_symbol = raw.to_uppercase();
    }

    /// Record the outcome of an image upload.
    ///
    /// A rejected upload only sets the error; a previously accepted image and
    /// all other fields stay as they were.
    pub fn apply_image(&mut self, result: Result<ImageData, ImageError>) {
        match result {
            Ok(image) => {
                self.image = Some(image);
                self.image_error = None;
            }
            Err(e) => self.image_error = Some(e),
        }
    }

    /// The file picker was cleared.
    pub fn clear_image(&mut self) {
        self.image = None;
        self.image_error = None;
    }

    pub fn add_phase(&mut self) {
        self.phases.push(Phase::empty());
    }

    /// Remove a phase. The last remaining phase cannot be removed.
    pub fn remove_phase(&mut self, index: usize) -> bool {
        if self.phases.len() <= 1 || index >= self.phases.len() {
            return false;
        }
        self.phases.remove(index);
        true
    }

    #[must_use]
    pub fn can_remove_phase(&self) -> bool {
        self.phases.len() > 1
    }

    /// Apply an edit to one phase; unknown indexes are ignored.
    pub fn update_phase<F>(&mut self, index: usize, edit: F)
    where
        F: FnOnce(&mut Phase),
    {
        if let Some(phase) = self.phases.get_mut(index) {
            edit(phase);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Parse a numeric form input the way the number fields expect: blank or
/// garbage reads as zero.
#[must_use]
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Integer variant of [`parse_amount`]; negative or fractional input reads as zero.
#[must_use]
pub fn parse_count<T: std::str::FromStr + Default>(raw: &str) -> T {
    raw.trim().parse::<T>().unwrap_or_default()
}
