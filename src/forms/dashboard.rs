//! Forms posted by the filter tree and the result viewer.

use serde::Deserialize;
use validator::Validate;

use crate::domain::selection::Selection;
use crate::domain::sort::SortColumn;
use crate::domain::view_mode::ViewMode;
use crate::forms::FormError;

/// Click on a gender node header.
#[derive(Debug, Deserialize, Validate)]
pub struct ToggleGenderForm {
    #[validate(length(min = 1, max = 128))]
    pub gender: String,
}

impl ToggleGenderForm {
    /// Validated gender label of the clicked node.
    pub fn into_gender(self) -> Result<String, FormError> {
        self.validate()?;
        Ok(self.gender)
    }
}

/// Click on an age-bracket leaf.
#[derive(Debug, Deserialize, Validate)]
pub struct SelectAgeGroupForm {
    #[validate(length(min = 1, max = 128))]
    pub gender: String,
    #[validate(range(max = 150))]
    pub low: u32,
    #[validate(range(max = 150))]
    pub high: u32,
}

impl TryFrom<SelectAgeGroupForm> for Selection {
    type Error = FormError;

    fn try_from(form: SelectAgeGroupForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(Selection::parse(&form.gender, form.low, form.high)?)
    }
}

/// Click on a column header.
#[derive(Debug, Deserialize)]
pub struct SortForm {
    pub column: String,
}

impl TryFrom<SortForm> for SortColumn {
    type Error = FormError;

    fn try_from(form: SortForm) -> Result<Self, Self::Error> {
        Ok(form.column.parse()?)
    }
}

/// Table/card switch.
#[derive(Debug, Deserialize)]
pub struct ViewModeForm {
    pub mode: String,
}

impl TryFrom<ViewModeForm> for ViewMode {
    type Error = FormError;

    fn try_from(form: ViewModeForm) -> Result<Self, Self::Error> {
        Ok(form.mode.parse()?)
    }
}
