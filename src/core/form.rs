use crate::utils::error::{DashError, Result};
use crate::utils::validation::{validate_max_chars, validate_non_empty_string};

pub const MAX_TITLE_CHARS: usize = 60;

/// Title inputs for cloning one listing.
///
/// There is always at least one input; removal of the last one is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct CloneForm {
    root_id: String,
    sku: String,
    inputs: Vec<String>,
}

impl CloneForm {
    /// Root id and SKU are trimmed here so the request, the redirect and
    /// the follow-up search all see the same value.
    pub fn new(root_id: impl Into<String>, sku: impl Into<String>) -> Self {
        Self {
            root_id: root_id.into().trim().to_string(),
            sku: sku.into().trim().to_string(),
            inputs: vec![String::new()],
        }
    }

    /// Builds a form pre-filled with `titles`. An empty list still yields
    /// one blank input.
    pub fn with_titles<I, S>(root_id: impl Into<String>, sku: impl Into<String>, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut form = Self::new(root_id, sku);
        let inputs: Vec<String> = titles.into_iter().map(Into::into).collect();
        if !inputs.is_empty() {
            form.inputs = inputs;
        }
        form
    }

    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn titles(&self) -> &[String] {
        &self.inputs
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Always false: the form keeps at least one input.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn can_remove(&self) -> bool {
        self.inputs.len() > 1
    }

    pub fn add_input(&mut self) {
        self.inputs.push(String::new());
    }

    pub fn remove_input(&mut self, index: usize) {
        if self.can_remove() && index < self.inputs.len() {
            self.inputs.remove(index);
        }
    }

    pub fn set_title(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.inputs.get_mut(index) {
            *slot = value.into();
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_non_empty_string("id", &self.root_id)?;
        validate_non_empty_string("sku", &self.sku)?;

        if self.inputs.is_empty() {
            return Err(DashError::EmptyField {
                field: "title".to_string(),
            });
        }

        for (index, title) in self.inputs.iter().enumerate() {
            let field = format!("title[{}]", index);
            validate_non_empty_string(&field, title)?;
            validate_max_chars(&field, title.trim(), MAX_TITLE_CHARS)?;
        }
        Ok(())
    }

    /// Titles as they are sent, trimmed.
    pub fn submitted_titles(&self) -> Vec<String> {
        self.inputs.iter().map(|t| t.trim().to_string()).collect()
    }
}
