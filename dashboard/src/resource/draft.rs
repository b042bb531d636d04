//! Form drafts

use dashboard_api::{EnvVar, ProjectDraft, RepositoryDraft};

/// Locally held, user-editable form state
pub trait Draft: Default {
    /// The field that must be filled before submitting
    fn required_name(&self) -> &str;

    fn is_submittable(&self) -> bool {
        !self.required_name().trim().is_empty()
    }

    /// Back to the initial empty shape
    fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Draft for RepositoryDraft {
    fn required_name(&self) -> &str {
        &self.name
    }
}

impl Draft for ProjectDraft {
    fn required_name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvField {
    Key,
    Value,
}

/// Editing helpers for drafts carrying environment variable rows
pub trait EnvVarRows {
    fn env_vars(&self) -> &[EnvVar];

    fn env_vars_mut(&mut self) -> &mut Vec<EnvVar>;

    fn add_env_var(&mut self) {
        self.env_vars_mut().push(EnvVar::default());
    }

    /// Returns false when the row does not exist
    fn update_env_var(&mut self, index: usize, field: EnvField, value: impl Into<String>) -> bool {
        match self.env_vars_mut().get_mut(index) {
            Some(row) => {
                match field {
                    EnvField::Key => row.key = value.into(),
                    EnvField::Value => row.value = value.into(),
                }
                true
            }
            None => false,
        }
    }

    fn remove_env_var(&mut self, index: usize) -> Option<EnvVar> {
        let rows = self.env_vars_mut();
        (index < rows.len()).then(|| rows.remove(index))
    }

    /// Rows that actually name a variable
    fn filled_env_vars(&self) -> Vec<EnvVar> {
        self.env_vars()
            .iter()
            .filter(|row| !row.is_blank())
            .cloned()
            .collect()
    }
}

impl EnvVarRows for ProjectDraft {
    fn env_vars(&self) -> &[EnvVar] {
        &self.environment_vars
    }

    fn env_vars_mut(&mut self) -> &mut Vec<EnvVar> {
        &mut self.environment_vars
    }
}
