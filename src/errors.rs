use thiserror::Error;

pub const INVALID_SHAPE_MSG: &str =
    "AI returned an invalid data structure. Please try rephrasing your project description.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlueprintError {
    #[error("{0}")] Configuration(String),
    #[error("{0}")] Validation(String),
    #[error("{0}")] DataShape(String),
    #[error("{0}")] Collaborator(String),
    #[error("{0}")] InvalidState(String),
}

impl BlueprintError {
    pub fn data_shape() -> Self {
        BlueprintError::DataShape(INVALID_SHAPE_MSG.to_string())
    }

    /// The message stored in session state and shown on the error view.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
