//! Construction settings
//!
//! [`ArrayConfig`] controls how much of a nested value shape inference
//! inspects and how deep it is allowed to go.

/// How thoroughly shape inference walks the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Visit every element; ragged input is always rejected.
    #[default]
    Exhaustive,
    /// Follow only the first element of each sequence. Reports the shape
    /// implied by that path without checking siblings or collecting data.
    Probe,
}

/// Array construction configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Maximum nesting depth accepted (the root sequence is depth 1)
    pub max_depth: usize,
    /// Shape inference mode
    pub validation: Validation,
}

impl ArrayConfig {
    /// Default bound on nesting depth.
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    /// Set the maximum nesting depth
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth.max(1);
        self
    }

    /// Set the shape inference mode
    pub fn validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            validation: Validation::Exhaustive,
        }
    }
}
