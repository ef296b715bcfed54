//! Chart data models.
//!
//! Data sources for series values and titles.

/// A reference to a data source (cell range formula).
#[derive(Debug, Clone, PartialEq)]
pub struct DataSourceRef {
    /// Formula reference (e.g., "Sheet1!$A$1:$A$10")
    pub formula: String,
}

impl DataSourceRef {
    /// Create a new data source reference.
    #[inline]
    pub fn new(formula: impl Into<String>) -> Self {
        Self {
            formula: formula.into(),
        }
    }
}

/// Numeric data with optional cached values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumericData {
    /// Optional reference to cell range
    pub source_ref: Option<DataSourceRef>,
    /// Cached numeric values
    pub values: Vec<f64>,
    /// Format code for display
    pub format_code: Option<String>,
}

impl NumericData {
    /// Create a new numeric data set with values.
    #[inline]
    pub fn from_values(values: Vec<f64>) -> Self {
        Self {
            source_ref: None,
            values,
            format_code: None,
        }
    }

    /// Create a new numeric data set with a reference.
    #[inline]
    pub fn from_ref(formula: impl Into<String>) -> Self {
        Self {
            source_ref: Some(DataSourceRef::new(formula)),
            values: Vec::new(),
            format_code: None,
        }
    }

    /// Set the format code.
    #[inline]
    pub fn with_format_code(mut self, format_code: impl Into<String>) -> Self {
        self.format_code = Some(format_code.into());
        self
    }

    /// Add cached values.
    #[inline]
    pub fn with_cached_values(mut self, values: Vec<f64>) -> Self {
        self.values = values;
        self
    }
}

/// Title text source (can be from formula or literal).
#[derive(Debug, Clone, PartialEq)]
pub enum TitleText {
    /// Literal text
    Literal(String),
    /// Reference to a cell
    Reference(DataSourceRef),
}

impl TitleText {
    /// Create from a string.
    #[inline]
    pub fn from_string(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Create from a formula reference.
    #[inline]
    pub fn from_ref(formula: impl Into<String>) -> Self {
        Self::Reference(DataSourceRef::new(formula))
    }
}
