//! Enumeration types for search parameters.
//!
//! Serialized names are the exact strings the upstream API expects.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Metadata field the search term is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchField {
    /// Paper title.
    Title,
    /// Author names.
    Authors,
    /// Author comments.
    Comments,
    /// Every indexed field.
    #[default]
    #[serde(rename = "All fields")]
    AllFields,
}

impl SearchField {
    /// Every variant, in schema order.
    pub const ALL: [Self; 4] = [Self::Title, Self::Authors, Self::Comments, Self::AllFields];

    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Authors => "Authors",
            Self::Comments => "Comments",
            Self::AllFields => "All fields",
        }
    }
}

/// arXiv subject area used as a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    #[serde(rename = "Computer Science")]
    ComputerScience,
    Physics,
    Economics,
    #[serde(rename = "Quantitative Biology")]
    QuantitativeBiology,
    #[serde(rename = "Electrical Engineering and Systems Science")]
    ElectricalEngineering,
    #[serde(rename = "Quantitative Finance")]
    QuantitativeFinance,
    Mathematics,
    Statistics,
}

impl Subject {
    /// Every variant, in schema order.
    pub const ALL: [Self; 8] = [
        Self::ComputerScience,
        Self::Physics,
        Self::Economics,
        Self::QuantitativeBiology,
        Self::ElectricalEngineering,
        Self::QuantitativeFinance,
        Self::Mathematics,
        Self::Statistics,
    ];

    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ComputerScience => "Computer Science",
            Self::Physics => "Physics",
            Self::Economics => "Economics",
            Self::QuantitativeBiology => "Quantitative Biology",
            Self::ElectricalEngineering => "Electrical Engineering and Systems Science",
            Self::QuantitativeFinance => "Quantitative Finance",
            Self::Mathematics => "Mathematics",
            Self::Statistics => "Statistics",
        }
    }
}

/// Which date the `date_from`/`date_to` window applies to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateType {
    /// Date of the most recent version.
    #[default]
    #[serde(rename = "Submission Date")]
    SubmissionDate,
    /// Date of the first version.
    #[serde(rename = "Original Submission Date")]
    OriginalSubmissionDate,
    /// Date the paper was announced.
    #[serde(rename = "Announced Date")]
    AnnouncedDate,
}

impl DateType {
    /// Every variant, in schema order.
    pub const ALL: [Self; 3] =
        [Self::SubmissionDate, Self::OriginalSubmissionDate, Self::AnnouncedDate];

    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SubmissionDate => "Submission Date",
            Self::OriginalSubmissionDate => "Original Submission Date",
            Self::AnnouncedDate => "Announced Date",
        }
    }
}

macro_rules! impl_display {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_display!(SearchField, Subject, DateType);
