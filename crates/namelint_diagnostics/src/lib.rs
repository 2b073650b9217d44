//! Violation records produced by the naming policy.
//!
//! A [`Violation`] pairs the offending identifier with the opaque location
//! handle its descriptor carried, so the host can anchor a diagnostic at the
//! declaration site without the policy core ever interpreting locations.

/// A single naming-policy violation.
///
/// `L` is the host's location handle. The policy core never looks inside it;
/// it is moved unchanged from the descriptor into the violation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Violation<L> {
    /// Where the violating identifier was declared, in the host's terms.
    pub location: L,
    /// The identifier that failed its conformance predicate.
    pub name: String,
}

impl<L> Violation<L> {
    pub fn new(location: L, name: impl Into<String>) -> Self {
        Self {
            location,
            name: name.into(),
        }
    }

    /// User-facing diagnostic message for this violation.
    pub fn message(&self) -> String {
        format!(
            "identifier '{}' does not conform to the naming policy",
            self.name
        )
    }
}
