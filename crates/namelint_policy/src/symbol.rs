//! Symbol model supplied by the program model provider.

use is_macro::Is;

/// The kind of a declared identifier.
///
/// Providers translate their native symbol model into these kinds before
/// handing descriptors to the policy. `Package` symbols are part of the model
/// but carry no casing convention and are never checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Is)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SymbolKind {
    Type,
    Method,
    Parameter,
    Property,
    Field,
    Local,
    Package,
}

/// One declared identifier, as seen by the naming policy.
///
/// `L` is an opaque location handle owned by the provider; the policy never
/// interprets it, only forwards it into a violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolDescriptor<L> {
    pub kind: SymbolKind,
    pub name: String,
    /// Only meaningful for `Field`: distinguishes compile-time constants
    /// from mutable storage.
    pub is_constant: bool,
    pub location: L,
}

impl<L> SymbolDescriptor<L> {
    pub fn new(kind: SymbolKind, name: impl Into<String>, location: L) -> Self {
        Self {
            kind,
            name: name.into(),
            is_constant: false,
            location,
        }
    }

    /// Mark this descriptor as a compile-time constant.
    pub fn constant(mut self) -> Self {
        self.is_constant = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_default_to_non_constant() {
        let descriptor = SymbolDescriptor::new(SymbolKind::Field, "retryBudget", 0usize);
        assert!(!descriptor.is_constant);
        assert!(descriptor.kind.is_field());
    }

    #[test]
    fn constant_marks_the_descriptor() {
        let descriptor = SymbolDescriptor::new(SymbolKind::Field, "MAX_RETRIES", 0usize).constant();
        assert!(descriptor.is_constant);
    }
}
