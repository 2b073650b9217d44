//! Policy classification: map a symbol to its casing convention and verdict.
//!
//! Selection is total and deterministic: the same kind and modifiers always
//! pick the same [`NamingStyle`]. A symbol either conforms (no output) or
//! yields exactly one [`Violation`].

use namelint_diagnostics::Violation;
use rayon::prelude::*;
use thiserror::Error;

use crate::patterns::NamingStyle;
use crate::symbol::{SymbolDescriptor, SymbolKind};

/// A malformed descriptor from the program model provider.
///
/// These are host integration bugs, not policy violations; the classifier
/// fails fast and never recovers from them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    /// The provider supplied a descriptor with an empty name.
    #[error("{kind:?} symbol has an empty name")]
    EmptyName { kind: SymbolKind },
}

impl NamingStyle {
    /// The convention a symbol of this kind is held to, or `None` when the
    /// policy does not cover the kind.
    pub fn for_symbol(kind: SymbolKind, is_constant: bool) -> Option<Self> {
        match kind {
            SymbolKind::Type | SymbolKind::Method => Some(Self::UpperCamel),
            SymbolKind::Parameter | SymbolKind::Property => Some(Self::LowerCamel),
            SymbolKind::Field if is_constant => Some(Self::ScreamingSnake),
            SymbolKind::Field | SymbolKind::Local => Some(Self::LowerCamel),
            SymbolKind::Package => None,
        }
    }
}

/// The fixed naming policy.
///
/// Stateless: every classification is an independent pure evaluation, so one
/// value can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamingPolicy;

impl NamingPolicy {
    pub const fn new() -> Self {
        Self
    }

    /// Check a single symbol against the policy.
    ///
    /// Returns `Ok(None)` for a conforming or unchecked symbol and
    /// `Ok(Some(_))` otherwise, moving the descriptor's name and location
    /// into the violation. An empty name fails fast for every kind.
    pub fn classify<L>(
        &self,
        descriptor: SymbolDescriptor<L>,
    ) -> Result<Option<Violation<L>>, PreconditionError> {
        if descriptor.name.is_empty() {
            return Err(PreconditionError::EmptyName {
                kind: descriptor.kind,
            });
        }

        let Some(style) = NamingStyle::for_symbol(descriptor.kind, descriptor.is_constant) else {
            return Ok(None);
        };

        if style.matches(&descriptor.name) {
            Ok(None)
        } else {
            Ok(Some(Violation::new(descriptor.location, descriptor.name)))
        }
    }

    /// Check a batch of symbols, preserving input order.
    ///
    /// No deduplication: a symbol declared twice (a partial re-declaration,
    /// say) yields two violations if both copies fail.
    pub fn classify_all<L>(
        &self,
        descriptors: impl IntoIterator<Item = SymbolDescriptor<L>>,
    ) -> Result<Vec<Violation<L>>, PreconditionError> {
        let mut violations = Vec::new();
        for descriptor in descriptors {
            if let Some(violation) = self.classify(descriptor)? {
                violations.push(violation);
            }
        }
        Ok(violations)
    }

    /// Check a batch of symbols across the rayon thread pool.
    ///
    /// Each symbol is still classified independently; violations come back
    /// in input order, so the result matches [`Self::classify_all`].
    pub fn classify_all_par<L: Send>(
        &self,
        descriptors: Vec<SymbolDescriptor<L>>,
    ) -> Result<Vec<Violation<L>>, PreconditionError> {
        let verdicts = descriptors
            .into_par_iter()
            .map(|descriptor| self.classify(descriptor))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(verdicts.into_iter().flatten().collect())
    }
}
