//! Naming-convention policy core.
//!
//! The host (a "program model provider") parses source code and hands this
//! crate [`SymbolDescriptor`] values, one per declared identifier. The policy
//! selects the casing convention for each symbol's kind, checks the name
//! against it, and yields a [`Violation`] per failure.
//!
//! Classification is pure and stateless: every symbol is evaluated
//! independently, so batches may be checked in any order or in parallel.

mod classifier;
mod patterns;
mod symbol;

pub use classifier::{NamingPolicy, PreconditionError};
pub use namelint_diagnostics::Violation;
pub use patterns::NamingStyle;
pub use symbol::{SymbolDescriptor, SymbolKind};
