//! Step binding discovery and storage.
//!
//! A proxy builds its [`BindingTable`] exactly once, at construction, by
//! asking the target for its methods and collecting every (kind, description)
//! pair they declare:
//!
//! 1. `@<kind> <description>` lines in the method's documentation text
//! 2. the `<kind>_<rest>` method naming convention, underscores read as spaces
//! 3. explicit bindings carried on the method descriptor
//!
//! Descriptions are normalised with [`crate::normalize::normalize_key`] before
//! they are stored. A pair may be claimed by one method only; the same method
//! claiming it twice is harmless.

mod patterns;
mod scanner;
mod table;

pub use patterns::{StepPatterns, TokenClass};
pub use scanner::{BindingSource, Candidate, candidates, discover};
pub use table::{Binding, BindingTable, BindingTableBuilder, MethodHandle, Registration};
