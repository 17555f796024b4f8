//! Duplicate-id detection and resolution.
//!
//! Ids are grouped by their normalized form (variant suffix stripped). In
//! every group with more than one member, entries whose name marks them as
//! a variant get a fresh id; base entries are never touched.

pub mod groups;
pub mod policy;
pub mod resolver;

pub use groups::duplicate_groups;
pub use policy::{DuplicatePolicy, IdNormalizer, NameMarker, VariantClassifier};
pub use resolver::{Resolution, UnresolvedGroup, resolve};
