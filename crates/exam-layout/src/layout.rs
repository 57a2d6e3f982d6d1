//! Layout generation and application.
//!
//! This module turns a [`Version`](exam_layout_core::version::Version) and a
//! seed into the shuffled view a student sees.
//!
//! # Pipeline Position
//!
//! ```text
//! (attempt id, participant id)
//!     ↓ seed
//! seed
//!     ↓ generate (this module)
//! Layout  ──→ attempt storage
//!     ↓ apply (this module)
//! Display-order Version
//!     ↓ remap
//! Canonical responses → grading
//! ```
//!
//! # Submodules
//!
//! - [`generate`] - Draws the permutations of one attempt into a
//!   [`Layout`](exam_layout_core::layout::Layout)
//! - [`apply`] - Reorders a version by a stored layout
//! - [`preview`] - Fixed-seed shuffle for authoring, with no layout produced
//!
//! # Draw Order
//!
//! One [`SeededRandom`](crate::random::SeededRandom) is shared across a whole
//! call. Question orders are drawn first, section by section. Choice orders
//! are drawn second, walking the questions in canonical order. Changing this
//! order changes every permutation of every attempt already issued.

pub mod apply;
pub mod generate;
pub mod preview;

pub use apply::apply_layout;
pub use generate::generate_layout;
pub use preview::{PREVIEW_SEED, generate_preview};
