//! Solution cost evaluation and invariant auditing.

mod evaluator;

pub use evaluator::{audit, evaluate, Violation, ViolationType};
