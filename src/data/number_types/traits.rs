//! # In-place operations
//!
//! Operations that modify a value instead of building a new one. They require exclusive access to
//! the value and never leave it partially modified.

/// Negate a value in place.
pub trait NegAssign {
    fn neg_assign(&mut self);
}
