//! Request rewriting applied before routing.
//!
//! - [`method_override::method_override`] -- lets HTML forms issue PUT/DELETE.

pub mod method_override;
