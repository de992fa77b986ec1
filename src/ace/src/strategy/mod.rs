//! Strategy implementations
//!
//! Explicitly-invokable forms of the guard's decision rules, for resolvers
//! that need a non-guard-mediated check (e.g. filtering bulk results by
//! org). Each strategy is a pure decision function over the caller and
//! resolved entity data: read-only, fail-closed, no state across calls.
//!
//! The skip family (`ByToken`, `Rbac`, `Custom`) has no function here; the
//! guard answers `true` for those tags directly, deferring to the token
//! layer, the role check, or the resolver's own custom check.

pub mod by_member;
pub mod by_org;
pub mod by_user;

pub use by_member::{by_member, resolve_member_id};
pub use by_org::by_org;
pub use by_user::by_user;
