//! One thin client per backend resource. Every method serializes its typed
//! payload into the wire shape, performs one transport call against a fixed
//! versioned path, and maps the raw response through the wire mappers.

pub mod admin_battles;
pub mod admin_users;
pub mod applications;
pub mod auth;
pub mod battles;
pub mod judge;
pub mod media;
pub mod moderator;
pub mod participants;
pub mod profiles;
pub mod rounds;
