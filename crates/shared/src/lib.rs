//! Wire data model shared by the BuddyText client front ends.

pub mod domain;
pub mod error;
pub mod protocol;
