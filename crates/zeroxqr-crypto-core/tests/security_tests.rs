#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Security properties of the crate:
//! - secret buffers are wiped on drop
//! - mlock status and core-dump disabling
//! - randomness quality and salt/nonce freshness

mod security;
