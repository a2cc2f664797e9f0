//! Wire types for the child-frame navigation protocol.
//!
//! This crate contains the serde-serializable types exchanged between a host
//! application and the child browsing context it delegates an authentication
//! step to. These types represent the "protocol layer" - the shapes of data
//! as they cross the frame boundary.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! - **Pure data**: No behavior beyond serialization and matching
//! - **Transport-agnostic**: The delivery mechanism (postMessage, channel,
//!   test stub) lives behind the `framelet-runtime` host seams
//! - **Stable**: Changes only when the frame message contract changes
//!
//! The orchestration built on top of these types lives in `framelet`.

pub mod options;
pub mod types;

pub use options::*;
pub use types::*;
