//! Framelet Runtime - Settlement primitives and host seams
//!
//! This crate provides the low-level infrastructure underneath the
//! navigation controller in `framelet`:
//!
//! - **Abort signal**: One-shot, first-writer-wins settlement of a pending
//!   navigation from any of its competing event sources
//! - **Disposer registry**: Cleanup actions guaranteed to run exactly once
//!   regardless of which path settles the call
//! - **Context events**: Broadcast of message/load/removal events emitted by
//!   the host for a child frame
//! - **Host seams**: Narrow traits the embedding document implements so the
//!   controller stays independent of any concrete DOM binding
//!
//! # Decoupling via HostDom
//!
//! The controller never touches a document directly. It asks a [`HostDom`]
//! implementation to create frames and containers, drives the returned
//! [`FrameNode`]/[`WindowProxy`] handles, and consumes the [`ContextEvents`]
//! the host feeds back. Production code binds these traits to a real DOM;
//! tests bind them to an in-process stub.

pub mod abort;
pub mod disposer;
pub mod error;
pub mod events;
pub mod host;

// Re-export key types at crate root
pub use abort::AbortSignal;
pub use disposer::DisposerRegistry;
pub use error::{Error, Result};
pub use events::{ContextEvent, ContextEventStream, ContextEvents};
pub use host::{FrameNode, FrameSpec, HostDom, ParentPort, Presentation, WindowProxy};
