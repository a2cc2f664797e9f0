//! framelet: delegated navigation for in-page authentication flows
//!
//! This crate drives a single authentication-protocol navigation step (an
//! authorization redirect, a silent token renewal) inside a transient,
//! sandboxed child frame that it creates, and settles exactly once with a
//! response, a timeout, or an interruption.
//!
//! Three independent event sources compete to end a navigation: the protocol
//! response posted by the child context, expiry of the request timer, and
//! removal of the frame from the document. The [`FrameNavigator`] funnels
//! the failure sources through one first-writer-wins signal, races it
//! against the response, and tears everything down through a disposer
//! registry on every path.
//!
//! The embedding document is reached only through the trait seams in
//! [`framelet_runtime`]; this crate never touches a DOM directly.
//!
//! # Examples
//!
//! ## Silent renewal in a hidden frame
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use framelet::{FrameFactory, FrameNavigator, FrameOptions, NavigateParams, Origin};
//! use url::Url;
//!
//! # async fn renew(dom: Arc<dyn framelet_runtime::HostDom>) -> framelet::Result<()> {
//! let factory = FrameFactory::new(dom);
//! let navigator = FrameNavigator::new(
//!     &factory,
//!     FrameOptions::new()
//!         .hidden(true)
//!         .silent_request_timeout(Duration::from_secs(5)),
//! )?;
//!
//! let params = NavigateParams::new(
//!     Url::parse("https://idp.example/authorize?prompt=none")?,
//!     Origin::parse("https://app.example")?,
//! );
//! let response = navigator.navigate(params).await?;
//! println!("callback URL: {}", response.url);
//! # Ok(())
//! # }
//! ```
//!
//! ## Delivering the response from inside the child frame
//!
//! ```ignore
//! use framelet::{FrameNavigator, Origin};
//!
//! # fn deliver(parent: &dyn framelet_runtime::ParentPort) -> framelet::Result<()> {
//! let origin = Origin::parse("https://app.example")?;
//! FrameNavigator::notify_parent(parent, "https://app.example/cb?code=abc", Some(&origin))?;
//! # Ok(())
//! # }
//! ```

pub mod factory;
pub mod handle;
pub mod navigator;
pub mod options;

pub use factory::{DIALOG_CONTAINER_ID, DIALOG_ID, FrameFactory};
pub use handle::FrameHandle;
pub use navigator::FrameNavigator;
pub use options::FrameOptions;

// Re-export protocol types for convenience
pub use framelet_protocol::{
	ChildMessage, DEFAULT_SILENT_REQUEST_TIMEOUT, NavigateParams, NavigateResponse, Origin,
	SandboxDirectives,
};

// Re-export the seam crates for embedders implementing HostDom
pub use framelet_protocol;
pub use framelet_runtime;

// Re-export Error and Result from framelet-runtime
pub use framelet_runtime::{Error, Result};
