//! Construction options for [`FrameNavigator`](crate::FrameNavigator).

use std::time::Duration;

/// Recognized construction options.
///
/// Everything has a sensible default: a dialog-hosted frame with the
/// module-wide request timeout, attached to the presentation mode's default
/// container.
#[derive(Debug, Clone, Default)]
pub struct FrameOptions {
	/// Deadline for the delegated request. Falls back to
	/// [`DEFAULT_SILENT_REQUEST_TIMEOUT`](framelet_protocol::DEFAULT_SILENT_REQUEST_TIMEOUT)
	/// when unset.
	pub silent_request_timeout: Option<Duration>,
	/// Present the frame invisibly off-screen instead of inside the shared
	/// dialog. Silent renewals want `true`; interactive flows `false`.
	pub hidden: bool,
	/// Attach the frame to the container element with this id instead of
	/// the default one for the presentation mode.
	pub parent_id: Option<String>,
}

impl FrameOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the request timeout.
	pub fn silent_request_timeout(mut self, timeout: Duration) -> Self {
		self.silent_request_timeout = Some(timeout);
		self
	}

	/// Selects the hidden, off-screen presentation.
	pub fn hidden(mut self, hidden: bool) -> Self {
		self.hidden = hidden;
		self
	}

	/// Overrides the container element the frame is attached to.
	pub fn parent_id(mut self, parent_id: impl Into<String>) -> Self {
		self.parent_id = Some(parent_id.into());
		self
	}
}
