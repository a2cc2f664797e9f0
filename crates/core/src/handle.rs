//! Handle to a created child frame.

use std::sync::Arc;

use framelet_runtime::{ContextEvents, FrameNode, WindowProxy};

use crate::factory::DialogHost;

/// Owns one created child frame for the duration of a navigation.
///
/// The frame element and its content window are held as two separate
/// references: once the frame navigates cross-origin the window observed at
/// creation is the only one the embedder may keep driving, and it can
/// diverge from what the element currently hosts. Both are cleared on
/// destruction.
pub struct FrameHandle {
	id: u64,
	frame: Option<Arc<dyn FrameNode>>,
	window: Option<Arc<dyn WindowProxy>>,
	events: Arc<ContextEvents>,
	dialog: Option<Arc<DialogHost>>,
}

impl FrameHandle {
	pub(crate) fn new(
		id: u64,
		frame: Arc<dyn FrameNode>,
		window: Option<Arc<dyn WindowProxy>>,
		events: Arc<ContextEvents>,
		dialog: Option<Arc<DialogHost>>,
	) -> Self {
		Self {
			id,
			frame: Some(frame),
			window,
			events,
			dialog,
		}
	}

	/// Returns the frame's creation-time id.
	pub fn id(&self) -> u64 {
		self.id
	}

	/// Returns the event bus the host feeds for this frame.
	pub fn events(&self) -> &Arc<ContextEvents> {
		&self.events
	}

	/// Returns the live content window, if the frame still has one.
	pub fn window(&self) -> Option<Arc<dyn WindowProxy>> {
		self.window.clone()
	}

	/// Detaches the frame from the document and releases its dialog slot.
	///
	/// Safe to call more than once; both references are cleared on the
	/// first call.
	pub fn destroy(&mut self) {
		if let Some(frame) = self.frame.take() {
			if let Err(error) = frame.detach() {
				tracing::warn!(%error, "failed to detach frame");
			}
		}
		self.window = None;
		if let Some(dialog) = self.dialog.take() {
			dialog.leave(self.id);
		}
	}
}
