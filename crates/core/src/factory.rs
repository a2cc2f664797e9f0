//! Creation of sandboxed child frames and the shared dialog host.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use framelet_runtime::{ContextEvents, Error, FrameSpec, HostDom, Presentation, Result};

use crate::handle::FrameHandle;

/// Fixed id of the container element frames are appended into in dialog mode.
pub const DIALOG_CONTAINER_ID: &str = "framelet-dialog-host";

/// Fixed id of the modal dialog wrapping that container.
pub const DIALOG_ID: &str = "framelet-dialog";

static NEXT_FRAME_ID: AtomicU64 = AtomicU64::new(1);

fn next_frame_id() -> u64 {
	NEXT_FRAME_ID.fetch_add(1, Ordering::SeqCst)
}

/// Shared state of the lazily-created dialog container.
///
/// One dialog host serves every dialog-presented frame of a factory. The
/// container is built on first use and reused afterwards; active frames
/// stack in it in creation order, and the dialog closes once the last one
/// is destroyed.
pub(crate) struct DialogHost {
	dom: Arc<dyn HostDom>,
	container_created: Mutex<bool>,
	active: Mutex<Vec<u64>>,
}

impl DialogHost {
	fn new(dom: Arc<dyn HostDom>) -> Self {
		Self {
			dom,
			container_created: Mutex::new(false),
			active: Mutex::new(Vec::new()),
		}
	}

	/// Builds the shared container exactly once.
	fn ensure_container(&self) -> Result<()> {
		let mut created = self.container_created.lock();
		if !*created {
			self.dom.create_dialog_host(DIALOG_CONTAINER_ID)?;
			*created = true;
		}
		Ok(())
	}

	fn register(&self, frame_id: u64) {
		self.active.lock().push(frame_id);
	}

	/// Releases a frame's slot; closes the dialog when it was the last one.
	pub(crate) fn leave(&self, frame_id: u64) {
		let mut active = self.active.lock();
		active.retain(|id| *id != frame_id);
		if active.is_empty() {
			if let Err(error) = self.dom.close_dialog(DIALOG_ID) {
				tracing::warn!(%error, "failed to close dialog after last frame left");
			}
		}
	}

	fn active_count(&self) -> usize {
		self.active.lock().len()
	}
}

/// Creates isolated, sandboxed child frames attached to the host document.
///
/// Supports two presentation flavors: an invisible off-screen frame for
/// background requests and a frame hosted inside the shared modal dialog
/// for interactive ones.
pub struct FrameFactory {
	dom: Arc<dyn HostDom>,
	dialog: Arc<DialogHost>,
}

impl FrameFactory {
	/// Creates a factory over the given host document.
	pub fn new(dom: Arc<dyn HostDom>) -> Self {
		let dialog = Arc::new(DialogHost::new(Arc::clone(&dom)));
		Self { dom, dialog }
	}

	/// Creates a frame and returns its handle.
	///
	/// # Errors
	///
	/// [`Error::HostUnavailable`] when the document cannot receive frames,
	/// or whatever the host reports while building the frame or dialog.
	pub fn create(
		&self,
		presentation: Presentation,
		container_id: Option<&str>,
	) -> Result<FrameHandle> {
		if !self.dom.document_ready() {
			return Err(Error::HostUnavailable(
				"document has no body to attach a frame to".into(),
			));
		}

		if presentation == Presentation::Dialog {
			self.dialog.ensure_container()?;
		}

		let frame_id = next_frame_id();
		let events = Arc::new(ContextEvents::default());
		let mut spec = FrameSpec::new(presentation);
		if let Some(container_id) = container_id {
			spec = spec.container_id(container_id);
		}

		let frame = self.dom.create_frame(&spec, Arc::clone(&events))?;
		tracing::debug!(frame_id, ?presentation, "created child frame");

		let dialog = if presentation == Presentation::Dialog {
			self.dialog.register(frame_id);
			if let Err(error) = self.dom.show_dialog(DIALOG_ID) {
				self.dialog.leave(frame_id);
				let _ = frame.detach();
				return Err(error);
			}
			Some(Arc::clone(&self.dialog))
		} else {
			None
		};

		let window = frame.window();
		Ok(FrameHandle::new(frame_id, frame, window, events, dialog))
	}

	/// Returns how many dialog-presented frames are currently stacked.
	pub fn active_dialog_frames(&self) -> usize {
		self.dialog.active_count()
	}
}
