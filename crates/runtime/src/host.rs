//! Trait seams to the embedding document.
//!
//! The navigation controller is independent of any concrete DOM binding.
//! An embedder implements [`HostDom`] once; everything the controller does
//! to a document goes through these traits, and everything the document
//! reports back arrives on the [`ContextEvents`] bus handed to
//! [`HostDom::create_frame`].

use std::sync::Arc;

use serde_json::Value;

use framelet_protocol::{Origin, SandboxDirectives};

use crate::error::Result;
use crate::events::ContextEvents;

/// How a created frame is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Invisible off-screen frame for background/silent requests.
    Hidden,
    /// Frame hosted inside the shared modal dialog for interactive requests.
    Dialog,
}

/// Configuration for one frame creation.
#[derive(Debug, Clone)]
pub struct FrameSpec {
    /// Presentation mode for the frame.
    pub presentation: Presentation,
    /// Attach to this container element instead of the default one for the
    /// presentation mode.
    pub container_id: Option<String>,
    /// Sandbox policy for the frame element.
    pub sandbox: SandboxDirectives,
}

impl FrameSpec {
    /// Creates a spec with the default sandbox for the given presentation.
    pub fn new(presentation: Presentation) -> Self {
        Self {
            presentation,
            container_id: None,
            sandbox: SandboxDirectives::default(),
        }
    }

    /// Overrides the container element the frame is attached to.
    pub fn container_id(mut self, container_id: impl Into<String>) -> Self {
        self.container_id = Some(container_id.into());
        self
    }
}

/// The document a child frame is created in.
///
/// Implementations are expected to be cheap handles onto the real document;
/// the controller may hold them for the lifetime of a navigation.
pub trait HostDom: Send + Sync {
    /// Returns `true` when the document exists and has a body to attach to.
    fn document_ready(&self) -> bool;

    /// Creates a sandboxed frame per `spec`, attaches it according to its
    /// presentation, and wires the frame's message/load/removal events into
    /// `events`.
    fn create_frame(
        &self,
        spec: &FrameSpec,
        events: Arc<ContextEvents>,
    ) -> Result<Arc<dyn FrameNode>>;

    /// Creates the shared dialog container identified by `container_id`.
    ///
    /// Invoked lazily, before the first dialog-presented frame.
    fn create_dialog_host(&self, container_id: &str) -> Result<()>;

    /// Makes the dialog identified by `dialog_id` visible.
    fn show_dialog(&self, dialog_id: &str) -> Result<()>;

    /// Hides the dialog identified by `dialog_id` again.
    fn close_dialog(&self, dialog_id: &str) -> Result<()>;
}

/// A frame element attached to the document.
pub trait FrameNode: Send + Sync {
    /// Returns the frame's current content window, if it still has one.
    ///
    /// The content window is a distinct object from the element and can
    /// diverge from the one observed at creation once the frame navigates.
    fn window(&self) -> Option<Arc<dyn WindowProxy>>;

    /// Detaches the frame element from its container.
    ///
    /// The host emits [`ContextEvent::Removed`](crate::ContextEvent::Removed)
    /// on the frame's bus when the element leaves the document, whether
    /// through this call or out-of-band.
    fn detach(&self) -> Result<()>;
}

/// The live window object of a child frame.
pub trait WindowProxy: Send + Sync {
    /// Replace-navigates the window to `url` (no history entry).
    fn load(&self, url: &str) -> Result<()>;
}

/// Outbound one-way channel to a parent window.
///
/// Used from inside the child context to deliver the completion payload;
/// no reply is expected.
pub trait ParentPort: Send + Sync {
    /// Posts `payload` to the parent, optionally restricted to
    /// `target_origin`.
    fn post(&self, payload: Value, target_origin: Option<&Origin>) -> Result<()>;
}
