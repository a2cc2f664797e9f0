//! In-process stub document for driving the public API in tests.
//!
//! The stub completes every window load synchronously and records what the
//! controller asked of it; tests feed messages and removals into a frame's
//! event bus to play the child context's part.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use framelet::{ChildMessage, FrameOptions, Origin};
use framelet_runtime::{
	ContextEvent, ContextEvents, FrameNode, FrameSpec, HostDom, ParentPort, Result, WindowProxy,
};

pub fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_test_writer()
		.try_init();
}

pub fn hidden_options(timeout: Duration) -> FrameOptions {
	FrameOptions::new().hidden(true).silent_request_timeout(timeout)
}

pub struct StubDom {
	ready: AtomicBool,
	pub frames: Mutex<Vec<Arc<StubFrame>>>,
	pub dialog_hosts: Mutex<Vec<String>>,
	pub shown_dialogs: Mutex<Vec<String>>,
	pub closed_dialogs: Mutex<Vec<String>>,
}

impl StubDom {
	pub fn new() -> Arc<Self> {
		Arc::new(Self {
			ready: AtomicBool::new(true),
			frames: Mutex::new(Vec::new()),
			dialog_hosts: Mutex::new(Vec::new()),
			shown_dialogs: Mutex::new(Vec::new()),
			closed_dialogs: Mutex::new(Vec::new()),
		})
	}

	pub fn unready() -> Arc<Self> {
		let dom = Self::new();
		dom.ready.store(false, Ordering::SeqCst);
		dom
	}

	pub fn last_frame(&self) -> Arc<StubFrame> {
		self.frames.lock().last().cloned().expect("no frame created yet")
	}
}

impl HostDom for StubDom {
	fn document_ready(&self) -> bool {
		self.ready.load(Ordering::SeqCst)
	}

	fn create_frame(
		&self,
		spec: &FrameSpec,
		events: Arc<ContextEvents>,
	) -> Result<Arc<dyn FrameNode>> {
		let window = Arc::new(StubWindow {
			events: Arc::clone(&events),
			loads: Mutex::new(Vec::new()),
		});
		let frame = Arc::new(StubFrame {
			spec: spec.clone(),
			events,
			window,
			detach_count: AtomicUsize::new(0),
		});
		self.frames.lock().push(Arc::clone(&frame));
		Ok(frame)
	}

	fn create_dialog_host(&self, container_id: &str) -> Result<()> {
		self.dialog_hosts.lock().push(container_id.to_owned());
		Ok(())
	}

	fn show_dialog(&self, dialog_id: &str) -> Result<()> {
		self.shown_dialogs.lock().push(dialog_id.to_owned());
		Ok(())
	}

	fn close_dialog(&self, dialog_id: &str) -> Result<()> {
		self.closed_dialogs.lock().push(dialog_id.to_owned());
		Ok(())
	}
}

pub struct StubFrame {
	pub spec: FrameSpec,
	pub events: Arc<ContextEvents>,
	window: Arc<StubWindow>,
	detach_count: AtomicUsize,
}

impl StubFrame {
	/// Plays the child context posting a message to its parent document.
	pub fn post_message(&self, origin: &str, data: Value) {
		let origin = Origin::parse(origin).expect("test origin must parse");
		self.events
			.emit(ContextEvent::Message(ChildMessage::new(origin, data)));
	}

	/// Rips the frame element out of the document behind the controller's back.
	pub fn remove_out_of_band(&self) {
		self.events.emit(ContextEvent::Removed);
	}

	pub fn loads(&self) -> Vec<String> {
		self.window.loads.lock().clone()
	}

	pub fn is_detached(&self) -> bool {
		self.detach_count.load(Ordering::SeqCst) > 0
	}

	pub fn detach_count(&self) -> usize {
		self.detach_count.load(Ordering::SeqCst)
	}
}

impl FrameNode for StubFrame {
	fn window(&self) -> Option<Arc<dyn WindowProxy>> {
		if self.is_detached() {
			None
		} else {
			Some(Arc::clone(&self.window) as Arc<dyn WindowProxy>)
		}
	}

	fn detach(&self) -> Result<()> {
		self.detach_count.fetch_add(1, Ordering::SeqCst);
		self.events.emit(ContextEvent::Removed);
		Ok(())
	}
}

struct StubWindow {
	events: Arc<ContextEvents>,
	loads: Mutex<Vec<String>>,
}

impl WindowProxy for StubWindow {
	fn load(&self, url: &str) -> Result<()> {
		self.loads.lock().push(url.to_owned());
		// Every navigation completes instantly in the stub.
		self.events.emit(ContextEvent::Loaded {
			url: url.to_owned(),
		});
		Ok(())
	}
}

#[derive(Default)]
pub struct StubParent {
	pub posts: Mutex<Vec<(Value, Option<Origin>)>>,
}

impl ParentPort for StubParent {
	fn post(&self, payload: Value, target_origin: Option<&Origin>) -> Result<()> {
		self.posts.lock().push((payload, target_origin.cloned()));
		Ok(())
	}
}
