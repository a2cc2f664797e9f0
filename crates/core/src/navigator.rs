//! The navigation controller: one navigate-and-wait cycle per frame.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::broadcast;

use framelet_protocol::{
	DEFAULT_SILENT_REQUEST_TIMEOUT, NavigateParams, NavigateResponse, Origin,
};
use framelet_runtime::{
	AbortSignal, ContextEvent, ContextEvents, DisposerRegistry, Error, ParentPort, Presentation,
	Result, WindowProxy,
};

use crate::factory::FrameFactory;
use crate::handle::FrameHandle;
use crate::options::FrameOptions;

/// Neutral document the frame is parked on before removal, so the response
/// document and whatever protocol material it carries is gone first.
const BLANK_TARGET: &str = "about:blank";

/// Drives one delegated navigation inside a child frame.
///
/// A navigator owns its frame exclusively and goes through at most one
/// `{new → navigate → settle → close}` lifecycle. `navigate` must not be
/// invoked concurrently with itself on the same instance; a timed-out or
/// interrupted flow is restarted by constructing a new navigator.
pub struct FrameNavigator {
	handle: Mutex<Option<FrameHandle>>,
	abort: Arc<AbortSignal>,
	disposers: Arc<DisposerRegistry>,
	timeout: Duration,
}

impl std::fmt::Debug for FrameNavigator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FrameNavigator")
			.field("timeout", &self.timeout)
			.finish_non_exhaustive()
	}
}

impl FrameNavigator {
	/// Creates the controller and its child frame up front.
	///
	/// The `hidden` option selects the off-screen flavor; otherwise the
	/// frame is hosted in the shared dialog.
	pub fn new(factory: &FrameFactory, options: FrameOptions) -> Result<Self> {
		let presentation = if options.hidden {
			Presentation::Hidden
		} else {
			Presentation::Dialog
		};
		let handle = factory.create(presentation, options.parent_id.as_deref())?;
		Ok(Self {
			handle: Mutex::new(Some(handle)),
			abort: Arc::new(AbortSignal::new()),
			disposers: Arc::new(DisposerRegistry::new()),
			timeout: options
				.silent_request_timeout
				.unwrap_or(DEFAULT_SILENT_REQUEST_TIMEOUT),
		})
	}

	/// Loads `params.url` into the child frame and waits for the outcome.
	///
	/// Resolves with the first message from `params.response_origin` whose
	/// payload is a [`NavigateResponse`]. Messages from other origins, and
	/// unparseable ones, are skipped without settling anything.
	///
	/// # Errors
	///
	/// - [`Error::Timeout`] when no matching message arrives in time
	/// - [`Error::FrameRemoved`] when the frame leaves the document first,
	///   via [`close`](Self::close) or out-of-band
	/// - [`Error::Disposed`] when the navigator was already closed
	pub async fn navigate(&self, params: NavigateParams) -> Result<NavigateResponse> {
		let (window, events) = {
			let guard = self.handle.lock();
			let handle = guard
				.as_ref()
				.ok_or_else(|| Error::Disposed("attempted to navigate a closed frame".into()))?;
			let window = handle
				.window()
				.ok_or_else(|| Error::Disposed("frame has no content window".into()))?;
			(window, Arc::clone(handle.events()))
		};

		tracing::debug!(timeout = ?self.timeout, url = %params.url, "navigating child frame");

		let result = self.race_response(window, events, &params).await;
		self.disposers.run();

		match &result {
			Ok(_) if !params.keep_open => self.close(),
			Ok(_) => {}
			Err(error) => tracing::debug!(%error, "child frame navigation failed"),
		}
		result
	}

	async fn race_response(
		&self,
		window: Arc<dyn WindowProxy>,
		events: Arc<ContextEvents>,
		params: &NavigateParams,
	) -> Result<NavigateResponse> {
		// Arm the request timer. Its cancellation is registered with the
		// disposers so every other exit path clears it; a fire after
		// settlement is already a no-op at the signal.
		let timer = {
			let abort = Arc::clone(&self.abort);
			let timeout = self.timeout;
			tokio::spawn(async move {
				tokio::time::sleep(timeout).await;
				abort.raise(Error::Timeout(format!(
					"child frame timed out without a response after {timeout:?}"
				)));
			})
		};
		{
			let timer = timer.abort_handle();
			self.disposers.add(move || timer.abort());
		}

		// An out-of-band removal must settle the pending call too.
		let watcher = {
			let abort = Arc::clone(&self.abort);
			let mut stream = events.stream();
			tokio::spawn(async move {
				while let Some(event) = stream.recv().await {
					if matches!(event, ContextEvent::Removed) {
						abort.raise(Error::FrameRemoved("frame removed from page".into()));
						break;
					}
				}
			})
		};
		{
			let watcher = watcher.abort_handle();
			self.disposers.add(move || watcher.abort());
		}

		// Subscribe before the load so no response can slip past.
		let mut rx = events.subscribe();
		window.load(params.url.as_str())?;

		let aborted = self.abort.raised();
		tokio::pin!(aborted);

		loop {
			tokio::select! {
				reason = &mut aborted => return Err(reason),
				event = rx.recv() => match event {
					Ok(ContextEvent::Message(message)) => {
						if message.origin() != &params.response_origin {
							tracing::debug!(
								origin = %message.origin(),
								"ignoring message from unexpected origin"
							);
							continue;
						}
						match message.navigate_response() {
							Some(response) => return Ok(response),
							None => tracing::debug!(
								"ignoring non-response message from expected origin"
							),
						}
					}
					Ok(_) => {}
					Err(broadcast::error::RecvError::Lagged(n)) => {
						tracing::warn!(dropped = n, "context event stream lagged");
					}
					Err(broadcast::error::RecvError::Closed) => return Err(Error::ChannelClosed),
				},
			}
		}
	}

	/// Tears the child frame down.
	///
	/// Synchronous from the caller's perspective: the frame is parked on a
	/// blank document, and once that load completes it is detached and the
	/// completion signal raised, so a still-pending [`navigate`](Self::navigate)
	/// rejects instead of hanging. Idempotent: closing an already-closed
	/// navigator is a no-op.
	pub fn close(&self) {
		let Some(mut handle) = self.handle.lock().take() else {
			return;
		};
		let abort = Arc::clone(&self.abort);

		let Ok(rt) = tokio::runtime::Handle::try_current() else {
			// Without a runtime there is nobody left to await the blank
			// load; tear down on the spot.
			handle.destroy();
			abort.raise(Error::FrameRemoved("frame removed from page".into()));
			return;
		};

		rt.spawn(async move {
			if let Some(window) = handle.window() {
				let mut stream = handle.events().stream();
				match window.load(BLANK_TARGET) {
					Ok(()) => {
						while let Some(event) = stream.recv().await {
							if matches!(event, ContextEvent::Loaded { .. }) {
								break;
							}
						}
					}
					Err(error) => {
						tracing::warn!(%error, "failed to park frame on blank target");
					}
				}
			}
			handle.destroy();
			abort.raise(Error::FrameRemoved("frame removed from page".into()));
		});
	}

	/// Posts a completion URL to a parent window.
	///
	/// One-way: used from inside the child context to deliver the final
	/// response a pending [`navigate`](Self::navigate) is waiting for.
	/// `target_origin` restricts delivery to that origin when given.
	pub fn notify_parent(
		parent: &dyn ParentPort,
		url: &str,
		target_origin: Option<&Origin>,
	) -> Result<()> {
		let payload = serde_json::to_value(NavigateResponse {
			url: url.to_owned(),
		})?;
		parent.post(payload, target_origin)
	}
}
