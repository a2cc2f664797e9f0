//! Core data types for the frame message contract.
//!
//! # Main Types
//!
//! - [`Origin`] - scheme+host+port identity used to authenticate messages
//! - [`NavigateParams`] - one navigation request into the child frame
//! - [`NavigateResponse`] - the completion payload delivered back
//! - [`ChildMessage`] - inbound message envelope from the child context
//! - [`SandboxDirectives`] - sandbox policy applied to created frames

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

/// The scheme+host+port identity of a web origin.
///
/// Stored in ASCII serialization form (`https://app.example`,
/// `http://localhost:8080`). Default ports are elided, matching what a
/// browser reports as the origin of a message event. An opaque origin
/// (e.g. from a `data:` URL) serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Origin(String);

impl Origin {
	/// Parses the origin of the given URL string.
	pub fn parse(url: &str) -> Result<Self, url::ParseError> {
		Ok(Self::from_url(&Url::parse(url)?))
	}

	/// Returns the origin of an already-parsed URL.
	pub fn from_url(url: &Url) -> Self {
		Self(url.origin().ascii_serialization())
	}

	/// Returns the ASCII serialization of this origin.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Returns `true` if the given URL string has this origin.
	///
	/// Unparseable URLs never match.
	pub fn matches_url(&self, url: &str) -> bool {
		Origin::parse(url).is_ok_and(|origin| origin == *self)
	}
}

impl std::fmt::Display for Origin {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

/// One navigation request delegated to the child frame.
///
/// Immutable for the duration of the call it is passed to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateParams {
	/// The URL to load in the child frame.
	pub url: Url,
	/// Only messages from this origin may settle the navigation.
	pub response_origin: Origin,
	/// Keep the frame attached after a successful response instead of
	/// tearing it down.
	#[serde(default)]
	pub keep_open: bool,
}

impl NavigateParams {
	/// Creates params for a navigation expecting a response from `response_origin`.
	pub fn new(url: Url, response_origin: Origin) -> Self {
		Self {
			url,
			response_origin,
			keep_open: false,
		}
	}

	/// Sets whether the frame stays attached after a successful response.
	pub fn keep_open(mut self, keep_open: bool) -> Self {
		self.keep_open = keep_open;
		self
	}
}

/// The completion payload of a delegated navigation.
///
/// Carries the final callback URL the child frame landed on. This is also
/// the exact `{ url }` shape posted back to the parent window by
/// `notify_parent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateResponse {
	/// The callback URL, including query/fragment protocol parameters.
	pub url: String,
}

/// Inbound message envelope from a child browsing context.
///
/// The origin is reported by the host message seam; the data payload is
/// opaque until a consumer tries to interpret it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildMessage {
	origin: Origin,
	data: Value,
}

impl ChildMessage {
	/// Creates a message envelope as delivered by the host.
	pub fn new(origin: Origin, data: Value) -> Self {
		Self { origin, data }
	}

	/// Returns the origin the message was posted from.
	pub fn origin(&self) -> &Origin {
		&self.origin
	}

	/// Returns the raw message payload.
	pub fn data(&self) -> &Value {
		&self.data
	}

	/// Interprets the payload as a [`NavigateResponse`].
	///
	/// Returns `None` for anything else. Frames carry all kinds of
	/// unrelated chatter (devtools, analytics, widget handshakes), so a
	/// payload that does not parse is not an error.
	pub fn navigate_response(&self) -> Option<NavigateResponse> {
		serde_json::from_value(self.data.clone()).ok()
	}
}

/// Sandbox policy applied to a created child frame.
///
/// Defaults to `allow-scripts allow-forms allow-same-origin`: enough for an
/// issuer's login/consent page to run, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SandboxDirectives {
	/// Permit script execution (`allow-scripts`).
	pub scripts: bool,
	/// Permit form submission (`allow-forms`).
	pub forms: bool,
	/// Keep the frame's own origin instead of forcing an opaque one
	/// (`allow-same-origin`).
	pub same_origin: bool,
}

impl Default for SandboxDirectives {
	fn default() -> Self {
		Self {
			scripts: true,
			forms: true,
			same_origin: true,
		}
	}
}

impl SandboxDirectives {
	/// Renders the DOM `sandbox` attribute value.
	pub fn attribute(&self) -> String {
		let mut tokens = Vec::new();
		if self.scripts {
			tokens.push("allow-scripts");
		}
		if self.forms {
			tokens.push("allow-forms");
		}
		if self.same_origin {
			tokens.push("allow-same-origin");
		}
		tokens.join(" ")
	}
}
