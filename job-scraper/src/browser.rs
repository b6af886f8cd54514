use async_trait::async_trait;

use crate::api::Result;
use crate::types::ControlState;

/// A single controllable browser session.
/// Sessions are never shared between concurrent fetches, every fetch opens its own.
#[async_trait]
pub trait Session: Send + Sized {
    async fn goto(&mut self, url: &str) -> Result<()>;

    /// Rendered DOM of the current page, serialized as html
    async fn source(&mut self) -> Result<String>;

    /// Url of the current page after redirects
    async fn current_url(&mut self) -> Result<String>;

    /// Look up the first element with `class_name` and click it if it is displayed.
    /// A missing, hidden or unclickable control is reported as `Exhausted`, never as an error.
    async fn press(&mut self, class_name: &str) -> ControlState;

    async fn close(self) -> Result<()>;
}

/// Opens isolated browser sessions
#[async_trait]
pub trait SessionFactory: Send + Sync {
    type Session: Session;

    async fn open(&self) -> Result<Self::Session>;
}
