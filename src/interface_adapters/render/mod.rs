// Renderer adapters: where simulation events leave the core.

pub mod channel;
pub mod logging;

pub use channel::{ChannelRenderer, render_event_writer};
pub use logging::TracingRenderer;
