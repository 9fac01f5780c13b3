//! Cluster access abstraction trait definition

mod graph_renderer;
mod remote_client;

pub use graph_renderer::GraphRenderer;
pub use remote_client::RemoteClient;
