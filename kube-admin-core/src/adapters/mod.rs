//! `RemoteClient` implementations backed by real cluster clients

mod kube_client;

pub use kube_client::{KubeClient, LOG_TAIL_LINES};
