// Adapters layer: concrete implementations of the domain ports for external systems.

pub mod datamuse;
pub mod osc;

pub use datamuse::DatamuseClient;
pub use osc::UdpOscSender;
