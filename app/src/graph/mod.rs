pub mod client;
pub mod controller;
pub mod cypher;

pub use controller::GraphController;
