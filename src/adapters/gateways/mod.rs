//! Gateways - concrete implementations of the application ports

pub mod apod_http_gateway;
pub mod file_store_gateway;
pub mod memory_store_gateway;

pub use apod_http_gateway::ApodHttpGateway;
pub use file_store_gateway::FileStoreGateway;
pub use memory_store_gateway::MemoryStoreGateway;
