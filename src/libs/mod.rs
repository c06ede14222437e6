pub mod checkpoint;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod event;
pub mod export;
pub mod formatter;
pub mod ingest;
pub mod messages;
pub mod report;
pub mod session;
pub mod state;
pub mod summary;
pub mod view;
pub mod window;
pub mod zone;
