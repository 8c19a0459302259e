pub mod abstract_trait;
pub mod di;
pub mod graphql;
pub mod handler;
pub mod kafka;
pub mod repository;
pub mod service;
pub mod state;
