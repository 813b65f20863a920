//! The `samples` resource: entity, validation schemas and the request pipeline.

pub mod controller;
pub mod entity;
pub mod model;
pub mod route;
pub mod schema;
pub mod service;
