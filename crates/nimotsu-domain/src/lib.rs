//! Domain layer - package model and sorting services

pub mod model;
pub mod service;
