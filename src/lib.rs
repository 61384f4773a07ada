pub mod cache;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod models;
pub mod playlist;
pub mod services;
pub mod sources;
pub mod web;
