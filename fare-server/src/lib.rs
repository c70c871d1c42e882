//! Fare search server.
//!
//! A travel-booking prototype backend: load a catalog of offerings,
//! answer search queries through a pure match/filter/sort pipeline, and
//! handle account registration, login, and cross-page booking state.

pub mod accounts;
pub mod cache;
pub mod catalog;
pub mod domain;
pub mod kv;
pub mod present;
pub mod search;
pub mod web;
