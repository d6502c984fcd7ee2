//! Business Analyst - Conversational requirements intake.
//!
//! A short scripted interview collects a project's goal, audience, features,
//! data sources, integrations, budget and timeline, then closes with a
//! summary and three delivery suggestions written by a language model.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
