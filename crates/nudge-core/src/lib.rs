//! # nudge-core
//!
//! Core types, prompt scheduling, and the prompt queue service for nudge.
//!
//! This crate provides everything the prompt queue needs short of storage:
//! - Entity structs for recurring questions, phases, answers and prompts
//! - Time helpers for shifting between UTC and a phase's local frame
//! - Day enumeration and the two prompt filters
//! - The pure query engine that derives due prompts
//! - Repository traits, in-memory repositories, and the `PromptQueue` service
//! - Cross-cutting error types

pub mod days;
pub mod entities;
pub mod errors;
pub mod filters;
pub mod query;
pub mod queue;
pub mod repository;
pub mod time;
pub mod validation;
