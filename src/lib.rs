//! Dottie - Menstrual pattern assessment backend
//!
//! Classifies a short questionnaire into a pattern category with a headline
//! and recommendations, and stores assessments, follow-up conversations and
//! user profiles behind repository ports.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
