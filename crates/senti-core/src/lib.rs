//! Senti Core Library
//!
//! Everything a sentiment demo shell needs besides the shell itself: the
//! inference client, the label-to-color mapping and the trigger cycle.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod orchestrator;
pub mod presentation;

pub use client::{InferenceClient, SentimentBackend};
pub use config::{PageSettings, Settings};
pub use error::{SentiError, SentiResult};
pub use model::{AnalysisRequest, AnalysisResult};
pub use orchestrator::{Orchestrator, Phase, PresentationShell, Rendering};
pub use presentation::{present, SentimentDisplay, Tone};
