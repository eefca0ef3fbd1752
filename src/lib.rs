//! goldwire: gold-market news sentiment via NewsAPI + Gemini.
//!
//! One linear pipeline: resolve a generation model from the Gemini
//! catalog (falling back to a known-good default), pull recent gold and
//! macro headlines from NewsAPI, render them into a JSON-only
//! instruction, send it to `generateContent`, then parse, validate, and
//! classify the response into a display-ready [`MarketReport`].
//!
//! Each stage is also usable on its own: [`ModelsBuilder`] lists the
//! catalog, [`NewsBuilder`] fetches articles, [`PromptBuilder`] renders
//! the instruction, [`GenerateBuilder`] performs one generation call,
//! and [`report::normalize`] turns raw model text into a
//! [`MarketAnalysis`]. [`Analyst`] wires them together.
//!
//! ```no_run
//! use goldwire::{AnalysisOutcome, Analyst, GwClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), goldwire::GwError> {
//! // Reads GEMINI_API_KEY and NEWS_API_KEY.
//! let client = GwClient::from_env()?;
//!
//! match Analyst::new(&client).analyze().await? {
//!     AnalysisOutcome::Report(report) => {
//!         println!(
//!             "{} ({}/100) via {}",
//!             report.analysis.overall_sentiment,
//!             report.analysis.overall_sentiment_score,
//!             report.model.id,
//!         );
//!         println!("{}", report.analysis.overall_summary);
//!     }
//!     AnalysisOutcome::NoFreshNews => println!("no fresh news in the window"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod analyst;
pub mod catalog;
pub mod core;
pub mod generate;
pub mod news;
pub mod prompt;
pub mod report;

pub use analyst::{AnalysisOutcome, Analyst, MarketReport};
pub use catalog::{FALLBACK_MODEL, ModelInfo, ModelSource, ModelsBuilder, ResolvedModel};
pub use generate::GenerateBuilder;
pub use news::{Article, NewsBuilder, SortOrder};
pub use prompt::{PromptBuilder, build_prompt};
pub use report::{MarketAnalysis, NewsItemAnalysis, Sentiment};

pub use crate::core::{GwClient, GwClientBuilder, GwError};
