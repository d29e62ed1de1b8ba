//! # advisor-runtime
//!
//! Completion providers for Investment AI.
//!
//! ## Providers
//!
//! - **a0** (default): hosted chat endpoint at `https://api.a0.dev/ai/llm`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use advisor_runtime::A0Provider;
//!
//! let provider = A0Provider::from_env();
//! let advice = advisor_core::ask(&provider, "High dividend ETFs").await?;
//! ```

#[cfg(feature = "a0")]
pub mod a0;

#[cfg(feature = "a0")]
pub use a0::{A0Config, A0Provider};
