//! # advisor-core
//!
//! Search controller and provider-agnostic LLM abstraction for Investment AI.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                    SearchState                        │
//! │  ┌───────────────┐  ┌──────────┐  ┌───────────────┐  │
//! │  │ begin_submit  │──│   ask    │──│  LlmProvider  │  │
//! │  │    settle     │  │          │  │  (Strategy)   │  │
//! │  └───────────────┘  └──────────┘  └───────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here depends on a runtime or an HTTP client, so the crate builds
//! for both the browser and the server.

pub mod error;
pub mod message;
pub mod provider;
pub mod search;

pub use error::{AdvisorError, REQUEST_FAILED_MESSAGE, Result};
pub use message::{Message, Role};
pub use provider::{Completion, CompletionRequest, LlmProvider};
pub use search::{PendingQuery, RecentSearches, SearchState, ask};
