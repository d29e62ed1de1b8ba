//! API Client

use advisor_core::Result;
use advisor_runtime::A0Provider;

/// Ask the hosted endpoint for advice on `query`
pub async fn search(query: &str) -> Result<String> {
    let provider = A0Provider::from_env();
    advisor_core::ask(&provider, query).await
}
