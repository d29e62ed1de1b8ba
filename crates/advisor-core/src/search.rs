//! Search Controller
//!
//! Page state behind the investment search box: the query being typed, the
//! in-flight flag, the last result and the recent-searches shortcuts.
//!
//! Submitting is split into [`SearchState::begin_submit`] and
//! [`SearchState::settle`] so the state can sit inside a UI signal while
//! [`ask`] runs on the event loop. Submissions are not sequenced: when two
//! requests overlap, each settles on its own and whichever settles last owns
//! the result. The first one to settle also clears the loading flag.

use crate::error::{AdvisorError, REQUEST_FAILED_MESSAGE, Result};
use crate::message::Message;
use crate::provider::LlmProvider;

/// Maximum number of entries kept in [`RecentSearches`]
pub const MAX_RECENT_SEARCHES: usize = 5;

/// Shortcuts shown before the user has searched anything
pub const DEFAULT_RECENT_SEARCHES: [&str; 3] = [
    "Best tech stocks for 2025",
    "High dividend ETFs",
    "Cryptocurrency investment strategy",
];

/// System instruction sent ahead of every query
pub const ADVISOR_PROMPT: &str = "You are an expert investment advisor AI. Provide concise, \
actionable investment advice based on the query. Include relevant market insights, risks, and \
potential opportunities. Format your response with clear sections and bullet points where \
appropriate.";

/// Most-recent-first list of distinct past queries, capped at
/// [`MAX_RECENT_SEARCHES`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecentSearches(Vec<String>);

impl RecentSearches {
    /// Empty list
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Build from entries given most-recent-first. Duplicates and anything
    /// past the cap are dropped.
    pub fn with_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Vec::with_capacity(MAX_RECENT_SEARCHES);
        for entry in entries {
            let entry = entry.into();
            if list.len() == MAX_RECENT_SEARCHES {
                break;
            }
            if !list.contains(&entry) {
                list.push(entry);
            }
        }
        Self(list)
    }

    /// Prepend `query` unless it is already present. Existing entries keep
    /// their position. Returns whether the list changed.
    pub fn record(&mut self, query: &str) -> bool {
        if self.contains(query) {
            return false;
        }
        self.0.insert(0, query.to_string());
        self.0.truncate(MAX_RECENT_SEARCHES);
        true
    }

    pub fn contains(&self, query: &str) -> bool {
        self.0.iter().any(|q| q == query)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for RecentSearches {
    fn default() -> Self {
        Self::with_entries(DEFAULT_RECENT_SEARCHES)
    }
}

impl<'a> IntoIterator for &'a RecentSearches {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A submission that has started and must be handed back to
/// [`SearchState::settle`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "a pending query must be settled to clear the loading flag"]
pub struct PendingQuery {
    text: String,
}

impl PendingQuery {
    /// Text as it was typed when submitted
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// State of the search page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    loading: bool,
    result: Option<String>,
    recent: RecentSearches,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(RecentSearches::default())
    }
}

impl SearchState {
    pub const fn new(recent: RecentSearches) -> Self {
        Self {
            query: String::new(),
            loading: false,
            result: None,
            recent,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Last completion or the failure message; `None` until a query settles
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub const fn recent_searches(&self) -> &RecentSearches {
        &self.recent
    }

    /// Replace the text in the search box
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Copy a recent search into the search box. Does not submit it.
    pub fn select_recent_search(&mut self, text: &str) {
        self.query = text.to_string();
    }

    /// Start a submission of the current query.
    ///
    /// Blank queries are ignored and leave the state untouched. The query is
    /// sent as typed, surrounding whitespace included.
    pub fn begin_submit(&mut self) -> Option<PendingQuery> {
        if self.query.trim().is_empty() {
            return None;
        }
        self.loading = true;
        Some(PendingQuery {
            text: self.query.clone(),
        })
    }

    /// Finish a submission. Always clears the loading flag.
    pub fn settle(&mut self, pending: PendingQuery, outcome: Result<String>) {
        match outcome {
            Ok(completion) => {
                self.result = Some(completion);
                self.recent.record(&pending.text);
            }
            Err(e) => {
                tracing::warn!("Search for {:?} failed: {}", pending.text, e);
                self.result = Some(REQUEST_FAILED_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }
}

/// Messages sent for a single query: the advisor prompt, then the query.
pub fn advisor_messages(query: &str) -> Vec<Message> {
    vec![Message::system(ADVISOR_PROMPT), Message::user(query)]
}

/// Ask the provider for advice on `query` and return the raw completion.
pub async fn ask<P>(provider: &P, query: &str) -> Result<String>
where
    P: LlmProvider + ?Sized,
{
    if query.trim().is_empty() {
        return Err(AdvisorError::EmptyQuery);
    }
    tracing::debug!(provider = provider.name(), "Asking for investment advice");
    let completion = provider.complete(&advisor_messages(query)).await?;
    Ok(completion.completion)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::message::Role;
    use crate::provider::Completion;

    struct MockProvider {
        reply: std::result::Result<String, String>,
        calls: Mutex<Vec<Vec<Message>>>,
    }

    impl MockProvider {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing(reason: &str) -> Self {
            Self {
                reply: Err(reason.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl LlmProvider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        async fn complete(&self, messages: &[Message]) -> Result<Completion> {
            self.calls.lock().unwrap().push(messages.to_vec());
            self.reply
                .clone()
                .map(|completion| Completion { completion })
                .map_err(AdvisorError::Request)
        }
    }

    async fn submit(state: &mut SearchState, provider: &MockProvider) {
        if let Some(pending) = state.begin_submit() {
            let outcome = ask(provider, pending.text()).await;
            state.settle(pending, outcome);
        }
    }

    fn recent(state: &SearchState) -> Vec<&str> {
        state.recent_searches().iter().map(String::as_str).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = SearchState::default();
        assert_eq!(state.query(), "");
        assert!(!state.is_loading());
        assert!(state.result().is_none());
        assert_eq!(recent(&state), DEFAULT_RECENT_SEARCHES);
    }

    #[tokio::test]
    async fn test_blank_query_is_ignored() {
        let provider = MockProvider::replying("unused");
        let mut state = SearchState::default();
        state.set_query("   \t ");
        let before = state.clone();

        submit(&mut state, &provider).await;

        assert_eq!(provider.call_count(), 0);
        assert_eq!(state, before);
    }

    #[tokio::test]
    async fn test_success_stores_completion_and_prepends_query() {
        let provider = MockProvider::replying("X");
        let mut state = SearchState::default();
        state.set_query("AI stocks");

        submit(&mut state, &provider).await;

        assert_eq!(state.result(), Some("X"));
        assert!(!state.is_loading());
        assert_eq!(
            recent(&state),
            [
                "AI stocks",
                "Best tech stocks for 2025",
                "High dividend ETFs",
                "Cryptocurrency investment strategy",
            ]
        );
    }

    #[tokio::test]
    async fn test_sends_prompt_then_query_verbatim() {
        let provider = MockProvider::replying("ok");
        let mut state = SearchState::default();
        state.set_query("  gold vs bonds ");

        submit(&mut state, &provider).await;

        let calls = provider.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0][0].role, Role::System);
        assert_eq!(calls[0][0].content, ADVISOR_PROMPT);
        assert_eq!(calls[0][1], Message::user("  gold vs bonds "));
    }

    #[tokio::test]
    async fn test_existing_query_is_not_duplicated_or_moved() {
        let provider = MockProvider::replying("dividends");
        let mut state = SearchState::default();
        state.select_recent_search("High dividend ETFs");
        assert_eq!(state.query(), "High dividend ETFs");

        submit(&mut state, &provider).await;

        assert_eq!(recent(&state), DEFAULT_RECENT_SEARCHES);
        assert_eq!(state.result(), Some("dividends"));
    }

    #[tokio::test]
    async fn test_list_is_capped_at_five() {
        let provider = MockProvider::replying("ok");
        let mut state = SearchState::default();
        for q in ["a", "b", "c"] {
            state.set_query(q);
            submit(&mut state, &provider).await;
        }

        assert_eq!(
            recent(&state),
            ["c", "b", "a", "Best tech stocks for 2025", "High dividend ETFs"]
        );
    }

    #[tokio::test]
    async fn test_failure_stores_fixed_message() {
        let provider = MockProvider::failing("dns lookup failed");
        let mut state = SearchState::default();
        state.set_query("AI stocks");

        submit(&mut state, &provider).await;

        assert_eq!(state.result(), Some(REQUEST_FAILED_MESSAGE));
        assert!(!state.is_loading());
        assert_eq!(recent(&state), DEFAULT_RECENT_SEARCHES);
    }

    #[test]
    fn test_loading_spans_begin_to_settle() {
        let mut state = SearchState::default();
        state.set_query("REITs");

        let pending = state.begin_submit().unwrap();
        assert!(state.is_loading());
        assert_eq!(pending.text(), "REITs");

        state.settle(pending, Err(AdvisorError::Parse("not json".into())));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_overlapping_submissions_last_settle_wins() {
        let mut state = SearchState::default();
        state.set_query("first");
        let first = state.begin_submit().unwrap();
        state.set_query("second");
        let second = state.begin_submit().unwrap();

        state.settle(second, Ok("answer two".into()));
        assert!(!state.is_loading());
        state.settle(first, Ok("answer one".into()));

        assert_eq!(state.result(), Some("answer one"));
        assert_eq!(&recent(&state)[..2], ["first", "second"]);
    }

    #[test]
    fn test_query_is_recorded_as_submitted() {
        let mut state = SearchState::default();
        state.set_query("ETFs");
        let pending = state.begin_submit().unwrap();
        state.set_query("something else entirely");

        state.settle(pending, Ok("done".into()));
        assert_eq!(recent(&state)[0], "ETFs");
    }

    #[test]
    fn test_with_entries_dedups_and_caps() {
        let list = RecentSearches::with_entries(["a", "b", "a", "c", "d", "e", "f", "g"]);
        assert_eq!(list.as_slice(), ["a", "b", "c", "d", "e"]);
        assert!(RecentSearches::new().is_empty());
    }

    #[tokio::test]
    async fn test_ask_rejects_blank_query() {
        let provider = MockProvider::replying("unused");
        let err = ask(&provider, "  ").await.unwrap_err();
        assert!(matches!(err, AdvisorError::EmptyQuery));
        assert_eq!(provider.call_count(), 0);
    }
}
