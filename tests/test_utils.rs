use async_trait::async_trait;
use gig_spark::gig::GenerationError;
use gig_spark::gig::model::ContentModel;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// One recorded model invocation with its execution window
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub name: &'static str,
    pub started: Instant,
    pub finished: Instant,
}

impl RecordedCall {
    /// Whether two call windows overlap in time
    pub fn overlaps(&self, other: &RecordedCall) -> bool {
        self.started < other.finished && other.started < self.finished
    }
}

/// Scripted `ContentModel` that records every invocation.
///
/// `keywords: None` makes extraction fail at the transport level;
/// `fail_title` / `fail_description` make the corresponding generator
/// fail. `delay` is applied to every call so tests can observe
/// concurrency through the recorded windows.
pub struct MockContentModel {
    keywords: Option<Vec<String>>,
    title: String,
    description: String,
    fail_title: bool,
    fail_description: bool,
    delay: Duration,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockContentModel {
    /// A model where every step succeeds with plausible content
    pub fn succeeding() -> Self {
        Self {
            keywords: Some(vec![
                "logo".to_string(),
                "minimalist".to_string(),
                "branding".to_string(),
            ]),
            title: "I will design a modern minimalist logo for your business".to_string(),
            description: "## Why Choose Me?\n\nYears of brand design experience.".to_string(),
            fail_title: false,
            fail_description: false,
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_keywords(mut self, keywords: Vec<&str>) -> Self {
        self.keywords = Some(keywords.into_iter().map(String::from).collect());
        self
    }

    /// Make keyword extraction fail with a transport error
    pub fn with_failing_extraction(mut self) -> Self {
        self.keywords = None;
        self
    }

    pub fn with_failing_title(mut self) -> Self {
        self.fail_title = true;
        self
    }

    pub fn with_failing_description(mut self) -> Self {
        self.fail_description = true;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Handle to the recorded calls, usable after the model is consumed
    pub fn calls(&self) -> Arc<Mutex<Vec<RecordedCall>>> {
        Arc::clone(&self.calls)
    }

    async fn record<T>(
        &self,
        name: &'static str,
        result: Result<T, GenerationError>,
    ) -> Result<T, GenerationError> {
        let started = Instant::now();
        tokio::time::sleep(self.delay).await;
        self.calls.lock().push(RecordedCall {
            name,
            started,
            finished: Instant::now(),
        });
        result
    }
}

#[async_trait]
impl ContentModel for MockContentModel {
    async fn extract_keywords(&self, _search_query: &str) -> Result<Vec<String>, GenerationError> {
        let result = match &self.keywords {
            Some(keywords) => Ok(keywords.clone()),
            None => Err(GenerationError::Transport(
                "connection reset by peer".to_string(),
            )),
        };
        self.record("extract_keywords", result).await
    }

    async fn generate_title(
        &self,
        _category: &str,
        _keywords: &[String],
        _user_plan: &str,
    ) -> Result<String, GenerationError> {
        let result = if self.fail_title {
            Err(GenerationError::SchemaValidation(
                "missing field `title`".to_string(),
            ))
        } else {
            Ok(self.title.clone())
        };
        self.record("generate_title", result).await
    }

    async fn generate_description(
        &self,
        _category: &str,
        _keywords: &[String],
        _user_plan: &str,
    ) -> Result<String, GenerationError> {
        let result = if self.fail_description {
            Err(GenerationError::Transport("request timed out".to_string()))
        } else {
            Ok(self.description.clone())
        };
        self.record("generate_description", result).await
    }
}
