//! LatestAnalysisTracker - keeps only the newest analysis result.
//!
//! Each submission takes a generation number. A completion is committed
//! only if no newer submission started in the meantime, so a slow stale
//! reply can never replace a fresher one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::keyword::KeywordAnalysis;

use super::analyze_keyword::{AnalyzeKeywordHandler, AnalyzeKeywordQuery};
use super::error::KeywordServiceError;

/// Result of a tracked submission.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// This submission is the newest; its analysis is now current.
    Current(KeywordAnalysis),
    /// A newer submission started before this one finished.
    Superseded {
        /// Generation of this submission.
        generation: u64,
        /// Generation that was newest when this one finished.
        latest: u64,
    },
}

#[derive(Debug, Clone)]
struct Committed {
    generation: u64,
    analysis: KeywordAnalysis,
}

/// Wraps [`AnalyzeKeywordHandler`] with request-generation tokens.
pub struct LatestAnalysisTracker {
    handler: Arc<AnalyzeKeywordHandler>,
    generation: AtomicU64,
    current: RwLock<Option<Committed>>,
}

impl LatestAnalysisTracker {
    pub fn new(handler: Arc<AnalyzeKeywordHandler>) -> Self {
        Self {
            handler,
            generation: AtomicU64::new(0),
            current: RwLock::new(None),
        }
    }

    /// Runs an analysis and commits it if it is still the newest submission.
    ///
    /// Errors are returned only for the newest submission; a stale failure
    /// reports `Superseded` like a stale success.
    pub async fn submit(
        &self,
        query: AnalyzeKeywordQuery,
    ) -> Result<AnalysisOutcome, KeywordServiceError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.handler.handle(query).await;

        let mut current = self.current.write().await;
        let latest = self.generation.load(Ordering::SeqCst);
        if latest != generation {
            tracing::debug!(generation, latest, "Discarding superseded analysis");
            return Ok(AnalysisOutcome::Superseded { generation, latest });
        }

        let analysis = result?;
        *current = Some(Committed {
            generation,
            analysis: analysis.clone(),
        });
        Ok(AnalysisOutcome::Current(analysis))
    }

    /// Returns the most recently committed analysis, if any.
    pub async fn current(&self) -> Option<KeywordAnalysis> {
        self.current
            .read()
            .await
            .as_ref()
            .map(|committed| committed.analysis.clone())
    }

    /// Returns the generation of the committed analysis, if any.
    pub async fn current_generation(&self) -> Option<u64> {
        self.current
            .read()
            .await
            .as_ref()
            .map(|committed| committed.generation)
    }
}
