// In-memory store for finished analysis reports, keyed by startup name.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::agents::state::AnalysisReport;

/// Process-lifetime cache backing `GET /preview/{startup_name}`. Reports are
/// small and analyses are explicit user actions, so there is no eviction; a
/// restart simply starts empty.
#[derive(Debug, Clone, Default)]
pub struct ReportCache {
    inner: Arc<RwLock<HashMap<String, Arc<AnalysisReport>>>>,
}

impl ReportCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lookups are case-insensitive and ignore surrounding whitespace, so
    /// "/preview/Quibi" finds a report created for " quibi ".
    fn cache_key(startup_name: &str) -> String {
        startup_name.trim().to_lowercase()
    }

    /// Stores a finished report, replacing any previous run for the same name.
    pub async fn insert(&self, startup_name: &str, report: AnalysisReport) -> Arc<AnalysisReport> {
        let report: Arc<AnalysisReport> = Arc::new(report);
        self.inner
            .write()
            .await
            .insert(Self::cache_key(startup_name), report.clone());
        report
    }

    pub async fn get(&self, startup_name: &str) -> Option<Arc<AnalysisReport>> {
        self.inner
            .read()
            .await
            .get(&Self::cache_key(startup_name))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::state::AnalysisReport;
    use serde_json::json;

    fn sample_report(name: &str) -> AnalysisReport {
        AnalysisReport {
            startup_name: name.to_string(),
            research: json!({}),
            autopsy: json!({}),
            revival: json!({}),
            copywriter_outputs: json!({}),
            marketing_html: "<html></html>".to_string(),
            progress: vec![],
            data_confidence: "medium".to_string(),
        }
    }

    #[tokio::test]
    async fn lookup_ignores_case_and_whitespace() {
        let cache = ReportCache::new();
        cache.insert(" Quibi ", sample_report("Quibi")).await;

        assert!(cache.get("quibi").await.is_some());
        assert!(cache.get("QUIBI").await.is_some());
        assert!(cache.get("other").await.is_none());
    }

    #[tokio::test]
    async fn insert_overwrites_previous_run() {
        let cache = ReportCache::new();
        cache.insert("acme", sample_report("first")).await;
        cache.insert("Acme", sample_report("second")).await;

        let report = cache.get("acme").await.unwrap();
        assert_eq!(report.startup_name, "second");
    }
}
