use ai_nativeness::assessment::submissions::{
    AssessmentRepository, AssessmentService, RepositoryError, SubmissionId, SubmissionRecord,
};
use ai_nativeness::assessment::{
    AssessmentCatalog, ContentLibrary, InputPolicy, NarrativeCatalog, ScoringEngine,
};
use ai_nativeness::config::{AssessmentConfig, PersistenceMode};
use ai_nativeness::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local store; records are kept in insertion order.
#[derive(Default, Clone)]
pub(crate) struct InMemoryAssessmentRepository {
    records: Arc<Mutex<Vec<SubmissionRecord>>>,
}

impl AssessmentRepository for InMemoryAssessmentRepository {
    fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard
            .iter()
            .any(|existing| existing.submission_id == record.submission_id)
        {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .find(|record| &record.submission_id == id)
            .cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().rev().take(limit).cloned().collect())
    }

    fn by_email(&self, email: &str, limit: usize) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .rev()
            .filter(|record| record.email.as_deref() == Some(email))
            .take(limit)
            .cloned()
            .collect())
    }
}

/// Engine for the standard catalog, with narratives overridden from disk when configured.
pub(crate) fn build_engine(
    config: &AssessmentConfig,
    policy: Option<InputPolicy>,
) -> Result<ScoringEngine, AppError> {
    let narratives = match &config.narratives_path {
        Some(path) => {
            info!(path = %path.display(), "loading category narratives");
            NarrativeCatalog::from_path(path)?
        }
        None => NarrativeCatalog::standard(),
    };

    Ok(ScoringEngine::new(AssessmentCatalog::standard(), narratives)
        .with_policy(policy.unwrap_or(config.input_policy)))
}

pub(crate) fn build_content(config: &AssessmentConfig) -> Result<ContentLibrary, AppError> {
    match &config.content_path {
        Some(path) => {
            info!(path = %path.display(), "loading content library");
            Ok(ContentLibrary::from_path(path)?)
        }
        None => Ok(ContentLibrary::standard()),
    }
}

pub(crate) fn build_service(
    config: &AssessmentConfig,
) -> Result<AssessmentService<InMemoryAssessmentRepository>, AppError> {
    let engine = Arc::new(build_engine(config, None)?);
    let service = match config.persistence {
        PersistenceMode::Memory => {
            AssessmentService::new(engine, Arc::new(InMemoryAssessmentRepository::default()))
        }
        PersistenceMode::Disabled => AssessmentService::without_persistence(engine),
    };

    Ok(service.with_content(build_content(config)?))
}
