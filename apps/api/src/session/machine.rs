//! Per-session workflow state.
//!
//! idle → file_selected → analyzing → results_ready → reviewed
//!
//! Selecting a file is legal from any phase and discards earlier results.
//! Export is only reachable from `Reviewed`, so "downloadable but not reviewed"
//! has no representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::analysis::domain::{Domain, Template};
use crate::analysis::engine::{AnalysisInput, AnalysisResult};
use crate::upload::validation::{validate_submission, UploadError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session {0} not found")]
    NotFound(Uuid),

    #[error("Please review suggestions before downloading")]
    NotReviewed,

    #[error("There are no analysis results to review yet")]
    NoResults,

    #[error("Analysis is already in progress")]
    AlreadyAnalyzing,

    #[error("The resume changed while analysis was running; result discarded")]
    StaleAnalysis,

    #[error(transparent)]
    Input(#[from] UploadError),
}

/// An accepted resume upload with its extracted text.
#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub file_name: String,
    pub size: usize,
    pub text: String,
}

/// Parameters of one analysis run, kept alongside its result.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub job_description: String,
    pub domain: Domain,
    pub template: Template,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    FileSelected,
    Analyzing,
    ResultsReady,
    Reviewed,
}

#[derive(Debug, Clone, Default)]
enum SessionState {
    #[default]
    Idle,
    FileSelected {
        resume: ResumeFile,
    },
    Analyzing {
        resume: ResumeFile,
        request: AnalysisRequest,
        run: u64,
    },
    ResultsReady {
        resume: ResumeFile,
        request: AnalysisRequest,
        result: AnalysisResult,
    },
    Reviewed {
        resume: ResumeFile,
        request: AnalysisRequest,
        result: AnalysisResult,
    },
}

/// Handed out by `begin_analysis`; the run id must come back with the result.
#[derive(Debug, Clone)]
pub struct AnalysisTicket {
    pub run: u64,
    pub input: AnalysisInput,
}

/// What the export placeholder needs once suggestions are reviewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportTarget {
    pub domain: Domain,
    pub template: Template,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub phase: Phase,
    pub file_name: Option<String>,
    pub file_size: Option<usize>,
    pub job_description: Option<String>,
    pub domain: Option<Domain>,
    pub template: Option<Template>,
    pub analysis: Option<AnalysisResult>,
    pub reviewed: bool,
    pub downloadable: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    state: SessionState,
    runs: u64,
}

impl Session {
    pub fn new(id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id,
            created_at: now,
            updated_at: now,
            state: SessionState::Idle,
            runs: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            SessionState::Idle => Phase::Idle,
            SessionState::FileSelected { .. } => Phase::FileSelected,
            SessionState::Analyzing { .. } => Phase::Analyzing,
            SessionState::ResultsReady { .. } => Phase::ResultsReady,
            SessionState::Reviewed { .. } => Phase::Reviewed,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Replaces the resume. Any analysis, running or finished, is dropped.
    pub fn select_file(&mut self, resume: ResumeFile) {
        self.state = SessionState::FileSelected { resume };
        self.touch();
    }

    /// Moves to `Analyzing` and returns the input to score.
    pub fn begin_analysis(
        &mut self,
        job_description: String,
        domain: Domain,
        template: Template,
    ) -> Result<AnalysisTicket, SessionError> {
        if matches!(self.state, SessionState::Analyzing { .. }) {
            return Err(SessionError::AlreadyAnalyzing);
        }
        let has_resume = !matches!(self.state, SessionState::Idle);
        validate_submission(has_resume, &job_description)?;

        let resume = match std::mem::take(&mut self.state) {
            SessionState::FileSelected { resume }
            | SessionState::ResultsReady { resume, .. }
            | SessionState::Reviewed { resume, .. } => resume,
            other => {
                self.state = other;
                return Err(SessionError::Input(UploadError::MissingFields));
            }
        };

        self.runs += 1;
        let ticket = AnalysisTicket {
            run: self.runs,
            input: AnalysisInput {
                resume_text: resume.text.clone(),
                job_description: job_description.clone(),
                domain,
            },
        };
        self.state = SessionState::Analyzing {
            resume,
            request: AnalysisRequest {
                job_description,
                domain,
                template,
            },
            run: self.runs,
        };
        self.touch();
        Ok(ticket)
    }

    /// Stores the result of run `run`. Fails if the session moved on in the meantime.
    pub fn complete_analysis(&mut self, run: u64, result: AnalysisResult) -> Result<(), SessionError> {
        match std::mem::take(&mut self.state) {
            SessionState::Analyzing {
                resume,
                request,
                run: current,
            } if current == run => {
                self.state = SessionState::ResultsReady {
                    resume,
                    request,
                    result,
                };
                self.touch();
                Ok(())
            }
            other => {
                self.state = other;
                Err(SessionError::StaleAnalysis)
            }
        }
    }

    /// Returns run `run` to `FileSelected` without a result. No-op if the session moved on.
    pub fn abort_analysis(&mut self, run: u64) {
        match std::mem::take(&mut self.state) {
            SessionState::Analyzing {
                resume,
                run: current,
                ..
            } if current == run => {
                self.state = SessionState::FileSelected { resume };
                self.touch();
            }
            other => self.state = other,
        }
    }

    pub fn mark_reviewed(&mut self) -> Result<(), SessionError> {
        match std::mem::take(&mut self.state) {
            SessionState::ResultsReady {
                resume,
                request,
                result,
            } => {
                self.state = SessionState::Reviewed {
                    resume,
                    request,
                    result,
                };
                self.touch();
                Ok(())
            }
            reviewed @ SessionState::Reviewed { .. } => {
                self.state = reviewed;
                Ok(())
            }
            other => {
                self.state = other;
                Err(SessionError::NoResults)
            }
        }
    }

    pub fn export_target(&self) -> Result<ExportTarget, SessionError> {
        match &self.state {
            SessionState::Reviewed { request, .. } => Ok(ExportTarget {
                domain: request.domain,
                template: request.template,
            }),
            _ => Err(SessionError::NotReviewed),
        }
    }

    pub fn view(&self) -> SessionView {
        let (resume, request, analysis) = match &self.state {
            SessionState::Idle => (None, None, None),
            SessionState::FileSelected { resume } => (Some(resume), None, None),
            SessionState::Analyzing {
                resume, request, ..
            } => (Some(resume), Some(request), None),
            SessionState::ResultsReady {
                resume,
                request,
                result,
            }
            | SessionState::Reviewed {
                resume,
                request,
                result,
            } => (Some(resume), Some(request), Some(result.clone())),
        };
        let reviewed = self.phase() == Phase::Reviewed;

        SessionView {
            id: self.id,
            phase: self.phase(),
            file_name: resume.map(|r| r.file_name.clone()),
            file_size: resume.map(|r| r.size),
            job_description: request.map(|r| r.job_description.clone()),
            domain: request.map(|r| r.domain),
            template: request.map(|r| r.template),
            analysis,
            reviewed,
            downloadable: reviewed,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
