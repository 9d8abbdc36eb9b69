//! In-memory stand-in for the application.
//!
//! Accepts any existing project file, answers compute requests with a
//! configurable raw result and records every call, so a complete session
//! can be exercised on machines without HEC-RAS.

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use tracing::info;

use raskit_core::{
    application::{
        ControllerError,
        ports::{RasConnector, RasController},
    },
    domain::RawValue,
};

/// One call received by a rehearsal controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RehearsalCall {
    Connect(String),
    Open(PathBuf),
    Compute,
    Save,
    ShowWindow,
    Quit,
}

type CallLog = Arc<Mutex<Vec<RehearsalCall>>>;

/// Connector handing out [`RehearsalController`]s.
#[derive(Debug, Clone)]
pub struct RehearsalConnector {
    result: RawValue,
    calls: CallLog,
}

impl RehearsalConnector {
    /// A connector whose computations all succeed.
    pub fn new() -> Self {
        Self::with_result(RawValue::Tuple(vec![
            RawValue::Bool(true),
            RawValue::Int(0),
            RawValue::Tuple(vec![RawValue::Text("Computations completed".into())]),
            RawValue::Bool(false),
        ]))
    }

    /// A connector whose computations return `result`.
    pub fn with_result(result: RawValue) -> Self {
        Self {
            result,
            calls: Arc::default(),
        }
    }

    /// Every call received so far, by this connector and its controllers.
    pub fn calls(&self) -> Vec<RehearsalCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl Default for RehearsalConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl RasConnector for RehearsalConnector {
    fn connect(&self, prog_id: &str) -> Result<Box<dyn RasController>, ControllerError> {
        record(&self.calls, RehearsalCall::Connect(prog_id.to_string()));
        info!(prog_id, "rehearsal session started");
        Ok(Box::new(RehearsalController {
            result: self.result.clone(),
            calls: Arc::clone(&self.calls),
            project: None,
        }))
    }
}

/// Controller of a rehearsal session.
#[derive(Debug)]
pub struct RehearsalController {
    result: RawValue,
    calls: CallLog,
    project: Option<PathBuf>,
}

impl RasController for RehearsalController {
    fn open_project(&mut self, path: &Path) -> Result<(), ControllerError> {
        record(&self.calls, RehearsalCall::Open(path.to_path_buf()));
        if !path.is_file() {
            return Err(ControllerError::ProjectMissing {
                path: path.to_path_buf(),
            });
        }
        self.project = Some(path.to_path_buf());
        Ok(())
    }

    fn compute_current_plan(&mut self) -> Result<RawValue, ControllerError> {
        record(&self.calls, RehearsalCall::Compute);
        if self.project.is_none() {
            return Err(ControllerError::rejected(
                "Compute_CurrentPlan",
                "no project loaded",
            ));
        }
        Ok(self.result.clone())
    }

    fn save_project(&mut self) -> Result<(), ControllerError> {
        record(&self.calls, RehearsalCall::Save);
        Ok(())
    }

    fn show_window(&mut self) -> Result<(), ControllerError> {
        record(&self.calls, RehearsalCall::ShowWindow);
        Ok(())
    }

    fn quit(&mut self) -> Result<(), ControllerError> {
        record(&self.calls, RehearsalCall::Quit);
        self.project = None;
        Ok(())
    }
}

fn record(calls: &CallLog, call: RehearsalCall) {
    if let Ok(mut calls) = calls.lock() {
        calls.push(call);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_project_is_reported() {
        let connector = RehearsalConnector::new();
        let mut controller = connector.connect("X").unwrap();
        assert!(matches!(
            controller.open_project(Path::new("/no/such/file.prj")),
            Err(ControllerError::ProjectMissing { .. })
        ));
    }

    #[test]
    fn records_calls_in_order() {
        let file = NamedTempFile::new().unwrap();
        let connector = RehearsalConnector::with_result(RawValue::Bool(true));
        let mut controller = connector.connect("X").unwrap();

        controller.open_project(file.path()).unwrap();
        assert_eq!(controller.compute_current_plan().unwrap(), RawValue::Bool(true));
        controller.quit().unwrap();

        assert_eq!(
            connector.calls(),
            vec![
                RehearsalCall::Connect("X".into()),
                RehearsalCall::Open(file.path().to_path_buf()),
                RehearsalCall::Compute,
                RehearsalCall::Quit,
            ]
        );
    }

    #[test]
    fn compute_without_project_is_rejected() {
        let connector = RehearsalConnector::new();
        let mut controller = connector.connect("X").unwrap();
        assert!(controller.compute_current_plan().is_err());
    }
}
