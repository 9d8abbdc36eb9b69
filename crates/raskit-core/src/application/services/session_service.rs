//! Session Service - drives one live session with the external application.
//!
//! `RasSession` owns at most one controller handle and walks it through
//! the lifecycle:
//!
//! ```text
//! Disconnected ──connect──▶ Connected ──open_project──▶ ProjectOpen
//!       ▲                                                   │
//!       │                                              run_simulation
//!       │                                                   ▼
//!       └──────────────── disconnect ◀──────────────── Computed
//! ```
//!
//! `disconnect` runs on every path out of scope (including early returns
//! and panics) through `Drop`, so the application is never left running
//! behind a dropped handle.

use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use tracing::{error, info, instrument, warn};

use crate::{
    application::{
        ControllerError, SessionError,
        ports::{RasConnector, RasController},
    },
    domain::ComputeOutcome,
};

/// Lifecycle position of a [`RasSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SessionState {
    Disconnected,
    Connected,
    ProjectOpen,
    Computed,
}

/// A scoped session with the external application.
pub struct RasSession {
    connector: Box<dyn RasConnector>,
    prog_id: String,
    controller: Option<Box<dyn RasController>>,
    project: Option<PathBuf>,
    state: SessionState,
}

impl RasSession {
    /// Automation class of HEC-RAS 6.x.
    pub const DEFAULT_PROG_ID: &'static str = "RAS67.HECRASController";

    pub fn new(connector: Box<dyn RasConnector>, prog_id: impl Into<String>) -> Self {
        Self {
            connector,
            prog_id: prog_id.into(),
            controller: None,
            project: None,
            state: SessionState::Disconnected,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state >= SessionState::Connected
    }

    /// The currently open project, if any.
    pub fn project(&self) -> Option<&Path> {
        self.project.as_deref()
    }

    pub fn prog_id(&self) -> &str {
        &self.prog_id
    }

    /// Acquire the automation handle.
    ///
    /// Returns `false` (and logs why) when the application is not available.
    /// Calling it on a live session is a no-op returning `true`.
    #[instrument(skip_all, fields(prog_id = %self.prog_id))]
    pub fn connect(&mut self) -> bool {
        if self.controller.is_some() {
            return true;
        }

        match self.connector.connect(&self.prog_id) {
            Ok(controller) => {
                self.controller = Some(controller);
                self.state = SessionState::Connected;
                info!("Connected to HEC-RAS");
                true
            }
            Err(e) => {
                error!(error = %e, "Could not connect to HEC-RAS");
                false
            }
        }
    }

    /// Open a project file in the connected application.
    ///
    /// The manifest must exist on disk; the application is never handed a
    /// path it cannot load.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open_project(&mut self, path: impl AsRef<Path>) -> Result<(), SessionError> {
        let path = path.as_ref();
        let controller = self.controller.as_mut().ok_or(SessionError::NotConnected)?;
        if !path.is_file() {
            return Err(SessionError::ProjectNotFound {
                path: path.to_path_buf(),
            });
        }

        controller.open_project(path).map_err(|e| match e {
            ControllerError::ProjectMissing { path } => SessionError::ProjectNotFound { path },
            other => SessionError::OpenFailed {
                path: path.to_path_buf(),
                reason: other.to_string(),
            },
        })?;

        self.project = Some(path.to_path_buf());
        self.state = SessionState::ProjectOpen;
        info!("Project opened");
        Ok(())
    }

    /// Compute the current plan of the open project.
    ///
    /// `Ok` carries the interpreted outcome, including `Failure`; `Err` means
    /// the call itself could not be made or raised.
    #[instrument(skip_all)]
    pub fn run_simulation(&mut self) -> Result<ComputeOutcome, SessionError> {
        let controller = self.open_controller()?;

        info!("Running steady flow simulation");
        let raw = controller
            .compute_current_plan()
            .map_err(|e| SessionError::ComputeFailed {
                reason: e.to_string(),
            })?;

        let outcome = ComputeOutcome::from_raw(raw);
        match &outcome {
            ComputeOutcome::Success => info!("{}", outcome),
            ComputeOutcome::Failure { error_count, .. } => {
                error!(error_count = *error_count, "{}", outcome)
            }
            ComputeOutcome::Unknown { .. } => warn!("{}", outcome),
        }

        self.state = SessionState::Computed;
        Ok(outcome)
    }

    /// Save the open project.
    pub fn save_project(&mut self) -> Result<(), SessionError> {
        self.open_controller()?
            .save_project()
            .map_err(|e| SessionError::SaveFailed {
                reason: e.to_string(),
            })?;
        info!("Project saved");
        Ok(())
    }

    /// Bring the application window up and keep it there for `delay`.
    pub fn show_window(&mut self, delay: Duration) -> Result<(), SessionError> {
        let controller = self.controller.as_mut().ok_or(SessionError::NotConnected)?;
        controller
            .show_window()
            .map_err(|e| SessionError::WindowFailed {
                reason: e.to_string(),
            })?;

        info!(seconds = delay.as_secs_f64(), "Showing HEC-RAS window");
        thread::sleep(delay);
        Ok(())
    }

    /// Save and quit, then release the handle.
    ///
    /// Failures are logged and swallowed; afterwards the session is always
    /// `Disconnected`. Safe to call more than once.
    pub fn disconnect(&mut self) {
        let Some(mut controller) = self.controller.take() else {
            self.state = SessionState::Disconnected;
            return;
        };

        if let Err(e) = controller.save_project() {
            warn!(error = %e, "Save on disconnect failed");
        }
        if let Err(e) = controller.quit() {
            warn!(error = %e, "Quit on disconnect failed");
        }

        self.project = None;
        self.state = SessionState::Disconnected;
        info!("Disconnected from HEC-RAS");
    }

    fn open_controller(&mut self) -> Result<&mut Box<dyn RasController>, SessionError> {
        if self.state < SessionState::ProjectOpen {
            return Err(if self.controller.is_some() {
                SessionError::NoProjectOpen
            } else {
                SessionError::NotConnected
            });
        }
        self.controller.as_mut().ok_or(SessionError::NotConnected)
    }
}

impl Drop for RasSession {
    fn drop(&mut self) {
        self.disconnect();
    }
}
