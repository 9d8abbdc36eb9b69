//! Integration tests for raskit-adapters: core services on real adapters.

use std::fs;

use raskit_adapters::{
    InMemoryModelStore, LocalFilesystem, MemoryFilesystem, RehearsalCall, RehearsalConnector,
    UnavailableConnector,
};
use raskit_core::{
    application::ports::ModelStore,
    domain::RawValue,
    prelude::*,
};
use tempfile::TempDir;

#[test]
fn test_assemble_tutorial_on_disk() {
    let temp = TempDir::new().unwrap();
    let store = InMemoryModelStore::with_builtin().unwrap();
    let service = ProjectService::new(Box::new(LocalFilesystem::new()));

    let model = store.get("tutorial").unwrap();
    let dir = service.assemble(&model, temp.path()).unwrap();

    assert_eq!(dir, temp.path().join("tutorial"));
    for ext in ["prj", "g01", "f01", "p01"] {
        assert!(dir.join(format!("tutorial.{ext}")).is_file(), "missing .{ext}");
    }

    let geometry = fs::read_to_string(dir.join("tutorial.g01")).unwrap();
    assert_eq!(geometry.matches("#Sta/Elev= 10\n").count(), 2);
    assert_eq!(geometry.matches("Bank Sta=30,50\n").count(), 2);

    let plan = fs::read_to_string(dir.join("tutorial.p01")).unwrap();
    assert!(plan.contains("I.C. XS=Reach, 2000, 1000,100.00\n"));
}

#[test]
fn test_assemble_twice_overwrites() {
    let temp = TempDir::new().unwrap();
    let store = InMemoryModelStore::with_builtin().unwrap();
    let service = ProjectService::new(Box::new(LocalFilesystem::new()));
    let model = store.get("simple").unwrap();

    let dir = service.assemble(&model, temp.path()).unwrap();
    fs::write(dir.join("simple.f01"), "stale").unwrap();
    service.assemble(&model, temp.path()).unwrap();

    let flow = fs::read_to_string(dir.join("simple.f01")).unwrap();
    assert!(flow.starts_with("Flow Title=Q100 Flow\n"));
}

#[test]
fn test_renamed_preset_goes_to_its_own_directory() {
    let fs_mem = MemoryFilesystem::new();
    let store = InMemoryModelStore::with_builtin().unwrap();
    let service = ProjectService::new(Box::new(fs_mem.clone()));

    let model = store.get("demo").unwrap().with_name("demo_model");
    service.assemble(&model, "/projects").unwrap();

    let manifest = fs_mem
        .read_file("/projects/demo_model/demo_model.prj".as_ref())
        .unwrap();
    assert!(manifest.starts_with("Proj Title=demo_model\n"));
}

#[test]
fn test_rehearsal_session_on_generated_project() {
    let temp = TempDir::new().unwrap();
    let store = InMemoryModelStore::with_builtin().unwrap();
    let service = ProjectService::new(Box::new(LocalFilesystem::new()));
    let model = store.get("tutorial").unwrap();
    let dir = service.assemble(&model, temp.path()).unwrap();
    let project = dir.join(model.manifest().project_file());

    let connector = RehearsalConnector::new();
    {
        let mut session = RasSession::new(Box::new(connector.clone()), RasSession::DEFAULT_PROG_ID);
        assert!(session.connect());
        session.open_project(&project).unwrap();
        let outcome = session.run_simulation().unwrap();
        assert_eq!(outcome, ComputeOutcome::Success);
    }

    assert_eq!(
        connector.calls(),
        vec![
            RehearsalCall::Connect(RasSession::DEFAULT_PROG_ID.into()),
            RehearsalCall::Open(project),
            RehearsalCall::Compute,
            RehearsalCall::Save,
            RehearsalCall::Quit,
        ]
    );
}

#[test]
fn test_rehearsal_unknown_result_is_not_success() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("p.prj");
    fs::write(&project, "Proj Title=p\n").unwrap();

    let connector = RehearsalConnector::with_result(RawValue::Text("done".into()));
    let mut session = RasSession::new(Box::new(connector), "X");
    assert!(session.connect());
    session.open_project(&project).unwrap();

    let outcome = session.run_simulation().unwrap();
    assert!(!outcome.is_success());
    assert!(outcome.summary().0);
}

#[test]
fn test_unavailable_connector_fails_soft() {
    let mut session = RasSession::new(Box::new(UnavailableConnector::new()), "X");
    assert!(!session.connect());
    assert!(matches!(
        session.open_project("/anything.prj"),
        Err(SessionError::NotConnected)
    ));
}
