#![allow(missing_docs, unused_results)]

use std::path::Path;

use assert_matches::assert_matches;
use portal_context::ContextError;
use portal_context::constants::REFERENCE_DOC_FILES;
use portal_context_cli::{Cli, OutputFormat, loader_from_settings, run};
use portal_settings::PortalSettings;

fn setup_docs() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in REFERENCE_DOC_FILES {
        std::fs::write(dir.path().join(name), format!("# {name}\n\nSome notes.\n")).unwrap();
    }
    dir
}

fn settings_for(docs: &Path) -> PortalSettings {
    PortalSettings {
        docs_dir: docs.display().to_string(),
        ..PortalSettings::default()
    }
}

#[test]
fn text_summary_sections_and_footer() {
    let docs = setup_docs();
    let output = run(&Cli::default(), &settings_for(docs.path())).unwrap();

    let core = output.find("## Core Components").unwrap();
    let mixins = output.find("## Mixin Responsibilities").unwrap();
    let errors = output.find("## Error Types").unwrap();
    let practices = output.find("## Best Practices").unwrap();
    assert!(core < mixins && mixins < errors && errors < practices);

    let tail: Vec<&str> = output.lines().rev().take(3).collect();
    assert!(tail.iter().all(|l| l.starts_with("- docs/")), "{tail:?}");

    assert!(output.lines().any(|l| l
        == "- BulkImportMixin: Handles file upload and validation, Manages import session state, \
            Provides import form and context, Coordinates with resource for actual import"));
}

#[test]
fn repeated_runs_match() {
    let docs = setup_docs();
    let settings = settings_for(docs.path());
    let first = run(&Cli::default(), &settings).unwrap();
    let second = run(&Cli::default(), &settings).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_doc_fails_with_no_output() {
    let docs = setup_docs();
    std::fs::remove_file(docs.path().join("QUICK_REFERENCE.md")).unwrap();

    let err = run(&Cli::default(), &settings_for(docs.path())).unwrap_err();
    let root = err.downcast_ref::<ContextError>().unwrap();
    assert!(root.path().ends_with("QUICK_REFERENCE.md"));
    assert!(format!("{err:#}").contains("QUICK_REFERENCE.md"));
}

#[test]
fn loader_fails_on_missing_dir() {
    let settings = settings_for(Path::new("/nonexistent/portal/docs"));
    assert_matches!(
        loader_from_settings(&settings).load(),
        Err(ContextError::ReadDoc { .. })
    );
}

#[test]
fn missing_docs_allowed_when_not_required() {
    let empty = tempfile::tempdir().unwrap();
    let settings = PortalSettings {
        require_docs: false,
        ..settings_for(empty.path())
    };
    let output = run(&Cli::default(), &settings).unwrap();
    assert!(output.starts_with("# Project Context Summary"));
}

#[test]
fn json_output_has_full_record() {
    let docs = setup_docs();
    let cli = Cli {
        format: OutputFormat::Json,
        ..Cli::default()
    };
    let output = run(&cli, &settings_for(docs.path())).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["core_components"].as_array().unwrap().len(), 5);
    assert_eq!(value["mixin_responsibilities"].as_object().unwrap().len(), 4);
    assert_eq!(value["error_types"].as_object().unwrap().len(), 3);
    assert_eq!(value["session_keys"][5], "closed_flg");
    assert_eq!(value["pii_fields"].as_array().unwrap().len(), 10);
    assert_eq!(value["error_types"]["processing"]["message"], "str");
}
