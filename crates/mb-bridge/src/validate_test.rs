use super::*;
use mb_core::{Model, ProjectParts, SourceFile};
use std::path::PathBuf;

fn model_with_sources(name: &str, sources: &[&str]) -> Model {
    let mut model = Model::named(name);
    model.sources = sources.iter().map(|s| s.to_string()).collect();
    model
}

fn graph(models: Vec<Model>, sources_yaml: &[&str]) -> ProjectGraph {
    let sources: Vec<SourceFile> = sources_yaml
        .iter()
        .map(|y| serde_yaml::from_str(y).unwrap())
        .collect();
    ProjectGraph::new(ProjectParts {
        root: PathBuf::from("/tmp/p"),
        name: "p".to_string(),
        models,
        sources,
    })
    .unwrap()
}

const RAW: &str = "kind: sources\nname: raw\nschema: raw\ntables:\n  - name: customers\n  - name: orders\n";

#[test]
fn test_clean_project_has_no_errors() {
    let graph = graph(
        vec![model_with_sources("stg_customers", &["raw.customers"])],
        &[RAW],
    );
    assert!(validate_external_dependencies(&graph).is_empty());
}

#[test]
fn test_unresolved_reference_reported() {
    let graph = graph(
        vec![model_with_sources("stg", &["raw.unknown_table"])],
        &[RAW],
    );

    let errors = validate_external_dependencies(&graph);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].reference, "raw.unknown_table");
    assert_eq!(errors[0].reason, ValidationReason::Unresolved);
    assert_eq!(errors[0].model, "stg");
}

#[test]
fn test_all_violations_collected_no_short_circuit() {
    let graph = graph(
        vec![
            model_with_sources("a", &["raw.ghost_one", "raw.ghost_two"]),
            model_with_sources("b", &["raw.ghost_three"]),
            model_with_sources("c", &["raw.customers"]),
        ],
        &[RAW],
    );

    let errors = validate_external_dependencies(&graph);
    assert_eq!(errors.len(), 3);
    let refs: Vec<&str> = errors.iter().map(|e| e.reference.as_str()).collect();
    assert_eq!(refs, vec!["raw.ghost_one", "raw.ghost_two", "raw.ghost_three"]);
}

#[test]
fn test_ambiguous_bare_reference_reported() {
    let legacy = "kind: sources\nname: legacy\nschema: legacy\ntables:\n  - name: customers\n";
    let graph = graph(vec![model_with_sources("stg", &["customers"])], &[RAW, legacy]);

    let errors = validate_external_dependencies(&graph);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].reason, ValidationReason::Ambiguous);
}

#[test]
fn test_reference_to_internal_model_resolves() {
    let mut upstream = Model::named("shared_dims");
    upstream.cron = Some("@daily".to_string());
    let graph = graph(
        vec![upstream, model_with_sources("stg", &["shared_dims"])],
        &[],
    );

    assert!(validate_external_dependencies(&graph).is_empty());
}

#[test]
fn test_error_display() {
    let err = ValidationError {
        model: mb_core::ModelName::new("stg"),
        reference: "raw.ghost".to_string(),
        reason: ValidationReason::Unresolved,
    };
    let text = err.to_string();
    assert!(text.contains("raw.ghost"));
    assert!(text.contains("stg"));
}
