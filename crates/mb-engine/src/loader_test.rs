use super::*;
use std::fs;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn jaffle_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "project.yml", "name: jaffle\n");
    write(
        root,
        "models/staging/stg_customers.yml",
        "kind: model\nname: stg_customers\nsources: [raw.customers]\ncron: \"@daily\"\n",
    );
    write(
        root,
        "models/marts/customers.yml",
        "name: customers\ndepends_on: [stg_customers]\ncron: \"@daily\"\n",
    );
    write(
        root,
        "sources/raw.yml",
        "kind: sources\nname: raw\nschema: raw\ntables:\n  - name: customers\n",
    );
    temp
}

#[test]
fn test_load_project_dir() {
    let temp = jaffle_project();
    let graph = load_project_dir(temp.path()).unwrap();

    assert_eq!(graph.name(), "jaffle");
    assert_eq!(graph.model_count(), 2);
    assert_eq!(graph.dag().edge_count(), 1);
    assert!(!graph.registry().is_empty());

    // kind defaulted to "model" for customers.yml
    let customers = graph.get_model("customers").unwrap();
    assert!(customers.depends_on.contains("stg_customers"));
}

#[test]
fn test_missing_directory_is_project_not_found() {
    let err = load_project_dir(Path::new("/nonexistent/project")).unwrap_err();
    assert!(matches!(err, CoreError::ProjectNotFound { .. }));
}

#[test]
fn test_empty_directory_is_config_not_found() {
    let temp = TempDir::new().unwrap();
    let err = load_project_dir(temp.path()).unwrap_err();
    assert!(matches!(err, CoreError::ConfigNotFound { .. }));
}

#[test]
fn test_project_without_models_rejected() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "project.yml", "name: empty\n");
    let err = load_project_dir(temp.path()).unwrap_err();
    assert!(matches!(err, CoreError::ConfigInvalid { .. }));
}

#[test]
fn test_malformed_project_yaml_rejected() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "project.yml", "name: [unclosed\n");
    let err = load_project_dir(temp.path()).unwrap_err();
    assert!(matches!(err, CoreError::ConfigParseError { .. }));
}

#[test]
fn test_non_node_yaml_is_ignored() {
    let temp = jaffle_project();
    // A yaml file with a foreign kind must not break discovery
    write(temp.path(), "models/ci.yml", "kind: pipeline\nsteps: [lint]\n");

    let graph = load_project_dir(temp.path()).unwrap();
    assert_eq!(graph.model_count(), 2);
}

#[tokio::test]
async fn test_dry_run_engine() {
    let temp = jaffle_project();
    let engine = DryRunEngine::new();
    let graph = engine
        .load_project(&LoadRequest {
            project_dir: temp.path().to_path_buf(),
            gateway: "postgres".to_string(),
            environment: "prod".to_string(),
        })
        .unwrap();

    let model = graph.get_model("customers").unwrap();
    engine.execute_model(&graph, model).await.unwrap();
    assert_eq!(engine.engine_type(), "dry-run");
}
