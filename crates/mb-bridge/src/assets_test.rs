use super::*;
use crate::translator::PrefixNaming;
use mb_core::{Model, ProjectParts};
use std::path::PathBuf;

fn fixture_graph() -> ProjectGraph {
    let mut stg_customers = Model::named("stg_customers");
    stg_customers.sources.insert("raw.customers".to_string());
    stg_customers.cron = Some("@daily".to_string());

    let mut customers = Model::named("customers");
    customers.depends_on.insert(ModelName::new("stg_customers"));
    customers.cron = Some("@daily".to_string());

    let lonely = Model::named("reference_calendar");

    ProjectGraph::new(ProjectParts {
        root: PathBuf::from("/tmp/p"),
        name: "jaffle".to_string(),
        models: vec![stg_customers, customers, lonely],
        sources: vec![serde_yaml::from_str(
            "kind: sources\nname: raw\nschema: raw\ntables:\n  - name: customers\n",
        )
        .unwrap()],
    })
    .unwrap()
}

#[test]
fn test_one_node_per_model() {
    let graph = fixture_graph();
    let assets = build_asset_graph(&graph, &PrefixNaming::default());

    assert_eq!(assets.node_count(), 3);
    assert_eq!(assets.edge_count(), 1);

    // Standalone model still gets a node
    let lonely = assets.get_by_model("reference_calendar").unwrap();
    assert!(lonely.upstream.is_empty());
    assert!(lonely.external_upstream.is_empty());
}

#[test]
fn test_dependency_edges_preserved() {
    let graph = fixture_graph();
    let assets = build_asset_graph(&graph, &PrefixNaming::default());

    let customers = assets.get_by_model("customers").unwrap();
    assert!(customers.upstream.contains(&AssetKey::new(["stg_customers"])));

    let stg = assets.get_by_model("stg_customers").unwrap();
    assert!(stg.upstream.is_empty());
    assert!(stg
        .external_upstream
        .contains(&AssetKey::new(["external", "raw", "customers"])));
}

#[test]
fn test_transitive_chain_is_exact() {
    let mut a = Model::named("a");
    a.cron = None;
    let mut b = Model::named("b");
    b.depends_on.insert(ModelName::new("a"));
    let mut c = Model::named("c");
    c.depends_on.insert(ModelName::new("b"));

    let graph = ProjectGraph::new(ProjectParts {
        root: PathBuf::from("/tmp/p"),
        name: "chain".to_string(),
        models: vec![a, b, c],
        sources: Vec::new(),
    })
    .unwrap();

    let assets = build_asset_graph(&graph, &PrefixNaming::default());
    assert_eq!(assets.edge_count(), 2);

    // a -> b -> c, with no collapsing: c depends on b only
    let c_node = assets.get_by_model("c").unwrap();
    assert_eq!(c_node.upstream.len(), 1);
    assert!(c_node.upstream.contains(&AssetKey::new(["b"])));
    let b_node = assets.get_by_model("b").unwrap();
    assert!(b_node.upstream.contains(&AssetKey::new(["a"])));
}

#[test]
fn test_translation_is_deterministic() {
    let graph = fixture_graph();
    let naming = PrefixNaming::new(["jaffle"]);

    let first = build_asset_graph(&graph, &naming);
    let second = build_asset_graph(&graph, &naming);

    let keys = |g: &AssetGraph| -> Vec<AssetKey> { g.nodes().iter().map(|n| n.key.clone()).collect() };
    assert_eq!(keys(&first), keys(&second));
    for (a, b) in first.nodes().iter().zip(second.nodes()) {
        assert_eq!(a.upstream, b.upstream);
        assert_eq!(a.external_upstream, b.external_upstream);
    }
}

#[test]
fn test_naming_strategy_is_pluggable() {
    let graph = fixture_graph();
    let assets = build_asset_graph(&graph, &PrefixNaming::new(["analytics", "jaffle"]));

    let customers = assets.get_by_model("customers").unwrap();
    assert_eq!(customers.key, AssetKey::new(["analytics", "jaffle", "customers"]));
    assert!(customers
        .upstream
        .contains(&AssetKey::new(["analytics", "jaffle", "stg_customers"])));
}

#[test]
fn test_lookup_by_key() {
    let graph = fixture_graph();
    let assets = build_asset_graph(&graph, &PrefixNaming::default());

    let key = AssetKey::new(["customers"]);
    assert_eq!(assets.get(&key).unwrap().model, "customers");
    assert!(assets.get(&AssetKey::new(["nope"])).is_none());
}
