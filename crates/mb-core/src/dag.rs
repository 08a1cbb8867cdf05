//! Dependency DAG building, validation, and scheduling order

use crate::error::{CoreError, CoreResult};
use crate::model_name::ModelName;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// A directed acyclic graph of model dependencies.
///
/// Edges point from a dependency to its dependent, so topological order
/// yields dependencies first.
#[derive(Debug)]
pub struct ModelDag {
    graph: DiGraph<ModelName, ()>,
    node_map: HashMap<ModelName, NodeIndex>,
}

impl ModelDag {
    /// Create a new empty DAG
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
        }
    }

    /// Add a model node to the DAG
    pub fn add_model(&mut self, name: &str) -> CoreResult<NodeIndex> {
        if let Some(&idx) = self.node_map.get(name) {
            Ok(idx)
        } else {
            let model_name = ModelName::try_new(name).ok_or_else(|| CoreError::EmptyName {
                context: "model name in DAG".into(),
            })?;
            let idx = self.graph.add_node(model_name.clone());
            self.node_map.insert(model_name, idx);
            Ok(idx)
        }
    }

    /// Add a dependency edge (`model` depends on `dependency`)
    pub fn add_dependency(&mut self, model: &str, dependency: &str) -> CoreResult<()> {
        let model_idx = self.add_model(model)?;
        let dep_idx = self.add_model(dependency)?;
        self.graph.add_edge(dep_idx, model_idx, ());
        Ok(())
    }

    /// Build and validate the DAG from a map of model name -> dependencies.
    ///
    /// Dependencies that are not themselves models (external references)
    /// are ignored; the caller resolves those separately.
    pub fn build(dependencies: &BTreeMap<ModelName, BTreeSet<ModelName>>) -> CoreResult<Self> {
        let mut dag = Self::new();

        for model in dependencies.keys() {
            dag.add_model(model)?;
        }

        for (model, deps) in dependencies {
            for dep in deps {
                if dependencies.contains_key(dep) {
                    dag.add_dependency(model, dep)?;
                }
            }
        }

        dag.validate()?;

        Ok(dag)
    }

    /// Validate the DAG has no cycles
    pub fn validate(&self) -> CoreResult<()> {
        match toposort(&self.graph, None) {
            Ok(_) => Ok(()),
            Err(cycle) => Err(CoreError::CircularDependency {
                cycle: self.cycle_path(cycle.node_id()),
            }),
        }
    }

    /// Walk a cycle starting from a node for error reporting
    fn cycle_path(&self, start: NodeIndex) -> String {
        let mut path: Vec<String> = vec![self.graph[start].to_string()];
        let mut visited = HashSet::new();
        visited.insert(start);
        let mut current = start;

        while let Some(edge) = self.graph.edges(current).next() {
            let target = edge.target();
            path.push(self.graph[target].to_string());
            if target == start || visited.contains(&target) {
                break;
            }
            visited.insert(target);
            current = target;
        }

        path.join(" -> ")
    }

    /// Get models in topological order (dependencies first)
    pub fn topological_order(&self) -> CoreResult<Vec<ModelName>> {
        match toposort(&self.graph, None) {
            Ok(indices) => Ok(indices
                .into_iter()
                .map(|idx| self.graph[idx].clone())
                .collect()),
            Err(cycle) => Err(CoreError::CircularDependency {
                cycle: self.cycle_path(cycle.node_id()),
            }),
        }
    }

    /// Get direct dependencies of a model
    pub fn dependencies(&self, model: &str) -> Vec<ModelName> {
        self.neighbors(model, petgraph::Direction::Incoming)
    }

    /// Get direct dependents of a model
    pub fn dependents(&self, model: &str) -> Vec<ModelName> {
        self.neighbors(model, petgraph::Direction::Outgoing)
    }

    fn neighbors(&self, model: &str, direction: petgraph::Direction) -> Vec<ModelName> {
        if let Some(&idx) = self.node_map.get(model) {
            self.graph
                .edges_directed(idx, direction)
                .map(|e| match direction {
                    petgraph::Direction::Incoming => self.graph[e.source()].clone(),
                    petgraph::Direction::Outgoing => self.graph[e.target()].clone(),
                })
                .collect()
        } else {
            Vec::new()
        }
    }

    /// Get all descendants (transitive dependents) of a model
    pub fn descendants(&self, model: &str) -> BTreeSet<ModelName> {
        let mut result = BTreeSet::new();
        let Some(&start) = self.node_map.get(model) else {
            return result;
        };

        let mut stack = vec![start];
        let mut visited = HashSet::new();
        visited.insert(start);
        while let Some(idx) = stack.pop() {
            for edge in self.graph.edges_directed(idx, petgraph::Direction::Outgoing) {
                let target = edge.target();
                if visited.insert(target) {
                    result.insert(self.graph[target].clone());
                    stack.push(target);
                }
            }
        }

        result
    }

    /// Group a model selection into execution levels: models within a level
    /// have no dependency on each other and can run concurrently once all
    /// prior levels have completed.
    ///
    /// Dependencies outside the selection are treated as already satisfied.
    pub fn execution_levels(&self, selection: &[ModelName]) -> Vec<Vec<ModelName>> {
        let selected: HashSet<&ModelName> = selection.iter().collect();
        let mut done: HashSet<ModelName> = HashSet::new();
        let mut remaining: Vec<ModelName> = selection.to_vec();
        let mut levels = Vec::new();

        while !remaining.is_empty() {
            let current: Vec<ModelName> = remaining
                .iter()
                .filter(|name| {
                    self.dependencies(name)
                        .iter()
                        .all(|dep| done.contains(dep) || !selected.contains(dep))
                })
                .cloned()
                .collect();

            if current.is_empty() {
                // No progress means a cycle slipped past validation; surface
                // the rest as one level rather than spinning forever.
                levels.push(remaining);
                break;
            }

            for name in &current {
                done.insert(name.clone());
            }
            remaining.retain(|name| !done.contains(name));
            levels.push(current);
        }

        levels
    }

    /// Check if a model exists in the DAG
    pub fn contains(&self, model: &str) -> bool {
        self.node_map.contains_key(model)
    }

    /// Number of dependency edges in the DAG
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for ModelDag {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "dag_test.rs"]
mod tests;
