//! Graph - Resource dependency analysis
//!
//! CloudFormation creates a resource only after everything it references.
//! Dependencies come from explicit `DependsOn` lists and from `Ref`,
//! `Fn::GetAtt` and `Fn::Sub` references to other resources.

use std::collections::{HashMap, HashSet};

use log::{debug, warn};

use crate::intrinsic::{Expr, Reference};
use crate::template::Template;

/// Why one resource depends on another
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyKind {
    /// Listed in `DependsOn`
    Explicit,
    /// `Ref` to the resource
    Ref,
    /// `Fn::GetAtt` (or `${Res.Attr}` in `Fn::Sub`) on the given attribute
    Attribute(String),
    /// `Fn::GetAtt` with an attribute name computed at deployment time
    ComputedAttribute,
}

/// Dependency between resources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Target resource logical ID
    pub target: String,
    pub kind: DependencyKind,
}

/// A dependency cycle, listed from the first resource back to itself
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Circular dependency: {}", path.join(" -> "))]
pub struct CycleError {
    pub path: Vec<String>,
}

/// Dependency graph between the resources of a template
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// Resource logical IDs in template order
    nodes: Vec<String>,
    /// Resource -> list of dependencies
    edges: HashMap<String, Vec<Dependency>>,
    /// Reverse edges: target -> resources that depend on it
    reverse_edges: HashMap<String, Vec<String>>,
}

impl DependencyGraph {
    /// Build the graph for all resources of a template.
    ///
    /// References to parameters, pseudo parameters or unknown names are not
    /// edges; unparsable property values are skipped (lint reports them).
    pub fn from_template(template: &Template) -> Self {
        let mut graph = Self {
            nodes: template.resources.keys().cloned().collect(),
            ..Default::default()
        };

        for (id, entry) in &template.resources {
            for target in &entry.attributes.depends_on {
                if template.resources.contains_key(target) {
                    graph.add_edge(id, Dependency {
                        target: target.clone(),
                        kind: DependencyKind::Explicit,
                    });
                }
            }

            let Some(properties) = &entry.properties else {
                continue;
            };
            let expr = match Expr::from_json(properties) {
                Ok(expr) => expr,
                Err(e) => {
                    warn!("Skipping properties of {} in dependency graph: {}", id, e);
                    continue;
                }
            };
            for reference in expr.references() {
                let (target, kind) = match reference {
                    Reference::Ref(name) => (name, DependencyKind::Ref),
                    Reference::GetAtt {
                        resource,
                        attribute: Some(attribute),
                    } => (resource, DependencyKind::Attribute(attribute)),
                    Reference::GetAtt {
                        resource,
                        attribute: None,
                    } => (resource, DependencyKind::ComputedAttribute),
                    Reference::Condition(_) | Reference::Mapping(_) => continue,
                };
                if template.resources.contains_key(&target) {
                    graph.add_edge(id, Dependency { target, kind });
                }
            }
        }

        debug!(
            "Built dependency graph: {} resources, {} edges",
            graph.nodes.len(),
            graph.edges.values().map(Vec::len).sum::<usize>()
        );
        graph
    }

    /// Add a dependency edge (duplicates of the same target are ignored)
    pub fn add_edge(&mut self, from: &str, dependency: Dependency) {
        let deps = self.edges.entry(from.to_string()).or_default();
        if deps.iter().any(|d| d.target == dependency.target) {
            return;
        }
        self.reverse_edges
            .entry(dependency.target.clone())
            .or_default()
            .push(from.to_string());
        deps.push(dependency);
    }

    /// Get direct dependencies of a resource
    pub fn dependencies_of(&self, resource: &str) -> &[Dependency] {
        self.edges.get(resource).map_or(&[], |v| v.as_slice())
    }

    /// Get resources that depend on this resource
    pub fn dependents_of(&self, resource: &str) -> &[String] {
        self.reverse_edges
            .get(resource)
            .map_or(&[], |v| v.as_slice())
    }

    /// Find a dependency cycle, if any
    pub fn find_cycle(&self) -> Option<CycleError> {
        let mut visited = HashSet::new();
        let mut stack = Vec::new();

        for node in &self.nodes {
            if let Some(path) = self.find_cycle_from(node, &mut visited, &mut stack) {
                return Some(CycleError { path });
            }
        }
        None
    }

    fn find_cycle_from(
        &self,
        node: &str,
        visited: &mut HashSet<String>,
        stack: &mut Vec<String>,
    ) -> Option<Vec<String>> {
        if let Some(pos) = stack.iter().position(|n| n == node) {
            let mut path = stack[pos..].to_vec();
            path.push(node.to_string());
            return Some(path);
        }
        if visited.contains(node) {
            return None;
        }

        visited.insert(node.to_string());
        stack.push(node.to_string());

        for dep in self.dependencies_of(node) {
            if let Some(path) = self.find_cycle_from(&dep.target, visited, stack) {
                return Some(path);
            }
        }

        stack.pop();
        None
    }

    /// Order in which CloudFormation can create the resources.
    ///
    /// Every resource comes after its dependencies; among resources that are
    /// ready at the same time, template order wins.
    pub fn deployment_order(&self) -> Result<Vec<String>, CycleError> {
        if let Some(cycle) = self.find_cycle() {
            return Err(cycle);
        }

        let mut remaining: HashMap<&str, usize> = self
            .nodes
            .iter()
            .map(|n| (n.as_str(), self.dependencies_of(n).len()))
            .collect();
        let mut order = Vec::with_capacity(self.nodes.len());

        while order.len() < self.nodes.len() {
            let Some(next) = self
                .nodes
                .iter()
                .find(|n| remaining.get(n.as_str()) == Some(&0))
            else {
                // Unreachable without a cycle, which was ruled out above
                break;
            };
            remaining.remove(next.as_str());
            for dependent in self.dependents_of(next) {
                if let Some(count) = remaining.get_mut(dependent.as_str()) {
                    *count -= 1;
                }
            }
            order.push(next.clone());
        }

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn template(resources: serde_json::Value) -> Template {
        serde_json::from_value(json!({
            "Parameters": {"Env": {"Type": "String"}},
            "Resources": resources
        }))
        .unwrap()
    }

    #[test]
    fn edges_from_depends_on_and_intrinsics() {
        let t = template(json!({
            "Key": {"Type": "AWS::KMS::Key"},
            "Role": {"Type": "AWS::IAM::Role"},
            "Queue": {
                "Type": "AWS::SQS::Queue",
                "DependsOn": "Role",
                "Properties": {
                    "KmsMasterKeyId": {"Fn::GetAtt": ["Key", "Arn"]},
                    "QueueName": {"Fn::Sub": "${Env}-${Key}"}
                }
            }
        }));
        let graph = DependencyGraph::from_template(&t);

        let deps = graph.dependencies_of("Queue");
        assert_eq!(deps.len(), 2);
        assert_eq!(deps[0], Dependency {
            target: "Role".to_string(),
            kind: DependencyKind::Explicit
        });
        assert_eq!(deps[1], Dependency {
            target: "Key".to_string(),
            kind: DependencyKind::Attribute("Arn".to_string())
        });
        assert_eq!(graph.dependents_of("Key"), &["Queue".to_string()]);
        assert!(graph.dependencies_of("Key").is_empty());
    }

    #[test]
    fn deployment_order_respects_dependencies() {
        let t = template(json!({
            "Subscription": {
                "Type": "AWS::SNS::Subscription",
                "Properties": {"TopicArn": {"Ref": "Topic"}, "Endpoint": {"Fn::GetAtt": "Queue.Arn"}}
            },
            "Topic": {"Type": "AWS::SNS::Topic"},
            "Queue": {"Type": "AWS::SQS::Queue"}
        }));
        let order = DependencyGraph::from_template(&t).deployment_order().unwrap();
        assert_eq!(order, vec!["Topic", "Queue", "Subscription"]);
    }

    #[test]
    fn cycle_is_reported_with_path() {
        let t = template(json!({
            "A": {"Type": "AWS::SNS::Topic", "DependsOn": "B"},
            "B": {"Type": "AWS::SNS::Topic", "Properties": {"TopicName": {"Ref": "C"}}},
            "C": {"Type": "AWS::SNS::Topic", "DependsOn": ["A"]}
        }));
        let graph = DependencyGraph::from_template(&t);
        let cycle = graph.find_cycle().unwrap();
        assert_eq!(cycle.path, vec!["A", "B", "C", "A"]);
        assert_eq!(cycle.to_string(), "Circular dependency: A -> B -> C -> A");
        assert!(graph.deployment_order().is_err());
    }

    #[test]
    fn self_dependency_is_a_cycle() {
        let t = template(json!({
            "A": {"Type": "AWS::SNS::Topic", "Properties": {"TopicName": {"Ref": "A"}}}
        }));
        let cycle = DependencyGraph::from_template(&t).find_cycle().unwrap();
        assert_eq!(cycle.path, vec!["A", "A"]);
    }

    #[test]
    fn computed_get_att_attribute_is_an_edge() {
        let t = template(json!({
            "Table": {"Type": "AWS::DynamoDB::Table"},
            "Queue": {
                "Type": "AWS::SQS::Queue",
                "Properties": {"QueueName": {"Fn::GetAtt": ["Table", {"Ref": "Env"}]}}
            }
        }));
        let graph = DependencyGraph::from_template(&t);
        assert_eq!(graph.dependencies_of("Queue"), &[Dependency {
            target: "Table".to_string(),
            kind: DependencyKind::ComputedAttribute
        }]);
        assert_eq!(graph.deployment_order().unwrap(), vec!["Table", "Queue"]);
    }

    #[test]
    fn parameter_references_are_not_edges() {
        let t = template(json!({
            "A": {"Type": "AWS::SNS::Topic", "Properties": {"TopicName": {"Ref": "Env"}}}
        }));
        let graph = DependencyGraph::from_template(&t);
        assert!(graph.dependencies_of("A").is_empty());
        assert_eq!(graph.deployment_order().unwrap(), vec!["A"]);
    }
}
