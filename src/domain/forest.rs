//! Forest construction, cycle probing, and flattening
//!
//! A forest is the ordered list of root tasks built from one input block.
//! The first root pushed is the anchor: identifier lookups, the cycle
//! probe, and the flattening walk all start there. Later roots are only
//! reflected in output insofar as their identifiers already occur in the
//! anchor's subtree.

use std::collections::{HashSet, VecDeque};

use super::error::ResolveError;
use super::task::Task;

/// Child-index path from the anchor root down to a node.
type NodePath = Vec<usize>;

/// Cycle-probe queue slot: a node, or the end-of-branch sentinel.
enum Probe<'a> {
    Node(&'a Task),
    Boundary,
}

/// One in-progress dependency forest for a single input block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    roots: Vec<Task>,
}

impl Forest {
    /// Creates an empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no line has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// The root tasks in insertion order.
    pub fn roots(&self) -> &[Task] {
        &self.roots
    }

    /// Inserts one parsed line into the forest.
    ///
    /// A line without dependencies always becomes a new root. The first
    /// dependency-carrying line of an empty forest becomes the anchor root
    /// owning fresh nodes for its dependencies. Any other line attaches
    /// fresh dependency nodes to every existing node matching the line's
    /// identifier (exact comparison, so case differs means no match); each
    /// attachment is preceded by a cycle probe against the forest as
    /// updated so far. When no node matches, the dependencies are silently
    /// dropped.
    pub fn insert(
        &mut self,
        identifier: &str,
        dependencies: &[String],
        line_number: usize,
    ) -> Result<(), ResolveError> {
        if dependencies.is_empty() {
            self.roots.push(Task::new(identifier));
            return Ok(());
        }

        if self.roots.is_empty() {
            let children = dependencies
                .iter()
                .map(|dependency| Task::new(dependency.as_str()))
                .collect();
            self.roots.push(Task::with_dependencies(identifier, children));
            return Ok(());
        }

        // Matches are located up front; nodes appended below hang off
        // already-matched nodes only, so the walk never revisits them.
        for path in self.find_matches(identifier) {
            for dependency in dependencies {
                self.check_cycle(dependency, line_number)?;
                self.node_mut(&path)
                    .push_dependency(Task::new(dependency.as_str()));
            }
        }

        Ok(())
    }

    /// Breadth-first walk from the anchor root collecting the path of every
    /// node carrying `identifier`.
    fn find_matches(&self, identifier: &str) -> Vec<NodePath> {
        let Some(anchor) = self.roots.first() else {
            return Vec::new();
        };

        let mut matches = Vec::new();
        let mut queue: VecDeque<(NodePath, &Task)> = VecDeque::new();
        queue.push_back((Vec::new(), anchor));

        while let Some((path, node)) = queue.pop_front() {
            for (index, child) in node.dependencies.iter().enumerate() {
                let mut child_path = path.clone();
                child_path.push(index);
                queue.push_back((child_path, child));
            }

            if node.identifier == identifier {
                matches.push(path);
            }
        }

        matches
    }

    /// Resolves a path produced by [`Forest::find_matches`]; appends never
    /// shift existing indices, so paths stay valid across attachments.
    fn node_mut(&mut self, path: &[usize]) -> &mut Task {
        let mut node = &mut self.roots[0];
        for &index in path {
            node = &mut node.dependencies[index];
        }
        node
    }

    /// Probes for a cycle before attaching `candidate` anywhere in the
    /// forest.
    ///
    /// The walk expands the anchor root depth-first and stops at the first
    /// exhausted branch, marked by a sentinel. The candidate identifier is
    /// compared against everything visited so far at each step. Branches
    /// reached only through later siblings are outside the probe.
    fn check_cycle(&self, candidate: &str, line_number: usize) -> Result<(), ResolveError> {
        let Some(anchor) = self.roots.first() else {
            return Ok(());
        };

        let mut walk: VecDeque<Probe> = VecDeque::new();
        walk.push_back(Probe::Node(anchor));
        let mut visited: HashSet<&str> = HashSet::new();

        while let Some(slot) = walk.pop_front() {
            let Probe::Node(node) = slot else {
                // First exhausted branch; the probe goes no further.
                break;
            };

            if node.dependencies.is_empty() {
                walk.push_front(Probe::Boundary);
            } else {
                for dependency in node.dependencies.iter().rev() {
                    walk.push_front(Probe::Node(dependency));
                }
            }

            if visited.contains(candidate) {
                return Err(ResolveError::CyclicalDependency {
                    identifier: candidate.to_string(),
                    line_number,
                });
            }

            visited.insert(node.identifier.as_str());
        }

        Ok(())
    }

    /// Flattens the forest into a dependency-first identifier sequence.
    ///
    /// Breadth-first from the anchor root; the first visit of an identifier
    /// wins and later duplicate nodes are skipped along with their
    /// subtrees. The visit order is then reversed so dependencies precede
    /// their dependents.
    pub fn flatten(&self) -> Vec<String> {
        let Some(anchor) = self.roots.first() else {
            return Vec::new();
        };

        let mut walk: VecDeque<&Task> = VecDeque::new();
        walk.push_back(anchor);
        let mut visited: HashSet<&str> = HashSet::new();
        let mut order: Vec<&str> = Vec::new();

        while let Some(node) = walk.pop_front() {
            if visited.contains(node.identifier.as_str()) {
                continue;
            }

            order.push(node.identifier.as_str());
            visited.insert(node.identifier.as_str());
            walk.extend(&node.dependencies);
        }

        order.reverse();
        order.into_iter().map(str::to_string).collect()
    }
}
