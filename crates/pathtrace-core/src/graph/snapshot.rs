//! Replayable history of the distance table
//!
//! Snapshot 0 is the full all-infinite table. Every later snapshot is partial:
//! it only lists the source and the nodes relaxed so far, and is read by
//! layering it over snapshot 0.

use crate::graph::types::{Distance, DistanceMap};
use serde::Serialize;

/// One captured (possibly partial) distance table
pub type Snapshot = DistanceMap;

/// Ordered, append-only list of snapshots recorded by one engine run
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Snapshots(Vec<Snapshot>);

impl Snapshots {
    pub(crate) fn new() -> Self {
        Snapshots(Vec::new())
    }

    pub(crate) fn push(&mut self, snapshot: Snapshot) {
        self.0.push(snapshot);
    }

    /// Append a copy of the last snapshot with `node` set to `distance`
    pub(crate) fn push_change(&mut self, node: &str, distance: Distance) {
        let mut next = self.0.last().cloned().unwrap_or_default();
        next.insert(node.to_string(), distance);
        self.0.push(next);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index of the final snapshot
    pub fn last_index(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Raw snapshot as recorded
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.0.iter()
    }

    /// Full distance table at step `index`: the snapshot layered over
    /// snapshot 0, so nodes missing from a partial snapshot read as infinite.
    pub fn resolve(&self, index: usize) -> Option<DistanceMap> {
        let snapshot = self.0.get(index)?;
        let mut table = self.0.first().cloned().unwrap_or_default();
        for (node, distance) in snapshot {
            table.insert(node.clone(), *distance);
        }
        Some(table)
    }

    /// The node whose distance changed when step `index` was recorded
    pub fn change_at(&self, index: usize) -> Option<(String, Distance)> {
        if index == 0 {
            return None;
        }
        let before = self.resolve(index - 1)?;
        let after = self.resolve(index)?;
        after
            .into_iter()
            .find(|(node, distance)| before.get(node) != Some(distance))
    }
}

impl<'a> IntoIterator for &'a Snapshots {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
