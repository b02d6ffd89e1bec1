use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::class::CharacterClass;
use crate::version::TreeVersion;

/// Cluster-jewel nodes live in their own id space; shifting them by this
/// offset keeps them disjoint from main-tree ids (all < 65536) when both
/// are held in one set.
pub const CLUSTER_NODE_OFFSET: u32 = 65536;

/// One passive-tree allocation: which class, which ascendancy, which nodes,
/// and which mastery effects were picked. This is what the dialects decode
/// into and what the official encoder consumes; the codec never retains one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSelection {
    pub class: CharacterClass,
    pub ascend_class_id: u8,
    pub tree_version: TreeVersion,
    /// Main-tree and cluster nodes in the unioned id space: ids below
    /// `CLUSTER_NODE_OFFSET` are regular tree nodes, ids at or above it are
    /// cluster nodes stored with the offset applied.
    pub nodes: BTreeSet<u32>,
    /// Ascendancy-subtree nodes. Only the planner dialect populates this;
    /// official links carry ascendancy nodes inside `nodes`.
    pub ascendancy_nodes: BTreeSet<u32>,
    /// Mastery node id -> chosen effect id. Keys are expected to also appear
    /// in `nodes`; that is the caller's invariant, not checked here.
    pub masteries: BTreeMap<u32, u32>,
    /// Planner-dialect bandit byte, passed through uninterpreted.
    pub bandit_choice: u8,
}

impl NodeSelection {
    pub fn new(class: CharacterClass, tree_version: TreeVersion) -> Self {
        Self {
            class,
            ascend_class_id: 0,
            tree_version,
            nodes: BTreeSet::new(),
            ascendancy_nodes: BTreeSet::new(),
            masteries: BTreeMap::new(),
            bandit_choice: 0,
        }
    }

    /// Main-tree node ids, ascending.
    pub fn regular_nodes(&self) -> impl Iterator<Item = u32> + '_ {
        self.nodes
            .iter()
            .copied()
            .filter(|&id| id < CLUSTER_NODE_OFFSET)
    }

    /// Cluster node ids with the offset removed, ascending.
    pub fn cluster_nodes(&self) -> impl Iterator<Item = u32> + '_ {
        self.nodes
            .iter()
            .copied()
            .filter(|&id| id >= CLUSTER_NODE_OFFSET)
            .map(|id| id - CLUSTER_NODE_OFFSET)
    }
}
