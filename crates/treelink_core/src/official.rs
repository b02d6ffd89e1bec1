//! The big-endian link layout used by the official tree viewer. This is the
//! canonical dialect: it is the only one we emit, and emitted bytes must
//! match the site's own output exactly so re-shared links stay compatible.

use crate::class::CharacterClass;
use crate::cursor::{ByteCursor, Endian};
use crate::error::CodecError;
use crate::selection::{CLUSTER_NODE_OFFSET, NodeSelection};
use crate::version::TreeVersion;

/// Link format version written on encode. Decoding accepts any version >= 1;
/// the ascendancy byte only exists from version 4 on.
pub const FORMAT_VERSION: u32 = 6;

const ASCENDANCY_BYTE_MIN_VERSION: u32 = 4;

pub fn decode(bytes: &[u8], tree_version: TreeVersion) -> Result<NodeSelection, CodecError> {
    let mut r = ByteCursor::new(bytes, Endian::Big);

    // Header fields are mandatory; running out of bytes here is fatal.
    let version = r.read_u32()?;
    if version < 1 {
        return Err(CodecError::invalid(format!(
            "unsupported link format version {version}"
        )));
    }

    let class_raw = r.read_u8()?;
    let class = CharacterClass::from_raw(class_raw)
        .ok_or_else(|| CodecError::invalid(format!("class id {class_raw} out of range")))?;

    let mut selection = NodeSelection::new(class, tree_version);
    if version >= ASCENDANCY_BYTE_MIN_VERSION {
        selection.ascend_class_id = r.read_u8()?;
    }

    let node_count = r.read_u8()? as usize;
    for _ in 0..node_count {
        selection.nodes.insert(u32::from(r.read_u16()?));
    }
    if node_count == 0 {
        // An empty link still names a class; give it the class start node so
        // the result is a renderable tree.
        selection.nodes.insert(class.start_node());
    }

    // Cluster and mastery sections trail the payload and are frequently
    // clipped by careless copy-paste. Keep whatever decoded cleanly.
    if read_cluster_section(&mut r, &mut selection).is_err() {
        return Ok(selection);
    }
    if read_mastery_section(&mut r, &mut selection).is_err() {
        return Ok(selection);
    }

    Ok(selection)
}

fn read_cluster_section(
    r: &mut ByteCursor<'_>,
    selection: &mut NodeSelection,
) -> Result<(), CodecError> {
    let count = r.read_u8()?;
    for _ in 0..count {
        let id = u32::from(r.read_u16()?);
        selection.nodes.insert(id + CLUSTER_NODE_OFFSET);
    }
    Ok(())
}

fn read_mastery_section(
    r: &mut ByteCursor<'_>,
    selection: &mut NodeSelection,
) -> Result<(), CodecError> {
    let count = r.read_u8()?;
    for _ in 0..count {
        // Official pair order is (effect, node); the planner dialect swaps it.
        let effect = u32::from(r.read_u16()?);
        let node = u32::from(r.read_u16()?);
        selection.masteries.insert(node, effect);
        selection.nodes.insert(node);
    }
    Ok(())
}

pub fn encode(selection: &NodeSelection) -> Result<Vec<u8>, CodecError> {
    // BTreeSet iteration is ascending, so every section comes out sorted and
    // the same selection always encodes to the same bytes.
    let regular: Vec<u16> = selection.regular_nodes().map(|id| id as u16).collect();
    let cluster: Vec<u16> = selection.cluster_nodes().map(|id| id as u16).collect();

    let mut out = Vec::with_capacity(
        7 + 2 * regular.len() + 1 + 2 * cluster.len() + 1 + 4 * selection.masteries.len(),
    );
    out.extend_from_slice(&FORMAT_VERSION.to_be_bytes());
    out.push(selection.class.raw());
    out.push(selection.ascend_class_id);

    push_count(&mut out, regular.len(), "node")?;
    for id in &regular {
        out.extend_from_slice(&id.to_be_bytes());
    }

    push_count(&mut out, cluster.len(), "cluster node")?;
    for id in &cluster {
        out.extend_from_slice(&id.to_be_bytes());
    }

    push_count(&mut out, selection.masteries.len(), "mastery choice")?;
    for (&node, &effect) in &selection.masteries {
        out.extend_from_slice(&(effect as u16).to_be_bytes());
        out.extend_from_slice(&(node as u16).to_be_bytes());
    }

    Ok(out)
}

fn push_count(out: &mut Vec<u8>, count: usize, label: &str) -> Result<(), CodecError> {
    if count > usize::from(u8::MAX) {
        return Err(CodecError::invalid(format!(
            "{count} {label}s exceed the {} this link format can carry",
            u8::MAX
        )));
    }
    out.push(count as u8);
    Ok(())
}
