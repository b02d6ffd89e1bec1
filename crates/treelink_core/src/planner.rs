//! The little-endian link layout used by the poeplanner site. Decode only:
//! imported builds are always re-shared through the official dialect, so an
//! encoder for this layout has no caller.
//!
//! The layouts look alike but differ in endianness, count widths, section
//! presence, and mastery pair order, so nothing here is shared with
//! `official` beyond the cursor.

use crate::class::CharacterClass;
use crate::cursor::{ByteCursor, Endian};
use crate::error::{CodecError, ImportIssue};
use crate::selection::{CLUSTER_NODE_OFFSET, NodeSelection};
use crate::version::TreeVersion;

/// A decoded planner link plus anything worth telling the user about it.
#[derive(Debug)]
pub struct PlannerTree {
    pub selection: NodeSelection,
    pub issues: Vec<ImportIssue>,
}

pub fn decode(bytes: &[u8]) -> Result<PlannerTree, CodecError> {
    let mut r = ByteCursor::new(bytes, Endian::Little);

    let version = r.read_u16()?;
    if version < 1 {
        return Err(CodecError::invalid(format!(
            "unsupported planner format version {version}"
        )));
    }
    let _reserved = r.read_u8()?;

    let major = r.read_u16()?;
    let minor_code = r.read_u16()?;
    let mut issues = Vec::new();
    let tree_version = match TreeVersion::from_minor_code(minor_code) {
        Some(v) => v,
        None => {
            issues.push(ImportIssue::UnknownTreeVersion {
                major,
                code: minor_code,
            });
            TreeVersion::Unknown
        }
    };

    let class_raw = r.read_u8()?;
    let class = CharacterClass::from_raw(class_raw)
        .ok_or_else(|| CodecError::invalid(format!("class id {class_raw} out of range")))?;

    let mut selection = NodeSelection::new(class, tree_version);
    selection.ascend_class_id = r.read_u8()?;
    selection.bandit_choice = r.read_u8()?;

    // Regular nodes are mandatory; the count here is two bytes wide, unlike
    // the official dialect's single byte.
    let node_count = r.read_u16()? as usize;
    for _ in 0..node_count {
        selection.nodes.insert(u32::from(r.read_u16()?));
    }

    // Trailing sections: tolerate truncation, keep what decoded cleanly.
    if read_cluster_section(&mut r, &mut selection).is_err() {
        return Ok(PlannerTree { selection, issues });
    }
    if read_ascendancy_section(&mut r, &mut selection).is_err() {
        return Ok(PlannerTree { selection, issues });
    }
    if read_mastery_section(&mut r, &mut selection).is_err() {
        return Ok(PlannerTree { selection, issues });
    }

    Ok(PlannerTree { selection, issues })
}

fn read_cluster_section(
    r: &mut ByteCursor<'_>,
    selection: &mut NodeSelection,
) -> Result<(), CodecError> {
    let count = r.read_u16()?;
    for _ in 0..count {
        let id = u32::from(r.read_u16()?);
        selection.nodes.insert(id + CLUSTER_NODE_OFFSET);
    }
    Ok(())
}

fn read_ascendancy_section(
    r: &mut ByteCursor<'_>,
    selection: &mut NodeSelection,
) -> Result<(), CodecError> {
    let count = r.read_u16()?;
    for _ in 0..count {
        selection.ascendancy_nodes.insert(u32::from(r.read_u16()?));
    }
    Ok(())
}

fn read_mastery_section(
    r: &mut ByteCursor<'_>,
    selection: &mut NodeSelection,
) -> Result<(), CodecError> {
    let count = r.read_u16()?;
    for _ in 0..count {
        // Planner pair order is (node, effect); the official dialect swaps it.
        let node = u32::from(r.read_u16()?);
        let effect = u32::from(r.read_u16()?);
        selection.masteries.insert(node, effect);
    }
    Ok(())
}
