use treelink_core::planner;
use treelink_core::{CLUSTER_NODE_OFFSET, CharacterClass, CodecError, ImportIssue, TreeVersion};

/// Shadow, ascendancy 2, bandit 1, tree 3.25, two regular nodes, one cluster
/// node, one ascendancy node, one mastery pair. All fields little-endian.
fn shadow_payload(minor_code: u8) -> Vec<u8> {
    vec![
        0x01, 0x00, // format version 1
        0x00, // reserved
        0x03, 0x00, // major tree version 3
        minor_code, 0x00, // minor version code
        0x06, // class 6 (Shadow)
        0x02, // ascendancy 2
        0x01, // bandit choice
        0x02, 0x00, // 2 regular nodes
        0x64, 0x00, // node 100
        0xC8, 0x00, // node 200
        0x01, 0x00, // 1 cluster node
        0x05, 0x00, // cluster id 5
        0x01, 0x00, // 1 ascendancy node
        0x39, 0x30, // node 12345
        0x01, 0x00, // 1 mastery pair
        0x64, 0x00, // node 100
        0x07, 0x00, // effect 7
    ]
}

#[test]
fn decodes_full_planner_link() {
    let decoded = planner::decode(&shadow_payload(25)).expect("failed to decode planner payload");
    let selection = &decoded.selection;

    assert!(decoded.issues.is_empty());
    assert_eq!(selection.class, CharacterClass::Shadow);
    assert_eq!(selection.ascend_class_id, 2);
    assert_eq!(selection.bandit_choice, 1);
    assert_eq!(selection.tree_version, TreeVersion::V3_25);
    assert_eq!(selection.nodes.iter().copied().collect::<Vec<_>>(), vec![
        100,
        200,
        CLUSTER_NODE_OFFSET + 5
    ]);
    assert_eq!(
        selection.ascendancy_nodes.iter().copied().collect::<Vec<_>>(),
        vec![12345]
    );
    assert_eq!(selection.masteries.get(&100), Some(&7));
    assert_eq!(selection.masteries.len(), 1);
}

#[test]
fn unknown_minor_code_is_flagged_not_fatal() {
    let decoded =
        planner::decode(&shadow_payload(99)).expect("unknown tree version must not fail decode");
    assert_eq!(decoded.selection.tree_version, TreeVersion::Unknown);
    assert_eq!(decoded.issues, vec![ImportIssue::UnknownTreeVersion {
        major: 3,
        code: 99
    }]);
    // Everything else still decodes.
    assert_eq!(decoded.selection.nodes.len(), 3);
}

#[test]
fn truncation_after_regular_nodes_keeps_them() {
    let mut payload = shadow_payload(25);
    payload.truncate(16); // ends right after the two regular node ids
    let decoded = planner::decode(&payload).expect("trailing sections are optional");
    assert_eq!(
        decoded.selection.nodes.iter().copied().collect::<Vec<_>>(),
        vec![100, 200]
    );
    assert!(decoded.selection.ascendancy_nodes.is_empty());
    assert!(decoded.selection.masteries.is_empty());
}

#[test]
fn truncation_inside_ascendancy_section_keeps_earlier_sections() {
    let mut payload = shadow_payload(25);
    payload.truncate(23); // ascendancy count present, its node id clipped
    let decoded = planner::decode(&payload).expect("trailing sections are optional");
    assert!(decoded.selection.nodes.contains(&(CLUSTER_NODE_OFFSET + 5)));
    assert!(decoded.selection.ascendancy_nodes.is_empty());
}

#[test]
fn truncated_header_is_fatal() {
    let err = planner::decode(&shadow_payload(25)[..9]).expect_err("header is mandatory");
    assert!(matches!(err, CodecError::OutOfData { .. }));
}

#[test]
fn truncated_regular_node_list_is_fatal() {
    let err =
        planner::decode(&shadow_payload(25)[..13]).expect_err("regular node list is mandatory");
    assert!(matches!(err, CodecError::OutOfData { .. }));
}

#[test]
fn rejects_version_zero() {
    let mut payload = shadow_payload(25);
    payload[0] = 0x00;
    let err = planner::decode(&payload).expect_err("version 0 is invalid");
    assert!(matches!(err, CodecError::InvalidEncoding(_)));
}

#[test]
fn rejects_out_of_range_class() {
    let mut payload = shadow_payload(25);
    payload[7] = 0x09;
    let err = planner::decode(&payload).expect_err("class 9 is invalid");
    assert!(matches!(err, CodecError::InvalidEncoding(_)));
}
