use std::fmt::Write as _;

use serde_json::{Map as JsonMap, Value as JsonValue};
use treelink_core::{Dialect, ImportedTree, NodeSelection};

pub fn render_json(imported: &ImportedTree) -> JsonValue {
    let selection = &imported.selection;
    let mut out = JsonMap::new();

    out.insert(
        "dialect".to_string(),
        JsonValue::String(
            match imported.dialect {
                Dialect::Official => "official",
                Dialect::Planner => "planner",
            }
            .to_string(),
        ),
    );
    out.insert(
        "class".to_string(),
        JsonValue::String(selection.class.to_string()),
    );
    out.insert(
        "ascendancy_id".to_string(),
        JsonValue::from(selection.ascend_class_id),
    );
    out.insert(
        "tree_version".to_string(),
        JsonValue::String(selection.tree_version.to_string()),
    );
    out.insert("nodes".to_string(), nodes_to_json(selection));
    out.insert(
        "cluster_nodes".to_string(),
        JsonValue::Array(
            selection
                .cluster_nodes()
                .map(JsonValue::from)
                .collect(),
        ),
    );
    out.insert(
        "ascendancy_nodes".to_string(),
        JsonValue::Array(
            selection
                .ascendancy_nodes
                .iter()
                .map(|&id| JsonValue::from(id))
                .collect(),
        ),
    );
    out.insert("masteries".to_string(), masteries_to_json(selection));
    out.insert(
        "bandit_choice".to_string(),
        JsonValue::from(selection.bandit_choice),
    );
    out.insert(
        "issues".to_string(),
        JsonValue::Array(
            imported
                .issues
                .iter()
                .map(|issue| JsonValue::String(issue.to_string()))
                .collect(),
        ),
    );

    JsonValue::Object(out)
}

fn nodes_to_json(selection: &NodeSelection) -> JsonValue {
    JsonValue::Array(selection.regular_nodes().map(JsonValue::from).collect())
}

fn masteries_to_json(selection: &NodeSelection) -> JsonValue {
    JsonValue::Array(
        selection
            .masteries
            .iter()
            .map(|(&node, &effect)| {
                let mut m = JsonMap::new();
                m.insert("node".to_string(), JsonValue::from(node));
                m.insert("effect".to_string(), JsonValue::from(effect));
                JsonValue::Object(m)
            })
            .collect(),
    )
}

pub fn render_text(imported: &ImportedTree) -> String {
    let selection = &imported.selection;
    let mut out = String::new();

    writeln!(
        &mut out,
        "class: {} (ascendancy {})",
        selection.class, selection.ascend_class_id
    )
    .expect("writing to String cannot fail");
    writeln!(&mut out, "tree version: {}", selection.tree_version)
        .expect("writing to String cannot fail");
    writeln!(
        &mut out,
        "dialect: {}",
        match imported.dialect {
            Dialect::Official => "official",
            Dialect::Planner => "planner",
        }
    )
    .expect("writing to String cannot fail");

    write_id_line(&mut out, "nodes", selection.regular_nodes());
    write_id_line(&mut out, "cluster nodes", selection.cluster_nodes());
    write_id_line(
        &mut out,
        "ascendancy nodes",
        selection.ascendancy_nodes.iter().copied(),
    );

    if selection.masteries.is_empty() {
        writeln!(&mut out, "masteries: none").expect("writing to String cannot fail");
    } else {
        let pairs: Vec<String> = selection
            .masteries
            .iter()
            .map(|(node, effect)| format!("{node}->{effect}"))
            .collect();
        writeln!(&mut out, "masteries: {}", pairs.join(", "))
            .expect("writing to String cannot fail");
    }

    for issue in &imported.issues {
        writeln!(&mut out, "notice: {issue}").expect("writing to String cannot fail");
    }

    out
}

fn write_id_line(out: &mut String, label: &str, ids: impl Iterator<Item = u32>) {
    let ids: Vec<String> = ids.map(|id| id.to_string()).collect();
    if ids.is_empty() {
        writeln!(out, "{label}: none").expect("writing to String cannot fail");
    } else {
        writeln!(out, "{label} ({}): {}", ids.len(), ids.join(" "))
            .expect("writing to String cannot fail");
    }
}
