//! Everything between pasted text and dialect bytes: link-shape detection,
//! URL-safe base64 transcoding, and the decode/encode entry points callers
//! actually use.

use base64::{
    Engine as _,
    engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD},
};
use serde::{Deserialize, Serialize};

use crate::error::{CodecError, ImportIssue};
use crate::official;
use crate::planner;
use crate::selection::NodeSelection;
use crate::version::TreeVersion;

pub const OFFICIAL_TREE_URL_BASE: &str = "https://www.pathofexile.com/passive-skill-tree/";

const OFFICIAL_PATH_MARKER: &str = "/passive-skill-tree/";
const PLANNER_HOST_MARKER: &str = "poeplanner.com/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dialect {
    Official,
    Planner,
}

/// Result of sniffing pasted text, decided once before any parsing. The
/// query string (`accountName=` and friends) is carried uninterpreted for
/// callers that want it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectedLink<'a> {
    Official {
        payload: &'a str,
        version_segment: Option<&'a str>,
        query: Option<&'a str>,
    },
    Planner {
        payload: &'a str,
        query: Option<&'a str>,
    },
    Unrecognized,
}

/// Classify pasted text as one of the two link dialects or a bare code.
/// Bare codes are treated as official: that is the only dialect shared
/// without a URL around it.
pub fn detect(text: &str) -> DetectedLink<'_> {
    let trimmed = text.trim();

    if let Some(idx) = trimmed.find(PLANNER_HOST_MARKER) {
        let rest = &trimmed[idx + PLANNER_HOST_MARKER.len()..];
        let (path, query) = split_query(rest);
        return DetectedLink::Planner {
            payload: path.trim_end_matches('/'),
            query,
        };
    }

    if let Some(idx) = trimmed.find(OFFICIAL_PATH_MARKER) {
        let rest = &trimmed[idx + OFFICIAL_PATH_MARKER.len()..];
        let (path, query) = split_query(rest);
        let path = path.trim_end_matches('/');
        // Either "<payload>" or "<version>/<payload>".
        return match path.split_once('/') {
            Some((version_segment, payload)) => DetectedLink::Official {
                payload,
                version_segment: Some(version_segment),
                query,
            },
            None => DetectedLink::Official {
                payload: path,
                version_segment: None,
                query,
            },
        };
    }

    if !trimmed.is_empty() && trimmed.bytes().all(is_base64url_byte) {
        return DetectedLink::Official {
            payload: trimmed,
            version_segment: None,
            query: None,
        };
    }

    DetectedLink::Unrecognized
}

fn split_query(rest: &str) -> (&str, Option<&str>) {
    match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    }
}

fn is_base64url_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b'='
}

/// URL-safe base64 decode. Shared codes routinely lose their trailing `=`
/// in transit, so padding is reconstructed rather than required.
pub fn decode_base64url(payload: &str) -> Result<Vec<u8>, CodecError> {
    URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| CodecError::invalid(format!("bad base64 payload: {e}")))
}

/// Inverse of `decode_base64url`, always with canonical padding.
pub fn encode_base64url(bytes: &[u8]) -> String {
    URL_SAFE.encode(bytes)
}

/// A selection imported from pasted text, with the dialect it came from and
/// any non-fatal conditions hit on the way.
#[derive(Debug)]
pub struct ImportedTree {
    pub selection: NodeSelection,
    pub dialect: Dialect,
    pub issues: Vec<ImportIssue>,
}

/// Decode a pasted URL or bare code. `default_version` is the tree version
/// assumed when the link does not pin one (official links without a version
/// path segment) or pins one we do not know (flagged via `issues`).
pub fn decode_link(text: &str, default_version: TreeVersion) -> Result<ImportedTree, CodecError> {
    match detect(text) {
        DetectedLink::Official {
            payload,
            version_segment,
            ..
        } => {
            let bytes = decode_base64url(payload)?;
            let tree_version = version_segment
                .and_then(TreeVersion::from_url_segment)
                .unwrap_or(default_version);
            let selection = official::decode(&bytes, tree_version)?;
            Ok(ImportedTree {
                selection,
                dialect: Dialect::Official,
                issues: Vec::new(),
            })
        }
        DetectedLink::Planner { payload, .. } => {
            let bytes = decode_base64url(payload)?;
            let planner::PlannerTree {
                mut selection,
                issues,
            } = planner::decode(&bytes)?;
            if selection.tree_version == TreeVersion::Unknown {
                // The substitution stays visible through `issues`; it is
                // never applied silently.
                selection.tree_version = default_version;
            }
            Ok(ImportedTree {
                selection,
                dialect: Dialect::Planner,
                issues,
            })
        }
        DetectedLink::Unrecognized => Err(CodecError::invalid(
            "input is not a passive tree link or code",
        )),
    }
}

/// Encode a selection as a canonical official-site URL.
pub fn encode_link(selection: &NodeSelection) -> Result<String, CodecError> {
    let bytes = official::encode(selection)?;
    Ok(format!(
        "{OFFICIAL_TREE_URL_BASE}{}",
        encode_base64url(&bytes)
    ))
}
