//! YAML block formatter
//!
//! Attributes are converted into a nested map (groups become sub-maps,
//! scalars become strings) and serialized as a YAML block below the header.
//! Keys are sorted, so output is deterministic. When a key repeats within
//! one level the last occurrence wins.

use super::AttrFormatter;
use crate::core::{Attr, AttrValue, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Nested-map form of an attribute list
pub type AttrTree = BTreeMap<String, AttrNode>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrNode {
    Scalar(String),
    Map(AttrTree),
}

/// Convert attributes to their nested-map form, dropping zero attributes
pub fn to_tree(attrs: &[Attr]) -> AttrTree {
    let mut tree = AttrTree::new();
    for attr in attrs.iter().filter(|a| !a.is_empty()) {
        let node = match &attr.value {
            AttrValue::Group(children) => AttrNode::Map(to_tree(children)),
            AttrValue::Scalar(s) => AttrNode::Scalar(s.clone()),
        };
        tree.insert(attr.key.clone(), node);
    }
    tree
}

/// Rebuild an attribute list from its nested-map form, in key order
pub fn from_tree(tree: &AttrTree) -> Vec<Attr> {
    tree.iter()
        .map(|(key, node)| match node {
            AttrNode::Scalar(s) => Attr::new(key.clone(), s.clone()),
            AttrNode::Map(children) => Attr::group(key.clone(), from_tree(children)),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormatter;

impl AttrFormatter for YamlFormatter {
    fn format(&self, buf: &mut Vec<u8>, attrs: &[Attr]) -> Result<()> {
        let tree = to_tree(attrs);
        // Serialize before touching buf so a failure leaves it unchanged
        let block = if tree.is_empty() {
            String::new()
        } else {
            serde_yaml_ng::to_string(&tree)?
        };

        buf.push(b'\n');
        buf.extend_from_slice(block.as_bytes());
        Ok(())
    }

    fn name(&self) -> &str {
        "yaml"
    }
}
