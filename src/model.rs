//! Hierarchical input data and the aggregated, sorted hierarchy built from it.
//!
//! The published datasets nest `root -> category -> leaf`, and encode leaf
//! values either as numbers or as numeric strings (`"value": "82.53"`).

use crate::error::{ChartError, Result};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawNode {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "de_value")]
    pub value: Option<f64>,
    #[serde(default)]
    pub children: Option<Vec<RawNode>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn de_value<'de, D>(de: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(de)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<f64>()
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("value \"{s}\" is not a number")))
        }
    }
}

impl RawNode {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    fn child_nodes(&self) -> &[RawNode] {
        self.children.as_deref().unwrap_or(&[])
    }
}

/// A node of the aggregated hierarchy. `value` is the sum of the leaf values
/// below it (or the leaf's own value).
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub name: String,
    pub category: String,
    pub value: f64,
    pub children: Vec<Node>,
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Leaves in pre-order.
    pub fn leaves(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Node>) {
        if self.is_leaf() {
            out.push(self);
        } else {
            for c in &self.children {
                c.collect_leaves(out);
            }
        }
    }

    /// Sorts children at every level by value, largest first. Ties keep
    /// their input order.
    pub fn sort_descending(&mut self) {
        self.children.sort_by(|a, b| b.value.total_cmp(&a.value));
        for c in &mut self.children {
            c.sort_descending();
        }
    }

    fn build(raw: &RawNode, parent_name: Option<&str>) -> Result<Node> {
        let kids = raw.child_nodes();
        if kids.is_empty() {
            let value = raw.value.unwrap_or(0.0);
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidValue {
                    name: raw.name.clone(),
                    value,
                });
            }
            let category = raw
                .category
                .clone()
                .or_else(|| parent_name.map(str::to_string))
                .unwrap_or_else(|| raw.name.clone());
            return Ok(Node {
                name: raw.name.clone(),
                category,
                value,
                children: Vec::new(),
            });
        }
        let children = kids
            .iter()
            .map(|k| Node::build(k, Some(&raw.name)))
            .collect::<Result<Vec<_>>>()?;
        let value = children.iter().map(|c| c.value).sum();
        Ok(Node {
            name: raw.name.clone(),
            category: raw.category.clone().unwrap_or_else(|| raw.name.clone()),
            value,
            children,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Hierarchy {
    pub root: Node,
    /// Distinct leaf categories in the order they first appear in the input.
    pub categories: Vec<String>,
}

impl Hierarchy {
    pub fn build(raw: &RawNode) -> Result<Self> {
        let mut root = Node::build(raw, None)?;
        let categories: Vec<String> = {
            let mut seen = HashSet::new();
            root.leaves()
                .into_iter()
                .filter(|l| seen.insert(l.category.as_str()))
                .map(|l| l.category.clone())
                .collect()
        };
        root.sort_descending();
        Ok(Self { root, categories })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn leaf(name: &str, category: &str, value: f64) -> RawNode {
        RawNode {
            name: name.into(),
            category: Some(category.into()),
            value: Some(value),
            children: None,
        }
    }

    pub(crate) fn group(name: &str, children: Vec<RawNode>) -> RawNode {
        RawNode {
            name: name.into(),
            children: Some(children),
            ..Default::default()
        }
    }

    fn sample() -> RawNode {
        group(
            "root",
            vec![
                group("Wii", vec![leaf("Wii Sports", "Wii", 82.53), leaf("Wii Fit", "Wii", 22.7)]),
                group(
                    "PS4",
                    vec![leaf("GTA V", "PS4", 12.6), leaf("Uncharted", "PS4", 5.0), leaf("Knack", "PS4", 120.0)],
                ),
                group("DS", vec![leaf("Mario Kart DS", "DS", 23.0)]),
            ],
        )
    }

    fn check_sums(n: &Node) {
        if n.is_leaf() {
            return;
        }
        let leaf_sum: f64 = n.leaves().iter().map(|l| l.value).sum();
        assert!((n.value - leaf_sum).abs() < 1e-9, "{} = {} vs {}", n.name, n.value, leaf_sum);
        n.children.iter().for_each(check_sums);
    }

    fn check_sorted(n: &Node) {
        for w in n.children.windows(2) {
            assert!(w[0].value >= w[1].value);
        }
        n.children.iter().for_each(check_sorted);
    }

    #[test]
    fn test_aggregate_equals_leaf_sum() {
        let h = Hierarchy::build(&sample()).unwrap();
        check_sums(&h.root);
        assert!((h.root.value - (82.53 + 22.7 + 12.6 + 5.0 + 120.0 + 23.0)).abs() < 1e-9);
    }

    #[test]
    fn test_children_sorted_descending() {
        let h = Hierarchy::build(&sample()).unwrap();
        check_sorted(&h.root);
        let order: Vec<_> = h.root.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(order, ["PS4", "Wii", "DS"]);
        assert_eq!(h.root.children[0].children[0].name, "Knack");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let raw = group("root", vec![leaf("a", "x", 1.0), leaf("b", "x", 1.0), leaf("c", "x", 1.0)]);
        let h = Hierarchy::build(&raw).unwrap();
        let names: Vec<_> = h.root.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let h = Hierarchy::build(&sample()).unwrap();
        assert_eq!(h.categories, ["Wii", "PS4", "DS"]);
        assert_eq!(h.root.leaves().len(), 6);
    }

    #[test]
    fn test_string_values_and_missing_fields() {
        let json = r#"{"name":"root","children":[
            {"name":"Action","children":[
                {"name":"Film A","category":"Action","value":"10"},
                {"name":"Film B","value":3.5},
                {"name":"Film C","category":"Action"}
            ]}
        ]}"#;
        let raw = RawNode::from_json(json).unwrap();
        let h = Hierarchy::build(&raw).unwrap();
        assert_eq!(h.root.value, 13.5);
        let b = h.root.leaves().into_iter().find(|l| l.name == "Film B").unwrap();
        assert_eq!(b.category, "Action");
        let c = h.root.leaves().into_iter().find(|l| l.name == "Film C").unwrap();
        assert_eq!(c.value, 0.0);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = RawNode::from_json(r#"{"name":"r","children":[{"name":"x","value":"lots"}]}"#);
        assert!(matches!(err, Err(ChartError::Malformed(_))));

        let raw = group("root", vec![leaf("neg", "x", -1.0)]);
        assert!(matches!(Hierarchy::build(&raw), Err(ChartError::InvalidValue { .. })));
    }

    #[test]
    fn test_childless_root_is_single_leaf() {
        let raw = RawNode { name: "solo".into(), value: Some(4.0), ..Default::default() };
        let h = Hierarchy::build(&raw).unwrap();
        assert!(h.root.is_leaf());
        assert_eq!(h.root.leaves().len(), 1);
        assert_eq!(h.categories, ["solo"]);
    }
}
