//! 带权无向图
//!
//! 权重只保存在边记录上；点对到权重的映射按需从边存储导出。
//! 两个图并集时，共同点对的权重相加。

use super::edge::Edge;
use super::store::{GraphStore, Pairs};
use super::{GraphOps, VertexKey};
use crate::config::GraphConfig;
use crate::error::{Error, Result};
use crate::identity::IdentityProvider;
use crate::types::{GraphKind, VertexName, Weight};
use indexmap::IndexMap;
use std::fmt;
use std::ops::Add;
use std::sync::Arc;
use tracing::debug;

/// 带权无向图
#[derive(Debug, Clone)]
pub struct WeightedGraph<N = VertexName> {
    store: GraphStore<N>,
}

impl<N: VertexKey> WeightedGraph<N> {
    /// 创建空图
    pub fn new() -> Self {
        Self::with_config(&GraphConfig::default())
    }

    pub fn with_identity(config: &GraphConfig, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            store: GraphStore::with_identity(GraphKind::Weighted, config, identity),
        }
    }

    /// 按报告顺序遍历 `(较低端点名, 较高端点名, 权重)`
    fn weighted_iter(&self) -> impl Iterator<Item = (&N, &N, Weight)> + '_ {
        self.store
            .edges()
            .map(|(lower, higher, edge)| (lower, higher, Self::edge_weight_of(edge)))
    }

    fn edge_weight_of(edge: &Edge) -> Weight {
        edge.weight().unwrap_or_default()
    }

    /// 图的总权重
    pub fn weight(&self) -> Weight {
        self.weighted_iter().map(|(_, _, w)| w).sum()
    }

    /// 连接两个顶点的边的权重（不区分方向）
    pub fn edge_weight(&self, a: &N, b: &N) -> Result<Weight> {
        self.store.vertex(a)?;
        self.store.vertex(b)?;
        self.store
            .find_edge(a, b)
            .map(Self::edge_weight_of)
            .ok_or_else(|| Error::edge_not_found(a, b))
    }

    /// 点对到权重的映射视图，键为报告方向的端点名
    pub fn weights(&self) -> IndexMap<(N, N), Weight> {
        self.weighted_iter()
            .map(|(a, b, w)| ((a.clone(), b.clone()), w))
            .collect()
    }

    /// 所有带权边，按报告顺序
    pub fn weighted_edges(&self) -> Vec<(N, N, Weight)> {
        self.weighted_iter()
            .map(|(a, b, w)| (a.clone(), b.clone(), w))
            .collect()
    }

    /// 在另一个图中查找同一无序点对的权重
    fn shared_weight(&self, a: &N, b: &N) -> Option<Weight> {
        self.store
            .find_edge(a, b)
            .map(Self::edge_weight_of)
    }

    /// 并集：共同点对权重相加，其余原样保留
    ///
    /// 依次添加交集、仅左侧、仅右侧的边。
    pub fn union(&self, other: &WeightedGraph<N>) -> WeightedGraph<N> {
        let mut result = WeightedGraph::with_config(self.store.config());

        for (a, b, w) in self.weighted_iter() {
            if let Some(other_w) = other.shared_weight(a, b) {
                result.append((a.clone(), b.clone(), w + other_w));
            }
        }
        for (a, b, w) in self.weighted_iter() {
            if other.shared_weight(a, b).is_none() {
                result.append((a.clone(), b.clone(), w));
            }
        }
        for (a, b, w) in other.weighted_iter() {
            if self.shared_weight(a, b).is_none() {
                result.append((a.clone(), b.clone(), w));
            }
        }

        debug!(
            left = self.size(),
            right = other.size(),
            result = result.size(),
            weight = result.weight(),
            "weighted graph union"
        );
        result
    }
}

impl<N: VertexKey> Default for WeightedGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> super::sealed::Sealed for WeightedGraph<N> {}

impl<N: VertexKey> GraphOps for WeightedGraph<N> {
    type Name = N;
    type EdgeInput = (N, N, Weight);

    const KIND: GraphKind = GraphKind::Weighted;

    fn with_config(config: &GraphConfig) -> Self {
        Self {
            store: GraphStore::with_config(GraphKind::Weighted, config),
        }
    }

    fn store(&self) -> &GraphStore<N> {
        &self.store
    }

    /// 点对已存在（任一方向）时无操作，权重不更新
    fn append(&mut self, (from, to, weight): (N, N, Weight)) {
        self.store.insert_weighted_edge(from, to, weight);
    }

    fn add_vertex(&mut self, name: N) {
        self.store.add_vertex(name);
    }
}

impl<'a, N: VertexKey> Add<&'a WeightedGraph<N>> for &'a WeightedGraph<N> {
    type Output = WeightedGraph<N>;

    fn add(self, other: &'a WeightedGraph<N>) -> WeightedGraph<N> {
        self.union(other)
    }
}

impl<N: VertexKey> Add for WeightedGraph<N> {
    type Output = WeightedGraph<N>;

    fn add(self, other: WeightedGraph<N>) -> WeightedGraph<N> {
        self.union(&other)
    }
}

impl<'a, N: VertexKey> IntoIterator for &'a WeightedGraph<N> {
    type Item = (&'a N, &'a N);
    type IntoIter = Pairs<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N: VertexKey> FromIterator<(N, N, Weight)> for WeightedGraph<N> {
    fn from_iter<I: IntoIterator<Item = (N, N, Weight)>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl<N: VertexKey> fmt::Display for WeightedGraph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.store.fmt_with(
            f,
            "WeightedGraph",
            self.weighted_iter().collect::<Vec<_>>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashMap;

    fn w(a: &str, b: &str, weight: Weight) -> (VertexName, VertexName, Weight) {
        (a.into(), b.into(), weight)
    }

    fn n(s: &str) -> VertexName {
        s.into()
    }

    #[test]
    fn test_weight() {
        let mut g = WeightedGraph::new();
        g.append(w("a", "b", 5.0));
        g.append(w("b", "c", 10.0));

        assert_eq!(g.weight(), 15.0);
        assert_eq!(g.size(), 2);
        assert_eq!(g.edge_weight(&n("b"), &n("a")).unwrap(), 5.0);
    }

    #[test]
    fn test_reappend_does_not_update_weight() {
        let mut g = WeightedGraph::new();
        g.append(("a", "b", 5.0));
        g.append(("b", "a", 99.0));
        g.append(("a", "b", 1.0));

        assert_eq!(g.size(), 1);
        assert_eq!(g.weight(), 5.0);
        assert_eq!(g.edge_weight(&"a", &"b").unwrap(), 5.0);
    }

    #[test]
    fn test_edge_weight_errors() {
        let g = WeightedGraph::from_edges([("a", "b", 1.0), ("c", "d", 2.0)]);

        assert!(matches!(
            g.edge_weight(&"a", &"x"),
            Err(Error::VertexNotFound(_))
        ));
        assert!(matches!(
            g.edge_weight(&"a", &"c"),
            Err(Error::EdgeNotFound(_))
        ));
    }

    #[test]
    fn test_union_weight() {
        let mut g = WeightedGraph::new();
        g.append(w("a", "b", 5.0));
        g.append(w("b", "c", 10.0));

        let mut h = WeightedGraph::new();
        h.append(w("a", "b", 5.0));
        h.append(w("c", "d", 10.0));

        let gh = &g + &h;

        assert_eq!(gh.weights()[&(n("a"), n("b"))], 10.0);
        assert_eq!(gh.edge_weight(&n("a"), &n("b")).unwrap(), 10.0);
        assert_eq!(gh.weight(), 30.0);
        assert_eq!(gh.size(), 3);
        assert_eq!(g.weight(), 15.0);
        assert_eq!(h.weight(), 15.0);
    }

    #[test]
    fn test_union_matches_reversed_orientation() {
        let g = WeightedGraph::from_edges([("a", "b", 1.0)]);
        let mut h = WeightedGraph::new();
        h.add_vertex("b");
        h.append(("a", "b", 2.0));
        assert_eq!(h.edges(), vec![("b", "a")]);

        let gh = &g + &h;
        assert_eq!(gh.size(), 1);
        assert_eq!(gh.edge_weight(&"b", &"a").unwrap(), 3.0);
        assert_eq!(gh.weight(), g.weight() + h.weight());
    }

    #[test]
    fn test_union_disjoint() {
        let g = WeightedGraph::from_edges([("a", "b", 1.5), ("b", "c", 2.5)]);
        let h = WeightedGraph::from_edges([("x", "y", 4.0)]);
        let gh = g.clone() + h.clone();

        assert_eq!(gh.weight(), g.weight() + h.weight());
        assert_eq!(gh.order(), 5);
        assert_eq!(
            gh.weighted_edges(),
            vec![("a", "b", 1.5), ("b", "c", 2.5), ("x", "y", 4.0)]
        );
    }

    #[test]
    fn test_union_with_self_doubles_weights() {
        let g = WeightedGraph::from_edges([("a", "b", 1.0), ("b", "c", 2.0)]);
        let gg = &g + &g;

        assert_eq!(gg.size(), 2);
        assert_eq!(gg.weight(), 6.0);
    }

    #[test]
    fn test_weights_view_and_display() {
        let g: WeightedGraph<&str> = [("a", "b", 5.0), ("c", "b", 1.0)].into_iter().collect();

        let weights = g.weights();
        assert_eq!(weights.len(), 2);
        assert_eq!(weights[&("a", "b")], 5.0);
        assert_eq!(weights[&("b", "c")], 1.0);

        let text = g.to_string();
        assert!(text.starts_with("WeightedGraph("));
        assert!(text.contains("type=weighted"));
        assert!(text.contains(r#"("a", "b", 5.0)"#));
    }

    #[test]
    fn test_union_laws() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut random_graph = || {
            WeightedGraph::from_edges(
                (0..12)
                    .map(|_| {
                        (
                            rng.gen_range(0..8u32),
                            rng.gen_range(0..8u32),
                            rng.gen_range(1..10) as Weight,
                        )
                    })
                    .collect::<Vec<_>>(),
            )
        };
        let (g, h, k) = (random_graph(), random_graph(), random_graph());

        // 无序点对到权重
        let content = |g: &WeightedGraph<u32>| {
            g.weighted_edges()
                .into_iter()
                .map(|(a, b, w)| (if a <= b { (a, b) } else { (b, a) }, w))
                .collect::<HashMap<_, _>>()
        };

        assert_eq!((&g + &h).weight(), g.weight() + h.weight());
        assert_eq!(content(&(&g + &h)), content(&(&h + &g)));
        assert_eq!(
            content(&(&(&g + &h) + &k)),
            content(&(&g + &(&h + &k)))
        );
    }
}
