pub mod traits;

use std::{
    fmt::{self, Display},
    iter,
};

use num_traits::Num;
use tracing::{debug, trace};

use crate::{
    edge::{Edge, EdgeRecord, WeightedEdge},
    error::{Error, Result},
};

/// 隣接リスト形式の無向グラフ
///
/// 頂点は追加順の添字で識別され、削除されない。
/// `edges[i]` には始点が `i` の記録のみが入り、
/// 接続1本につき両方向の2つの記録を持つ。
#[derive(Debug, Clone)]
pub struct Graph<V, E = Edge> {
    edges: Vec<Vec<E>>,
    vertices: Vec<V>,
}

impl<V, E> Graph<V, E> {
    pub const fn new() -> Self {
        Self {
            edges: Vec::new(),
            vertices: Vec::new(),
        }
    }

    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            edges: Vec::with_capacity(vertices),
            vertices: Vec::with_capacity(vertices),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 記録の総数。無向の接続1本は2と数える
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// 隣接リストの順に全ての記録を列挙する
    pub fn edges(&self) -> impl Iterator<Item = &E> {
        self.edges.iter().flatten()
    }

    /// 追加した頂点の添字を返す
    pub fn add_vertex(&mut self, vertex: V) -> usize {
        self.vertices.push(vertex);
        self.edges.push(Vec::new());
        let index = self.vertices.len() - 1;
        trace!(index, "vertex added");
        index
    }

    pub fn vertex_at(&self, index: usize) -> Result<&V> {
        self.vertices
            .get(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    pub fn edges_for_index(&self, index: usize) -> Result<&[E]> {
        self.edges
            .get(index)
            .map(Vec::as_slice)
            .ok_or_else(|| self.out_of_range(index))
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.vertices.len() {
            Ok(())
        } else {
            Err(self.out_of_range(index))
        }
    }

    fn out_of_range(&self, index: usize) -> Error {
        let len = self.vertices.len();
        debug!(index, len, "vertex index out of range");
        Error::IndexOutOfRange { index, len }
    }
}

impl<V: PartialEq, E> Graph<V, E> {
    /// 等しい頂点のうち最初のものの添字
    ///
    /// 重複した値があるとき、2番目以降の頂点はこの方法では引けない
    pub fn index_of(&self, vertex: &V) -> Result<usize> {
        self.vertices
            .iter()
            .position(|v| v == vertex)
            .ok_or_else(|| {
                debug!("vertex not found");
                Error::VertexNotFound
            })
    }

    pub fn edges_for_vertex(&self, vertex: &V) -> Result<&[E]> {
        self.edges_for_index(self.index_of(vertex)?)
    }
}

impl<V, E: EdgeRecord> Graph<V, E> {
    /// `edge` を始点側に、反転したものを終点側に追加する
    ///
    /// 記録が不正か、どちらかの添字が範囲外なら何も変更しない
    pub fn add_edge(&mut self, edge: E) -> Result<()> {
        edge.validate()?;
        let (from, to) = (edge.start_vertex(), edge.end_vertex());
        self.check_index(from)?;
        self.check_index(to)?;
        let reversed = edge.reversed();
        self.edges[from].push(edge);
        self.edges[to].push(reversed);
        trace!(from, to, "edge added");
        Ok(())
    }

    /// 隣接リストの順に隣接頂点を返す
    pub fn neighbors_for_index(&self, index: usize) -> Result<Vec<&V>> {
        Ok(self
            .edges_for_index(index)?
            .iter()
            .map(|e| &self.vertices[e.end_vertex()])
            .collect())
    }
}

impl<V: PartialEq, E: EdgeRecord> Graph<V, E> {
    pub fn neighbors_for_vertex(&self, vertex: &V) -> Result<Vec<&V>> {
        self.neighbors_for_index(self.index_of(vertex)?)
    }
}

impl<V> Graph<V, Edge> {
    pub fn add_edge_by_indices(&mut self, from: usize, to: usize) -> Result<()> {
        self.add_edge(Edge::new(from, to))
    }
}

impl<V: PartialEq> Graph<V, Edge> {
    pub fn add_edge_by_vertices(&mut self, from: &V, to: &V) -> Result<()> {
        let (from, to) = (self.index_of(from)?, self.index_of(to)?);
        self.add_edge_by_indices(from, to)
    }
}

impl<V, W: Num + Copy> Graph<V, WeightedEdge<W>> {
    pub fn add_edge_by_indices(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.add_edge(WeightedEdge::try_new(from, to, weight)?)
    }
}

impl<V: PartialEq, W: Num + Copy> Graph<V, WeightedEdge<W>> {
    pub fn add_edge_by_vertices(&mut self, from: &V, to: &V, weight: W) -> Result<()> {
        let (from, to) = (self.index_of(from)?, self.index_of(to)?);
        self.add_edge_by_indices(from, to, weight)
    }
}

impl<V, E: EdgeRecord> traits::Graph<usize> for Graph<V, E> {
    fn adjacency(&self, v: usize) -> impl Iterator<Item = usize> {
        self.edges
            .get(v)
            .into_iter()
            .flatten()
            .map(EdgeRecord::end_vertex)
    }
}

impl<V, W: Num + Copy> traits::WeightedGraph<usize, W> for Graph<V, WeightedEdge<W>> {
    fn adjacency_weight(&self, v: usize) -> impl Iterator<Item = (usize, W)> {
        self.edges
            .get(v)
            .into_iter()
            .flatten()
            .map(|e| (e.end_vertex(), e.weight()))
    }
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> From<Vec<V>> for Graph<V, E> {
    fn from(vertices: Vec<V>) -> Self {
        Self {
            edges: iter::repeat_with(Vec::new).take(vertices.len()).collect(),
            vertices,
        }
    }
}

impl<V, E, const N: usize> From<[V; N]> for Graph<V, E> {
    fn from(vertices: [V; N]) -> Self {
        Self::from(Vec::from(vertices))
    }
}

impl<V: Display, E: EdgeRecord> Display for Graph<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, edges) in self.vertices.iter().zip(&self.edges) {
            write!(f, "{vertex} -> [")?;
            for (i, e) in edges.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", self.vertices[e.end_vertex()])?;
            }
            f.write_str("]\n")?;
        }
        Ok(())
    }
}
