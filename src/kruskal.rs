use super::error::{check_vertex, Result};
use super::unionfind::UnionFind;
use super::util::Weight;

/// 頂点`u`と頂点`v`を結ぶコスト`weight`の無向辺
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Edge<W> {
    pub u: usize,
    pub v: usize,
    pub weight: W,
}

/// 辺の配列で表現されたグラフ
///
/// 辺は追加した順に並ぶ. 頂点数は持たず, アルゴリズムを呼ぶときに与える.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct EdgeList<W>(Vec<Edge<W>>);

impl<W> EdgeList<W> {
    /// 空の辺リストを作成する.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// 頂点`u`と頂点`v`を結ぶコスト`weight`の辺を末尾に追加する.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: W) {
        self.0.push(Edge { u, v, weight });
    }

    /// 辺の本数を返す.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 辺が1本も無いか判定する.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 辺を並んでいる順に返す.
    pub fn iter(&self) -> std::slice::Iter<'_, Edge<W>> {
        self.0.iter()
    }

    /// 辺の配列をスライスとして返す.
    #[must_use]
    pub fn as_slice(&self) -> &[Edge<W>] {
        &self.0
    }

    /// 全ての辺の端点が`n`未満であることを確かめる.
    pub(crate) fn check_vertices(&self, n: usize) -> Result<()> {
        self.0.iter().try_for_each(|e| {
            check_vertex(e.u, n)?;
            check_vertex(e.v, n)
        })
    }
}

impl<W: Weight> EdgeList<W> {
    /// 辺のコストの総和を返す.
    #[must_use]
    pub fn total_weight(&self) -> W {
        self.0.iter().fold(W::zero(), |acc, e| acc + e.weight)
    }

    /// クラスカル法を用いて, 頂点数`n`のグラフの最小全域森を構築する.
    ///
    /// 自身の辺はコストの昇順に並べ替えられる. コストが等しい辺同士の順序は保証されない.
    /// 返り値の辺の本数が`n - 1`のときに限り, グラフは連結で返り値は最小全域木である.
    ///
    /// # Time complexity
    ///
    /// - *O*(*E* log *E*)
    pub fn kruskal(&mut self, n: usize) -> Result<EdgeList<W>> {
        self.check_vertices(n)?;
        self.0.sort_unstable_by_key(|e| e.weight);
        let mut uf = UnionFind::new(n);
        let mut mst = EdgeList::new();
        for &edge in &self.0 {
            if uf.connected(edge.u, edge.v)? {
                continue;
            }
            uf.unite(edge.u, edge.v)?;
            mst.0.push(edge);
        }
        tracing::debug!(
            vertices = n,
            edges = self.len(),
            selected = mst.len(),
            components = uf.count(),
            "kruskal finished"
        );
        Ok(mst)
    }

    /// プリム法を用いて, 頂点数`n`のグラフの最小全域森を構築する.
    ///
    /// # Time complexity
    ///
    /// - *O*(*E* log *E*)
    pub fn prim(&self, n: usize) -> Result<EdgeList<W>> {
        self.check_vertices(n)?;
        Ok(EdgeList(super::prim::prim(n, &self.0)))
    }
}

impl<W> Default for EdgeList<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> FromIterator<Edge<W>> for EdgeList<W> {
    fn from_iter<T: IntoIterator<Item = Edge<W>>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<W> FromIterator<(usize, usize, W)> for EdgeList<W> {
    fn from_iter<T: IntoIterator<Item = (usize, usize, W)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(u, v, weight)| Edge { u, v, weight })
                .collect(),
        )
    }
}

impl<W> Extend<Edge<W>> for EdgeList<W> {
    fn extend<T: IntoIterator<Item = Edge<W>>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl<'a, W> IntoIterator for &'a EdgeList<W> {
    type Item = &'a Edge<W>;

    type IntoIter = std::slice::Iter<'a, Edge<W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
