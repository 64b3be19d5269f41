use std::collections::VecDeque;

use super::error::{check_vertex, Result};
use super::util::Weight;

/// 隣接リストで表現された重み付き有向グラフ
///
/// 頂点数は作成時に決まり, 辺は追加されるだけで削除されない.
/// 自己ループや多重辺もそのまま保持する.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightedGraph<W> {
    // 各頂点から出る「行先と辺のコストの組」の配列. 追加した順に並ぶ
    adjacency: Box<[Vec<(usize, W)>]>,
    edge_count: usize,
}

impl<W> WeightedGraph<W> {
    /// 頂点数`n`で辺の無いグラフを作成する.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            adjacency: std::iter::repeat_with(Vec::new).take(n).collect(),
            edge_count: 0,
        }
    }

    /// 頂点数を返す.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// 辺の本数を返す. 無向辺は1本と数える.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// 隣接リストを返す.
    #[must_use]
    pub fn adjacency(&self) -> &[Vec<(usize, W)>] {
        &self.adjacency
    }

    /// 頂点`u`から出る辺の「行先とコストの組」を追加した順に返す.
    pub fn neighbors(&self, u: usize) -> Result<&[(usize, W)]> {
        check_vertex(u, self.vertex_count())?;
        Ok(&self.adjacency[u])
    }

    /// 頂点`u`から頂点`v`へのコスト`weight`の有向辺を追加する.
    ///
    /// # Time complexity
    ///
    /// - *O*(1) (償却)
    pub fn add_edge(&mut self, u: usize, v: usize, weight: W) -> Result<()> {
        check_vertex(u, self.vertex_count())?;
        check_vertex(v, self.vertex_count())?;
        self.adjacency[u].push((v, weight));
        self.edge_count += 1;
        Ok(())
    }

    /// 頂点`start`から深さ優先探索で到達できる頂点を, 訪れた順に返す.
    ///
    /// 隣接リストの先頭の辺から順に潜っていく.
    ///
    /// # Time complexity
    ///
    /// - *O*(*V* + *E*)
    pub fn dfs(&self, start: usize) -> Result<Vec<usize>> {
        check_vertex(start, self.vertex_count())?;
        let mut visited = vec![false; self.vertex_count()].into_boxed_slice();
        let mut order = Vec::new();
        let mut stack = vec![start];
        while let Some(v) = stack.pop() {
            if visited[v] {
                continue;
            }
            visited[v] = true;
            order.push(v);
            stack.extend(
                self.adjacency[v]
                    .iter()
                    .rev()
                    .map(|&(u, _)| u)
                    .filter(|&u| !visited[u]),
            );
        }
        Ok(order)
    }

    /// 頂点`start`から幅優先探索で到達できる頂点を, 訪れた順に返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(*V* + *E*)
    pub fn bfs(&self, start: usize) -> Result<Vec<usize>> {
        check_vertex(start, self.vertex_count())?;
        let mut visited = vec![false; self.vertex_count()].into_boxed_slice();
        let mut order = Vec::new();
        let mut queue = VecDeque::from([start]);
        visited[start] = true;
        while let Some(v) = queue.pop_front() {
            order.push(v);
            for &(u, _) in &self.adjacency[v] {
                if !visited[u] {
                    visited[u] = true;
                    queue.push_back(u);
                }
            }
        }
        Ok(order)
    }

    /// 頂点をトポロジカルソートする. 閉路がある場合はNoneを返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(*V* + *E*)
    #[must_use]
    pub fn topological_sort(&self) -> Option<Vec<usize>> {
        super::topologicalsort::topological_sort(self.adjacency())
    }
}

impl<W: Copy> WeightedGraph<W> {
    /// 頂点`u`と頂点`v`をコスト`weight`で双方向に結ぶ.
    ///
    /// # Time complexity
    ///
    /// - *O*(1) (償却)
    pub fn add_undirected_edge(&mut self, u: usize, v: usize, weight: W) -> Result<()> {
        check_vertex(u, self.vertex_count())?;
        check_vertex(v, self.vertex_count())?;
        self.adjacency[u].push((v, weight));
        self.adjacency[v].push((u, weight));
        self.edge_count += 1;
        Ok(())
    }
}

impl<W: Weight> WeightedGraph<W> {
    /// 頂点`source`から各頂点への最短距離を求める.
    ///
    /// 返り値は各頂点についての「到達可能なら距離, 到達不可能ならNone」の配列.
    ///
    /// # Constraints
    ///
    /// - 辺のコストは非負. 負のコストがあると結果は保証されない
    ///
    /// # Time complexity
    ///
    /// - *O*(*E* log *E*)
    pub fn dijkstra(&self, source: usize) -> Result<Box<[Option<W>]>> {
        check_vertex(source, self.vertex_count())?;
        let distance = super::dijkstra::dijkstra_distances(self.adjacency(), source);
        tracing::debug!(
            source,
            reachable = distance.iter().filter(|d| d.is_some()).count(),
            vertices = self.vertex_count(),
            "dijkstra finished"
        );
        Ok(distance)
    }

    /// 頂点`source`を根とする最短経路木を求める.
    ///
    /// 返り値は各頂点についての「到達可能なら距離と1つ前の頂点の組, 到達不可能ならNone」の配列.
    ///
    /// # Time complexity
    ///
    /// - *O*(*E* log *E*)
    pub fn dijkstra_tree(&self, source: usize) -> Result<Box<[Option<(W, usize)>]>> {
        check_vertex(source, self.vertex_count())?;
        Ok(super::dijkstra::dijkstra_tree(self.adjacency(), source))
    }

    /// 頂点`source`から頂点`goal`への最短距離を求める. 到達不可能ならNoneを返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(*E* log *E*)
    pub fn shortest_distance(&self, source: usize, goal: usize) -> Result<Option<W>> {
        check_vertex(source, self.vertex_count())?;
        check_vertex(goal, self.vertex_count())?;
        Ok(super::dijkstra::dijkstra(self.adjacency(), source, goal))
    }

    /// 全点対間の最短距離を求める.
    ///
    /// # Time complexity
    ///
    /// - *O*(*V*³)
    #[must_use]
    pub fn floyd_warshall(&self) -> Box<[Box<[Option<W>]>]> {
        super::floydwarshall::floyd_warshall(self.adjacency())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn sample_graph() -> WeightedGraph<i32> {
        let mut graph = WeightedGraph::new(6);
        for (u, v, w) in [(1, 2, 5), (1, 4, 9), (1, 5, 1), (2, 3, 2), (4, 3, 6), (5, 4, 2)] {
            graph.add_edge(u, v, w).unwrap();
        }
        graph
    }

    #[test]
    fn dijkstra() {
        let graph = sample_graph();
        assert_eq!(graph.edge_count(), 6);
        assert_eq!(
            graph.dijkstra(1).unwrap().as_ref(),
            &[None, Some(0), Some(5), Some(7), Some(3), Some(1)]
        );
        assert_eq!(graph.shortest_distance(1, 3), Ok(Some(7)));
        assert_eq!(graph.shortest_distance(3, 1), Ok(None));
    }

    #[test]
    fn dijkstra_tree() {
        let tree = sample_graph().dijkstra_tree(1).unwrap();
        assert_eq!(tree[4], Some((3, 5)));
        assert_eq!(tree[3], Some((7, 2)));
        assert_eq!(tree[0], None);
    }

    #[test]
    fn unreachable() {
        let mut graph = WeightedGraph::new(4);
        graph.add_edge(0, 1, 4u64).unwrap();
        graph.add_edge(2, 3, 1).unwrap();
        assert_eq!(
            graph.dijkstra(0).unwrap().as_ref(),
            &[Some(0), Some(4), None, None]
        );
    }

    #[test]
    fn overflowing_path_is_unreachable() {
        let mut graph = WeightedGraph::new(3);
        graph.add_edge(0, 1, i32::MAX).unwrap();
        graph.add_edge(1, 2, 1).unwrap();
        assert_eq!(
            graph.dijkstra(0).unwrap().as_ref(),
            &[Some(0), Some(i32::MAX), None]
        );
        assert_eq!(graph.shortest_distance(0, 2), Ok(None));
        assert_eq!(graph.floyd_warshall()[0].as_ref(), &[Some(0), Some(i32::MAX), None]);
    }

    #[test]
    fn parallel_edges_and_self_loops() {
        let mut graph = WeightedGraph::new(3);
        graph.add_edge(0, 0, 1u32).unwrap();
        graph.add_edge(0, 1, 8).unwrap();
        graph.add_edge(0, 1, 3).unwrap();
        graph.add_edge(1, 2, 1).unwrap();
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.neighbors(0), Ok(&[(0, 1), (1, 8), (1, 3)][..]));
        assert_eq!(
            graph.dijkstra(0).unwrap().as_ref(),
            &[Some(0), Some(3), Some(4)]
        );
    }

    #[test]
    fn out_of_range() {
        let mut graph = WeightedGraph::<i32>::new(3);
        assert_eq!(
            graph.add_edge(0, 3, 1),
            Err(Error::VertexOutOfRange { vertex: 3, len: 3 })
        );
        assert_eq!(
            graph.add_undirected_edge(4, 0, 1),
            Err(Error::VertexOutOfRange { vertex: 4, len: 3 })
        );
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(
            graph.dijkstra(3),
            Err(Error::VertexOutOfRange { vertex: 3, len: 3 })
        );
        assert_eq!(
            graph.shortest_distance(0, 9),
            Err(Error::VertexOutOfRange { vertex: 9, len: 3 })
        );
        assert!(graph.dfs(3).is_err());
        assert!(graph.bfs(3).is_err());

        let empty = WeightedGraph::<i32>::new(0);
        assert_eq!(
            empty.dijkstra(0),
            Err(Error::VertexOutOfRange { vertex: 0, len: 0 })
        );
    }

    #[test]
    fn traversal() {
        //   0
        //  / \
        // 1   2
        // |   |
        // 3   4
        let mut graph = WeightedGraph::new(6);
        for (u, v) in [(0, 1), (0, 2), (1, 3), (2, 4)] {
            graph.add_undirected_edge(u, v, 1).unwrap();
        }
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.dfs(0), Ok(vec![0, 1, 3, 2, 4]));
        assert_eq!(graph.bfs(0), Ok(vec![0, 1, 2, 3, 4]));
        assert_eq!(graph.dfs(5), Ok(vec![5]));
    }

    #[test]
    fn topological_sort() {
        let mut graph = WeightedGraph::new(7);
        for (u, v) in [(1, 2), (2, 3), (3, 6), (4, 1), (4, 5), (5, 2), (5, 3)] {
            graph.add_edge(u, v, 0).unwrap();
        }
        let order = graph.topological_sort().unwrap();
        let position = |v: usize| order.iter().position(|&s| s == v);
        for u in 0..graph.vertex_count() {
            for &(v, _) in graph.neighbors(u).unwrap() {
                assert!(position(u) < position(v));
            }
        }

        graph.add_edge(6, 4, 0).unwrap();
        assert_eq!(graph.topological_sort(), None);
    }

    #[test]
    fn floyd_warshall_agrees() {
        let graph = sample_graph();
        let all = graph.floyd_warshall();
        for s in 0..graph.vertex_count() {
            assert_eq!(all[s], graph.dijkstra(s).unwrap());
        }
    }
}
