use super::binaryheap::BinaryHeap;
use super::kruskal::Edge;
use super::util::Weight;

/// プリム法を用いて最小全域森を構築し, 使った辺を返す.
///
/// 各連結成分について, 番号の最も小さい頂点から木を育てる.
/// ヒープには辺の番号を入れ, 両端が既に木に含まれている辺は取り出した時点で捨てる.
///
/// * `n` - グラフの頂点数
/// * `edges` - 無向辺の配列
///
/// # Constraints
///
/// - 全ての頂点は`n`未満
///
/// # Time complexity
///
/// - *O*(*V* + *E* log *E*)
#[must_use]
pub(crate) fn prim<W: Weight>(n: usize, edges: &[Edge<W>]) -> Vec<Edge<W>> {
    let mut incident = vec![vec![]; n];
    for (i, e) in edges.iter().enumerate() {
        debug_assert!(e.u < n && e.v < n);
        incident[e.u].push(i);
        if e.u != e.v {
            incident[e.v].push(i);
        }
    }

    let mut visited = vec![false; n].into_boxed_slice();
    let mut heap = BinaryHeap::with_comparator(|&a: &usize, &b: &usize| {
        edges[a].weight.cmp(&edges[b].weight)
    });
    let mut tree = Vec::with_capacity(n.saturating_sub(1));
    for root in 0..n {
        if visited[root] {
            continue;
        }
        let mut next = Some(root);
        loop {
            if let Some(v) = next.take() {
                visited[v] = true;
                heap.extend(incident[v].iter().copied().filter(|&i| {
                    let e = &edges[i];
                    !visited[e.u] || !visited[e.v]
                }));
            }
            let Some(i) = heap.delete_root() else {
                break;
            };
            let e = edges[i];
            if visited[e.u] && visited[e.v] {
                continue;
            }
            next = Some(if visited[e.u] { e.v } else { e.u });
            tree.push(e);
        }
    }
    tree
}
