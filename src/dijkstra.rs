use std::cmp::Ordering;

use super::binaryheap::BinaryHeap;
use super::util::{CheckedAdd, Weight};

/// ヒープに入れる`(距離, 頂点番号)`を距離だけで比較する.
fn by_distance<T: Ord>(a: &(T, usize), b: &(T, usize)) -> Ordering {
    a.0.cmp(&b.0)
}

/// `start`から順に頂点を確定させ, 各頂点について「距離と1つ前の頂点の組」を求める.
/// `goal`が確定した時点で打ち切る.
///
/// 距離の和が型で表せなくなる辺は使わない.
///
/// ヒープは減少キー操作を持たないので, 距離が更新されるたびに同じ頂点を重複して入れ,
/// 取り出した頂点が確定済みなら読み飛ばす.
fn search<T: Weight>(
    edges: &[impl AsRef<[(usize, T)]>],
    start: usize,
    goal: Option<usize>,
) -> Box<[Option<(T, usize)>]> {
    let n = edges.len();
    let mut heap = BinaryHeap::with_comparator(by_distance::<T>);
    let mut nodes = vec![None; n].into_boxed_slice();
    let mut processed = vec![false; n].into_boxed_slice();
    {
        let zero = T::zero();
        nodes[start] = Some((zero, start));
        heap.insert((zero, start));
    }
    while let Some((distance, v)) = heap.delete_root() {
        if processed[v] {
            continue;
        }
        processed[v] = true;
        if goal == Some(v) {
            break;
        }
        for &(u, cost) in edges[v].as_ref() {
            let Some(distance) = CheckedAdd::checked_add(distance, cost) else {
                continue;
            };
            if nodes[u].is_none_or(|(d, _)| distance < d) {
                nodes[u] = Some((distance, v));
                heap.insert((distance, u));
            }
        }
    }
    nodes
}

/// ダイクストラ法を用いて`start`から`goal`への最短距離を求める. 到達不可能ならNoneを返す.
///
/// * `edges` - グラフの隣接リストによる表現 (「「行先と辺のコストの組」の配列」の配列)
/// * `start` - 探索の始点
/// * `goal` - 探索の終点
///
/// # Constraints
///
/// - `start < edges.len()`, `goal < edges.len()` で, 全ての行先も`edges.len()`未満
/// - 辺のコストは非負. 負のコストがあると結果は保証されない
///
/// # Time complexity
///
/// - *O*(*E* log *E*)
#[must_use]
pub(crate) fn dijkstra<T: Weight>(
    edges: &[impl AsRef<[(usize, T)]>],
    start: usize,
    goal: usize,
) -> Option<T> {
    debug_assert!(start < edges.len());
    debug_assert!(goal < edges.len());
    search(edges, start, Some(goal))[goal].map(|(d, _)| d)
}

/// ダイクストラ法を用いて`start`から各頂点への最短距離を求める.
///
/// 返り値は各頂点についての「到達可能なら距離, 到達不可能ならNone」の配列.
///
/// # Constraints
///
/// - `start < edges.len()` で, 全ての行先も`edges.len()`未満
/// - 辺のコストは非負
///
/// # Time complexity
///
/// - *O*(*E* log *E*)
#[must_use]
pub(crate) fn dijkstra_distances<T: Weight>(
    edges: &[impl AsRef<[(usize, T)]>],
    start: usize,
) -> Box<[Option<T>]> {
    debug_assert!(start < edges.len());
    search(edges, start, None)
        .iter()
        .map(|node| node.map(|(d, _)| d))
        .collect()
}

/// ダイクストラ法を用いて最短経路木を作成する.
///
/// 返り値は各頂点についての「到達可能なら距離と1つ前の頂点の組, 到達不可能ならNone」の配列で, `start`の「距離と1つ前の頂点」は`start`自身である.
///
/// # Constraints
///
/// - `start < edges.len()` で, 全ての行先も`edges.len()`未満
/// - 辺のコストは非負
///
/// # Time complexity
///
/// - *O*(*E* log *E*)
#[must_use]
pub(crate) fn dijkstra_tree<T: Weight>(
    edges: &[impl AsRef<[(usize, T)]>],
    start: usize,
) -> Box<[Option<(T, usize)>]> {
    debug_assert!(start < edges.len());
    search(edges, start, None)
}
