/// 重み付き有向グラフの頂点をトポロジカルソートする.
///
/// 閉路がありソートできない場合はNoneを返す.
///
/// * `edges` - グラフの隣接リストによる表現 (「「行先と辺のコストの組」の配列」の配列). コストは使わない.
///
/// # Time complexity
///
/// - *O*(*V* + *E*)
#[must_use]
pub(crate) fn topological_sort<T>(edges: &[impl AsRef<[(usize, T)]>]) -> Option<Vec<usize>> {
    let n = edges.len();
    let mut count = std::iter::repeat_n(0usize, n).collect::<Box<_>>();
    for v in edges {
        for &(u, _) in v.as_ref() {
            count[u] += 1;
        }
    }
    let mut stack = count
        .iter()
        .enumerate()
        .filter_map(|(i, &c)| (c == 0).then_some(i))
        .collect::<Vec<_>>();

    let mut order = Vec::with_capacity(n);
    while let Some(v) = stack.pop() {
        order.push(v);
        for &(u, _) in edges[v].as_ref() {
            count[u] -= 1;
            if count[u] == 0 {
                stack.push(u);
            }
        }
    }
    (order.len() == n).then_some(order)
}
