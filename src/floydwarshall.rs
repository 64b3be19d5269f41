use super::util::{CheckedAdd, Weight};

/// ワーシャル-フロイド法を用いて全点対間の最短距離を求める.
///
/// 返り値の`[i][j]`は頂点`i`から頂点`j`への「到達可能なら距離, 到達不可能ならNone」で, `[i][i]`は常に0である.
/// 多重辺は最もコストの小さいものだけが使われる. 距離の和が型で表せなくなる経路は使わない.
///
/// * `edges` - グラフの隣接リストによる表現 (「「行先と辺のコストの組」の配列」の配列)
///
/// # Constraints
///
/// - 全ての行先は`edges.len()`未満
/// - 辺のコストは非負
///
/// # Time complexity
///
/// - *O*(*V*³)
#[must_use]
pub(crate) fn floyd_warshall<T: Weight>(
    edges: &[impl AsRef<[(usize, T)]>],
) -> Box<[Box<[Option<T>]>]> {
    let n = edges.len();
    let mut dist = (0..n)
        .map(|i| {
            let mut row = vec![None; n].into_boxed_slice();
            row[i] = Some(T::zero());
            for &(j, cost) in edges[i].as_ref() {
                if row[j].is_none_or(|d| cost < d) {
                    row[j] = Some(cost);
                }
            }
            row
        })
        .collect::<Box<_>>();

    for k in 0..n {
        for i in 0..n {
            let Some(a) = dist[i][k] else {
                continue;
            };
            for j in 0..n {
                let Some(d) = dist[k][j].and_then(|b| CheckedAdd::checked_add(a, b)) else {
                    continue;
                };
                if dist[i][j].is_none_or(|x| d < x) {
                    dist[i][j] = Some(d);
                }
            }
        }
    }
    dist
}
