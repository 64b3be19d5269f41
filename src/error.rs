/// このクレートの操作が返すエラー
///
/// どれも引数が範囲外であることを表す. 空のコンテナからの取り出しはエラーではなく`None`で表す.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, thiserror::Error)]
pub enum Error {
    /// 頂点番号がグラフの頂点数以上だった.
    #[error("vertex {vertex} is out of range for {len} vertices")]
    VertexOutOfRange { vertex: usize, len: usize },
    /// 要素番号がUnionFindの要素数以上だった.
    #[error("site {site} is out of range for {len} sites")]
    SiteOutOfRange { site: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

/// `vertex < len` を確認する.
pub(crate) fn check_vertex(vertex: usize, len: usize) -> Result<()> {
    if vertex < len {
        Ok(())
    } else {
        Err(Error::VertexOutOfRange { vertex, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message() {
        assert_eq!(
            Error::VertexOutOfRange { vertex: 7, len: 6 }.to_string(),
            "vertex 7 is out of range for 6 vertices"
        );
        assert_eq!(
            Error::SiteOutOfRange { site: 3, len: 0 }.to_string(),
            "site 3 is out of range for 0 sites"
        );
        assert_eq!(check_vertex(5, 6), Ok(()));
        assert_eq!(
            check_vertex(6, 6),
            Err(Error::VertexOutOfRange { vertex: 6, len: 6 })
        );
    }
}
