use crate::error::{Error, Result};

/// 素集合データ構造 (重み付きクイックユニオン)
///
/// 幾つかのグループのマージとグループの所属判定を行える.
/// 併合の際は要素数の小さい木の根を大きい木の根の下に繋ぐので, 木の高さは *O*(log *n*) に収まる.
/// 経路圧縮は行わないので, `find`は構造を一切書き換えない.
#[derive(Clone)]
pub struct UnionFind {
    // 各要素の親. 根では自分自身を指す
    parent: Box<[usize]>,
    // 根についてのみ意味を持つ, その木の要素数
    size: Box<[usize]>,
    count: usize,
}

impl UnionFind {
    /// `n`個の要素があり, それぞれ別のグループに属しているUnionFindを作る.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n].into_boxed_slice(),
            count: n,
        }
    }

    /// 要素の総数を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// 要素が1つも無いか判定する.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// 要素の連結成分数を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    fn check(&self, site: usize) -> Result<()> {
        if site < self.len() {
            Ok(())
        } else {
            Err(Error::SiteOutOfRange {
                site,
                len: self.len(),
            })
        }
    }

    /// 要素`p`が属するグループの代表 (木の根) を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn find(&self, mut p: usize) -> Result<usize> {
        self.check(p)?;
        while self.parent[p] != p {
            p = self.parent[p];
        }
        Ok(p)
    }

    /// 要素`p`, `q`が同じグループに属するか判定する.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn connected(&self, p: usize, q: usize) -> Result<bool> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// 要素`p`が属するグループの要素数を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn size(&self, p: usize) -> Result<usize> {
        Ok(self.size[self.find(p)?])
    }

    /// 要素`p`が属するグループと要素`q`が属するグループを1つのグループにマージする.
    ///
    /// 新しくマージした場合は`true`を, 最初から同じグループに属していた場合は何もせずに`false`を返す.
    /// 要素数が等しい場合は`q`の根を`p`の根の下に繋ぐ.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn unite(&mut self, p: usize, q: usize) -> Result<bool> {
        let i = self.find(p)?;
        let j = self.find(q)?;
        if i == j {
            tracing::trace!(p, q, root = i, "sites already connected");
            return Ok(false);
        }
        let (root, child) = if self.size[i] < self.size[j] {
            (j, i)
        } else {
            (i, j)
        };
        self.parent[child] = root;
        self.size[root] += self.size[child];
        self.count -= 1;
        Ok(true)
    }
}

impl std::fmt::Debug for UnionFind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        struct VecSet(Vec<usize>);
        impl std::fmt::Debug for VecSet {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_set().entries(&self.0).finish()
            }
        }

        let mut groups = vec![vec![]; self.len()];
        for i in 0..self.len() {
            let mut r = i;
            while self.parent[r] != r {
                r = self.parent[r];
            }
            groups[r].push(i);
        }
        f.debug_set()
            .entries(groups.into_iter().filter(|v| !v.is_empty()).map(VecSet))
            .finish()
    }
}

impl Default for UnionFind {
    fn default() -> Self {
        Self::new(0)
    }
}
