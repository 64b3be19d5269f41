use std::cmp::Ordering;

/// `BinaryHeap`が最初に確保する要素数
pub const HEAP_INIT_CAPACITY: usize = 4;

/// 比較関数を持つ二分ヒープ
///
/// 比較関数で最も前に来る要素が根に置かれる. `BinaryHeap::new()` で作ると最小ヒープになり,
/// `BinaryHeap::with_comparator(|a, b| b.cmp(a))` のようにすれば最大ヒープになる.
///
/// 比較関数はヒープの生存期間中ずっと固定である.
#[derive(Clone)]
pub struct BinaryHeap<T, F = fn(&T, &T) -> Ordering> {
    // 根を1番とする番号`k`の節点は`data[k - 1]`にある. 親は`k / 2`, 子は`2k`と`2k + 1`
    data: Vec<T>,
    cmp: F,
}

impl<T: Ord> BinaryHeap<T> {
    /// `Ord`の順序による新しい空の最小ヒープを作成する.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(HEAP_INIT_CAPACITY)
    }

    /// 少なくとも`capacity`個の要素を確保した, `Ord`の順序による空の最小ヒープを作成する.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let cmp: fn(&T, &T) -> Ordering = Ord::cmp;
        Self::with_capacity_and_comparator(capacity, cmp)
    }
}

impl<T, F: Fn(&T, &T) -> Ordering> BinaryHeap<T, F> {
    /// 比較関数`cmp`による新しい空のヒープを作成する.
    ///
    /// `cmp(a, b) == Ordering::Less` なら`a`が`b`より先に取り出される.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn with_comparator(cmp: F) -> Self {
        Self::with_capacity_and_comparator(HEAP_INIT_CAPACITY, cmp)
    }

    /// 少なくとも`capacity`個の要素を確保した, 比較関数`cmp`による空のヒープを作成する.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, cmp: F) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// ヒープの持つ要素の総数を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// ヒープが空かどうか調べる.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 再確保せずに保持できる要素数を返す.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// 根の要素 (比較関数で最も前に来る要素) を返す.
    /// ヒープが空の場合は `None` を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// 要素をヒープに追加する.
    /// 確保済みの領域が埋まっていれば容量を2倍にしてから追加する.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*) (償却)
    pub fn insert(&mut self, item: T) {
        if self.data.len() == self.data.capacity() {
            self.data.reserve_exact(self.data.capacity().max(1));
        }
        self.data.push(item);
        self.swim(self.data.len());
    }

    /// ヒープから根の要素を削除し, その要素を返す.
    /// ヒープが空の場合は `None` を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn delete_root(&mut self) -> Option<T> {
        let last = self.data.len().checked_sub(1)?;
        self.data.swap(0, last);
        let root = self.data.pop();
        self.sink(1);
        root
    }

    /// 全ての要素を削除する. 確保済みの領域はそのまま残る.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    // 番号`i`の節点が番号`j`の節点より後に来るべきか
    fn after(&self, i: usize, j: usize) -> bool {
        (self.cmp)(&self.data[i - 1], &self.data[j - 1]) == Ordering::Greater
    }

    fn swim(&mut self, mut k: usize) {
        while k > 1 && self.after(k / 2, k) {
            self.data.swap(k / 2 - 1, k - 1);
            k /= 2;
        }
    }

    fn sink(&mut self, mut k: usize) {
        let n = self.data.len();
        while 2 * k <= n {
            let mut j = 2 * k;
            if j < n && self.after(j, j + 1) {
                j += 1;
            }
            if !self.after(k, j) {
                break;
            }
            self.data.swap(k - 1, j - 1);
            k = j;
        }
    }
}

impl<T: Ord> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug, F> std::fmt::Debug for BinaryHeap<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.data).finish()
    }
}

impl<A: Ord> FromIterator<A> for BinaryHeap<A> {
    fn from_iter<T: IntoIterator<Item = A>>(iter: T) -> Self {
        let mut heap = BinaryHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<A, F: Fn(&A, &A) -> Ordering> Extend<A> for BinaryHeap<A, F> {
    fn extend<T: IntoIterator<Item = A>>(&mut self, iter: T) {
        for item in iter {
            self.insert(item);
        }
    }
}

/// BinaryHeapの値を比較関数の順に取り出すためのイテレータ
pub struct IntoIter<T, F>(BinaryHeap<T, F>);
impl<T, F: Fn(&T, &T) -> Ordering> Iterator for IntoIter<T, F> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.delete_root()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}
impl<T, F: Fn(&T, &T) -> Ordering> ExactSizeIterator for IntoIter<T, F> {}
impl<T, F: Fn(&T, &T) -> Ordering> std::iter::FusedIterator for IntoIter<T, F> {}

impl<T, F: Fn(&T, &T) -> Ordering> IntoIterator for BinaryHeap<T, F> {
    type Item = T;

    type IntoIter = IntoIter<T, F>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

#[cfg(test)]
fn is_heap_ordered<T, F: Fn(&T, &T) -> Ordering>(heap: &BinaryHeap<T, F>) -> bool {
    (2..=heap.len()).all(|k| !heap.after(k / 2, k))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Clone, Debug)]
    enum Op {
        Insert(i32),
        DeleteRoot,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => any::<i32>().prop_map(Op::Insert),
            1 => Just(Op::DeleteRoot),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn drain_matches_sort(values in proptest::collection::vec(any::<i32>(), 0..100)) {
            let heap = values.iter().copied().collect::<BinaryHeap<_>>();
            let mut sorted = values;
            sorted.sort();
            prop_assert_eq!(heap.into_iter().collect::<Vec<_>>(), sorted);
        }

        #[test]
        fn order_holds_after_every_mutation(ops in proptest::collection::vec(op(), 0..100)) {
            let mut heap = BinaryHeap::with_capacity_and_comparator(0, |a: &i32, b: &i32| b.cmp(a));
            let mut model = Vec::new();
            for op in ops {
                match op {
                    Op::Insert(v) => {
                        heap.insert(v);
                        model.push(v);
                    }
                    Op::DeleteRoot => {
                        model.sort();
                        prop_assert_eq!(heap.delete_root(), model.pop());
                    }
                }
                prop_assert!(is_heap_ordered(&heap));
                prop_assert_eq!(heap.len(), model.len());
            }
        }
    }
}
