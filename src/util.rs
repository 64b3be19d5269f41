/// 「0」に相当する値が存在することを表すトレイト
pub trait HasZero {
    /// 0の値を返す
    fn zero() -> Self;
}

/// 溢れを検出できる加法を持つことを表すトレイト
pub trait CheckedAdd: Sized {
    /// 和を返す. 型で表せない場合はNoneを返す
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

/// 整数型にHasZero, CheckedAddを実装するマクロ
macro_rules! impl_zero {
    ($($t: ty),*) => {$(
        impl HasZero for $t {
            fn zero() -> $t { 0 }
        }
        impl CheckedAdd for $t {
            fn checked_add(self, rhs: $t) -> Option<$t> { <$t>::checked_add(self, rhs) }
        }
    )*};
}

impl_zero! { u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize }

/// 辺のコストとして使える型
///
/// 最短経路や最小全域木のアルゴリズムは, コストの比較と和と「0」だけを使う.
/// 経路長の和が型で表せなくなった場合, その経路は無かったものとして扱う.
pub trait Weight: Copy + Ord + HasZero + CheckedAdd + std::ops::Add<Output = Self> {}
impl<T: Copy + Ord + HasZero + CheckedAdd + std::ops::Add<Output = T>> Weight for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_add() {
        assert_eq!(CheckedAdd::checked_add(3i32, 4), Some(7));
        assert_eq!(CheckedAdd::checked_add(i32::MAX, 1), None);
        assert_eq!(CheckedAdd::checked_add(u8::MAX, 0), Some(u8::MAX));
        assert_eq!(CheckedAdd::checked_add(1usize, usize::MAX), None);
    }
}
