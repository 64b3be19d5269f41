//! 二分ヒープ, UnionFind, 重み付きグラフと, それらを使う最短経路・最小全域木のアルゴリズム

pub mod binaryheap;
mod dijkstra;
pub mod error;
mod floydwarshall;
pub mod graph;
pub mod kruskal;
mod prim;
mod topologicalsort;
pub mod unionfind;
pub mod util;

pub use binaryheap::BinaryHeap;
pub use error::{Error, Result};
pub use graph::WeightedGraph;
pub use kruskal::{Edge, EdgeList};
pub use unionfind::UnionFind;
