use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;

use crate::graph::Neighbor;

/// Edge weight usable by route graphs and shortest-path algorithms.
///
/// Weights are expected to be non-negative. This is not checked; negative
/// weights make shortest distances meaningless.
pub trait Weight: Copy + Ord + Hash + Debug + Zero {
    /// Adds two weights, returning `None` if the sum is not representable
    fn checked_sum(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &rhs)
                }
            }
        )*
    };
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for OrderedFloat<$t> {
                // Finite operands summing to infinity count as overflow
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    let sum = self + rhs;
                    if sum.is_infinite() && self.is_finite() && rhs.is_finite() {
                        None
                    } else {
                        Some(sum)
                    }
                }
            }
        )*
    };
}

impl_float_weight!(f32, f64);

/// Read-only view of an undirected network of named nodes
pub trait RouteNetwork<W>: Debug
where
    W: Weight,
{
    /// Returns the number of nodes that have an adjacency entry
    fn node_count(&self) -> usize;

    /// Returns the number of stored neighbor records (each edge counts once per endpoint)
    fn edge_count(&self) -> usize;

    /// Returns the neighbor records of `node`, or `None` if it has no adjacency entry
    fn neighbors_of(&self, node: &str) -> Option<Box<dyn Iterator<Item = &Neighbor<W>> + '_>>;

    /// Returns true if the node has an adjacency entry
    fn has_node(&self, node: &str) -> bool;
}
