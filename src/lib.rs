//! Ordered sequence containers with single-owner storage.
//!
//! Three interchangeable containers implement one contract
//! ([`Sequence`]) with three storage disciplines:
//!
//! - [`DynamicArray`]: contiguous buffer with doubling growth
//! - [`SinglyChain`]: forward chain of exclusively owned nodes
//! - [`DoublyChain`]: forward-owned chain with non-owning back
//!   references for local bidirectional reach
//!
//! ```rust
//! use seqland::{DoublyChain, DynamicArray, Sequence, SinglyChain};
//!
//! fn fill(seq: &mut impl Sequence<i32>) {
//!     for i in 0..10 {
//!         seq.push_back(i);
//!     }
//!     seq.insert(0, 10).unwrap();
//!     seq.remove(4).unwrap();
//! }
//!
//! let mut arr = DynamicArray::new();
//! let mut sl = SinglyChain::new();
//! let mut dl = DoublyChain::new();
//! fill(&mut arr);
//! fill(&mut sl);
//! fill(&mut dl);
//! assert!(arr.iter().eq(sl.iter()));
//! assert!(sl.iter().eq(dl.iter()));
//! ```
//!
//! All three expose index-ordered forward iteration, deep copies via
//! [`Clone`], and the usual "moved-from container is valid and empty"
//! behavior through [`Default`] + [`std::mem::take`]. A cursor obtained
//! before a structural mutation cannot be used afterwards; the borrow
//! checker enforces the invalidation rule at compile time.
//!
//! Out-of-range positions surface as [`IndexOutOfRange`] and leave the
//! container untouched; the indexing operators panic instead, like the
//! std collections. Enable the `serde` feature for `Serialize` /
//! `Deserialize` on all three containers.

#![warn(clippy::pedantic)]
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::module_name_repetitions)]

pub mod doubly_chain;
pub mod dynamic_array;
pub mod sequence;
pub mod singly_chain;

pub use doubly_chain::DoublyChain;
pub use dynamic_array::DynamicArray;
pub use sequence::{IndexOutOfRange, Sequence};
pub use singly_chain::SinglyChain;
