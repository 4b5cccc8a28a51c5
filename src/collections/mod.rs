//! Container types used by the distance transform
//!
//! Author: Moroya Sakamoto

mod priority_queue;

pub use priority_queue::PriorityQueue;
