//! Path search over maze graphs.
//!
//! This crate runs the classic search strategies over any
//! [`labyrinth_core::Graph`]:
//!
//! - **Depth-first** search with an explicit stack ([`PathFinder::dfs`])
//! - **Dijkstra** with unit edge costs ([`PathFinder::dijkstra`])
//! - **A\*** with the Manhattan cell distance ([`PathFinder::astar`])
//! - **Reachability** flood fill ([`PathFinder::reachable`])
//!
//! Each search also has a `_with_trace` form returning the vertices in the
//! order they were finalized, for step-by-step replay.
//!
//! All searches go through [`PathFinder`], which owns and reuses its
//! per-vertex tables so that repeated queries avoid reallocation.
//!
//! # Search outcomes
//!
//! | Outcome | Path | Trace |
//! |---|---|---|
//! | goal finalized | `Some(start..=goal)` | every finalized vertex, goal last |
//! | frontier exhausted | `None` | the whole component of `start` |
//! | unknown endpoint | `None` | empty |

mod astar;
mod dfs;
mod dijkstra;
mod distance;
mod finder;
mod reach;

#[cfg(test)]
mod testutil;

pub use distance::manhattan;
pub use finder::{Outcome, Path, PathFinder, Trace};
