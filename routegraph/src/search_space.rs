use crate::graph::*;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use tracing::trace;

#[derive(Copy, Clone, Eq, PartialEq)]
struct State<W: Weight, N: Identifier> {
  cost: W,
  id: N,
}

impl<W: Weight, N: Identifier> Ord for State<W, N> {
  fn cmp(&self, other: &Self) -> Ordering {
    // Sorted desc, so the heap pops the cheapest state first
    other.cost.cmp(&self.cost)
  }
}

impl<W: Weight, N: Identifier> PartialOrd for State<W, N> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

/// Dijkstra search space: a priority queue of discovered nodes and, for every discovered node,
/// the best known cost from the origin together with the parent it was reached from.
pub struct SearchSpace<W: Weight, N: Identifier> {
  pq: BinaryHeap<State<W, N>>,
  // node -> (best cost, parent)
  resolved: HashMap<N, State<W, N>>,
  settled: usize,
}

impl<W: Weight, N: Identifier> SearchSpace<W, N> {
  pub fn new() -> Self {
    SearchSpace {
      pq: BinaryHeap::new(),
      resolved: HashMap::new(),
      settled: 0,
    }
  }

  pub fn init(&mut self, node: N) {
    self.resolve(node, node, Default::default());
  }

  /// Best known cost of a discovered node
  pub fn cost(&self, node: N) -> Option<W> {
    self.resolved.get(&node).map(|state| state.cost)
  }

  /// Number of nodes settled so far
  pub fn settled(&self) -> usize {
    self.settled
  }

  /// Follows parents from `node` back to the origin. The result starts at `node`.
  pub fn unwind(&self, node: N) -> Vec<N> {
    let mut result: Vec<N> = Vec::new();

    let mut current_node = node;
    while let Some(state) = self.resolved.get(&current_node) {
      result.push(current_node);
      if current_node == state.id {
        break;
      }
      current_node = state.id;
    }
    result
  }

  /// Settles the cheapest queued node and relaxes its neighbors.
  ///
  /// Returns the settled node with its final cost, or `None` once the queue is exhausted.
  pub fn update<G>(&mut self, graph: G) -> Option<(N, W)>
  where
    G: Copy + Weighted<Weight = W> + IntoNeighbors<NodeId = N>,
  {
    while let Some(State { cost, id }) = self.pq.pop() {
      if let Some(resolved) = self.resolved.get(&id) {
        if cost > resolved.cost {
          // A cheaper entry for this node was already settled
          continue;
        }
      }

      for target_id in graph.neighbors(id) {
        let path_cost: W = cost + graph.transition_weight(id, target_id);
        if let Some(target_state) = self.resolved.get(&target_id) {
          if path_cost >= target_state.cost {
            continue;
          }
        }
        trace!(from = ?id, to = ?target_id, cost = ?path_cost, "relax");
        self.resolve(target_id, id, path_cost);
      }

      self.settled += 1;
      return Some((id, cost));
    }
    None
  }

  // Overwrites any previous entry: callers only get here with a strictly cheaper cost
  fn resolve(&mut self, node: N, parent_node: N, path_cost: W) {
    self.resolved.insert(
      node,
      State {
        cost: path_cost,
        id: parent_node,
      },
    );
    self.pq.push(State {
      cost: path_cost,
      id: node,
    });
  }
}
