//! Bounded enumeration and ranking of tilings for one candidate group.
//!
//! Nodes live in an arena and refer to their parent by index. Each leaf,
//! walked back to the root, is one tiling of the group.

use std::cmp::Ordering;

use log::trace;

use crate::dictionary::Candidate;

/// Maximum number of leaves recorded for one group.
pub const LEAF_LIMIT: usize = 8192;

#[derive(Clone, Copy, Debug)]
struct Node {
    /// Index into the group's candidates
    candidate: usize,
    parent: Option<usize>,
    words: usize,
    /// Characters not covered by any word of the tiling
    gaps: usize,
    singles: usize,
    frequency: f64,
}

/// Tilings of one group of position-sorted candidates.
#[derive(Debug)]
pub struct TilingTree<'a> {
    candidates: &'a [Candidate],
    nodes: Vec<Node>,
    leaves: Vec<usize>,
    truncated: bool,
}

impl<'a> TilingTree<'a> {
    /// Enumerate tilings of `candidates` over the span `start..end`.
    ///
    /// Children of a node are all candidates starting at the first position at
    /// or after the node's end. At most [`LEAF_LIMIT`] leaves are recorded.
    pub fn build(candidates: &'a [Candidate], start: usize, end: usize) -> Self {
        debug_assert!(candidates.windows(2).all(|w| w[0].position <= w[1].position));
        debug_assert!(candidates.iter().all(|c| c.position >= start && c.end() <= end));

        let mut tree = TilingTree {
            candidates,
            nodes: Vec::new(),
            leaves: Vec::new(),
            truncated: false,
        };
        if candidates.is_empty() {
            return tree;
        }

        // (candidate index, parent node)
        let mut stack: Vec<(usize, Option<usize>)> = Vec::new();
        tree.push_children(&mut stack, start, None);

        while let Some((index, parent)) = stack.pop() {
            let candidate = &candidates[index];
            let (parent_end, base) = match parent {
                Some(p) => {
                    let node = &tree.nodes[p];
                    (candidates[node.candidate].end(), *node)
                }
                None => (
                    start,
                    Node {
                        candidate: index,
                        parent: None,
                        words: 0,
                        gaps: 0,
                        singles: 0,
                        frequency: 0.0,
                    },
                ),
            };

            let mut node = Node {
                candidate: index,
                parent,
                words: base.words + 1,
                gaps: base.gaps + (candidate.position - parent_end),
                singles: base.singles + usize::from(candidate.length == 1),
                frequency: base.frequency + candidate.attr.frequency,
            };

            let id = tree.nodes.len();
            if tree.push_children(&mut stack, candidate.end(), Some(id)) {
                tree.nodes.push(node);
                continue;
            }

            node.gaps += end - candidate.end();
            tree.nodes.push(node);
            tree.leaves.push(id);
            if tree.leaves.len() >= LEAF_LIMIT {
                tree.truncated = !stack.is_empty();
                if tree.truncated {
                    trace!(
                        "Tiling enumeration stopped at {} leaves over {} candidates",
                        LEAF_LIMIT,
                        candidates.len()
                    );
                }
                break;
            }
        }

        tree
    }

    /// Push every candidate starting at the first position at or after
    /// `cursor`, so that the longest one is popped first. Returns false if
    /// there is none.
    fn push_children(
        &self,
        stack: &mut Vec<(usize, Option<usize>)>,
        cursor: usize,
        parent: Option<usize>,
    ) -> bool {
        let first = self.candidates.partition_point(|c| c.position < cursor);
        let Some(position) = self.candidates.get(first).map(|c| c.position) else {
            return false;
        };
        let last = first
            + self.candidates[first..]
                .iter()
                .take_while(|c| c.position == position)
                .count();
        stack.extend((first..last).map(|index| (index, parent)));
        true
    }

    /// Sort leaves best first. The sort is stable.
    pub fn rank(&mut self, frequency_first: bool) {
        let nodes = &self.nodes;
        self.leaves
            .sort_by(|&a, &b| compare(&nodes[a], &nodes[b], frequency_first));
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// True if the leaf limit cut the enumeration short.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Candidate indices of the `rank`-th leaf's tiling, in position order.
    pub fn tiling(&self, rank: usize) -> Vec<usize> {
        let mut indices = Vec::new();
        let mut current = self.leaves.get(rank).copied();
        while let Some(id) = current {
            let node = &self.nodes[id];
            indices.push(node.candidate);
            current = node.parent;
        }
        indices.reverse();
        indices
    }
}

/// Fewer gap characters, then fewer words, then either higher frequency and
/// fewer single-character words or the reverse, depending on `frequency_first`.
fn compare(a: &Node, b: &Node, frequency_first: bool) -> Ordering {
    let by_frequency = b.frequency.total_cmp(&a.frequency);
    let by_singles = a.singles.cmp(&b.singles);

    a.gaps.cmp(&b.gaps).then(a.words.cmp(&b.words)).then(if frequency_first {
        by_frequency.then(by_singles)
    } else {
        by_singles.then(by_frequency)
    })
}
