use tracing::{debug, trace};

use crate::{
    priority_queue::{PriorityQueue, Weighted},
    Alphabet, FrequencyTable, HuffmanError, Result, Symbol,
};

// Children are owned, the whole tree is released by one recursive drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    Leaf {
        weight: u64,
        symbol: S,
    },
    Internal {
        weight: u64,
        left: Box<Node<S>>,
        right: Box<Node<S>>,
    },
}

impl<S: Symbol> Node<S> {
    pub fn leaf(symbol: S, weight: u64) -> Self {
        Node::Leaf { weight, symbol }
    }

    /// Joins two subtrees under a new parent; `left` gets bit `0`, `right` gets bit `1`.
    pub fn merge(left: Self, right: Self) -> Self {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[inline(always)]
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Sum of the leaf weights below this node, or `None` as soon as an internal node's
    /// weight differs from the sum of its children.
    fn conserved_weight(&self) -> Option<u64> {
        match self {
            Node::Leaf { weight, .. } => Some(*weight),
            Node::Internal { weight, left, right } => {
                let sum = left.conserved_weight()? + right.conserved_weight()?;
                (sum == *weight).then_some(sum)
            }
        }
    }
}

impl<S: Symbol> Weighted for Node<S> {
    #[inline(always)]
    fn weight(&self) -> u64 {
        Node::weight(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S = u8> {
    alphabet: Alphabet,
    root: Node<S>,
}

impl<S: Symbol> HuffmanTree<S> {
    /// Builds the tree for `frequencies`.
    ///
    /// The queue is seeded with one leaf per nonzero symbol in ascending symbol order.
    /// The two lightest nodes are then merged, first pop on the left, until a single
    /// node is left. With one distinct symbol that leaf is the root.
    pub fn from_frequencies(frequencies: &FrequencyTable<S>) -> Result<Self> {
        let mut queue = PriorityQueue::with_capacity(frequencies.alphabet());

        for (symbol, count) in frequencies.iter_nonzero() {
            queue.push(Node::leaf(symbol, count))?;
        }

        if queue.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }

        debug!(distinct = queue.len(), total = frequencies.total(), "seeded the priority queue");

        while queue.len() > 1 {
            let left = queue
                .pop()
                .ok_or(HuffmanError::QueueUnderflow { operation: "popping the left node of a merge" })?;
            let right = queue
                .pop()
                .ok_or(HuffmanError::QueueUnderflow { operation: "popping the right node of a merge" })?;

            trace!(left = left.weight(), right = right.weight(), "merging");

            queue.push(Node::merge(left, right))?;
        }

        let root = queue
            .pop()
            .ok_or(HuffmanError::QueueUnderflow { operation: "taking the root" })?;

        let tree = Self { alphabet: frequencies.alphabet(), root };
        debug!(weight = tree.weight(), depth = tree.depth(), leaves = tree.leaf_count(), "built the Huffman tree");

        Ok(tree)
    }

    pub fn from_symbols(input: &[S], alphabet: Alphabet) -> Result<Self> {
        Self::from_frequencies(&FrequencyTable::from_symbols(input, alphabet)?)
    }

    #[inline(always)]
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    #[inline(always)]
    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    #[inline(always)]
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Checks that every internal weight is the sum of its children's weights.
    pub fn check_weights(&self) -> bool {
        self.root.conserved_weight() == Some(self.root.weight())
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![(&self.root, 0, "root")];

        while let Some((node, depth, label)) = stack.pop() {
            let indent = "  ".repeat(depth);
            match node {
                Node::Leaf { weight, symbol } => {
                    out.push_str(&format!("{indent}{label}: leaf {symbol} [weight {weight}]\n"));
                }
                Node::Internal { weight, left, right } => {
                    out.push_str(&format!("{indent}{label}: internal [weight {weight}]\n"));
                    stack.push((&**right, depth + 1, "1"));
                    stack.push((&**left, depth + 1, "0"));
                }
            }
        }

        out
    }
}
