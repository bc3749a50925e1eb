/*!
# Vertex Partitions

A [`Partition`] splits the vertex ids `0..n` into disjoint classes; vertices may also
remain unassigned. It is the result type of the strongly-connected-components
computation, where every class is one component.

```rust
use wgraphs::algo::Partition;

let mut part = Partition::new(5);
let c0 = part.add_class([0, 1]);
let c1 = part.add_class([3, 2]);

assert_eq!(part.number_of_classes(), 2);
assert_eq!(part.members_of_class(c1), &[3, 2]);
assert!(part.same_class(0, 1));
assert_eq!(part.class_of_node(4), None);
assert_eq!(part.class_of_edge(0, 1), Some(c0));
```
*/

use itertools::Itertools;

use super::*;

/// Classes are numbered consecutively from `0` in the order they were added
pub type PartitionClass = NumNodes;

/// A partition of the vertex ids `0..n` into disjoint classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    class_of: Vec<Option<OptionalNode>>,
    members: Vec<Vec<Node>>,
    unassigned: NumNodes,
}

impl Partition {
    /// Creates a partition over `n` vertices, all unassigned.
    pub fn new(n: NumNodes) -> Self {
        Self {
            class_of: vec![None; n as usize],
            members: Vec::new(),
            unassigned: n,
        }
    }

    /// Creates a new class containing `nodes` and returns its id.
    ///
    /// # Panics
    /// Panics if a node is already assigned to a class.
    pub fn add_class<I>(&mut self, nodes: I) -> PartitionClass
    where
        I: IntoIterator<Item = Node>,
    {
        let class_id = self.members.len() as PartitionClass;
        let members = nodes.into_iter().collect_vec();

        for &u in &members {
            let slot = &mut self.class_of[u as usize];
            assert!(slot.is_none(), "node {u} is assigned twice");
            *slot = OptionalNode::new(class_id);
        }

        self.unassigned -= members.len() as NumNodes;
        self.members.push(members);
        class_id
    }

    /// Returns the class of `node`, `None` if unassigned
    pub fn class_of_node(&self, node: Node) -> Option<PartitionClass> {
        self.class_of[node as usize].map(|c| c.get())
    }

    /// Returns the common class of `u` and `v`, `None` if they are in different classes
    /// or one of them is unassigned
    pub fn class_of_edge(&self, u: Node, v: Node) -> Option<PartitionClass> {
        let cu = self.class_of_node(u)?;
        (self.class_of_node(v)? == cu).then_some(cu)
    }

    /// Returns *true* if `u` and `v` are assigned to the same class
    pub fn same_class(&self, u: Node, v: Node) -> bool {
        self.class_of_edge(u, v).is_some()
    }

    pub fn number_of_classes(&self) -> NumNodes {
        self.members.len() as NumNodes
    }

    pub fn number_of_unassigned(&self) -> NumNodes {
        self.unassigned
    }

    pub fn number_in_class(&self, class_id: PartitionClass) -> NumNodes {
        self.members[class_id as usize].len() as NumNodes
    }

    /// Returns the members of a class in the order they were added
    pub fn members_of_class(&self, class_id: PartitionClass) -> &[Node] {
        &self.members[class_id as usize]
    }

    /// Returns an iterator over all classes in the order they were added
    pub fn classes(&self) -> impl Iterator<Item = &[Node]> + '_ {
        self.members.iter().map(Vec::as_slice)
    }

    /// Returns all classes with their members sorted increasingly and the classes
    /// ordered by their smallest member
    pub fn sorted_classes(&self) -> Vec<Vec<Node>> {
        self.members
            .iter()
            .map(|class| class.iter().copied().sorted_unstable().collect_vec())
            .sorted_unstable_by_key(|class| class.first().copied())
            .collect()
    }
}

/// Builds a [`Partition`] from a collection of classes.
pub trait IntoPartition {
    /// Consumes the classes and builds a partition over `n` vertices.
    ///
    /// ```rust
    /// use wgraphs::algo::IntoPartition;
    ///
    /// let part = vec![vec![2, 0], vec![1]].into_partition(4);
    /// assert_eq!(part.number_of_unassigned(), 1);
    /// assert_eq!(part.class_of_edge(0, 2), Some(0));
    /// ```
    fn into_partition(self, n: NumNodes) -> Partition;
}

impl<N, I> IntoPartition for I
where
    N: IntoIterator<Item = Node>,
    I: IntoIterator<Item = N>,
{
    fn into_partition(self, n: NumNodes) -> Partition {
        let mut partition = Partition::new(n);
        for class in self {
            partition.add_class(class);
        }
        partition
    }
}
