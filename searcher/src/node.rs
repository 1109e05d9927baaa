//! Search tree nodes.
//!
//! Each node remembers the state it reached, the action taken to
//! get there, the total cost from the root, and the node it was
//! expanded from. Nodes are never changed once built, so a single
//! parent can be shared by all of its children.

use std::rc::Rc;

use num::Zero;

use crate::traits::Problem;

/// Shared handle to a node for the states, actions and costs of a problem.
pub type NodeRef<P> =
    Rc<Node<<P as Problem>::State, <P as Problem>::Action, <P as Problem>::Cost>>;

/// A link in a search tree.
#[derive(Debug)]
pub struct Node<S, A, C> {
    state: S,
    parent: Option<Rc<Node<S, A, C>>>,
    action: Option<A>,
    cost: C,
}

impl<S, A, C> Node<S, A, C> {
    /// Build a node from all of its parts.
    pub fn new(state: S, parent: Option<Rc<Self>>, action: Option<A>, cost: C) -> Self {
        Self {
            state,
            parent,
            action,
            cost,
        }
    }

    /// A root node, with no parent, no action and zero cost.
    pub fn root(state: S) -> Self
    where
        C: Zero,
    {
        Self::new(state, None, None, C::zero())
    }

    /// A node reached from `parent` by taking `action`.
    ///
    /// `cost` is the cumulative cost from the root, not the step cost.
    pub fn child(parent: &Rc<Self>, state: S, action: A, cost: C) -> Self {
        Self::new(state, Some(Rc::clone(parent)), Some(action), cost)
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn parent(&self) -> Option<&Self> {
        self.parent.as_deref()
    }

    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    /// Cumulative cost from the root to this node.
    pub fn cost(&self) -> C
    where
        C: Copy,
    {
        self.cost
    }

    /// Number of steps from the root.
    pub fn depth(&self) -> usize {
        self.ancestors().count() - 1
    }

    /// Iterate from this node up to the root, this node first.
    pub fn ancestors(&self) -> Ancestors<'_, S, A, C> {
        Ancestors { next: Some(self) }
    }

    /// The actions which lead from the root to this node, in order.
    ///
    /// The root's own action, if it has one, is not part of the solution.
    pub fn solution(&self) -> Vec<A>
    where
        A: Clone,
    {
        let mut actions: Vec<A> = self
            .ancestors()
            .filter(|node| node.parent.is_some())
            .filter_map(|node| node.action.clone())
            .collect();
        actions.reverse();
        actions
    }
}

impl<S, A, C> Drop for Node<S, A, C> {
    fn drop(&mut self) {
        // Unlink the parent chain one node at a time, so that dropping
        // a very deep branch does not recurse once per ancestor.
        let mut parent = self.parent.take();
        while let Some(node) = parent {
            parent = match Rc::try_unwrap(node) {
                Ok(mut node) => node.parent.take(),
                Err(_) => None,
            };
        }
    }
}

/// Iterator over a node and its ancestors.
#[derive(Debug)]
pub struct Ancestors<'n, S, A, C> {
    next: Option<&'n Node<S, A, C>>,
}

impl<'n, S, A, C> Iterator for Ancestors<'n, S, A, C> {
    type Item = &'n Node<S, A, C>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.parent.as_deref();
        Some(node)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    type TestNode = Node<u8, char, u32>;

    #[test]
    fn root() {
        let root = TestNode::root(0);
        assert_eq!(root.state(), &0);
        assert_eq!(root.cost(), 0);
        assert_eq!(root.depth(), 0);
        assert!(root.parent().is_none());
        assert!(root.action().is_none());
        assert!(root.solution().is_empty());
    }

    #[test]
    fn solution() {
        let root = Rc::new(TestNode::root(0));
        let a = Rc::new(Node::child(&root, 1, 'a', 2));
        let b = Rc::new(Node::child(&a, 2, 'b', 5));
        let c = Node::child(&b, 3, 'c', 6);

        assert_eq!(c.solution(), vec!['a', 'b', 'c']);
        assert_eq!(c.depth(), 3);
        assert_eq!(c.cost(), 6);
        assert_eq!(c.parent().map(|p| *p.state()), Some(2));
        assert_eq!(
            c.ancestors().map(|n| *n.state()).collect::<Vec<_>>(),
            vec![3, 2, 1, 0]
        );
    }

    #[test]
    fn root_action_is_ignored() {
        let root = Rc::new(TestNode::new(0, None, Some('z'), 0));
        let child = Node::child(&root, 1, 'a', 1);
        assert_eq!(child.solution(), vec!['a']);
    }

    #[test]
    fn siblings_share_parent() {
        let root = Rc::new(TestNode::root(0));
        let left = Node::child(&root, 1, 'l', 1);
        let right = Node::child(&root, 2, 'r', 1);
        assert_eq!(Rc::strong_count(&root), 3);

        drop(left);
        assert_eq!(Rc::strong_count(&root), 2);
        assert_eq!(right.solution(), vec!['r']);
    }

    #[test]
    fn deep_chain_drops() {
        let mut node = Rc::new(Node::<u32, u32, u32>::root(0));
        for i in 1..200_000 {
            node = Rc::new(Node::child(&node, i, i, i));
        }
        assert_eq!(node.depth(), 199_999);
        drop(node);
    }
}
