use crate::splay_tree::node::Node;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

#[derive(Clone, Copy)]
enum Step {
    Zig,
    ZigZig,
    ZigZag,
}

// Hangs `node` off the maximum of the tree of keys smaller than the target. Returns the new
// grafting point, which is the right child of `node`.
fn link_left<T>(max_left: &mut Tree<T>, node: Box<Node<T>>) -> &mut Tree<T> {
    debug_assert!(max_left.is_none());
    &mut max_left.insert(node).right
}

// Hangs `node` off the minimum of the tree of keys larger than the target. Returns the new
// grafting point, which is the left child of `node`.
fn link_right<T>(min_right: &mut Tree<T>, node: Box<Node<T>>) -> &mut Tree<T> {
    debug_assert!(min_right.is_none());
    &mut min_right.insert(node).left
}

/// Top-down splay. `target` reports how the searched position compares to a given key. The
/// descent stops at a node comparing `Equal` or when the required child is empty, and that node
/// becomes the root.
fn splay_by<T, F>(node: &mut Box<Node<T>>, mut target: F)
where
    F: FnMut(&T) -> Ordering,
{
    let mut left_tree: Tree<T> = None;
    let mut right_tree: Tree<T> = None;
    let mut steps = [0usize; 3];
    {
        let mut max_left = &mut left_tree;
        let mut min_right = &mut right_tree;
        loop {
            match target(&node.key) {
                Ordering::Less => {
                    let step = match node.left {
                        Some(ref child) => match target(&child.key) {
                            Ordering::Less if child.left.is_some() => Step::ZigZig,
                            Ordering::Greater if child.right.is_some() => Step::ZigZag,
                            _ => Step::Zig,
                        },
                        None => break,
                    };

                    if let Step::ZigZig = step {
                        node.rotate_right();
                    }
                    if let Some(child) = node.left.take() {
                        min_right = link_right(min_right, mem::replace(node, child));
                    }
                    if let Step::ZigZag = step {
                        if let Some(grandchild) = node.right.take() {
                            max_left = link_left(max_left, mem::replace(node, grandchild));
                        }
                    }
                    steps[step as usize] += 1;
                },
                Ordering::Greater => {
                    let step = match node.right {
                        Some(ref child) => match target(&child.key) {
                            Ordering::Greater if child.right.is_some() => Step::ZigZig,
                            Ordering::Less if child.left.is_some() => Step::ZigZag,
                            _ => Step::Zig,
                        },
                        None => break,
                    };

                    if let Step::ZigZig = step {
                        node.rotate_left();
                    }
                    if let Some(child) = node.right.take() {
                        max_left = link_left(max_left, mem::replace(node, child));
                    }
                    if let Step::ZigZag = step {
                        if let Some(grandchild) = node.left.take() {
                            min_right = link_right(min_right, mem::replace(node, grandchild));
                        }
                    }
                    steps[step as usize] += 1;
                },
                Ordering::Equal => break,
            }
        }

        mem::swap(max_left, &mut node.left);
        mem::swap(min_right, &mut node.right);
    }

    node.left = left_tree;
    node.right = right_tree;
    trace!(
        "splay finished: {} zig, {} zig-zig, {} zig-zag",
        steps[Step::Zig as usize],
        steps[Step::ZigZig as usize],
        steps[Step::ZigZag as usize]
    );
}

fn splay<T, V>(node: &mut Box<Node<T>>, key: &V)
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    splay_by(node, |other| key.cmp(other.borrow()));
}

fn splay_min<T>(node: &mut Box<Node<T>>) {
    splay_by(node, |_| Ordering::Less);
}

fn splay_max<T>(node: &mut Box<Node<T>>) {
    splay_by(node, |_| Ordering::Greater);
}

pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    match tree {
        Some(ref mut node) => {
            splay(node, &key);
            let mut new_node = Node::new(key);
            match new_node.key.cmp(&node.key) {
                Ordering::Less => {
                    new_node.left = node.left.take();
                    mem::swap(&mut **node, &mut new_node);
                    node.right = Some(Box::new(new_node));
                    true
                },
                Ordering::Greater => {
                    new_node.right = node.right.take();
                    mem::swap(&mut **node, &mut new_node);
                    node.left = Some(Box::new(new_node));
                    true
                },
                Ordering::Equal => false,
            }
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            true
        },
    }
}

pub fn contains<T, V>(tree: &mut Tree<T>, key: &V) -> bool
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    match tree {
        Some(ref mut node) => {
            splay(node, key);
            node.key.borrow() == key
        },
        None => false,
    }
}

// Deletes the root, joining its subtrees by splaying the extreme key of one of them to the top.
fn remove_root<T>(tree: &mut Tree<T>) -> Option<T> {
    let Node { key, left, right } = *tree.take()?;
    *tree = match (left, right) {
        (Some(mut left_child), right) => {
            splay_max(&mut left_child);
            trace!("removed root, promoted maximum of left subtree");
            left_child.right = right;
            Some(left_child)
        },
        (None, Some(mut right_child)) => {
            splay_min(&mut right_child);
            trace!("removed root, promoted minimum of right subtree");
            Some(right_child)
        },
        (None, None) => None,
    };
    Some(key)
}

pub fn remove<T, V>(tree: &mut Tree<T>, key: &V) -> Option<T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    if !contains(tree, key) {
        return None;
    }
    remove_root(tree)
}

pub fn remove_min<T>(tree: &mut Tree<T>) -> Option<T> {
    splay_min(tree.as_mut()?);
    remove_root(tree)
}

pub fn remove_max<T>(tree: &mut Tree<T>) -> Option<T> {
    splay_max(tree.as_mut()?);
    remove_root(tree)
}

/// Drops every node of the tree. Each left child is rotated up before its parent is released,
/// so the stack depth stays constant regardless of the shape of the tree.
pub fn clear<T>(tree: &mut Tree<T>) {
    let mut curr = tree.take();
    while let Some(mut node) = curr {
        curr = if node.left.is_some() {
            node.rotate_right();
            Some(node)
        } else {
            node.right.take()
        };
    }
}

pub fn ceil<'a, T, V>(tree: &'a Tree<T>, key: &V) -> Option<&'a T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    let mut ret = None;
    while let Some(ref node) = curr {
        match key.cmp(node.key.borrow()) {
            Ordering::Greater => curr = &node.right,
            Ordering::Less => {
                ret = Some(&node.key);
                curr = &node.left;
            },
            Ordering::Equal => return Some(&node.key),
        }
    }
    ret
}

pub fn floor<'a, T, V>(tree: &'a Tree<T>, key: &V) -> Option<&'a T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    let mut ret = None;
    while let Some(ref node) = curr {
        match key.cmp(node.key.borrow()) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => {
                ret = Some(&node.key);
                curr = &node.right;
            },
            Ordering::Equal => return Some(&node.key),
        }
    }
    ret
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}
