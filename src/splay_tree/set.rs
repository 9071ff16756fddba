use crate::splay_tree::node::Node;
use crate::splay_tree::tree;
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using a splay tree.
///
/// A splay tree is a self-adjusting binary search tree with the additional property that recently
/// accessed keys are quick to access again. Every `add`, `contains` and `remove` splays the
/// accessed key (or its nearest neighbour when the key is absent) to the root of the tree, which
/// gives amortized logarithmic cost per operation. A single operation can still take linear time.
///
/// # Examples
///
/// ```
/// use splay_set::splay_tree::SplaySet;
///
/// let mut set = SplaySet::new();
/// set.add(0);
/// set.add(3);
///
/// assert!(set.contains(&3));
/// assert_eq!(set.root(), Some(&3));
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
///
/// assert!(set.remove(&0));
/// assert!(!set.remove(&1));
/// ```
pub struct SplaySet<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> SplaySet<T> {
    /// Constructs a new, empty `SplaySet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::splay_tree::SplaySet;
    ///
    /// let set: SplaySet<u32> = SplaySet::new();
    /// ```
    pub fn new() -> Self {
        SplaySet { tree: None, len: 0 }
    }

    /// Inserts a key into the set and splays it to the root. Returns `true` if the key was not
    /// already present. Adding an existing key leaves the set unchanged apart from the splay.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// assert!(set.add(1));
    /// assert!(!set.add(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn add(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        let added = tree::insert(&mut self.tree, key);
        if added {
            self.len += 1;
        }
        added
    }

    /// Checks if a key exists in the set. The key, or its nearest neighbour if the key is absent,
    /// is splayed to the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.add(1);
    /// set.add(2);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// assert_eq!(set.root(), Some(&1));
    /// ```
    pub fn contains<V>(&mut self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::contains(&mut self.tree, key)
    }

    /// Removes a key from the set. Returns `true` if the key was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.add(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.take(key).is_some()
    }

    /// Removes a key from the set and returns it. Returns `None` if the key was not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.add(String::from("a"));
    /// assert_eq!(set.take("a"), Some(String::from("a")));
    /// assert_eq!(set.take("a"), None);
    /// ```
    pub fn take<V>(&mut self, key: &V) -> Option<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let ret = tree::remove(&mut self.tree, key);
        if ret.is_some() {
            self.len -= 1;
        }
        ret
    }

    /// Removes and returns the minimum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.add(1);
    /// set.add(3);
    /// assert_eq!(set.pop_min(), Some(1));
    /// assert_eq!(set.pop_min(), Some(3));
    /// assert_eq!(set.pop_min(), None);
    /// ```
    pub fn pop_min(&mut self) -> Option<T> {
        let ret = tree::remove_min(&mut self.tree);
        if ret.is_some() {
            self.len -= 1;
        }
        ret
    }

    /// Removes and returns the maximum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.add(1);
    /// set.add(3);
    /// assert_eq!(set.pop_max(), Some(3));
    /// assert_eq!(set.pop_max(), Some(1));
    /// assert_eq!(set.pop_max(), None);
    /// ```
    pub fn pop_max(&mut self) -> Option<T> {
        let ret = tree::remove_max(&mut self.tree);
        if ret.is_some() {
            self.len -= 1;
        }
        ret
    }

    /// Returns the key at the root of the tree, which is the most recently splayed key.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// assert_eq!(set.root(), None);
    /// set.add(1);
    /// set.add(2);
    /// set.contains(&1);
    /// assert_eq!(set.root(), Some(&1));
    /// ```
    pub fn root(&self) -> Option<&T> {
        self.tree.as_ref().map(|node| &node.key)
    }

    /// Returns the number of keys in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the set, removing all keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.add(1);
    /// set.add(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        tree::clear(&mut self.tree);
        self.len = 0;
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist. Note that `floor` does not splay the tree in order to use a
    /// non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.add(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::floor(&self.tree, key)
    }

    /// Returns a key in the set that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist. Note that `ceil` does not splay the tree in order to use a
    /// non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.add(1);
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::ceil(&self.tree, key)
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty. Note that `min`
    /// does not splay the tree.
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty. Note that `max`
    /// does not splay the tree.
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Returns all keys of the set in ascending order. The shape of the tree is not changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.add(2);
    /// set.add(1);
    /// assert_eq!(set.traverse(), vec![&1, &2]);
    /// ```
    pub fn traverse(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.add(1);
    /// set.add(2);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> SplaySetIter<'_, T> {
        SplaySetIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }
}

impl<T> Drop for SplaySet<T> {
    fn drop(&mut self) {
        tree::clear(&mut self.tree);
    }
}

impl<T> IntoIterator for SplaySet<T> {
    type IntoIter = SplaySetIntoIter<T>;
    type Item = T;

    fn into_iter(mut self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree.take(),
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SplaySet<T>
where
    T: 'a,
{
    type IntoIter = SplaySetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `SplaySet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct SplaySetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for SplaySetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { key, right, .. } = node;
            self.current = right;
            key
        })
    }
}

impl<T> Drop for SplaySetIntoIter<T> {
    fn drop(&mut self) {
        tree::clear(&mut self.current);
        while let Some(node) = self.stack.pop() {
            let Node { mut right, .. } = node;
            tree::clear(&mut right);
        }
    }
}

/// An iterator for `SplaySet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct SplaySetIter<'a, T>
where
    T: 'a,
{
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for SplaySetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            &node.key
        })
    }
}

impl<T> Default for SplaySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SplaySet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = SplaySet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for SplaySet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.add(key);
        }
    }
}

impl<T> fmt::Display for SplaySet<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(key) = iter.next() {
            write!(f, "{}", key)?;
            for key in iter {
                write!(f, " {}", key)?;
            }
        }
        Ok(())
    }
}

impl<T> fmt::Debug for SplaySet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
