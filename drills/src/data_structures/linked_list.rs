//! Singly-linked list with heap nodes and a tail pointer.
//!
//! Nodes are allocated with `Box` and then owned through raw pointers, so
//! `head`, every `next` link and `tail` may alias without ever moving a `Box`.
//! Ownership is returned to a `Box` exactly once, in `pop_front`.
//!
//! Variables:
//!   head : Option<NonNull<Node<T>>> — first node, owns the rest of the chain
//!   tail : Option<NonNull<Node<T>>> — last node, aliases the end of the chain
//!   N    : usize                    — number of nodes
//!
//! Equations:
//!   push_back(x):  tail.next = new_node,  tail = new_node,  N' = N+1   O(1)
//!   pop_front():   head = head.next,  N' = N-1                          O(1)
//!   push_front(x): new_node.next = head,  head = new_node,  N' = N+1   O(1)
//!
//!   invariant: N == 0  <=>  head == None && tail == None
//!              tail == head.next^(N-1)

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    val: T,
    next: Link<T>,
}

pub struct LinkedList<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _owns: PhantomData<Box<Node<T>>>,
}

// Every node is uniquely owned by the list, so thread-safety follows the
// element type exactly as for `Box<Node<T>>`.
unsafe impl<T: Send> Send for LinkedList<T> {}
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _owns: PhantomData,
        }
    }

    pub fn push_back(&mut self, val: T) {
        let node = NonNull::from(Box::leak(Box::new(Node { val, next: None })));
        match self.tail {
            None => self.head = Some(node),
            Some(tail) => {
                // SAFETY:
                // - `tail` came from `Box::leak` and is freed only by `pop_front`
                //   or `Drop`, neither of which has run for it
                // - &mut self guarantees no outstanding borrows into the chain
                unsafe { (*tail.as_ptr()).next = Some(node) };
            }
        }
        self.tail = Some(node);
        self.len += 1;
    }

    pub fn push_front(&mut self, val: T) {
        let node = NonNull::from(Box::leak(Box::new(Node {
            val,
            next: self.head,
        })));
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|head| {
            // SAFETY: `head` was leaked from a `Box` by a push and is unlinked
            // here before being reclaimed, so it is reclaimed exactly once.
            let node = unsafe { Box::from_raw(head.as_ptr()) };
            self.head = node.next;
            if self.head.is_none() {
                self.tail = None;
            }
            self.len -= 1;
            node.val
        })
    }

    pub fn peek_front(&self) -> Option<&T> {
        // SAFETY: `head` is either None or a live node; the borrow is tied to &self.
        self.head.map(|head| unsafe { &(*head.as_ptr()).val })
    }

    pub fn peek_back(&self) -> Option<&T> {
        // SAFETY: `tail` is either None or a live node; the borrow is tied to &self.
        self.tail.map(|tail| unsafe { &(*tail.as_ptr()).val })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            _list: PhantomData,
        }
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for val in iter {
            self.push_back(val);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

pub struct Iter<'a, T> {
    next: Link<T>,
    _list: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            // SAFETY: the list is borrowed for 'a, so no node is freed or
            // mutated while this iterator lives.
            let node = unsafe { &*node.as_ptr() };
            self.next = node.next;
            &node.val
        })
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
