//! Test fixtures shared by the unit test modules.

use std::cell::RefCell;
use std::rc::Rc;

use crate::typed::DeepCopyInto;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl DeepCopyInto for Point {
    fn deep_copy_into(&self, target: &mut Self) {
        target.x = self.x;
        target.y = self.y;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OtherType {
    pub label: String,
}

impl DeepCopyInto for OtherType {
    fn deep_copy_into(&self, target: &mut Self) {
        target.label.clone_from(&self.label);
    }
}

/// No copy-into capability at all.
#[derive(Debug, Default, PartialEq)]
pub struct NoCopy;

#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    pub label: String,
    pub children: Vec<Tree>,
}

impl Tree {
    pub fn leaf(label: &str) -> Self {
        Self {
            label: label.to_string(),
            children: Vec::new(),
        }
    }

    pub fn sample() -> Self {
        let mut left = Tree::leaf("left");
        left.children.push(Tree::leaf("left.inner"));
        Self {
            label: "root".to_string(),
            children: vec![left, Tree::leaf("right")],
        }
    }
}

impl DeepCopyInto for Tree {
    fn deep_copy_into(&self, target: &mut Self) {
        target.label.clone_from(&self.label);
        target.children.truncate(self.children.len());
        for (i, child) in self.children.iter().enumerate() {
            match target.children.get_mut(i) {
                Some(existing) => child.deep_copy_into(existing),
                None => {
                    let mut fresh = Tree::leaf("");
                    child.deep_copy_into(&mut fresh);
                    target.children.push(fresh);
                }
            }
        }
    }
}

/// Copied through `Clone::clone_from` instead of `DeepCopyInto`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    pub items: Vec<String>,
}

impl Inventory {
    pub fn with_items(items: &[&str]) -> Self {
        Self {
            items: items.iter().map(|item| item.to_string()).collect(),
        }
    }
}

/// Panics when copied into a sealed target.
#[derive(Debug, Default, PartialEq)]
pub struct Fragile {
    pub sealed: bool,
    pub values: Vec<u8>,
}

impl Fragile {
    pub fn new(values: &[u8]) -> Self {
        Self {
            sealed: false,
            values: values.to_vec(),
        }
    }

    pub fn sealed() -> Self {
        Self {
            sealed: true,
            values: Vec::new(),
        }
    }
}

impl DeepCopyInto for Fragile {
    fn deep_copy_into(&self, target: &mut Self) {
        if target.sealed {
            panic!("target is sealed");
        }
        target.values.clone_from(&self.values);
    }
}

/// Neither `Send` nor `Sync`; the copy allocates a new shared cell.
#[derive(Debug)]
pub struct Shared {
    pub inner: Rc<RefCell<Vec<u8>>>,
}

impl Shared {
    pub fn new(values: &[u8]) -> Self {
        Self {
            inner: Rc::new(RefCell::new(values.to_vec())),
        }
    }
}

impl DeepCopyInto for Shared {
    fn deep_copy_into(&self, target: &mut Self) {
        target.inner = Rc::new(RefCell::new(self.inner.borrow().clone()));
    }
}
