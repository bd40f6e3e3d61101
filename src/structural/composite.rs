//! Composite: files and directories treated uniformly in one tree.
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. A directory owns
//! the ordered list of its children, and a node has at most one parent, so a
//! removed node can be re-attached elsewhere but never shared.

use crate::error::TreeError;
use itertools::Itertools;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq)]
enum NodeKind {
    File,
    Directory { children: Vec<NodeId> },
}

#[derive(Debug, Clone)]
struct Node {
    name: String,
    parent: Option<NodeId>,
    kind: NodeKind,
}

#[derive(Debug, Default)]
pub struct FileSystem {
    nodes: Vec<Node>,
}

impl FileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, name: impl Into<String>) -> NodeId {
        self.push(name.into(), NodeKind::File)
    }

    pub fn add_directory(&mut self, name: impl Into<String>) -> NodeId {
        self.push(name.into(), NodeKind::Directory { children: Vec::new() })
    }

    fn push(&mut self, name: String, kind: NodeKind) -> NodeId {
        self.nodes.push(Node {
            name,
            parent: None,
            kind,
        });
        NodeId(self.nodes.len() - 1)
    }

    fn node(&self, id: NodeId) -> Result<&Node, TreeError> {
        self.nodes.get(id.0).ok_or(TreeError::UnknownNode { id: id.0 })
    }

    pub fn name(&self, id: NodeId) -> Result<&str, TreeError> {
        Ok(&self.node(id)?.name)
    }

    pub fn is_directory(&self, id: NodeId) -> Result<bool, TreeError> {
        Ok(matches!(self.node(id)?.kind, NodeKind::Directory { .. }))
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, TreeError> {
        Ok(self.node(id)?.parent)
    }

    /// Children of a directory in insertion order. Files are rejected the same
    /// way `add` rejects them.
    pub fn children(&self, id: NodeId) -> Result<&[NodeId], TreeError> {
        let node = self.node(id)?;
        match &node.kind {
            NodeKind::Directory { children } => Ok(children),
            NodeKind::File => Err(TreeError::not_a_directory(&node.name)),
        }
    }

    /// Appends `child` to `parent`. The child must be detached.
    pub fn add(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        let parent_node = self.node(parent)?;
        if !matches!(parent_node.kind, NodeKind::Directory { .. }) {
            return Err(TreeError::not_a_directory(&parent_node.name));
        }
        let child_node = self.node(child)?;
        if let Some(owner) = child_node.parent {
            return Err(TreeError::already_attached(&child_node.name, self.name(owner)?));
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(TreeError::Cycle {
                name: child_node.name.clone(),
            });
        }

        self.nodes[child.0].parent = Some(parent);
        if let NodeKind::Directory { children } = &mut self.nodes[parent.0].kind {
            children.push(child);
        }
        tracing::debug!(parent = %self.nodes[parent.0].name, child = %self.nodes[child.0].name, "node added");
        Ok(())
    }

    /// Detaches `child` from `parent`. Returns `false` (and changes nothing)
    /// when `child` is not one of `parent`'s children.
    pub fn remove(&mut self, parent: NodeId, child: NodeId) -> bool {
        let Some(Node {
            kind: NodeKind::Directory { children },
            ..
        }) = self.nodes.get_mut(parent.0)
        else {
            return false;
        };
        let Some(position) = children.iter().position(|&c| c == child) else {
            return false;
        };
        children.remove(position);
        self.nodes[child.0].parent = None;
        tracing::debug!(child = %self.nodes[child.0].name, "node removed");
        true
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, mut node: NodeId) -> bool {
        loop {
            if node == candidate {
                return true;
            }
            match self.nodes[node.0].parent {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }

    /// Recursive listing of `id` and everything below it, two spaces per level.
    pub fn show_details(&self, id: NodeId) -> Result<String, TreeError> {
        let mut lines = Vec::new();
        self.collect_details(id, 0, &mut lines)?;
        Ok(lines.into_iter().join("\n"))
    }

    fn collect_details(&self, id: NodeId, indent: usize, lines: &mut Vec<String>) -> Result<(), TreeError> {
        let node = self.node(id)?;
        match &node.kind {
            NodeKind::File => lines.push(format!("{}File: {}", " ".repeat(indent), node.name)),
            NodeKind::Directory { children } => {
                lines.push(format!("{}Directory: {}", " ".repeat(indent), node.name));
                for &child in children {
                    self.collect_details(child, indent + 2, lines)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        fs: FileSystem,
        root: NodeId,
        photos: NodeId,
        photo: NodeId,
        slides: NodeId,
    }

    fn sample() -> Sample {
        let mut fs = FileSystem::new();
        let doc = fs.add_file("Document.txt");
        let photo = fs.add_file("Photo.jpg");
        let slides = fs.add_file("Presentation.pptx");
        let documents = fs.add_directory("Documents");
        let photos = fs.add_directory("Photos");
        let root = fs.add_directory("Root");

        fs.add(documents, doc).unwrap();
        fs.add(photos, photo).unwrap();
        fs.add(photos, slides).unwrap();
        fs.add(root, documents).unwrap();
        fs.add(root, photos).unwrap();

        Sample {
            fs,
            root,
            photos,
            photo,
            slides,
        }
    }

    #[test]
    fn test_show_details_in_insertion_order() {
        let s = sample();
        assert_eq!(
            s.fs.show_details(s.root).unwrap(),
            "Directory: Root\n  Directory: Documents\n    File: Document.txt\n  Directory: Photos\n    File: Photo.jpg\n    File: Presentation.pptx"
        );
    }

    #[test]
    fn test_remove_present_child_removes_only_it() {
        let mut s = sample();
        assert!(s.fs.remove(s.photos, s.photo));
        assert_eq!(s.fs.children(s.photos).unwrap(), &[s.slides]);
        assert_eq!(s.fs.parent(s.photo).unwrap(), None);
        assert!(!s.fs.show_details(s.root).unwrap().contains("Photo.jpg"));
    }

    #[test]
    fn test_remove_absent_child_is_noop() {
        let mut s = sample();
        let before = s.fs.show_details(s.root).unwrap();
        let stray = s.fs.add_file("Stray.txt");

        assert!(!s.fs.remove(s.photos, stray));
        assert!(!s.fs.remove(s.root, s.photo));
        assert!(!s.fs.remove(s.photo, s.slides));
        assert_eq!(s.fs.show_details(s.root).unwrap(), before);
    }

    #[test]
    fn test_add_appends_at_end() {
        let mut s = sample();
        let readme = s.fs.add_file("Readme.txt");
        s.fs.add(s.root, readme).unwrap();
        let details = s.fs.show_details(s.root).unwrap();
        assert!(details.ends_with("\n  File: Readme.txt"));
    }

    #[test]
    fn test_file_cannot_hold_children() {
        let mut s = sample();
        let extra = s.fs.add_file("Extra.txt");
        assert!(matches!(s.fs.add(s.photo, extra), Err(TreeError::NotADirectory { .. })));
        assert!(matches!(s.fs.children(s.photo), Err(TreeError::NotADirectory { .. })));
        assert_eq!(s.fs.children(s.root).unwrap().len(), 2);
    }

    #[test]
    fn test_attached_node_cannot_be_added_twice() {
        let mut s = sample();
        assert!(matches!(
            s.fs.add(s.root, s.photo),
            Err(TreeError::AlreadyAttached { .. })
        ));

        s.fs.remove(s.photos, s.photo);
        assert!(s.fs.add(s.root, s.photo).is_ok());
        assert_eq!(s.fs.parent(s.photo).unwrap(), Some(s.root));
    }

    #[test]
    fn test_directory_cannot_contain_itself() {
        let mut s = sample();
        assert!(matches!(s.fs.add(s.root, s.root), Err(TreeError::Cycle { .. })));

        s.fs.remove(s.root, s.photos);
        let nested = s.fs.add_directory("Nested");
        s.fs.add(s.photos, nested).unwrap();
        assert!(matches!(s.fs.add(nested, s.photos), Err(TreeError::Cycle { .. })));
    }

    #[test]
    fn test_unknown_node() {
        let fs = FileSystem::new();
        assert!(matches!(fs.show_details(NodeId(4)), Err(TreeError::UnknownNode { id: 4 })));
    }
}
