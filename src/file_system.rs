// Composite: files and directories share one `display` operation.
//
// A directory owns its children through `Box`, so a node can never be
// added to itself or to one of its own descendants; the tree is acyclic
// by construction.

use std::fmt;
use std::io::{self, Write};

/// Character repeated `depth` times in front of each name.
pub const MARKER: char = '-';

/// How much deeper each nesting level is drawn.
pub const DEPTH_STEP: usize = 2;

pub trait FileSystemNode: fmt::Debug {
    fn name(&self) -> &str;

    /// Write this node, and anything beneath it, starting at `depth`.
    fn display(&self, depth: usize, out: &mut dyn Write) -> io::Result<()>;
}

fn write_line(name: &str, depth: usize, out: &mut dyn Write) -> io::Result<()> {
    let indent: String = std::iter::repeat(MARKER).take(depth).collect();
    writeln!(out, "{indent}{name}")
}

/// Render a whole subtree into a string.
pub fn render(node: &dyn FileSystemNode, depth: usize) -> io::Result<String> {
    let mut buf = Vec::new();
    node.display(depth, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

// ============================================================================
// Leaf
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    name: String,
}

impl FileNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl FileSystemNode for FileNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn display(&self, depth: usize, out: &mut dyn Write) -> io::Result<()> {
        write_line(&self.name, depth, out)
    }
}

// ============================================================================
// Container
// ============================================================================

#[derive(Debug, Default)]
pub struct DirectoryNode {
    name: String,
    children: Vec<Box<dyn FileSystemNode>>,
}

impl DirectoryNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Append `node` after the existing children. Duplicates are kept.
    pub fn add(&mut self, node: impl FileSystemNode + 'static) {
        self.add_boxed(Box::new(node));
    }

    pub fn add_boxed(&mut self, node: Box<dyn FileSystemNode>) {
        tracing::debug!(parent = %self.name, child = %node.name(), "adding node");
        self.children.push(node);
    }

    /// Builder-style `add`.
    pub fn with(mut self, node: impl FileSystemNode + 'static) -> Self {
        self.add(node);
        self
    }

    pub fn children(&self) -> &[Box<dyn FileSystemNode>] {
        &self.children
    }
}

impl FileSystemNode for DirectoryNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn display(&self, depth: usize, out: &mut dyn Write) -> io::Result<()> {
        write_line(&self.name, depth, out)?;
        for child in &self.children {
            child.display(depth + DEPTH_STEP, out)?;
        }
        Ok(())
    }
}
