// Pattern 7: Visitor
// Operations over a file/folder tree that live outside the node types.

use crate::output::SharedOutput;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileElement {
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderElement {
    pub name: String,
    pub children: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    File(FileElement),
    Folder(FolderElement),
}

/// One method per node variant. Visitors keep their own state; the tree is
/// only ever borrowed shared.
pub trait Visitor {
    fn visit_file(&mut self, file: &FileElement);
    fn visit_folder(&mut self, folder: &FolderElement);
}

impl Element {
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Element::File(FileElement {
            name: name.into(),
            size,
        })
    }

    pub fn folder(name: impl Into<String>, children: Vec<Element>) -> Self {
        Element::Folder(FolderElement {
            name: name.into(),
            children,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Element::File(file) => &file.name,
            Element::Folder(folder) => &folder.name,
        }
    }

    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Element::File(file) => visitor.visit_file(file),
            Element::Folder(folder) => visitor.visit_folder(folder),
        }
    }
}

impl FolderElement {
    /// Hands the visitor to each child, in order.
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        for child in &self.children {
            child.accept(visitor);
        }
    }
}

// ============================================================================
// Visitors
// ============================================================================

#[derive(Debug, Default)]
pub struct SizeCalculator {
    total_size: u64,
}

impl SizeCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_size(&self) -> u64 {
        self.total_size
    }
}

impl Visitor for SizeCalculator {
    fn visit_file(&mut self, file: &FileElement) {
        self.total_size += file.size;
    }

    fn visit_folder(&mut self, folder: &FolderElement) {
        folder.accept_children(self);
    }
}

/// Emits one label per node, parent before children.
pub struct NamePrinter {
    out: SharedOutput,
}

impl NamePrinter {
    pub fn new(out: SharedOutput) -> Self {
        Self { out }
    }
}

impl Visitor for NamePrinter {
    fn visit_file(&mut self, file: &FileElement) {
        self.out.emit(&format!("📄 File: {}", file.name));
    }

    fn visit_folder(&mut self, folder: &FolderElement) {
        self.out.emit(&format!("📁 Folder: {}", folder.name));
        folder.accept_children(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Transcript;

    fn sample_tree() -> Element {
        Element::folder(
            "root",
            vec![
                Element::file("a.txt", 10),
                Element::file("b.txt", 20),
                Element::folder("nested", vec![Element::file("c.txt", 5)]),
            ],
        )
    }

    #[test]
    fn test_size_of_nested_tree() {
        let mut sizes = SizeCalculator::new();
        sample_tree().accept(&mut sizes);
        assert_eq!(sizes.total_size(), 35);
    }

    #[test]
    fn test_size_accumulates_across_visits() {
        let tree = sample_tree();
        let mut sizes = SizeCalculator::new();

        tree.accept(&mut sizes);
        tree.accept(&mut sizes);

        assert_eq!(sizes.total_size(), 70);
    }

    #[test]
    fn test_empty_folder_and_single_file() {
        let mut sizes = SizeCalculator::new();
        Element::folder("empty", vec![]).accept(&mut sizes);
        assert_eq!(sizes.total_size(), 0);

        Element::file("lone", 7).accept(&mut sizes);
        assert_eq!(sizes.total_size(), 7);
    }

    #[test]
    fn test_names_are_pre_order() {
        let transcript = Transcript::new();
        let mut printer = NamePrinter::new(transcript.shared());

        sample_tree().accept(&mut printer);

        assert_eq!(
            transcript.lines(),
            vec![
                "📁 Folder: root",
                "📄 File: a.txt",
                "📄 File: b.txt",
                "📁 Folder: nested",
                "📄 File: c.txt",
            ]
        );
    }

    #[test]
    fn test_visiting_leaves_tree_unchanged() {
        let tree = sample_tree();
        let before = tree.clone();

        tree.accept(&mut SizeCalculator::new());

        assert_eq!(tree, before);
        assert_eq!(tree.name(), "root");
    }

    #[test]
    fn test_dyn_visitor() {
        let mut sizes = SizeCalculator::new();
        let visitor: &mut dyn Visitor = &mut sizes;
        sample_tree().accept(visitor);
        assert_eq!(sizes.total_size(), 35);
    }
}
