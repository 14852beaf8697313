use std::path::PathBuf;

/// One directory in the scanned subtree, with sizes aggregated over all of
/// its descendants.
pub struct DirNode {
    pub path: PathBuf,
    pub name: String,
    /// Total bytes owned by this directory and everything below it.
    pub size: u64,
    /// Regular files directly inside this directory (not descendants').
    pub file_count: u64,
    /// Total bytes of those direct files only.
    pub files_size: u64,
    /// Children in scan order; sorted only at print time.
    pub children: Vec<DirNode>,
}

impl DirNode {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            name,
            size: 0,
            file_count: 0,
            files_size: 0,
            children: Vec::new(),
        }
    }

    pub fn add_file_size(&mut self, size: u64) {
        self.file_count += 1;
        self.files_size += size;
        self.size += size;
    }

    /// Attach a fully built child; its aggregate folds into this node.
    pub fn add_child(&mut self, child: DirNode) {
        self.size += child.size;
        self.children.push(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_the_last_path_component() {
        let node = DirNode::new("/tmp/some/dir");
        assert_eq!(node.name, "dir");
        assert!(node.path.ends_with("some/dir"));
        assert_eq!(DirNode::new("relative").name, "relative");
    }

    #[test]
    fn add_file_size_updates_direct_and_aggregate_counters() {
        let mut node = DirNode::new("d");
        node.add_file_size(100);
        node.add_file_size(24);
        assert_eq!(node.file_count, 2);
        assert_eq!(node.files_size, 124);
        assert_eq!(node.size, 124);
    }

    #[test]
    fn add_child_folds_the_child_aggregate_into_the_parent() {
        let mut parent = DirNode::new("parent");
        parent.add_file_size(10);

        let mut child = DirNode::new("parent/child");
        child.add_file_size(32);
        parent.add_child(child);

        assert_eq!(parent.size, 42);
        assert_eq!(parent.files_size, 10);
        assert_eq!(parent.children.len(), 1);
        assert_eq!(parent.children[0].name, "child");
    }
}
