use std::{fs, io, path::Path};

use crate::{file_system::node::DirNode, utils::tree::TreeDepth};

/// Recursively scan `path`, returning a fully aggregated [`DirNode`].
///
/// `max_depth` bounds how far subdirectories are descended into: entries
/// below the budget are skipped entirely and their sizes are not counted
/// anywhere. Direct files at the current level are always counted, even
/// with a budget of `Depth(0)`. Symbolic links and other special entries
/// contribute nothing.
///
/// The first filesystem error aborts the whole build.
pub fn build(path: &Path, max_depth: TreeDepth) -> io::Result<DirNode> {
    let mut node = DirNode::new(path);

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        // file_type() and metadata() on a DirEntry never traverse symlinks
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            if max_depth > 0 {
                let child = build(&entry.path(), max_depth.child())?;
                node.add_child(child);
            }
        } else if file_type.is_file() {
            node.add_file_size(entry.metadata()?.len());
        }
        // symbolic links, sockets, devices etc. are ignored
    }

    Ok(node)
}
