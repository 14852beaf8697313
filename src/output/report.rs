use std::io::{self, Write};

use crate::{file_system::node::DirNode, units::system::UnitSystem, utils::tree::TreeDepth};

const INDENT: &str = "    ";

pub fn print_report(
    node: &DirNode,
    total_size: u64,
    unit_system: UnitSystem,
    output_depth: TreeDepth,
) -> io::Result<()> {
    let stdout = io::stdout();
    write_report(&mut stdout.lock(), node, total_size, 0, unit_system, output_depth)
}

/// Write the listing for `node` and its subtree, one line at a time.
///
/// Siblings print largest-first (stable on ties, so repeated runs over an
/// unchanged tree are deterministic); `output_depth` truncates what is
/// shown, never what was counted. Each directory's direct files collapse
/// into one trailing summary line.
pub fn write_report<W: Write>(
    w: &mut W,
    node: &DirNode,
    total_size: u64,
    depth: usize,
    unit_system: UnitSystem,
    output_depth: TreeDepth,
) -> io::Result<()> {
    writeln!(
        w,
        "{} - {:>5} ({})\t{}",
        INDENT.repeat(depth),
        percent(node.size, total_size),
        unit_system.format(node.size),
        node.name,
    )?;

    let mut children: Vec<&DirNode> = node.children.iter().collect();
    children.sort_by(|a, b| b.size.cmp(&a.size));

    for child in children {
        if depth < output_depth {
            write_report(w, child, total_size, depth + 1, unit_system, output_depth)?;
        }
    }

    if node.file_count > 0 && depth < output_depth {
        writeln!(
            w,
            "{} - {:>5} ({})\tOther files ({} total)",
            INDENT.repeat(depth + 1),
            percent(node.files_size, total_size),
            unit_system.format(node.files_size),
            node.file_count,
        )?;
    }

    Ok(())
}

// defined as 0% when the tree owns no bytes at all
fn percent(part: u64, total_size: u64) -> String {
    let frac = if total_size == 0 {
        0.0
    } else {
        part as f64 / total_size as f64
    };
    format!("{:.1}%", frac * 100.0)
}
