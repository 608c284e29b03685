//! Console statistics report.

use mediasweep_recon::format::human_size;
use mediasweep_recon::{StatsTree, Tally};
use std::io::{self, Write};

/// Render the statistics tree as indented text.
///
/// Categories, extensions and roles print in stable (sorted) order. The
/// documents snapshot line shows the true snapshot count even when the
/// exclusion flag kept those objects out of the totals.
pub fn render(tree: &StatsTree, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "TOTAL: {}", tally(&tree.grand_total))?;
    for (category, stats) in &tree.categories {
        writeln!(writer)?;
        writeln!(writer, "{category}: {}", tally(&stats.total))?;
        if !stats.by_extension.is_empty() {
            writeln!(writer, "  by extension:")?;
            for (extension, entry) in &stats.by_extension {
                let label = if extension.is_empty() { "(none)" } else { extension };
                writeln!(writer, "    {label}: {}", tally(entry))?;
            }
        }
        if !stats.by_role.is_empty() {
            writeln!(writer, "  by role:")?;
            for (role, entry) in &stats.by_role {
                writeln!(writer, "    {role}: {}", tally(entry))?;
            }
        }
    }
    Ok(())
}

fn tally(entry: &Tally) -> String {
    format!("{} objects, {}", entry.count, human_size(entry.bytes))
}
