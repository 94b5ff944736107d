//! Console rendering of visualization SQL

use std::io::{self, Write};

use sqlformat::{FormatOptions, Indent, QueryParams};

use shared::VisualizationQuery;

/// Upper bound on reformatting rounds before giving up on a fixpoint
const MAX_FORMAT_PASSES: usize = 4;

fn format_once(query: &str) -> String {
    let options = FormatOptions {
        indent: Indent::Spaces(2),
        uppercase: true,
        lines_between_queries: 1,
    };
    sqlformat::format(query, &QueryParams::None, options)
}

/// Reindent `query` and uppercase its keywords.
///
/// A single sqlformat pass is not always stable: lowercase `between a and b`
/// breaks before the `and`, while the uppercased text does not. Formatting is
/// repeated until the output stops changing.
pub fn format_sql(query: &str) -> String {
    let mut formatted = format_once(query);
    for _ in 0..MAX_FORMAT_PASSES {
        let next = format_once(&formatted);
        if next == formatted {
            break;
        }
        formatted = next;
    }
    formatted
}

/// Write each query as `<id>:`, the formatted SQL, then one blank line
pub fn write_sql<W: Write>(out: &mut W, queries: &[VisualizationQuery]) -> io::Result<()> {
    for query in queries {
        writeln!(out, "{}:", query.metadata_id)?;
        writeln!(out, "{}", format_sql(&query.sql_query))?;
        writeln!(out)?;
    }
    out.flush()
}

/// Print the queries to stdout
pub fn print_sql(queries: &[VisualizationQuery]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_sql(&mut handle, queries)
}
