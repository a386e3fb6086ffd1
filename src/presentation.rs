// src/presentation.rs
use std::io::{self, Write};
use tag_depth_core::DepthTransition;

/// `<line>: Depth <prev> -> <new> : <trimmed text>`
pub fn write_transition<W: Write>(out: &mut W, t: &DepthTransition<'_>) -> io::Result<()> {
    writeln!(
        out,
        "{}: Depth {} -> {} : {}",
        t.line_number,
        t.prev_depth,
        t.depth,
        t.trimmed()
    )
}

/// Write every transition, returning how many lines were written.
pub fn write_transitions<'a, W, I>(out: &mut W, transitions: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = DepthTransition<'a>>,
{
    let mut written = 0;
    for t in transitions {
        write_transition(out, &t)?;
        written += 1;
    }
    Ok(written)
}
