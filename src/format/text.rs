use std::io::{BufWriter, Write};

use crate::error::Result;

fn border<W: Write>(out: &mut W, widths: &[usize]) -> std::io::Result<()> {
    out.write_all(b"+")?;
    for &w in widths {
        out.write_all("-".repeat(w + 2).as_bytes())?;
        out.write_all(b"+")?;
    }
    out.write_all(b"\n")
}

fn row<W: Write, S: AsRef<str>>(out: &mut W, cells: &[S], widths: &[usize]) -> std::io::Result<()> {
    out.write_all(b"|")?;
    for (i, &w) in widths.iter().enumerate() {
        let cell = cells.get(i).map(|c| c.as_ref()).unwrap_or("");
        let pad = w - cell.chars().count();
        write!(out, " {}{} |", cell, " ".repeat(pad))?;
    }
    out.write_all(b"\n")
}

/// Boxed ASCII table. Column widths count characters, not bytes.
pub fn render<W: Write>(headers: &[&str], rows: &[Vec<String>], out: W) -> Result<()> {
    let mut out = BufWriter::new(out);
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for r in rows {
        for (i, cell) in r.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    border(&mut out, &widths)?;
    row(&mut out, headers, &widths)?;
    border(&mut out, &widths)?;
    for r in rows {
        row(&mut out, r.as_slice(), &widths)?;
    }
    border(&mut out, &widths)?;
    out.flush()?;
    Ok(())
}
