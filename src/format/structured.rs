use std::io::Write;

use crate::error::Result;

pub fn render_csv<W: Write>(headers: &[&str], rows: &[Vec<String>], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// One JSON object per row, keyed by header.
pub fn render_json<W: Write>(headers: &[&str], rows: &[Vec<String>], mut out: W) -> Result<()> {
    let records: Vec<serde_json::Map<String, serde_json::Value>> = rows
        .iter()
        .map(|row| {
            headers
                .iter()
                .zip(row)
                .map(|(h, v)| (h.to_string(), serde_json::Value::String(v.clone())))
                .collect()
        })
        .collect();
    serde_json::to_writer_pretty(&mut out, &records)?;
    out.write_all(b"\n")?;
    Ok(())
}

pub fn render_yaml<W: Write>(headers: &[&str], rows: &[Vec<String>], out: W) -> Result<()> {
    let records: Vec<serde_yaml::Mapping> = rows
        .iter()
        .map(|row| {
            headers
                .iter()
                .zip(row)
                .map(|(h, v)| {
                    (
                        serde_yaml::Value::String(h.to_string()),
                        serde_yaml::Value::String(v.clone()),
                    )
                })
                .collect()
        })
        .collect();
    serde_yaml::to_writer(out, &records)?;
    Ok(())
}
