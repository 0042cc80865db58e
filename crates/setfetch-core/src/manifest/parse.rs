//! Decode a comma-delimited manifest into fixed-schema rows.

use std::io::Read;

use super::{ManifestError, ManifestRow};

/// Header names every manifest must carry. Other columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Set", "mem_role", "scene_cat", "sim_cat"];

/// Parse manifest text. The header is validated before any record is decoded.
pub fn parse_manifest<R: Read>(reader: R) -> Result<Vec<ManifestRow>, ManifestError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().map_err(ManifestError::Header)?;
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ManifestError::MissingColumns(missing));
    }

    let mut rows = Vec::new();
    for record in rdr.deserialize::<ManifestRow>() {
        let row = record.map_err(|source| {
            let line = source.position().map_or(0, |p| p.line());
            ManifestError::Row { line, source }
        })?;
        rows.push(row);
    }
    Ok(rows)
}
