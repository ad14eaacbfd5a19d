//! State roster loading.
//!
//! # CSV Format
//!
//! With headers: `ID,CODE,NAME,EVS,MARGIN`
//!
//! ```text
//! ID,CODE,NAME,EVS,MARGIN
//! 0,AL,Alabama,9,-25.3
//! 1,AK,Alaska,3,-9.8
//! ```
//!
//! The `ID` column is optional; when it is blank the row's position in the
//! file is used.

use crate::error::ForecastError;
use crate::swing::StateRow;

/// Parse a state roster CSV into ordered row descriptors.
pub fn load_state_rows(csv_data: &str) -> anyhow::Result<Vec<StateRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let mut rows = Vec::new();
    for (index, result) in rdr.records().enumerate() {
        let r = result?;
        let line = r.position().map(|p| p.line()).unwrap_or(index as u64 + 2);
        let invalid = |reason: String| ForecastError::InvalidStateRow { line, reason };

        let id_str = r.get(0).unwrap_or("").trim();
        let code = r.get(1).unwrap_or("").trim();
        let name = r.get(2).unwrap_or("").trim();
        let evs_str = r.get(3).unwrap_or("").trim();
        let margin_str = r.get(4).unwrap_or("").trim();

        if code.is_empty() {
            return Err(invalid("missing state code".to_string()).into());
        }
        let id: u32 = if id_str.is_empty() {
            u32::try_from(index)?
        } else {
            id_str
                .parse()
                .map_err(|_| invalid(format!("bad id {id_str:?}")))?
        };
        let evs: u32 = evs_str
            .parse()
            .map_err(|_| invalid(format!("bad electoral votes {evs_str:?} for {code}")))?;
        let margin: f64 = margin_str
            .parse()
            .map_err(|_| invalid(format!("bad margin {margin_str:?} for {code}")))?;

        rows.push(StateRow {
            id,
            code: code.to_string(),
            name: if name.is_empty() { code.to_string() } else { name.to_string() },
            evs,
            margin,
        });
    }
    log::info!("roster: loaded {} states", rows.len());
    Ok(rows)
}

/// Sum of electoral votes across the roster.
pub fn total_evs(rows: &[StateRow]) -> u32 {
    rows.iter().map(|r| r.evs).sum()
}
