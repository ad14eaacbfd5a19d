//! Per-state margin table.
//!
//! Rows are ranked by baseline margin, most Democratic first, with the
//! tipping line drawn above the first row reached once the Democrat has a
//! majority. The margin column follows the slider.

use crate::state::MeterState;
use dioxus::prelude::*;
use efw_core::swing::{apply_swing, rank_rows, RowOutcome};
use std::collections::HashMap;

#[component]
pub fn StateMarginTable() -> Element {
    let state = use_context::<MeterState>();
    let config = (state.config)();
    let total_evs = (state.total_evs)();
    let rows = state.rows.read();

    let report = apply_swing(&rows, state.swing(), total_evs);
    let outcomes: HashMap<u32, RowOutcome> =
        report.rows.into_iter().map(|o| (o.id, o)).collect();
    let ranked = rank_rows(&rows, total_evs);

    rsx! {
        table {
            class: "margin_table",
            thead {
                tr {
                    th { "State" }
                    th { "EVs" }
                    th { "Margin" }
                    th { "D EVs" }
                    th { "R EVs" }
                }
            }
            tbody {
                for entry in ranked.iter() {
                    {
                        let row = &entry.row;
                        let row_id = config.row_id(row.id);
                        let cell_id = config.margin_cell_id(row.id);
                        let (text, class) = outcomes
                            .get(&row.id)
                            .map(|o| (o.call.text(), o.call.class()))
                            .unwrap_or_default();
                        rsx! {
                            tr {
                                key: "{row.id}",
                                id: "{row_id}",
                                class: entry.class(),
                                td { "{row.name}" }
                                td { "{row.evs}" }
                                td {
                                    id: "{cell_id}",
                                    class: class,
                                    "{text}"
                                }
                                td { "{entry.dem_ev}" }
                                td { "{entry.gop_ev}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
