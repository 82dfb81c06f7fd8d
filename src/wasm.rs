//! JavaScript bindings for the browser planner.
//!
//! Inputs and outputs cross the boundary as plain JS objects shaped like
//! the serde representation of [`SeatingProblem`], [`AllocationConfig`]
//! and [`SeatingPlan`](crate::allocation::SeatingPlan).

use wasm_bindgen::prelude::*;

use crate::allocation::{allocate, AllocationConfig, SeatingProblem};
use crate::capacity::additional_tables_needed;

/// Seats a problem. `config` may be `undefined` or `null` for defaults.
#[wasm_bindgen(js_name = optimizeSeating)]
pub fn optimize_seating(problem: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let problem: SeatingProblem = serde_wasm_bindgen::from_value(problem)?;
    let config: AllocationConfig = if config.is_undefined() || config.is_null() {
        AllocationConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };

    let plan = allocate(&problem, &config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(serde_wasm_bindgen::to_value(&plan)?)
}

/// Number of extra tables needed to seat `guest_count` guests.
#[wasm_bindgen(js_name = requiredTables)]
pub fn required_tables(
    guest_count: usize,
    existing_capacity: usize,
    default_capacity: usize,
) -> Result<usize, JsValue> {
    additional_tables_needed(guest_count, existing_capacity, default_capacity)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
