//! WebAssembly bindings.
//!
//! Cities cross the boundary as plain objects `{ id, x, y }`; results come
//! back as `{ tour, length }`.

use wasm_bindgen::prelude::*;

use crate::city::City;
use crate::sa::SaConfig;
use crate::solver::{Method, Solver};

/// Solves with the named method. Unknown names use nearest neighbor.
#[wasm_bindgen(js_name = solve)]
pub fn solve_js(cities: JsValue, method: &str) -> Result<JsValue, JsValue> {
    let cities: Vec<City> = serde_wasm_bindgen::from_value(cities)?;
    let result = crate::solver::solve(&cities, Method::from_name(method));
    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// Like [`solve_js`] with a fixed annealing seed.
#[wasm_bindgen(js_name = solveSeeded)]
pub fn solve_seeded_js(cities: JsValue, method: &str, seed: u64) -> Result<JsValue, JsValue> {
    let cities: Vec<City> = serde_wasm_bindgen::from_value(cities)?;
    let solver = Solver::with_sa_config(SaConfig::default().with_seed(seed))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let result = solver.solve(&cities, Method::from_name(method));
    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// One-sentence description of the named method.
#[wasm_bindgen(js_name = describeMethod)]
pub fn describe_method_js(method: &str) -> String {
    Method::from_name(method).description().to_string()
}
