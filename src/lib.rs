pub mod codegen;
pub mod error;
pub mod ir;
pub mod main_handler;
pub mod parse;
pub mod resolution;
pub mod synthesis;
pub mod tactic;
pub mod util;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn parse_type(src: &str) -> Result<JsValue, String> {
    let typ = parse::type_str(src).map_err(|e| e.to_string())?;
    serde_wasm_bindgen::to_value(&typ).map_err(|e| e.to_string())
}

/// Runs a whole script of blank-line separated commands and returns the final
/// program (or the first error).
#[wasm_bindgen]
pub fn run_script(script: &str) -> Result<String, String> {
    let mut synth = synthesis::Synthesizer::new();
    for command in util::split_commands(script) {
        match synth.step(command) {
            Ok(synthesis::Outcome::Stepped { .. }) => (),
            Ok(synthesis::Outcome::Finished { program }) => return Ok(program),
            Err(e) => return Err(e.to_string()),
        }
    }
    Ok(synth.rendered().to_owned())
}
