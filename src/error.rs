use wasm_bindgen::JsValue;

use crate::shader::ShaderStage;

/// Everything that can stop the scene from reaching the screen.
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    #[error("error compiling {stage} shader: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    #[error("error linking program: {log}")]
    ProgramLink { log: String },

    #[error("expected a {expected} shader, got a {found} shader")]
    StageMismatch {
        expected: ShaderStage,
        found: ShaderStage,
    },

    #[error("unable to create {0}")]
    Allocation(&'static str),

    #[error("missing {0} attribute")]
    MissingAttribute(&'static str),

    #[error("missing element #{0}")]
    MissingElement(String),

    #[error("webgl context: {0}")]
    Context(String),

    #[error("{0}")]
    Js(String),
}

pub fn js_value_to_string(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl From<JsValue> for SceneError {
    fn from(value: JsValue) -> Self {
        SceneError::Js(js_value_to_string(&value))
    }
}

impl From<SceneError> for JsValue {
    fn from(err: SceneError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_names_the_stage() {
        let err = SceneError::ShaderCompile {
            stage: ShaderStage::Fragment,
            log: "0:3: syntax error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "error compiling fragment shader: 0:3: syntax error"
        );
    }

    #[test]
    fn stage_mismatch_reads_both_stages() {
        let err = SceneError::StageMismatch {
            expected: ShaderStage::Vertex,
            found: ShaderStage::Fragment,
        };
        assert_eq!(
            err.to_string(),
            "expected a vertex shader, got a fragment shader"
        );
    }
}
