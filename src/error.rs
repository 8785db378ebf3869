use thiserror::Error;

/// Shader stage, for compile diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Stage::Vertex => "vertex",
            Stage::Fragment => "fragment",
        })
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot get js Window object")]
    MissingWindow,
    #[error("cannot get document of Window object")]
    MissingDocument,
    #[error("canvas #{0} not found")]
    MissingCanvas(String),
    #[error("WebGL2 not supported")]
    ContextUnavailable,
    #[error("cannot create webgl {0}")]
    Creation(&'static str),
    #[error("{stage} shader failed to compile: {log}")]
    Compile { stage: Stage, log: String },
    #[error("shader program failed to link: {0}")]
    Link(String),
    #[error("attribute `{0}` not found in program")]
    MissingAttribute(&'static str),
    #[error("uniform `{0}` not found in program")]
    MissingUniform(&'static str),
    #[error("failed to load texture {0}")]
    TextureLoad(String),
    #[error("javascript error: {0}")]
    Js(String),
}
