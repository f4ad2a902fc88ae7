use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AccessError {
    #[error("Lexical error: unrecognized input at '{0}'")]
    Lexical(String),

    #[error("Syntax error in '{context}': {message}")]
    Syntax { context: String, message: String },

    #[error("Cannot assign {found} to a slice; expected an array")]
    SliceAssign { found: &'static str },

    #[error("Cannot traverse {step} through {found}")]
    Traversal { step: String, found: &'static str },

    #[error("Negative position {0} does not address a writable slot")]
    Negative(i64),

    #[error("Cannot apply an empty expression list")]
    UnboundExpressions,

    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

impl AccessError {
    pub fn syntax(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Syntax {
            context: context.into(),
            message: message.into(),
        }
    }

    pub fn traversal(step: impl Into<String>, found: &'static str) -> Self {
        Self::Traversal {
            step: step.into(),
            found,
        }
    }
}
