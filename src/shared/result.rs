/// Type alias for Result with anyhow::Error as the default error type,
/// used consistently across all layers of the crate. Port boundaries with
/// typed errors (e.g. the life-cycle source) override the error parameter.
pub type Result<T, E = anyhow::Error> = std::result::Result<T, E>;
