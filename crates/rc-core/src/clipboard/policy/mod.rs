mod model;
mod resolve_format;

pub use model::Direction;
pub use resolve_format::ResolveFormatPolicy;
