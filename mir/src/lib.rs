mod function;
mod reg;

pub use function::*;
pub use reg::*;
