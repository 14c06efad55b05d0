mod control;
mod node;

pub use control::{Control, SelectOption};
pub use node::FieldNode;
