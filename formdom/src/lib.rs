pub mod event;
pub mod field;
pub mod form;
pub mod serialize;

pub use event::SubmitEvent;
pub use field::{Control, FieldNode, SelectOption};
pub use form::Form;
pub use serialize::{is_successful_field, to_json, to_pairs, to_query_string};
