pub mod assembler;
pub mod catalog;
pub mod constraint;
pub mod encoding;
pub mod error;
pub mod field;
pub mod modifiers;
pub mod operand;
pub mod registers;
pub mod selector;

pub use assembler::{assemble, Program};
pub use error::AsmError;
pub use selector::Statement;
