pub mod reference;
pub mod result;
