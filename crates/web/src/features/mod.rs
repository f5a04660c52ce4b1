pub mod reference;
pub mod results;
