pub mod reference_data;
pub mod result_form;
pub mod result_submission;
