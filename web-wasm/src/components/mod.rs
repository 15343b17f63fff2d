pub mod batch_table;
pub mod file_upload;
pub mod layout;
pub mod prediction_form;
pub mod result_card;
