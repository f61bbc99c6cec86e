pub mod forms;
pub mod pages;
pub mod status;
