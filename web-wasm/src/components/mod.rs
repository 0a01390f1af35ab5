//! UIコンポーネント

pub mod delete_modal;
pub mod dropdown;
pub mod file_item;
pub mod file_list;
pub mod file_uploader;
pub mod input;
pub mod title_modal;
pub mod type_badge;
