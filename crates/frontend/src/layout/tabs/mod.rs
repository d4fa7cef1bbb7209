//! Tab management module
//!
//! - `page`: `TabPage`, keeps a tab mounted while hidden
//! - `registry`: tab key to page
//! - `tab_labels`: tab titles

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
