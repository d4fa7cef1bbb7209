//! Generic list/details machinery shared by the settings pages.
//!
//! - `state` - list page state: rows, filters, search, sort, delete, status toggle
//! - `details` - MVVM view model of the create/edit form
//! - `components` - toolbar, row actions and the details frame
//! - `reference` - options of selects pointing at another settings list

pub mod components;
pub mod details;
pub mod reference;
pub mod state;

pub use components::{open_details_modal, CrudToolbar, DetailsFrame, ListStateView, RowActions};
pub use details::DetailsViewModel;
pub use reference::use_reference_options;
pub use state::{visible_rows, CrudPageState};
