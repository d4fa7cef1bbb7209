use contracts::domain::common::{AggregateRoot, CrudList, RecordStatus};
use contracts::shared::list_filter::ListFilter;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::crud_api;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::list_utils::{next_sort, sort_list, Sortable};
use crate::shared::toast::{use_feedback, Feedback};

/// Rows shown by a list page: search match, then sort.
pub fn visible_rows<T: AggregateRoot + Sortable>(
    rows: &CrudList<T>,
    search: &str,
    sort_field: &str,
    ascending: bool,
) -> Vec<T> {
    let mut items = rows.search(search);
    sort_list(&mut items, sort_field, ascending);
    items
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// State of one settings list page.
pub struct CrudPageState<T: AggregateRoot> {
    pub rows: RwSignal<CrudList<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub search: RwSignal<String>,
    pub sort_field: RwSignal<String>,
    pub sort_ascending: RwSignal<bool>,
    pub status_filter: RwSignal<Option<RecordStatus>>,
    /// Location part of the list query
    pub filter: RwSignal<ListFilter>,
    /// Id of the latest list request; older replies are dropped
    request_seq: RwSignal<u64>,
    pub feedback: Feedback,
    pub modals: ModalStackService,
}

impl<T: AggregateRoot> Clone for CrudPageState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: AggregateRoot> Copy for CrudPageState<T> {}

impl<T: AggregateRoot + Sortable> CrudPageState<T> {
    pub fn new(default_sort: &str) -> Self {
        Self {
            rows: RwSignal::new(CrudList::default()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            search: RwSignal::new(String::new()),
            sort_field: RwSignal::new(default_sort.to_string()),
            sort_ascending: RwSignal::new(true),
            status_filter: RwSignal::new(None),
            filter: RwSignal::new(ListFilter::default()),
            request_seq: RwSignal::new(0),
            feedback: use_feedback(),
            modals: use_context::<ModalStackService>()
                .expect("ModalStackService not found in context"),
        }
    }

    pub fn query(&self) -> ListFilter {
        self.filter
            .get_untracked()
            .with_status(self.status_filter.get_untracked())
    }

    /// Load rows for the current filter, replacing the list.
    pub fn fetch(&self) {
        let this = *self;
        let query = self.query();
        let seq = self.request_seq.get_untracked() + 1;
        self.request_seq.set(seq);
        self.loading.set(true);
        self.error.set(None);

        spawn_local(async move {
            let result = crud_api::fetch_list::<T>(&query).await;
            if this.request_seq.get_untracked() != seq {
                log!("⏭️ Dropping stale {} reply", T::list_name());
                return;
            }
            match result {
                Ok(items) => {
                    log!("📥 Loaded {} {}", items.len(), T::list_name());
                    this.rows.update(|rows| rows.replace_all(items));
                }
                Err(e) => {
                    this.error.set(Some(e.to_string()));
                    this.feedback
                        .api_error(&format!("Failed to load {}", T::list_name()), &e);
                }
            }
            this.loading.set(false);
        });
    }

    pub fn set_filter(&self, filter: ListFilter) {
        if self.filter.get_untracked() != filter {
            self.filter.set(filter);
            self.fetch();
        }
    }

    pub fn set_status_filter(&self, status: Option<RecordStatus>) {
        self.status_filter.set(status);
        self.fetch();
    }

    pub fn visible(&self) -> Vec<T> {
        let search = self.search.get();
        let field = self.sort_field.get();
        let ascending = self.sort_ascending.get();
        self.rows
            .with(|rows| visible_rows(rows, &search, &field, ascending))
    }

    pub fn toggle_sort(&self, field: &str) {
        let (field, ascending) = next_sort(
            &self.sort_field.get_untracked(),
            self.sort_ascending.get_untracked(),
            field,
        );
        self.sort_field.set(field);
        self.sort_ascending.set(ascending);
    }

    /// Patch the list after a successful save; refetch when no record came back.
    pub fn apply_saved(&self, saved: Option<T>) {
        match saved {
            Some(record) => self.rows.update(|rows| rows.upsert(record)),
            None => self.fetch(),
        }
    }

    /// Delete after confirmation; the row leaves the list only once the server agrees.
    pub fn delete(&self, record: &T) {
        let name = record.description();
        if !confirm(&format!("Delete {} \"{}\"?", T::element_name(), name)) {
            return;
        }
        let this = *self;
        let id = record.id().to_string();
        spawn_local(async move {
            match crud_api::delete::<T>(&id).await {
                Ok(()) => {
                    this.rows.update(|rows| {
                        rows.remove(&id);
                    });
                    this.feedback
                        .success(format!("{} \"{}\" deleted", T::element_name(), name));
                }
                Err(e) => this
                    .feedback
                    .api_error(&format!("Failed to delete {}", T::element_name()), &e),
            }
        });
    }

    /// Flip active/inactive through an update request.
    pub fn toggle_status(&self, record: &T) {
        let this = *self;
        let record = record.clone();
        let next = record.status().toggled();
        spawn_local(async move {
            match crud_api::set_status(&record, next).await {
                Ok(saved) => {
                    this.apply_saved(saved);
                    this.feedback.success(format!(
                        "{} \"{}\" is now {}",
                        T::element_name(),
                        record.description(),
                        next.label().to_lowercase()
                    ));
                }
                Err(e) => this
                    .feedback
                    .api_error(&format!("Failed to update {}", T::element_name()), &e),
            }
        });
    }
}
