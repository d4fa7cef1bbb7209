use contracts::domain::location::{FetchRequest, LocationCascade, LocationLevel, LocationSelection};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::fetch_locations;

/// Reactive handle over a `LocationCascade`.
#[derive(Clone, Copy)]
pub struct LocationsHandle {
    cascade: RwSignal<LocationCascade>,
}

/// Create a cascade and start loading the state list.
pub fn use_locations() -> LocationsHandle {
    let handle = LocationsHandle {
        cascade: RwSignal::new(LocationCascade::new()),
    };
    let request = handle.cascade.try_update(|c| c.load_states());
    if let Some(request) = request {
        handle.run(request);
    }
    handle
}

impl LocationsHandle {
    fn run(&self, request: FetchRequest) {
        let cascade = self.cascade;
        spawn_local(async move {
            match fetch_locations(&request).await {
                Ok(items) => {
                    let count = items.len();
                    let applied = cascade.try_update(|c| c.apply(&request, items)).unwrap_or(false);
                    if applied {
                        log!("📍 {} options: {}", request.level.label(), count);
                    } else {
                        log!("⏭️ Stale {} reply dropped (ticket {})", request.level.label(), request.ticket);
                    }
                }
                Err(e) => {
                    log::warn!("Location fetch failed: {}", e);
                    cascade.update(|c| {
                        c.fail(&request, &e.to_string());
                    });
                }
            }
        });
    }

    /// Select (or clear with an empty id) a level; children reset and reload.
    pub fn select(&self, level: LocationLevel, id: String) {
        let request = self.cascade.try_update(|c| c.select(level, Some(id))).flatten();
        if let Some(request) = request {
            self.run(request);
        }
    }

    /// Preselect ids of an edited record and load the lists below them.
    pub fn restore(&self, selection: &LocationSelection) {
        let requests = self
            .cascade
            .try_update(|c| c.restore(selection))
            .unwrap_or_default();
        for request in requests {
            self.run(request);
        }
    }

    /// `(id, name)` pairs for a select.
    pub fn options(&self, level: LocationLevel) -> Vec<(String, String)> {
        self.cascade.with(|c| {
            c.options(level)
                .iter()
                .map(|l| (l.id.clone(), l.name.clone()))
                .collect()
        })
    }

    pub fn selected(&self, level: LocationLevel) -> String {
        self.cascade
            .with(|c| c.selected(level).map(str::to_string).unwrap_or_default())
    }

    pub fn selection(&self) -> LocationSelection {
        self.cascade.with(|c| c.selection())
    }

    pub fn is_loading(&self, level: LocationLevel) -> bool {
        self.cascade.with(|c| c.is_loading(level))
    }

    pub fn error(&self) -> Option<String> {
        self.cascade.with(|c| c.error().map(str::to_string))
    }
}
