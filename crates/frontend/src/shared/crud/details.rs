use contracts::domain::common::validation::{non_blank, parse_count, parse_number};
use contracts::domain::common::{AggregateRoot, FormDto, RecordStatus, ValidationError};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::crud_api;
use crate::shared::toast::Feedback;

/// Outcome of pressing Save, decided before anything is sent.
#[derive(Debug, PartialEq)]
pub enum SaveStep<D> {
    /// A save is already in flight
    Busy,
    Invalid(ValidationError),
    Send(D),
}

/// Only a valid form that is not already being saved reaches the network.
pub fn save_step<D: FormDto>(saving: bool, dto: D) -> SaveStep<D> {
    if saving {
        return SaveStep::Busy;
    }
    match dto.validate() {
        Ok(()) => SaveStep::Send(dto),
        Err(e) => SaveStep::Invalid(e),
    }
}

/// ViewModel of a create/edit form.
///
/// `form` is the editable DTO; `save_command` validates it and only then
/// sends the create or update request.
pub struct DetailsViewModel<T: AggregateRoot> {
    pub form: RwSignal<T::Dto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    feedback: Feedback,
}

impl<T: AggregateRoot> Clone for DetailsViewModel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: AggregateRoot> Copy for DetailsViewModel<T> {}

impl<T: AggregateRoot> DetailsViewModel<T> {
    pub fn new(record: Option<&T>, feedback: Feedback) -> Self {
        Self {
            form: RwSignal::new(record.map(|r| r.to_dto()).unwrap_or_default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            feedback,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with_untracked(|f| f.is_edit_mode())
    }

    pub fn title(&self) -> String {
        if self.is_edit_mode() {
            format!("Edit {}", T::element_name())
        } else {
            format!("New {}", T::element_name())
        }
    }

    /// Validate, then create or update. `on_saved` gets the saved record when
    /// the server returned one.
    pub fn save_command(&self, on_saved: Callback<Option<T>>) {
        let dto = match save_step(self.saving.get_untracked(), self.form.get_untracked()) {
            SaveStep::Busy => return,
            SaveStep::Invalid(e) => {
                self.error.set(Some(e.to_string()));
                self.feedback.validation(&e);
                return;
            }
            SaveStep::Send(dto) => dto,
        };

        let this = *self;
        self.error.set(None);
        self.saving.set(true);
        spawn_local(async move {
            match crud_api::save::<T>(&dto).await {
                Ok(saved) => {
                    log!("💾 {} saved", T::element_name());
                    let verb = if dto.is_edit_mode() { "updated" } else { "created" };
                    this.feedback
                        .success(format!("{} {}", T::element_name(), verb));
                    on_saved.run(saved);
                }
                Err(e) => {
                    this.error.set(Some(e.to_string()));
                    this.feedback
                        .api_error(&format!("Failed to save {}", T::element_name()), &e);
                }
            }
            this.saving.set(false);
        });
    }

    // ========================================================================
    // Field bindings
    // ========================================================================

    /// Two-way binding of a required text field.
    pub fn text(
        &self,
        get: fn(&T::Dto) -> String,
        set: fn(&mut T::Dto, String),
    ) -> (Signal<String>, Callback<String>) {
        let form = self.form;
        (
            Signal::derive(move || form.with(get)),
            Callback::new(move |value: String| form.update(|dto| set(dto, value))),
        )
    }

    /// Optional text: blank input stores `None`, anything else is kept as typed.
    pub fn opt_text(
        &self,
        get: fn(&T::Dto) -> Option<String>,
        set: fn(&mut T::Dto, Option<String>),
    ) -> (Signal<String>, Callback<String>) {
        let form = self.form;
        (
            Signal::derive(move || form.with(get).unwrap_or_default()),
            Callback::new(move |value: String| form.update(|dto| set(dto, non_blank(&value).map(|_| value)))),
        )
    }

    /// Decimal input. The raw text is kept so partial input ("12.") survives
    /// re-rendering; the form holds the parsed value.
    pub fn number(
        &self,
        get: fn(&T::Dto) -> Option<f64>,
        set: fn(&mut T::Dto, Option<f64>),
    ) -> (Signal<String>, Callback<String>) {
        let form = self.form;
        let initial = form.with_untracked(get).map(|v| v.to_string()).unwrap_or_default();
        let raw = RwSignal::new(initial);
        (
            raw.into(),
            Callback::new(move |value: String| {
                form.update(|dto| set(dto, parse_number(&value)));
                raw.set(value);
            }),
        )
    }

    /// Whole-number input, same raw-text handling as `number`.
    pub fn count(
        &self,
        get: fn(&T::Dto) -> Option<u32>,
        set: fn(&mut T::Dto, Option<u32>),
    ) -> (Signal<String>, Callback<String>) {
        let form = self.form;
        let initial = form.with_untracked(get).map(|v| v.to_string()).unwrap_or_default();
        let raw = RwSignal::new(initial);
        (
            raw.into(),
            Callback::new(move |value: String| {
                form.update(|dto| set(dto, parse_count(&value)));
                raw.set(value);
            }),
        )
    }

    /// Active/inactive checkbox of the form.
    pub fn active_flag(&self) -> (Signal<bool>, Callback<bool>) {
        let form = self.form;
        (
            Signal::derive(move || form.with(|dto| dto.status().is_active())),
            Callback::new(move |checked: bool| {
                form.update(|dto| {
                    dto.set_status(if checked {
                        RecordStatus::Active
                    } else {
                        RecordStatus::Inactive
                    })
                })
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a009_journey_stage::aggregate::JourneyStageDto;

    fn stage(name: &str, order: Option<u32>) -> JourneyStageDto {
        JourneyStageDto {
            name: name.to_string(),
            order,
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_required_field_stops_before_sending() {
        assert_eq!(
            save_step(false, stage("  ", Some(1))),
            SaveStep::Invalid(ValidationError::Required("Stage name"))
        );
        assert_eq!(
            save_step(false, stage("Site Survey", None)),
            SaveStep::Invalid(ValidationError::Required("Order"))
        );
    }

    #[test]
    fn test_valid_form_is_sent_once() {
        let dto = stage("Site Survey", Some(1));
        assert_eq!(save_step(false, dto.clone()), SaveStep::Send(dto.clone()));
        assert_eq!(save_step(true, dto), SaveStep::Busy);
    }
}
