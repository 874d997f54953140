//! The Create/Edit user form state machine.

use serde::{Deserialize, Serialize};

use crate::domain::name::split_full_name;
use crate::domain::user::UserRecord;
use crate::domain::validation::{self, ValidationFailure};

/// Departments the form offers for selection.
///
/// The remote demo data set names these companies; the form constrains the
/// picker to them but validation only requires that some department is set.
pub const DEPARTMENT_OPTIONS: [&str; 10] = [
    "Romaguera-Crona",
    "Deckow-Crist",
    "Romaguera-Jacobson",
    "Robel-Corkery",
    "Keebler LLC",
    "Considine-Lockman",
    "Johns Group",
    "Abernathy Group",
    "Yost and Sons",
    "Hoeger LLC",
];

/// Raw field values bound to the form inputs.
///
/// Transient: values only outlive a submission as part of a
/// [`UserRecord`](crate::domain::UserRecord) the roster builds from them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    /// First name input.
    pub first_name: String,
    /// Last name input; may stay empty.
    pub last_name: String,
    /// Email input.
    pub email: String,
    /// Selected department.
    pub department: String,
}

/// Which record, if any, the form is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Composing a new user.
    Create,
    /// Editing the record with this roster id.
    Edit {
        /// Roster id of the record being edited.
        id: u64,
    },
}

/// A validated instruction the form emits towards the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitIntent {
    /// Append a new user built from these values.
    Create(FormValues),
    /// Replace the named record's fields with these values.
    Update {
        /// Roster id of the record to replace.
        id: u64,
        /// Validated replacement values.
        values: FormValues,
    },
}

/// Form controller with two modes: Create (unbound) and Edit (bound to an
/// existing record).
///
/// The controller owns the initial values the shell renders; the shell binds
/// inputs to its own copy and hands the raw values back on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    mode: FormMode,
    values: FormValues,
}

impl Default for FormMode {
    fn default() -> Self {
        Self::Create
    }
}

impl UserForm {
    /// A form in Create mode with all-empty values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> FormMode {
        self.mode
    }

    /// Values the shell should render into the inputs.
    #[must_use]
    pub const fn values(&self) -> &FormValues {
        &self.values
    }

    /// Bind the form to an existing record for editing.
    ///
    /// Pre-fills the fields by splitting the record's display name and
    /// copying its email and department. Returns the values for the shell to
    /// render.
    pub fn begin_edit(&mut self, record: &UserRecord) -> &FormValues {
        let name = split_full_name(&record.full_name);
        self.mode = FormMode::Edit { id: record.id };
        self.values = FormValues {
            first_name: name.first_name,
            last_name: name.last_name,
            email: record.email.clone(),
            department: record.department.clone(),
        };
        &self.values
    }

    /// Leave Edit mode and clear the fields.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Validate the raw values and emit the normalized intent.
    ///
    /// On success the form resets to Create mode with empty values, so a
    /// completed edit drops its binding. On failure nothing changes and no
    /// intent is emitted.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationFailure`] listing every violated field.
    pub fn submit(&mut self, raw: FormValues) -> Result<SubmitIntent, ValidationFailure> {
        validation::validate(&raw)?;

        let intent = match self.mode {
            FormMode::Create => SubmitIntent::Create(raw),
            FormMode::Edit { id } => SubmitIntent::Update { id, values: raw },
        };
        *self = Self::default();
        Ok(intent)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::validation::Field;
    use rstest::{fixture, rstest};

    #[fixture]
    fn record() -> UserRecord {
        UserRecord {
            id: 1,
            full_name: "Leanne Graham".to_owned(),
            email: "Sincere@april.biz".to_owned(),
            department: "Romaguera-Crona".to_owned(),
        }
    }

    fn john_doe() -> FormValues {
        FormValues {
            first_name: "John".to_owned(),
            last_name: "Doe".to_owned(),
            email: "john.doe@example.com".to_owned(),
            department: "Romaguera-Crona".to_owned(),
        }
    }

    #[rstest]
    fn starts_in_create_mode_with_empty_values() {
        let form = UserForm::new();
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.values(), &FormValues::default());
    }

    #[rstest]
    fn begin_edit_prefills_from_the_record(record: UserRecord) {
        let mut form = UserForm::new();
        let values = form.begin_edit(&record);

        assert_eq!(values.first_name, "Leanne");
        assert_eq!(values.last_name, "Graham");
        assert_eq!(values.email, "Sincere@april.biz");
        assert_eq!(values.department, "Romaguera-Crona");
        assert_eq!(form.mode(), FormMode::Edit { id: 1 });
    }

    #[rstest]
    fn cancel_returns_to_an_empty_create_form(record: UserRecord) {
        let mut form = UserForm::new();
        form.begin_edit(&record);

        form.cancel();

        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.values(), &FormValues::default());
    }

    #[rstest]
    fn submit_in_create_mode_emits_a_create_intent() {
        let mut form = UserForm::new();

        let intent = form.submit(john_doe()).expect("valid values");

        assert_eq!(intent, SubmitIntent::Create(john_doe()));
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.values(), &FormValues::default());
    }

    #[rstest]
    fn submit_in_edit_mode_emits_an_update_intent_and_unbinds(record: UserRecord) {
        let mut form = UserForm::new();
        form.begin_edit(&record);

        let intent = form.submit(john_doe()).expect("valid values");

        assert_eq!(
            intent,
            SubmitIntent::Update {
                id: 1,
                values: john_doe()
            }
        );
        assert_eq!(form.mode(), FormMode::Create, "a completed edit unbinds");
    }

    #[rstest]
    fn invalid_submission_emits_no_intent_and_keeps_the_binding(record: UserRecord) {
        let mut form = UserForm::new();
        form.begin_edit(&record);

        let failure = form.submit(FormValues::default()).expect_err("all required");

        assert!(failure.has(Field::FirstName));
        assert!(failure.has(Field::Email));
        assert!(failure.has(Field::Department));
        assert_eq!(form.mode(), FormMode::Edit { id: 1 }, "binding survives");
        assert_eq!(form.values().first_name, "Leanne", "values survive");
    }

    #[rstest]
    fn department_options_match_the_demo_companies() {
        assert!(DEPARTMENT_OPTIONS.contains(&"Romaguera-Crona"));
        assert_eq!(DEPARTMENT_OPTIONS.len(), 10);
    }
}
