//! Domain types and services.
//!
//! Purpose: hold everything the presentation shell needs that is independent
//! of transport — the user records shown in the table, the form controller
//! and its validation rules, and the roster service that reconciles operator
//! intents with the remote collection through the [`ports::UserDirectory`]
//! boundary.
//!
//! Public surface:
//! - [`UserRecord`] — a row of the displayed table.
//! - [`UserForm`] / [`SubmitIntent`] — the Create/Edit form state machine.
//! - [`UserRoster`] — the authoritative in-memory list and its operations.
//! - [`ports`] — the outbound boundary the roster calls through.

pub mod form;
pub mod name;
pub mod ports;
pub mod roster;
pub mod user;
pub mod validation;

pub use self::form::{FormMode, FormValues, SubmitIntent, UserForm};
pub use self::name::{PersonName, combine_name, split_full_name};
pub use self::roster::{RosterError, UserRoster};
pub use self::user::{DEPARTMENT_FALLBACK, UserRecord};
pub use self::validation::{Field, FieldError, ValidationFailure};
