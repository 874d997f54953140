//! DTOs for the user collection's JSON bodies.
//!
//! The adapter decodes into these transport DTOs first, then maps into the
//! port's records in one pass. The remote records carry more fields than the
//! table needs (address, phone, website); serde drops them on the floor.

use serde::{Deserialize, Serialize};

use crate::domain::ports::{RemoteUser, UserPayload};

#[derive(Debug, Deserialize)]
pub(super) struct RemoteUserDto {
    pub(super) id: u64,
    pub(super) name: String,
    pub(super) email: String,
    pub(super) company: Option<CompanyDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct CompanyDto {
    pub(super) name: String,
}

impl RemoteUserDto {
    pub(super) fn into_remote_user(self) -> RemoteUser {
        RemoteUser {
            id: self.id,
            name: self.name,
            email: self.email,
            company_name: self.company.map(|company| company.name),
        }
    }
}

/// Body written on create and update: the department travels as the nested
/// company name.
#[derive(Debug, Serialize)]
pub(super) struct UserPayloadDto {
    name: String,
    email: String,
    company: CompanyDto,
}

impl From<&UserPayload> for UserPayloadDto {
    fn from(payload: &UserPayload) -> Self {
        Self {
            name: payload.name.clone(),
            email: payload.email.clone(),
            company: CompanyDto {
                name: payload.department.clone(),
            },
        }
    }
}
