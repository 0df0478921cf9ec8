use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::constants::{
    CHECKOUT_FAILED_DESCRIPTION, CHECKOUT_FAILED_TITLE, DELETE_FAILED_DESCRIPTION,
    DELETE_FAILED_TITLE,
};

/// Visual style of a notification; every notification raised here reports a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Destructive,
}

/// User-visible notification rendered on top of a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn destructive(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: ToastVariant::Destructive,
        }
    }

    pub fn checkout_failed() -> Self {
        Self::destructive(CHECKOUT_FAILED_TITLE, CHECKOUT_FAILED_DESCRIPTION)
    }

    pub fn delete_failed() -> Self {
        Self::destructive(DELETE_FAILED_TITLE, DELETE_FAILED_DESCRIPTION)
    }
}
