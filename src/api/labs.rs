// ABOUTME: Lab report endpoints: list reports, fetch one, upload new bloodwork
// ABOUTME: Upload is enveloped; reads return bare documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

//! Lab report endpoints

use uuid::Uuid;

use crate::client::ApiClient;
use crate::constants::routes;
use crate::errors::ApiResult;
use crate::models::labs::{LabReport, LabReportUpload};
use crate::models::Envelope;

/// Lab report endpoints
#[derive(Debug, Clone, Copy)]
pub struct LabsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> LabsApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// All lab reports of the user, newest first
    ///
    /// # Errors
    /// See [`crate::errors::ApiError`].
    pub async fn reports(&self) -> ApiResult<Vec<LabReport>> {
        self.client.get(routes::LAB_REPORTS).await
    }

    /// One lab report by id
    ///
    /// # Errors
    /// Returns [`crate::errors::ApiError::Http`] with status 404 when the
    /// report does not exist.
    pub async fn report(&self, report_id: Uuid) -> ApiResult<LabReport> {
        let path = format!("{}/{report_id}", routes::LAB_REPORTS);
        self.client.get(&path).await
    }

    /// Upload a lab report
    ///
    /// The backend grades each marker against its reference range and
    /// attaches an AI summary; the returned report carries both.
    ///
    /// # Errors
    /// Returns [`crate::errors::ApiError::InvalidInput`] when the upload
    /// fails client-side validation, and
    /// [`crate::errors::ApiError::Application`] when the backend rejects it.
    pub async fn upload(&self, upload: &LabReportUpload) -> ApiResult<LabReport> {
        upload.validate()?;
        let envelope: Envelope<LabReport> = self.client.post(routes::LAB_REPORTS, upload).await?;
        envelope.into_result()
    }
}
