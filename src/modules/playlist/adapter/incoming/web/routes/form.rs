use actix_multipart::{Field, Multipart};
use actix_web::HttpResponse;
use futures::StreamExt;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    playlist::application::{
        domain::{entities::ImageUpload, policies::upload_policy::UploadPolicyError},
        ports::incoming::use_cases::{CreatePlaylistCommandBuilder, CreatePlaylistCommandError},
    },
    shared::api::ApiResponse,
};

const MAX_TEXT_FIELD_BYTES: u64 = 64 * 1024;

/// Documentation shape of the `multipart/form-data` body.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistUploadForm {
    pub name: String,
    pub description: Option<String>,
    pub link: String,
    pub user_id: String,
    pub user_name: String,
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}

#[derive(Debug, thiserror::Error)]
pub(super) enum FormError {
    #[error("Malformed multipart body: {0}")]
    Malformed(String),

    #[error("Field {field} exceeds {max_bytes} bytes")]
    TooLarge { field: String, max_bytes: u64 },

    #[error("Field {0} is not valid UTF-8")]
    InvalidText(String),
}

/// Raw form values as received; validation happens in the command builder.
#[derive(Debug, Default)]
pub(super) struct PlaylistForm {
    name: Option<String>,
    description: Option<String>,
    link: Option<String>,
    user_id: Option<String>,
    user_name: Option<String>,
    image: Option<ImageUpload>,
}

impl PlaylistForm {
    pub(super) async fn read(mut payload: Multipart, max_image_bytes: u64) -> Result<Self, FormError> {
        let mut form = Self::default();

        while let Some(item) = payload.next().await {
            let mut field = item.map_err(|e| FormError::Malformed(e.to_string()))?;

            let (name, file_name) = {
                let disposition = field.content_disposition();
                (
                    disposition.get_name().map(str::to_string),
                    disposition.get_filename().map(str::to_string),
                )
            };
            let Some(name) = name else {
                continue;
            };

            if name == "image" {
                let content_type = field.content_type().map(|m| m.essence_str().to_string());
                let bytes = read_field(&mut field, &name, max_image_bytes).await?;
                form.image = Some(ImageUpload {
                    file_name,
                    content_type,
                    bytes,
                });
                continue;
            }

            let bytes = read_field(&mut field, &name, MAX_TEXT_FIELD_BYTES).await?;
            let slot = match name.as_str() {
                "name" => &mut form.name,
                "description" => &mut form.description,
                "link" => &mut form.link,
                "userId" => &mut form.user_id,
                "userName" => &mut form.user_name,
                other => {
                    tracing::debug!(field = other, "Ignoring unknown playlist form field");
                    continue;
                }
            };
            *slot = Some(String::from_utf8(bytes).map_err(|_| FormError::InvalidText(name))?);
        }

        Ok(form)
    }

    pub(super) fn into_builder(self) -> CreatePlaylistCommandBuilder {
        let mut builder = CreatePlaylistCommandBuilder::default();
        if let Some(v) = self.name {
            builder = builder.name(v);
        }
        if let Some(v) = self.description {
            builder = builder.description(v);
        }
        if let Some(v) = self.link {
            builder = builder.link(v);
        }
        if let Some(v) = self.user_id {
            builder = builder.user_id(v);
        }
        if let Some(v) = self.user_name {
            builder = builder.user_name(v);
        }
        if let Some(v) = self.image {
            builder = builder.image(v);
        }
        builder
    }
}

async fn read_field(field: &mut Field, name: &str, limit: u64) -> Result<Vec<u8>, FormError> {
    let mut buf: Vec<u8> = Vec::new();
    while let Some(chunk) = field.next().await {
        let bytes = chunk.map_err(|e| FormError::Malformed(e.to_string()))?;
        if (buf.len() + bytes.len()) as u64 > limit {
            return Err(FormError::TooLarge {
                field: name.to_string(),
                max_bytes: limit,
            });
        }
        buf.extend_from_slice(&bytes);
    }
    Ok(buf)
}

pub(super) fn map_form_error(e: FormError) -> HttpResponse {
    match e {
        FormError::TooLarge { .. } => {
            ApiResponse::payload_too_large("FILE_TOO_LARGE", &e.to_string())
        }
        FormError::Malformed(_) | FormError::InvalidText(_) => {
            tracing::warn!(error = %e, "Rejected playlist form");
            ApiResponse::bad_request("INVALID_FORM", &e.to_string())
        }
    }
}

pub(super) fn map_command_error(e: CreatePlaylistCommandError) -> HttpResponse {
    match e {
        CreatePlaylistCommandError::MissingFields(_) => {
            ApiResponse::bad_request("MISSING_FIELDS", &e.to_string())
        }
        CreatePlaylistCommandError::InvalidImage(UploadPolicyError::FileTooLarge { .. }) => {
            ApiResponse::payload_too_large("FILE_TOO_LARGE", &e.to_string())
        }
        CreatePlaylistCommandError::InvalidImage(UploadPolicyError::InvalidMimeType(_)) => {
            ApiResponse::bad_request("INVALID_MIME_TYPE", &e.to_string())
        }
        CreatePlaylistCommandError::InvalidImage(UploadPolicyError::InvalidFileName) => {
            ApiResponse::bad_request("INVALID_FILE_NAME", &e.to_string())
        }
    }
}
