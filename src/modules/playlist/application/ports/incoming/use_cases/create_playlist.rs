use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    playlist::application::{
        domain::{
            entities::{ImageUpload, Playlist},
            policies::upload_policy::{UploadPolicy, UploadPolicyError},
        },
        ports::outgoing::NewPlaylist,
    },
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreatePlaylistCommandError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid image: {0}")]
    InvalidImage(#[from] UploadPolicyError),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePlaylistError {
    #[error("Image storage error: {0}")]
    ImageStorageError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct CreatePlaylistCommand {
    name: String,
    description: Option<String>,
    link: String,
    user_id: UserId,
    user_name: String,
    image: Option<ImageUpload>,
}

impl CreatePlaylistCommand {
    pub fn builder() -> CreatePlaylistCommandBuilder {
        CreatePlaylistCommandBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn link(&self) -> &str {
        &self.link
    }
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
    pub fn image(&self) -> Option<&ImageUpload> {
        self.image.as_ref()
    }

    /// Row to persist once the image (if any) has been stored at `image_path`.
    pub fn to_new_playlist(&self, image_path: Option<String>) -> NewPlaylist {
        NewPlaylist {
            name: self.name.clone(),
            description: self.description.clone(),
            link: self.link.clone(),
            user_id: self.user_id.clone(),
            user_name: self.user_name.clone(),
            image: image_path,
        }
    }
}

#[derive(Debug, Default)]
pub struct CreatePlaylistCommandBuilder {
    name: Option<String>,
    description: Option<String>,
    link: Option<String>,
    user_id: Option<String>,
    user_name: Option<String>,
    image: Option<ImageUpload>,
}

impl CreatePlaylistCommandBuilder {
    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }
    pub fn description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }
    pub fn link(mut self, link: String) -> Self {
        self.link = Some(link);
        self
    }
    pub fn user_id(mut self, user_id: String) -> Self {
        self.user_id = Some(user_id);
        self
    }
    pub fn user_name(mut self, user_name: String) -> Self {
        self.user_name = Some(user_name);
        self
    }
    pub fn image(mut self, image: ImageUpload) -> Self {
        self.image = Some(image);
        self
    }

    /// Required fields are checked before the image so a form without
    /// `link` is rejected even when its upload is also invalid.
    pub fn build(self, policy: &UploadPolicy) -> Result<CreatePlaylistCommand, CreatePlaylistCommandError> {
        let present = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());

        let name = present(self.name);
        let link = present(self.link);
        let user_id = present(self.user_id);
        let user_name = present(self.user_name);

        let missing: Vec<&'static str> = [
            ("name", name.is_none()),
            ("link", link.is_none()),
            ("userId", user_id.is_none()),
            ("userName", user_name.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, absent)| absent.then_some(field))
        .collect();

        let (Some(name), Some(link), Some(user_id), Some(user_name)) =
            (name, link, user_id, user_name)
        else {
            return Err(CreatePlaylistCommandError::MissingFields(missing));
        };

        let image = self.image.filter(|upload| !upload.is_empty());
        if let Some(upload) = &image {
            policy.validate(upload)?;
        }

        Ok(CreatePlaylistCommand {
            name,
            description: present(self.description),
            link,
            user_id: UserId::from(user_id),
            user_name,
            image,
        })
    }
}

#[async_trait]
pub trait CreatePlaylistUseCase: Send + Sync {
    async fn execute(&self, command: CreatePlaylistCommand) -> Result<Playlist, CreatePlaylistError>;
}
