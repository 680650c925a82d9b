use crate::api::response::{MediaFileResponse, MediaListResponse, MediaType};
use crate::services::errors::MediaServiceError;
use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;
use std::path::{Path, PathBuf};
use tokio::fs;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 20;

/// Classifies an upload by its declared content type.
pub fn media_type_for_content_type(content_type: &str) -> MediaType {
    if content_type.contains("image") {
        MediaType::Image
    } else {
        MediaType::Glb
    }
}

/// Stored files carry no content type, so listings classify by extension.
fn media_type_for_file_name(name: &str) -> MediaType {
    match extension_of(name).as_deref() {
        Some("glb") | Some("gltf") => MediaType::Glb,
        _ => MediaType::Image,
    }
}

fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ext.chars()
                .filter(char::is_ascii_alphanumeric)
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|ext| !ext.is_empty())
}

/// `<epoch millis>-<random>.<extension>`, or without extension when the
/// original name has none that survives sanitizing.
pub fn stored_file_name(original_name: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let random: u32 = rand::thread_rng().gen_range(0..1_000_000_000);

    match extension_of(original_name) {
        Some(ext) => format!("{}-{}.{}", millis, random, ext),
        None => format!("{}-{}", millis, random),
    }
}

/// Rejects ids that could address anything outside the media directory.
pub fn validate_media_id(id: &str) -> Result<(), MediaServiceError> {
    let id = id.trim();
    if id.is_empty()
        || id.contains('/')
        || id.contains('\\')
        || id.contains("..")
        || id.contains('\0')
    {
        return Err(MediaServiceError::InvalidId(id.to_string()));
    }

    Ok(())
}

/// Stores uploaded images and GLB models in a local directory.
#[derive(Debug, Clone)]
pub struct MediaService {
    media_dir: PathBuf,
    base_url: String,
}

impl MediaService {
    pub fn new(media_dir: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        MediaService {
            media_dir: media_dir.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn media_dir(&self) -> &Path {
        &self.media_dir
    }

    fn url_for(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }

    pub async fn save_file(
        &self,
        original_name: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<MediaFileResponse, MediaServiceError> {
        fs::create_dir_all(&self.media_dir).await?;

        let id = stored_file_name(original_name);
        fs::write(self.media_dir.join(&id), bytes).await?;

        tracing::info!("Stored upload {} as {} ({} bytes)", original_name, id, bytes.len());

        Ok(MediaFileResponse {
            url: self.url_for(&id),
            id,
            name: original_name.to_string(),
            media_type: media_type_for_content_type(content_type),
            size: bytes.len() as u64,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }

    /// Newest first. A missing media directory lists as empty.
    pub async fn list_files(
        &self,
        media_type: Option<MediaType>,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Result<MediaListResponse, MediaServiceError> {
        let page = page.filter(|p| *p >= 1).unwrap_or(DEFAULT_PAGE);
        let limit = limit.filter(|l| *l >= 1).unwrap_or(DEFAULT_LIMIT);

        let mut files: Vec<(DateTime<Utc>, MediaFileResponse)> = Vec::new();

        let mut entries = match fs::read_dir(&self.media_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(MediaListResponse {
                    items: Vec::new(),
                    total: 0,
                    page,
                    limit,
                });
            }
            Err(e) => return Err(e.into()),
        };

        while let Some(entry) = entries.next_entry().await? {
            let metadata = entry.metadata().await?;
            if !metadata.is_file() {
                continue;
            }

            let Some(id) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };

            let kind = media_type_for_file_name(&id);
            if media_type.is_some_and(|wanted| wanted != kind) {
                continue;
            }

            let modified: DateTime<Utc> = metadata
                .modified()
                .map(DateTime::from)
                .unwrap_or_else(|_| Utc::now());

            files.push((
                modified,
                MediaFileResponse {
                    url: self.url_for(&id),
                    name: id.clone(),
                    id,
                    media_type: kind,
                    size: metadata.len(),
                    created_at: modified.to_rfc3339_opts(SecondsFormat::Millis, true),
                },
            ));
        }

        files.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.id.cmp(&a.1.id)));

        let total = files.len();
        let skip = usize::try_from((page - 1).saturating_mul(limit)).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);

        let items = files
            .into_iter()
            .skip(skip)
            .take(take)
            .map(|(_, file)| file)
            .collect();

        Ok(MediaListResponse {
            items,
            total,
            page,
            limit,
        })
    }

    pub async fn delete_file(&self, id: &str) -> Result<(), MediaServiceError> {
        validate_media_id(id)?;
        let id = id.trim();

        match fs::remove_file(self.media_dir.join(id)).await {
            Ok(()) => {
                tracing::info!("Deleted media file {}", id);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(MediaServiceError::NotFound(id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Every id is validated before anything is removed; ids that are already
    /// gone are skipped.
    pub async fn delete_files(&self, ids: &[&str]) -> Result<usize, MediaServiceError> {
        for id in ids {
            validate_media_id(id)?;
        }

        let mut deleted = 0;
        for id in ids {
            match self.delete_file(id).await {
                Ok(()) => deleted += 1,
                Err(MediaServiceError::NotFound(missing)) => {
                    tracing::warn!("Media file {} already removed", missing);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(deleted)
    }
}
