//! Effect handlers for the TUI runtime.
//!
//! Handlers are async functions that perform the I/O for one effect and
//! return the resulting `UiEvent`. They never touch `AppState`; the session
//! they receive is a snapshot taken when the effect was dispatched.

use std::path::{Path, PathBuf};

use social_core::api::{ApiClient, ApiError, Failure};
use social_core::auth::{self, Credentials};
use social_core::media::{MAX_DISCOVERY_DEPTH, MediaFile, UploadRequest, discover_media};
use social_core::models::PostId;
use social_core::session::Session;
use tracing::warn;

use crate::common::TaskId;
use crate::effects::UiEffect;
use crate::events::UiEvent;

/// Runs an async effect. Returns `None` for effects the runtime handles
/// inline.
pub(crate) async fn perform(api: ApiClient, session: Session, effect: UiEffect) -> Option<UiEvent> {
    let event = match effect {
        UiEffect::Login { task, credentials } => login(&api, task, credentials).await,
        UiEffect::Register { task, credentials } => register(&api, task, credentials).await,
        UiEffect::LoadFeed { task } => load_feed(&api, &session, task).await,
        UiEffect::DeletePost { task, id } => delete_post(&api, &session, task, id).await,
        UiEffect::UploadPost {
            task,
            path,
            caption,
        } => upload_post(&api, &session, task, &path, caption).await,
        UiEffect::DiscoverMedia { task, root } => media_discovery(task, root).await,
        UiEffect::Quit | UiEffect::OpenUrl { .. } => return None,
    };
    Some(event)
}

pub async fn login(api: &ApiClient, task: TaskId, credentials: Credentials) -> UiEvent {
    let result = auth::login(api, &credentials).await;
    UiEvent::LoginFinished { task, result }
}

pub async fn register(api: &ApiClient, task: TaskId, credentials: Credentials) -> UiEvent {
    let result = auth::register(api, &credentials).await;
    UiEvent::RegisterFinished { task, result }
}

pub async fn load_feed(api: &ApiClient, session: &Session, task: TaskId) -> UiEvent {
    let result = api.feed(session).await;
    UiEvent::FeedLoaded { task, result }
}

pub async fn delete_post(api: &ApiClient, session: &Session, task: TaskId, id: PostId) -> UiEvent {
    let result = api.delete_post(session, &id).await;
    UiEvent::PostDeleted { task, result }
}

/// Reads the file and submits it. An unreadable file is an upload failure.
pub async fn upload_post(
    api: &ApiClient,
    session: &Session,
    task: TaskId,
    path: &Path,
    caption: Option<String>,
) -> UiEvent {
    let result = match MediaFile::read(path).await {
        Ok(file) => api.upload_post(session, UploadRequest { file, caption }).await,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read media file");
            Err(ApiError::Upload(Failure::Local(e.to_string())))
        }
    };
    UiEvent::PostUploaded { task, result }
}

pub async fn media_discovery(task: TaskId, root: PathBuf) -> UiEvent {
    let files = tokio::task::spawn_blocking(move || discover_media(&root, MAX_DISCOVERY_DEPTH))
        .await
        .unwrap_or_default();
    UiEvent::MediaDiscovered { task, files }
}
