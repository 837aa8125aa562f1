use crate::models::AssetKind;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("A renderer for {kind} assets is already registered ({existing})")]
    DuplicateRenderer { kind: AssetKind, existing: String },
    #[error("No renderer registered for {0} assets")]
    MissingRenderer(AssetKind),
    #[error("Unknown asset type: {0}")]
    UnknownKind(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
