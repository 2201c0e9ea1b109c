#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("version parent chain forms a cycle: {}", ids.join(" -> "))]
    CyclicParent { ids: Vec<String> },

    #[error("version list JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
