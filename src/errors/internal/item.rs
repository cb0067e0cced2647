use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ItemError {
    #[error("{entity} not found, id: {id}")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Item already exists, id: {id}")]
    AlreadyExists { id: i32 },
}

impl ItemError {
    pub fn not_found(id: i32) -> Self {
        Self::NotFound { entity: "Item", id }
    }
}
