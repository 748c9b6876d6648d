use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::catalog::dto::UndoDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct UndoCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl UndoCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct UndoCommandRequest {}

#[derive(Debug, Serialize)]
pub(crate) struct UndoCommandResponse {
    pub undone: UndoDto,
}

#[async_trait]
impl Command<UndoCommandRequest, UndoCommandResponse> for UndoCommand {
    async fn execute(&self, _req: UndoCommandRequest) -> Result<UndoCommandResponse, CommandError> {
        self.catalog_service.undo()
            .await.map_err(CommandError::from).map(|undone| UndoCommandResponse { undone })
    }
}
