use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::bill_store_datasource::BillStoreDatasource,
        models::bill_document_model::BillDocumentModel,
    },
    domain::repositories::bills_repository::BillsRepository,
    entities::Bill,
};

pub(crate) struct BillsRepositoryImpl<DS>
where
    DS: BillStoreDatasource,
{
    store_datasource: DS,
}

#[async_trait]
impl<DS> BillsRepository for BillsRepositoryImpl<DS>
where
    DS: BillStoreDatasource,
{
    async fn list(&self) -> Result<Vec<Bill>, ServerError> {
        self.store_datasource
            .list()
            .await?
            .into_iter()
            .map(|doc| Ok(BillDocumentModel::from_value(doc)?.into()))
            .collect()
    }
}

impl<DS> BillsRepositoryImpl<DS>
where
    DS: BillStoreDatasource,
{
    pub(crate) fn new(store_datasource: DS) -> Self {
        BillsRepositoryImpl { store_datasource }
    }
}
