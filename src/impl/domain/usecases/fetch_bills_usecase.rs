use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::bill_store_datasource::BillStoreDatasource,
        repositories::bills_repository_impl::BillsRepositoryImpl,
    },
    domain::{
        logic::display_format::{format_date, format_status, formatted_or_raw},
        repositories::bills_repository::BillsRepository,
    },
    entities::{Bill, DisplayBill},
};

#[async_trait]
pub trait FetchBillsUsecase: Send + Sync {
    /// Current employee's bills shaped for display, in store order (sorting
    /// is the presenter's job). Per-field formatting failures fall back to
    /// the raw stored value; only a failing store call rejects.
    async fn fetch_bills(&self) -> Result<Vec<DisplayBill>, ServerError>;
}

pub(crate) struct FetchBillsUsecaseImpl<R>
where
    R: BillsRepository,
{
    bills_repository: R,
}

#[async_trait]
impl<R> FetchBillsUsecase for FetchBillsUsecaseImpl<R>
where
    R: BillsRepository,
{
    async fn fetch_bills(&self) -> Result<Vec<DisplayBill>, ServerError> {
        let bills = self.bills_repository.list().await?;
        Ok(bills.into_iter().map(shape_for_display).collect())
    }
}

fn shape_for_display(bill: Bill) -> DisplayBill {
    let date = formatted_or_raw(format_date(&bill.date), &bill.date, "date", &bill.id);
    let status = formatted_or_raw(format_status(&bill.status), &bill.status, "status", &bill.id);
    DisplayBill {
        id: bill.id,
        email: bill.email,
        date,
        amount: bill.amount,
        expense_type: bill.expense_type,
        status,
        receipt_url: bill.receipt_url,
        commentary: bill.commentary,
    }
}

impl<DS> FetchBillsUsecaseImpl<BillsRepositoryImpl<DS>>
where
    DS: BillStoreDatasource,
{
    pub(crate) fn new(store_datasource: DS) -> Self {
        FetchBillsUsecaseImpl {
            bills_repository: BillsRepositoryImpl::new(store_datasource),
        }
    }
}
