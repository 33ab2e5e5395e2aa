use contracts::domain::a001_order::{PricebookEntry, PricebookEntryId};
use serde::Serialize;

use crate::shared::pagination::Pagination;
use crate::shared::state::StateCell;

/// Сколько строк каталога показываем на одной странице таблицы
pub const RECORDS_PER_PAGE: usize = 10;

/// Flat table row for the orderable-products datatable: the nested product
/// name is pulled up so the table can bind to plain fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRow {
    pub id: PricebookEntryId,
    pub name: String,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
}

impl From<PricebookEntry> for ProductRow {
    fn from(entry: PricebookEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.product.name,
            unit_price: entry.unit_price,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProductListState {
    /// Full fetched row set; the pager slices it for display
    pub products: Vec<ProductRow>,
    pub pager: Pagination<ProductRow>,
    /// True while the orderable-products fetch is in flight
    pub loading: bool,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            pager: Pagination::new(RECORDS_PER_PAGE),
            loading: false,
        }
    }
}

pub fn create_state() -> StateCell<ProductListState> {
    StateCell::new(ProductListState::default())
}
