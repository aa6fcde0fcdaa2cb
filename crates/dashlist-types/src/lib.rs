pub mod domain;
pub mod entity;
pub mod error;
pub mod filter;
pub mod limits;
pub mod page;
pub mod query;
pub mod sort;
pub mod tab;

pub use domain::*;
pub use entity::{EntityId, ListEntity, NoFilterKey, NoSortField, QueryField};
pub use error::{Error, Result};
pub use filter::FilterSet;
pub use limits::{Limits, ResourceKind, UsageTable};
pub use page::{DEFAULT_ROWS_PER_PAGE, PageInfo, Pagination, ROWS_PER_PAGE_CHOICES};
pub use query::ListQueryState;
pub use sort::{Sort, SortDirection};
pub use tab::{Tab, TabId, TabSelection};
