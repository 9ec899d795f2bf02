mod api;
mod billboard;
mod category;
mod color;
mod order;
mod pagination;
mod product;
mod size;
mod store;

pub use self::api::{ApiResponse, ApiResponsePagination};
pub use self::billboard::BillboardResponse;
pub use self::category::CategoryResponse;
pub use self::color::ColorResponse;
pub use self::order::{OrderItemResponse, OrderResponse};
pub use self::pagination::Pagination;
pub use self::product::{ProductImageResponse, ProductResponse};
pub use self::size::SizeResponse;
pub use self::store::StoreResponse;
