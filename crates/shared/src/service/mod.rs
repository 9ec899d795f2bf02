mod access;
mod billboard;
mod category;
mod color;
mod order;
mod product;
mod size;
mod store;

pub(crate) use self::access::ensure_store_owner;

pub use self::billboard::BillboardService;
pub use self::category::CategoryService;
pub use self::color::ColorService;
pub use self::order::{OrderService, OrderServiceDeps};
pub use self::product::ProductService;
pub use self::size::SizeService;
pub use self::store::StoreService;
