mod billboard;
mod category;
mod color;
mod order;
mod product;
mod size;
mod store;

pub use self::billboard::BillboardRepository;
pub use self::category::CategoryRepository;
pub use self::color::ColorRepository;
pub use self::order::OrderRepository;
pub use self::product::ProductRepository;
pub use self::size::SizeRepository;
pub use self::store::StoreRepository;
