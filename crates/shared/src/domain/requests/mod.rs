mod billboard;
mod category;
mod color;
mod order;
mod product;
mod size;
mod store;

pub use self::billboard::{CreateBillboardRequest, FindAllBillboards, UpdateBillboardRequest};
pub use self::category::{CreateCategoryRequest, FindAllCategories, UpdateCategoryRequest};
pub use self::color::{CreateColorRequest, FindAllColors, UpdateColorRequest};
pub use self::order::{CreateCheckoutRequest, FindAllOrders};
pub use self::product::{
    CreateProductRequest, FindAllProducts, ProductImageRequest, UpdateProductRequest,
};
pub use self::size::{CreateSizeRequest, FindAllSizes, UpdateSizeRequest};
pub use self::store::{CreateStoreRequest, UpdateStoreRequest};

pub(crate) fn default_page() -> i32 {
    1
}

pub(crate) fn default_page_size() -> i32 {
    10
}
