mod repository;
mod service;

pub use self::repository::{
    DynStoreCommandRepository, DynStoreQueryRepository, StoreCommandRepositoryTrait,
    StoreQueryRepositoryTrait,
};
pub use self::service::{
    DynStoreCommandService, DynStoreQueryService, StoreCommandServiceTrait, StoreQueryServiceTrait,
};
