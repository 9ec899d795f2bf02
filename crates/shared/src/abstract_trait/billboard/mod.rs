mod repository;
mod service;

pub use self::repository::{
    BillboardCommandRepositoryTrait, BillboardQueryRepositoryTrait, DynBillboardCommandRepository,
    DynBillboardQueryRepository,
};
pub use self::service::{
    BillboardCommandServiceTrait, BillboardQueryServiceTrait, DynBillboardCommandService,
    DynBillboardQueryService,
};
