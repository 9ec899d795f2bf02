mod repository;
mod service;

pub use self::repository::{
    DynSizeCommandRepository, DynSizeQueryRepository, SizeCommandRepositoryTrait,
    SizeQueryRepositoryTrait,
};
pub use self::service::{
    DynSizeCommandService, DynSizeQueryService, SizeCommandServiceTrait, SizeQueryServiceTrait,
};
