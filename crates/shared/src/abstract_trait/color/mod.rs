mod repository;
mod service;

pub use self::repository::{
    ColorCommandRepositoryTrait, ColorQueryRepositoryTrait, DynColorCommandRepository,
    DynColorQueryRepository,
};
pub use self::service::{
    ColorCommandServiceTrait, ColorQueryServiceTrait, DynColorCommandService, DynColorQueryService,
};
