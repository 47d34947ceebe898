//! `recordkeep-core`: building blocks shared by every record-keeping program.
//!
//! This crate contains the entity capability, the generic in-memory repository,
//! the domain error model and the presentation sink. No file or console IO
//! happens here apart from the stdout presenter.

pub mod entity;
pub mod error;
pub mod id;
pub mod presenter;
pub mod report;
pub mod repository;
pub mod shared;
pub mod value_object;

pub use entity::{Entity, Stocked};
pub use error::{DomainError, DomainResult};
pub use presenter::{ConsolePresenter, MemoryPresenter, Presenter};
pub use report::{Outcome, Report};
pub use repository::Repository;
pub use shared::SharedRepository;
pub use value_object::ValueObject;
