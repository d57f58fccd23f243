//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod message_repo;
pub mod profile_repo;
pub mod project_repo;
pub mod testimonial_repo;

pub use message_repo::MessageRepo;
pub use profile_repo::ProfileRepo;
pub use project_repo::ProjectRepo;
pub use testimonial_repo::TestimonialRepo;
