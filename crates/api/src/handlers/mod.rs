pub mod contact;
pub mod profile;
pub mod projects;
pub mod testimonials;
