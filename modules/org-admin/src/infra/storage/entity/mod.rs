pub mod invoice;
pub mod member;
pub mod org_assignment;
