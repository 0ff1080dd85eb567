// User domain module
// Portal accounts used for admin sign-in

pub mod value_objects;

pub use value_objects::Email;
