//! Records the console reads from the PointControl API.

pub mod absence;
pub mod company;
pub mod employee;
pub mod point;
pub mod role;
pub mod user;

pub use absence::{Absence, AbsenceStatus};
pub use company::Company;
pub use employee::{Address, Employee};
pub use point::Point;
pub use role::Role;
pub use user::User;
