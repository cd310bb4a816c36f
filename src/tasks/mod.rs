//! The to-do list: task records, the state container, persistence, and
//! the derived views (filters, counts, calendar grid, time labels).

pub mod calendar;
pub mod id;
pub mod list;
pub mod models;
pub mod store;
pub mod timefmt;
pub mod views;

pub use list::{Mutation, TaskList};
pub use models::{Filter, Task};
pub use store::TaskBook;
