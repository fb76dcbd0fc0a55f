pub mod model;
pub mod page;
pub mod query;
pub mod repo;
pub mod store;

pub use model::{BatchStatus, JobInstance};
pub use page::PageWindow;
pub use repo::{JobInstanceRepo, SearchableJobInstances};
pub use store::JobInstanceStore;
