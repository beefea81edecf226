pub mod model;
pub mod spec;
pub mod task;

pub use model::Model;
pub use spec::ModelSpec;
pub use task::Task;
