pub mod settings;

pub use settings::{Secrets, ServiceProfile};
