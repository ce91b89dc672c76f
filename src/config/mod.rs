mod defaults;
mod io;
mod schema;
mod validate;

pub use io::load_config;
#[allow(unused_imports)]
pub use schema::{Alert, Config, Report, Window};
#[allow(unused_imports)]
pub use validate::ConfigError;
