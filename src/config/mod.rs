pub mod settings;
pub mod yml_settings;

pub use settings::Settings;
