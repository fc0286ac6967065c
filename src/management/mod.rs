mod site_config;

pub use site_config::SiteConfigManager;
pub use site_config::TOP_TRACK_KEY;
pub use site_config::update_config;
