/// Site-wide literals substituted into the page.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub brand: &'static str,
    pub server_address: &'static str,
    pub group_id: &'static str,
    pub hero_background: &'static str,
    pub about_image: &'static str,
    pub copyright: &'static str,
}

static SITE_CONFIG: SiteConfig = SiteConfig {
    brand: "StarShine",
    server_address: "play.starshine.example.com",
    group_id: "123456789",
    hero_background: "https://t.alcy.cc/moez",
    about_image: "https://picsum.photos/600/400?grayscale",
    copyright: "© 2024-2025 StarShine Server. Not affiliated with Mojang Studios.",
};

pub fn site_config() -> &'static SiteConfig {
    &SITE_CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_targets_are_present() {
        let config = site_config();
        assert_eq!(config.server_address, "play.starshine.example.com");
        assert_eq!(config.group_id, "123456789");
        assert!(config.group_id.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn same_instance_every_call() {
        assert!(std::ptr::eq(site_config(), site_config()));
    }
}
