use crate::icons::Icon;

#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub avatar: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureStatus {
    Active,
    Planned,
}

impl FeatureStatus {
    pub fn badge_label(self) -> &'static str {
        match self {
            FeatureStatus::Active => "运行中",
            FeatureStatus::Planned => "开发中",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            FeatureStatus::Active => "status-badge status-active",
            FeatureStatus::Planned => "status-badge status-planned",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            FeatureStatus::Active => "feature-icon feature-icon-active",
            FeatureStatus::Planned => "feature-icon feature-icon-planned",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub status: FeatureStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: Icon,
    pub label: &'static str,
}

/// In-page jump targets, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    About,
    Features,
    Team,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 4] = [Anchor::About, Anchor::Features, Anchor::Team, Anchor::Contact];

    pub fn id(self) -> &'static str {
        match self {
            Anchor::About => "about",
            Anchor::Features => "features",
            Anchor::Team => "team",
            Anchor::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Anchor::About => "关于我们",
            Anchor::Features => "特色玩法",
            Anchor::Team => "管理团队",
            Anchor::Contact => "加入 QQ 群",
        }
    }

    /// The mobile overlay words the contact link differently.
    pub fn mobile_label(self) -> &'static str {
        match self {
            Anchor::Contact => "加入社区",
            other => other.nav_label(),
        }
    }
}

pub static TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "StarAdmin",
        role: "服主 / 技术总监",
        description: "全栈开发，负责服务器核心架构与性能优化。拥有多年服务器运维经验。",
        avatar: Some("https://picsum.photos/200/200?random=1"),
    },
    TeamMember {
        name: "PixelArchitect",
        role: "总建筑师",
        description: "主导服务器主城及大型景观建设，审美在线，细节控。",
        avatar: Some("https://picsum.photos/200/200?random=2"),
    },
    TeamMember {
        name: "ModMaster",
        role: "玩法策划",
        description: "设计RPG数值与生存玩法，致力于平衡性与趣味性的完美统一。",
        avatar: Some("https://picsum.photos/200/200?random=3"),
    },
    TeamMember {
        name: "CommunityLead",
        role: "社区管理",
        description: "维护社区秩序，处理玩家反馈，举办服务器活动。",
        avatar: Some("https://picsum.photos/200/200?random=4"),
    },
];

pub static FEATURES: [Feature; 4] = [
    Feature {
        title: "建筑创造",
        description: "目前主打玩法。提供超大领地、WorldEdit支持、海量装饰性方块，释放你的创造力。",
        icon: Icon::Hammer,
        status: FeatureStatus::Active,
    },
    Feature {
        title: "生存探索",
        description: "计划2025年Q2上线。定制地形生成，硬核生存挑战，经济系统。",
        icon: Icon::Map,
        status: FeatureStatus::Planned,
    },
    Feature {
        title: "RPG 剧情",
        description: "正在筹备中。沉浸式主线剧情，职业系统，副本挑战。",
        icon: Icon::Sword,
        status: FeatureStatus::Planned,
    },
    Feature {
        title: "高性能硬件",
        description: "采用实体公网服务器，高性能CPU与大内存，拒绝卡顿，保障流畅体验。",
        icon: Icon::Cpu,
        status: FeatureStatus::Active,
    },
];

pub static SOCIALS: [SocialLink; 3] = [
    SocialLink {
        name: "Bilibili",
        url: "#",
        icon: Icon::Youtube,
        label: "官方 B站",
    },
    SocialLink {
        name: "Douyin",
        url: "#",
        icon: Icon::Video,
        label: "官方 抖音",
    },
    SocialLink {
        name: "Github",
        url: "https://github.com",
        icon: Icon::Github,
        label: "开源项目",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_keeps_source_order() {
        let names: Vec<_> = TEAM.iter().map(|m| m.name).collect();
        assert_eq!(names, ["StarAdmin", "PixelArchitect", "ModMaster", "CommunityLead"]);
    }

    #[test]
    fn team_required_fields_non_empty() {
        for member in TEAM.iter() {
            assert!(!member.name.is_empty());
            assert!(!member.role.is_empty());
            assert!(!member.description.is_empty());
        }
    }

    #[test]
    fn features_keep_source_order_and_status() {
        let rows: Vec<_> = FEATURES.iter().map(|f| (f.title, f.status)).collect();
        assert_eq!(
            rows,
            [
                ("建筑创造", FeatureStatus::Active),
                ("生存探索", FeatureStatus::Planned),
                ("RPG 剧情", FeatureStatus::Planned),
                ("高性能硬件", FeatureStatus::Active),
            ]
        );
        assert!(FEATURES.iter().all(|f| !f.description.is_empty()));
    }

    #[test]
    fn badge_follows_status() {
        assert_eq!(FeatureStatus::Active.badge_label(), "运行中");
        assert_eq!(FeatureStatus::Planned.badge_label(), "开发中");
        assert_ne!(FeatureStatus::Active.badge_class(), FeatureStatus::Planned.badge_class());
        assert_ne!(FeatureStatus::Active.icon_class(), FeatureStatus::Planned.icon_class());
    }

    #[test]
    fn socials_keep_source_order() {
        let names: Vec<_> = SOCIALS.iter().map(|s| s.name).collect();
        assert_eq!(names, ["Bilibili", "Douyin", "Github"]);
        for social in SOCIALS.iter() {
            assert!(social.url == "#" || social.url.starts_with("https://"));
            assert!(!social.label.is_empty());
        }
    }

    #[test]
    fn anchors_are_fixed_ids() {
        let ids: Vec<_> = Anchor::ALL.iter().map(|a| a.id()).collect();
        assert_eq!(ids, ["about", "features", "team", "contact"]);
        assert_eq!(Anchor::Team.href(), "#team");
        assert_eq!(Anchor::Contact.mobile_label(), "加入社区");
        assert_eq!(Anchor::About.mobile_label(), Anchor::About.nav_label());
    }
}
