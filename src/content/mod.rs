//! Static copy for the landing page.
//!
//! Everything here is parsed once from `site.json` on first access and never
//! mutated afterwards.

use once_cell::sync::Lazy;
use serde::Deserialize;

const SITE_JSON: &str = include_str!("site.json");

static SITE: Lazy<SiteContent> = Lazy::new(|| {
    serde_json::from_str(SITE_JSON).expect("embedded site.json is malformed")
});

/// Glyph names the content refers to by kebab-case string. Drawn by
/// `components::icons::SvgIcon`.
#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Code,
    Camera,
    TrendingUp,
    ArrowRight,
    Close,
    Menu,
    MessageCircle,
    Smartphone,
    Zap,
    Send,
    AlertCircle,
    CheckCircle,
    ExternalLink,
    Instagram,
    Linkedin,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub price_start: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub challenge: Option<String>,
    #[serde(default)]
    pub solution: Option<String>,
    #[serde(default)]
    pub technologies: Option<Vec<String>>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct PricingTier {
    pub id: String,
    pub name: String,
    pub price: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub recommended: bool,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub speciality: String,
    pub description: String,
    pub phone: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SiteContent {
    pub services: Vec<Service>,
    pub projects: Vec<Project>,
    pub pricing: Vec<PricingTier>,
    pub team: Vec<TeamMember>,
    pub stats: Vec<Stat>,
}

impl SiteContent {
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

pub fn site() -> &'static SiteContent {
    &SITE
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn embedded_content_parses() {
        let site = site();
        assert_eq!(site.services.len(), 3);
        assert_eq!(site.projects.len(), 8);
        assert_eq!(site.pricing.len(), 3);
        assert_eq!(site.team.len(), 2);
        assert_eq!(site.stats.len(), 3);
    }

    #[test]
    fn project_ids_are_unique() {
        let ids: HashSet<_> = site().projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), site().projects.len());
    }

    #[test]
    fn exactly_one_tier_is_recommended() {
        let recommended: Vec<_> = site().pricing.iter().filter(|t| t.recommended).collect();
        assert_eq!(recommended.len(), 1);
        assert_eq!(recommended[0].name, "Heroic");
    }

    #[test]
    fn missing_recommended_flag_defaults_to_false() {
        let multiverse = site().pricing.iter().find(|t| t.id == "pro").unwrap();
        assert!(!multiverse.recommended);
    }

    #[test]
    fn project_lookup_by_id() {
        let project = site().project("7").unwrap();
        assert_eq!(project.title, "CRYPTO DASH");
        assert!(project.link.is_none());
        assert!(site().project("missing").is_none());
    }

    #[test]
    fn every_card_id_resolves_to_its_project() {
        for project in &site().projects {
            assert_eq!(site().project(&project.id), Some(project));
        }
    }

    #[test]
    fn service_icons_map_to_known_glyphs() {
        let icons: Vec<_> = site().services.iter().map(|s| s.icon).collect();
        assert_eq!(icons, vec![Icon::Code, Icon::Camera, Icon::TrendingUp]);
    }

    #[test]
    fn icon_names_are_kebab_case() {
        let icon: Icon = serde_json::from_str("\"message-circle\"").unwrap();
        assert_eq!(icon, Icon::MessageCircle);
        assert!(serde_json::from_str::<Icon>("\"MessageCircle\"").is_err());
    }
}
