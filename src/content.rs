use log::error;
use serde::Deserialize;
use yew::prelude::*;

const CONTENT_JSON: &str = include_str!("../assets/content.json");

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Gauge,
    Settings,
    ShieldCheck,
    Microscope,
    Cpu,
    Search,
    MapPin,
    Phone,
    Mail,
    Instagram,
    ChevronRight,
    Menu,
    Close,
    ArrowRight,
    MessageSquare,
}

// Stroke paths on a 24x24 grid.
const GLYPHS: &[(Icon, &[&str])] = &[
    (Icon::Gauge, &["m12 14 4-4", "M3.34 19a10 10 0 1 1 17.32 0"]),
    (
        Icon::Settings,
        &[
            "M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z",
            "M15 12a3 3 0 1 1-6 0 3 3 0 0 1 6 0z",
        ],
    ),
    (
        Icon::ShieldCheck,
        &[
            "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            "m9 12 2 2 4-4",
        ],
    ),
    (
        Icon::Microscope,
        &[
            "M6 18h8",
            "M3 22h18",
            "M14 22a7 7 0 1 0 0-14h-1",
            "M9 14h2",
            "M9 12a2 2 0 0 1-2-2V6h6v4a2 2 0 0 1-2 2Z",
            "M12 6V3a1 1 0 0 0-1-1H9a1 1 0 0 0-1 1v3",
        ],
    ),
    (
        Icon::Cpu,
        &[
            "M4 4h16v16H4z",
            "M9 9h6v6H9z",
            "M9 1v3",
            "M15 1v3",
            "M9 20v3",
            "M15 20v3",
            "M20 9h3",
            "M20 14h3",
            "M1 9h3",
            "M1 14h3",
        ],
    ),
    (Icon::Search, &["m21 21-4.3-4.3", "M19 11a8 8 0 1 1-16 0 8 8 0 0 1 16 0z"]),
    (
        Icon::MapPin,
        &[
            "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
            "M15 10a3 3 0 1 1-6 0 3 3 0 0 1 6 0z",
        ],
    ),
    (
        Icon::Phone,
        &["M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"],
    ),
    (
        Icon::Mail,
        &["M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z", "m22 6-10 7L2 6"],
    ),
    (
        Icon::Instagram,
        &[
            "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
            "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
            "M17.5 6.5h.01",
        ],
    ),
    (Icon::ChevronRight, &["m9 18 6-6-6-6"]),
    (Icon::Menu, &["M4 6h16", "M4 12h16", "M4 18h16"]),
    (Icon::Close, &["M18 6 6 18", "m6 6 12 12"]),
    (Icon::ArrowRight, &["M5 12h14", "m12 5 7 7-7 7"]),
    (
        Icon::MessageSquare,
        &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
    ),
];

impl Icon {
    pub fn glyph(self) -> &'static [&'static str] {
        GLYPHS
            .iter()
            .find(|(icon, _)| *icon == self)
            .map(|(_, paths)| *paths)
            .unwrap_or(&[])
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: Icon,
    #[prop_or(24)]
    pub size: u32,
}

#[function_component(IconGlyph)]
pub fn icon_glyph(props: &IconProps) -> Html {
    let size = props.size.to_string();
    html! {
        <svg
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.icon.glyph().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct NavLink {
    pub name: String,
    pub href: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Images {
    pub hero: String,
    pub manifesto_background: String,
    pub manifesto_feature: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Service {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: Icon,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Value {
    pub title: String,
    pub icon: Icon,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Brand {
    pub name: String,
    pub logo: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ContactChannel {
    pub icon: Icon,
    pub label: String,
    pub value: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SiteContent {
    pub nav_links: Vec<NavLink>,
    pub images: Images,
    pub services: Vec<Service>,
    pub values: Vec<Value>,
    pub brands: Vec<Brand>,
    pub gallery: Vec<String>,
    pub contact: Vec<ContactChannel>,
}

impl SiteContent {
    pub fn load() -> Result<Self, serde_json::Error> {
        Self::parse(CONTENT_JSON)
    }

    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Bundled content, or empty sections if it fails to decode.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            error!("Failed to decode bundled content: {}", e);
            Self::default()
        })
    }
}

/// The strip repeated back to back, so a marquee translating by -50% loops
/// seamlessly.
pub fn marquee<T>(items: &[T]) -> impl Iterator<Item = &T> {
    items.iter().chain(items.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL: [Icon; 15] = [
        Icon::Gauge,
        Icon::Settings,
        Icon::ShieldCheck,
        Icon::Microscope,
        Icon::Cpu,
        Icon::Search,
        Icon::MapPin,
        Icon::Phone,
        Icon::Mail,
        Icon::Instagram,
        Icon::ChevronRight,
        Icon::Menu,
        Icon::Close,
        Icon::ArrowRight,
        Icon::MessageSquare,
    ];

    #[test]
    fn bundled_content_decodes() {
        let content = SiteContent::load().expect("bundled content.json should decode");
        assert_eq!(content.services.len(), 4);
        assert_eq!(content.values.len(), 3);
        assert_eq!(content.brands.len(), 6);
        assert_eq!(content.gallery.len(), 4);
        assert_eq!(content.contact.len(), 3);
        assert!(content.nav_links.iter().all(|l| l.href.starts_with('#')));
        assert_eq!(content.services[2].icon, Icon::ShieldCheck);
    }

    #[test]
    fn every_icon_has_a_glyph() {
        for icon in ALL {
            assert!(!icon.glyph().is_empty(), "{:?} has no glyph", icon);
        }
        let table: HashSet<Icon> = GLYPHS.iter().map(|(icon, _)| *icon).collect();
        assert_eq!(table.len(), GLYPHS.len(), "duplicate glyph entries");
        assert_eq!(table.len(), ALL.len());
    }

    #[test]
    fn icon_identifiers_are_kebab_case() {
        let icon: Icon = serde_json::from_str("\"message-square\"").unwrap();
        assert_eq!(icon, Icon::MessageSquare);
        assert!(serde_json::from_str::<Icon>("\"MessageSquare\"").is_err());
    }

    #[test]
    fn unknown_icon_rejects_the_document() {
        let json = r#"{
            "nav_links": [], "images": { "hero": "", "manifesto_background": "", "manifesto_feature": "" },
            "services": [{ "id": 1, "title": "x", "description": "y", "icon": "rocket" }],
            "values": [], "brands": [], "gallery": [], "contact": []
        }"#;
        assert!(SiteContent::parse(json).is_err());
    }

    #[test]
    fn marquee_repeats_brands_in_order() {
        let content = SiteContent::load().unwrap();
        let logos: Vec<&str> = marquee(&content.brands).map(|b| b.logo.as_str()).collect();
        assert_eq!(logos.len(), 12);
        assert_eq!(logos[0], "PORSCHE");
        assert_eq!(logos[6], "PORSCHE");
        assert_eq!(logos[11], "MCLAREN");
    }
}
