//! Compiled-in site content
//!
//! Everything the pages show is static and defined here once; nothing is
//! mutated after load.

/// One presentable piece of work
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentItem {
    /// Stable key, unique within its collection
    pub key: &'static str,
    pub title: &'static str,
    /// Discipline; for 3D art the software it was made in
    pub category: &'static str,
    pub year: Option<&'static str>,
    pub image: &'static str,
    pub description: &'static str,
    /// Vimeo video id
    pub video: Option<&'static str>,
}

impl ContentItem {
    const fn gallery(key: &'static str, title: &'static str, category: &'static str, image: &'static str) -> Self {
        Self {
            key,
            title,
            category,
            year: None,
            image,
            description: "",
            video: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: [&'static str; 4],
}

/// An animated number in the about section
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub key: &'static str,
    pub value: u32,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

/// Where a navigation entry leads
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// Scroll to a section on the current page
    Section(&'static str),
    /// Switch to another view
    Route(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: NavTarget,
}

pub const BRAND: &str = "GAKS CREATIVES";

/// "Start a project" call to action
pub const CONTACT_CTA: &str = "https://wa.me/254790206442";

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Work", target: NavTarget::Section("work") },
    NavItem { label: "Portfolio", target: NavTarget::Route("/portfolio") },
    NavItem { label: "About", target: NavTarget::Section("about") },
    NavItem { label: "Services", target: NavTarget::Section("services") },
    NavItem { label: "Contact", target: NavTarget::Section("contact") },
];

pub const FEATURED: [ContentItem; 5] = [
    ContentItem {
        key: "fanta",
        title: "FANTA",
        category: "Product Photography",
        year: Some("2024"),
        image: "assets/project-1.jpg",
        description: "A potrait capturing the essence of the Fanta soft drink bottle. This project was initially made as a Coca-cola project but I ended up switching it up after days of unsuccessfully searching for Coke cans.",
        video: None,
    },
    ContentItem {
        key: "luminance",
        title: "LUMINANCE",
        category: "Photography",
        year: Some("2024"),
        image: "assets/project-2.jpg",
        description: "A portrait series capturing the interplay of geometric light projections on the human form. Each frame tells a story of fragmented identity and hidden depths.",
        video: None,
    },
    ContentItem {
        key: "ethereal-void",
        title: "ETHEREAL VOID",
        category: "Photography",
        year: Some("2024"),
        image: "assets/project-3.jpg",
        description: "Floating through the spaces between dreams and reality. This piece features impossible geometries suspended in atmospheric mist.",
        video: None,
    },
    ContentItem {
        key: "monolith",
        title: "MONOLITH",
        category: "Photography",
        year: Some("2023"),
        image: "assets/project-4.jpg",
        description: "Strong cultural womanhood, captured on a city tower building. The image redifines strength and elegance in the female form",
        video: None,
    },
    ContentItem {
        key: "kinetic-flow",
        title: "KINETIC FLOW",
        category: "Motion Photography",
        year: Some("2024"),
        image: "assets/project-5.jpg",
        description: "Capturing movement through long exposure, transforming human motion into trails of ethereal light. Where bodies become brushstrokes.",
        video: None,
    },
];

pub const SERVICES: [Service; 4] = [
    Service {
        title: "Photography & Videography",
        description: "Editorial, commercial, and conceptual photography that transcends the ordinary. Each shot is meticulously composed to evoke emotion and tell stories.",
        tags: ["Portraits", "Fashion", "Product", "Architecture"],
    },
    Service {
        title: "3D Animation",
        description: "Bringing impossible visions to life through cutting-edge 3D animation. From abstract art pieces to commercial visualizations.",
        tags: ["Motion Graphics", "CGI", "Visual Effects", "Product Viz"],
    },
    Service {
        title: "Creative Direction",
        description: "Guiding brands and artists through the creative process, from concept development to final execution. Vision meets strategy.",
        tags: ["Brand Identity", "Art Direction", "Campaigns", "Strategy"],
    },
    Service {
        title: "Post-Production",
        description: "The alchemy that transforms raw captures into polished masterpieces. Color grading, compositing, and digital enhancement.",
        tags: ["Color Grading", "Retouching", "Compositing", "Finishing"],
    },
];

pub const STATS: [Stat; 3] = [
    Stat { key: "years", value: 5, label: "Years Experience" },
    Stat { key: "projects", value: 150, label: "Projects Delivered" },
    Stat { key: "clients", value: 40, label: "Global Clients" },
];

pub const PHOTOGRAPHY: [ContentItem; 15] = [
    ContentItem::gallery("urban-dreams", "Urban Dreams", "Photography", "assets/3.jpg"),
    ContentItem::gallery("neon-nights", "Neon Nights", "Photography", "assets/(7).jpg"),
    ContentItem::gallery("ethereal-light", "Ethereal Light", "Photography", "assets/8.jpg"),
    ContentItem::gallery("abstract-motion", "Abstract Motion", "Photography", "assets/10.jpg"),
    ContentItem::gallery("digital-pulse", "Digital Pulse", "Photography", "assets/11.jpg"),
    ContentItem::gallery("city-echoes", "City Echoes", "Photography", "assets/12.jpg"),
    ContentItem::gallery("liquid-chrome", "Liquid Chrome", "Photography", "assets/(15).jpg"),
    ContentItem::gallery("silent-horizons", "Silent Horizons", "Photography", "assets/(16).jpg"),
    ContentItem::gallery("fractured-time", "Fractured Time", "Photography", "assets/(18).jpg"),
    ContentItem::gallery("void-walker", "Void Walker", "Photography", "assets/(20).jpg"),
    ContentItem::gallery("prism-effect", "Prism Effect", "Photography", "assets/(26).jpg"),
    ContentItem::gallery("synthetic-soul", "Synthetic Soul", "Photography", "assets/(28).jpg"),
    ContentItem::gallery("midnight-bloom", "Midnight Bloom", "Photography", "assets/(30).jpg"),
    ContentItem::gallery("electric-haze", "Electric Haze", "Photography", "assets/(32).jpg"),
    ContentItem::gallery("temporal-shift", "Temporal Shift", "Photography", "assets/(34).jpg"),
];

pub const ART_3D: [ContentItem; 6] = [
    ContentItem::gallery("geometric-chaos", "Geometric Chaos", "Cinema 4D", "assets/3.jpg"),
    ContentItem::gallery("fluid-dynamics", "Fluid Dynamics", "Houdini", "assets/(7).jpg"),
    ContentItem::gallery("abstract-forms", "Abstract Forms", "Blender", "assets/8.jpg"),
    ContentItem::gallery("digital-sculpture", "Digital Sculpture", "ZBrush", "assets/10.jpg"),
    ContentItem::gallery("particle-storm", "Particle Storm", "After Effects", "assets/11.jpg"),
    ContentItem::gallery("metallic-flow", "Metallic Flow", "Octane", "assets/3.jpg"),
];

pub const CINEMATOGRAPHY: [ContentItem; 5] = [
    ContentItem {
        year: Some("2024"),
        video: Some("1127509433"),
        ..ContentItem::gallery("casio-watches", "Casio Watches", "Cinematography", "assets/3.jpg")
    },
    ContentItem {
        year: Some("2024"),
        video: Some("1127509117"),
        ..ContentItem::gallery("versman", "Versman", "Cinematography", "assets/(7).jpg")
    },
    ContentItem {
        year: Some("2023"),
        video: Some("1127509395"),
        ..ContentItem::gallery("canvas-cosmetics", "Canvas Cosmetics", "Cinematography", "assets/8.jpg")
    },
    ContentItem {
        year: Some("2023"),
        video: Some("1127509558"),
        ..ContentItem::gallery("java-house", "Java House", "Cinematography", "assets/10.jpg")
    },
    ContentItem {
        year: Some("2024"),
        video: Some("1127509511"),
        ..ContentItem::gallery("coca-cola", "Coca-cola", "Cinematography", "assets/11.jpg")
    },
];

pub const SOCIALS: [SocialLink; 2] = [
    SocialLink { name: "Instagram", url: "https://instagram.com/gaks_creatives" },
    SocialLink { name: "Email", url: "mailto:hello@gakscreatives.co.ke" },
];

/// Look up an item by key in `items`
pub fn find<'a>(items: &'a [ContentItem], key: &str) -> Option<&'a ContentItem> {
    items.iter().find(|item| item.key == key)
}
