use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub bio: Vec<String>,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub shell_user: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Moyenul Islam".to_string(),
            role: "Backend Developer".to_string(),
            bio: vec![
                "Experienced backend developer with 6+ years of professional experience.".to_string(),
                "Specializing in building scalable, secure, and efficient backend systems.".to_string(),
                "Core expertise: Node.js, Express, MongoDB, PostgreSQL, and API development."
                    .to_string(),
            ],
            email: "dev.moyenislam@gmail.com".to_string(),
            phone: "+880 1308 989743".to_string(),
            location: "Bogura, Bangladesh".to_string(),
            github_url: "https://github.com/moyen90".to_string(),
            linkedin_url: "https://linkedin.com/in/moyenul-islam-675204211".to_string(),
            shell_user: "moyen".to_string(),
        }
    }
}

impl Profile {
    /// Link without the scheme, the way it is printed in contact blocks.
    pub fn display_link(url: &str) -> &str {
        url.trim_start_matches("https://")
            .trim_start_matches("http://")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStatus {
    Online,
    Active,
    Connected,
}

impl CardStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Active => "Active",
            Self::Connected => "Connected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemCard {
    pub title: &'static str,
    pub status: CardStatus,
    pub description: &'static str,
}

pub const SYSTEM_CARDS: [SystemCard; 6] = [
    SystemCard {
        title: "Express.js Server",
        status: CardStatus::Online,
        description: "RESTful API and microservices architecture",
    },
    SystemCard {
        title: "MongoDB Cluster",
        status: CardStatus::Online,
        description: "NoSQL database with optimized schemas",
    },
    SystemCard {
        title: "PostgreSQL Database",
        status: CardStatus::Online,
        description: "Relational database with complex queries",
    },
    SystemCard {
        title: "Node.js Runtime",
        status: CardStatus::Active,
        description: "Server-side JavaScript execution environment",
    },
    SystemCard {
        title: "Socket.io Service",
        status: CardStatus::Active,
        description: "Real-time bidirectional event-based communication",
    },
    SystemCard {
        title: "Stripe Integration",
        status: CardStatus::Connected,
        description: "Payment processing and subscription management",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    Major,
    Service,
    Infrastructure,
}

impl ProjectKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Major => "Major Project",
            Self::Service => "Service",
            Self::Infrastructure => "Infrastructure",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Active,
    Maintenance,
    Development,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Maintenance => "MAINTENANCE",
            Self::Development => "DEVELOPMENT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedProject {
    pub id: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub kind: ProjectKind,
    pub status: ProjectStatus,
    pub technologies: &'static [&'static str],
    pub live_host: &'static str,
}

impl FeaturedProject {
    pub fn live_url(&self) -> String {
        format!("https://{}", self.live_host)
    }
}

pub const FEATURED_PROJECTS: [FeaturedProject; 3] = [
    FeaturedProject {
        id: "p1",
        name: "Photofox AI",
        summary: "PhotoFox provides professional photography and videography services to help small brands look Fortune-500-level online.",
        description: "PhotoFox provides professional photography and videography services to help small brands look Fortune-500-level online. Features AI-powered image enhancement, automated editing workflows, and enterprise-grade content management.",
        kind: ProjectKind::Major,
        status: ProjectStatus::Active,
        technologies: &["Node.js", "Express", "MongoDB", "Generative AI", "GCP", "Docker"],
        live_host: "photofox.ai",
    },
    FeaturedProject {
        id: "p2",
        name: "Vocalo AI",
        summary: "Vocalo.ai is an AI-powered language learning platform that enhances users' English speaking skills through personalized curriculum, immersive conversations, detailed feedback, and tailored exercises.",
        description: "Vocalo.ai is an AI-powered language learning platform that enhances users' English speaking skills through personalized curriculum, immersive conversations, detailed feedback, and tailored exercises. Built with real-time communication and advanced speech processing.",
        kind: ProjectKind::Major,
        status: ProjectStatus::Active,
        technologies: &["Socket.io", "Express", "MongoDB", "Generative AI", "GCP", "Docker"],
        live_host: "vocalo.ai",
    },
    FeaturedProject {
        id: "p3",
        name: "SketchToImage",
        summary: "Sketch To Image (previously Scribble To Art) transforms any sketches into stunning image using AI magic.",
        description: "Sketch To Image (previously Scribble To Art) transforms any sketches into stunning images using AI magic. Features advanced image processing, multiple art styles, and seamless user experience with real-time preview.",
        kind: ProjectKind::Major,
        status: ProjectStatus::Active,
        technologies: &["Express.js", "MongoDB", "Generative AI", "GCP", "Docker"],
        live_host: "sketchtoimage.com",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkProject {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub kind: ProjectKind,
    pub technologies: &'static [&'static str],
    pub links: &'static [&'static str],
}

pub const NETWORK_PROJECTS: [NetworkProject; 6] = [
    NetworkProject {
        id: "p1",
        name: "Photofox AI",
        description: "PhotoFox provides professional photography and videography services to help small brands look Fortune-500-level online.",
        kind: ProjectKind::Major,
        technologies: &["Node.js", "Express", "MongoDB", "Generative AI"],
        links: &["p4", "p5"],
    },
    NetworkProject {
        id: "p2",
        name: "Vocalo AI",
        description: "Vocalo.ai is an AI-powered language learning platform that enhances users' English speaking skills through personalized curriculum, immersive conversations, detailed feedback, and tailored exercises.",
        kind: ProjectKind::Major,
        technologies: &["Socket.io", "Express", "MongoDB", "Generative AI"],
        links: &["p4", "p5", "p6"],
    },
    NetworkProject {
        id: "p3",
        name: "SketchToImage",
        description: "Sketch To Image (previously Scribble To Art) transforms any sketches into stunning image using AI magic.",
        kind: ProjectKind::Major,
        technologies: &["Express.js", "MongoDB", "Generative AI"],
        links: &["p4", "p5"],
    },
    NetworkProject {
        id: "p4",
        name: "MongoDB Atlas",
        description: "Cloud-hosted MongoDB database service powering all applications",
        kind: ProjectKind::Infrastructure,
        technologies: &["MongoDB", "Cloud", "Atlas"],
        links: &["p1", "p2", "p3"],
    },
    NetworkProject {
        id: "p5",
        name: "AI Service Layer",
        description: "Shared generative AI infrastructure and API integration layer",
        kind: ProjectKind::Service,
        technologies: &["Generative AI", "OpenAI", "API Gateway"],
        links: &["p1", "p2", "p3"],
    },
    NetworkProject {
        id: "p6",
        name: "WebSocket Service",
        description: "Real-time bidirectional communication service for interactive features",
        kind: ProjectKind::Service,
        technologies: &["Socket.io", "WebSockets", "Node.js"],
        links: &["p2"],
    },
];

pub fn network_index_of(id: &str) -> Option<usize> {
    NETWORK_PROJECTS.iter().position(|project| project.id == id)
}

/// Resolves a node's adjacency list to node indices, skipping dangling ids.
pub fn linked_indices(index: usize) -> Vec<usize> {
    NETWORK_PROJECTS
        .get(index)
        .map(|project| {
            project
                .links
                .iter()
                .filter_map(|id| network_index_of(id))
                .collect()
        })
        .unwrap_or_default()
}

pub fn network_layout(radius: f64) -> Vec<(f64, f64)> {
    let count = NETWORK_PROJECTS.len();
    (0..count)
        .map(|index| {
            let angle = 2.0 * std::f64::consts::PI * index as f64 / count as f64;
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub years: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: [Skill; 5],
}

const fn skill(name: &'static str, level: u8, years: u8) -> Skill {
    Skill { name, level, years }
}

pub const SKILL_CATEGORIES: [SkillCategory; 5] = [
    SkillCategory {
        name: "Backend Frameworks",
        skills: [
            skill("Express.js", 95, 5),
            skill("NestJS", 85, 3),
            skill("Django", 75, 2),
            skill("Flask", 80, 3),
            skill("FastAPI", 70, 1),
        ],
    },
    SkillCategory {
        name: "Databases",
        skills: [
            skill("MongoDB", 90, 5),
            skill("PostgreSQL", 85, 4),
            skill("MySQL", 80, 6),
            skill("Redis", 75, 3),
            skill("Elasticsearch", 70, 2),
        ],
    },
    SkillCategory {
        name: "API Technologies",
        skills: [
            skill("REST", 95, 6),
            skill("GraphQL", 85, 3),
            skill("WebSockets", 80, 4),
            skill("gRPC", 70, 2),
            skill("Webhooks", 85, 4),
        ],
    },
    SkillCategory {
        name: "DevOps & Cloud",
        skills: [
            skill("Docker", 85, 4),
            skill("Kubernetes", 75, 2),
            skill("AWS", 80, 3),
            skill("CI/CD", 85, 4),
            skill("Terraform", 70, 2),
        ],
    },
    SkillCategory {
        name: "Security",
        skills: [
            skill("Authentication", 90, 5),
            skill("Authorization", 85, 5),
            skill("Data Encryption", 80, 3),
            skill("OWASP", 75, 3),
            skill("Penetration Testing", 65, 2),
        ],
    },
];

pub const SKILL_SUMMARY: [(&str, &str); 6] = [
    ("Languages", "JavaScript, TypeScript, Python, SQL"),
    ("Frameworks", "Express.js, NestJS, Django, Flask"),
    ("Databases", "MongoDB, PostgreSQL, MySQL, Redis"),
    ("Cloud", "AWS, GCP, Azure, Heroku"),
    ("DevOps", "Docker, Kubernetes, CI/CD, Terraform"),
    ("Other", "GraphQL, REST APIs, WebSockets, Microservices"),
];

pub fn proficiency_label(level: u8) -> &'static str {
    match level {
        90..=u8::MAX => "Expert",
        80..=89 => "Advanced",
        70..=79 => "Proficient",
        _ => "Intermediate",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_network_link_resolves() {
        for (index, project) in NETWORK_PROJECTS.iter().enumerate() {
            assert_eq!(linked_indices(index).len(), project.links.len(), "{}", project.id);
        }
    }

    #[test]
    fn layout_places_nodes_on_the_circle() {
        let positions = network_layout(10.0);
        assert_eq!(positions.len(), NETWORK_PROJECTS.len());
        for (x, y) in positions {
            let distance = (x * x + y * y).sqrt();
            assert!((distance - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn featured_projects_link_over_https() {
        let urls: Vec<String> = FEATURED_PROJECTS.iter().map(|p| p.live_url()).collect();
        assert_eq!(
            urls,
            vec![
                "https://photofox.ai".to_string(),
                "https://vocalo.ai".to_string(),
                "https://sketchtoimage.com".to_string(),
            ]
        );
    }

    #[test]
    fn proficiency_bands() {
        assert_eq!(proficiency_label(95), "Expert");
        assert_eq!(proficiency_label(85), "Advanced");
        assert_eq!(proficiency_label(70), "Proficient");
        assert_eq!(proficiency_label(65), "Intermediate");
    }
}
