use crate::state::PageId;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ImageSide {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

/// A card in the "selected work" list, opening one case study
#[derive(Clone, Copy, Debug)]
pub struct ProjectCard {
    pub page: PageId,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub metrics: &'static [Metric],
    pub bullets: &'static [&'static str],
    /// Hero-level card with heavier title and a shadow
    pub elevated: bool,
    pub image_side: ImageSide,
    pub cta: &'static str,
}

impl ProjectCard {
    pub fn anchor(&self) -> &'static str {
        self.page.project_anchor().unwrap_or("work")
    }
}

pub const PROJECTS: [ProjectCard; 5] = [
    ProjectCard {
        page: PageId::CaseStudyA,
        title: "Restoring trust in enterprise automation",
        description: "Enterprise fintech platform used by asset managers to configure complex \
fund hierarchies. Led a structural redesign of reconciliation and exception architecture to \
increase automation trust.",
        image: "fundguard-mac-studio.png",
        tags: &["enterprise fintech", "B2B"],
        metrics: &[
            Metric { value: "+30%", label: "Increase in automation adoption" },
            Metric { value: "25%", label: "Faster exception resolution" },
            Metric { value: "Reduced errors", label: "Configuration and downstream rework" },
        ],
        bullets: &[],
        elevated: true,
        image_side: ImageSide::Right,
        cta: "View Case Study",
    },
    ProjectCard {
        page: PageId::CaseStudyB,
        title: "Simplifying monetization logic across product surfaces",
        description: "Redesigned pricing, billing, and plan logic across core workflows to \
reduce confusion and improve upgrade clarity. Focused on exposing system state, plan \
constraints, and value differences inside the user journey.",
        image: "monday-macbook.png",
        tags: &["work management", "monetization"],
        metrics: &[],
        bullets: &[
            "Reduced billing confusion across upgrade flows",
            "Improved plan comparison clarity",
            "Streamlined monetization touchpoints",
        ],
        elevated: false,
        image_side: ImageSide::Left,
        cta: "View Case Study",
    },
    ProjectCard {
        page: PageId::CaseStudyC,
        title: "Designing scalable flows for a high-volume P2P platform",
        description: "Improved payment flows in one of Israel's largest P2P platforms. Focused \
on reducing friction, clarifying transaction state, and improving system feedback in \
high-frequency journeys.",
        image: "bit-iphone.png",
        tags: &["mobile app", "B2C"],
        metrics: &[],
        bullets: &[
            "Reduced friction in key transfer flows",
            "Improved state visibility during transactions",
            "Strengthened user trust through clearer system feedback",
        ],
        elevated: false,
        image_side: ImageSide::Right,
        cta: "View Case Study",
    },
    ProjectCard {
        page: PageId::CaseStudyD,
        title: "Bluevine",
        description: "Designing banking and lending experiences that help small businesses \
manage their finances quickly and confidently.",
        image: "bluevine-phones.png",
        tags: &["SMB banking", "B2C"],
        metrics: &[],
        bullets: &[],
        elevated: false,
        image_side: ImageSide::Left,
        cta: "View Case Study",
    },
    ProjectCard {
        page: PageId::CaseStudyE,
        title: "Xtream IO",
        description: "An all-flash storage platform delivering high performance, scalability, \
and simplified data management for enterprise.",
        image: "xtreamio-ipad.png",
        tags: &["enterprise", "data platform"],
        metrics: &[],
        bullets: &[],
        elevated: false,
        image_side: ImageSide::Right,
        cta: "View Case Study",
    },
];
