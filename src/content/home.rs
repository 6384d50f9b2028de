pub const OWNER: &str = "Elran Levy";
pub const LOGO: &str = "elran levy";

pub const HERO_HEADLINE: &str =
    "Turning complex enterprise systems into clear, scalable products.";
pub const HERO_SUBLINE: &str = "I redesign system architecture, workflows, and state logic so \
automation becomes trustworthy and decisions become confident.";
pub const HERO_SELECTED: &str = "Selected work: Fundguard • monday.com • bit";
pub const HERO_CTA: &str = "View Selected Work";
pub const HERO_PHOTO: &str = "portrait.png";

pub const ABOUT_ANCHOR: &str = "about";
pub const ABOUT_TITLE: &str = "Designing systems that scale.";
pub const ABOUT_BODY: [&str; 2] = [
    "I specialize in enterprise platforms where complexity, automation, and risk intersect. \
My work focuses on system architecture clarity, workflow optimization, and state visibility, \
so experts can act with confidence.",
    "I collaborate closely with product, engineering, and data teams to ensure design decisions \
scale beyond UI into logic, behavior, and system structure.",
];

pub const WORK_ANCHOR: &str = "work";
pub const WORK_EYEBROW: &str = "selected work";
pub const WORK_INTRO: &str = "A selection of my recent work";

pub const CONTACT_TITLE: &str = "Let's talk.";
pub const CONTACT_BODY: &str = "Open to senior and lead product design roles on complex \
enterprise and fintech platforms.";
