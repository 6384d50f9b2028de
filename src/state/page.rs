// Page identity - the closed set of pages the site can show
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PageId {
    #[default]
    Home,
    Contact,
    /// Fundguard
    CaseStudyA,
    /// monday.com
    CaseStudyB,
    /// Bit
    CaseStudyC,
    /// Bluevine
    CaseStudyD,
    /// XtreamIO
    CaseStudyE,
}

/// Case studies in the order of the "next study" ring.
pub const CASE_STUDIES: [PageId; 5] = [
    PageId::CaseStudyA,
    PageId::CaseStudyB,
    PageId::CaseStudyC,
    PageId::CaseStudyD,
    PageId::CaseStudyE,
];

pub const ALL_PAGES: [PageId; 7] = [
    PageId::Home,
    PageId::Contact,
    PageId::CaseStudyA,
    PageId::CaseStudyB,
    PageId::CaseStudyC,
    PageId::CaseStudyD,
    PageId::CaseStudyE,
];

impl PageId {
    /// Tag stored in history entries.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Contact => "contact",
            Self::CaseStudyA => "fundguard",
            Self::CaseStudyB => "monday",
            Self::CaseStudyC => "bit",
            Self::CaseStudyD => "bluevine",
            Self::CaseStudyE => "xtreamio",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Contact => "Contact",
            Self::CaseStudyA => "Fundguard",
            Self::CaseStudyB => "monday.com",
            Self::CaseStudyC => "Bit",
            Self::CaseStudyD => "Bluevine",
            Self::CaseStudyE => "XtreamIO",
        }
    }

    pub fn is_case_study(self) -> bool {
        CASE_STUDIES.contains(&self)
    }

    /// Whether the global header is shown on this page
    pub fn shows_header(self) -> bool {
        matches!(self, Self::Home | Self::Contact)
    }

    /// Next case study in the ring; `None` for non case study pages.
    pub fn next_study(self) -> Option<PageId> {
        let idx = CASE_STUDIES.iter().position(|p| *p == self)?;
        Some(CASE_STUDIES[(idx + 1) % CASE_STUDIES.len()])
    }

    /// Anchor id of the home page card a case study was opened from.
    pub fn project_anchor(self) -> Option<&'static str> {
        match self {
            Self::CaseStudyA => Some("project-fundguard"),
            Self::CaseStudyB => Some("project-monday"),
            Self::CaseStudyC => Some("project-bit"),
            Self::CaseStudyD => Some("project-bluevine"),
            Self::CaseStudyE => Some("project-xtreamio"),
            Self::Home | Self::Contact => None,
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPage(pub String);

impl fmt::Display for UnknownPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown page tag: {}", self.0)
    }
}

impl std::error::Error for UnknownPage {}

impl FromStr for PageId {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_PAGES
            .iter()
            .copied()
            .find(|p| p.tag() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_study_ring_returns_after_five_steps() {
        for start in CASE_STUDIES {
            let mut page = start;
            for _ in 0..5 {
                page = page.next_study().expect("case study has a successor");
            }
            assert_eq!(page, start);
        }
    }

    #[test]
    fn test_next_study_order() {
        assert_eq!(PageId::CaseStudyA.next_study(), Some(PageId::CaseStudyB));
        assert_eq!(PageId::CaseStudyE.next_study(), Some(PageId::CaseStudyA));
        assert_eq!(PageId::Home.next_study(), None);
        assert_eq!(PageId::Contact.next_study(), None);
    }

    #[test]
    fn test_tags_parse_back() {
        for page in ALL_PAGES {
            assert_eq!(page.tag().parse::<PageId>(), Ok(page));
        }
        assert!("about".parse::<PageId>().is_err());
    }

    #[test]
    fn test_every_case_study_has_a_project_anchor() {
        for page in CASE_STUDIES {
            let anchor = page.project_anchor().expect("anchor");
            assert_eq!(anchor, format!("project-{}", page.tag()));
        }
        assert_eq!(PageId::Home.project_anchor(), None);
    }

    #[test]
    fn test_only_case_studies_hide_the_header() {
        for page in ALL_PAGES {
            assert_eq!(page.is_case_study(), !page.shows_header(), "{page}");
        }
    }
}
