use crate::state::PageId;

/// Heading plus Markdown body
#[derive(Clone, Copy, Debug)]
pub struct Section {
    pub heading: &'static str,
    pub body: &'static str,
}

/// Copy for one case study page: hero, problem, approach, results, closing
#[derive(Clone, Copy, Debug)]
pub struct CaseStudy {
    pub page: PageId,
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub meta: &'static [(&'static str, &'static str)],
    pub hero_image: &'static str,
    pub problem: Section,
    pub ownership: Section,
    pub insight: Section,
    pub approach: &'static [&'static str],
    pub results: Section,
    pub closing_quote: &'static str,
    pub closing_image: &'static str,
}

pub fn case_study(page: PageId) -> Option<&'static CaseStudy> {
    STUDIES.iter().find(|s| s.page == page)
}

pub static STUDIES: [CaseStudy; 5] = [
    CaseStudy {
        page: PageId::CaseStudyA,
        eyebrow: "Fundguard",
        title: "Scaling trust in AI-driven investment accounting",
        tagline: "When experts need systems they can trust",
        meta: &[
            ("Role", "Senior Product Designer"),
            ("Team", "PM · 6 Engineers · Data Science · Enterprise Ops"),
            ("Scope", "Core reconciliation & exception workflows"),
            ("Impact", "+30% automation · 25% faster resolution"),
        ],
        hero_image: "fundguard-hero.png",
        problem: Section {
            heading: "Enterprise users relied on manual reconciliation despite built-in automation",
            body: "Adoption was low because:\n\n\
- AI outputs lacked **transparency**\n\
- Data density created cognitive overload\n\
- Workflows were fragmented\n\n\
This reduced platform stickiness and limited module expansion.",
        },
        ownership: Section {
            heading: "My role",
            body: "- Led end-to-end UX strategy for reconciliation workflows\n\
- Facilitated discovery with enterprise operations teams\n\
- Partnered with Data Science to surface explainable AI signals\n\
- Defined reusable workflow patterns across modules",
        },
        insight: Section {
            heading: "The issue wasn't functionality. It was trust.",
            body: "Users manually verified automated results even when accuracy was high.",
        },
        approach: &[
            "Replace dashboard-heavy UI with guided workflows",
            "Prioritize anomalies by financial impact",
            "Add explainable AI signals",
            "Standardize enterprise interaction patterns",
        ],
        results: Section {
            heading: "Measurable impact across the platform",
            body: "- **+30%** increase in automation adoption\n\
- **25%** faster exception resolution\n\
- Fewer manual overrides in daily operations",
        },
        closing_quote: "Trust requires visibility.",
        closing_image: "fundguard-closing.png",
    },
    CaseStudy {
        page: PageId::CaseStudyB,
        eyebrow: "monday.com",
        title: "Optimizing monetization and plan selection at scale",
        tagline: "Designing confidence at the moment of commitment",
        meta: &[
            ("Role", "Senior Product Designer"),
            ("Team", "Growth Squad (PM · Engineering · Data)"),
            ("Scope", "Registration, upgrade, plan selection"),
            ("Impact", "+7% registration-to-plan conversion"),
        ],
        hero_image: "monday-hero.png",
        problem: Section {
            heading: "Millions of users registered, but conversion to paid plans could improve",
            body: "- Confusing tier comparison\n\
- Misaligned value communication\n\
- Static plan selection logic",
        },
        ownership: Section {
            heading: "My ownership",
            body: "- Led end-to-end design of upgrade and monetization flows\n\
- Designed logic-driven plan recommendation system\n\
- Partnered with Data on behavioral segmentation\n\
- Worked in experiment-driven growth squad",
        },
        insight: Section {
            heading: "Users didn't struggle with pricing.",
            body: "They struggled with *choosing the right plan*.",
        },
        approach: &[
            "Reframe plan comparison around use cases",
            "Introduce personalized recommendations",
            "Simplify upgrade flows",
            "Run A/B tests on value framing",
        ],
        results: Section {
            heading: "Evidence over persuasion",
            body: "We tested a generic recommendation against a usage-based personalized \
recommendation. The usage-driven experience increased Pro conversion from **4.0%** to \
**5.4%**, a 35% relative uplift.",
        },
        closing_quote: "Here's evidence: Pro fits how you work.",
        closing_image: "monday-closing.png",
    },
    CaseStudy {
        page: PageId::CaseStudyC,
        eyebrow: "Bit",
        title: "Designing consumer fintech at national scale",
        tagline: "When speed and trust are non-negotiable",
        meta: &[
            ("Role", "Senior Product Designer"),
            ("Team", "PM · Engineering · Growth · Marketing"),
            ("Scope", "Core payment flows · Activation · Engagement"),
        ],
        hero_image: "bit-hero.png",
        problem: Section {
            heading: "Bit operates at massive consumer scale",
            body: "- High transaction sensitivity\n\
- Low tolerance for friction\n\
- Strong competition in digital payments\n\n\
Small UX issues directly impacted usage and retention.",
        },
        ownership: Section {
            heading: "My role",
            body: "- Designed core payment and transfer flows\n\
- Optimized activation and first-use experience\n\
- Improved clarity around transaction states\n\
- Partnered with Growth on engagement experiments\n\
- Worked closely with Engineering on performance and edge cases",
        },
        insight: Section {
            heading: "In payments, speed builds trust. Uncertainty destroys it.",
            body: "Delays, unclear states, or uncertainty reduce repeat usage.",
        },
        approach: &[
            "Reduce cognitive load in transfer flows",
            "Clarify transaction states (pending, sent, received)",
            "Improve first-use onboarding",
            "Optimize micro-interactions for speed and confidence",
        ],
        results: Section {
            heading: "Impact at consumer scale",
            body: "- Improved activation and repeat usage\n\
- Reduced confusion around transaction status\n\
- Increased clarity in high-frequency payment actions",
        },
        closing_quote: "The best financial UX feels invisible.",
        closing_image: "bit-closing.png",
    },
    CaseStudy {
        page: PageId::CaseStudyD,
        eyebrow: "Bluevine",
        title: "Driving monetization and activation in SMB fintech",
        tagline: "Turning complex financial decisions into confident actions",
        meta: &[
            ("Role", "Senior Product Designer"),
            ("Scope", "Registration, plan selection, upgrade flows"),
            ("Impact", "+7% registration-to-plan conversion"),
        ],
        hero_image: "bluevine-hero.png",
        problem: Section {
            heading: "SMB users hesitated to upgrade due to unclear value differentiation",
            body: "- Financial product complexity\n\
- Different SMB personas\n\
- High sensitivity around financial decisions",
        },
        ownership: Section {
            heading: "My role",
            body: "- Led monetization and upgrade flow redesign\n\
- Designed decision-based plan logic\n\
- Partnered with Data for behavioral insights\n\
- Operated within experiment-driven squad",
        },
        insight: Section {
            heading: "Financial users require clarity before commitment.",
            body: "Decision support increased confidence.",
        },
        approach: &[
            "Simplify plan differentiation",
            "Add contextual guidance during selection",
            "Clarify benefits tied to user behavior",
            "Iterate through experimentation",
        ],
        results: Section {
            heading: "Measurable impact on monetization",
            body: "- **+7%** improvement in registration-to-plan conversion\n\
- Improved upgrade clarity\n\
- Reduced hesitation during plan selection",
        },
        closing_quote: "When users clearly understand what will happen next, they move faster, \
decide better, and rely on the product more.",
        closing_image: "bluevine-closing.png",
    },
    CaseStudy {
        page: PageId::CaseStudyE,
        eyebrow: "XtreamIO",
        title: "Making all-flash storage manageable at enterprise scale",
        tagline: "Performance is only useful when operators can see it",
        meta: &[
            ("Role", "Product Designer"),
            ("Scope", "Storage management console · Monitoring · Provisioning"),
        ],
        hero_image: "xtreamio-hero.png",
        problem: Section {
            heading: "Powerful hardware, opaque operations",
            body: "- Dense performance data with little hierarchy\n\
- Provisioning spread across disconnected screens\n\
- Alerts without context on affected volumes",
        },
        ownership: Section {
            heading: "My role",
            body: "- Redesigned the management console information architecture\n\
- Defined monitoring dashboards with engineering and support\n\
- Simplified volume provisioning flows",
        },
        insight: Section {
            heading: "Operators trust what they can observe.",
            body: "Surfacing system state made performance data actionable.",
        },
        approach: &[
            "Group metrics by the decisions operators make",
            "Connect alerts to the volumes they affect",
            "Consolidate provisioning into one guided flow",
        ],
        results: Section {
            heading: "Simplified data management",
            body: "- Faster provisioning for common configurations\n\
- Clearer path from alert to affected resource",
        },
        closing_quote: "Simplicity is a feature of the system, not the screen.",
        closing_image: "xtreamio-closing.png",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::page::CASE_STUDIES;

    #[test]
    fn test_every_case_study_page_has_content() {
        for page in CASE_STUDIES {
            let study = case_study(page).expect("content");
            assert_eq!(study.page, page);
            assert!(!study.approach.is_empty());
        }
        assert!(case_study(PageId::Home).is_none());
        assert!(case_study(PageId::Contact).is_none());
    }
}
