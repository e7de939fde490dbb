//! Built-in profile shipped with the binary.
//!
//! Used whenever no profile file is configured.

use crate::domain::{ContactKind, ContactLink, Icon, Profile, SkillGroup, Stat, TimelineEntry};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Profile {
    /// The default portfolio content.
    pub fn builtin() -> Self {
        Self {
            name: "Alen Capalik".into(),
            headline: "Technology Leader & Innovator".into(),
            initials: "AC".into(),
            nav_items: strings(&["About", "Skills", "Experience", "Patents"]),
            contacts: vec![
                ContactLink {
                    kind: ContactKind::Mail,
                    label: "alen@wiretap.net".into(),
                    target: "mailto:alen@wiretap.net".into(),
                },
                ContactLink {
                    kind: ContactKind::Phone,
                    label: "310-310-9973".into(),
                    target: "tel:310-310-9973".into(),
                },
                ContactLink {
                    kind: ContactKind::LinkedIn,
                    label: "LinkedIn".into(),
                    target: "https://www.linkedin.com/in/alencapalik".into(),
                },
            ],
            stats: vec![
                Stat {
                    icon: Icon::Users,
                    value: 25,
                    label: "Years Experience".into(),
                },
                Stat {
                    icon: Icon::Building,
                    value: 100,
                    label: "Team Members Led".into(),
                },
                Stat {
                    icon: Icon::Award,
                    value: 3,
                    label: "Patents".into(),
                },
                Stat {
                    icon: Icon::LineChart,
                    value: 50,
                    label: "Million $ Raised".into(),
                },
            ],
            skills: vec![
                SkillGroup {
                    icon: Icon::Code,
                    title: "Programming Languages".into(),
                    skills: strings(&["C", "C++", "Python", "Go", "Rust"]),
                },
                SkillGroup {
                    icon: Icon::Cloud,
                    title: "Cloud & Infrastructure".into(),
                    skills: strings(&[
                        "AWS",
                        "Azure",
                        "GCP",
                        "Oracle Cloud",
                        "Kubernetes",
                        "Docker",
                    ]),
                },
                SkillGroup {
                    icon: Icon::Server,
                    title: "Big Data Technologies".into(),
                    skills: strings(&["Apache Spark", "Apache Kafka", "Cloudera", "Apache Arrow"]),
                },
                SkillGroup {
                    icon: Icon::Shield,
                    title: "Security Expertise".into(),
                    skills: strings(&[
                        "Intrusion Detection",
                        "Network Security",
                        "Threat Analysis",
                    ]),
                },
                SkillGroup {
                    icon: Icon::Users,
                    title: "Leadership".into(),
                    skills: strings(&[
                        "Corporate Leadership",
                        "Team Building",
                        "Executive Management",
                    ]),
                },
                SkillGroup {
                    icon: Icon::Building,
                    title: "Business Development".into(),
                    skills: strings(&[
                        "Enterprise Sales",
                        "Venture Capital",
                        "Strategic Partnerships",
                    ]),
                },
            ],
            timeline: vec![
                TimelineEntry {
                    period: "2016 - Present".into(),
                    role: "Founder and CEO".into(),
                    organization: "FASTDATA.io, Inc.".into(),
                    summary: "Leading the development of revolutionary GPU-based streaming data processing technology."
                        .into(),
                    achievements: strings(&[
                        "Designed and developed PlasmaENGINE - 100x faster than market competitors",
                        "Led cloud implementation across AWS, Azure, GCP, and Oracle Cloud",
                        "Secured $6.5M in funding, including investment from NVIDIA",
                        "Built and led world-class engineering team",
                        "Established partnerships with Fortune 500 companies",
                    ]),
                    technologies: Some(strings(&[
                        "C++", "CUDA", "Python", "Kubernetes", "Docker", "Cloud Platforms",
                    ])),
                },
                TimelineEntry {
                    period: "2004 - 2017".into(),
                    role: "Founder, CTO and Board Member".into(),
                    organization: "CounterTack (now GoSecure)".into(),
                    summary: "Pioneer in enterprise-level cybersecurity solutions and threat detection."
                        .into(),
                    achievements: strings(&[
                        "Grew company from founding to 100+ employees",
                        "Designed and developed CounterTack Sentinel",
                        "Raised over $50M in venture capital",
                        "Served 13+ years on Board of Directors",
                        "Established company as leader in advanced persistent threat protection",
                    ]),
                    technologies: Some(strings(&[
                        "Security Architecture", "Threat Detection", "Enterprise Software",
                    ])),
                },
                TimelineEntry {
                    period: "2001 - 2004".into(),
                    role: "Chief Technology Officer".into(),
                    organization: "Tradeware Systems LLC".into(),
                    summary: "Led technology strategy for Wall Street trading software company."
                        .into(),
                    achievements: strings(&[
                        "Managed infrastructure handling $30B daily trading volume",
                        "Led team of 40 engineers and developers",
                        "Implemented enterprise-wide security protocols",
                        "Designed real-time trading software infrastructure",
                    ]),
                    technologies: Some(strings(&[
                        "Trading Systems", "Network Security", "Infrastructure Design",
                    ])),
                },
            ],
        }
    }
}
