//! Read-only reference tables shown on the site: destinations, service tiers,
//! blog content, FAQ and the about page.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub name: &'static str,
    /// EUR per year.
    pub tuition: u32,
    /// EUR per year.
    pub living: u32,
    pub currency: &'static str,
    pub description: &'static str,
    pub details: &'static str,
}

impl Country {
    pub fn total(&self) -> u32 {
        self.tuition + self.living
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryProfile {
    pub country: &'static str,
    pub requirements: &'static [&'static str],
    pub universities: &'static [&'static str],
    pub intake: &'static str,
    pub work_rights: &'static str,
    pub language: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingTier {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub countries: Option<&'static str>,
    pub services: &'static [&'static str],
    pub original_price: Option<&'static str>,
    pub price: &'static str,
    pub footnote: Option<&'static str>,
    pub is_popular: bool,
    pub cta_text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Article {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub read_time: &'static str,
    pub author: &'static str,
    pub date: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogCategory {
    pub name: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Founder {
    pub name: &'static str,
    pub role: &'static str,
    pub initials: &'static str,
    pub description: &'static str,
    pub specialties: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyValue {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImpactStat {
    pub figure: &'static str,
    pub label: &'static str,
}

pub const COUNTRIES: &[Country] = &[
    Country {
        name: "Germany",
        tuition: 300,
        living: 11000,
        currency: "EUR",
        description: "Home to world-class engineering and research universities",
        details: "Germany offers excellent education with low tuition fees. Most public universities charge only administrative fees. High quality of life and strong job market for graduates.",
    },
    Country {
        name: "Hungary",
        tuition: 3000,
        living: 8000,
        currency: "EUR",
        description: "Rich cultural heritage with affordable quality education",
        details: "Hungary provides affordable education in EU. Many programs taught in English. Beautiful historic cities and central European location.",
    },
    Country {
        name: "Croatia",
        tuition: 2500,
        living: 7500,
        currency: "EUR",
        description: "Beautiful coastal country with growing academic reputation",
        details: "Croatia offers quality education at reasonable costs. Beautiful Mediterranean country with growing international programs.",
    },
    Country {
        name: "France",
        tuition: 2770,
        living: 12000,
        currency: "EUR",
        description: "Prestigious institutions and vibrant cultural life",
        details: "France is renowned for its academic excellence and cultural richness. Many scholarships available for international students.",
    },
    Country {
        name: "Denmark",
        tuition: 0,
        living: 15000,
        currency: "EUR",
        description: "Free tuition for EU students, high quality of life",
        details: "Denmark offers free tuition for EU students. High standard of living and innovative teaching methods. Strong focus on sustainability.",
    },
];

pub const COUNTRY_PROFILES: &[CountryProfile] = &[
    CountryProfile {
        country: "Germany",
        requirements: &[
            "IELTS 6.0 or TOEFL 80",
            "APS Certificate",
            "Academic Transcripts",
            "Statement of Purpose",
        ],
        universities: &[
            "Technical University of Munich",
            "University of Heidelberg",
            "RWTH Aachen",
        ],
        intake: "September & March",
        work_rights: "20 hours/week during studies",
        language: "English & German programs available",
    },
    CountryProfile {
        country: "Hungary",
        requirements: &[
            "IELTS 5.5 or TOEFL 72",
            "Academic Transcripts",
            "Statement of Purpose",
            "Passport",
        ],
        universities: &[
            "University of Debrecen",
            "Semmelweis University",
            "Budapest University of Technology",
        ],
        intake: "September & February",
        work_rights: "24 hours/week during studies",
        language: "English programs available",
    },
    CountryProfile {
        country: "Croatia",
        requirements: &[
            "IELTS 6.0 or TOEFL 78",
            "Academic Transcripts",
            "Statement of Purpose",
            "Passport",
        ],
        universities: &["University of Zagreb", "University of Split", "University of Rijeka"],
        intake: "September & February",
        work_rights: "20 hours/week during studies",
        language: "English & Croatian programs",
    },
    CountryProfile {
        country: "France",
        requirements: &[
            "IELTS 6.0 or TOEFL 80",
            "Academic Transcripts",
            "Statement of Purpose",
            "Campus France Application",
        ],
        universities: &["Sorbonne University", "École Normale Supérieure", "HEC Paris"],
        intake: "September & January",
        work_rights: "20 hours/week during studies",
        language: "English & French programs",
    },
    CountryProfile {
        country: "Denmark",
        requirements: &[
            "IELTS 6.5 or TOEFL 88",
            "Academic Transcripts",
            "Statement of Purpose",
            "Passport",
        ],
        universities: &[
            "University of Copenhagen",
            "Technical University of Denmark",
            "Aarhus University",
        ],
        intake: "September & February",
        work_rights: "20 hours/week during studies",
        language: "English programs available",
    },
];

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        id: "english-countries",
        title: "Complete A-Z Support for English Nations",
        description: "Full guidance for English-speaking destinations",
        countries: Some("USA, UK, Ireland, Australia, Canada"),
        services: &[
            "Document accumulation to visa help",
            "University selection & applications",
            "Complete end-to-end support",
            "No hidden charges",
        ],
        original_price: None,
        price: "FREE",
        footnote: Some("We earn from university commissions, ensuring quality assistance at no cost to students"),
        is_popular: false,
        cta_text: "Book Now",
    },
    PricingTier {
        id: "eu-documents",
        title: "Document & Test Preparation",
        description: "Essential document preparation for EU applications",
        countries: None,
        services: &[
            "Document accumulation",
            "IELTS/TOEFL preparation guidance",
            "APS (Germany) assistance",
            "Academic transcript verification",
            "Statement of Purpose review",
        ],
        original_price: Some("INR 12,000"),
        price: "INR 10,000",
        footnote: None,
        is_popular: false,
        cta_text: "Book Now",
    },
    PricingTier {
        id: "eu-applications",
        title: "University Selection & Applications",
        description: "Complete application process management",
        countries: None,
        services: &[
            "University shortlisting",
            "Application assistance",
            "SOP drafting & review",
            "Uni-assist help",
            "Course selection guidance",
            "Acceptance support",
        ],
        original_price: Some("INR 12,000"),
        price: "INR 10,000",
        footnote: None,
        is_popular: false,
        cta_text: "Book Now",
    },
    PricingTier {
        id: "eu-visa",
        title: "Post-Acceptance Support",
        description: "Visa and immigration assistance",
        countries: None,
        services: &[
            "Visa application assistance",
            "Immigration guidance",
            "Pre-departure support",
            "Documentation review",
            "Embassy appointment booking",
        ],
        original_price: Some("INR 12,000"),
        price: "INR 10,000",
        footnote: None,
        is_popular: false,
        cta_text: "Book Now",
    },
    PricingTier {
        id: "eu-complete",
        title: "Complete A-Z EU Support",
        description: "Comprehensive worry-free expert guidance",
        countries: None,
        services: &[
            "All services from packages 2, 3, and 4",
            "End-to-end EU application support",
            "Dedicated consultant",
            "Priority support",
            "Money-back guarantee",
        ],
        original_price: Some("INR 30,000"),
        price: "INR 25,000",
        footnote: None,
        is_popular: true,
        cta_text: "Book Now",
    },
];

pub const FEATURED_ARTICLES: &[Article] = &[
    Article {
        id: 1,
        title: "Complete Guide to Studying in Germany 2024",
        excerpt: "Everything you need to know about German universities, from application requirements to living costs and work opportunities.",
        category: "Country Guides",
        read_time: "8 min read",
        author: "Zaid",
        date: "Dec 15, 2024",
    },
    Article {
        id: 2,
        title: "IELTS vs TOEFL: Which Test Should You Take?",
        excerpt: "A comprehensive comparison of the two most popular English proficiency tests for international students.",
        category: "Application Process",
        read_time: "5 min read",
        author: "Saurabh",
        date: "Dec 12, 2024",
    },
    Article {
        id: 3,
        title: "Student Life in European Cities: What to Expect",
        excerpt: "Real experiences from international students living and studying in major European cities.",
        category: "Student Life",
        read_time: "6 min read",
        author: "Vivian",
        date: "Dec 10, 2024",
    },
];

pub const BLOG_CATEGORIES: &[BlogCategory] = &[
    BlogCategory { name: "Country Guides", count: 12 },
    BlogCategory { name: "Visa Tips", count: 8 },
    BlogCategory { name: "Student Life", count: 15 },
    BlogCategory { name: "Application Process", count: 10 },
];

pub const FAQ: &[FaqItem] = &[
    FaqItem {
        question: "How much does it cost to study in Europe?",
        answer: "Costs vary significantly by country. Germany offers very low tuition (€300/year) while living costs range from €7,500-15,000 annually depending on the city.",
    },
    FaqItem {
        question: "Do I need to know the local language?",
        answer: "Many European universities offer programs taught entirely in English. However, learning the local language can enhance your experience and job prospects.",
    },
    FaqItem {
        question: "Can I work while studying in Europe?",
        answer: "Yes! Most EU countries allow international students to work 20-24 hours per week during studies, helping offset living expenses.",
    },
    FaqItem {
        question: "How long does the application process take?",
        answer: "Typically 3-6 months from application to visa approval. We recommend starting at least 8-12 months before your intended start date.",
    },
    FaqItem {
        question: "What are the chances of getting accepted?",
        answer: "With proper guidance and preparation, our students have a 95% acceptance rate. We help you choose universities that match your profile.",
    },
];

pub const ABOUT: &str = "We once dreamed of studying and living abroad. Coming from different backgrounds, we faced the same struggles: overpriced consultancies, little real support, and the burden of figuring everything out on our own. We know how overwhelming the process feels and exactly what kind of help students need. That's why we created SaSa: not to sell dreams, but to guide you step by step until they become real, so you're ready and confident to live them yourself.";

pub const FOUNDERS: &[Founder] = &[
    Founder {
        name: "Zaid",
        role: "Co-Founder & EU Specialist",
        initials: "ZK",
        description: "Expert in European university applications and visa processes. Helped 200+ students secure admissions.",
        specialties: &["Germany Applications", "EU Visa Process", "APS Certification"],
    },
    Founder {
        name: "Saurabh",
        role: "Co-Founder & Strategy Lead",
        initials: "SM",
        description: "Specializes in English-speaking countries and strategic planning. Former international student turned consultant.",
        specialties: &["USA/UK Applications", "Strategic Planning", "Scholarship Guidance"],
    },
    Founder {
        name: "Vivian",
        role: "Co-Founder & Operations Head",
        initials: "VL",
        description: "Operations and student success specialist. Ensures every student receives personalized attention and support.",
        specialties: &["Student Success", "Operations", "Pre-departure Support"],
    },
];

pub const VALUES: &[CompanyValue] = &[
    CompanyValue {
        title: "Empathy First",
        description: "We understand the struggles because we've been there. Every decision is made with genuine care for student success.",
    },
    CompanyValue {
        title: "Results-Driven",
        description: "We don't just provide services - we deliver results. Our success is measured by your acceptance letters.",
    },
    CompanyValue {
        title: "Community Support",
        description: "You're not just a client, you're part of our community. We support each other through the entire journey.",
    },
];

pub const IMPACT_STATS: &[ImpactStat] = &[
    ImpactStat { figure: "500+", label: "Students Helped" },
    ImpactStat { figure: "15+", label: "Countries" },
    ImpactStat { figure: "95%", label: "Success Rate" },
    ImpactStat { figure: "2+", label: "Years Experience" },
];

pub const COUNTRY_CHOICES: &[&str] = &[
    "Germany", "Hungary", "Croatia", "France", "Denmark", "USA", "UK", "Ireland", "Australia",
    "Canada", "Other",
];

pub const EDUCATION_LEVELS: &[&str] = &["Bachelor's", "Master's", "PhD", "Other"];

pub fn find_country(name: &str) -> Option<&'static Country> {
    let name = name.trim();
    COUNTRIES.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

pub fn country_profile(name: &str) -> Option<&'static CountryProfile> {
    let name = name.trim();
    COUNTRY_PROFILES
        .iter()
        .find(|p| p.country.eq_ignore_ascii_case(name))
}

pub fn find_tier(id: &str) -> Option<&'static PricingTier> {
    PRICING_TIERS.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_are_tuition_plus_living() {
        let expected = [
            ("Germany", 11300),
            ("Hungary", 11000),
            ("Croatia", 10000),
            ("France", 14770),
            ("Denmark", 15000),
        ];
        for (name, total) in expected {
            let country = find_country(name).unwrap();
            assert_eq!(country.total(), total, "{}", name);
            assert_eq!(country.total(), country.tuition + country.living);
        }
    }

    #[test]
    fn every_country_has_a_profile() {
        for country in COUNTRIES {
            assert!(country_profile(country.name).is_some(), "{}", country.name);
        }
    }

    #[test]
    fn lookups_ignore_case_and_padding() {
        assert_eq!(find_country(" germany ").unwrap().name, "Germany");
        assert_eq!(country_profile("DENMARK").unwrap().intake, "September & February");
        assert!(find_country("Atlantis").is_none());
    }

    #[test]
    fn exactly_one_popular_tier() {
        let popular: Vec<_> = PRICING_TIERS.iter().filter(|t| t.is_popular).collect();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].id, "eu-complete");
        assert!(find_tier("english-countries").unwrap().original_price.is_none());
    }
}
