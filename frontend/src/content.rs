//! Static site copy: destinations, services, testimonials and FAQ.

use crate::consultation::request::{DestinationCountry, SelectOption};

pub struct Country {
    pub slug: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
    pub popular_courses: &'static [&'static str],
    pub intakes: &'static str,
    pub tuition: &'static str,
    pub living_costs: &'static str,
    pub work_rights: &'static str,
}

impl Country {
    /// The matching choice in the consultation form.
    pub fn destination(&self) -> Option<DestinationCountry> {
        DestinationCountry::from_slug(self.slug)
    }
}

pub const COUNTRIES: &[Country] = &[
    Country {
        slug: "singapore",
        name: "Singapore",
        flag: "🇸🇬",
        tagline: "Asia's education hub",
        summary: "Singapore pairs globally ranked universities with one of the safest, most connected cities in the world. Degrees are taught in English and graduates are in demand across finance, technology and engineering.",
        highlights: &[
            "Universities ranked in the global top 20",
            "English-medium teaching throughout",
            "Strong graduate employment rates",
            "Safe, multicultural city",
        ],
        popular_courses: &["Business Analytics", "Computer Science", "Engineering", "Hospitality Management"],
        intakes: "January, July and September",
        tuition: "SGD 20,000 to 45,000 per year",
        living_costs: "SGD 1,200 to 2,000 per month",
        work_rights: "Up to 16 hours per week during term at approved institutions",
    },
    Country {
        slug: "dubai",
        name: "Dubai",
        flag: "🇦🇪",
        tagline: "International campuses, global degrees",
        summary: "Dubai's academic free zones host branch campuses of respected UK, Australian and Indian universities. Students earn the same degree as the home campus while living in a fast-growing business capital.",
        highlights: &[
            "Same degree as the home campus",
            "Tax-free part-time work opportunities",
            "Short flights to South Asia, Africa and Europe",
            "Modern campuses and facilities",
        ],
        popular_courses: &["MBA", "Aviation Management", "Media & Communication", "Finance"],
        intakes: "January, May and September",
        tuition: "AED 40,000 to 90,000 per year",
        living_costs: "AED 3,000 to 5,000 per month",
        work_rights: "Part-time work on campus and approved internships",
    },
    Country {
        slug: "mauritius",
        name: "Mauritius",
        flag: "🇲🇺",
        tagline: "Affordable study on an island campus",
        summary: "Mauritius offers internationally accredited degrees at a fraction of the usual cost, in a bilingual English and French speaking environment with a relaxed pace of life.",
        highlights: &[
            "Among the lowest tuition fees of any destination",
            "Internationally accredited programmes",
            "Bilingual English and French environment",
            "Straightforward student visa process",
        ],
        popular_courses: &["Medicine", "Tourism & Hospitality", "Information Technology", "Law"],
        intakes: "February and September",
        tuition: "USD 3,500 to 8,000 per year",
        living_costs: "USD 400 to 700 per month",
        work_rights: "Up to 20 hours per week with an occupation permit",
    },
    Country {
        slug: "uk",
        name: "United Kingdom",
        flag: "🇬🇧",
        tagline: "Centuries of academic excellence",
        summary: "The UK is home to some of the world's oldest and most respected universities. One-year master's programmes save time and money, and the Graduate Route lets students stay on to work after graduation.",
        highlights: &[
            "One-year master's degrees",
            "Graduate Route: two years of post-study work",
            "World-renowned universities",
            "Scholarships for international students",
        ],
        popular_courses: &["Data Science", "Law", "Public Health", "International Business"],
        intakes: "January, May and September",
        tuition: "GBP 12,000 to 30,000 per year",
        living_costs: "GBP 1,000 to 1,400 per month",
        work_rights: "Up to 20 hours per week during term",
    },
    Country {
        slug: "europe",
        name: "Europe",
        flag: "🇪🇺",
        tagline: "Low tuition, high quality, endless travel",
        summary: "Germany, France, the Netherlands, Ireland and their neighbours offer a growing number of English-taught programmes, many at public universities with low or no tuition, and the freedom to travel the Schengen area.",
        highlights: &[
            "Low or zero tuition at many public universities",
            "Hundreds of English-taught programmes",
            "Travel freely across the Schengen area",
            "Post-study work visas in most countries",
        ],
        popular_courses: &["Mechanical Engineering", "Renewable Energy", "Design", "Management"],
        intakes: "Mainly September, some February intakes",
        tuition: "EUR 0 to 15,000 per year",
        living_costs: "EUR 800 to 1,200 per month",
        work_rights: "Typically 20 hours per week, varies by country",
    },
];

pub fn country_by_slug(slug: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|country| country.slug == slug)
}

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "🎯",
        title: "Career Counselling",
        description: "One-on-one sessions to match your interests, grades and budget with the right course and country.",
    },
    Service {
        icon: "🏛️",
        title: "University Selection",
        description: "A shortlist of universities where your profile is competitive, with honest advice on each.",
    },
    Service {
        icon: "📝",
        title: "Application Support",
        description: "Statement of purpose reviews, document checks and on-time submission to every university.",
    },
    Service {
        icon: "🛂",
        title: "Visa Assistance",
        description: "Complete visa file preparation, financial documentation and mock interviews.",
    },
    Service {
        icon: "🎓",
        title: "Scholarship Guidance",
        description: "We find the scholarships you qualify for and help you write applications that stand out.",
    },
    Service {
        icon: "✈️",
        title: "Pre-departure & Accommodation",
        description: "Housing, travel, airport pickup and a briefing on life in your new country.",
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub programme: &'static str,
    pub destination: &'static str,
    pub quote: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Priya S.",
        programme: "MSc Data Science",
        destination: "United Kingdom",
        quote: "From shortlisting universities to my visa interview, the team was with me at every step. I got offers from four universities and a partial scholarship.",
    },
    Testimonial {
        name: "Arjun M.",
        programme: "BEng Mechanical Engineering",
        destination: "Germany",
        quote: "I didn't know studying in Germany could be almost tuition free. They found an English-taught programme that fit me perfectly.",
    },
    Testimonial {
        name: "Fatima R.",
        programme: "MBA",
        destination: "Dubai",
        quote: "The counsellors understood what I needed as a working professional. The whole process took less than three months.",
    },
    Testimonial {
        name: "Kevin L.",
        programme: "BSc Computer Science",
        destination: "Singapore",
        quote: "They were honest about which universities were realistic for me, and that honesty is why I ended up in the right place.",
    },
    Testimonial {
        name: "Amina D.",
        programme: "MBBS",
        destination: "Mauritius",
        quote: "Affordable, accredited and close to home. My parents felt confident because every document was checked twice.",
    },
];

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Is the first consultation really free?",
        answer: "Yes. Your first consultation is free and there's no obligation. We'll review your profile and suggest destinations and universities that suit you.",
    },
    FaqEntry {
        question: "When should I start preparing my application?",
        answer: "Ideally 9 to 12 months before your intended intake. That leaves time for English tests, document preparation, applications and the visa process.",
    },
    FaqEntry {
        question: "Do I need IELTS to study abroad?",
        answer: "Most universities ask for an English test such as IELTS, PTE or TOEFL. Some waive it if your previous education was taught in English. We'll tell you exactly what each university requires.",
    },
    FaqEntry {
        question: "Can I work while I study?",
        answer: "In most of our destinations, yes. Students can usually work part time during term and full time in holidays. The exact hours depend on the country and your visa.",
    },
    FaqEntry {
        question: "Do you help with scholarships?",
        answer: "Yes. We identify the scholarships and tuition discounts you're eligible for and support you through the application.",
    },
    FaqEntry {
        question: "What if my visa is refused?",
        answer: "We review the refusal reasons with you, strengthen the file and help you reapply or consider an alternative destination.",
    },
    FaqEntry {
        question: "Which countries do you cover?",
        answer: "We specialise in Singapore, Dubai, Mauritius, the United Kingdom and Europe, with partner institutions in each.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_country_lookup() {
        assert_eq!(country_by_slug("uk").map(|c| c.name), Some("United Kingdom"));
        assert!(country_by_slug("canada").is_none());
        assert!(country_by_slug("").is_none());
    }

    #[test]
    fn test_country_slugs_unique() {
        let slugs: HashSet<_> = COUNTRIES.iter().map(|c| c.slug).collect();
        assert_eq!(slugs.len(), COUNTRIES.len());
    }

    #[test]
    fn test_every_country_is_a_form_destination() {
        for country in COUNTRIES {
            assert!(country.destination().is_some(), "{}", country.slug);
        }
    }

    #[test]
    fn test_content_not_empty() {
        assert!(!SERVICES.is_empty());
        assert!(!TESTIMONIALS.is_empty());
        assert!(FAQ.iter().all(|entry| !entry.answer.is_empty()));
    }
}
