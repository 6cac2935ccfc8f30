//! Canned answers for the chat widget.
//!
//! Rules are checked top to bottom and the first with a matching keyword
//! wins, so more specific topics sit above broader ones (e.g. "uk visa" must
//! hit the visa rule before the UK rule).
//!
//! Single-word keywords match whole words only, with an optional plural
//! "s" ("visas", "thanks"). Keywords containing a space match as a phrase
//! of consecutive words.

pub const WELCOME: &str = "Hi! I'm the Horizon Scholars assistant. Ask me about study destinations, visas, scholarships or how to book a free consultation.";

const EMPTY_PROMPT: &str = "Type a question and I'll do my best to help.";

const FALLBACK: &str = "I'm not sure about that one. Our counsellors can help: book a free consultation on the Contact page and we'll get back to you within 24 hours.";

struct Rule {
    keywords: &'static [&'static str],
    response: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        keywords: &["visa", "immigration", "permit"],
        response: "We guide you through the full student visa process: document checklist, financial proof, interview preparation and submission. Visa rules differ by country, so a counsellor will walk you through the requirements for your destination.",
    },
    Rule {
        keywords: &["scholarship", "funding", "financial aid", "bursary"],
        response: "Many of our partner universities offer merit scholarships of 10% to 50% of tuition. We shortlist the ones you qualify for and help with the application essays.",
    },
    Rule {
        keywords: &["cost", "fee", "price", "tuition", "expensive", "budget"],
        response: "Costs depend on the country and programme. As a rough guide, Mauritius and Dubai are the most affordable, Singapore and the UK sit at the higher end, and many European public universities charge low or no tuition. Our counselling is free.",
    },
    Rule {
        keywords: &["ielts", "toefl", "pte", "english test", "language test", "duolingo"],
        response: "Most programmes ask for IELTS 6.0 to 6.5 or an equivalent PTE/TOEFL score. Some universities waive the test if your previous studies were in English. We also run test preparation sessions.",
    },
    Rule {
        keywords: &["accommodation", "housing", "hostel", "dorm", "stay"],
        response: "We help arrange university halls or private student housing before you fly, plus airport pickup at most destinations.",
    },
    Rule {
        keywords: &["document", "apply", "application", "requirement", "transcript", "sop"],
        response: "A typical application needs your academic transcripts, passport, English test score, a statement of purpose and two references. We review every document before it goes out.",
    },
    Rule {
        keywords: &["singapore"],
        response: "Singapore offers world-ranked universities, a safe multicultural city and strong graduate job prospects in finance, tech and engineering.",
    },
    Rule {
        keywords: &["dubai", "uae", "emirates"],
        response: "Dubai hosts branch campuses of leading UK and Australian universities, with tax-free part-time work and easy travel connections.",
    },
    Rule {
        keywords: &["mauritius"],
        response: "Mauritius combines affordable tuition with internationally accredited degrees and an English and French speaking environment.",
    },
    Rule {
        keywords: &["uk", "united kingdom", "england", "london", "britain"],
        response: "The UK offers one-year master's degrees, world-famous universities and the Graduate Route visa to work for two years after you finish.",
    },
    Rule {
        keywords: &["europe", "germany", "france", "netherlands", "ireland"],
        response: "Europe has many English-taught programmes, low tuition at public universities and the chance to travel across the Schengen area.",
    },
    Rule {
        keywords: &["contact", "consultation", "call", "appointment", "book", "talk"],
        response: "You can book a free consultation on our Contact page. Fill in the form and a counsellor will reach out within 24 hours.",
    },
    Rule {
        keywords: &["thank", "thx"],
        response: "You're welcome! Let me know if there's anything else you'd like to know.",
    },
    Rule {
        keywords: &["hello", "hi", "hey", "good morning", "good evening"],
        response: "Hello! How can I help you plan your studies abroad today?",
    },
];

/// The message split into lower-cased alphanumeric words.
fn words(input: &str) -> Vec<String> {
    input
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn keyword_matches(words: &[String], keyword: &str) -> bool {
    if keyword.contains(' ') {
        let phrase: Vec<&str> = keyword.split(' ').collect();
        return words
            .windows(phrase.len())
            .any(|window| window.iter().zip(&phrase).all(|(word, part)| word == part));
    }
    words
        .iter()
        .any(|word| word == keyword || word.strip_suffix('s') == Some(keyword))
}

pub fn respond(input: &str) -> &'static str {
    let words = words(input);
    if words.is_empty() {
        return EMPTY_PROMPT;
    }

    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| keyword_matches(&words, keyword)))
        .map(|rule| rule.response)
        .unwrap_or(FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(respond(""), EMPTY_PROMPT);
        assert_eq!(respond("   \n"), EMPTY_PROMPT);
    }

    #[test]
    fn test_unknown_input_falls_back() {
        assert_eq!(respond("what's the weather on mars"), FALLBACK);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(respond("SINGAPORE"), respond("singapore"));
        assert!(respond("Tell me about Singapore").contains("Singapore"));
    }

    #[test]
    fn test_rule_order() {
        // Both the visa and UK rules match; visa is listed first.
        assert_eq!(respond("Do I need a UK visa?"), RULES[0].response);
        assert!(respond("scholarships in Dubai").contains("merit scholarships"));
    }

    #[test]
    fn test_each_destination_has_an_answer() {
        for destination in ["singapore", "dubai", "mauritius", "uk", "europe"] {
            assert_ne!(respond(destination), FALLBACK, "{}", destination);
        }
    }

    #[test]
    fn test_greeting() {
        assert_eq!(
            respond("hey there"),
            "Hello! How can I help you plan your studies abroad today?"
        );
    }

    const THANKS: &str = "You're welcome! Let me know if there's anything else you'd like to know.";

    #[test]
    fn test_keywords_do_not_match_inside_words() {
        assert_eq!(respond("Thanks, this was helpful"), THANKS);
        assert_eq!(respond("Which course should I choose?"), FALLBACK);
        assert_eq!(respond("Is my degree accepted?"), FALLBACK);
        assert_eq!(respond("I love philosophy"), FALLBACK);
        assert_eq!(respond("The Dukes of Hazzard"), FALLBACK);
        assert_eq!(respond("I think so"), FALLBACK);
    }

    #[test]
    fn test_whole_words_and_plurals_match() {
        assert_eq!(respond("thank you!"), THANKS);
        assert!(respond("What are the fees?").contains("Costs depend"));
        assert!(respond("Where will I stay?").contains("housing"));
        assert!(respond("Can you help with my SOP").contains("statement of purpose"));
        assert!(respond("I got a PTE score of 58").contains("IELTS 6.0"));
        assert!(respond("Hi!").starts_with("Hello!"));
    }

    #[test]
    fn test_phrase_keywords() {
        assert!(respond("Which English test should I take?").contains("IELTS 6.0"));
        assert!(respond("Good   morning").starts_with("Hello!"));
        assert_eq!(respond("english, testing"), FALLBACK);
    }

    #[test]
    fn test_punctuation_only_is_empty() {
        assert_eq!(respond("?!"), EMPTY_PROMPT);
    }
}
