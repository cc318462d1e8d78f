
pub const GERMANY_REPLY: &str = "Germany is an excellent choice for studying abroad! Public universities have very low tuition fees (around €300 per semester). Living costs are approximately €11,000 per year. Germany offers strong programs in engineering, business, and sciences. Would you like more specific information about applications or visa requirements?";

pub const VISA_REPLY: &str = "For student visas, you'll typically need: 1) Acceptance letter from university, 2) Proof of financial resources, 3) Health insurance, 4) Valid passport, 5) Academic transcripts. Processing time varies by country (2-8 weeks usually). I can help you with country-specific visa requirements!";

pub const COST_REPLY: &str = "Costs vary significantly by country. EU countries like Germany, Hungary, and Croatia offer affordable options (€10,000-15,000/year total). Countries like Denmark have free tuition but higher living costs. Would you like a detailed cost breakdown for specific countries?";

pub const SCHOLARSHIP_REPLY: &str = "There are many scholarship opportunities! DAAD scholarships for Germany, Erasmus+ for EU, government scholarships, and university-specific grants. Merit-based and need-based options available. I can help you find scholarships for your chosen destination!";

pub const FALLBACK_REPLY: &str = "That's a great question! As your study abroad consultant, I'm here to help with university applications, visa processes, cost planning, and country selection. Could you be more specific about what aspect of studying abroad you'd like to know about?";

struct Rule {
    triggers: &'static [&'static str],
    reply: &'static str,
}

// First match wins.
const RULES: &[Rule] = &[
    Rule {
        triggers: &["germany", "german"],
        reply: GERMANY_REPLY,
    },
    Rule {
        triggers: &["visa", "student visa"],
        reply: VISA_REPLY,
    },
    Rule {
        triggers: &["cost", "fees", "expensive"],
        reply: COST_REPLY,
    },
    Rule {
        triggers: &["scholarship", "funding"],
        reply: SCHOLARSHIP_REPLY,
    },
];

/// Canned keyword replies, used when no remote model is selected.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTemplates;

impl LocalTemplates {
    pub fn new() -> Self {
        Self
    }

    pub fn respond(&self, message: &str) -> &'static str {
        let lower = message.to_lowercase();
        RULES
            .iter()
            .find(|rule| rule.triggers.iter().any(|t| lower.contains(t)))
            .map(|rule| rule.reply)
            .unwrap_or(FALLBACK_REPLY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn germany_matches_case_insensitively() {
        let templates = LocalTemplates::new();
        assert_eq!(templates.respond("Tell me about GERMANY"), GERMANY_REPLY);
        assert_eq!(templates.respond("Is German hard to learn?"), GERMANY_REPLY);
    }

    #[test]
    fn earlier_rules_win() {
        let templates = LocalTemplates::new();
        // mentions both germany and visa
        assert_eq!(templates.respond("German visa timeline?"), GERMANY_REPLY);
        assert_eq!(templates.respond("visa fees?"), VISA_REPLY);
    }

    #[test]
    fn each_rule_is_reachable() {
        let templates = LocalTemplates::new();
        assert_eq!(templates.respond("Do I need a Visa?"), VISA_REPLY);
        assert_eq!(templates.respond("Is Denmark expensive"), COST_REPLY);
        assert_eq!(templates.respond("any funding?"), SCHOLARSHIP_REPLY);
    }

    #[test]
    fn unmatched_input_falls_back() {
        let templates = LocalTemplates::new();
        assert_eq!(templates.respond("hello there"), FALLBACK_REPLY);
        assert_eq!(templates.respond(""), FALLBACK_REPLY);
    }
}
