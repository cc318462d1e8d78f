//! Plain-text views of the reference tables for the console front end.

use crate::domain::catalog::{
    Article, BlogCategory, CompanyValue, Country, CountryProfile, FaqItem, Founder, ImpactStat,
    PricingTier,
};
use std::fmt;

/// Formats a whole amount with comma thousands separators, e.g. `11300` -> `11,300`.
pub fn format_amount(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn country_row(country: &Country) -> String {
    format!(
        "{:<8}  tuition {} {:>6}  living {} {:>6}  total {} {:>6}/year",
        country.name,
        country.currency,
        format_amount(country.tuition),
        country.currency,
        format_amount(country.living),
        country.currency,
        format_amount(country.total()),
    )
}

struct CountryDetail<'a> {
    country: &'a Country,
    profile: Option<&'a CountryProfile>,
}

impl fmt::Display for CountryDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.country;
        writeln!(f, "Study in {}", c.name)?;
        writeln!(f, "{}", c.description)?;
        writeln!(f)?;
        writeln!(f, "Annual cost breakdown")?;
        writeln!(f, "  Tuition: {} {}", c.currency, format_amount(c.tuition))?;
        writeln!(f, "  Living:  {} {}", c.currency, format_amount(c.living))?;
        writeln!(f, "  Total:   {} {}", c.currency, format_amount(c.total()))?;
        writeln!(f)?;
        writeln!(f, "{}", c.details)?;

        if let Some(profile) = self.profile {
            writeln!(f)?;
            writeln!(f, "Requirements: {}", profile.requirements.join(", "))?;
            writeln!(f, "Top universities:")?;
            for uni in profile.universities {
                writeln!(f, "  - {}", uni)?;
            }
            writeln!(f, "Intake periods: {}", profile.intake)?;
            writeln!(f, "Work rights: {}", profile.work_rights)?;
            writeln!(f, "Language: {}", profile.language)?;
        }
        Ok(())
    }
}

pub fn country_detail(country: &Country, profile: Option<&CountryProfile>) -> String {
    CountryDetail { country, profile }.to_string()
}

struct PricingCard<'a>(&'a PricingTier);

impl fmt::Display for PricingCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tier = self.0;
        let popular = if tier.is_popular { "  [Most Popular]" } else { "" };
        writeln!(f, "{} ({}){}", tier.title, tier.id, popular)?;
        writeln!(f, "  {}", tier.description)?;
        if let Some(countries) = tier.countries {
            writeln!(f, "  Countries: {}", countries)?;
        }
        match tier.original_price {
            Some(original) => writeln!(
                f,
                "  Price: {} (was {}, limited time discount)",
                tier.price, original
            )?,
            None => writeln!(f, "  Price: {}", tier.price)?,
        }
        for service in tier.services {
            writeln!(f, "  * {}", service)?;
        }
        if let Some(footnote) = tier.footnote {
            writeln!(f, "  {}", footnote)?;
        }
        writeln!(f, "  {}: sasa-desk book --tier {}", tier.cta_text, tier.id)
    }
}

pub fn pricing_tier(tier: &PricingTier) -> String {
    PricingCard(tier).to_string()
}

struct BlogPage<'a> {
    articles: &'a [Article],
    categories: &'a [BlogCategory],
}

impl fmt::Display for BlogPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: Vec<String> = self
            .categories
            .iter()
            .map(|c| format!("{} ({})", c.name, c.count))
            .collect();
        writeln!(f, "Categories: {}", tags.join(" | "))?;
        for article in self.articles {
            writeln!(f)?;
            writeln!(f, "{} [{}, {}]", article.title, article.category, article.read_time)?;
            writeln!(f, "  {}", article.excerpt)?;
            writeln!(f, "  {} - {}", article.author, article.date)?;
        }
        Ok(())
    }
}

pub fn blog(articles: &[Article], categories: &[BlogCategory]) -> String {
    BlogPage {
        articles,
        categories,
    }
    .to_string()
}

pub fn faq(items: &[FaqItem]) -> String {
    items
        .iter()
        .map(|item| format!("Q: {}\nA: {}\n", item.question, item.answer))
        .collect::<Vec<_>>()
        .join("\n")
}

struct AboutPage<'a> {
    intro: &'a str,
    values: &'a [CompanyValue],
    founders: &'a [Founder],
    stats: &'a [ImpactStat],
}

impl fmt::Display for AboutPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.intro)?;
        writeln!(f)?;
        writeln!(f, "Our values")?;
        for value in self.values {
            writeln!(f, "  {}: {}", value.title, value.description)?;
        }
        writeln!(f)?;
        writeln!(f, "Meet our founders")?;
        for founder in self.founders {
            writeln!(f, "  {} ({}) - {}", founder.name, founder.initials, founder.role)?;
            writeln!(f, "    {}", founder.description)?;
            writeln!(f, "    Specialties: {}", founder.specialties.join(", "))?;
        }
        writeln!(f)?;
        let figures: Vec<String> = self
            .stats
            .iter()
            .map(|s| format!("{} {}", s.figure, s.label))
            .collect();
        writeln!(f, "Our impact so far: {}", figures.join(" | "))
    }
}

pub fn about(
    intro: &str,
    values: &[CompanyValue],
    founders: &[Founder],
    stats: &[ImpactStat],
) -> String {
    AboutPage {
        intro,
        values,
        founders,
        stats,
    }
    .to_string()
}
