use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Row of the companies table backing the analytics summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub employees_count: i64,
    pub price_usd: f64,
}

/// Aggregates computed over the top companies by headcount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanySummary {
    pub total_employees: i64,
    /// Mean share price, rounded to cents.
    pub average_price_usd: f64,
    pub largest_employer: String,
    pub highest_priced: String,
    pub top_country: String,
}

impl CompanySummary {
    /// Summarize a non-empty slice of companies. Returns None when there is
    /// nothing to aggregate.
    pub fn from_companies(companies: &[Company]) -> Option<Self> {
        let first = companies.first()?;

        let total_employees = companies.iter().map(|c| c.employees_count).sum();
        let average_price_usd = {
            let mean =
                companies.iter().map(|c| c.price_usd).sum::<f64>() / companies.len() as f64;
            (mean * 100.0).round() / 100.0
        };

        let largest_employer = companies
            .iter()
            .fold(first, |best, c| {
                if c.employees_count > best.employees_count { c } else { best }
            })
            .name
            .clone();

        let highest_priced = companies
            .iter()
            .fold(first, |best, c| if c.price_usd > best.price_usd { c } else { best })
            .name
            .clone();

        let mut by_country: BTreeMap<&str, usize> = BTreeMap::new();
        for company in companies {
            *by_country.entry(company.country.as_str()).or_default() += 1;
        }
        // Strict comparison over the sorted map: ties go to the
        // alphabetically first country, never to iteration order.
        let top_country = by_country
            .into_iter()
            .fold(("", 0usize), |best, (country, n)| {
                if n > best.1 { (country, n) } else { best }
            })
            .0
            .to_owned();

        Some(Self {
            total_employees,
            average_price_usd,
            largest_employer,
            highest_priced,
            top_country,
        })
    }
}
