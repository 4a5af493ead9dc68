//! Job Market Insights panel. Static demo data; never calls out.

use serde::Serialize;

pub const TRENDING_ROLES: [&str; 5] = [
    "AI/ML Engineer",
    "Cybersecurity Specialist",
    "Data Analyst",
    "Product Manager",
    "Full-Stack Developer",
];

/// Annual salary ranges in INR (lakhs per annum), in display order.
pub const SALARY_INSIGHTS: [(&str, &str); 5] = [
    ("AI/ML Engineer", "₹10-30 LPA"),
    ("Cybersecurity Specialist", "₹8-20 LPA"),
    ("Data Analyst", "₹6-15 LPA"),
    ("Product Manager", "₹15-35 LPA"),
    ("Full-Stack Developer", "₹8-18 LPA"),
];

#[derive(Debug, Serialize)]
pub struct SalaryInsight {
    pub role: &'static str,
    pub salary: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MarketInsights {
    pub trending_roles: Vec<&'static str>,
    pub salary_currency: &'static str,
    pub salary_insights: Vec<SalaryInsight>,
}

pub fn market_insights() -> MarketInsights {
    MarketInsights {
        trending_roles: TRENDING_ROLES.to_vec(),
        salary_currency: "INR",
        salary_insights: SALARY_INSIGHTS
            .iter()
            .map(|&(role, salary)| SalaryInsight { role, salary })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insights_keep_fixed_order() {
        let insights = market_insights();
        assert_eq!(insights.trending_roles.len(), 5);
        assert_eq!(insights.trending_roles[0], "AI/ML Engineer");
        assert_eq!(insights.trending_roles[4], "Full-Stack Developer");

        let roles: Vec<_> = insights.salary_insights.iter().map(|s| s.role).collect();
        assert_eq!(roles, TRENDING_ROLES.to_vec());
        assert_eq!(insights.salary_insights[3].salary, "₹15-35 LPA");
    }
}
