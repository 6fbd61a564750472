use crate::store::models::Service;

pub const ALL_CATEGORIES: &str = "all";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn from_value(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }

    fn matches(&self, service: &Service) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => service.category == *category,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceFilter {
    pub query: String,
    pub category: CategoryFilter,
}

impl ServiceFilter {
    pub fn matches(&self, service: &Service) -> bool {
        let query = self.query.to_lowercase();
        let matches_search = service.title.to_lowercase().contains(&query)
            || service.description.to_lowercase().contains(&query);
        matches_search && self.category.matches(service)
    }

    pub fn apply<'a>(&self, services: &'a [Service]) -> Vec<&'a Service> {
        services.iter().filter(|s| self.matches(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::catalog::Catalog;

    fn services() -> Vec<Service> {
        Catalog::seed().unwrap().services
    }

    fn filter(query: &str, category: &str) -> ServiceFilter {
        ServiceFilter {
            query: query.to_string(),
            category: CategoryFilter::from_value(category),
        }
    }

    #[test]
    fn empty_query_with_all_returns_everything() {
        let services = services();
        assert_eq!(filter("", "all").apply(&services).len(), services.len());
    }

    #[test]
    fn all_category_matches_title_or_description_case_insensitively() {
        let services = services();
        for query in ["TESTING", "marketing", "Domina", "zzz", "ux/ui"] {
            let lowered = query.to_lowercase();
            let expected: Vec<&str> = services
                .iter()
                .filter(|s| {
                    s.title.to_lowercase().contains(&lowered)
                        || s.description.to_lowercase().contains(&lowered)
                })
                .map(|s| s.id.as_str())
                .collect();
            let got: Vec<&str> = filter(query, "all")
                .apply(&services)
                .iter()
                .map(|s| s.id.as_str())
                .collect();
            assert_eq!(got, expected, "query {query}");
        }
    }

    #[test]
    fn specific_category_is_an_exact_subset() {
        let services = services();
        for category in ["Marketing", "Diseño", "marketing", "Nada"] {
            let result = filter("", category).apply(&services);
            assert!(result.iter().all(|s| s.category == category));
        }
        assert_eq!(filter("", "Marketing").apply(&services).len(), 1);
        assert!(filter("", "marketing").apply(&services).is_empty());
    }

    #[test]
    fn query_and_category_combine() {
        let services = services();
        assert_eq!(filter("domina", "Finanzas").apply(&services).len(), 1);
        assert!(filter("diseño", "Finanzas").apply(&services).is_empty());
    }

    #[test]
    fn category_value_round_trips_through_select() {
        assert_eq!(CategoryFilter::from_value("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_value("Consulta").value(), "Consulta");
    }
}
