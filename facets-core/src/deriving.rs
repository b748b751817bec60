use crate::grouping::GroupClassifier;
use crate::labels::{capitalize_first_letter, format_profit_label, format_tag_name};
use crate::models::{FilterCategory, FilterOption, FilterSection, FiltersPerGroup, Item};
use std::collections::{BTreeMap, BTreeSet};

/// Marker recorded in the Extra facet for items carrying a specification
pub const SPECIFICATION: &str = "specification";

/// Values collected per category in a single pass over the items.
/// Sets keep them deduplicated and ordered by raw value.
#[derive(Debug, Default)]
struct FacetAccumulator {
    values: BTreeMap<FilterCategory, BTreeSet<String>>,
}

impl FacetAccumulator {
    fn record(&mut self, category: FilterCategory, value: &str) {
        if value.is_empty() {
            return;
        }
        self.values
            .entry(category)
            .or_default()
            .insert(value.to_string());
    }

    fn record_all<'v>(
        &mut self,
        category: FilterCategory,
        values: impl IntoIterator<Item = &'v str>,
    ) {
        for value in values {
            self.record(category, value);
        }
    }

    fn take(&mut self, category: FilterCategory) -> Option<BTreeSet<String>> {
        self.values.remove(&category).filter(|values| !values.is_empty())
    }
}

/// Builds the filter sections available for a group of items
pub struct FacetDeriver<'a, C: GroupClassifier + ?Sized> {
    classifier: &'a C,
}

impl<'a, C: GroupClassifier + ?Sized> FacetDeriver<'a, C> {
    pub fn new(classifier: &'a C) -> Self {
        Self { classifier }
    }

    /// Derive the ordered filter sections for the items of `group`
    pub fn derive_filter_sections<'i, I>(&self, items: I, group: &str) -> Vec<FilterSection>
    where
        I: IntoIterator<Item = &'i Item>,
    {
        let mut acc = items
            .into_iter()
            .fold(FacetAccumulator::default(), |mut acc, item| {
                self.collect_item(&mut acc, item, group);
                acc
            });

        let mut sections = Vec::new();

        for category in [
            FilterCategory::Maturity,
            FilterCategory::Tag,
            FilterCategory::Tags,
            FilterCategory::Organization,
        ] {
            if let Some(values) = acc.take(category) {
                sections.push(build_section(category, values));
            }
        }

        // A single category is not worth filtering on
        if let Some(values) = acc.take(FilterCategory::Category).filter(|v| v.len() > 1) {
            sections.push(build_section(FilterCategory::Category, values));
        }

        for category in [FilterCategory::License, FilterCategory::Country] {
            if let Some(values) = acc.take(category) {
                sections.push(build_section(category, values));
            }
        }

        // Organization type and Extra are only offered alongside Industry
        if let Some(values) = acc.take(FilterCategory::Industry) {
            sections.push(build_section(FilterCategory::Industry, values));

            for category in [FilterCategory::OrgType, FilterCategory::Extra] {
                if let Some(values) = acc.take(category) {
                    sections.push(build_section(category, values));
                }
            }
        }

        log::debug!(
            "derived {} filter sections for group '{}'",
            sections.len(),
            group
        );

        sections
    }

    /// Derive sections for every group of an already partitioned item collection
    pub fn derive_filters_per_group(
        &self,
        grouped: &BTreeMap<String, Vec<&Item>>,
    ) -> FiltersPerGroup {
        grouped
            .iter()
            .map(|(group, items)| {
                let sections = self.derive_filter_sections(items.iter().copied(), group);
                (group.clone(), sections)
            })
            .collect()
    }

    fn collect_item(&self, acc: &mut FacetAccumulator, item: &Item, group: &str) {
        if let Some(maturity) = &item.maturity {
            acc.record(FilterCategory::Maturity, maturity);
        }

        if let Some(tag) = &item.tag {
            acc.record(FilterCategory::Tag, tag);
        }

        if let Some(tags) = item.summary.as_ref().and_then(|s| s.tags.as_ref()) {
            acc.record_all(FilterCategory::Tags, tags.iter().map(String::as_str));
        }

        if item.specification == Some(true) {
            acc.record(FilterCategory::Extra, SPECIFICATION);
        }

        acc.record_all(FilterCategory::Country, item.location_countries());

        acc.record_all(
            FilterCategory::Category,
            item.all_categories()
                .filter(|category| self.classifier.belongs_to_group(category, group)),
        );

        if let Some(org) = &item.organization_data {
            if let Some(name) = &org.name {
                acc.record(FilterCategory::Organization, name);
            }
            if let Some(country) = &org.country {
                acc.record(FilterCategory::Country, country);
            }
            if let Some(categories) = &org.categories {
                acc.record_all(FilterCategory::Industry, categories.iter().map(String::as_str));
            }
            if let Some(company_type) = &org.company_type {
                acc.record(FilterCategory::OrgType, company_type);
            }
        }

        acc.record_all(FilterCategory::License, item.licenses());
    }
}

fn build_section(category: FilterCategory, values: BTreeSet<String>) -> FilterSection {
    let options = values
        .into_iter()
        .map(|value| {
            let name = display_name(category, &value);
            FilterOption { value, name }
        })
        .collect();

    FilterSection {
        category,
        title: category.title().to_string(),
        options,
    }
}

fn display_name(category: FilterCategory, value: &str) -> String {
    match category {
        FilterCategory::Maturity | FilterCategory::Extra => capitalize_first_letter(value),
        FilterCategory::Tag => format_tag_name(value),
        FilterCategory::OrgType => format_profit_label(value),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn items(value: serde_json::Value) -> Vec<Item> {
        serde_json::from_value(value).unwrap()
    }

    fn everything(_category: &str, _group: &str) -> bool {
        true
    }

    fn derive(items: &[Item]) -> Vec<FilterSection> {
        FacetDeriver::new(&everything).derive_filter_sections(items, "default")
    }

    fn categories(sections: &[FilterSection]) -> Vec<FilterCategory> {
        sections.iter().map(|s| s.category).collect()
    }

    #[test]
    fn test_tag_values_deduplicated_and_sorted() {
        let data = items(json!([
            {"name": "a", "tag": "storage"},
            {"name": "b", "tag": "network"},
            {"name": "c", "tag": "network"}
        ]));

        let sections = derive(&data);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].category, FilterCategory::Tag);
        assert_eq!(sections[0].title, "TAG");
        assert_eq!(sections[0].option_values(), vec!["network", "storage"]);
    }

    #[test]
    fn test_options_sorted_by_raw_value() {
        let data = items(json!([
            {"name": "a", "tag": "networking"},
            {"name": "b", "tag": "app-definition"}
        ]));

        let sections = derive(&data);
        let options = &sections[0].options;
        assert_eq!(options[0].value, "app-definition");
        assert_eq!(options[0].name, "App Definition");
        assert_eq!(options[1].value, "networking");
        assert_eq!(options[1].name, "Networking");
    }

    #[test]
    fn test_category_section_needs_two_values() {
        let mut data = items(json!([
            {"name": "a", "category": "Runtime"},
            {"name": "b", "category": "Runtime"}
        ]));
        assert!(derive(&data).is_empty());

        data.push(Item {
            name: "c".to_string(),
            category: Some("Provisioning".to_string()),
            ..Default::default()
        });
        let sections = derive(&data);
        assert_eq!(categories(&sections), vec![FilterCategory::Category]);
        assert_eq!(sections[0].option_values(), vec!["Provisioning", "Runtime"]);
    }

    #[test]
    fn test_category_respects_group_membership() {
        let data = items(json!([
            {"name": "a", "category": "Runtime",
             "additional_categories": [{"category": "Security"}, {"category": "Members"}]},
            {"name": "b", "category": "Members"}
        ]));
        let only_projects =
            |category: &str, group: &str| group == "projects" && category != "Members";

        let sections = FacetDeriver::new(&only_projects).derive_filter_sections(&data, "projects");
        assert_eq!(sections[0].option_values(), vec!["Runtime", "Security"]);

        let sections = FacetDeriver::new(&only_projects).derive_filter_sections(&data, "members");
        assert!(sections.is_empty());
    }

    #[test]
    fn test_industry_gates_org_type_and_extra() {
        let mut data = items(json!([
            {"name": "a", "specification": true,
             "crunchbase_data": {"company_type": "for_profit"}}
        ]));
        assert!(derive(&data).is_empty());

        data.push(Item {
            name: "b".to_string(),
            organization_data: Some(crate::models::OrganizationData {
                categories: Some(vec!["Software".to_string()]),
                ..Default::default()
            }),
            ..Default::default()
        });

        let sections = derive(&data);
        assert_eq!(
            categories(&sections),
            vec![
                FilterCategory::Industry,
                FilterCategory::OrgType,
                FilterCategory::Extra
            ]
        );
        assert_eq!(sections[1].options[0].name, "For profit");
        assert_eq!(sections[2].options[0].value, SPECIFICATION);
        assert_eq!(sections[2].options[0].name, "Specification");
    }

    #[test]
    fn test_industry_without_dependents() {
        let data = items(json!([
            {"name": "a", "crunchbase_data": {"categories": ["Cloud"]}}
        ]));

        assert_eq!(categories(&derive(&data)), vec![FilterCategory::Industry]);
    }

    #[test]
    fn test_full_section_order() {
        let data = items(json!([
            {
                "name": "a",
                "category": "Runtime",
                "maturity": "graduated",
                "tag": "runtime",
                "summary": {"tags": ["containers", ""]},
                "specification": true,
                "locations": [{"country": "DE"}],
                "repositories": [{"github_data": {"license": "Apache-2.0"}}, {}],
                "crunchbase_data": {
                    "name": "Acme",
                    "country": "US",
                    "categories": ["Software"],
                    "company_type": "non_profit"
                }
            },
            {"name": "b", "category": "Provisioning"}
        ]));

        let sections = derive(&data);
        assert_eq!(
            categories(&sections),
            vec![
                FilterCategory::Maturity,
                FilterCategory::Tag,
                FilterCategory::Tags,
                FilterCategory::Organization,
                FilterCategory::Category,
                FilterCategory::License,
                FilterCategory::Country,
                FilterCategory::Industry,
                FilterCategory::OrgType,
                FilterCategory::Extra,
            ]
        );
        assert_eq!(sections[0].options[0].name, "Graduated");
        assert_eq!(sections[2].option_values(), vec!["containers"]);
        assert_eq!(sections[6].option_values(), vec!["DE", "US"]);
    }

    #[test]
    fn test_empty_tokens_skipped() {
        let data = items(json!([
            {"name": "a", "maturity": "", "tag": "", "summary": {"tags": [""]},
             "locations": [{"country": ""}], "crunchbase_data": {"name": ""}}
        ]));

        assert!(derive(&data).is_empty());
    }

    #[test]
    fn test_derive_filters_per_group() {
        let data = items(json!([
            {"name": "a", "category": "Runtime", "maturity": "sandbox"},
            {"name": "b", "category": "Members", "crunchbase_data": {"name": "Acme"}}
        ]));
        let mut grouped: BTreeMap<String, Vec<&Item>> = BTreeMap::new();
        grouped.insert("projects".to_string(), vec![&data[0]]);
        grouped.insert("members".to_string(), vec![&data[1]]);

        let per_group = FacetDeriver::new(&everything).derive_filters_per_group(&grouped);
        assert_eq!(categories(&per_group["projects"]), vec![FilterCategory::Maturity]);
        assert_eq!(categories(&per_group["members"]), vec![FilterCategory::Organization]);
    }
}
