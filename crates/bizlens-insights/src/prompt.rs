//! The fixed instruction template sent with every insight request.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsightField {
    pub key: &'static str,
    pub kind: FieldKind,
}

/// Fields always requested, in template order.
pub const INSIGHT_FIELDS: &[InsightField] = &[
    InsightField {
        key: "company_name",
        kind: FieldKind::Text,
    },
    InsightField {
        key: "main_products",
        kind: FieldKind::List,
    },
    InsightField {
        key: "ideal_customers",
        kind: FieldKind::List,
    },
    InsightField {
        key: "ideal_audience",
        kind: FieldKind::List,
    },
    InsightField {
        key: "industry",
        kind: FieldKind::Text,
    },
    InsightField {
        key: "countries_of_operation",
        kind: FieldKind::List,
    },
];

/// Requested only when summaries are enabled.
pub const SUMMARY_FIELD: InsightField = InsightField {
    key: "company_summary",
    kind: FieldKind::Text,
};

/// Builds the user message for one site.
///
/// The reply must be JSON only, shaped like the listed fields. `url` is the
/// resolved URL when fetching succeeded, else the raw identifier.
#[must_use]
pub fn build_prompt(url: &str, text: &str, include_summary: bool) -> String {
    let mut fields: Vec<InsightField> = INSIGHT_FIELDS.to_vec();
    if include_summary {
        fields.push(SUMMARY_FIELD);
    }

    let shape = fields
        .iter()
        .map(|f| {
            let empty = match f.kind {
                FieldKind::Text => "\"\"",
                FieldKind::List => "[]",
            };
            format!("\"{}\": {empty}", f.key)
        })
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        "Extract B2B-focused insights only.\n\
         Avoid B2C except HNWI / UHNWI.\n\
         Return ONLY VALID JSON.\n\
         \n\
         JSON format:\n\
         {{\n{shape}\n}}\n\
         \n\
         Website: {url}\n\
         Content: {text}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_lists_every_field_in_order() {
        let prompt = build_prompt("https://acme.com", "We sell anvils.", false);
        let mut last = 0;
        for field in INSIGHT_FIELDS {
            let pos = prompt
                .find(&format!("\"{}\"", field.key))
                .unwrap_or_else(|| panic!("missing {}", field.key));
            assert!(pos > last, "{} out of order", field.key);
            last = pos;
        }
        assert!(prompt.contains("\"main_products\": []"));
        assert!(prompt.contains("\"industry\": \"\""));
    }

    #[test]
    fn prompt_embeds_site_and_content() {
        let prompt = build_prompt("https://acme.com", "We sell anvils.", false);
        assert!(prompt.contains("Website: https://acme.com"));
        assert!(prompt.contains("Content: We sell anvils."));
        assert!(prompt.contains("Return ONLY VALID JSON."));
    }

    #[test]
    fn summary_field_is_opt_in() {
        assert!(!build_prompt("a", "b", false).contains("company_summary"));
        assert!(build_prompt("a", "b", true).contains("\"company_summary\": \"\""));
    }
}
