use serde_json::{json, Value};

use crate::registry::WIDGET_TAG;
use crate::widget::{DEFAULT_LIMIT, DEFAULT_ORGANIZATION, DEFAULT_REPO, DEFAULT_TITLE};

/// Integration descriptor for design-authoring tools.
///
/// Advertises the widget's configurable properties so an external authoring
/// tool can offer them in its UI. Pure passthrough metadata; nothing in the
/// widget reads it back.
pub fn authoring_descriptor() -> Value {
    json!({
        "tag": WIDGET_TAG,
        "title": DEFAULT_TITLE,
        "settings": {
            "configure": [
                {
                    "property": "title",
                    "title": "Title",
                    "inputMethod": "textfield",
                    "default": DEFAULT_TITLE,
                },
                {
                    "property": "organization",
                    "title": "Organization",
                    "inputMethod": "textfield",
                    "default": DEFAULT_ORGANIZATION,
                },
                {
                    "property": "repo",
                    "title": "Repository",
                    "inputMethod": "textfield",
                    "default": DEFAULT_REPO,
                },
                {
                    "property": "limit",
                    "title": "Contributor limit",
                    "inputMethod": "number",
                    "default": DEFAULT_LIMIT,
                },
            ],
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_lists_every_configurable_property() {
        let descriptor = authoring_descriptor();
        assert_eq!(descriptor["tag"], WIDGET_TAG);

        let configure = descriptor["settings"]["configure"].as_array().unwrap();
        let names: Vec<&str> = configure
            .iter()
            .map(|p| p["property"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["title", "organization", "repo", "limit"]);
    }

    #[test]
    fn defaults_match_the_widget() {
        let descriptor = authoring_descriptor();
        let configure = descriptor["settings"]["configure"].as_array().unwrap();
        assert_eq!(configure[1]["default"], DEFAULT_ORGANIZATION);
        assert_eq!(configure[2]["default"], DEFAULT_REPO);
        assert_eq!(configure[3]["default"], DEFAULT_LIMIT);
    }
}
