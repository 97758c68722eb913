//! Generic content checks and the validation modes that compose them.

use serde_json::{json, Map, Value};
use tls_content_validator::storage::NewContentRecord;
use tls_content_validator::{
    perform_content_quality_validation, perform_duplicate_validation, perform_image_validation,
    perform_quick_validation, perform_schema_validation, perform_seo_validation, ContentStore,
    InMemoryContentStore, SectionRegistry, ValidationService, ValidationType,
};

fn obj(v: Value) -> Map<String, Value> {
    v.as_object().cloned().expect("test payload must be an object")
}

fn stored(page: &str, key: &str) -> NewContentRecord {
    NewContentRecord {
        page: page.to_string(),
        section: "text-block".to_string(),
        section_key: key.to_string(),
        section_type: Some("text-block".to_string()),
        content: json!({}),
        is_active: true,
    }
}

#[test]
fn quick_requires_identifying_fields() {
    let report = perform_quick_validation(&obj(json!({ "section": 3, "sectionKey": "" })));
    assert_eq!(
        report.errors,
        vec![
            "page is required",
            "section must be a string",
            "sectionKey is required",
        ]
    );

    let report = perform_quick_validation(&obj(json!({
        "page": "home",
        "section": "hero",
        "sectionKey": "Home Hero",
        "order": -1,
        "isActive": "yes"
    })));
    assert_eq!(
        report.errors,
        vec![
            "sectionKey must contain only lowercase letters, numbers, hyphens and underscores",
            "order must be a non-negative integer",
            "isActive must be a boolean",
        ]
    );

    let report = perform_quick_validation(&obj(json!({
        "page": "home",
        "section": "hero",
        "sectionKey": "home-hero_2",
        "order": 0,
        "isActive": true
    })));
    assert!(report.is_valid(), "{:?}", report.errors);
}

#[test]
fn schema_warns_when_both_languages_are_empty() {
    // Unknown language keys are ignored.
    let report = perform_schema_validation(&obj(json!({ "title": { "en": "", "ar": "" } })));

    assert!(report.errors.is_empty(), "{:?}", report.errors);
    assert_eq!(report.warnings, vec!["title is missing content in both languages"]);
}

#[test]
fn schema_checks_lengths_and_translations() {
    let long_title = "x".repeat(201);
    let report = perform_schema_validation(&obj(json!({
        "title": long_title,
        "subtitle": { "en": "Annual gathering" },
        "buttonText": { "en": "Go", "ta": "ச".repeat(51) },
        "description": 12
    })));

    assert_eq!(
        report.errors,
        vec![
            "title exceeds maximum length of 200 characters",
            "description must be text or a bilingual object",
            "buttonText (Tamil) exceeds maximum length of 50 characters",
        ]
    );
    assert_eq!(report.warnings, vec!["subtitle is missing the Tamil translation"]);
}

#[test]
fn quality_flags_placeholder_title() {
    let report = perform_content_quality_validation(&obj(json!({ "title": "Lorem ipsum dolor" })));

    assert!(report.errors.is_empty());
    assert!(report
        .warnings
        .contains(&"Title appears to contain placeholder text".to_string()));
}

#[test]
fn quality_length_heuristics() {
    let report = perform_content_quality_validation(&obj(json!({
        "title": { "en": "Hi", "ta": "வணக்கம் நண்பர்களே" },
        "content": "Short body. Coming soon."
    })));
    assert_eq!(
        report.warnings,
        vec![
            "Title is very short",
            "Content is very short",
            "Content appears to contain placeholder text",
        ]
    );

    let report = perform_content_quality_validation(&obj(json!({
        "title": "t".repeat(101),
        "content": "c".repeat(5001)
    })));
    assert_eq!(report.warnings, vec!["Title is quite long", "Content is very long"]);
    assert_eq!(
        report.suggestions,
        vec![
            "Consider shortening the title",
            "Consider splitting the content into multiple sections",
        ]
    );
}

#[test]
fn image_descriptor_checks() {
    let images = vec![
        json!({ "id": "img-1", "mimeType": "image/png", "size": 2048, "alt": "Logo" }),
        json!({ "mimeType": "application/pdf", "size": 6 * 1024 * 1024 }),
        json!({ "url": "/big.jpg", "size": 2 * 1024 * 1024, "alt": { "en": "", "ta": "படம்" } }),
        json!("not-an-object"),
    ];
    let report = perform_image_validation(&images);

    assert_eq!(
        report.errors,
        vec![
            "Image 2 is missing an identifier",
            "Image 2 has an unsupported type (allowed: image/jpeg, image/png, image/gif, image/webp, image/svg+xml)",
            "Image 2 exceeds the maximum size of 5 MB",
            "Image 4 must be an object",
        ]
    );
    assert_eq!(
        report.warnings,
        vec![
            "Image 2 is missing alt text",
            "Image 3 is larger than 1 MB; consider optimizing it",
        ]
    );
}

#[test]
fn seo_heuristics() {
    let report = perform_seo_validation(&obj(json!({
        "title": "A".repeat(61),
        "images": [{ "url": "a.jpg" }]
    })));
    assert_eq!(
        report.warnings,
        vec!["Title exceeds 60 characters and may be truncated in search results"]
    );
    assert_eq!(
        report.suggestions,
        vec![
            "Add a meta description to improve search visibility",
            "Add alt text to all images for accessibility and search ranking",
        ]
    );

    let report = perform_seo_validation(&obj(json!({ "metaDescription": "Too short" })));
    assert_eq!(
        report.warnings,
        vec!["Meta description is shorter than the recommended 120 characters"]
    );

    let report = perform_seo_validation(&obj(json!({ "metaDescription": "m".repeat(140) })));
    assert!(report.warnings.is_empty());
    assert!(report.suggestions.is_empty());
}

#[tokio::test]
async fn duplicate_keys_and_self_exclusion() -> Result<(), Box<dyn std::error::Error>> {
    let store = InMemoryContentStore::new();
    let existing = store.insert(stored("about", "our-history")).await?;
    store.insert(stored("about", "history")).await?;
    store.insert(stored("home", "our-history")).await?;

    let data = obj(json!({ "page": "about", "sectionKey": "our-history" }));

    let report = perform_duplicate_validation(&store, &data, None).await?;
    assert_eq!(
        report.errors,
        vec!["Section key 'our-history' already exists on page 'about'"]
    );
    assert_eq!(
        report.warnings,
        vec!["Similar section keys exist on page 'about': history"]
    );

    let report = perform_duplicate_validation(&store, &data, Some(existing.id.as_str())).await?;
    assert!(report.errors.is_empty(), "{:?}", report.errors);

    // A second live record with the same key still clashes while the first is edited.
    store.insert(stored("about", "our-history")).await?;
    let report = perform_duplicate_validation(&store, &data, Some(existing.id.as_str())).await?;
    assert_eq!(
        report.errors,
        vec!["Section key 'our-history' already exists on page 'about'"]
    );

    let fresh = obj(json!({ "page": "contact", "sectionKey": "our-history" }));
    let report = perform_duplicate_validation(&store, &fresh, None).await?;
    assert!(report.errors.is_empty());
    assert!(report.warnings.is_empty());
    Ok(())
}

#[tokio::test]
async fn full_mode_stops_after_failed_quick_pass() -> Result<(), Box<dyn std::error::Error>> {
    let registry = SectionRegistry::builtin()?;
    let store = InMemoryContentStore::new();
    let service = ValidationService::new(&registry, &store);

    // The placeholder title would warn in the quality stage, which never runs.
    let data = obj(json!({ "page": "home", "title": "TODO" }));
    let report = service.validate(&data, ValidationType::Full, None).await?;

    assert_eq!(
        report.errors,
        vec!["section is required", "sectionKey is required"]
    );
    assert!(report.warnings.is_empty());
    assert!(report.suggestions.is_empty());
    Ok(())
}

#[tokio::test]
async fn full_mode_rejects_non_array_images() -> Result<(), Box<dyn std::error::Error>> {
    let registry = SectionRegistry::builtin()?;
    let store = InMemoryContentStore::new();
    let service = ValidationService::new(&registry, &store);

    let data = obj(json!({
        "page": "home",
        "section": "text-block",
        "sectionKey": "welcome",
        "images": { "url": "/banner.jpg" }
    }));
    let report = service.validate(&data, ValidationType::Full, None).await?;

    assert_eq!(report.errors, vec!["images must be an array"]);
    Ok(())
}

#[tokio::test]
async fn full_mode_runs_every_stage() -> Result<(), Box<dyn std::error::Error>> {
    let registry = SectionRegistry::builtin()?;
    let store = InMemoryContentStore::new();
    store.insert(stored("events", "pongal-2025")).await?;
    let service = ValidationService::new(&registry, &store);

    let data = obj(json!({
        "page": "events",
        "section": "text-block",
        "sectionKey": "pongal-2025",
        "title": { "en": "Pongal celebration" },
        "content": "Join us for music, food and kolam competitions at the community hall this January.",
        "images": [{ "url": "/pongal.jpg" }]
    }));
    let report = service.validate(&data, ValidationType::Full, None).await?;

    assert_eq!(
        report.errors,
        vec!["Section key 'pongal-2025' already exists on page 'events'"]
    );
    assert_eq!(
        report.warnings,
        vec![
            "title is missing the Tamil translation",
            "Image 1 is missing alt text",
        ]
    );
    assert_eq!(
        report.suggestions,
        vec![
            "Add a meta description to improve search visibility",
            "Add alt text to all images for accessibility and search ranking",
        ]
    );
    assert!(!report.is_valid());
    Ok(())
}

#[tokio::test]
async fn single_stage_modes() -> Result<(), Box<dyn std::error::Error>> {
    let registry = SectionRegistry::builtin()?;
    let store = InMemoryContentStore::new();
    let service = ValidationService::new(&registry, &store);

    // Quick-pass failures do not stop the schema stage when it runs alone.
    let data = obj(json!({ "title": { "en": "Hello" } }));
    let report = service.validate(&data, ValidationType::Schema, None).await?;
    assert!(report.errors.is_empty());
    assert_eq!(report.warnings, vec!["title is missing the Tamil translation"]);

    let report = service.validate(&Map::new(), ValidationType::Images, None).await?;
    assert!(report.is_valid());
    assert!(report.warnings.is_empty());

    let banner = obj(json!({ "images": "banner.bmp" }));
    let report = service.validate(&banner, ValidationType::Images, None).await?;
    assert_eq!(report.errors, vec!["images must be an array"]);

    let report = service.validate(&Map::new(), ValidationType::Duplicate, None).await?;
    assert!(report.is_valid());
    Ok(())
}
