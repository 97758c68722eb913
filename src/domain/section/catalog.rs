//! Built-in section types for the society website.

use crate::domain::section::errors::{SchemaError, SchemaResult};
use crate::domain::section::registry::SectionRegistry;
use crate::domain::section::types::{
    FieldPattern, FieldSchema, FieldSpec, Layout, SectionTypeDefinition,
};

const LINK_PATTERN: &str = r"^(https?://|/)\S*$";
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
const PHONE_PATTERN: &str = r"^\+?[0-9 ()-]{6,30}$";

const ALIGNMENTS: &[&str] = &["left", "center", "right"];

impl SectionRegistry {
    /// Builds the registry with every built-in section type.
    ///
    /// Fails only if the table itself is malformed (bad pattern, empty enum, ...).
    pub fn builtin() -> SchemaResult<Self> {
        let mut reg = SectionRegistry::new();
        for definition in builtin_definitions()? {
            reg.register(definition)?;
        }
        Ok(reg)
    }
}

fn pattern(field: &str, source: &str) -> SchemaResult<FieldPattern> {
    FieldPattern::new(source).map_err(|source| SchemaError::InvalidPattern {
        field: field.to_string(),
        source,
    })
}

fn patterned_string(
    field: &str,
    required: bool,
    max_length: usize,
    source: &str,
) -> SchemaResult<FieldSpec> {
    Ok(FieldSpec::String {
        required,
        max_length: Some(max_length),
        pattern: Some(pattern(field, source)?),
    })
}

fn pages(list: &[&str]) -> Vec<String> {
    list.iter().map(|p| p.to_string()).collect()
}

fn define(
    key: &str,
    name: &str,
    layout: Layout,
    max_per_page: u32,
    allowed_pages: &[&str],
    fields: FieldSchema,
) -> SectionTypeDefinition {
    SectionTypeDefinition {
        key: key.to_string(),
        name: name.to_string(),
        fields,
        layout,
        max_per_page,
        allowed_pages: pages(allowed_pages),
    }
}

fn builtin_definitions() -> SchemaResult<Vec<SectionTypeDefinition>> {
    let image_item = FieldSchema::new()
        .field("url", FieldSpec::string(true, 500))
        .field("alt", FieldSpec::bilingual(false, 200));

    let hero = define(
        "hero",
        "Hero Banner",
        Layout::FullWidth,
        1,
        &["home", "about", "services", "events", "books"],
        FieldSchema::new()
            .field("title", FieldSpec::bilingual(true, 100))
            .field("subtitle", FieldSpec::bilingual(false, 200))
            .field("description", FieldSpec::bilingual(false, 500))
            .field("images", FieldSpec::array(false, 5, Some(image_item)))
            .field("ctaText", FieldSpec::bilingual(false, 50))
            .field("ctaLink", patterned_string("ctaLink", false, 500, LINK_PATTERN)?)
            .field("alignment", FieldSpec::enumeration(false, ALIGNMENTS))
            .field("overlay", FieldSpec::boolean(false)),
    );

    let features = define(
        "features",
        "Feature Highlights",
        Layout::Grid,
        2,
        &["home", "about", "services"],
        FieldSchema::new()
            .field("title", FieldSpec::bilingual(true, 100))
            .field("subtitle", FieldSpec::bilingual(false, 200))
            .field(
                "items",
                FieldSpec::array(
                    true,
                    12,
                    Some(
                        FieldSchema::new()
                            .field("title", FieldSpec::bilingual(true, 80))
                            .field("description", FieldSpec::bilingual(false, 300))
                            .field("icon", FieldSpec::string(false, 50)),
                    ),
                ),
            )
            .field("columns", FieldSpec::number(false, Some(1.0), Some(4.0))),
    );

    let gallery = define(
        "gallery",
        "Image Gallery",
        Layout::Grid,
        3,
        &["home", "about", "events", "gallery"],
        FieldSchema::new()
            .field("title", FieldSpec::bilingual(false, 100))
            .field(
                "images",
                FieldSpec::array(
                    true,
                    24,
                    Some(
                        FieldSchema::new()
                            .field("url", FieldSpec::string(true, 500))
                            .field("alt", FieldSpec::bilingual(true, 200))
                            .field("caption", FieldSpec::bilingual(false, 300)),
                    ),
                ),
            )
            .field("columns", FieldSpec::number(false, Some(2.0), Some(6.0)))
            .field("lightbox", FieldSpec::boolean(false)),
    );

    let testimonials = define(
        "testimonials",
        "Testimonials",
        Layout::Container,
        1,
        &["home", "about", "services"],
        FieldSchema::new()
            .field("title", FieldSpec::bilingual(false, 100))
            .field(
                "items",
                FieldSpec::array(
                    true,
                    10,
                    Some(
                        FieldSchema::new()
                            .field("quote", FieldSpec::bilingual(true, 1000))
                            .field("author", FieldSpec::string(true, 100))
                            .field("role", FieldSpec::bilingual(false, 100))
                            .field("rating", FieldSpec::number(false, Some(1.0), Some(5.0))),
                    ),
                ),
            )
            .field("autoplay", FieldSpec::boolean(false)),
    );

    let text_block = define(
        "text-block",
        "Text Block",
        Layout::Container,
        10,
        &[
            "home",
            "about",
            "services",
            "contact",
            "events",
            "books",
            "team",
            "recruitment",
            "announcements",
        ],
        FieldSchema::new()
            .field("title", FieldSpec::bilingual(false, 150))
            .field("content", FieldSpec::bilingual(true, 20000))
            .field("alignment", FieldSpec::enumeration(false, ALIGNMENTS)),
    );

    let cta = define(
        "cta",
        "Call to Action",
        Layout::FullWidth,
        2,
        &["home", "about", "services", "events", "books", "recruitment"],
        FieldSchema::new()
            .field("title", FieldSpec::bilingual(true, 100))
            .field("description", FieldSpec::bilingual(false, 300))
            .field("buttonText", FieldSpec::bilingual(true, 50))
            .field("buttonLink", patterned_string("buttonLink", true, 500, LINK_PATTERN)?)
            .field(
                "style",
                FieldSpec::enumeration(false, &["primary", "secondary", "outline"]),
            ),
    );

    let stats = define(
        "stats",
        "Statistics",
        Layout::Grid,
        1,
        &["home", "about"],
        FieldSchema::new()
            .field("title", FieldSpec::bilingual(false, 100))
            .field(
                "items",
                FieldSpec::array(
                    true,
                    8,
                    Some(
                        FieldSchema::new()
                            .field("label", FieldSpec::bilingual(true, 60))
                            .field("value", FieldSpec::number(true, Some(0.0), None))
                            .field("suffix", FieldSpec::string(false, 10)),
                    ),
                ),
            ),
    );

    let faq = define(
        "faq",
        "Frequently Asked Questions",
        Layout::Container,
        1,
        &["about", "services", "contact", "recruitment", "books"],
        FieldSchema::new()
            .field("title", FieldSpec::bilingual(false, 100))
            .field(
                "items",
                FieldSpec::array(
                    true,
                    30,
                    Some(
                        FieldSchema::new()
                            .field("question", FieldSpec::bilingual(true, 300))
                            .field("answer", FieldSpec::bilingual(true, 2000)),
                    ),
                ),
            ),
    );

    let contact_info = define(
        "contact-info",
        "Contact Information",
        Layout::Container,
        1,
        &["contact"],
        FieldSchema::new()
            .field("title", FieldSpec::bilingual(false, 100))
            .field("email", patterned_string("email", true, 254, EMAIL_PATTERN)?)
            .field("phone", patterned_string("phone", false, 30, PHONE_PATTERN)?)
            .field("address", FieldSpec::bilingual(false, 500))
            .field("mapUrl", patterned_string("mapUrl", false, 1000, LINK_PATTERN)?),
    );

    let team = define(
        "team",
        "Team Members",
        Layout::Grid,
        2,
        &["about", "team"],
        FieldSchema::new()
            .field("title", FieldSpec::bilingual(false, 100))
            .field(
                "members",
                FieldSpec::array(
                    true,
                    50,
                    Some(
                        FieldSchema::new()
                            .field("name", FieldSpec::bilingual(true, 100))
                            .field("role", FieldSpec::bilingual(false, 100))
                            .field("photo", FieldSpec::string(false, 500))
                            .field("bio", FieldSpec::bilingual(false, 1000)),
                    ),
                ),
            ),
    );

    Ok(vec![
        hero,
        features,
        gallery,
        testimonials,
        text_block,
        cta,
        stats,
        faq,
        contact_info,
        team,
    ])
}
