//! Built-in fallback dataset.
//!
//! # Responsibility
//! - Provide the chart shown on first start and after a reset.
//! - Serve as the fallback when the persisted snapshot is absent or garbage.

use crate::model::entity::Entity;

const CEO_ID: &str = "4f8a1b9a-2e4d-4e2c-8b8a-9f0e1d2c3b4a";
const TECH_DIRECTOR_ID: &str = "b1d2c3e4-5f6a-4b7c-8d9e-0f1a2b3c4d5e";
const MARKETING_DIRECTOR_ID: &str = "c5e6f7a8-9b0c-4d1e-8f2a-3b4c5d6e7f8a";
const DEV_LEAD_ID: &str = "d9e0f1a2-b3c4-4d5e-8f6a-7b8c9d0e1f2a";
const SENIOR_DEV_ID: &str = "e3f4a5b6-c7d8-4e9f-8a0b-1c2d3e4f5a6b";
const DIGITAL_MARKETING_ID: &str = "f7a8b9c0-d1e2-4f3a-8b4c-5d6e7f8a9b0c";
const SOFTWARE_UNIT_ID: &str = "a1b2c3d4-e5f6-a7b8-c9d0-e1f2a3b4c5d6";
const MARKETING_UNIT_ID: &str = "g8h9i0j1-k2l3-m4n5-o6p7-q8r9s0t1u2v3";
const SOCIAL_MEDIA_ID: &str = "a4b5c6d7-e8f9-a0b1-c2d3-e4f5a6b7c8d9";

/// Returns the built-in sample organization.
///
/// Order matters: the first record is the default parent for newly added
/// entities, and tree roots keep this source order.
pub fn sample_org() -> Vec<Entity> {
    vec![
        Entity::person(CEO_ID, "Ayşe Yılmaz", "Genel Müdür", None),
        Entity::department(MARKETING_UNIT_ID, "Pazarlama Birimi", Some(CEO_ID.to_string())),
        Entity::person(
            MARKETING_DIRECTOR_ID,
            "Fatma Kaya",
            "Pazarlama Direktörü",
            Some(MARKETING_UNIT_ID.to_string()),
        ),
        Entity::person(
            DIGITAL_MARKETING_ID,
            "Hasan Çelik",
            "Dijital Pazarlama Uzmanı",
            Some(MARKETING_DIRECTOR_ID.to_string()),
        ),
        Entity::person(
            SOCIAL_MEDIA_ID,
            "Elif Demir",
            "Sosyal Medya Uzmanı",
            Some(MARKETING_DIRECTOR_ID.to_string()),
        ),
        Entity::department(SOFTWARE_UNIT_ID, "Yazılım Birimi", Some(CEO_ID.to_string())),
        Entity::person(
            TECH_DIRECTOR_ID,
            "Mehmet Öztürk",
            "Teknoloji Direktörü",
            Some(SOFTWARE_UNIT_ID.to_string()),
        ),
        Entity::person(
            DEV_LEAD_ID,
            "Ali Vural",
            "Yazılım Geliştirme Lideri",
            Some(SOFTWARE_UNIT_ID.to_string()),
        ),
        Entity::person(
            SENIOR_DEV_ID,
            "Zeynep Şahin",
            "Kıdemli Yazılım Müh.",
            Some(DEV_LEAD_ID.to_string()),
        ),
    ]
}
