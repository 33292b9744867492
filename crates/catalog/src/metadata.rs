//! Display metadata (title + description) per category.

use std::borrow::Cow;

use crate::error::EnrichmentError;

/// Human-readable title and description of a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMetadata {
    pub title: Cow<'static, str>,
    pub description: Cow<'static, str>,
}

impl CategoryMetadata {
    const fn known(title: &'static str, description: &'static str) -> Self {
        Self {
            title: Cow::Borrowed(title),
            description: Cow::Borrowed(description),
        }
    }

    /// Metadata generated for a category that is not in the static table.
    pub fn fallback(category: &str) -> Self {
        Self {
            title: Cow::Owned(capitalize(category)),
            description: Cow::Owned(format!("Description for {category}")),
        }
    }

    /// Look up a category in the compiled-in table (exact, case-sensitive match).
    pub fn lookup(category: &str) -> Option<&'static CategoryMetadata> {
        KNOWN_CATEGORIES
            .iter()
            .find(|(key, _)| *key == category)
            .map(|(_, meta)| meta)
    }
}

/// Source of category metadata used by the aggregator.
pub trait MetadataSource {
    fn resolve(&self, category: &str) -> Result<CategoryMetadata, EnrichmentError>;
}

impl<M: MetadataSource + ?Sized> MetadataSource for &M {
    fn resolve(&self, category: &str) -> Result<CategoryMetadata, EnrichmentError> {
        (**self).resolve(category)
    }
}

/// The compiled-in table, with generated metadata for unknown keys.
#[derive(Debug, Default, Copy, Clone)]
pub struct StaticMetadata;

impl MetadataSource for StaticMetadata {
    fn resolve(&self, category: &str) -> Result<CategoryMetadata, EnrichmentError> {
        Ok(CategoryMetadata::lookup(category)
            .cloned()
            .unwrap_or_else(|| CategoryMetadata::fallback(category)))
    }
}

/// Uppercase the first character and lowercase the rest (`"FAN case"` -> `"Fan case"`).
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

const STORAGE_DESCRIPTION: &str = "The component that stores data and programs, such as the hard drive or solid-state drive.\n\
A storage is like a big box where your computer keeps all its files and programs. It helps your computer remember and find everything it needs.";

static KNOWN_CATEGORIES: [(&str, CategoryMetadata); 10] = [
    (
        "cooler",
        CategoryMetadata::known(
            "All in One Cooler",
            "An integrated cooling system that combines the CPU cooler and the fan into a single unit.\n\
An AIO cooler is like a built-in air conditioner for your computer.  It cools down your CPU and keeps it from overheating.",
        ),
    ),
    (
        "fan",
        CategoryMetadata::known(
            "Fan",
            "A device that moves air to dissipate heat generated by components like the CPU and GPU.\n\
A fan is like a tiny airplane engine that blows air to cool down your computer. It helps keep your computer from overheating and keeps it running smoothly.",
        ),
    ),
    (
        "ram",
        CategoryMetadata::known(
            "RAM",
            "The memory that temporarily stores data for quick access by the CPU.\n\
RAM is like a short-term memory for your computer. It helps your computer quickly find and use the information it needs.",
        ),
    ),
    (
        "psu",
        CategoryMetadata::known(
            "PSU",
            "The power supply unit that converts AC to DC power, providing the necessary energy to all components.\n\
A PSU is like a transformer that changes the electricity from the wall into the right kind of power for your computer's parts.",
        ),
    ),
    (
        "cpu",
        CategoryMetadata::known(
            "CPU",
            "The brain of the computer, responsible for processing data and instructions.\n\
A CPU is like the brain of your computer. It processes all the instructions and data to make your computer work.",
        ),
    ),
    (
        "gpu",
        CategoryMetadata::known(
            "GPU",
            "The graphics processing unit that handles the rendering of images and videos.\n\
A GPU is like a special artist that draws pictures on your computer screen. It makes your computer's display look pretty and smooth.",
        ),
    ),
    ("ssd", CategoryMetadata::known("SSD", STORAGE_DESCRIPTION)),
    (
        "case",
        CategoryMetadata::known(
            "Casing",
            "The protective shell that houses all the other components, providing structural support and ventilation.\n\
A case is like a big box that holds all your computer's parts. It protects them and helps them work together.",
        ),
    ),
    ("hdd", CategoryMetadata::known("HDD", STORAGE_DESCRIPTION)),
    (
        "motherboard",
        CategoryMetadata::known(
            "Motherboard",
            "The central hub that connects all components, providing power and data pathways.\n\
A motherboard is like the brain of your computer. It connects all the parts together and makes sure they can talk to each other.",
        ),
    ),
];
