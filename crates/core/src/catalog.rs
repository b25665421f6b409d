//! Fixed package catalog.
//!
//! The catalog is compiled into the binary. Every booking references a
//! package by `id`, and addons are scoped to the package that lists them.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageCategory {
    Family,
    Group,
    Luxury,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddonCategory {
    Lesson,
    Rental,
    Spa,
    Dining,
    Transfer,
    Other,
}

/// An optional, package-scoped extra charged per guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Addon {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "priceUSD")]
    pub price_usd: u64,
    #[serde(rename = "priceEUR")]
    pub price_eur: u64,
    pub category: AddonCategory,
}

/// A bundled travel offering. Prices are per guest, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: &'static str,
    pub slug: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub duration_nights: u32,
    #[serde(rename = "basePriceUSD")]
    pub base_price_usd: u64,
    #[serde(rename = "basePriceEUR")]
    pub base_price_eur: u64,
    pub category: PackageCategory,
    pub min_guests: u32,
    pub max_guests: u32,
    pub inclusions: &'static [&'static str],
    pub exclusions: &'static [&'static str],
    pub highlights: &'static [&'static str],
    pub addons: &'static [Addon],
}

impl Package {
    /// Whether `total_guests` falls inside `[min_guests, max_guests]`.
    pub fn fits(&self, total_guests: u32) -> bool {
        total_guests >= self.min_guests && total_guests <= self.max_guests
    }

    pub fn addon(&self, addon_id: &str) -> Option<&'static Addon> {
        self.addons.iter().find(|a| a.id == addon_id)
    }

    pub fn has_addon(&self, addon_id: &str) -> bool {
        self.addon(addon_id).is_some()
    }
}

// ---------------------------------------------------------------------------
// Data
// ---------------------------------------------------------------------------

pub const FAMILY_SKI_WEEK: &str = "family-ski-week";
pub const GROUP_SKI_SPA: &str = "group-ski-spa";
pub const LUXURY_CHALET_GOURMET: &str = "luxury-chalet-gourmet";

pub static PACKAGES: &[Package] = &[
    Package {
        id: FAMILY_SKI_WEEK,
        slug: "family-ski-week",
        title: "Family Ski Week",
        subtitle: "Perfect for families with children",
        description: "A complete family ski experience in Morzine with accommodation, \
                      lessons, and activities for all ages.",
        duration_nights: 7,
        base_price_usd: 3200,
        base_price_eur: 2950,
        category: PackageCategory::Family,
        min_guests: 2,
        max_guests: 8,
        inclusions: &[
            "7 nights accommodation in family chalet",
            "6-day Portes du Soleil lift passes",
            "Group ski lessons for all levels",
            "Equipment rental included",
            "Daily breakfast",
            "Airport transfers from Geneva",
            "Local concierge support",
        ],
        exclusions: &["Lunch and dinner", "Personal expenses", "Travel insurance"],
        highlights: &[
            "Child-friendly slopes and ski schools",
            "Family activities beyond skiing",
            "Dedicated kids club with qualified staff",
            "Flexible lesson scheduling",
        ],
        addons: &[
            Addon {
                id: "private-lessons",
                name: "Private Ski Lessons",
                description: "2-hour private lesson with certified instructor",
                price_usd: 120,
                price_eur: 110,
                category: AddonCategory::Lesson,
            },
            Addon {
                id: "childcare",
                name: "Full Day Childcare",
                description: "Professional childcare while parents ski",
                price_usd: 85,
                price_eur: 78,
                category: AddonCategory::Other,
            },
        ],
    },
    Package {
        id: GROUP_SKI_SPA,
        slug: "group-ski-spa",
        title: "Group Ski & Spa",
        subtitle: "Perfect for friends and groups",
        description: "Combine thrilling skiing with relaxing spa treatments in this \
                      perfect group getaway.",
        duration_nights: 5,
        base_price_usd: 2450,
        base_price_eur: 2250,
        category: PackageCategory::Group,
        min_guests: 4,
        max_guests: 12,
        inclusions: &[
            "5 nights shared accommodation",
            "4-day Portes du Soleil lift passes",
            "Group ski lessons",
            "Daily spa access",
            "Equipment rental",
            "Welcome dinner",
            "Airport transfers",
        ],
        exclusions: &[
            "Most meals",
            "Spa treatments (access only)",
            "Personal expenses",
        ],
        highlights: &[
            "Group discounts available",
            "Vibrant après-ski scene",
            "Luxury spa facilities",
            "Flexible group activities",
        ],
        addons: &[
            Addon {
                id: "spa-package",
                name: "Premium Spa Package",
                description: "Full body massage and facial treatment",
                price_usd: 180,
                price_eur: 165,
                category: AddonCategory::Spa,
            },
            Addon {
                id: "wine-tasting",
                name: "Alpine Wine Tasting",
                description: "Guided tasting of local French wines",
                price_usd: 65,
                price_eur: 60,
                category: AddonCategory::Dining,
            },
        ],
    },
    Package {
        id: LUXURY_CHALET_GOURMET,
        slug: "luxury-chalet-gourmet",
        title: "Luxury Chalet & Gourmet",
        subtitle: "Ultimate luxury experience",
        description: "The pinnacle of alpine luxury with private chef, premium \
                      accommodation, and exclusive experiences.",
        duration_nights: 7,
        base_price_usd: 6500,
        base_price_eur: 6000,
        category: PackageCategory::Luxury,
        min_guests: 2,
        max_guests: 10,
        inclusions: &[
            "Luxury private chalet",
            "6-day VIP lift passes",
            "Private ski instructor",
            "Daily housekeeping",
            "Private chef for all meals",
            "Premium wine selection",
            "Helicopter transfers available",
            "24/7 concierge service",
        ],
        exclusions: &[
            "Helicopter transfers (optional)",
            "Personal shopping",
            "Spa treatments",
        ],
        highlights: &[
            "Michelin-starred private chef",
            "Exclusive access to VIP areas",
            "Luxury spa in chalet",
            "Personalized itinerary planning",
        ],
        addons: &[
            Addon {
                id: "helicopter-tour",
                name: "Helicopter Mountain Tour",
                description: "Scenic helicopter tour of Mont Blanc",
                price_usd: 450,
                price_eur: 415,
                category: AddonCategory::Other,
            },
            Addon {
                id: "wine-cellar",
                name: "Premium Wine Cellar",
                description: "Access to exclusive wine collection",
                price_usd: 280,
                price_eur: 260,
                category: AddonCategory::Dining,
            },
        ],
    },
];

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

pub fn all() -> &'static [Package] {
    PACKAGES
}

pub fn find_package(id: &str) -> Option<&'static Package> {
    PACKAGES.iter().find(|p| p.id == id)
}

pub fn find_by_slug(slug: &str) -> Option<&'static Package> {
    PACKAGES.iter().find(|p| p.slug == slug)
}

pub fn by_category(category: PackageCategory) -> impl Iterator<Item = &'static Package> {
    PACKAGES.iter().filter(move |p| p.category == category)
}

/// Packages whose guest range contains `total_guests`, in catalog order.
pub fn packages_for_guests(total_guests: u32) -> Vec<&'static Package> {
    PACKAGES.iter().filter(|p| p.fits(total_guests)).collect()
}
