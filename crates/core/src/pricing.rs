//! Price estimation shared by the Package and Review steps.
//!
//! `estimate = base price × guests + Σ(selected addon price × guests)`, in
//! whole currency units with no rounding. Both steps call [`estimate`] so
//! the figures they show cannot diverge.

use serde::Serialize;

use crate::catalog::Package;

/// One selected addon line of an estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonLine {
    pub addon_id: &'static str,
    pub name: &'static str,
    #[serde(rename = "unitPriceUSD")]
    pub unit_price_usd: u64,
    #[serde(rename = "totalUSD")]
    pub total_usd: u64,
    #[serde(rename = "totalEUR")]
    pub total_eur: u64,
}

/// Non-binding price estimate for a package, guest count and addon selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEstimate {
    pub package_id: &'static str,
    pub guests: u32,
    #[serde(rename = "baseTotalUSD")]
    pub base_total_usd: u64,
    #[serde(rename = "baseTotalEUR")]
    pub base_total_eur: u64,
    pub addons: Vec<AddonLine>,
    #[serde(rename = "totalUSD")]
    pub total_usd: u64,
    #[serde(rename = "totalEUR")]
    pub total_eur: u64,
}

/// Estimate the price of `package` for `guests`, including every addon in
/// `selected` that the package offers. Unknown addon ids contribute nothing.
///
/// Addon lines follow catalog order, not selection order.
pub fn estimate<'a, I>(package: &'static Package, guests: u32, selected: I) -> PriceEstimate
where
    I: IntoIterator<Item = &'a str>,
{
    let selected: Vec<&str> = selected.into_iter().collect();
    let guests_u64 = u64::from(guests);

    let addons: Vec<AddonLine> = package
        .addons
        .iter()
        .filter(|addon| selected.contains(&addon.id))
        .map(|addon| AddonLine {
            addon_id: addon.id,
            name: addon.name,
            unit_price_usd: addon.price_usd,
            total_usd: addon.price_usd * guests_u64,
            total_eur: addon.price_eur * guests_u64,
        })
        .collect();

    let base_total_usd = package.base_price_usd * guests_u64;
    let base_total_eur = package.base_price_eur * guests_u64;
    let total_usd = base_total_usd + addons.iter().map(|a| a.total_usd).sum::<u64>();
    let total_eur = base_total_eur + addons.iter().map(|a| a.total_eur).sum::<u64>();

    PriceEstimate {
        package_id: package.id,
        guests,
        base_total_usd,
        base_total_eur,
        addons,
        total_usd,
        total_eur,
    }
}
